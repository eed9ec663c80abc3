//! Noyau de la calculatrice à touches (sans UI)
//!
//! Organisation interne :
//! - touches.rs  : touches, catégories, opérateurs (+ correspondance clavier)
//! - format.rs   : texte d’écran <-> nombre
//! - eval.rs     : opération binaire gauche OP droite
//! - automate.rs : automate de saisie (chaînage, répétition de « = », CE/AC)

pub mod automate;
pub mod eval;
pub mod format;
pub mod touches;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use automate::{Affichage, Calculatrice, EtiquetteEffacer};
pub use touches::{Categorie, Chiffre, Operateur, Touche};
