//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’automate du noyau et le dernier instantané affiché.
//!
//! Contrats :
//! - Aucune règle de calcul ici : tout passe par `Calculatrice::appuyer`.
//! - Deux portes d’entrée : `appuyer_evenement` (pavé, identifiant + catégorie)
//!   et `appuyer` (clavier, touche déjà typée). Les deux finissent dans l’automate.

use crate::noyau::{Affichage, Calculatrice, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    calc: Calculatrice,

    // --- sortie (puits écran + bouton d’effacement) ---
    pub affichage: Affichage,
}

impl Default for AppCalc {
    fn default() -> Self {
        let calc = Calculatrice::new();
        let affichage = calc.affichage();
        Self { calc, affichage }
    }
}

impl AppCalc {
    pub fn appuyer(&mut self, touche: Touche) {
        self.affichage = self.calc.appuyer(touche);
    }

    /// Bouton du pavé : (identifiant, catégorie) ; un événement incohérent est ignoré.
    pub fn appuyer_evenement(&mut self, id: &str, categorie: &str) {
        self.affichage = self.calc.appuyer_evenement(id, categorie);
    }

    pub fn calculatrice(&self) -> &Calculatrice {
        &self.calc
    }
}
