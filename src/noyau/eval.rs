//! Noyau — évaluation binaire (gauche OP droite), flottants IEEE-754.
//!
//! Pas de garde sur la division par zéro : Infinity / -Infinity / NaN
//! se propagent et s’affichent tels quels.

use super::touches::Operateur;

impl Operateur {
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Divise => gauche / droite,
        }
    }
}
