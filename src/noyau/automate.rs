//! Noyau — automate de saisie (une touche à la fois).
//!
//! État :
//! - `texte`       : écran (numéral partiel ou complet, au plus un point)
//! - `operande`    : opérande gauche en attente
//! - `operateur`   : opérateur en attente
//! - `modificateur`: second opérande du dernier « = » (répétition de « = »)
//! - `precedente`  : catégorie de la touche précédente (discriminant de l’automate)
//!
//! Contrats :
//! - Aucune touche ne fait échouer l’automate (pas de canal d’erreur).
//! - Comportement = fonction pure de (état, touche) : rejouable en test.
//! - Deux « clear » consécutifs ramènent toujours à l’état initial.

use std::fmt;

use tracing::{debug, warn};

use super::format::{formater_nombre, lire_nombre};
use super::touches::{Categorie, Chiffre, Operateur, Touche};

const TEXTE_ZERO: &str = "0";
const TEXTE_ZERO_POINT: &str = "0.";

/// Libellé du bouton d’effacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtiquetteEffacer {
    /// All-clear : rien de saisi depuis le dernier effacement.
    AC,
    /// Clear-entry : une saisie existe.
    CE,
}

impl EtiquetteEffacer {
    pub fn texte(self) -> &'static str {
        match self {
            EtiquetteEffacer::AC => "AC",
            EtiquetteEffacer::CE => "CE",
        }
    }
}

impl fmt::Display for EtiquetteEffacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

/// Instantané rendu après chaque touche (pour les « puits » écran / bouton).
#[derive(Clone, Debug, PartialEq)]
pub struct Affichage {
    pub texte: String,
    pub etiquette_effacer: EtiquetteEffacer,
    /// Opérateur dessiné « enfoncé » (relâché par toute autre touche).
    pub operateur_engage: Option<Operateur>,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    texte: String,
    operande: Option<f64>,
    operateur: Option<Operateur>,
    modificateur: Option<f64>,
    precedente: Option<Categorie>,
    operateur_engage: Option<Operateur>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            texte: TEXTE_ZERO.to_string(),
            operande: None,
            operateur: None,
            modificateur: None,
            precedente: None,
            operateur_engage: None,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn operande_en_attente(&self) -> Option<f64> {
        self.operande
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn valeur_modificatrice(&self) -> Option<f64> {
        self.modificateur
    }

    pub fn categorie_precedente(&self) -> Option<Categorie> {
        self.precedente
    }

    /// Dérivée de la catégorie précédente : AC au départ et juste après un effacement.
    pub fn etiquette_effacer(&self) -> EtiquetteEffacer {
        match self.precedente {
            None | Some(Categorie::Effacer) => EtiquetteEffacer::AC,
            Some(_) => EtiquetteEffacer::CE,
        }
    }

    /// Vrai si aucune opération n’est en attente (écran à part).
    pub fn est_vierge(&self) -> bool {
        self.operande.is_none() && self.operateur.is_none() && self.modificateur.is_none()
    }

    pub fn affichage(&self) -> Affichage {
        Affichage {
            texte: self.texte.clone(),
            etiquette_effacer: self.etiquette_effacer(),
            operateur_engage: self.operateur_engage,
        }
    }

    /* ------------------------ Entrées ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reinitialiser(&mut self) {
        *self = Self::default();
    }

    /// Forme brute (identifiant, catégorie) : tout événement incohérent est ignoré.
    pub fn appuyer_evenement(&mut self, id: &str, categorie: &str) -> Affichage {
        let categorie = match Categorie::depuis_nom(categorie) {
            Ok(c) => c,
            Err(e) => {
                warn!(id, "événement ignoré: {e}");
                return self.affichage();
            }
        };

        match Touche::depuis_identifiant(id) {
            Ok(touche) if touche.categorie() == categorie => self.appuyer(touche),
            Ok(touche) => {
                warn!(
                    id,
                    attendue = touche.categorie().nom(),
                    recue = categorie.nom(),
                    "événement ignoré: catégorie incohérente"
                );
                self.affichage()
            }
            Err(e) => {
                warn!("événement ignoré: {e}");
                self.affichage()
            }
        }
    }

    /// Traite une touche jusqu’au bout, puis renvoie l’instantané.
    pub fn appuyer(&mut self, touche: Touche) -> Affichage {
        let precedente = self.precedente;

        // Tout appui relâche l’opérateur engagé ; seul un opérateur le ré-engage.
        self.operateur_engage = None;

        match touche {
            Touche::Chiffre(d) => self.chiffre(d, precedente),
            Touche::Decimale => self.decimale(precedente),
            Touche::Operateur(op) => self.operateur(op, precedente),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(precedente),
        }

        self.precedente = Some(touche.categorie());

        debug!(
            touche = %touche,
            ecran = %self.texte,
            etiquette = %self.etiquette_effacer(),
            "touche traitée"
        );

        self.affichage()
    }

    /* ------------------------ Règles par catégorie ------------------------ */

    fn chiffre(&mut self, d: Chiffre, precedente: Option<Categorie>) {
        let c = d.caractere();

        match precedente {
            Some(Categorie::Egal) => {
                self.reinitialiser();
                self.texte = c.to_string();
            }
            Some(Categorie::Operateur) => {
                self.texte = c.to_string();
            }
            _ if self.texte == TEXTE_ZERO => {
                self.texte = c.to_string();
            }
            _ => self.texte.push(c),
        }
    }

    fn decimale(&mut self, precedente: Option<Categorie>) {
        match precedente {
            Some(Categorie::Egal) => {
                self.reinitialiser();
                self.texte = TEXTE_ZERO_POINT.to_string();
            }
            Some(Categorie::Operateur) => {
                self.texte = TEXTE_ZERO_POINT.to_string();
            }
            _ => {
                if !self.texte.contains('.') {
                    self.texte.push('.');
                }
            }
        }
    }

    fn operateur(&mut self, op: Operateur, precedente: Option<Categorie>) {
        self.operateur_engage = Some(op);

        let enchaine = !matches!(precedente, Some(Categorie::Operateur | Categorie::Egal));

        match (self.operande, self.operateur) {
            // Chaînage gauche -> droite : "9 + 5 +" affiche 14.
            (Some(gauche), Some(op_attente)) if enchaine => {
                let droite = self.lire_ecran();
                let resultat = op_attente.appliquer(gauche, droite);
                self.texte = formater_nombre(resultat);
                self.operande = Some(resultat);
            }
            _ => {
                self.operande = Some(self.lire_ecran());
            }
        }

        self.operateur = Some(op);
    }

    fn egal(&mut self) {
        match (self.operande, self.operateur) {
            (Some(gauche), Some(op)) => {
                let droite = match self.modificateur {
                    Some(m) => m,
                    None => self.lire_ecran(),
                };
                let resultat = op.appliquer(gauche, droite);
                self.texte = formater_nombre(resultat);
                self.operande = Some(resultat);
                self.modificateur = Some(droite);
            }
            // Rien en attente : normalisation seule ("2." -> "2").
            _ => {
                self.texte = formater_nombre(self.lire_ecran());
            }
        }
    }

    fn effacer(&mut self, precedente: Option<Categorie>) {
        if precedente == Some(Categorie::Effacer) {
            self.operande = None;
            self.operateur = None;
            self.modificateur = None;
        }
        self.texte = TEXTE_ZERO.to_string();
    }

    /// Écran -> nombre. Un texte illisible se dégrade en NaN (journalisé), sans panique.
    fn lire_ecran(&self) -> f64 {
        lire_nombre(&self.texte).unwrap_or_else(|e| {
            warn!(ecran = %self.texte, "lecture dégradée en NaN: {e}");
            f64::NAN
        })
    }
}
