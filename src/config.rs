//! src/config.rs
//!
//! Configuration (fichier TOML facultatif).
//!
//! Contrats :
//! - Chaque champ a une valeur par défaut : un fichier partiel reste valide.
//! - Fichier absent => défauts. Fichier illisible ou invalide => défauts + avertissement.
//! - En wasm32 : pas de système de fichiers, toujours les défauts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice Clavier";

/// Filtre de journal par défaut (écrasé par RUST_LOG).
const FILTRE_DEFAUT: &str = "calculatrice_clavier=info";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture du fichier de configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration TOML invalide: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub titre: String,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            titre: TITRE_APP.to_string(),
            largeur: 340.0,
            hauteur: 480.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Journal {
    pub filtre: String,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            filtre: FILTRE_DEFAUT.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigCalc {
    pub fenetre: Fenetre,
    pub journal: Journal,
}

impl ConfigCalc {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }

    /// <config_dir>/calculatrice_clavier/config.toml
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice_clavier").join("config.toml"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn lire_fichier(chemin: &std::path::Path) -> Result<Option<Self>, ErreurConfig> {
        if !chemin.exists() {
            return Ok(None);
        }
        let texte = std::fs::read_to_string(chemin)?;
        Self::depuis_toml(&texte).map(Some)
    }

    /// Charge la configuration sans jamais échouer.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin() else {
            tracing::info!("pas de répertoire de configuration, défauts utilisés");
            return Self::default();
        };

        match Self::lire_fichier(&chemin) {
            Ok(Some(cfg)) => {
                tracing::info!(chemin = %chemin.display(), "configuration chargée");
                cfg
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(chemin = %chemin.display(), "{e}; défauts utilisés");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> Self {
        Self::default()
    }
}
