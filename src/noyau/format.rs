// src/noyau/format.rs
//
// Texte <-> nombre pour l’écran.
// Rendu « par défaut » : plus court aller-retour, sans séparateurs de milliers,
// Infinity / -Infinity / NaN tels quels, exposant hors de [1e-6, 1e21).

use thiserror::Error;

const SEUIL_EXPOSANT_HAUT: f64 = 1e21;
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErreurLecture {
    #[error("texte vide")]
    Vide,
    #[error("nombre invalide: {0:?}")]
    Invalide(String),
}

/* ------------------------ Rendu ------------------------ */

pub fn formater_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 s’affiche 0
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if (SEUIL_EXPOSANT_BAS..SEUIL_EXPOSANT_HAUT).contains(&a) {
        return format!("{x}");
    }

    // "1e21" -> "1e+21" ; "1.5e-7" inchangé
    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}

/* ------------------------ Lecture ------------------------ */

/// Lit le texte de l’écran. Accepte "4." (point final), les exposants,
/// et les valeurs spéciales produites par `formater_nombre`.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurLecture> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurLecture::Vide);
    }

    match s {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        "NaN" => return Ok(f64::NAN),
        _ => {}
    }

    // Le parseur std accepte aussi "inf"/"nan" : on les refuse (jamais produits ici).
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return Err(ErreurLecture::Invalide(s.to_string()));
    }

    s.parse::<f64>()
        .map_err(|_| ErreurLecture::Invalide(s.to_string()))
}
