// src/noyau/touches.rs
//
// Modèle des touches : identifiant stable + catégorie.
// La catégorie est un enum fermé : une catégorie invalide n’est pas représentable.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Identifiant stable (celui des événements bruts).
    pub fn identifiant(self) -> &'static str {
        match self {
            Operateur::Plus => "plus",
            Operateur::Moins => "minus",
            Operateur::Fois => "times",
            Operateur::Divise => "divide",
        }
    }
}

/// Catégorie d’une touche (sert aussi de « catégorie précédente » dans l’automate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Categorie {
    Nombre,
    Decimale,
    Operateur,
    Egal,
    Effacer,
}

impl Categorie {
    pub fn nom(self) -> &'static str {
        match self {
            Categorie::Nombre => "number",
            Categorie::Decimale => "decimal",
            Categorie::Operateur => "operator",
            Categorie::Egal => "equal",
            Categorie::Effacer => "clear",
        }
    }

    pub fn depuis_nom(nom: &str) -> Result<Self, CategorieInconnue> {
        match nom {
            "number" => Ok(Categorie::Nombre),
            "decimal" => Ok(Categorie::Decimale),
            "operator" => Ok(Categorie::Operateur),
            "equal" => Ok(Categorie::Egal),
            "clear" => Ok(Categorie::Effacer),
            autre => Err(CategorieInconnue(autre.to_string())),
        }
    }
}

/// Chiffre 0..=9. Champ privé : seul `Chiffre::new` construit une valeur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn new(d: u8) -> Option<Self> {
        (d <= 9).then_some(Chiffre(d))
    }

    pub fn caractere(self) -> char {
        char::from(b'0' + self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(Chiffre),
    Decimale,
    Operateur(Operateur),
    Egal,
    Effacer,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("touche inconnue: {0:?}")]
pub struct ToucheInconnue(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("catégorie inconnue: {0:?}")]
pub struct CategorieInconnue(pub String);

impl Touche {
    /// Chiffre borné : None hors 0..=9.
    pub fn chiffre(d: u8) -> Option<Self> {
        Chiffre::new(d).map(Touche::Chiffre)
    }

    pub fn categorie(self) -> Categorie {
        match self {
            Touche::Chiffre(_) => Categorie::Nombre,
            Touche::Decimale => Categorie::Decimale,
            Touche::Operateur(_) => Categorie::Operateur,
            Touche::Egal => Categorie::Egal,
            Touche::Effacer => Categorie::Effacer,
        }
    }

    /// Identifiants : "0".."9", decimal, plus, minus, times, divide, equal, clear.
    pub fn depuis_identifiant(id: &str) -> Result<Self, ToucheInconnue> {
        let inconnue = || ToucheInconnue(id.to_string());

        match id {
            "decimal" => Ok(Touche::Decimale),
            "equal" => Ok(Touche::Egal),
            "clear" => Ok(Touche::Effacer),
            _ => {
                if let Some(op) = Operateur::TOUS.into_iter().find(|op| op.identifiant() == id) {
                    return Ok(Touche::Operateur(op));
                }
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c
                        .to_digit(10)
                        .and_then(|d| Touche::chiffre(d as u8))
                        .ok_or_else(inconnue),
                    _ => Err(inconnue()),
                }
            }
        }
    }

    /// Clavier physique (événements texte). Enter/Escape sont gérés côté vue.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| Touche::chiffre(d as u8)),
            '.' | ',' => Some(Touche::Decimale),
            '+' => Some(Touche::Operateur(Operateur::Plus)),
            '-' => Some(Touche::Operateur(Operateur::Moins)),
            '*' | 'x' | 'X' => Some(Touche::Operateur(Operateur::Fois)),
            '/' => Some(Touche::Operateur(Operateur::Divise)),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(d) => write!(f, "{}", d.caractere()),
            Touche::Decimale => f.write_str("decimal"),
            Touche::Operateur(op) => f.write_str(op.identifiant()),
            Touche::Egal => f.write_str("equal"),
            Touche::Effacer => f.write_str("clear"),
        }
    }
}
