// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : texte de l’automate, verbatim (y compris "4." / "-Infinity")
// - Pavé 4×5 : table (libellé, identifiant, catégorie), façon attributs data-* HTML
// - Opérateur engagé dessiné sélectionné, bouton d’effacement libellé AC/CE
// - Clavier : texte via Touche::depuis_caractere ; Enter = égal ; Escape/Delete = effacer

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Touche;

const TAILLE_BOUTON: [f32; 2] = [64.0, 52.0];
const TAILLE_ECRAN: f32 = 40.0;

/// Bouton du pavé : libellé + (identifiant, catégorie) transmis à l’automate.
struct Bouton {
    label: &'static str,
    id: &'static str,
    categorie: &'static str,
}

const fn bp(label: &'static str, id: &'static str, categorie: &'static str) -> Option<Bouton> {
    Some(Bouton {
        label,
        id,
        categorie,
    })
}

const PAVE: [[Option<Bouton>; 4]; 5] = [
    [
        bp("+", "plus", "operator"),
        bp("−", "minus", "operator"),
        bp("×", "times", "operator"),
        bp("÷", "divide", "operator"),
    ],
    [
        bp("7", "7", "number"),
        bp("8", "8", "number"),
        bp("9", "9", "number"),
        bp(".", "decimal", "decimal"),
    ],
    [
        bp("4", "4", "number"),
        bp("5", "5", "number"),
        bp("6", "6", "number"),
        bp("AC", "clear", "clear"),
    ],
    [
        bp("1", "1", "number"),
        bp("2", "2", "number"),
        bp("3", "3", "number"),
        bp("=", "equal", "equal"),
    ],
    [bp("0", "0", "number"), None, None, None],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    /// Lit le clavier physique (une fois par frame).
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|ev| -> Vec<Touche> {
                    match ev {
                        egui::Event::Text(t) => {
                            t.chars().filter_map(Touche::depuis_caractere).collect()
                        }
                        egui::Event::Key {
                            key, pressed: true, ..
                        } => touche_speciale(*key).into_iter().collect(),
                        _ => Vec::new(),
                    }
                })
                .collect()
        });

        for t in touches {
            self.appuyer(t);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage.texte)
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in &PAVE {
                    for bouton in rangee {
                        match bouton {
                            Some(b) => self.bouton(ui, b),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, b: &Bouton) {
        // Le libellé du bouton d’effacement suit l’automate (AC / CE).
        let label = match b.categorie {
            "clear" => self.affichage.etiquette_effacer.texte(),
            _ => b.label,
        };
        let engage = self
            .affichage
            .operateur_engage
            .is_some_and(|op| op.identifiant() == b.id);

        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(label).size(20.0)).selected(engage),
        );
        if resp.clicked() {
            self.appuyer_evenement(b.id, b.categorie);
        }
    }
}

/// Touches sans événement texte.
fn touche_speciale(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Escape | egui::Key::Delete => Some(Touche::Effacer),
        _ => None,
    }
}
