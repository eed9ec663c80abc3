// src/main.rs
//
// Calculatrice Clavier — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : journal + config, puis eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::ConfigCalc;

/* ------------------------ Journal (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(filtre_defaut: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // RUST_LOG prime sur la configuration.
    let filtre = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filtre_defaut))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filtre)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let cfg = ConfigCalc::charger();
    installer_journal(&cfg.journal.filtre);

    tracing::info!(titre = %cfg.fenetre.titre, "démarrage");

    let taille = [cfg.fenetre.largeur, cfg.fenetre.hauteur];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.fenetre.titre.as_str())
            .with_inner_size(taille)
            .with_min_inner_size(taille),
        ..Default::default()
    };

    eframe::run_native(
        &cfg.fenetre.titre,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, ConfigCalc};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let cfg = ConfigCalc::charger();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(&cfg.fenetre.titre);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
