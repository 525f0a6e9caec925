// src/main.rs
//
// Calculatrice ordinaire — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// - NATIF : fenêtre eframe, ou mode JSON ligne à ligne (--json) pour le contrat de service
// - WEB   : eframe::WebRunner + <canvas id="the_canvas_id">
//
// Traces : RUST_LOG (défaut "info"), écrites sur stderr pour garder stdout propre en mode JSON.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

mod app;
mod noyau;
mod service;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice ordinaire";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::{BufRead, Write};

    use anyhow::{anyhow, Result};
    use clap::Parser;
    use eframe::egui;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    use super::{service, AppCalc, TITRE_APP};
    use crate::app::etat::CHIFFRES_DEFAUT;

    #[derive(Debug, Parser)]
    #[command(name = "calculatrice_ordinaire", version, about = "Calculatrice ordinaire (f64)")]
    pub struct Options {
        /// Lit une requête JSON {"expression": "..."} par ligne sur stdin,
        /// écrit "<statut>\t<corps JSON>" par ligne sur stdout.
        #[arg(long)]
        pub json: bool,

        /// Décimales affichées au démarrage de la fenêtre.
        #[arg(long, default_value_t = CHIFFRES_DEFAUT)]
        pub chiffres: usize,
    }

    pub fn init_traces() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn mode_json() -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for ligne in stdin.lock().lines() {
            let ligne = ligne?;
            if ligne.trim().is_empty() {
                continue;
            }
            let reponse = service::traiter(&ligne);
            writeln!(out, "{}\t{}", reponse.statut, reponse.corps)?;
            out.flush()?;
        }

        Ok(())
    }

    pub fn fenetre(chiffres: usize) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([480.0, 640.0])
                .with_min_inner_size([380.0, 520.0]),
            ..Default::default()
        };

        info!(chiffres, "ouverture de la fenêtre");
        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::avec_chiffres(chiffres)))),
        )
        .map_err(|e| anyhow!("fenêtre eframe: {e}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let options = natif::Options::parse();
    natif::init_traces();

    if options.json {
        natif::mode_json()
    } else {
        natif::fenetre(options.chiffres)
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

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
