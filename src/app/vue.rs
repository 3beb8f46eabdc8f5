// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran en lecture seule (Frame + monospace, pas de TextEdit)
// - Pavé : grille 4 colonnes, 19 touches dans l’ordre fixe du noyau
//
// Note :
// - Les boutons portent des glyphes (÷, ×, −, ±) mais transmettent
//   toujours la Touche LOGIQUE : la machine ne voit jamais un glyphe.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{self, Touche, ORDRE_TOUCHES};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de bureau");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // Aligné à droite, comme une calculatrice de bureau.
        let texte = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        ui.monospace(egui::RichText::new(texte).size(28.0));
                    },
                );
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_bureau")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, touche) in ORDRE_TOUCHES.iter().enumerate() {
                    self.bouton_touche(ui, *touche);
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        // Seul le libellé d’effacement dépend de l’état (C vs AC).
        let label = match touche {
            Touche::Effacer => self.libelle_effacer().to_string(),
            autre => noyau::libelle(autre),
        };

        let mut resp = ui.add_sized([56.0, 40.0], egui::Button::new(label));
        if let Some(tip) = aide(touche, self.libelle_effacer()) {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.presser(touche);
        }
    }
}

/// Info-bulle des touches non évidentes.
fn aide(touche: Touche, libelle_effacer: &str) -> Option<&'static str> {
    match touche {
        Touche::Effacer => {
            if libelle_effacer == "C" {
                Some("Annule la saisie en cours")
            } else {
                Some("Remise à zéro")
            }
        }
        Touche::Signe => Some("Change le signe"),
        Touche::Pourcent => Some("Divise par 100"),
        _ => None,
    }
}
