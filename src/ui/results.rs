use eframe::egui::{Color32, RichText, Ui};

use crate::classify::labels::{self, Freshness};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results panel (central)
// ---------------------------------------------------------------------------

/// Render the analysis results in the central panel.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let result = match &state.result {
        Some(r) => r,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Sube una imagen para ver los resultados del análisis");
            });
            return;
        }
    };

    // The descriptor is derived from the raw label on every render.
    let descriptor = labels::resolve(&result.predicted_class);
    let color = status_color(descriptor.status);

    ui.add_space(8.0);
    ui.heading("Resultados del Análisis");
    ui.separator();
    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(descriptor.emoji).size(32.0));
        ui.label(RichText::new(&descriptor.name).size(20.0).strong());
        ui.label(
            RichText::new(descriptor.status.verdict())
                .size(20.0)
                .strong()
                .color(color),
        );
    });

    ui.add_space(4.0);
    ui.label(format!("Confianza: {}", result.confidence_percent()));

    // ---- Per-class probabilities (when the backend sends them) ----
    if let Some(probs) = &result.probabilities {
        ui.add_space(12.0);
        ui.strong("Probabilidades por clase");
        ui.separator();

        let mut entries: Vec<(&String, &f64)> = probs.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(a.1));

        for (label, p) in entries {
            let d = labels::resolve(label);
            ui.label(format!("{} {} · {:.1}%", d.emoji, d.name, p * 100.0));
        }
    }
}

fn status_color(status: Freshness) -> Color32 {
    match status {
        Freshness::Good => Color32::from_rgb(22, 163, 74),
        Freshness::Bad => Color32::from_rgb(220, 38, 38),
        Freshness::Unknown => Color32::GRAY,
    }
}
