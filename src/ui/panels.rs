use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::upload;

// ---------------------------------------------------------------------------
// Left side panel – upload widgets
// ---------------------------------------------------------------------------

/// Render the upload panel: preview, picker, analyze / reset buttons.
///
/// Returns true when the user pressed the analyze button; the app layer
/// owns the worker thread and starts the request.
pub fn upload_panel(ui: &mut Ui, state: &mut AppState) -> bool {
    let mut analyze_requested = false;

    ui.heading("Subir Imagen");
    ui.separator();

    // ---- Preview / drop hint ----
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_height(200.0);
        match &state.file {
            Some(file) => {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.add(
                        egui::Image::from_bytes(file.preview_uri.clone(), file.bytes.clone())
                            .max_width(ui.available_width())
                            .max_height(240.0),
                    );
                    ui.label(RichText::new(&file.name).small());
                });
            }
            None => {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.label("Arrastra una imagen aquí\no usa el botón para seleccionar");
                });
            }
        }
    });

    ui.add_space(4.0);

    if ui.button("Seleccionar imagen…").clicked() {
        open_file_dialog(state);
    }

    // ---- Error display ----
    if let Some(msg) = &state.error {
        ui.add_space(4.0);
        ui.colored_label(Color32::RED, msg);
    }

    ui.add_space(8.0);

    // ---- Actions ----
    ui.horizontal(|ui: &mut Ui| {
        let can_analyze = state.file.is_some() && !state.loading;
        if ui
            .add_enabled(can_analyze, egui::Button::new("Analizar Imagen"))
            .clicked()
        {
            analyze_requested = true;
        }
        if ui
            .add_enabled(!state.loading, egui::Button::new("Reiniciar"))
            .clicked()
        {
            state.reset();
        }
    });

    if state.loading {
        ui.add_space(8.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label("Procesando imagen con IA...");
        });
    }

    analyze_requested
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title plus selection summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("🍎 Detección de Calidad en Frutas");
        ui.separator();
        match &state.file {
            Some(file) => {
                ui.label(format!("{} ({} KB)", file.name, file.bytes.len() / 1024));
            }
            None => {
                ui.label("Detecta el estado de manzanas, plátanos y naranjas");
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Selecciona una imagen")
        .add_filter("Imágenes", &["png", "jpg", "jpeg", "webp", "bmp", "gif"])
        .pick_file();

    if let Some(path) = file {
        match upload::read_candidate(&path) {
            Ok(candidate) => {
                log::info!("Selected {} ({} bytes)", candidate.name, candidate.bytes.len());
                state.select_file(candidate);
            }
            Err(e) => {
                log::error!("Failed to read file: {e:#}");
                state.error = Some(format!("Error: {e:#}"));
            }
        }
    }
}
