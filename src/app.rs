use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use eframe::egui;

use crate::classify::client::Classifier;
use crate::classify::model::ClassificationResult;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::ui::{panels, results};
use crate::upload::CandidateFile;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// One finished classification attempt, tagged with its request token so
/// superseded requests can be told apart from the current one.
struct AnalysisOutcome {
    token: u64,
    outcome: Result<ClassificationResult, AppError>,
}

pub struct FrutaCheckApp {
    pub state: AppState,
    classifier: Arc<Classifier>,
    tx: Sender<AnalysisOutcome>,
    rx: Receiver<AnalysisOutcome>,
}

impl FrutaCheckApp {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: AppState::default(),
            classifier: Arc::new(Classifier::new(config.endpoint)),
            tx,
            rx,
        }
    }

    /// Kick off one classification request on a worker thread. The UI keeps
    /// painting; the completion comes back through the channel.
    fn start_analysis(&mut self, ctx: &egui::Context) {
        let Some((file, token)) = self.state.begin_analysis() else {
            return;
        };
        log::info!("Analyzing {} ({} bytes)", file.name, file.bytes.len());

        let classifier = Arc::clone(&self.classifier);
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let outcome = classifier.classify(&file.name, file.mime, file.bytes.to_vec());
            // The receiver only disappears on shutdown.
            let _ = tx.send(AnalysisOutcome { token, outcome });
            ctx.request_repaint();
        });
    }

    /// Apply finished requests; the state drops superseded ones.
    fn poll_worker(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match &msg.outcome {
                Ok(result) => log::info!(
                    "Backend answered: {} ({:.3})",
                    result.predicted_class,
                    result.confidence
                ),
                Err(AppError::NetworkOrParse { reason }) => {
                    log::error!("Analysis failed: {reason}");
                }
                Err(err) => log::error!("Analysis failed: {err}"),
            }
            self.state.finish_analysis(msg.token, msg.outcome);
        }
    }

    /// Treat a file dropped on the window like a picker selection.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        // Native drops carry a path; some platforms hand over the bytes.
        if let Some(path) = &file.path {
            match crate::upload::read_candidate(path) {
                Ok(candidate) => self.state.select_file(candidate),
                Err(e) => {
                    log::error!("Failed to read dropped file: {e:#}");
                    self.state.error = Some(format!("Error: {e:#}"));
                }
            }
        } else if let Some(bytes) = file.bytes {
            let name = if file.name.is_empty() {
                "imagen".to_string()
            } else {
                file.name.clone()
            };
            self.state.select_file(CandidateFile {
                name,
                bytes: bytes.to_vec(),
            });
        }
    }
}

impl eframe::App for FrutaCheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.handle_dropped_files(ctx);

        // Superseded previews must leave the loader cache, or repeated
        // uploads accumulate decoded images for the whole session.
        for uri in self.state.take_released_previews() {
            ctx.forget_image(&uri);
        }

        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: upload ----
        let mut analyze_requested = false;
        egui::SidePanel::left("upload_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                analyze_requested = panels::upload_panel(ui, &mut self.state);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_panel(ui, &self.state);
        });

        if analyze_requested {
            self.start_analysis(ctx);
        }
    }
}
