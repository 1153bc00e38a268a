//! Application shell: owns the search model, spawns the fetch worker
//! threads, and drains their completions every frame.

mod results;
mod search;

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};
use doggy_core::{ApiError, DogApi, SearchModel, SearchTicket};
use eframe::{App, Frame, egui};

pub const APP_VERSION: &str = env!("DOGGY_VERSION");

/// Completions delivered from fetch threads back to the UI thread.
enum FetchDone {
    Breeds(Result<Vec<String>, ApiError>),
    Images {
        token: u64,
        outcome: Result<Vec<String>, ApiError>,
    },
}

pub struct UiApp {
    model: SearchModel,
    api: Arc<dyn DogApi>,
    tx: Sender<FetchDone>,
    rx: Receiver<FetchDone>,
    status: String,
}

impl UiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: Arc<dyn DogApi>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let (tx, rx) = unbounded();
        let app = Self {
            model: SearchModel::new(),
            api,
            tx,
            rx,
            status: String::new(),
        };
        app.spawn_breed_fetch(cc.egui_ctx.clone());
        app
    }

    /// The one breed list fetch per app instance, issued at startup.
    fn spawn_breed_fetch(&self, ctx: egui::Context) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let outcome = api.fetch_breeds();
            // Send only fails when the app is already gone.
            let _ = tx.send(FetchDone::Breeds(outcome));
            ctx.request_repaint();
        });
    }

    fn spawn_image_fetch(&self, ctx: egui::Context, ticket: SearchTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let outcome = api.fetch_images_for_breed(&ticket.breed);
            let _ = tx.send(FetchDone::Images {
                token: ticket.token,
                outcome,
            });
            ctx.request_repaint();
        });
    }

    fn drain_fetches(&mut self) {
        while let Ok(done) = self.rx.try_recv() {
            match done {
                FetchDone::Breeds(Ok(breeds)) => {
                    tracing::info!("breed list loaded ({} breeds)", breeds.len());
                    self.model.breeds_loaded(breeds);
                }
                FetchDone::Breeds(Err(err)) => {
                    // The error line next to the combo box reports this.
                    self.model.breeds_failed(&err);
                }
                FetchDone::Images { token, outcome } => {
                    if self.model.finish_search(token, outcome) {
                        self.status.clear();
                    }
                }
            }
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.drain_fetches();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Doggy Directory");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("v{APP_VERSION}"));
                });
            });
            self.render_search_panel(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_results_panel(ui);
        });
    }
}
