//! Results panel: placeholder, loading indicator, error line, or the
//! fetched images with their count.

use super::UiApp;
use eframe::egui;

const IMAGE_SIZE: f32 = 180.0;

impl UiApp {
    pub(super) fn render_results_panel(&mut self, ui: &mut egui::Ui) {
        if self.model.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
            return;
        }

        if let Some(err) = self.model.search_error() {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Search failed: {err}"));
        }

        if self.model.shows_placeholder() {
            self.render_placeholder_image(ui);
            return;
        }

        if let Some(caption) = self.model.results_caption() {
            ui.label(caption);
            ui.add_space(6.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for url in self.model.results() {
                            ui.add(
                                egui::Image::new(url.as_str())
                                    .fit_to_exact_size(egui::Vec2::splat(IMAGE_SIZE))
                                    .corner_radius(4.0),
                            );
                        }
                    });
                });
        }
    }

    /// The single pre-search placeholder frame.
    fn render_placeholder_image(&self, ui: &mut egui::Ui) {
        let desired = egui::Vec2::splat(IMAGE_SIZE);
        let (resp, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        let r = resp.rect;
        painter.rect_filled(r, 4.0, egui::Color32::from_gray(40));
        painter.rect_stroke(
            r,
            4.0,
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            egui::StrokeKind::Inside,
        );
        painter.text(
            r.center(),
            egui::Align2::CENTER_CENTER,
            "🐶",
            egui::FontId::proportional(48.0),
            egui::Color32::GRAY,
        );
    }
}
