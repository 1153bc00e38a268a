//! Breed combo box and the search trigger.

use super::UiApp;
use doggy_core::PLACEHOLDER_OPTION;
use eframe::egui;

impl UiApp {
    pub(super) fn render_search_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            let mut picked: Option<String> = None;
            egui::ComboBox::from_id_salt("breed-select")
                .selected_text(self.model.display_value().to_string())
                .show_ui(ui, |ui| {
                    // The placeholder is always present and re-selectable.
                    if ui
                        .selectable_label(
                            self.model.selected_breed().is_none(),
                            PLACEHOLDER_OPTION,
                        )
                        .clicked()
                    {
                        picked = Some(PLACEHOLDER_OPTION.to_string());
                    }
                    for breed in self.model.breeds() {
                        let chosen = self.model.selected_breed() == Some(breed.as_str());
                        if ui.selectable_label(chosen, breed.as_str()).clicked() {
                            picked = Some(breed.clone());
                        }
                    }
                });
            if let Some(value) = picked {
                if self.model.select_breed(&value) {
                    tracing::debug!("breed selected: {value}");
                }
            }

            if ui
                .add_enabled(self.model.can_search(), egui::Button::new("Search"))
                .clicked()
            {
                if let Some(ticket) = self.model.begin_search() {
                    self.status = format!("Searching {}...", ticket.breed);
                    self.spawn_image_fetch(ctx.clone(), ticket);
                }
            }

            if let Some(err) = self.model.breed_error() {
                ui.colored_label(egui::Color32::LIGHT_RED, err);
            } else if !self.status.is_empty() {
                ui.label(&self.status);
            }
        });
    }
}
