use eframe::egui::{
    self,
    containers,
};

use super::app::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Reload,
    OpenConnectionSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        view: &mut View,
        store_online: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Reload From Sheet").clicked() {
                        action = Some(TopBarAction::Reload);
                    }
                    if ui.button("Connection Settings").clicked() {
                        action = Some(TopBarAction::OpenConnectionSettings);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                for (candidate, label) in [
                    (View::Dashboard, "Dashboard"),
                    (View::AddRecord, "Add Record"),
                    (View::ReviewList, "Review List"),
                    (View::RandomQuiz, "Random Quiz"),
                ] {
                    ui.selectable_value(view, candidate, label);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_store_indicator(ui, store_online);
                });
            });
        });

        action
    }

    fn show_store_indicator(ui: &mut egui::Ui, store_online: bool) {
        let color = if store_online {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if store_online {
            "Sheet loaded from the bridge"
        } else {
            "Sheet unreachable, running on an empty table"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Sheet").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
