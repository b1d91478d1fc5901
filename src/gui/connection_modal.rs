use eframe::egui;

use crate::persistence::ConnectionConfig;
use crate::sheets::SheetsClient;

/// Edits how the app reaches the sheet bridge. Returns the new config from
/// `show` when the user saves; the caller persists it and rebuilds the store.
pub struct ConnectionModal {
    open: bool,
    edited: ConnectionConfig,
    original: ConnectionConfig,
    api_key_input: String,
    probe_status: Option<String>,
}

impl ConnectionModal {
    pub fn new() -> Self {
        Self {
            open: false,
            edited: ConnectionConfig::default(),
            original: ConnectionConfig::default(),
            api_key_input: String::new(),
            probe_status: None,
        }
    }

    pub fn open_settings(&mut self, current: ConnectionConfig) {
        self.api_key_input = current.api_key.clone().unwrap_or_default();
        self.edited = current.clone();
        self.original = current;
        self.probe_status = None;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.edited != self.original
    }

    fn sync_api_key(&mut self) {
        let trimmed = self.api_key_input.trim();
        self.edited.api_key = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<ConnectionConfig> {
        if !self.open {
            return None;
        }

        let mut result: Option<ConnectionConfig> = None;

        let modal = egui::Modal::new(egui::Id::new("connection_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Sheet Bridge Connection");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Endpoint:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.edited.endpoint)
                        .desired_width(f32::INFINITY)
                        .hint_text("http://localhost:9414/"),
                );
            });

            ui.horizontal(|ui| {
                ui.label("Worksheet:");
                ui.text_edit_singleline(&mut self.edited.worksheet);
            });

            ui.horizontal(|ui| {
                ui.label("API key:");
                if ui
                    .add(egui::TextEdit::singleline(&mut self.api_key_input).hint_text("optional"))
                    .changed()
                {
                    self.sync_api_key();
                }
            });

            ui.add_space(6.0);

            if ui.button("Test Connection").clicked() {
                self.sync_api_key();
                self.probe_status = Some(match SheetsClient::new(&self.edited) {
                    Ok(client) if client.ping() => "Bridge reachable.".to_string(),
                    Ok(_) => "Bridge did not answer.".to_string(),
                    Err(e) => format!("Client setup failed: {e}"),
                });
            }

            if let Some(status) = &self.probe_status {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, "ℹ");
                    ui.label(status);
                });
            }

            ui.separator();

            let is_dirty = self.is_dirty();

            ui.horizontal(|ui| {
                let save_clicked = ui.add_enabled(is_dirty, egui::Button::new("Save")).clicked();
                let cancel_clicked = ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    self.sync_api_key();
                    self.original = self.edited.clone();
                    result = Some(self.edited.clone());
                    ui.close();
                } else if cancel_clicked {
                    self.edited = self.original.clone();
                    self.api_key_input = self.edited.api_key.clone().unwrap_or_default();
                    self.probe_status = None;
                } else if reset_clicked {
                    self.edited = ConnectionConfig::default();
                    self.api_key_input = String::new();
                    self.probe_status = None;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for ConnectionModal {
    fn default() -> Self {
        Self::new()
    }
}
