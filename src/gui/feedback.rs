use eframe::egui;

use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
}

/// Transient one-line status shown inside the active view ("Saved!",
/// "No records yet..."). Cleared whenever the user switches views.
#[derive(Default)]
pub struct Feedback {
    note: Option<(Tone, String)>,
}

impl Feedback {
    pub fn set(&mut self, tone: Tone, message: impl Into<String>) {
        self.note = Some((tone, message.into()));
    }

    pub fn clear(&mut self) {
        self.note = None;
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: &Theme) {
        if let Some((tone, message)) = &self.note {
            let (icon, color) = match tone {
                Tone::Success => ("✔", theme.green(ui.ctx())),
                Tone::Info => ("ℹ", theme.cyan(ui.ctx())),
                Tone::Warning => ("⚠", theme.orange(ui.ctx())),
            };

            ui.horizontal(|ui| {
                ui.colored_label(color, icon);
                ui.colored_label(color, message);
            });
            ui.add_space(4.0);
        }
    }
}
