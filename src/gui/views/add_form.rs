use std::mem;

use eframe::egui;

use crate::core::{
    Category,
    Record,
};
use crate::gui::theme::Theme;

/// Draft state of the add-record form. Empty question/answer text is
/// accepted; the table takes whatever was typed.
pub struct AddForm {
    category: Category,
    sub_type: String,
    question: String,
    answer: String,
    explanation: String,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            category: Category::Listening,
            sub_type: String::new(),
            question: String::new(),
            answer: String::new(),
            explanation: String::new(),
        }
    }
}

impl AddForm {
    /// Renders the form; returns the new record when Save is clicked and
    /// resets the draft for the next entry.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Option<Record> {
        ui.heading("Add Record");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Category:");
            egui::ComboBox::from_id_salt("category_combo")
                .selected_text(self.category.label())
                .show_ui(ui, |ui| {
                    for category in Category::ALL {
                        ui.selectable_value(&mut self.category, category, category.label());
                    }
                });

            ui.add_space(12.0);
            ui.label("Sub-type:");
            ui.add(
                egui::TextEdit::singleline(&mut self.sub_type)
                    .desired_width(160.0)
                    .hint_text("ex: Part 5"),
            );
        });

        ui.add_space(6.0);
        ui.label(theme.heading(ui.ctx(), "Question"));
        ui.add(
            egui::TextEdit::multiline(&mut self.question)
                .desired_width(f32::INFINITY)
                .desired_rows(3),
        );

        ui.add_space(6.0);
        ui.label(theme.heading(ui.ctx(), "Answer"));
        ui.add(egui::TextEdit::singleline(&mut self.answer).desired_width(f32::INFINITY));

        ui.add_space(6.0);
        ui.label(theme.heading(ui.ctx(), "Explanation"));
        ui.add(
            egui::TextEdit::multiline(&mut self.explanation)
                .desired_width(f32::INFINITY)
                .desired_rows(3),
        );

        ui.add_space(10.0);

        if ui.button("Save").clicked() {
            let record = Record::new(
                self.category,
                mem::take(&mut self.sub_type),
                mem::take(&mut self.question),
                mem::take(&mut self.answer),
                mem::take(&mut self.explanation),
            );
            return Some(record);
        }

        None
    }
}
