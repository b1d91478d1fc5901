use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::core::RecordTable;
use crate::gui::theme::Theme;

/// Full table listing in insertion order. Returns the zero-based position of
/// a row whose delete button was clicked this frame.
pub fn show(ui: &mut egui::Ui, table: &RecordTable, theme: &Theme) -> Option<usize> {
    ui.heading("Review List");
    ui.add_space(8.0);

    if table.is_empty() {
        ui.colored_label(theme.cyan(ui.ctx()), "Nothing to review yet. The mistake log is empty.");
        return None;
    }

    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    let mut delete_index: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(30.0))
        .column(Column::auto().at_least(85.0))
        .column(Column::auto().at_least(85.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(30.0))
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.label("#");
            });
            header.col(|ui| {
                ui.label("Date");
            });
            header.col(|ui| {
                ui.label("Category");
            });
            header.col(|ui| {
                ui.label("Sub-type");
            });
            header.col(|ui| {
                ui.label("Question");
            });
            header.col(|ui| {
                ui.label("Answer");
            });
            header.col(|ui| {
                ui.label("Misses");
            });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            body.rows(text_height, table.len(), |mut row| {
                let index = row.index();
                let record = &table.records()[index];

                row.col(|ui| {
                    ui.label(index.to_string());
                });
                row.col(|ui| {
                    ui.label(&record.date);
                });
                row.col(|ui| {
                    let color = theme.category_color(ui.ctx(), record.category);
                    ui.colored_label(color, record.category.label());
                });
                row.col(|ui| {
                    ui.label(&record.sub_type);
                });
                row.col(|ui| {
                    ui.label(&record.question).on_hover_text(&record.explanation);
                });
                row.col(|ui| {
                    ui.label(&record.answer);
                });
                row.col(|ui| {
                    ui.label(record.error_count.to_string());
                });
                row.col(|ui| {
                    if ui.button("🗑").on_hover_text("Delete this record").clicked() {
                        delete_index = Some(index);
                    }
                });
            });
        });

    delete_index
}
