use eframe::egui::{
    self,
    RichText,
};

use crate::core::{
    quiz::QuizState,
    QuizSession,
    Record,
    RecordTable,
};
use crate::gui::theme::Theme;

/// What the user asked the quiz state machine to do this frame. The app
/// layer applies the transition (and the persist, for an incorrect answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Draw,
    Reveal,
    Correct,
    Incorrect,
    Skip,
}

pub fn show(
    ui: &mut egui::Ui,
    table: &RecordTable,
    quiz: &QuizSession,
    theme: &Theme,
) -> Option<QuizAction> {
    ui.heading("Random Quiz");
    ui.add_space(8.0);

    if table.is_empty() {
        ui.colored_label(theme.orange(ui.ctx()), "⚠ No questions in the pool yet!");
        return None;
    }

    let mut action = None;

    match quiz.state() {
        QuizState::Idle => {
            ui.label("Draw a random question from your mistake pool.");
            ui.add_space(8.0);
            if ui.button("Draw Question").clicked() {
                action = Some(QuizAction::Draw);
            }
        }

        QuizState::Posed(id) => {
            let Some(record) = table.get(id) else {
                // Selection no longer in the snapshot (table was reloaded).
                return Some(QuizAction::Skip);
            };

            question_panel(ui, theme, record);

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Reveal Answer").clicked() {
                    action = Some(QuizAction::Reveal);
                }
                if ui.button("Next Question").clicked() {
                    action = Some(QuizAction::Skip);
                }
            });
        }

        QuizState::Revealed(id) => {
            let Some(record) = table.get(id) else {
                return Some(QuizAction::Skip);
            };

            question_panel(ui, theme, record);

            ui.add_space(8.0);
            ui.colored_label(
                theme.green(ui.ctx()),
                RichText::new(&record.answer).size(16.0).strong(),
            );
            if !record.explanation.is_empty() {
                ui.label(&record.explanation);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("✔ Correct").clicked() {
                    action = Some(QuizAction::Correct);
                }
                if ui.button("✖ Incorrect").clicked() {
                    action = Some(QuizAction::Incorrect);
                }
                if ui.button("Next Question").clicked() {
                    action = Some(QuizAction::Skip);
                }
            });
        }
    }

    action
}

fn question_panel(ui: &mut egui::Ui, theme: &Theme, record: &Record) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(
                theme.category_color(ui.ctx(), record.category),
                format!("[{}]", record.category.label()),
            );
            ui.label(RichText::new(&record.question).size(16.0));
        });
    });
}
