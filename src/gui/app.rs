use eframe::egui;

use super::{
    connection_modal::ConnectionModal,
    error_modal::ErrorModal,
    feedback::{
        Feedback,
        Tone,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    views::{
        add_form::AddForm,
        dashboard,
        quiz_view::{
            self,
            QuizAction,
        },
        review_list,
    },
};
use crate::{
    core::{
        FukushuError,
        QuizSession,
        Record,
        RecordTable,
    },
    persistence::ConnectionConfig,
    sheets::{
        load_or_empty,
        SheetStore,
        SheetsClient,
        TabularStore,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    AddRecord,
    ReviewList,
    RandomQuiz,
}

/// Mutations collected from the view closures, applied once the central
/// panel is done drawing.
enum Pending {
    Add(Record),
    Delete(usize),
    Quiz(QuizAction),
}

pub struct FukushuApp {
    // Data
    table: RecordTable,
    store: Option<SheetStore>,
    store_online: bool,

    // Configuration
    config: ConnectionConfig,

    // UI state
    view: View,
    add_form: AddForm,
    quiz: QuizSession,
    theme: Theme,
    feedback: Feedback,

    // Modals
    error_modal: ErrorModal,
    connection_modal: ConnectionModal,
}

impl FukushuApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ConnectionConfig::load_or_default();
        let store = build_store(&config);

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        let mut app = Self {
            table: RecordTable::default(),
            store,
            store_online: false,
            config,
            view: View::Dashboard,
            add_form: AddForm::default(),
            quiz: QuizSession::new(),
            theme,
            feedback: Feedback::default(),
            error_modal: ErrorModal::new(),
            connection_modal: ConnectionModal::new(),
        };

        app.reload();
        app
    }

    /// Fetches the whole table fresh. A failed read degrades to the empty
    /// canonical table and flips the status indicator instead of crashing.
    /// Session ids are reassigned by the load, so any quiz selection dies.
    fn reload(&mut self) {
        let (records, load_error) = match &self.store {
            Some(store) => load_or_empty(store),
            None => (Vec::new(), Some(FukushuError::Custom("no store client".to_string()))),
        };

        self.table = RecordTable::new(records);
        self.quiz.skip();

        match load_error {
            None => {
                self.store_online = true;
            }
            Some(error) => {
                self.store_online = false;
                eprintln!("Sheet load failed: {}", error);
                self.feedback.set(
                    Tone::Warning,
                    "Sheet unreachable, starting from an empty table.",
                );
            }
        }
    }

    /// Full-table overwrite of the worksheet, then a fresh load. A write
    /// failure is fatal for this interaction: the error modal comes up and
    /// the in-memory change waits for the next successful save.
    fn persist_and_reload(&mut self, success_note: &str) {
        let result = match &self.store {
            Some(store) => store.save(self.table.records()),
            None => Err(FukushuError::Custom("no store client".to_string())),
        };

        match result {
            Ok(()) => {
                self.reload();
                self.feedback.set(Tone::Success, success_note);
            }
            Err(error) => {
                self.store_online = false;
                self.error_modal.show_error(
                    "Sync Failed",
                    "Could not write to the sheet. Your change is kept locally; \
                     redo the action to retry.",
                    Some(error.to_string()),
                );
            }
        }
    }

    fn apply_pending(&mut self, pending: Pending) {
        match pending {
            Pending::Add(record) => {
                self.table.add(record);
                self.persist_and_reload("Saved!");
            }

            Pending::Delete(index) => {
                // Out-of-range indices are a silent no-op with no save.
                if self.table.delete(index) {
                    self.persist_and_reload("Deleted.");
                }
            }

            Pending::Quiz(action) => self.apply_quiz_action(action),
        }
    }

    fn apply_quiz_action(&mut self, action: QuizAction) {
        match action {
            QuizAction::Draw => {
                match self.quiz.pose(&self.table, &mut rand::rng()) {
                    Ok(_) => self.feedback.clear(),
                    Err(FukushuError::EmptyPool) => {
                        self.feedback.set(Tone::Warning, "No questions in the pool yet!");
                    }
                    Err(error) => {
                        self.feedback.set(Tone::Warning, error.to_string());
                    }
                }
            }

            QuizAction::Reveal => self.quiz.reveal(),

            QuizAction::Correct => {
                self.quiz.mark_correct();
                self.feedback.set(Tone::Success, "Marked correct.");
            }

            QuizAction::Incorrect => {
                if let Some(id) = self.quiz.mark_incorrect() {
                    if self.table.increment_error(id).is_some() {
                        self.persist_and_reload("Logged another miss.");
                    }
                }
            }

            QuizAction::Skip => {
                self.quiz.skip();
                self.feedback.clear();
            }
        }
    }

    fn apply_connection_config(&mut self, config: ConnectionConfig) {
        if let Err(e) = config.save() {
            eprintln!("Failed to save connection settings: {}", e);
        }

        self.config = config;
        self.store = build_store(&self.config);
        self.reload();
        if self.store_online {
            self.feedback.set(Tone::Info, "Connection updated.");
        }
    }
}

impl eframe::App for FukushuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let previous_view = self.view;
        let top_bar_action = TopBar::show(ctx, &mut self.view, self.store_online);

        if self.view != previous_view {
            self.feedback.clear();
        }

        match top_bar_action {
            Some(TopBarAction::Reload) => {
                self.reload();
                if self.store_online {
                    self.feedback.set(Tone::Info, "Reloaded from the sheet.");
                }
            }
            Some(TopBarAction::OpenConnectionSettings) => {
                self.connection_modal.open_settings(self.config.clone());
            }
            None => {}
        }

        let mut pending: Option<Pending> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            self.feedback.show(ui, &self.theme);

            match self.view {
                View::Dashboard => dashboard::show(ui, &self.table, &self.theme),

                View::AddRecord => {
                    if let Some(record) = self.add_form.show(ui, &self.theme) {
                        pending = Some(Pending::Add(record));
                    }
                }

                View::ReviewList => {
                    if let Some(index) = review_list::show(ui, &self.table, &self.theme) {
                        pending = Some(Pending::Delete(index));
                    }
                }

                View::RandomQuiz => {
                    if let Some(action) = quiz_view::show(ui, &self.table, &self.quiz, &self.theme)
                    {
                        pending = Some(Pending::Quiz(action));
                    }
                }
            }
        });

        if let Some(pending) = pending {
            self.apply_pending(pending);
        }

        self.error_modal.show(ctx);

        if let Some(config) = self.connection_modal.show(ctx) {
            self.apply_connection_config(config);
        }
    }
}

fn build_store(config: &ConnectionConfig) -> Option<SheetStore> {
    match SheetsClient::new(config) {
        Ok(client) => Some(SheetStore::new(client, config.worksheet.clone())),
        Err(e) => {
            eprintln!("Failed to build sheet client: {}", e);
            None
        }
    }
}
