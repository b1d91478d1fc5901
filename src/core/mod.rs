pub mod errors;
pub mod models;
pub mod quiz;
pub mod table;

pub use errors::FukushuError;
pub use models::{ today_string, Category, Record };
pub use quiz::QuizSession;
pub use table::RecordTable;
