use serde_json::Value;

use super::api::SheetsClient;
use crate::core::{
    models::{ Category, Record },
    FukushuError,
};

/// Canonical column order of the worksheet. The persisted layout is exactly
/// these eight columns; there is no schema versioning.
pub const SCHEMA: [&str; 8] = [
    "Date",
    "Category",
    "Sub_Type",
    "Question",
    "Answer",
    "Explanation",
    "Error_Count",
    "Last_Review",
];

/// Opaque read/write of the entire table. The seam exists so the UI layer
/// and tests can run against a double instead of a live bridge.
pub trait TabularStore {
    /// Fetches the whole table, always fresh. A structurally empty table
    /// (no rows, header only, or a header narrower than two columns) is
    /// `Ok(vec![])`; only transport/bridge failures are `Err`.
    fn load(&self) -> Result<Vec<Record>, FukushuError>;

    /// Overwrites the destination table wholesale, header row included.
    fn save(&self, records: &[Record]) -> Result<(), FukushuError>;
}

/// Collapses a failed load into the empty canonical table so the UI never
/// crashes on a dead store, while handing the swallowed error back so the
/// caller can surface the degraded state distinctly from "empty but valid".
pub fn load_or_empty(store: &dyn TabularStore) -> (Vec<Record>, Option<FukushuError>) {
    match store.load() {
        Ok(records) => (records, None),
        Err(error) => (Vec::new(), Some(error)),
    }
}

/// One named worksheet behind the sheet bridge.
pub struct SheetStore {
    client: SheetsClient,
    worksheet: String,
}

impl SheetStore {
    pub fn new(client: SheetsClient, worksheet: String) -> Self {
        SheetStore { client, worksheet }
    }
}

impl TabularStore for SheetStore {
    fn load(&self) -> Result<Vec<Record>, FukushuError> {
        let rows = self.client.read_rows(&self.worksheet)?;
        Ok(records_from_rows(rows))
    }

    fn save(&self, records: &[Record]) -> Result<(), FukushuError> {
        self.client.update_rows(&self.worksheet, records_to_rows(records))
    }
}

/// Parses raw worksheet rows into records. The first row is the header; a
/// missing header or one narrower than two columns means the worksheet was
/// never written by us and reads as empty.
pub fn records_from_rows(rows: Vec<Vec<Value>>) -> Vec<Record> {
    let mut iter = rows.into_iter();
    match iter.next() {
        Some(header) if header.len() >= 2 => {}
        _ => return Vec::new(),
    }

    iter.map(record_from_row).collect()
}

/// Serializes records back to worksheet rows in canonical column order,
/// header first.
pub fn records_to_rows(records: &[Record]) -> Vec<Vec<Value>> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(SCHEMA.iter().map(|c| Value::String(c.to_string())).collect());

    for record in records {
        rows.push(vec![
            Value::String(record.date.clone()),
            Value::String(record.category.label().to_string()),
            Value::String(record.sub_type.clone()),
            Value::String(record.question.clone()),
            Value::String(record.answer.clone()),
            Value::String(record.explanation.clone()),
            Value::Number(record.error_count.into()),
            Value::String(record.last_review.clone()),
        ]);
    }

    rows
}

fn record_from_row(row: Vec<Value>) -> Record {
    let cell = |i: usize| row.get(i).map(cell_text).unwrap_or_default();

    Record {
        id: uuid::Uuid::new_v4(),
        date: cell(0),
        category: Category::from_label(&cell(1)),
        sub_type: cell(2),
        question: cell(3),
        answer: cell(4),
        explanation: cell(5),
        error_count: row.get(6).map(parse_error_count).unwrap_or(1),
        last_review: cell(7),
    }
}

/// Text form of an arbitrary cell. The bridge may return dates as typed
/// values rather than strings; everything non-string stringifies.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Error counts are coerced to an integer; unparsable or absent values
/// become 1. A value that parses (including 0) is kept as-is, truncating
/// fractions the way the original tooling did.
fn parse_error_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v.min(u32::MAX as u64) as u32
            } else if let Some(v) = n.as_f64() {
                if v >= 0.0 { v as u32 } else { 1 }
            } else {
                1
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<u32>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u32))
                .unwrap_or(1)
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct DeadStore;

    impl TabularStore for DeadStore {
        fn load(&self) -> Result<Vec<Record>, FukushuError> {
            Err(FukushuError::Bridge("connection refused".to_string()))
        }

        fn save(&self, _records: &[Record]) -> Result<(), FukushuError> {
            Err(FukushuError::Bridge("connection refused".to_string()))
        }
    }

    fn header_row() -> Vec<Value> {
        SCHEMA.iter().map(|c| json!(c)).collect()
    }

    #[test]
    fn test_load_or_empty_swallows_read_failure() {
        let (records, error) = load_or_empty(&DeadStore);
        assert!(records.is_empty());
        assert!(matches!(error, Some(FukushuError::Bridge(_))));
    }

    #[test]
    fn test_no_rows_reads_as_empty() {
        assert!(records_from_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_header_only_reads_as_empty() {
        assert!(records_from_rows(vec![header_row()]).is_empty());
    }

    #[test]
    fn test_narrow_header_reads_as_empty() {
        // A single-column worksheet was never written by us.
        let rows = vec![vec![json!("Notes")], vec![json!("stray cell")]];
        assert!(records_from_rows(rows).is_empty());
    }

    #[test]
    fn test_row_parsing_and_coercion() {
        let rows = vec![
            header_row(),
            vec![
                json!("2026-08-01"),
                json!("Grammar"),
                json!("Part 5"),
                json!("Despite ___ the storm..."),
                json!("C"),
                json!("concessive preposition"),
                json!(3),
                json!("2026-08-01"),
            ],
        ];

        let records = records_from_rows(rows);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date, "2026-08-01");
        assert_eq!(r.category, Category::Grammar);
        assert_eq!(r.error_count, 3);
    }

    #[test]
    fn test_error_count_coercion() {
        assert_eq!(parse_error_count(&json!("abc")), 1);
        assert_eq!(parse_error_count(&json!("")), 1);
        assert_eq!(parse_error_count(&json!(null)), 1);
        assert_eq!(parse_error_count(&json!("4")), 4);
        assert_eq!(parse_error_count(&json!(" 2 ")), 2);
        assert_eq!(parse_error_count(&json!(7)), 7);
        assert_eq!(parse_error_count(&json!(2.0)), 2);
        assert_eq!(parse_error_count(&json!(0)), 0);
        assert_eq!(parse_error_count(&json!(-3)), 1);
    }

    #[test]
    fn test_typed_cells_stringify() {
        let mut row = vec![json!(20260801), json!("Reading")];
        row.resize(8, json!(null));
        row[6] = json!(2);

        let record = record_from_row(row);
        assert_eq!(record.date, "20260801");
        assert_eq!(record.sub_type, "");
        assert_eq!(record.error_count, 2);
    }

    #[test]
    fn test_short_rows_pad_with_empty_cells() {
        let rows = vec![header_row(), vec![json!("2026-08-01"), json!("Listening")]];
        let records = records_from_rows(rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "");
        assert_eq!(records[0].error_count, 1);
    }

    #[test]
    fn test_rows_round_trip() {
        let original = vec![
            Record::new(
                Category::Vocabulary,
                "Part 6".to_string(),
                "transitional phrase".to_string(),
                "however".to_string(),
                "contrast marker".to_string(),
            ),
            Record::new(Category::Listening, String::new(), String::new(), String::new(), String::new()),
        ];

        let rows = records_to_rows(&original);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], header_row());

        let reloaded = records_from_rows(rows);
        assert_eq!(reloaded.len(), original.len());
        for (a, b) in original.iter().zip(&reloaded) {
            assert_eq!(a.date, b.date);
            assert_eq!(a.category, b.category);
            assert_eq!(a.sub_type, b.sub_type);
            assert_eq!(a.question, b.question);
            assert_eq!(a.answer, b.answer);
            assert_eq!(a.explanation, b.explanation);
            assert_eq!(a.error_count, b.error_count);
            assert_eq!(a.last_review, b.last_review);
        }

        // A second serialization of the reloaded records is byte-identical:
        // save(load()) leaves the remote content unchanged.
        assert_eq!(records_to_rows(&reloaded), records_to_rows(&original));
    }
}
