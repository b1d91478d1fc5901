use rand::seq::IndexedRandom;
use rand::Rng;
use uuid::Uuid;

use super::models::{ Category, Record };

/// The full ordered collection of records, as loaded from the remote store.
///
/// Row order is insertion order. Mutations only touch the in-memory table;
/// persisting the result back to the store is the caller's save boundary.
#[derive(Debug, Default)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        RecordTable { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Appends to the end of the table, preserving insertion order.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the record at `index`. Out-of-range indices are a silent
    /// no-op; the return value tells the caller whether anything changed
    /// (and therefore whether a save is warranted).
    pub fn delete(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.records.remove(index);
            true
        } else {
            false
        }
    }

    /// Bumps the error count of the record with the given session id.
    /// Returns the new count, or None if the id is not in this snapshot.
    pub fn increment_error(&mut self, id: Uuid) -> Option<u32> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.error_count += 1;
        Some(record.error_count)
    }

    /// How many records were added on the given date (string equality,
    /// no calendar arithmetic).
    pub fn count_on(&self, date: &str) -> usize {
        self.records.iter().filter(|r| r.date == date).count()
    }

    /// Per-category counts over the categories actually present, ordered by
    /// count descending; ties keep the canonical category order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Category::ALL
            .into_iter()
            .map(|category| {
                (category, self.records.iter().filter(|r| r.category == category).count())
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// The `n` most error-prone records, highest count first. The sort is
    /// stable so ties keep their row order.
    pub fn top_errors(&self, n: usize) -> Vec<&Record> {
        let mut ranked: Vec<&Record> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.error_count.cmp(&a.error_count));
        ranked.truncate(n);
        ranked
    }

    /// Uniformly random record, or None when the table is empty.
    pub fn sample(&self, rng: &mut impl Rng) -> Option<&Record> {
        self.records.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn record(question: &str, error_count: u32) -> Record {
        let mut r = Record::new(
            Category::Reading,
            "Part 5".to_string(),
            question.to_string(),
            "B".to_string(),
            String::new(),
        );
        r.error_count = error_count;
        r
    }

    fn table_of(counts: &[u32]) -> RecordTable {
        RecordTable::new(
            counts.iter().enumerate().map(|(i, &c)| record(&format!("q{}", i), c)).collect(),
        )
    }

    #[test]
    fn test_add_appends_one_record() {
        let mut table = table_of(&[2, 3]);
        table.add(record("new question", 1));

        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[2].question, "new question");
        assert_eq!(table.records()[2].error_count, 1);
    }

    #[test]
    fn test_delete_in_range_preserves_remaining_order() {
        let mut table = table_of(&[1, 2, 3]);
        let survivors: Vec<Record> =
            vec![table.records()[0].clone(), table.records()[2].clone()];

        assert!(table.delete(1));
        assert_eq!(table.len(), 2);
        assert_eq!(table.records(), survivors.as_slice());
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut table = table_of(&[1, 2, 3]);
        let before: Vec<Record> = table.records().to_vec();

        assert!(!table.delete(5));
        assert_eq!(table.records(), before.as_slice());
    }

    #[test]
    fn test_increment_by_id_targets_the_right_duplicate() {
        // Two records with identical question text; only the second one
        // selected by id may change.
        let mut table = RecordTable::new(vec![record("same text", 4), record("same text", 7)]);
        let target = table.records()[1].id;

        assert_eq!(table.increment_error(target), Some(8));
        assert_eq!(table.records()[0].error_count, 4);
        assert_eq!(table.records()[1].error_count, 8);
    }

    #[test]
    fn test_increment_twice_adds_two() {
        let mut table = table_of(&[5]);
        let id = table.records()[0].id;

        table.increment_error(id);
        table.increment_error(id);
        assert_eq!(table.records()[0].error_count, 7);
    }

    #[test]
    fn test_increment_unknown_id_is_none() {
        let mut table = table_of(&[1]);
        assert_eq!(table.increment_error(Uuid::new_v4()), None);
    }

    #[test]
    fn test_top_errors_ordering() {
        let table = table_of(&[5, 1, 3, 2]);
        let top: Vec<u32> = table.top_errors(3).iter().map(|r| r.error_count).collect();
        assert_eq!(top, vec![5, 3, 2]);
    }

    #[test]
    fn test_top_errors_ties_keep_row_order() {
        let table = table_of(&[2, 2, 2, 1]);
        let top: Vec<String> =
            table.top_errors(3).iter().map(|r| r.question.clone()).collect();
        assert_eq!(top, vec!["q0", "q1", "q2"]);
    }

    #[test]
    fn test_count_on_matches_date_strings_only() {
        let mut table = table_of(&[1, 1]);
        table.records[0].date = "2001-01-01".to_string();

        let today = crate::core::today_string();
        assert_eq!(table.count_on(&today), 1);
        assert_eq!(table.count_on("2001-01-01"), 1);
        assert_eq!(table.count_on("1999-12-31"), 0);
    }

    #[test]
    fn test_sample_empty_table_is_none() {
        let table = RecordTable::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(table.sample(&mut rng).is_none());
    }

    #[test]
    fn test_sample_draws_from_table() {
        let table = table_of(&[1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = table.sample(&mut rng).expect("non-empty table");
        assert!(table.records().iter().any(|r| r.id == picked.id));
    }

    #[test]
    fn test_category_counts_sorted_descending() {
        let mut records = vec![
            record("a", 1),
            record("b", 1),
            record("c", 1),
        ];
        records[0].category = Category::Grammar;
        records[1].category = Category::Grammar;
        records[2].category = Category::Listening;
        let table = RecordTable::new(records);

        assert_eq!(
            table.category_counts(),
            vec![(Category::Grammar, 2), (Category::Listening, 1)]
        );
    }
}
