use rand::Rng;
use uuid::Uuid;

use super::errors::FukushuError;
use super::table::RecordTable;

/// Where the quiz interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// No question selected.
    Idle,
    /// A question is on screen, answer hidden.
    Posed(Uuid),
    /// The answer is shown, awaiting a correct/incorrect outcome.
    Revealed(Uuid),
}

/// Ephemeral single-record focus of the random-quiz view, scoped to one
/// interactive session. Selection is bound to the record's session id, so a
/// duplicated question text can never redirect the outcome to the wrong row.
#[derive(Debug)]
pub struct QuizSession {
    state: QuizState,
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession { state: QuizState::Idle }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// The selected record's id in either the posed or revealed state.
    pub fn current(&self) -> Option<Uuid> {
        match self.state {
            QuizState::Idle => None,
            QuizState::Posed(id) | QuizState::Revealed(id) => Some(id),
        }
    }

    /// Idle -> Posed: draw a uniformly random record from the table.
    /// Fails with `EmptyPool` (state unchanged) when there is nothing to draw.
    pub fn pose(&mut self, table: &RecordTable, rng: &mut impl Rng) -> Result<Uuid, FukushuError> {
        let picked = table.sample(rng).ok_or(FukushuError::EmptyPool)?;
        self.state = QuizState::Posed(picked.id);
        Ok(picked.id)
    }

    /// Posed -> Revealed. Ignored in any other state.
    pub fn reveal(&mut self) {
        if let QuizState::Posed(id) = self.state {
            self.state = QuizState::Revealed(id);
        }
    }

    /// Revealed -> Idle, no mutation.
    pub fn mark_correct(&mut self) {
        if let QuizState::Revealed(_) = self.state {
            self.state = QuizState::Idle;
        }
    }

    /// Revealed -> Idle, handing back the id whose error count must be
    /// incremented and persisted by the caller.
    pub fn mark_incorrect(&mut self) -> Option<Uuid> {
        if let QuizState::Revealed(id) = self.state {
            self.state = QuizState::Idle;
            Some(id)
        } else {
            None
        }
    }

    /// Clears the selection without revealing or mutating. Valid from both
    /// Posed and Revealed ("next question").
    pub fn skip(&mut self) {
        self.state = QuizState::Idle;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::models::{ Category, Record };

    fn one_record_table() -> RecordTable {
        RecordTable::new(vec![Record::new(
            Category::Vocabulary,
            String::new(),
            "ubiquitous".to_string(),
            "everywhere at once".to_string(),
            String::new(),
        )])
    }

    #[test]
    fn test_pose_on_empty_table_fails_and_stays_idle() {
        let mut quiz = QuizSession::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = quiz.pose(&RecordTable::default(), &mut rng);
        assert!(matches!(result, Err(FukushuError::EmptyPool)));
        assert_eq!(quiz.state(), QuizState::Idle);
    }

    #[test]
    fn test_full_correct_cycle() {
        let table = one_record_table();
        let mut quiz = QuizSession::new();
        let mut rng = StdRng::seed_from_u64(1);

        let id = quiz.pose(&table, &mut rng).unwrap();
        assert_eq!(quiz.state(), QuizState::Posed(id));

        quiz.reveal();
        assert_eq!(quiz.state(), QuizState::Revealed(id));

        quiz.mark_correct();
        assert_eq!(quiz.state(), QuizState::Idle);
        assert_eq!(quiz.current(), None);
    }

    #[test]
    fn test_incorrect_cycle_reports_the_selected_id() {
        let table = one_record_table();
        let mut quiz = QuizSession::new();
        let mut rng = StdRng::seed_from_u64(1);

        let id = quiz.pose(&table, &mut rng).unwrap();
        quiz.reveal();
        assert_eq!(quiz.mark_incorrect(), Some(id));
        assert_eq!(quiz.state(), QuizState::Idle);
    }

    #[test]
    fn test_skip_from_posed_and_revealed() {
        let table = one_record_table();
        let mut rng = StdRng::seed_from_u64(1);

        let mut quiz = QuizSession::new();
        quiz.pose(&table, &mut rng).unwrap();
        quiz.skip();
        assert_eq!(quiz.state(), QuizState::Idle);

        quiz.pose(&table, &mut rng).unwrap();
        quiz.reveal();
        quiz.skip();
        assert_eq!(quiz.state(), QuizState::Idle);
    }

    #[test]
    fn test_outcomes_require_reveal() {
        let table = one_record_table();
        let mut quiz = QuizSession::new();
        let mut rng = StdRng::seed_from_u64(1);

        let id = quiz.pose(&table, &mut rng).unwrap();

        // Not revealed yet: outcomes do nothing.
        quiz.mark_correct();
        assert_eq!(quiz.state(), QuizState::Posed(id));
        assert_eq!(quiz.mark_incorrect(), None);
        assert_eq!(quiz.state(), QuizState::Posed(id));

        // Reveal is ignored from idle.
        quiz.skip();
        quiz.reveal();
        assert_eq!(quiz.state(), QuizState::Idle);
    }
}
