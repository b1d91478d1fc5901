use uuid::Uuid;

/// Current local date in the `%Y-%m-%d` form used everywhere a date is stored.
pub fn today_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// The four skill areas a missed question can fall under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Listening,
    Reading,
    Vocabulary,
    Grammar,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Listening, Category::Reading, Category::Vocabulary, Category::Grammar];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Listening => "Listening",
            Category::Reading => "Reading",
            Category::Vocabulary => "Vocabulary",
            Category::Grammar => "Grammar",
        }
    }

    /// Lossy parse for text coming back from the worksheet. The app only ever
    /// writes the four labels, but the sheet can be edited out-of-band, so
    /// anything unrecognized coerces to the first canonical category.
    pub fn from_label(text: &str) -> Category {
        let trimmed = text.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or(Category::Listening)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Listening
    }
}

/// One error-log entry: a missed exam question with its metadata.
///
/// `id` is assigned when the record is constructed (at load or creation) and
/// never persisted; it identifies the record within one load/save cycle,
/// which is the only lifetime record identity is ever used for.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: Uuid,
    pub date: String,        // creation date, %Y-%m-%d
    pub category: Category,
    pub sub_type: String,    // free text, e.g. "Part 5"
    pub question: String,
    pub answer: String,
    pub explanation: String,
    pub error_count: u32,    // times answered wrong, >= 1 on creation
    pub last_review: String, // set at creation
}

impl Record {
    /// A freshly missed question: dated today, one error on the books.
    /// Empty question/answer text is accepted as-is.
    pub fn new(
        category: Category,
        sub_type: String,
        question: String,
        answer: String,
        explanation: String,
    ) -> Self {
        let today = today_string();
        Record {
            id: Uuid::new_v4(),
            date: today.clone(),
            category,
            sub_type,
            question,
            answer,
            explanation,
            error_count: 1,
            last_review: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), category);
        }
        assert_eq!(Category::from_label("  grammar  "), Category::Grammar);
    }

    #[test]
    fn test_unknown_category_coerces_to_first() {
        assert_eq!(Category::from_label("Part 5"), Category::Listening);
        assert_eq!(Category::from_label(""), Category::Listening);
    }

    #[test]
    fn test_new_record_defaults() {
        let record = Record::new(
            Category::Reading,
            "Part 7".to_string(),
            "What does 'moreover' signal?".to_string(),
            "Addition".to_string(),
            String::new(),
        );

        assert_eq!(record.error_count, 1);
        assert_eq!(record.date, record.last_review);
        assert_eq!(record.date, today_string());
    }
}
