use crate::db::Question;

/// Questions filed under `category`, in their original order.
pub fn by_category(questions: Vec<Question>, category: i64) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| q.category == category)
        .collect()
}

/// Questions whose text contains `term`, ignoring case. An empty term matches everything.
pub fn search_text(questions: Vec<Question>, term: &str) -> Vec<Question> {
    if term.is_empty() {
        return questions;
    }

    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
