use serde::Serialize;

use crate::names::QUESTIONS_PER_PAGE;

/// The `page`-th (1-based) run of `QUESTIONS_PER_PAGE` items, clipped to the end of `items`.
/// A page past the end is empty. Page 0 is treated as page 1.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE)
        .min(items.len());
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// One page of a selection together with the size of the whole selection.
#[derive(Debug, Serialize)]
pub struct QuestionPage<'a, T> {
    pub questions: &'a [T],
    pub total_questions: usize,
}

impl<'a, T> QuestionPage<'a, T> {
    pub fn new(page: usize, items: &'a [T]) -> Self {
        Self {
            questions: paginate(page, items),
            total_questions: items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
