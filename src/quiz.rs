//! Drawing the next question of a quiz.
//!
//! A quiz keeps no state on the server. Every request carries the pool it
//! plays from and the ids the player has already been shown; the next
//! question is drawn uniformly from whatever is left.

use std::collections::HashSet;

use rand::{seq::IndexedRandom, Rng};

use crate::{db::Question, filters};

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPool {
    All,
    Category(i64),
}

impl QuizPool {
    /// Narrow the full question list down to this pool.
    pub fn select(self, questions: Vec<Question>) -> Vec<Question> {
        match self {
            QuizPool::All => questions,
            QuizPool::Category(id) => filters::by_category(questions, id),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Draw<'a> {
    Next(&'a Question),
    /// Every question in the pool has been served.
    Exhausted,
}

/// Pick one question of `pool` whose id is not in `previous`, uniformly at random.
///
/// Runs in a single pass over the pool. Ids in `previous` that are not part of the
/// pool are ignored.
pub fn draw<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Draw<'a> {
    let remaining: Vec<&Question> = pool.iter().filter(|q| !previous.contains(&q.id)).collect();

    match remaining.choose(rng) {
        Some(&question) => Draw::Next(question),
        None => Draw::Exhausted,
    }
}
