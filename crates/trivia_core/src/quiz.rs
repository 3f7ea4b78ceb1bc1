//! crates/trivia_core/src/quiz.rs
//!
//! Selection of the next quiz question from a candidate set.

use crate::domain::Question;
use rand::seq::SliceRandom;
use rand::Rng;

/// Category id meaning "questions from every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Maps a requested quiz category onto the store filter.
pub fn category_filter(category_id: i64) -> Option<i64> {
    (category_id != ALL_CATEGORIES).then_some(category_id)
}

/// Picks one candidate uniformly at random, or `None` when the set is exhausted.
pub fn pick_question<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
