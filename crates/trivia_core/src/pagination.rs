//! crates/trivia_core/src/pagination.rs
//!
//! Fixed-size, 1-indexed pagination over a full result set.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the slice of `items` shown on `page`.
///
/// The offset is computed over the whole of `items`; pages below 1 and pages past
/// the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
