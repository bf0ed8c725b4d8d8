/// A caller-supplied document identifier. Negative values are rejected by
/// `IndexStore::add` (see `core::error::ErrorKind::InvalidDocId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub i64);

impl DocId {
    pub fn new(id: i64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DocId {
    fn from(id: i64) -> Self {
        DocId(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// An indexed document: immutable once added. The original text buffer is
/// kept only so `word_frequencies`-style callers can be handed back the
/// document if ever needed; the inverted/forward indexes hold their own
/// owned copies of each word and never borrow into `text`.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub text: Box<str>,
    pub status: Status,
    pub rating: i32,
}

/// Truncated (toward zero) integer mean of `ratings`; `0` if empty.
pub fn mean_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

/// A single scored result: `(id, relevance, rating)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentScore {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
pub const EPSILON: f64 = 1e-6;

/// Strict weak order: closer-than-`EPSILON` relevances are broken by
/// rating (higher first); otherwise higher relevance wins. Relevances are
/// never NaN (idf is always >= 0 for words present in the index), so this
/// never needs a NaN fallback.
pub fn rank_cmp(a: &DocumentScore, b: &DocumentScore) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    if (a.relevance - b.relevance).abs() < EPSILON {
        b.rating.cmp(&a.rating)
    } else {
        b.relevance.partial_cmp(&a.relevance).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rating_truncates_toward_zero() {
        assert_eq!(mean_rating(&[]), 0);
        assert_eq!(mean_rating(&[1, 2, 3]), 2);
        assert_eq!(mean_rating(&[1, 2]), 1);
        assert_eq!(mean_rating(&[-1, -2]), -1);
        assert_eq!(mean_rating(&[5]), 5);
    }

    #[test]
    fn rank_cmp_breaks_ties_by_rating() {
        let a = DocumentScore { id: DocId(1), relevance: 1.0, rating: 3 };
        let b = DocumentScore { id: DocId(2), relevance: 1.0 + EPSILON / 2.0, rating: 5 };
        assert_eq!(rank_cmp(&a, &b), std::cmp::Ordering::Greater);
    }

    #[test]
    fn rank_cmp_orders_by_relevance_outside_epsilon() {
        let a = DocumentScore { id: DocId(1), relevance: 2.0, rating: 0 };
        let b = DocumentScore { id: DocId(2), relevance: 1.0, rating: 100 };
        assert_eq!(rank_cmp(&a, &b), std::cmp::Ordering::Less);
    }
}
