//! Classification results — ranked label/score pairs from the oracle.

use std::cmp::Ordering;

/// A candidate label with its confidence score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub label: String,
    pub score: f32,
}

impl Scored {
    #[must_use]
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// The oracle returned no ranked labels at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("classification produced no ranked labels")]
pub struct EmptyRanking;

/// A non-empty classification result, sorted descending by score.
///
/// Sorting is enforced at construction so that [`top`](Self::top) is always
/// the most confident label, regardless of how the backend ordered its
/// answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    entries: Vec<Scored>,
}

impl Ranking {
    /// Build a ranking from raw label/score pairs.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyRanking`] when `entries` is empty — the oracle
    /// contract requires at least one ranked label.
    pub fn new(mut entries: Vec<Scored>) -> Result<Self, EmptyRanking> {
        if entries.is_empty() {
            return Err(EmptyRanking);
        }
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        Ok(Self { entries })
    }

    /// The most confident entry. Total — a ranking is never empty.
    #[must_use]
    pub fn top(&self) -> &Scored {
        &self.entries[0]
    }

    /// All entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[Scored] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_input() {
        assert_eq!(Ranking::new(Vec::new()), Err(EmptyRanking));
    }

    #[test]
    fn should_sort_entries_descending_by_score() {
        let ranking = Ranking::new(vec![
            Scored::new("a", 0.1),
            Scored::new("b", 0.9),
            Scored::new("c", 0.5),
        ])
        .unwrap();

        let labels: Vec<&str> = ranking
            .entries()
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["b", "c", "a"]);
    }

    #[test]
    fn should_return_highest_scored_entry_as_top() {
        let ranking = Ranking::new(vec![
            Scored::new("low", 0.2),
            Scored::new("high", 0.95),
        ])
        .unwrap();

        assert_eq!(ranking.top().label, "high");
        assert!((ranking.top().score - 0.95).abs() < f32::EPSILON);
    }

    #[test]
    fn should_keep_input_order_for_tied_scores() {
        let ranking = Ranking::new(vec![
            Scored::new("first", 0.5),
            Scored::new("second", 0.5),
        ])
        .unwrap();

        assert_eq!(ranking.top().label, "first");
    }
}
