//! Pattern scoring shared by the wrapper quality checks.
//!
//! A quality check adds up points for every coding pattern it recognises
//! and grades the total into one of four tiers.

use crate::lint::{pattern, Issue};

/// A pattern worth `points` when it matches somewhere in the script.
pub(crate) struct Signal {
    pub pattern: &'static str,
    pub label: &'static str,
    pub points: f64,
}

pub(crate) const fn signal(pattern: &'static str, label: &'static str, points: f64) -> Signal {
    Signal {
        pattern,
        label,
        points,
    }
}

/// Whether `pattern` matches `content`.
pub(crate) fn matches(pattern: &str, content: &str) -> bool {
    pattern::is_match(pattern, content)
}

/// Number of non-overlapping matches of `pattern` in `content`.
pub(crate) fn count(pattern: &str, content: &str) -> usize {
    pattern::count(pattern, content)
}

/// The first `max` characters of `content`.
pub(crate) fn head(content: &str, max: usize) -> &str {
    match content.char_indices().nth(max) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

/// Running score and the patterns that contributed to it.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    pub score: f64,
    pub found: Vec<String>,
}

impl Tally {
    pub fn add(&mut self, label: impl Into<String>, points: f64) {
        self.found.push(label.into());
        self.score += points;
    }

    /// Add every matching signal.
    pub fn apply(&mut self, content: &str, signals: &[Signal]) {
        for s in signals {
            if matches(s.pattern, content) {
                self.add(s.label, s.points);
            }
        }
    }

    /// Add the first matching signal only.
    pub fn apply_first(&mut self, content: &str, signals: &[Signal]) {
        if let Some(s) = signals.iter().find(|s| matches(s.pattern, content)) {
            self.add(s.label, s.points);
        }
    }

    fn summary(&self, label: &str) -> String {
        format!(
            "{} (score: {}, {} pattern(s) found)",
            label,
            self.score,
            self.found.len()
        )
    }

    /// Grade the total against `grading`.
    pub fn grade(&self, grading: &Grading) -> Issue {
        if self.score >= grading.high.0 {
            Issue::info(self.summary(grading.high.1))
        } else if self.score >= grading.mid.0 {
            Issue::info(self.summary(grading.mid.1))
        } else if self.score >= grading.low.0 {
            Issue::warning(self.summary(grading.low.1)).with_context(grading.low_hint)
        } else {
            Issue::warning(grading.none.0).with_context(grading.none.1)
        }
    }
}

/// Score thresholds and wording for the four tiers.
pub(crate) struct Grading {
    pub high: (f64, &'static str),
    pub mid: (f64, &'static str),
    pub low: (f64, &'static str),
    pub low_hint: &'static str,
    pub none: (&'static str, &'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;

    const GRADING: Grading = Grading {
        high: (5.0, "Great"),
        mid: (3.0, "Fine"),
        low: (1.0, "Weak"),
        low_hint: "Try harder",
        none: ("Nothing", "Add something"),
    };

    #[test]
    fn signals_accumulate() {
        let mut tally = Tally::default();
        tally.apply(
            "try: x\nassert y",
            &[
                signal(r"\btry\s*:", "try", 2.0),
                signal(r"\bassert\s+", "assert", 0.5),
                signal(r"raise", "raise", 1.0),
            ],
        );
        assert_eq!(tally.score, 2.5);
        assert_eq!(tally.found, vec!["try", "assert"]);
        assert_eq!(tally.grade(&GRADING).message, "Weak (score: 2.5, 2 pattern(s) found)");
    }

    #[test]
    fn whole_scores_render_without_fraction() {
        let mut tally = Tally::default();
        tally.add("a", 3.0);
        let issue = tally.grade(&GRADING);
        assert_eq!(issue.severity, Severity::Info);
        assert_eq!(issue.message, "Fine (score: 3, 1 pattern(s) found)");
    }

    #[test]
    fn zero_score() {
        let issue = Tally::default().grade(&GRADING);
        assert_eq!(issue.format(), "WARNING: Nothing (Add something)");
    }

    #[test]
    fn first_match_only() {
        let mut tally = Tally::default();
        tally.apply_first("a b", &[signal("a", "A", 1.0), signal("b", "B", 1.0)]);
        assert_eq!(tally.found, vec!["A"]);
    }

    #[test]
    fn head_respects_char_boundaries() {
        assert_eq!(head("héllo", 2), "hé");
        assert_eq!(head("hi", 10), "hi");
    }
}
