//! Shared cache for pattern tables.
//!
//! Heuristic checks match content against tables of regex literals, some of
//! them templated with a parameter or module name. Each distinct pattern is
//! compiled once per process and reused on every later call.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use regex::Regex;

static COMPILED: LazyLock<Mutex<HashMap<String, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// The compiled form of `pattern`, or `None` when it is not a valid regex.
///
/// An invalid pattern is logged once and fails debug builds.
pub fn compiled(pattern: &str) -> Option<Regex> {
    let mut cache = COMPILED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(entry) = cache.get(pattern) {
        return entry.clone();
    }
    let entry = match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Invalid pattern '{}': {}", pattern, e);
            None
        }
    };
    cache.insert(pattern.to_string(), entry.clone());
    drop(cache);
    debug_assert!(entry.is_some(), "invalid pattern: {}", pattern);
    entry
}

/// Whether `pattern` matches `content`.
pub fn is_match(pattern: &str, content: &str) -> bool {
    compiled(pattern).is_some_and(|re| re.is_match(content))
}

/// Number of non-overlapping matches of `pattern` in `content`.
pub fn count(pattern: &str, content: &str) -> usize {
    compiled(pattern).map_or(0, |re| re.find_iter(content).count())
}

/// Assert every pattern in `patterns` compiles.
#[cfg(test)]
pub(crate) fn assert_all_compile<'a>(patterns: impl IntoIterator<Item = &'a str>) {
    for pattern in patterns {
        if let Err(e) = Regex::new(pattern) {
            panic!("pattern {:?} does not compile: {}", pattern, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_once_and_reuses() {
        let first = compiled(r"\bgplint-cache-test\b").unwrap();
        let second = compiled(r"\bgplint-cache-test\b").unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(
            COMPILED
                .lock()
                .unwrap()
                .keys()
                .filter(|k| k.contains("gplint-cache-test"))
                .count(),
            1
        );
    }

    #[test]
    fn matches_and_counts() {
        assert!(is_match(r"set\s+-e", "set -e\n"));
        assert!(!is_match(r"set\s+-e", "echo hi\n"));
        assert_eq!(count(r"def\s+\w+", "def a():\ndef b():\n"), 2);
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn invalid_pattern_is_not_silent() {
        // Lookaround is unsupported by the regex crate.
        compiled(r"foo(?!bar)");
    }

    #[test]
    #[should_panic(expected = "does not compile")]
    fn table_assertion_reports_bad_entry() {
        assert_all_compile(["ok", "(unclosed"]);
    }
}
