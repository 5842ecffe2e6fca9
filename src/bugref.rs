//! Finding Bugzilla references in card text.
//!
//! Recognized forms:
//!
//! - `bsc#123456`, `boo#123456`, `bnc#123456` (any case, spaces allowed around `#`)
//! - `bug#123456`, written without spaces so prose like "bug #3 in this list"
//!   is not taken for a reference
//! - `https://bugzilla.suse.com/show_bug.cgi?id=123456`

use regex::Regex;
use std::sync::LazyLock;

static BUG_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:(?:bsc|boo|bnc)\s*#\s*|bug#)(\d+)|show_bug\.cgi\?id=(\d+)")
        .expect("bug reference pattern is valid")
});

/// Bug IDs referenced in `text`, each once, in order of first appearance.
pub fn extract_bug_ids(text: &str) -> Vec<u64> {
    let mut ids = Vec::new();
    for caps in BUG_REF.captures_iter(text) {
        let Some(m) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        if let Ok(id) = m.as_str().parse::<u64>()
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_references() {
        assert!(extract_bug_ids("Refactor the partitioner").is_empty());
        assert!(extract_bug_ids("").is_empty());
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(extract_bug_ids("bsc#931234"), vec![931234]);
        assert_eq!(extract_bug_ids("fix (boo#1)"), vec![1]);
        assert_eq!(extract_bug_ids("BNC#42 and Bug#7"), vec![42, 7]);
        assert_eq!(extract_bug_ids("bsc # 5"), vec![5]);
    }

    #[test]
    fn test_bugzilla_url() {
        let text = "See https://bugzilla.suse.com/show_bug.cgi?id=944123 for logs";
        assert_eq!(extract_bug_ids(text), vec![944123]);
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let text = "bsc#3 bsc#1\nshow_bug.cgi?id=3 boo#2 bsc#1";
        assert_eq!(extract_bug_ids(text), vec![3, 1, 2]);
    }

    #[test]
    fn test_bug_prose_is_not_a_reference() {
        assert!(extract_bug_ids("fixes bug #3 in this list").is_empty());
        assert_eq!(extract_bug_ids("bug #3, see bug#931234"), vec![931234]);
    }

    #[test]
    fn test_requires_word_boundary() {
        assert!(extract_bug_ids("abbsc#12").is_empty());
    }

    #[test]
    fn test_overflowing_number_is_skipped() {
        assert!(extract_bug_ids("bsc#99999999999999999999999").is_empty());
    }
}
