//! A sensitive-word detection and redaction engine: a mutable dictionary
//! of forbidden phrases matched against input text in one linear pass over
//! an Aho-Corasick automaton, extended with a single-character wildcard.
//!
//! The core is [`Filter`]: add/remove phrases at any time, then scan text
//! in one of four modes (`find_first`, `find_all`, `redact`, `elide`).
//! Dictionary loading (`dict`), config parsing (`config`), and the HTTP
//! control plane (`server`) are collaborators built on top of it.

mod automaton;
mod node;
mod scan;
mod trie;

pub mod cli;
pub mod config;
pub mod dict;
pub mod error;
pub mod server;

mod filter;

pub use error::{Result, SensitiveError};
pub use filter::Filter;
pub use scan::Match;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_membership() {
        let filter = Filter::new();
        filter.add("hello");
        let m = filter.find_first("hello").unwrap();
        assert_eq!(m.start, 0);
        assert_eq!(m.matched, "hello");
    }

    #[test]
    fn removal_is_idempotent() {
        let filter = Filter::new();
        filter.add("hello");
        filter.remove("hello");
        filter.remove("hello");
        assert!(filter.find_first("hello").is_none());
    }

    #[test]
    fn add_is_idempotent() {
        let filter = Filter::new();
        filter.add("hello");
        filter.add("hello");
        assert_eq!(filter.find_all("hello").len(), 1);
    }

    #[test]
    fn prefix_safety() {
        let filter = Filter::new();
        filter.add("ab");
        filter.add("abc");
        filter.remove("ab");
        let m = filter.find_first("abc").unwrap();
        assert_eq!((m.start, m.matched.as_str()), (0, "abc"));
    }

    #[test]
    fn wildcard_locality() {
        let filter = Filter::new();
        filter.add("f__k");
        let m = filter.find_first("fork").unwrap();
        assert_eq!((m.start, m.matched.as_str()), (0, "fork"));
        assert!(filter.find_first("frk").is_none());
    }

    #[test]
    fn escape_round_trip() {
        let filter = Filter::new();
        filter.add("a\\_b");
        let m = filter.find_first("a_b").unwrap();
        assert_eq!((m.start, m.matched.as_str()), (0, "a_b"));
        assert!(filter.find_first("aXb").is_none());
    }

    #[test]
    fn encoding_neutrality_counts_code_points_not_bytes() {
        let filter = Filter::new();
        filter.add("bad");
        // "héllo " is 6 code points but 7 bytes (é is 2 bytes in UTF-8).
        let m = filter.find_first("héllo bad").unwrap();
        assert_eq!(m.start, 6);
    }

    #[test]
    fn scenario_bc_ab_abc() {
        let filter = Filter::new();
        filter.add("bc");
        filter.add("ab");
        filter.add("abc");

        let all = filter.find_all("abcd");
        let found: Vec<(usize, &str)> =
            all.iter().map(|m| (m.start, m.matched.as_str())).collect();
        assert_eq!(found, vec![(0, "ab"), (0, "abc"), (1, "bc")]);

        let first = filter.find_first("abcd").unwrap();
        assert_eq!((first.start, first.matched.as_str()), (0, "ab"));
    }

    #[test]
    fn scenario_he_she_his_hers() {
        let filter = Filter::new();
        filter.add("he");
        filter.add("she");
        filter.add("his");
        filter.add("hers");

        let all = filter.find_all("ushers");
        let found: Vec<(usize, &str)> =
            all.iter().map(|m| (m.start, m.matched.as_str())).collect();
        assert_eq!(found, vec![(1, "she"), (2, "he"), (2, "hers")]);
    }

    #[test]
    fn scenario_redact_bad() {
        let filter = Filter::new();
        filter.add("bad");
        assert_eq!(filter.redact("it is bad.", '*'), "it is ***.");
    }

    #[test]
    fn scenario_elide_x() {
        let filter = Filter::new();
        filter.add("x");
        assert_eq!(filter.elide("axbxc"), "abc");
    }

    #[test]
    fn empty_phrase_is_a_no_op() {
        let filter = Filter::new();
        filter.add("");
        filter.remove("");
        assert!(filter.find_first("anything").is_none());
    }

    #[test]
    fn removing_unknown_phrase_is_a_no_op() {
        let filter = Filter::new();
        filter.add("hello");
        filter.remove("goodbye");
        assert!(filter.find_first("hello").is_some());
    }

    #[test]
    fn load_many_rebuilds_failure_links_once() {
        let filter = Filter::new();
        filter.load_many(["he", "she", "his", "hers"]);
        assert!(filter.find_first("ushers").is_some());
    }

    #[test]
    fn find_all_reports_the_originating_wildcard_phrase() {
        let filter = Filter::new();
        filter.add("f__k");
        let m = filter.find_first("fork").unwrap();
        assert_eq!(m.origin.as_deref(), Some("f__k"));
    }
}
