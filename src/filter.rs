use parking_lot::{RwLock, RwLockWriteGuard};

use crate::scan::{self, Match};
use crate::trie::Trie;

/// The public facade over the mutable dictionary and the automaton built
/// over it. Safe to share across threads: mutations and scans both take
/// the write lock (see spec §5 and DESIGN.md for why this repo doesn't
/// bother splitting rebuild-then-downgrade into two acquisitions).
pub struct Filter {
    trie: RwLock<Trie>,
}

impl Filter {
    pub fn new() -> Filter {
        Filter {
            trie: RwLock::new(Trie::new()),
        }
    }

    /// §4.1, idempotent. Empty phrases are a no-op (§7).
    pub fn add(&self, phrase: &str) {
        self.trie.write().insert(phrase);
    }

    /// §4.2, idempotent. Unknown phrases are a no-op (§7).
    pub fn remove(&self, phrase: &str) {
        self.trie.write().remove(phrase);
    }

    /// Bulk insert; failure links are rebuilt once, lazily, before the
    /// next scan rather than after every phrase.
    pub fn load_many<I, S>(&self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = self.trie.write();
        for phrase in phrases {
            trie.insert(phrase.as_ref());
        }
    }

    fn ready(&self) -> RwLockWriteGuard<'_, Trie> {
        let mut trie = self.trie.write();
        if trie.is_dirty() {
            trie.rebuild_failure_links();
        }
        trie
    }

    /// §4.5 find-all.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        scan::find_all(&self.ready(), text)
    }

    /// §4.5 find-first.
    pub fn find_first(&self, text: &str) -> Option<Match> {
        scan::find_first(&self.ready(), text)
    }

    /// §4.5 redact.
    pub fn redact(&self, text: &str, replacement: char) -> String {
        scan::redact(&self.ready(), text, replacement)
    }

    /// §4.5 elide. Doesn't use failure links, but sharing `ready()` keeps
    /// the locking discipline uniform across all four modes.
    pub fn elide(&self, text: &str) -> String {
        scan::elide(&self.ready(), text)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::new()
    }
}
