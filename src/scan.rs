use crate::node::ROOT;
use crate::trie::Trie;

/// A single occurrence of a dictionary phrase in a scanned text.
///
/// `matched` is the literal input slice at `[start, start + matched.chars().count())`.
/// `origin` carries the dictionary phrase that produced the match when it
/// differs from `matched` (i.e. the phrase contained a wildcard) and is
/// `None` otherwise; see spec §4.5-§4.6 and the Open Question in §9.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub matched: String,
    pub origin: Option<String>,
}

/// §4.5 find-all: every dictionary phrase occurring in `text`, in the order
/// (end position ascending, then failure-chain depth descending).
pub(crate) fn find_all(trie: &Trie, text: &str) -> Vec<Match> {
    let buf: Vec<char> = text.chars().collect();
    let mut results = Vec::new();
    let mut node = ROOT;

    for (p, &c) in buf.iter().enumerate() {
        node = trie.step(node, c);
        let mut n = node;
        while n != ROOT {
            if trie.node(n).terminal {
                results.push(emit(trie, &buf, p, n));
            }
            n = trie.node(n).failure;
        }
    }
    results
}

/// §4.5 find-first: the first match in scan order, or `None`.
pub(crate) fn find_first(trie: &Trie, text: &str) -> Option<Match> {
    let buf: Vec<char> = text.chars().collect();
    let mut node = ROOT;

    for (p, &c) in buf.iter().enumerate() {
        node = trie.step(node, c);
        let mut n = node;
        while n != ROOT {
            if trie.node(n).terminal {
                return Some(emit(trie, &buf, p, n));
            }
            n = trie.node(n).failure;
        }
    }
    None
}

fn emit(trie: &Trie, buf: &[char], end: usize, terminal: crate::node::NodeId) -> Match {
    let depth = trie.node(terminal).depth as usize;
    let start = end + 1 - depth;
    let matched: String = buf[start..=end].iter().collect();
    let origin = trie.origin_phrase(terminal);
    let origin = if origin == matched { None } else { Some(origin) };
    Match {
        start,
        matched,
        origin,
    }
}

/// §4.5 redact: overwrite every matched span with `replacement` and
/// re-encode. Uses the same automaton walk as find-all/find-first.
pub(crate) fn redact(trie: &Trie, text: &str, replacement: char) -> String {
    let mut buf: Vec<char> = text.chars().collect();
    let mut node = ROOT;

    for p in 0..buf.len() {
        node = trie.step(node, buf[p]);
        let mut n = node;
        while n != ROOT {
            if trie.node(n).terminal {
                let depth = trie.node(n).depth as usize;
                let start = p + 1 - depth;
                for slot in &mut buf[start..=p] {
                    *slot = replacement;
                }
            }
            n = trie.node(n).failure;
        }
    }
    buf.into_iter().collect()
}

/// §4.5 elide: a restricted, non-wildcard, non-automaton trie walk that
/// drops matched spans from the output entirely. Does not use failure
/// links; on a mismatch it simply restarts one position to the right of
/// the last anchor, emitting the anchor's code point.
pub(crate) fn elide(trie: &Trie, text: &str) -> String {
    let buf: Vec<char> = text.chars().collect();
    let len = buf.len();
    let mut anchor = 0usize;
    let mut output = String::with_capacity(text.len());

    while anchor < len {
        let mut node = ROOT;
        let mut i = anchor;
        let mut matched_end = None;

        while i < len {
            match trie.literal_child(node, buf[i]) {
                Some(next) => {
                    node = next;
                    i += 1;
                    if trie.node(node).terminal {
                        matched_end = Some(i);
                        break;
                    }
                }
                None => break,
            }
        }

        match matched_end {
            Some(end) => anchor = end,
            None => {
                output.push(buf[anchor]);
                anchor += 1;
            }
        }
    }
    output
}
