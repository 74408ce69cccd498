use std::collections::VecDeque;

use crate::node::{NodeId, ROOT, WILDCARD};
use crate::trie::Trie;

impl Trie {
    /// §4.4 `next`. A single edge attempt: literal/escaped edges win over
    /// the wildcard-token edge, and a literal wildcard-glyph input can only
    /// be consumed by an escaped (literal-underscore) edge.
    pub(crate) fn next(&self, node: NodeId, c: char) -> Option<NodeId> {
        if c == WILDCARD {
            if let Some(escaped) = self.node(node).escaped_underscore {
                return Some(escaped);
            }
        } else if let Some(&literal) = self.node(node).children.get(&c) {
            return Some(literal);
        }
        self.node(node).children.get(&WILDCARD).copied()
    }

    /// §4.4 `fail`. Only called when `next` has already failed at `node`.
    pub(crate) fn fail(&self, node: NodeId, c: char) -> NodeId {
        let mut cur = node;
        while cur != ROOT {
            let f = self.node(cur).failure;
            if let Some(n) = self.next(f, c) {
                return n;
            }
            cur = f;
        }
        ROOT
    }

    /// The composed step shared by all four scan modes: `next`, falling
    /// back to `fail` when there is no direct edge.
    pub(crate) fn step(&self, node: NodeId, c: char) -> NodeId {
        self.next(node, c).unwrap_or_else(|| self.fail(node, c))
    }

    /// The restricted, non-wildcard transition used by elide (§4.5): a
    /// literal code point may only be consumed by a literal or escaped
    /// edge, never by the wildcard-token edge.
    pub(crate) fn literal_child(&self, node: NodeId, c: char) -> Option<NodeId> {
        if c == WILDCARD {
            self.node(node).escaped_underscore
        } else {
            self.node(node).children.get(&c).copied()
        }
    }

    /// Exact edge lookup ignoring the wildcard-fallback priority of
    /// `next`. Used only while constructing failure links: a node's
    /// failure target must share its *specific* edge kind (same
    /// `(character, escape)` pair) with an ancestor, not merely accept the
    /// same runtime input.
    fn raw_child(&self, node: NodeId, character: char, escape: bool) -> Option<NodeId> {
        if escape {
            self.node(node).escaped_underscore
        } else {
            self.node(node).children.get(&character).copied()
        }
    }

    fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        let n = self.node(node);
        let mut out: Vec<NodeId> = n.children.values().copied().collect();
        out.extend(n.escaped_underscore);
        out
    }

    /// §4.3 failure-link construction. Runs in breadth-first order so that
    /// a node's parent's failure link is always already known.
    pub(crate) fn rebuild_failure_links(&mut self) {
        let mut queue = VecDeque::new();
        for child in self.children_of(ROOT) {
            self.node_mut(child).failure = ROOT;
            queue.push_back(child);
        }

        while let Some(id) = queue.pop_front() {
            for child in self.children_of(id) {
                queue.push_back(child);

                let character = self.node(child).character;
                let escape = self.node(child).escape;

                let mut q = self.node(id).failure;
                let failure = loop {
                    if let Some(hit) = self.raw_child(q, character, escape) {
                        break hit;
                    }
                    if q == ROOT {
                        break ROOT;
                    }
                    q = self.node(q).failure;
                };
                self.node_mut(child).failure = failure;
            }
        }

        self.mark_clean();
    }
}
