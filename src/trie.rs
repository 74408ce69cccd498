use crate::node::{tokenize, Node, NodeId, ROOT};

/// A mutable Aho-Corasick trie over Unicode code points, with wildcard
/// tokens and a stale-failure-link tracking bit.
///
/// Nodes live in a contiguous arena (`Vec<Node>`); a free list lets
/// [`Trie::remove`]'s leaf pruning reclaim slots instead of growing the
/// arena unboundedly across long add/remove churn.
pub(crate) struct Trie {
    nodes: Vec<Node>,
    free: Vec<u32>,
    dirty: bool,
}

impl Trie {
    pub(crate) fn new() -> Trie {
        Trie {
            nodes: vec![Node::root()],
            free: Vec::new(),
            dirty: false,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// All non-root node ids currently live, in arbitrary order. Test-only:
    /// the failure-link builder reaches nodes via `children_of(ROOT)`
    /// instead, since this includes freed-but-unreused arena slots that
    /// aren't actually part of the trie.
    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    fn alloc(&mut self, character: char, escape: bool, depth: u32, parent: NodeId) -> NodeId {
        let node = Node::leaf(character, escape, depth, parent);
        if let Some(idx) = self.free.pop() {
            self.nodes[idx as usize] = node;
            NodeId(idx)
        } else {
            self.nodes.push(node);
            NodeId((self.nodes.len() - 1) as u32)
        }
    }

    fn child(&self, node: NodeId, character: char, escape: bool) -> Option<NodeId> {
        if escape {
            self.node(node).escaped_underscore
        } else {
            self.node(node).children.get(&character).copied()
        }
    }

    fn set_child(&mut self, node: NodeId, character: char, escape: bool, child: NodeId) {
        if escape {
            self.node_mut(node).escaped_underscore = Some(child);
        } else {
            self.node_mut(node).children.insert(character, child);
        }
    }

    fn remove_child(&mut self, node: NodeId, character: char, escape: bool) {
        if escape {
            self.node_mut(node).escaped_underscore = None;
        } else {
            self.node_mut(node).children.remove(&character);
        }
    }

    /// §4.1 insertion. A no-op on an empty phrase (§7 "malformed phrase").
    pub(crate) fn insert(&mut self, phrase: &str) {
        if phrase.is_empty() {
            return;
        }

        let mut current = ROOT;
        for (character, escape) in tokenize(phrase) {
            current = match self.child(current, character, escape) {
                Some(existing) => existing,
                None => {
                    let depth = self.node(current).depth + 1;
                    let new_node = self.alloc(character, escape, depth, current);
                    self.set_child(current, character, escape, new_node);
                    new_node
                }
            };
        }
        self.node_mut(current).terminal = true;
        self.mark_dirty();
    }

    /// §4.2 removal. A no-op if the phrase was never inserted or is empty.
    pub(crate) fn remove(&mut self, phrase: &str) {
        if phrase.is_empty() {
            return;
        }

        let tokens = tokenize(phrase);
        let mut path = Vec::with_capacity(tokens.len());
        let mut current = ROOT;
        for (character, escape) in &tokens {
            match self.child(current, *character, *escape) {
                Some(next) => {
                    path.push((current, *character, *escape));
                    current = next;
                }
                None => return, // lookup miss: no-op
            }
        }

        if !self.node(current).terminal {
            // Walk completed onto a non-terminal node: this exact phrase
            // was never inserted (only a longer phrase sharing its prefix).
            return;
        }
        self.node_mut(current).terminal = false;
        self.mark_dirty();

        // Prune trailing nodes that are now childless and non-terminal,
        // walking back toward the root. `path` holds, in order, the
        // (parent, character, escape) edge used to reach each visited
        // node, so we can delete the specific edge without a reverse scan.
        let mut node = current;
        while let Some((parent, character, escape)) = path.pop() {
            if node == ROOT || !self.node(node).is_leaf() || self.node(node).terminal {
                break;
            }
            self.remove_child(parent, character, escape);
            self.free.push(node.0);
            node = parent;
        }
    }

    /// §4.6: the phrase as inserted, reconstructed from parent pointers.
    /// Wildcard tokens are rendered back as the wildcard glyph, so this can
    /// differ from the text that actually matched.
    pub(crate) fn origin_phrase(&self, mut node: NodeId) -> String {
        let mut chars = Vec::new();
        while node != ROOT {
            chars.push(self.node(node).character);
            node = self.node(node).parent;
        }
        chars.reverse();
        chars.into_iter().collect()
    }
}
