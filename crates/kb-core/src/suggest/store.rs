//! Ternary search tree over `char`s, stored in a node arena.
//!
//! Each node compares one character. `lower`/`higher` lead to siblings whose
//! character at the same depth sorts before/after, `equal` continues to the
//! next character of terms sharing the prefix. Nodes carry the full path text
//! so completions never rebuild strings from the path.

use std::cmp::Ordering;

use tracing::debug;

use super::{StoreError, WeightedTerm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Node {
    ch: char,
    terminal: bool,
    weight: u32,
    text: Box<str>,
    lower: Option<NodeId>,
    equal: Option<NodeId>,
    higher: Option<NodeId>,
}

impl Node {
    fn to_term(&self) -> WeightedTerm {
        WeightedTerm {
            term: self.text.to_string(),
            weight: self.weight,
        }
    }
}

/// Where the walk continues: the root link or one of a node's child links.
#[derive(Clone, Copy)]
enum Slot {
    Root,
    Lower(NodeId),
    Equal(NodeId),
    Higher(NodeId),
}

/// Borrowed view of a node returned by [`TermStore::find_node`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    /// The character this node compares on.
    pub fn ch(&self) -> char {
        self.node.ch
    }

    /// Whether a stored term ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.node.terminal
    }

    /// Weight of the term ending here, `None` for inner nodes.
    pub fn weight(&self) -> Option<u32> {
        self.node.terminal.then_some(self.node.weight)
    }

    /// Full text of the path leading to this node.
    pub fn text(&self) -> &'a str {
        &self.node.text
    }
}

#[derive(Debug, Default)]
pub struct TermStore {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    terms: usize,
}

impl TermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms stored.
    pub fn len(&self) -> usize {
        self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// Number of allocated tree nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert `term`, or overwrite its weight if already present.
    ///
    /// An empty term is ignored. Creates at most one node per character.
    pub fn insert(&mut self, term: &str, weight: u32) -> Result<(), StoreError> {
        let mut chars = term.char_indices();
        let Some((mut offset, mut ch)) = chars.next() else {
            debug!("ignoring empty term");
            return Ok(());
        };

        let mut slot = Slot::Root;
        loop {
            let id = match self.child(slot) {
                Some(id) => id,
                None => {
                    let end = offset + ch.len_utf8();
                    let id = self.alloc(ch, &term[..end])?;
                    self.set_child(slot, id);
                    id
                }
            };

            match ch.cmp(&self.nodes[id.index()].ch) {
                Ordering::Less => slot = Slot::Lower(id),
                Ordering::Greater => slot = Slot::Higher(id),
                Ordering::Equal => match chars.next() {
                    Some((next_offset, next_ch)) => {
                        offset = next_offset;
                        ch = next_ch;
                        slot = Slot::Equal(id);
                    }
                    None => {
                        let node = &mut self.nodes[id.index()];
                        if !node.terminal {
                            node.terminal = true;
                            self.terms += 1;
                        }
                        node.weight = weight;
                        return Ok(());
                    }
                },
            }
        }
    }

    /// Node whose path spells exactly `prefix`. Empty prefix never matches.
    pub fn find_node(&self, prefix: &str) -> Option<NodeRef<'_>> {
        self.locate(prefix).map(|id| NodeRef {
            node: &self.nodes[id.index()],
        })
    }

    /// Every stored term starting with `prefix`, in ascending code-point
    /// order. Includes `prefix` itself when it is a stored term.
    pub fn completions(&self, prefix: &str) -> Vec<WeightedTerm> {
        let Some(id) = self.locate(prefix) else {
            return Vec::new();
        };
        let node = &self.nodes[id.index()];
        let mut out = Vec::new();
        if node.terminal {
            out.push(node.to_term());
        }
        self.collect_subtree(node.equal, &mut out);
        out
    }

    /// Drop every node. Safe to call on an empty store.
    pub fn clear(&mut self) {
        // Replace rather than truncate so the arena's memory is released.
        self.nodes = Vec::new();
        self.root = None;
        self.terms = 0;
    }

    fn locate(&self, prefix: &str) -> Option<NodeId> {
        let mut chars = prefix.chars();
        let mut ch = chars.next()?;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id.index()];
            match ch.cmp(&node.ch) {
                Ordering::Less => current = node.lower,
                Ordering::Greater => current = node.higher,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        ch = next;
                        current = node.equal;
                    }
                    None => return Some(id),
                },
            }
        }
        None
    }

    /// In-order walk (lower, self, equal, higher) with an explicit stack.
    fn collect_subtree(&self, start: Option<NodeId>, out: &mut Vec<WeightedTerm>) {
        enum Visit {
            Expand(NodeId),
            Emit(NodeId),
        }

        let mut stack: Vec<Visit> = start.map(Visit::Expand).into_iter().collect();
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Emit(id) => out.push(self.nodes[id.index()].to_term()),
                Visit::Expand(id) => {
                    let node = &self.nodes[id.index()];
                    // Pushed in reverse so `lower` pops first.
                    if let Some(higher) = node.higher {
                        stack.push(Visit::Expand(higher));
                    }
                    if let Some(equal) = node.equal {
                        stack.push(Visit::Expand(equal));
                    }
                    if node.terminal {
                        stack.push(Visit::Emit(id));
                    }
                    if let Some(lower) = node.lower {
                        stack.push(Visit::Expand(lower));
                    }
                }
            }
        }
    }

    fn child(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Root => self.root,
            Slot::Lower(id) => self.nodes[id.index()].lower,
            Slot::Equal(id) => self.nodes[id.index()].equal,
            Slot::Higher(id) => self.nodes[id.index()].higher,
        }
    }

    fn set_child(&mut self, slot: Slot, child: NodeId) {
        let link = match slot {
            Slot::Root => &mut self.root,
            Slot::Lower(id) => &mut self.nodes[id.index()].lower,
            Slot::Equal(id) => &mut self.nodes[id.index()].equal,
            Slot::Higher(id) => &mut self.nodes[id.index()].higher,
        };
        *link = Some(child);
    }

    fn alloc(&mut self, ch: char, text: &str) -> Result<NodeId, StoreError> {
        let id = u32::try_from(self.nodes.len())
            .map(NodeId)
            .map_err(|_| StoreError::NodeLimit(self.nodes.len()))?;
        self.nodes.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);
        self.nodes.push(Node {
            ch,
            terminal: false,
            weight: 0,
            text: owned.into_boxed_str(),
            lower: None,
            equal: None,
            higher: None,
        });
        Ok(id)
    }
}
