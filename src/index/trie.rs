//! Prefix trie with a one-way frozen form.
//!
//! While building, the trie is a plain tree of nodes with sorted edge lists.
//! [`PrefixTrie::freeze`] minimizes it into a DAWG: states with identical
//! suffix languages are merged and stored in two flat arrays. Both forms
//! answer membership and prefix enumeration identically, and both enumerate
//! keys in lexicographic `char` order.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::IndexError;

type StateId = u32;

const ROOT: StateId = 0;

/// Read access shared by the building and frozen representations.
trait Automaton {
    fn root(&self) -> StateId;
    fn is_terminal(&self, state: StateId) -> bool;
    /// Outgoing edges, sorted by label.
    fn edges(&self, state: StateId) -> &[(char, StateId)];

    fn step(&self, state: StateId, ch: char) -> Option<StateId> {
        let edges = self.edges(state);
        edges
            .binary_search_by_key(&ch, |&(label, _)| label)
            .ok()
            .map(|i| edges[i].1)
    }

    fn walk(&self, key: &str) -> Option<StateId> {
        key.chars()
            .try_fold(self.root(), |state, ch| self.step(state, ch))
    }

    /// Append every key starting with `prefix` to `out`, in order.
    fn collect(&self, prefix: &str, out: &mut Vec<SmolStr>) {
        let Some(start) = self.walk(prefix) else {
            return;
        };
        let mut word = String::from(prefix);
        if self.is_terminal(start) {
            out.push(SmolStr::from(word.as_str()));
        }

        // (state, index of the next edge to follow)
        let mut stack: Vec<(StateId, usize)> = vec![(start, 0)];
        while let Some(top) = stack.len().checked_sub(1) {
            let (state, next) = stack[top];
            match self.edges(state).get(next) {
                Some(&(ch, child)) => {
                    stack[top].1 += 1;
                    word.push(ch);
                    if self.is_terminal(child) {
                        out.push(SmolStr::from(word.as_str()));
                    }
                    stack.push((child, 0));
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        word.pop();
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct BuildNode {
    terminal: bool,
    children: Vec<(char, StateId)>,
}

/// Mutable tree form. A child's id is always greater than its parent's.
#[derive(Debug, Clone)]
struct BuildTrie {
    nodes: Vec<BuildNode>,
}

impl BuildTrie {
    fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
        }
    }

    /// Returns `true` if the key was not present before.
    fn insert(&mut self, key: &str) -> bool {
        let mut state = ROOT;
        for ch in key.chars() {
            let found = self.nodes[state as usize]
                .children
                .binary_search_by_key(&ch, |&(label, _)| label);
            state = match found {
                Ok(i) => self.nodes[state as usize].children[i].1,
                Err(i) => {
                    let child = self.nodes.len() as StateId;
                    self.nodes.push(BuildNode::default());
                    self.nodes[state as usize].children.insert(i, (ch, child));
                    child
                }
            };
        }
        !std::mem::replace(&mut self.nodes[state as usize].terminal, true)
    }

    /// Merge equivalent subtrees bottom-up into a minimal DAWG.
    fn minimize(&self) -> Dawg {
        let mut states: Vec<DawgState> = Vec::new();
        let mut edges: Vec<(char, StateId)> = Vec::new();
        let mut register: FxHashMap<(bool, Vec<(char, StateId)>), StateId> =
            FxHashMap::default();
        let mut canonical: Vec<StateId> = vec![ROOT; self.nodes.len()];

        // Children have larger ids than parents, so a reverse sweep visits
        // every child before its parent.
        for id in (0..self.nodes.len()).rev() {
            let node = &self.nodes[id];
            let signature = (
                node.terminal,
                node.children
                    .iter()
                    .map(|&(ch, child)| (ch, canonical[child as usize]))
                    .collect::<Vec<_>>(),
            );
            let state = *register.entry(signature).or_insert_with_key(|(terminal, out)| {
                let state = states.len() as StateId;
                states.push(DawgState {
                    terminal: *terminal,
                    first_edge: edges.len() as u32,
                    edge_count: out.len() as u32,
                });
                edges.extend_from_slice(out);
                state
            });
            canonical[id] = state;
        }

        states.shrink_to_fit();
        edges.shrink_to_fit();
        Dawg {
            states,
            edges,
            root: canonical[ROOT as usize],
        }
    }
}

impl Automaton for BuildTrie {
    fn root(&self) -> StateId {
        ROOT
    }

    fn is_terminal(&self, state: StateId) -> bool {
        self.nodes[state as usize].terminal
    }

    fn edges(&self, state: StateId) -> &[(char, StateId)] {
        &self.nodes[state as usize].children
    }
}

#[derive(Debug, Clone, Copy)]
struct DawgState {
    terminal: bool,
    first_edge: u32,
    edge_count: u32,
}

/// Frozen form: minimized states over one shared edge array.
#[derive(Debug, Clone)]
struct Dawg {
    states: Vec<DawgState>,
    edges: Vec<(char, StateId)>,
    root: StateId,
}

impl Automaton for Dawg {
    fn root(&self) -> StateId {
        self.root
    }

    fn is_terminal(&self, state: StateId) -> bool {
        self.states[state as usize].terminal
    }

    fn edges(&self, state: StateId) -> &[(char, StateId)] {
        let state = self.states[state as usize];
        let start = state.first_edge as usize;
        &self.edges[start..start + state.edge_count as usize]
    }
}

#[derive(Debug, Clone)]
enum Repr {
    Building(BuildTrie),
    Frozen(Dawg),
}

/// Set of strings supporting membership tests and prefix enumeration.
///
/// Keys are stored as given; callers normalize before inserting.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    repr: Repr,
    len: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            repr: Repr::Building(BuildTrie::new()),
            len: 0,
        }
    }

    /// Insert a key. Returns `Ok(true)` if it was not already present.
    ///
    /// Fails with [`IndexError::Frozen`] once the trie has been frozen.
    pub fn insert(&mut self, key: &str) -> Result<bool, IndexError> {
        match &mut self.repr {
            Repr::Building(trie) => {
                let inserted = trie.insert(key);
                if inserted {
                    self.len += 1;
                }
                Ok(inserted)
            }
            Repr::Frozen(_) => Err(IndexError::frozen(key)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        match &self.repr {
            Repr::Building(trie) => trie.walk(key).is_some_and(|s| trie.is_terminal(s)),
            Repr::Frozen(dawg) => dawg.walk(key).is_some_and(|s| dawg.is_terminal(s)),
        }
    }

    /// Every stored key that starts with `prefix`, in lexicographic order.
    /// The empty prefix yields all keys.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<SmolStr> {
        let mut out = Vec::new();
        match &self.repr {
            Repr::Building(trie) => trie.collect(prefix, &mut out),
            Repr::Frozen(dawg) => dawg.collect(prefix, &mut out),
        }
        out
    }

    /// Compact into the read-only DAWG form. Freezing twice is a no-op.
    pub fn freeze(&mut self) {
        let Repr::Building(trie) = &self.repr else {
            return;
        };
        let dawg = trie.minimize();
        tracing::debug!(
            keys = self.len,
            nodes = trie.nodes.len(),
            states = dawg.states.len(),
            edges = dawg.edges.len(),
            "froze prefix trie"
        );
        self.repr = Repr::Frozen(dawg);
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.repr, Repr::Frozen(_))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes (building) or states (frozen).
    pub fn node_count(&self) -> usize {
        match &self.repr {
            Repr::Building(trie) => trie.nodes.len(),
            Repr::Frozen(dawg) => dawg.states.len(),
        }
    }
}
