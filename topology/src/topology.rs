//! Committee tree state and forward-target selection.
//!
//! A [`TreeTopology`] holds the ordered committee list and the local
//! node's position in it, and selects the minimal set of reachable peers
//! a message should be forwarded to. Selection walks the implicit tree
//! downward from the local position (direct forward targets, recursing
//! past unreachable children) and upward (at most one reachable ancestor
//! as the return path for e.g. votes).

use std::collections::HashSet;
use std::sync::RwLock;

use canopy_types::NodeId;

use crate::{TopologyConfig, TopologyError, TreeLayout};

/// Committee list and derived positions. Replaced wholesale on refresh;
/// never mutated element-wise.
struct CommitteeState {
    /// Ordered committee members. A node's index in this list is its
    /// tree position; the ordering must be identical on every
    /// participant deriving a topology from the same committee.
    committee: Vec<NodeId>,
    /// The local node's position, or `None` when it is an observer
    /// outside the committee.
    local_index: Option<usize>,
}

impl CommitteeState {
    /// Identifier at `index`, or `None` when the index is outside the
    /// committee. Out-of-range lookups are legal and mean "not found".
    fn node_at(&self, index: usize) -> Option<&NodeId> {
        let node = self.committee.get(index);
        if node.is_none() {
            tracing::trace!(index, size = self.committee.len(), "node_at: invalid index");
        }
        node
    }
}

/// Broadcast-tree topology for one network participant.
///
/// Selection and refresh may be called concurrently from different
/// threads: selection holds the read lock for its full duration so every
/// recursive step observes one consistent committee snapshot, and refresh
/// holds the write lock, so a selection in progress never sees a
/// partially replaced list.
pub struct TreeTopology {
    local_id: NodeId,
    layout: TreeLayout,
    /// Extra positions skipped per fallback hop past an unreachable child.
    fallback_level_skip: usize,
    state: RwLock<CommitteeState>,
}

impl TreeTopology {
    /// Create a topology for the node identified by `local_id`.
    ///
    /// The committee starts empty; call [`TreeTopology::refresh`] with
    /// the current committee list before selecting targets.
    pub fn new(local_id: NodeId, config: TopologyConfig) -> Result<Self, TopologyError> {
        config.validate()?;
        Ok(Self {
            local_id,
            layout: TreeLayout::new(config.tree_width),
            fallback_level_skip: config.fallback_level_skip,
            state: RwLock::new(CommitteeState {
                committee: Vec::new(),
                local_index: None,
            }),
        })
    }

    /// The identifier this topology was created with.
    pub fn local_id(&self) -> &NodeId {
        &self.local_id
    }

    /// The local node's current committee position, if it is a member.
    pub fn local_index(&self) -> Option<usize> {
        self.state.read().expect("topology lock poisoned").local_index
    }

    /// Number of committee members in the current snapshot.
    pub fn committee_size(&self) -> usize {
        self.state
            .read()
            .expect("topology lock poisoned")
            .committee
            .len()
    }

    /// Replace the committee list after a membership change.
    ///
    /// Called once per finalized block, so the unchanged case must be
    /// cheap: when `new_committee` is element-wise identical to the
    /// stored list this is a no-op. Otherwise the list is replaced
    /// atomically and the local position recomputed. An empty list is
    /// legal and makes every subsequent selection empty.
    pub fn refresh(&self, new_committee: &[NodeId]) {
        let mut state = self.state.write().expect("topology lock poisoned");
        if state.committee == new_committee {
            return;
        }

        let local_index = new_committee.iter().position(|id| *id == self.local_id);
        tracing::debug!(
            old_size = state.committee.len(),
            new_size = new_committee.len(),
            local_index = ?local_index,
            "committee replaced"
        );
        state.committee = new_committee.to_vec();
        state.local_index = local_index;
    }

    /// Select the peers a message should be forwarded to, given the
    /// peers currently reachable from this node.
    ///
    /// - When the local node is **not** a committee member it forwards
    ///   only to the root (position 0) — or, if the root is unreachable,
    ///   to reachable descendants found by the downward search, so some
    ///   deeper member serves as the entry point into the tree.
    /// - When the local node **is** a member, the result is its
    ///   reachable children (recursing past unreachable ones) plus at
    ///   most one reachable ancestor.
    ///
    /// `peers` is a point-in-time snapshot owned by the caller; it is
    /// never retained. The result may be empty — e.g. an empty
    /// committee, an empty peer set, or a fully unreachable tree — and
    /// that is a valid outcome, not an error.
    pub fn select_forward_targets(&self, peers: &HashSet<NodeId>) -> Vec<NodeId> {
        let state = self.state.read().expect("topology lock poisoned");
        let mut selected = Vec::new();

        match state.local_index {
            // Observer outside the committee: hand the message to the root,
            // or to a reachable descendant when the root itself is down.
            None => {
                if let Some(root) = state.committee.first() {
                    if peers.contains(root) {
                        selected.push(root.clone());
                        return selected;
                    }
                }
                self.select_children(&state, 0, peers, &mut selected);
            }
            Some(local) => {
                self.select_children(&state, local, peers, &mut selected);
                if let Some(parent) = self.select_parent(&state, local, peers) {
                    selected.push(parent);
                }
            }
        }

        selected
    }

    /// Downward search: append every reachable child of `parent`,
    /// recursing into the subtree of each unreachable child so that some
    /// reachable descendant stands in for it.
    ///
    /// Terminates because child positions strictly increase and the loop
    /// stops at the end of the committee.
    fn select_children(
        &self,
        state: &CommitteeState,
        parent: usize,
        peers: &HashSet<NodeId>,
        selected: &mut Vec<NodeId>,
    ) {
        for slot in 0..self.layout.width() {
            let child = self.layout.child_index(parent, slot);
            // Positions grow with the slot, so every later slot (and
            // everything below it) is out of range too.
            if child >= state.committee.len() {
                break;
            }
            let Some(node) = state.node_at(child) else {
                continue;
            };
            if peers.contains(node) {
                tracing::trace!(
                    selected = %node.abridged(),
                    index = child,
                    "select_children"
                );
                selected.push(node.clone());
            } else {
                self.select_children(state, child + self.fallback_level_skip, peers, selected);
            }
        }
    }

    /// Upward search: the nearest reachable ancestor of `index`, walking
    /// toward the root. Siblings and other branches are never probed;
    /// the root has no ancestor.
    fn select_parent(
        &self,
        state: &CommitteeState,
        index: usize,
        peers: &HashSet<NodeId>,
    ) -> Option<NodeId> {
        let mut parent = self.layout.parent_index(index);
        if parent == index {
            return None;
        }
        loop {
            if let Some(node) = state.node_at(parent) {
                if peers.contains(node) {
                    tracing::trace!(
                        selected = %node.abridged(),
                        index = parent,
                        "select_parent"
                    );
                    return Some(node.clone());
                }
            }
            if parent == 0 {
                return None;
            }
            parent = self.layout.parent_index(parent);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
