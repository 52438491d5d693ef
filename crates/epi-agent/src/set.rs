//! `AgentSet` — a dense index set over `AgentId`s.
//!
//! Members are stored contiguously in `members`; `slot[agent]` records each
//! member's position (or `u32::MAX` when absent).  Insert, remove, and
//! membership tests are O(1); iteration is a contiguous scan.  Removal swaps
//! the last member into the vacated slot, so iteration order depends only on
//! the sequence of operations and is therefore reproducible.

use epi_core::AgentId;

const ABSENT: u32 = u32::MAX;

#[derive(Clone, Debug, Default)]
pub struct AgentSet {
    members: Vec<AgentId>,
    slot:    Vec<u32>,
}

impl AgentSet {
    /// An empty set able to hold ids in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::new(),
            slot:    vec![ABSENT; capacity],
        }
    }

    /// A set containing every id in `0..count`.
    pub fn full(count: usize) -> Self {
        Self {
            members: (0..count as u32).map(AgentId).collect(),
            slot:    (0..count as u32).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.slot.get(agent.index()).is_some_and(|&s| s != ABSENT)
    }

    /// Add `agent`.  Returns `false` if it was already present.
    ///
    /// # Panics
    /// Panics if `agent` is outside the capacity given at construction.
    pub fn insert(&mut self, agent: AgentId) -> bool {
        if self.contains(agent) {
            return false;
        }
        self.slot[agent.index()] = self.members.len() as u32;
        self.members.push(agent);
        true
    }

    /// Remove `agent`.  Returns `false` if it was not present.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        if !self.contains(agent) {
            return false;
        }
        let pos = self.slot[agent.index()] as usize;
        self.members.swap_remove(pos);
        if let Some(&moved) = self.members.get(pos) {
            self.slot[moved.index()] = pos as u32;
        }
        self.slot[agent.index()] = ABSENT;
        true
    }

    /// Members in internal order.
    #[inline]
    pub fn as_slice(&self) -> &[AgentId] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.members.iter().copied()
    }

    /// Members copied out in ascending id order.
    pub fn to_sorted_vec(&self) -> Vec<AgentId> {
        let mut v = self.members.clone();
        v.sort_unstable();
        v
    }
}
