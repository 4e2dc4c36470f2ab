//! Dense collection of pending applicants.
//!
//! Selection indexes straight into the backing slice, so the collection is
//! kept compact: removal swaps the last member into the vacated slot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use veri_types::Address;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PendingSet {
    members: Vec<Address>,
    /// member → position in `members`.
    positions: HashMap<Address, usize>,
}

impl PendingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member. Returns `false` if it was already present.
    pub fn insert(&mut self, member: Address) -> bool {
        if self.positions.contains_key(&member) {
            return false;
        }
        self.positions.insert(member.clone(), self.members.len());
        self.members.push(member);
        true
    }

    /// Remove a member by swapping the last one into its slot.
    /// Returns `false` if it was not present.
    pub fn remove(&mut self, member: &Address) -> bool {
        let Some(position) = self.positions.remove(member) else {
            return false;
        };
        self.members.swap_remove(position);
        if let Some(moved) = self.members.get(position) {
            self.positions.insert(moved.clone(), position);
        }
        true
    }

    pub fn contains(&self, member: &Address) -> bool {
        self.positions.contains_key(member)
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
