// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use crate::{
    sortition_tree::{
        traits::SortitionTreeHelper,
        types::{
            SortitionTreeError, SortitionTreeMaxNodes, StorageOverflowError,
            UpdateAncestorsOperation,
        },
    },
    traits::WeightedSortition,
    BalanceOf, Config,
};
use alloc::vec;
use frame_support::{
    ensure,
    pallet_prelude::RuntimeDebugNoBound,
    storage::{bounded_btree_map::BoundedBTreeMap, bounded_vec::BoundedVec},
    traits::Get,
    CloneNoBound, PartialEqNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{traits::Zero, DispatchError, DispatchResult, SaturatedConversion};
use zeitgeist_primitives::{
    constants::MIN_SORTITION_ARITY,
    math::checked_ops_res::{CheckedAddRes, CheckedMulRes, CheckedSubRes},
};

/// A K-ary sum tree used to draw participants with probability proportional to their weight in
/// `O(K * log_K(n))`.
///
/// Every participant owns exactly one leaf which records their weight. Every other node records the
/// sum of the weights of its children, so the root holds the total weight of the tree. When a
/// participant leaves the tree, their leaf is not removed, but zeroed and marked as _vacant_
/// instead. Vacant leaves are reassigned to new participants before the tree grows.
///
/// The tree grows by appending nodes. Appending the first child of a leaf turns that leaf into a
/// sum node and moves its occupant one level down, so participants only ever live on leaves.
///
/// # Generics
///
/// - `T`: The pallet configuration.
/// - `S`: A getter for the maximum number of participants.
#[derive(
    CloneNoBound, Decode, Encode, Eq, MaxEncodedLen, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo,
)]
#[scale_info(skip_type_params(T, S))]
pub(crate) struct SortitionTree<T, S>
where
    T: Config,
    S: Get<u32>,
{
    /// The number of children of each sum node. Fixed when the tree is created.
    pub(crate) arity: u32,
    /// The weights of the nodes of the tree, ordered by depth and from left to right. The children
    /// of the node at index `i` are at `arity * i + 1` up to `arity * i + arity`.
    pub(crate) nodes: BoundedVec<BalanceOf<T>, SortitionTreeMaxNodes<S>>,
    /// Maps an occupied leaf to its participant.
    pub(crate) leaf_owners: BoundedBTreeMap<u32, T::AccountId, S>,
    /// Maps a participant to their leaf.
    pub(crate) participant_to_index: BoundedBTreeMap<T::AccountId, u32, S>,
    /// The indices of vacant leaves, with the last element being the most recently vacated leaf.
    pub(crate) vacant_leaves: BoundedVec<u32, S>,
    /// The number of participants with non-zero weight.
    pub(crate) eligible_count: u32,
}

impl<T, S> SortitionTree<T, S>
where
    T: Config,
    S: Get<u32>,
{
    /// Create a new sortition tree which contains only the root.
    ///
    /// # Parameters
    ///
    /// - `arity`: The branching factor of the tree. Must be at least `2`.
    pub(crate) fn new(arity: u32) -> Result<SortitionTree<T, S>, DispatchError> {
        ensure!(
            arity >= MIN_SORTITION_ARITY,
            SortitionTreeError::InvalidArity.into_dispatch_error::<T>()
        );
        let nodes = vec![Zero::zero()]
            .try_into()
            .map_err(|_| StorageOverflowError::Nodes.into_dispatch_error::<T>())?;
        Ok(SortitionTree {
            arity,
            nodes,
            leaf_owners: BoundedBTreeMap::new(),
            participant_to_index: BoundedBTreeMap::new(),
            vacant_leaves: BoundedVec::default(),
            eligible_count: 0,
        })
    }

    /// Fails if adding `delta` to the total weight overflows. Since no sum exceeds the root, this
    /// covers all ancestors of any leaf.
    fn ensure_total_can_grow_by(&self, delta: BalanceOf<T>) -> DispatchResult {
        let _ = self.total_weight()?.checked_add_res(&delta)?;
        Ok(())
    }
}

impl<T, S> WeightedSortition<T> for SortitionTree<T, S>
where
    T: Config,
    S: Get<u32>,
{
    fn insert_or_update(&mut self, who: &T::AccountId, weight: BalanceOf<T>) -> DispatchResult {
        let opt_index = self.participant_to_index.get(who).copied();
        let index = if let Some(index) = opt_index {
            index
        } else {
            ensure!(
                (self.participant_to_index.len() as u32) < Self::max_participants(),
                SortitionTreeError::TreeIsFull.into_dispatch_error::<T>()
            );
            self.ensure_total_can_grow_by(weight)?;
            let index = if let Some(index) = self.take_last_vacant_leaf() {
                index
            } else {
                self.push_leaf()?
            };
            self.leaf_owners
                .try_insert(index, who.clone())
                .map_err(|_| StorageOverflowError::LeafOwners.into_dispatch_error::<T>())?;
            self.participant_to_index
                .try_insert(who.clone(), index)
                .map_err(|_| StorageOverflowError::ParticipantToIndex.into_dispatch_error::<T>())?;
            index
        };
        self.set_leaf_weight(index, weight)
    }

    fn remove(&mut self, who: &T::AccountId) -> DispatchResult {
        let index = self.map_participant_to_index(who)?;
        self.vacant_leaves
            .try_push(index)
            .map_err(|_| StorageOverflowError::VacantLeaves.into_dispatch_error::<T>())?;
        self.set_leaf_weight(index, Zero::zero())?;
        let _ = self.leaf_owners.remove(&index);
        let _ = self.participant_to_index.remove(who);
        Ok(())
    }

    fn total_weight(&self) -> Result<BalanceOf<T>, DispatchError> {
        self.get_node(0u32)
    }

    fn weight_of(&self, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError> {
        let index = self.map_participant_to_index(who)?;
        self.get_node(index)
    }

    fn eligible_count(&self) -> u32 {
        self.eligible_count
    }

    fn draw(&self, random_value: u128) -> Result<T::AccountId, DispatchError> {
        let total_weight = self.total_weight()?;
        ensure!(!total_weight.is_zero(), SortitionTreeError::EmptyTree.into_dispatch_error::<T>());
        let modulus: u128 = total_weight.saturated_into();
        let mut cursor: BalanceOf<T> = (random_value % modulus).saturated_into();
        let node_count = self.node_count();
        let mut index = 0u32;
        while !self.is_leaf(index)? {
            let first_child_index = self.first_child_index(index)?;
            let end = first_child_index.saturating_add(self.arity).min(node_count);
            let mut opt_next_index = None;
            for child_index in first_child_index..end {
                let weight = self.get_node(child_index)?;
                if cursor < weight {
                    opt_next_index = Some(child_index);
                    break;
                }
                cursor = cursor.checked_sub_res(&weight)?;
            }
            index = opt_next_index
                .ok_or(SortitionTreeError::InconsistentSums.into_dispatch_error::<T>())?;
        }
        self.leaf_owners
            .get(&index)
            .cloned()
            .ok_or(SortitionTreeError::VacantLeaf.into_dispatch_error::<T>())
    }
}

impl<T, S> SortitionTreeHelper<T> for SortitionTree<T, S>
where
    T: Config,
    S: Get<u32>,
{
    fn parent_index(&self, index: u32) -> Option<u32> {
        if index == 0 {
            None
        } else {
            index.checked_sub(1)?.checked_div(self.arity)
        }
    }

    fn first_child_index(&self, index: u32) -> Result<u32, DispatchError> {
        index.checked_mul_res(&self.arity)?.checked_add_res(&1)
    }

    fn is_leaf(&self, index: u32) -> Result<bool, DispatchError> {
        Ok(index != 0 && self.first_child_index(index)? >= self.node_count())
    }

    fn take_last_vacant_leaf(&mut self) -> Option<u32> {
        self.vacant_leaves.pop()
    }

    fn push_leaf(&mut self) -> Result<u32, DispatchError> {
        let index = self.node_count();
        // The new node is the first child of an occupied leaf, which has to make room.
        let opt_split_index = self.parent_index(index).filter(|&parent_index| {
            parent_index != 0 && self.first_child_index(parent_index).ok() == Some(index)
        });
        let required_nodes = if opt_split_index.is_some() { 2u32 } else { 1u32 };
        ensure!(
            index.checked_add_res(&required_nodes)? <= Self::max_node_count(),
            SortitionTreeError::TreeIsFull.into_dispatch_error::<T>()
        );
        self.nodes
            .try_push(Zero::zero())
            .map_err(|_| StorageOverflowError::Nodes.into_dispatch_error::<T>())?;
        if let Some(split_index) = opt_split_index {
            let moved_index = index.checked_add_res(&1)?;
            let weight = self.get_node(split_index)?;
            self.nodes
                .try_push(weight)
                .map_err(|_| StorageOverflowError::Nodes.into_dispatch_error::<T>())?;
            if let Some(owner) = self.leaf_owners.remove(&split_index) {
                self.participant_to_index
                    .try_insert(owner.clone(), moved_index)
                    .map_err(|_| {
                        StorageOverflowError::ParticipantToIndex.into_dispatch_error::<T>()
                    })?;
                self.leaf_owners
                    .try_insert(moved_index, owner)
                    .map_err(|_| StorageOverflowError::LeafOwners.into_dispatch_error::<T>())?;
            }
        }
        Ok(index)
    }

    fn set_leaf_weight(&mut self, index: u32, weight: BalanceOf<T>) -> DispatchResult {
        let old_weight = self.get_node(index)?;
        let (delta, op) = if weight >= old_weight {
            let delta = weight.checked_sub_res(&old_weight)?;
            self.ensure_total_can_grow_by(delta)?;
            (delta, UpdateAncestorsOperation::Add)
        } else {
            (old_weight.checked_sub_res(&weight)?, UpdateAncestorsOperation::Sub)
        };
        let eligible_count = match (old_weight.is_zero(), weight.is_zero()) {
            (true, false) => self.eligible_count.checked_add_res(&1)?,
            (false, true) => self.eligible_count.checked_sub_res(&1)?,
            _ => self.eligible_count,
        };
        let node = self.get_node_mut(index)?;
        *node = weight;
        self.update_ancestors(index, delta, op)?;
        self.eligible_count = eligible_count;
        Ok(())
    }

    fn update_ancestors(
        &mut self,
        index: u32,
        delta: BalanceOf<T>,
        op: UpdateAncestorsOperation,
    ) -> DispatchResult {
        if delta.is_zero() {
            return Ok(());
        }
        let mut current_index = index;
        while let Some(parent_index) = self.parent_index(current_index) {
            let node = self.get_node_mut(parent_index)?;
            *node = match op {
                UpdateAncestorsOperation::Add => node.checked_add_res(&delta)?,
                UpdateAncestorsOperation::Sub => node.checked_sub_res(&delta)?,
            };
            current_index = parent_index;
        }
        Ok(())
    }

    fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    fn get_node(&self, index: u32) -> Result<BalanceOf<T>, DispatchError> {
        self.nodes
            .get(index as usize)
            .copied()
            .ok_or(SortitionTreeError::NodeNotFound.into_dispatch_error::<T>())
    }

    fn get_node_mut(&mut self, index: u32) -> Result<&mut BalanceOf<T>, DispatchError> {
        self.nodes
            .get_mut(index as usize)
            .ok_or(SortitionTreeError::NodeNotFound.into_dispatch_error::<T>())
    }

    fn map_participant_to_index(&self, who: &T::AccountId) -> Result<u32, DispatchError> {
        self.participant_to_index
            .get(who)
            .ok_or(SortitionTreeError::ParticipantNotFound.into_dispatch_error::<T>())
            .copied()
    }

    fn max_participants() -> u32 {
        S::get()
    }

    fn max_node_count() -> u32 {
        SortitionTreeMaxNodes::<S>::get()
    }
}
