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

use crate::{sortition_tree::types::UpdateAncestorsOperation, BalanceOf, Config};
use sp_runtime::{DispatchError, DispatchResult};

/// A collection of member functions used in the implementation of `WeightedSortition` for
/// `SortitionTree`.
pub(crate) trait SortitionTreeHelper<T>
where
    T: Config,
{
    /// Return the index of a node's parent; `None` if `index` is `0u32`, i.e. the node is root.
    fn parent_index(&self, index: u32) -> Option<u32>;

    /// Return the index of the first child of the node at `index`. The index may point past the
    /// end of the tree.
    fn first_child_index(&self, index: u32) -> Result<u32, DispatchError>;

    /// Return `true` if the node at `index` has no children. The root is never a leaf.
    fn is_leaf(&self, index: u32) -> Result<bool, DispatchError>;

    /// Pops the most recently vacated leaf's index from the stack. Returns `None` if there's no
    /// vacant leaf.
    fn take_last_vacant_leaf(&mut self) -> Option<u32>;

    /// Append a new leaf with weight zero to the tree and return its index.
    ///
    /// If the new leaf is the first child of an occupied leaf, that leaf is turned into a sum
    /// node and its occupant is moved to a second new leaf next to the first one.
    fn push_leaf(&mut self) -> Result<u32, DispatchError>;

    /// Set the weight of the leaf at `index` to `weight` and update all sums above it.
    fn set_leaf_weight(&mut self, index: u32, weight: BalanceOf<T>) -> DispatchResult;

    /// Add or subtract `delta` from the weight of every ancestor of the node at `index`.
    ///
    /// # Parameters
    ///
    /// - `index`: The index of the node.
    /// - `delta`: The (absolute) amount by which to modify the sums.
    /// - `op`: The sign of the delta.
    fn update_ancestors(
        &mut self,
        index: u32,
        delta: BalanceOf<T>,
        op: UpdateAncestorsOperation,
    ) -> DispatchResult;

    /// Return the number of nodes in the tree. Note that vacant leaves are counted.
    fn node_count(&self) -> u32;

    /// Get the weight of the node at `index`.
    fn get_node(&self, index: u32) -> Result<BalanceOf<T>, DispatchError>;

    /// Get a mutable reference to the weight of the node at `index`.
    fn get_node_mut(&mut self, index: u32) -> Result<&mut BalanceOf<T>, DispatchError>;

    /// Get the leaf which belongs to `who`.
    fn map_participant_to_index(&self, who: &T::AccountId) -> Result<u32, DispatchError>;

    /// Return the maximum number of participants.
    fn max_participants() -> u32;

    /// Return the maximum allowed amount of nodes in the tree.
    fn max_node_count() -> u32;
}
