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

#![cfg(all(feature = "mock", test))]

use crate::{
    assert_sortition_tree_state, create_b_tree_map,
    mock::runtime::Runtime,
    sortition_tree::{
        traits::SortitionTreeHelper,
        types::{SortitionTree, SortitionTreeError},
    },
    traits::WeightedSortition,
    SortitionTreeOf,
};
use frame_support::{assert_err, assert_ok, traits::ConstU32};
use sp_runtime::{ArithmeticError, DispatchError};
use test_case::test_case;
use zeitgeist_primitives::types::AccountIdTest;

mod draw;

const A: AccountIdTest = 1;
const B: AccountIdTest = 2;
const C: AccountIdTest = 3;
const D: AccountIdTest = 4;
const E: AccountIdTest = 5;

/// Most tests use the same pattern:
///
/// - Create a test tree. In some cases the test tree needs to be modified as part of the test
///   setup.
/// - Clone the contents of the tests tree and modify them to obtain the expected state of the tree
///   after executing the test.
/// - Run the test.
/// - Verify state.
mod utility {
    use super::*;

    /// Create the following binary sortition tree:
    ///
    ///                    42
    ///                 /      \
    ///               15        27
    ///              /  \      /  \
    ///          C: 5  A: 10  D: 7  B: 20
    ///
    /// This is the tree obtained by inserting A (10), B (20), C (5) and D (7) in that order.
    pub(super) fn create_test_tree() -> SortitionTreeOf<Runtime> {
        SortitionTreeOf::<Runtime> {
            arity: 2,
            nodes: vec![42, 15, 27, 5, 10, 7, 20].try_into().unwrap(),
            leaf_owners: create_b_tree_map!({ 3 => C, 4 => A, 5 => D, 6 => B })
                .try_into()
                .unwrap(),
            participant_to_index: create_b_tree_map!({ A => 4, B => 6, C => 3, D => 5 })
                .try_into()
                .unwrap(),
            vacant_leaves: vec![].try_into().unwrap(),
            eligible_count: 4,
        }
    }

    /// Check that every sum node holds the sum of its children and that the bookkeeping maps
    /// agree with each other and with the leaves.
    pub(super) fn assert_tree_is_consistent<S>(tree: &SortitionTree<Runtime, S>)
    where
        S: frame_support::traits::Get<u32>,
    {
        let node_count = tree.node_count();
        let mut leaf_count = 0usize;
        for index in 0..node_count {
            if tree.is_leaf(index).unwrap() {
                leaf_count += 1;
                continue;
            }
            let first_child_index = tree.first_child_index(index).unwrap();
            let end = (first_child_index + tree.arity).min(node_count);
            let sum: u128 = (first_child_index..end).map(|i| tree.nodes[i as usize]).sum();
            assert_eq!(tree.nodes[index as usize], sum, "Mismatched sum at index {}", index);
        }
        assert_eq!(tree.leaf_owners.len(), tree.participant_to_index.len());
        for (&index, owner) in tree.leaf_owners.iter() {
            assert!(tree.is_leaf(index).unwrap());
            assert_eq!(tree.participant_to_index.get(owner), Some(&index));
        }
        for &index in tree.vacant_leaves.iter() {
            assert!(tree.is_leaf(index).unwrap());
            assert_eq!(tree.nodes[index as usize], 0);
            assert!(!tree.leaf_owners.contains_key(&index));
        }
        assert_eq!(leaf_count, tree.leaf_owners.len() + tree.vacant_leaves.len());
        let eligible_count =
            tree.leaf_owners.keys().filter(|&&index| tree.nodes[index as usize] > 0).count();
        assert_eq!(tree.eligible_count as usize, eligible_count);
    }
}
