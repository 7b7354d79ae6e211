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

#[cfg(test)]
#[macro_export]
macro_rules! create_b_tree_map {
    ({ $($key:expr => $value:expr),* $(,)? } $(,)?) => {
        [$(($key, $value),)*].iter().cloned().collect::<std::collections::BTreeMap<_, _>>()
    }
}

/// Asserts that a sortition tree has the specified state.
///
/// Parameters:
///
/// - `tree`: The `SortitionTree<T, S>` to check.
/// - `expected_nodes`: The expected `tree.nodes`.
/// - `expected_leaf_owners`: The expected `tree.leaf_owners` as map literal.
/// - `expected_vacant_leaves`: The expected `tree.vacant_leaves`.
///
/// The `participant_to_index` map is checked against the inverse of `expected_leaf_owners`.
#[cfg(test)]
#[macro_export]
macro_rules! assert_sortition_tree_state {
    (
        $tree:expr,
        $expected_nodes:expr,
        { $($index:expr => $owner:expr),* $(,)? },
        $expected_vacant_leaves:expr
        $(,)?
    ) => {
        let actual_nodes = $tree.nodes.clone().into_inner();
        let max_len = std::cmp::max($expected_nodes.len(), actual_nodes.len());
        let mut error = false;
        for index in 0..max_len {
            match ($expected_nodes.get(index), actual_nodes.get(index)) {
                (Some(exp), Some(act)) => {
                    if exp != act {
                        error = true;
                        eprintln!(
                            "assert_sortition_tree_state: Mismatched node at index {}",
                            index,
                        );
                        eprintln!("    Expected weight: {:?}", exp);
                        eprintln!("    Actual weight:   {:?}", act);
                    }
                }
                (None, Some(act)) => {
                    error = true;
                    eprintln!("assert_sortition_tree_state: Extra node at index {}", index);
                    eprintln!("    {:?}", act);
                }
                (Some(exp), None) => {
                    error = true;
                    eprintln!("assert_sortition_tree_state: Missing node at index {}", index);
                    eprintln!("    {:?}", exp);
                }
                (None, None) => break,
            }
        }
        if error {
            panic!();
        }
        let expected_leaf_owners = $crate::create_b_tree_map!({ $($index => $owner),* });
        assert_eq!(expected_leaf_owners, $tree.leaf_owners.clone().into_inner());
        let expected_participant_to_index = expected_leaf_owners
            .iter()
            .map(|(&index, &owner)| (owner, index))
            .collect::<std::collections::BTreeMap<_, _>>();
        assert_eq!(expected_participant_to_index, $tree.participant_to_index.clone().into_inner());
        assert_eq!($expected_vacant_leaves, $tree.vacant_leaves.clone().into_inner());
    };
}
