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

use super::*;
use test_case::test_case;
use alloc::collections::BTreeMap;

#[test_case(0, C)]
#[test_case(4, C)]
#[test_case(5, A)]
#[test_case(14, A)]
#[test_case(15, D)]
#[test_case(21, D)]
#[test_case(22, B)]
#[test_case(41, B)]
#[test_case(42, C; "wraps_around_total_weight")]
#[test_case(42 * 1_000 + 22, B; "reduces_large_values")]
fn draw_maps_cursor_to_leaf(random_value: u128, expected: AccountIdTest) {
    let tree = utility::create_test_tree();
    assert_eq!(tree.draw(random_value), Ok(expected));
}

#[test]
fn draw_is_proportional_to_weight_over_full_cycle() {
    let tree = utility::create_test_tree();
    let mut counts = BTreeMap::<AccountIdTest, u128>::new();
    for random_value in 0..tree.total_weight().unwrap() {
        *counts.entry(tree.draw(random_value).unwrap()).or_default() += 1;
    }
    assert_eq!(counts, create_b_tree_map!({ A => 10, B => 20, C => 5, D => 7 }));
}

#[test_case(0, C)]
#[test_case(4, C)]
#[test_case(5, D)]
#[test_case(11, D)]
#[test_case(12, B)]
#[test_case(31, B)]
fn draw_skips_vacant_leaves(random_value: u128, expected: AccountIdTest) {
    let mut tree = utility::create_test_tree();
    assert_ok!(tree.remove(&A));
    assert_eq!(tree.draw(random_value), Ok(expected));
}

#[test]
fn draw_never_selects_participants_with_zero_weight() {
    let mut tree = utility::create_test_tree();
    assert_ok!(tree.insert_or_update(&B, 0));
    for random_value in 0..tree.total_weight().unwrap() {
        assert_ne!(tree.draw(random_value), Ok(B));
    }
}

#[test]
fn draw_with_single_participant_always_selects_them() {
    let mut tree = SortitionTreeOf::<Runtime>::new(4).unwrap();
    assert_ok!(tree.insert_or_update(&E, 3));
    for random_value in [0, 1, 2, 3, u128::MAX] {
        assert_eq!(tree.draw(random_value), Ok(E));
    }
}

#[test_case(0, D)]
#[test_case(7, D)]
#[test_case(8, A)]
#[test_case(9, E)]
#[test_case(24, E)]
#[test_case(25, B)]
#[test_case(26, B)]
#[test_case(27, C)]
#[test_case(30, C)]
fn draw_works_with_arity_three(random_value: u128, expected: AccountIdTest) {
    // Nodes are `[31, 25, 2, 4, 8, 1, 16]`. The root's children are node 1 (D, A, E), B and C.
    let mut tree = SortitionTreeOf::<Runtime>::new(3).unwrap();
    for (who, weight) in [(A, 1), (B, 2), (C, 4), (D, 8), (E, 16)] {
        assert_ok!(tree.insert_or_update(&who, weight));
    }
    assert_eq!(tree.draw(random_value), Ok(expected));
}

#[test]
fn draw_fails_on_empty_tree() {
    let tree = SortitionTreeOf::<Runtime>::new(2).unwrap();
    assert_err!(tree.draw(0), SortitionTreeError::EmptyTree.into_dispatch_error::<Runtime>());
}

#[test]
fn draw_fails_if_all_weights_are_zero() {
    let mut tree = utility::create_test_tree();
    for who in [A, B, C, D] {
        assert_ok!(tree.insert_or_update(&who, 0));
    }
    assert_err!(tree.draw(7), SortitionTreeError::EmptyTree.into_dispatch_error::<Runtime>());
}
