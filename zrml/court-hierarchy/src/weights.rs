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

//! Weights for zrml_court_hierarchy.
//!
//! The values are placeholders and are not measured on reference hardware. A production runtime
//! must regenerate this file with the benchmark CLI, using its own `MaxCourtDepth` and
//! `MaxChildCourts`.

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoZeitgeist {
    fn create_court(d: u32) -> Weight;
    fn move_court(d: u32, c: u32) -> Weight;
    fn change_court_parameter() -> Weight;
    fn set_min_staking_time() -> Weight;
    fn set_max_drawing_time() -> Weight;
    fn create_session() -> Weight;
    fn pass_phase() -> Weight;
    fn draw_jurors(a: u32, d: u32) -> Weight;
    fn close_session() -> Weight;
}

pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// Storage: `CourtHierarchy::Courts` (r:7 w:7)
    /// Storage: `CourtHierarchy::NextCourtId` (r:1 w:1)
    /// Storage: `CourtHierarchy::SortitionTrees` (r:0 w:1)
    /// The range of component `d` is `[1, 16]`.
    fn create_court(d: u32) -> Weight {
        Weight::from_parts(38_000_000, 4_400)
            .saturating_add(Weight::from_parts(7_200_000, 2_600).saturating_mul(d.into()))
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(d.into())))
            .saturating_add(T::DbWeight::get().writes(4_u64))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(d.into())))
    }
    /// Storage: `CourtHierarchy::Courts` (r:71 w:15)
    /// The range of component `d` is `[1, 16]`.
    /// The range of component `c` is `[1, 16]`.
    fn move_court(d: u32, c: u32) -> Weight {
        Weight::from_parts(46_000_000, 7_800)
            .saturating_add(Weight::from_parts(9_400_000, 2_600).saturating_mul(d.into()))
            .saturating_add(
                Weight::from_parts(3_100_000, 2_600)
                    .saturating_mul(d.into())
                    .saturating_mul(c.into()),
            )
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(d.into())))
            .saturating_add(
                T::DbWeight::get().reads((1_u64).saturating_mul(d.into()).saturating_mul(c.into())),
            )
            .saturating_add(T::DbWeight::get().writes(3_u64))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(d.into())))
    }
    /// Storage: `CourtHierarchy::Courts` (r:1 w:1)
    fn change_court_parameter() -> Weight {
        Weight::from_parts(24_000_000, 2_600)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CourtHierarchy::MinStakingTime` (r:0 w:1)
    fn set_min_staking_time() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CourtHierarchy::MaxDrawingTime` (r:0 w:1)
    fn set_max_drawing_time() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CourtHierarchy::Courts` (r:1 w:0)
    /// Storage: `CourtHierarchy::NextSessionId` (r:1 w:1)
    /// Storage: `CourtHierarchy::Sessions` (r:0 w:1)
    fn create_session() -> Weight {
        Weight::from_parts(27_000_000, 2_600)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `CourtHierarchy::Sessions` (r:1 w:1)
    /// Storage: `CourtHierarchy::Courts` (r:1 w:0)
    /// Storage: `CourtHierarchy::MinStakingTime` (r:1 w:0)
    /// Storage: `CourtHierarchy::MaxDrawingTime` (r:1 w:0)
    fn pass_phase() -> Weight {
        Weight::from_parts(31_000_000, 4_800)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CourtHierarchy::Sessions` (r:1 w:1)
    /// Storage: `CourtHierarchy::MaxDrawingTime` (r:1 w:0)
    /// Storage: `CourtHierarchy::Courts` (r:7 w:0)
    /// Storage: `CourtHierarchy::SortitionTrees` (r:7 w:0)
    /// Storage: `CourtHierarchy::DrawNonce` (r:1 w:1)
    /// Storage: `RandomnessCollectiveFlip::RandomMaterial` (r:1 w:0)
    /// The range of component `a` is `[1, 32]`.
    /// The range of component `d` is `[1, 16]`.
    fn draw_jurors(a: u32, d: u32) -> Weight {
        Weight::from_parts(88_000_000, 9_900)
            .saturating_add(Weight::from_parts(21_500_000, 0).saturating_mul(a.into()))
            .saturating_add(Weight::from_parts(14_800_000, 40_600).saturating_mul(d.into()))
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(d.into())))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `CourtHierarchy::Sessions` (r:1 w:1)
    fn close_session() -> Weight {
        Weight::from_parts(22_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}
