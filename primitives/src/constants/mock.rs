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

#![cfg(feature = "mock")]

pub use super::*;
use frame_support::parameter_types;

// Court hierarchy parameters
parameter_types! {
    pub const MaxChildCourts: u32 = 8;
    pub const MaxCourtDepth: u32 = 6;
    pub const MaxDrawRetries: u32 = 8;
    pub const MaxJurorsPerSession: u32 = 32;
    pub const MaxSortitionArity: u32 = 16;
    pub const MaxStakersPerCourt: u32 = 64;
    pub const InitialMaxDrawingTime: BlockNumber = 2 * BLOCKS_PER_HOUR;
    pub const InitialMinStakingTime: BlockNumber = BLOCKS_PER_HOUR;
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}
