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

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, BlockNumber, CourtId};

// Definitions for time
pub const BLOCKS_PER_DAY: BlockNumber = BLOCKS_PER_HOUR * 24;
pub const MILLISECS_PER_BLOCK: u32 = 12000;
pub const BLOCKS_PER_MINUTE: BlockNumber = 60_000 / (MILLISECS_PER_BLOCK as BlockNumber);
pub const BLOCKS_PER_HOUR: BlockNumber = BLOCKS_PER_MINUTE * 60;

// Definitions for currency
pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000

// Court hierarchy
/// The identifier of the root court, which is created at genesis and never moves.
pub const ROOT_COURT_ID: CourtId = 0;
/// The smallest branching factor of a sortition sum tree.
pub const MIN_SORTITION_ARITY: u32 = 2;
/// The branching factor used for the root court if genesis doesn't specify one.
pub const DEFAULT_SORTITION_ARITY: u32 = 4;
/// The minimum panel size used for the root court if genesis doesn't specify one.
pub const DEFAULT_MIN_JURORS: u32 = 3;
/// The jump threshold used for the root court if genesis doesn't specify one.
pub const DEFAULT_JURORS_FOR_JUMP: u32 = 3;
