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

use crate as zrml_court_hierarchy;
use crate::weights::WeightInfo;
use frame_support::{construct_runtime, traits::Everything};
use frame_system::{mocking::MockBlock, EnsureRoot};
use sp_runtime::traits::{BlakeTwo256, ConstU32, IdentityLookup};
use zeitgeist_primitives::{
    constants::mock::{
        BlockHashCount, MaxChildCourts, MaxCourtDepth, MaxDrawRetries, MaxJurorsPerSession,
        MaxSortitionArity, MaxStakersPerCourt,
    },
    types::{AccountIdTest, Balance, Hash},
};

construct_runtime! {
    pub enum Runtime {
        CourtHierarchy: zrml_court_hierarchy,
        RandomnessCollectiveFlip: pallet_insecure_randomness_collective_flip,
        System: frame_system,
    }
}

impl zrml_court_hierarchy::Config for Runtime {
    type Balance = Balance;
    type CourtGovernanceOrigin = EnsureRoot<AccountIdTest>;
    type MaxChildCourts = MaxChildCourts;
    type MaxCourtDepth = MaxCourtDepth;
    type MaxDrawRetries = MaxDrawRetries;
    type MaxJurorsPerSession = MaxJurorsPerSession;
    type MaxSortitionArity = MaxSortitionArity;
    type MaxStakersPerCourt = MaxStakersPerCourt;
    type Random = RandomnessCollectiveFlip;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = WeightInfo<Runtime>;
}

impl pallet_insecure_randomness_collective_flip::Config for Runtime {}

impl frame_system::Config for Runtime {
    type AccountData = ();
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}
