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
    mock::runtime::{Runtime, System},
    CourtParametersOf,
};
use sp_io::TestExternalities;
use sp_runtime::BuildStorage;
use zeitgeist_primitives::constants::{
    mock::{InitialMaxDrawingTime, InitialMinStakingTime},
    BASE, CENT,
};

/// The root court used by most tests: binary sortition tree, visible votes and a panel of at
/// least three jurors.
pub fn root_court_parameters() -> CourtParametersOf<Runtime> {
    CourtParametersOf::<Runtime> {
        hidden_votes: false,
        min_stake: BASE,
        alpha: 1_000,
        juror_fee: CENT,
        min_jurors: 3,
        jurors_for_jump: 3,
        times_per_period: [10, 20, 30, 40],
        sortition_arity: 2,
    }
}

pub struct ExtBuilder {
    root_court: CourtParametersOf<Runtime>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { root_court: root_court_parameters() }
    }
}

impl ExtBuilder {
    pub fn root_court(mut self, root_court: CourtParametersOf<Runtime>) -> Self {
        self.root_court = root_court;
        self
    }

    pub fn build(self) -> TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // See the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        crate::GenesisConfig::<Runtime> {
            root_court: self.root_court,
            min_staking_time: InitialMinStakingTime::get(),
            max_drawing_time: InitialMaxDrawingTime::get(),
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut test_ext: TestExternalities = t.into();
        test_ext.execute_with(|| System::set_block_number(1));
        test_ext
    }
}
