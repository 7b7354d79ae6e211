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

mod create_session;
mod pass_phase;
mod set_max_drawing_time;

use crate::{
    mock::{
        ext_builder::{root_court_parameters, ExtBuilder},
        runtime::{CourtHierarchy, Runtime, RuntimeOrigin, System},
        utility::{run_blocks, run_to_block},
    },
    sortition_tree::types::SortitionTreeError,
    types::{CourtParameter, DrawnJuror, Phase},
    CourtParametersOf, Courts, Error, Event, MaxDrawingTime, MinStakingTime, NextCourtId,
    NextSessionId, Sessions,
};
use alloc::{vec, vec::Vec};
use frame_support::{assert_err, assert_noop, assert_ok};
use sp_runtime::{DispatchError, DispatchResult};
use test_case::test_case;
use zeitgeist_primitives::{
    constants::{
        mock::{
            InitialMaxDrawingTime, InitialMinStakingTime, MaxChildCourts, MaxCourtDepth,
            MaxJurorsPerSession,
        },
        BASE, ROOT_COURT_ID,
    },
    traits::CourtStakeApi,
    types::{AccountIdTest, Balance, CourtId, SessionId},
};

#[derive(Debug)]
pub(crate) struct Account {
    id: AccountIdTest,
}

impl Account {
    pub(crate) fn new(id: AccountIdTest) -> Account {
        Account { id }
    }

    /// Stakes `amount` in `court_id` and returns the account to allow call chains.
    pub(crate) fn stake(
        self,
        court_id: CourtId,
        amount: Balance,
    ) -> Result<Account, DispatchError> {
        CourtHierarchy::set_stake(court_id, &self.id, amount).map(|_| self)
    }

    pub(crate) fn signed(&self) -> RuntimeOrigin {
        RuntimeOrigin::signed(self.id)
    }

    pub(crate) fn stake_of(&self, court_id: CourtId) -> Result<Balance, DispatchError> {
        CourtHierarchy::stake_of(court_id, &self.id)
    }
}

/// Court parameters with a binary sortition tree and the specified stake requirements.
fn court_parameters(min_stake: Balance, alpha: u64) -> CourtParametersOf<Runtime> {
    CourtParametersOf::<Runtime> { min_stake, alpha, ..root_court_parameters() }
}

fn create_court(parent_id: CourtId, parameters: CourtParametersOf<Runtime>) -> CourtId {
    let court_id = NextCourtId::<Runtime>::get();
    assert_ok!(CourtHierarchy::create_court(RuntimeOrigin::root(), parent_id, parameters));
    court_id
}

/// Create a chain of `length` courts below `parent_id` and return it from top to bottom.
fn create_chain(parent_id: CourtId, length: u32) -> Vec<CourtId> {
    let mut chain = vec![];
    let mut court_id = parent_id;
    for _ in 0..length {
        court_id = create_court(court_id, root_court_parameters());
        chain.push(court_id);
    }
    chain
}

fn create_session(court_id: CourtId, jurors_requested: u32) -> SessionId {
    let session_id = NextSessionId::<Runtime>::get();
    assert_ok!(CourtHierarchy::create_session(
        Account::new(0).signed(),
        court_id,
        jurors_requested
    ));
    session_id
}

/// Stake `amount` in `court_id` for each of the accounts `ids`.
fn stake_jurors(court_id: CourtId, ids: impl IntoIterator<Item = AccountIdTest>, amount: Balance) {
    for id in ids {
        assert_ok!(Account::new(id).stake(court_id, amount));
    }
}

fn phase_of(session_id: SessionId) -> Phase {
    Sessions::<Runtime>::get(session_id).unwrap().phase
}

/// Wait out the staking phase and move `session_id` to the drawing phase.
fn start_drawing(session_id: SessionId) {
    run_blocks(MinStakingTime::<Runtime>::get().max(root_court_parameters().times_per_period[0]));
    assert_ok!(CourtHierarchy::pass_phase(Account::new(0).signed(), session_id, false));
    assert_eq!(phase_of(session_id), Phase::Drawing);
}

/// Draw a full panel for `session_id` and move it to the voting phase.
fn start_voting(session_id: SessionId) {
    let session = Sessions::<Runtime>::get(session_id).unwrap();
    assert_ok!(CourtHierarchy::draw_jurors(
        Account::new(0).signed(),
        session_id,
        session.remaining_jurors()
    ));
    assert_ok!(CourtHierarchy::pass_phase(Account::new(0).signed(), session_id, false));
    assert_eq!(phase_of(session_id), Phase::Voting);
}
