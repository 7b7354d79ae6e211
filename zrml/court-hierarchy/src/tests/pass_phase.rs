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

fn pass_phase(session_id: SessionId, allow_partial_panel: bool) -> DispatchResult {
    CourtHierarchy::pass_phase(Account::new(0).signed(), session_id, allow_partial_panel)
}

#[test]
fn pass_phase_from_staking_works() {
    ExtBuilder::default().build().execute_with(|| {
        let session_id = create_session(ROOT_COURT_ID, 3);
        run_blocks(InitialMinStakingTime::get() - 1);
        assert_noop!(pass_phase(session_id, false), Error::<Runtime>::InvalidPhaseTransition);
        run_blocks(1);
        assert_ok!(pass_phase(session_id, false));
        System::assert_last_event(
            Event::<Runtime>::PhaseAdvanced {
                session_id,
                from: Phase::Staking,
                to: Phase::Drawing,
            }
            .into(),
        );
        let session = Sessions::<Runtime>::get(session_id).unwrap();
        assert_eq!(session.phase, Phase::Drawing);
        assert_eq!(session.last_phase_change, System::block_number());
        assert_eq!(CourtHierarchy::elapsed_in_phase(session_id), Ok(0));
    });
}

#[test]
fn pass_phase_from_drawing_works_with_full_panel() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        assert_ok!(CourtHierarchy::draw_jurors(Account::new(0).signed(), session_id, 3));
        assert_ok!(pass_phase(session_id, false));
        System::assert_last_event(
            Event::<Runtime>::PhaseAdvanced { session_id, from: Phase::Drawing, to: Phase::Voting }
                .into(),
        );
        assert_eq!(phase_of(session_id), Phase::Voting);
    });
}

#[test_case(false; "without partial panel")]
#[test_case(true; "with partial panel")]
fn pass_phase_fails_on_partial_panel_before_max_drawing_time(allow_partial_panel: bool) {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        assert_ok!(CourtHierarchy::draw_jurors(Account::new(0).signed(), session_id, 1));
        run_blocks(InitialMaxDrawingTime::get() - 1);
        assert_noop!(
            pass_phase(session_id, allow_partial_panel),
            Error::<Runtime>::InvalidPhaseTransition
        );
    });
}

#[test]
fn pass_phase_fails_on_partial_panel_after_max_drawing_time_if_not_allowed() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        assert_ok!(CourtHierarchy::draw_jurors(Account::new(0).signed(), session_id, 1));
        run_blocks(InitialMaxDrawingTime::get());
        assert_noop!(pass_phase(session_id, false), Error::<Runtime>::DrawingTimedOut);
    });
}

#[test]
fn pass_phase_accepts_partial_panel_after_max_drawing_time() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        assert_ok!(CourtHierarchy::draw_jurors(Account::new(0).signed(), session_id, 2));
        run_blocks(InitialMaxDrawingTime::get());
        assert_ok!(pass_phase(session_id, true));
        System::assert_has_event(
            Event::<Runtime>::PartialPanelAccepted {
                session_id,
                jurors_drawn: 2,
                jurors_required: 3,
            }
            .into(),
        );
        System::assert_last_event(
            Event::<Runtime>::PhaseAdvanced { session_id, from: Phase::Drawing, to: Phase::Voting }
                .into(),
        );
        let session = Sessions::<Runtime>::get(session_id).unwrap();
        assert_eq!(session.phase, Phase::Voting);
        assert_eq!(session.jurors_drawn(), 2);
    });
}

#[test]
fn pass_phase_accepts_empty_panel_after_max_drawing_time() {
    ExtBuilder::default().build().execute_with(|| {
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        run_blocks(InitialMaxDrawingTime::get());
        assert_ok!(pass_phase(session_id, true));
        assert_eq!(phase_of(session_id), Phase::Voting);
    });
}

#[test_case(false, 30; "visible votes")]
#[test_case(true, 50; "hidden votes")]
fn pass_phase_from_voting_works(hidden_votes: bool, voting_time: u64) {
    let root_court = CourtParametersOf::<Runtime> { hidden_votes, ..root_court_parameters() };
    ExtBuilder::default().root_court(root_court).build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        start_voting(session_id);
        run_blocks(voting_time - 1);
        assert_noop!(pass_phase(session_id, false), Error::<Runtime>::InvalidPhaseTransition);
        run_blocks(1);
        assert_ok!(pass_phase(session_id, false));
        assert_eq!(phase_of(session_id), Phase::Appeal);
    });
}

#[test]
fn pass_phase_from_appeal_works() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        start_voting(session_id);
        run_blocks(30);
        assert_ok!(pass_phase(session_id, false));
        run_blocks(39);
        assert_noop!(pass_phase(session_id, false), Error::<Runtime>::InvalidPhaseTransition);
        run_blocks(1);
        assert_ok!(pass_phase(session_id, false));
        System::assert_last_event(
            Event::<Runtime>::PhaseAdvanced {
                session_id,
                from: Phase::Appeal,
                to: Phase::Execution,
            }
            .into(),
        );
        assert_eq!(phase_of(session_id), Phase::Execution);
    });
}

#[test]
fn pass_phase_fails_in_execution() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        start_voting(session_id);
        run_blocks(30);
        assert_ok!(pass_phase(session_id, false));
        run_blocks(40);
        assert_ok!(pass_phase(session_id, false));
        run_blocks(1_000);
        assert_noop!(pass_phase(session_id, true), Error::<Runtime>::InvalidPhaseTransition);
    });
}

#[test]
fn pass_phase_uses_parameters_at_time_of_call() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        start_voting(session_id);
        assert_ok!(CourtHierarchy::change_court_parameter(
            RuntimeOrigin::root(),
            ROOT_COURT_ID,
            CourtParameter::TimesPerPeriod([10, 20, 5, 40])
        ));
        run_blocks(5);
        assert_ok!(pass_phase(session_id, false));
        assert_eq!(phase_of(session_id), Phase::Appeal);
    });
}

#[test]
fn elapsed_in_phase_works() {
    ExtBuilder::default().build().execute_with(|| {
        let session_id = create_session(ROOT_COURT_ID, 3);
        run_blocks(12);
        assert_eq!(CourtHierarchy::elapsed_in_phase(session_id), Ok(12));
        assert_err!(CourtHierarchy::elapsed_in_phase(1), Error::<Runtime>::SessionNotFound);
    });
}

#[test]
fn pass_phase_fails_on_unknown_session() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(pass_phase(0, false), Error::<Runtime>::SessionNotFound);
    });
}

#[test]
fn pass_phase_fails_on_unsigned_origin() {
    ExtBuilder::default().build().execute_with(|| {
        let session_id = create_session(ROOT_COURT_ID, 3);
        run_blocks(InitialMinStakingTime::get());
        assert_noop!(
            CourtHierarchy::pass_phase(RuntimeOrigin::none(), session_id, false),
            DispatchError::BadOrigin
        );
    });
}
