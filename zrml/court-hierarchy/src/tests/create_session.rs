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

#[test]
fn create_session_works() {
    ExtBuilder::default().build().execute_with(|| {
        run_to_block(7);
        let court_id = create_court(ROOT_COURT_ID, court_parameters(BASE, 1_000));
        let alice = Account::new(1);
        assert_ok!(CourtHierarchy::create_session(alice.signed(), court_id, 5));
        System::assert_last_event(
            Event::<Runtime>::SessionCreated {
                session_id: 0,
                court_id,
                creator: alice.id,
                jurors_required: 5,
            }
            .into(),
        );
        let session = Sessions::<Runtime>::get(0).unwrap();
        assert_eq!(session.court_id, court_id);
        assert_eq!(session.creator, alice.id);
        assert_eq!(session.phase, Phase::Staking);
        assert_eq!(session.last_phase_change, 7);
        assert_eq!(session.jurors_required, 5);
        assert!(session.drawn_jurors.is_empty());
        assert_eq!(session.draw_index, 0);
        assert_eq!(NextSessionId::<Runtime>::get(), 1);
    });
}

#[test]
fn create_session_assigns_sequential_ids() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(create_session(ROOT_COURT_ID, 3), 0);
        assert_eq!(create_session(ROOT_COURT_ID, 3), 1);
        assert_eq!(create_session(ROOT_COURT_ID, 3), 2);
        assert_eq!(NextSessionId::<Runtime>::get(), 3);
    });
}

#[test_case(0, 3; "no jurors requested")]
#[test_case(2, 3; "fewer than min jurors")]
#[test_case(3, 3; "exactly min jurors")]
#[test_case(7, 7; "more than min jurors")]
#[test_case(MaxJurorsPerSession::get(), MaxJurorsPerSession::get(); "max jurors")]
fn create_session_requires_at_least_min_jurors(jurors_requested: u32, jurors_required: u32) {
    ExtBuilder::default().build().execute_with(|| {
        let session_id = create_session(ROOT_COURT_ID, jurors_requested);
        assert_eq!(Sessions::<Runtime>::get(session_id).unwrap().jurors_required, jurors_required);
    });
}

#[test]
fn create_session_fails_on_too_many_jurors() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            CourtHierarchy::create_session(
                Account::new(1).signed(),
                ROOT_COURT_ID,
                MaxJurorsPerSession::get() + 1
            ),
            Error::<Runtime>::TooManyJurors
        );
    });
}

#[test]
fn create_session_fails_if_min_jurors_exceeds_max_panel_size() {
    ExtBuilder::default().build().execute_with(|| {
        let parameters = CourtParametersOf::<Runtime> {
            min_jurors: MaxJurorsPerSession::get() + 1,
            ..root_court_parameters()
        };
        let court_id = create_court(ROOT_COURT_ID, parameters);
        assert_noop!(
            CourtHierarchy::create_session(Account::new(1).signed(), court_id, 0),
            Error::<Runtime>::TooManyJurors
        );
    });
}

#[test]
fn create_session_fails_on_unknown_court() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            CourtHierarchy::create_session(Account::new(1).signed(), 1, 3),
            Error::<Runtime>::UnknownCourt
        );
    });
}

#[test]
fn create_session_fails_on_unsigned_origin() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            CourtHierarchy::create_session(RuntimeOrigin::none(), ROOT_COURT_ID, 3),
            DispatchError::BadOrigin
        );
    });
}
