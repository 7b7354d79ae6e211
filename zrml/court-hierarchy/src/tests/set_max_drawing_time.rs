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

#[test]
fn set_max_drawing_time_works() {
    ExtBuilder::default().build().execute_with(|| {
        assert_eq!(MaxDrawingTime::<Runtime>::get(), InitialMaxDrawingTime::get());
        assert_ok!(CourtHierarchy::set_max_drawing_time(RuntimeOrigin::root(), 1_234));
        System::assert_last_event(
            Event::<Runtime>::MaxDrawingTimeSet { max_drawing_time: 1_234 }.into(),
        );
        assert_eq!(MaxDrawingTime::<Runtime>::get(), 1_234);
    });
}

#[test]
fn set_max_drawing_time_applies_to_running_sessions() {
    ExtBuilder::default().build().execute_with(|| {
        stake_jurors(ROOT_COURT_ID, 1..=5, BASE);
        let session_id = create_session(ROOT_COURT_ID, 3);
        start_drawing(session_id);
        run_blocks(10);
        assert_ok!(CourtHierarchy::draw_jurors(Account::new(0).signed(), session_id, 1));
        assert_ok!(CourtHierarchy::set_max_drawing_time(RuntimeOrigin::root(), 10));
        assert_noop!(
            CourtHierarchy::draw_jurors(Account::new(0).signed(), session_id, 1),
            Error::<Runtime>::DrawingTimedOut
        );
    });
}

#[test]
fn set_max_drawing_time_fails_on_unauthorized_origin() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            CourtHierarchy::set_max_drawing_time(Account::new(1).signed(), 1_234),
            Error::<Runtime>::Unauthorized
        );
    });
}
