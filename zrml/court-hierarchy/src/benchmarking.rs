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

#![cfg(feature = "runtime-benchmarks")]

use crate::{
    types::{CourtParameter, Phase},
    Call, Config, CourtParametersOf, Event, MaxDrawingTime, NextCourtId, NextSessionId, Pallet,
    Sessions,
};
use frame_benchmarking::v2::*;
use frame_support::{assert_ok, dispatch::RawOrigin, traits::Get};
use frame_system::{pallet_prelude::BlockNumberFor, Pallet as System};
use sp_runtime::Saturating;
use zeitgeist_primitives::{
    constants::ROOT_COURT_ID,
    traits::CourtStakeApi,
    types::{CourtId, SessionId},
};

fn court_parameters<T: Config>() -> CourtParametersOf<T> {
    CourtParametersOf::<T> {
        min_stake: 1u32.into(),
        min_jurors: 1,
        jurors_for_jump: 1,
        times_per_period: [1u32.into(); 4],
        sortition_arity: 2,
        ..Default::default()
    }
}

fn create_test_court<T: Config>(parent_id: CourtId) -> CourtId {
    let court_id = NextCourtId::<T>::get();
    assert_ok!(Pallet::<T>::create_court(
        RawOrigin::Root.into(),
        parent_id,
        court_parameters::<T>()
    ));
    court_id
}

/// Create a chain of `length` courts below `parent_id` and return the lowest one.
fn create_chain<T: Config>(parent_id: CourtId, length: u32) -> CourtId {
    let mut court_id = parent_id;
    for _ in 0..length {
        court_id = create_test_court::<T>(court_id);
    }
    court_id
}

/// Fill `court_id` with the maximum number of jurors.
fn fill_court<T: Config>(court_id: CourtId) {
    let min_stake = Pallet::<T>::get_court(court_id).unwrap().parameters.min_stake;
    for i in 0..T::MaxStakersPerCourt::get() {
        let juror: T::AccountId = account("juror", i, 0);
        let stake = min_stake.saturating_add(i.into()).max(1u32.into());
        assert_ok!(Pallet::<T>::set_stake(court_id, &juror, stake));
    }
}

/// Create a session in `court_id` and move it to `phase`, starting at the current block.
fn create_test_session<T: Config>(court_id: CourtId, jurors: u32, phase: Phase) -> SessionId {
    let caller: T::AccountId = whitelisted_caller();
    let session_id = NextSessionId::<T>::get();
    assert_ok!(Pallet::<T>::create_session(
        RawOrigin::Signed(caller).into(),
        court_id,
        jurors
    ));
    Sessions::<T>::mutate(session_id, |maybe_session| {
        if let Some(session) = maybe_session {
            session.phase = phase;
            session.last_phase_change = System::<T>::block_number();
        }
    });
    session_id
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_court(d: Linear<1, 16>) {
        let depth = d.min(T::MaxCourtDepth::get());
        // The new leaf raises the height of every ancestor.
        let parent_id = create_chain::<T>(ROOT_COURT_ID, depth.saturating_sub(1));
        let parameters = court_parameters::<T>();
        let court_id = NextCourtId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Root, parent_id, parameters.clone());

        assert_eq!(Pallet::<T>::depth(court_id).unwrap(), depth);
        let expected_event = <T as Config>::RuntimeEvent::from(Event::<T>::CourtCreated {
            court_id,
            parent_id,
            parameters,
        });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn move_court(d: Linear<1, 16>, c: Linear<1, 16>) {
        let depth = d.min(T::MaxCourtDepth::get());
        let children = c.min(T::MaxChildCourts::get()) as usize;
        // The moved court is the only court at the bottom of its branch, so removing it lowers
        // the height of every old ancestor. Each of them has a full set of children to scan.
        let new_parent_id = create_chain::<T>(ROOT_COURT_ID, depth.saturating_sub(1));
        let old_parent_id = create_chain::<T>(ROOT_COURT_ID, depth.saturating_sub(1));
        let court_id = create_test_court::<T>(old_parent_id);
        for ancestor_id in Pallet::<T>::ancestors(old_parent_id).unwrap() {
            while Pallet::<T>::get_court(ancestor_id).unwrap().children.len() < children {
                let _ = create_test_court::<T>(ancestor_id);
            }
        }

        #[extrinsic_call]
        _(RawOrigin::Root, court_id, new_parent_id);

        assert_eq!(Pallet::<T>::depth(court_id).unwrap(), depth);
        let expected_event = <T as Config>::RuntimeEvent::from(Event::<T>::CourtMoved {
            court_id,
            old_parent_id,
            new_parent_id,
        });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn change_court_parameter() {
        let court_id = create_test_court::<T>(ROOT_COURT_ID);
        let parameter = CourtParameter::TimesPerPeriod([2u32.into(); 4]);

        #[extrinsic_call]
        _(RawOrigin::Root, court_id, parameter.clone());

        let expected_event = <T as Config>::RuntimeEvent::from(
            Event::<T>::CourtParameterChanged { court_id, parameter },
        );
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn set_min_staking_time() {
        let min_staking_time: BlockNumberFor<T> = 100u32.into();

        #[extrinsic_call]
        _(RawOrigin::Root, min_staking_time);

        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::MinStakingTimeSet { min_staking_time });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn set_max_drawing_time() {
        let max_drawing_time: BlockNumberFor<T> = 100u32.into();

        #[extrinsic_call]
        _(RawOrigin::Root, max_drawing_time);

        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::MaxDrawingTimeSet { max_drawing_time });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn create_session() {
        let caller: T::AccountId = whitelisted_caller();
        let court_id = create_test_court::<T>(ROOT_COURT_ID);
        let jurors_required = T::MaxJurorsPerSession::get();
        let session_id = NextSessionId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), court_id, jurors_required);

        let expected_event = <T as Config>::RuntimeEvent::from(Event::<T>::SessionCreated {
            session_id,
            court_id,
            creator: caller,
            jurors_required,
        });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn pass_phase() {
        // Leaving the drawing phase with a partial panel is the most expensive transition.
        let caller: T::AccountId = whitelisted_caller();
        let session_id = create_test_session::<T>(ROOT_COURT_ID, 1, Phase::Drawing);
        let now = System::<T>::block_number();
        System::<T>::set_block_number(now.saturating_add(MaxDrawingTime::<T>::get()));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), session_id, true);

        let expected_event = <T as Config>::RuntimeEvent::from(Event::<T>::PhaseAdvanced {
            session_id,
            from: Phase::Drawing,
            to: Phase::Voting,
        });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn draw_jurors(a: Linear<1, 32>, d: Linear<1, 16>) {
        let caller: T::AccountId = whitelisted_caller();
        let count = a.min(T::MaxJurorsPerSession::get());
        let depth = d.min(T::MaxCourtDepth::get());
        // Every court of the chain is empty, so the draw jumps all the way up to the root.
        let court_id = create_chain::<T>(ROOT_COURT_ID, depth);
        fill_court::<T>(ROOT_COURT_ID);
        let session_id = create_test_session::<T>(court_id, count, Phase::Drawing);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), session_id, count);

        assert!(Pallet::<T>::session(session_id).unwrap().is_panel_full());
    }

    #[benchmark]
    fn close_session() {
        let caller: T::AccountId = whitelisted_caller();
        let session_id = create_test_session::<T>(ROOT_COURT_ID, 1, Phase::Execution);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), session_id);

        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::SessionClosed { session_id });
        System::<T>::assert_last_event(expected_event.into());
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::ext_builder::ExtBuilder::default().build(),
        crate::mock::runtime::Runtime
    );
}
