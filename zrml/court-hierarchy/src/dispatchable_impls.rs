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
    types::{CourtInfo, DrawnJuror, Phase, Session},
    Config, CourtParameterOf, CourtParametersOf, Courts, Error, Event, MaxDrawingTime,
    NextCourtId, NextSessionId, Pallet, SortitionTreeOf, SortitionTrees, Sessions,
};
use frame_support::{ensure, require_transactional, traits::Get};
use sp_runtime::{DispatchError, DispatchResult, Saturating};
use zeitgeist_primitives::{
    math::checked_ops_res::CheckedAddRes,
    types::{CourtId, SessionId},
};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_create_court(
        parent_id: CourtId,
        parameters: CourtParametersOf<T>,
    ) -> Result<CourtId, DispatchError> {
        Self::ensure_valid_parameters(&parameters)?;
        let mut parent = Courts::<T>::get(parent_id).ok_or(Error::<T>::UnknownParent)?;
        Self::ensure_depth_fits(Self::depth(parent_id)?, 0)?;

        let court_id = NextCourtId::<T>::get();
        let next_court_id = court_id.checked_add_res(&1)?;
        let _ = parent
            .children
            .try_insert(court_id)
            .map_err(|_| Error::<T>::MaxChildCourtsReached)?;
        let tree = SortitionTreeOf::<T>::new(parameters.sortition_arity)?;

        Courts::<T>::insert(parent_id, parent);
        Courts::<T>::insert(court_id, CourtInfo::new(Some(parent_id), parameters.clone()));
        SortitionTrees::<T>::insert(court_id, tree);
        NextCourtId::<T>::put(next_court_id);
        Self::raise_heights(parent_id, 1)?;

        Self::deposit_event(Event::<T>::CourtCreated { court_id, parent_id, parameters });

        Ok(court_id)
    }

    #[require_transactional]
    pub(crate) fn do_move_court(court_id: CourtId, new_parent_id: CourtId) -> DispatchResult {
        let mut court = Self::get_court(court_id)?;
        ensure!(Courts::<T>::contains_key(new_parent_id), Error::<T>::UnknownParent);
        let new_parent_ancestors = Self::ancestors(new_parent_id)?;
        // The root is an ancestor of every other court, so this also rejects moving the root.
        ensure!(
            new_parent_id != court_id && !new_parent_ancestors.contains(&court_id),
            Error::<T>::CycleDetected
        );
        let old_parent_id = court.parent.ok_or(Error::<T>::CycleDetected)?;
        Self::ensure_depth_fits(new_parent_ancestors.len() as u32, court.height)?;

        Courts::<T>::try_mutate(old_parent_id, |maybe_parent| -> DispatchResult {
            let parent = maybe_parent.as_mut().ok_or(Error::<T>::CorruptHierarchy)?;
            let _ = parent.children.remove(&court_id);
            Ok(())
        })?;
        Courts::<T>::try_mutate(new_parent_id, |maybe_parent| -> DispatchResult {
            let parent = maybe_parent.as_mut().ok_or(Error::<T>::UnknownParent)?;
            let _ = parent
                .children
                .try_insert(court_id)
                .map_err(|_| Error::<T>::MaxChildCourtsReached)?;
            Ok(())
        })?;
        let moved_height = court.height;
        court.parent = Some(new_parent_id);
        Courts::<T>::insert(court_id, court);
        Self::raise_heights(new_parent_id, moved_height.checked_add_res(&1)?)?;
        Self::recompute_heights(old_parent_id)?;

        Self::deposit_event(Event::<T>::CourtMoved { court_id, old_parent_id, new_parent_id });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_change_court_parameter(
        court_id: CourtId,
        parameter: CourtParameterOf<T>,
    ) -> DispatchResult {
        Courts::<T>::try_mutate(court_id, |maybe_court| -> DispatchResult {
            let court = maybe_court.as_mut().ok_or(Error::<T>::UnknownCourt)?;
            let mut parameters = court.parameters.clone();
            parameters.apply(parameter.clone());
            Self::ensure_valid_parameters(&parameters)?;
            court.parameters = parameters;
            Ok(())
        })?;

        Self::deposit_event(Event::<T>::CourtParameterChanged { court_id, parameter });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_create_session(
        creator: T::AccountId,
        court_id: CourtId,
        jurors_requested: u32,
    ) -> Result<SessionId, DispatchError> {
        let court = Self::get_court(court_id)?;
        let jurors_required = jurors_requested.max(court.parameters.min_jurors);
        ensure!(jurors_required <= T::MaxJurorsPerSession::get(), Error::<T>::TooManyJurors);

        let session_id = NextSessionId::<T>::get();
        NextSessionId::<T>::put(session_id.checked_add_res(&1)?);
        let session = Session {
            court_id,
            creator: creator.clone(),
            phase: Phase::Staking,
            last_phase_change: frame_system::Pallet::<T>::block_number(),
            jurors_required,
            drawn_jurors: Default::default(),
            draw_index: 0,
        };
        Sessions::<T>::insert(session_id, session);

        Self::deposit_event(Event::<T>::SessionCreated {
            session_id,
            court_id,
            creator,
            jurors_required,
        });

        Ok(session_id)
    }

    #[require_transactional]
    pub(crate) fn do_pass_phase(
        session_id: SessionId,
        allow_partial_panel: bool,
    ) -> DispatchResult {
        Sessions::<T>::try_mutate(session_id, |maybe_session| -> DispatchResult {
            let session = maybe_session.as_mut().ok_or(Error::<T>::SessionNotFound)?;
            let from = session.phase;
            let to = from.next().ok_or(Error::<T>::InvalidPhaseTransition)?;
            Self::ensure_phase_can_end(session, allow_partial_panel)?;

            if from == Phase::Drawing && !session.is_panel_full() {
                log::warn!(
                    target: crate::LOG_TARGET,
                    "Session {:?} leaves the drawing phase with {} of {} jurors",
                    session_id,
                    session.jurors_drawn(),
                    session.jurors_required,
                );
                Self::deposit_event(Event::<T>::PartialPanelAccepted {
                    session_id,
                    jurors_drawn: session.jurors_drawn(),
                    jurors_required: session.jurors_required,
                });
            }

            session.phase = to;
            session.last_phase_change = frame_system::Pallet::<T>::block_number();

            Self::deposit_event(Event::<T>::PhaseAdvanced { session_id, from, to });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_draw_jurors(session_id: SessionId, count: u32) -> DispatchResult {
        let mut session = Self::session(session_id)?;
        ensure!(session.phase == Phase::Drawing, Error::<T>::NotInDrawingPhase);
        let now = frame_system::Pallet::<T>::block_number();
        ensure!(
            now.saturating_sub(session.last_phase_change) < MaxDrawingTime::<T>::get(),
            Error::<T>::DrawingTimedOut
        );
        ensure!(count > 0, Error::<T>::ZeroJurorCount);
        let remaining = session.remaining_jurors();
        ensure!(remaining > 0, Error::<T>::PanelAlreadyFull);
        let count = count.min(remaining);

        let outcome = Self::draw_panel(session_id, &session, count)?;
        for juror in outcome.jurors.iter() {
            session
                .drawn_jurors
                .try_push(DrawnJuror { juror: juror.clone(), court_id: outcome.court_id })
                .map_err(|_| Error::<T>::TooManyJurors)?;
        }
        session.draw_index = outcome.next_draw_index;
        Sessions::<T>::insert(session_id, session);

        Self::deposit_event(Event::<T>::JurorsDrawn {
            session_id,
            court_id: outcome.court_id,
            jurors: outcome.jurors,
        });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_close_session(session_id: SessionId) -> DispatchResult {
        let session = Self::session(session_id)?;
        ensure!(session.phase == Phase::Execution, Error::<T>::SessionNotConcluded);
        Sessions::<T>::remove(session_id);

        Self::deposit_event(Event::<T>::SessionClosed { session_id });

        Ok(())
    }
}
