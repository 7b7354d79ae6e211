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
    traits::WeightedSortition,
    types::{CourtInfo, Period, Phase, Session},
    BalanceOf, Config, CourtParametersOf, Courts, Error, Event, MaxDrawingTime, MinStakingTime,
    NextCourtId, Pallet, Sessions, SortitionTreeOf, SortitionTrees,
};
use alloc::{vec, vec::Vec};
use frame_support::{ensure, traits::EnsureOrigin};
use frame_system::pallet_prelude::{BlockNumberFor, OriginFor};
use sp_runtime::{
    traits::{Get, Zero},
    DispatchError, DispatchResult, Saturating,
};
use zeitgeist_primitives::{
    constants::{MIN_SORTITION_ARITY, ROOT_COURT_ID},
    math::checked_ops_res::CheckedAddRes,
    traits::CourtStakeApi,
    types::{CourtId, SessionId},
};

impl<T: Config> Pallet<T> {
    pub(crate) fn ensure_governance(origin: OriginFor<T>) -> DispatchResult {
        let _ = T::CourtGovernanceOrigin::ensure_origin(origin)
            .map_err(|_| Error::<T>::Unauthorized)?;
        Ok(())
    }

    /// Create the root court. Only called from the genesis build.
    pub(crate) fn initialize_registry(parameters: CourtParametersOf<T>) -> DispatchResult {
        Self::ensure_valid_parameters(&parameters)?;
        let tree = SortitionTreeOf::<T>::new(parameters.sortition_arity)?;
        Courts::<T>::insert(ROOT_COURT_ID, CourtInfo::new(None, parameters));
        SortitionTrees::<T>::insert(ROOT_COURT_ID, tree);
        NextCourtId::<T>::put(ROOT_COURT_ID.checked_add_res(&1)?);
        Ok(())
    }

    pub(crate) fn ensure_valid_parameters(parameters: &CourtParametersOf<T>) -> DispatchResult {
        ensure!(parameters.min_jurors > 0, Error::<T>::MinJurorsZero);
        ensure!(parameters.jurors_for_jump > 0, Error::<T>::JurorsForJumpZero);
        ensure!(
            (MIN_SORTITION_ARITY..=T::MaxSortitionArity::get())
                .contains(&parameters.sortition_arity),
            Error::<T>::InvalidSortitionArity
        );
        Ok(())
    }

    pub fn get_court(court_id: CourtId) -> Result<CourtInfo<T>, DispatchError> {
        Courts::<T>::get(court_id).ok_or(Error::<T>::UnknownCourt.into())
    }

    /// Return the ancestors of `court_id`, starting with its parent and ending with the root.
    pub fn ancestors(court_id: CourtId) -> Result<Vec<CourtId>, DispatchError> {
        let max_depth = T::MaxCourtDepth::get() as usize;
        let mut result = vec![];
        let mut court = Self::get_court(court_id)?;
        while let Some(parent_id) = court.parent {
            ensure!(result.len() < max_depth, Error::<T>::CorruptHierarchy);
            result.push(parent_id);
            court = Courts::<T>::get(parent_id).ok_or(Error::<T>::CorruptHierarchy)?;
        }
        Ok(result)
    }

    /// Return the number of ancestors of `court_id`. The root court has depth zero.
    pub fn depth(court_id: CourtId) -> Result<u32, DispatchError> {
        Ok(Self::ancestors(court_id)?.len() as u32)
    }

    /// Fails unless a subtree of height `height` fits below a court of depth `parent_depth`.
    pub(crate) fn ensure_depth_fits(parent_depth: u32, height: u32) -> DispatchResult {
        let lowest_depth = parent_depth.checked_add_res(&1)?.checked_add_res(&height)?;
        ensure!(lowest_depth <= T::MaxCourtDepth::get(), Error::<T>::MaxCourtDepthExceeded);
        Ok(())
    }

    /// Make sure that `court_id` has at least height `height` and propagate the change up to the
    /// root. Stops at the first court which is already high enough.
    pub(crate) fn raise_heights(court_id: CourtId, height: u32) -> DispatchResult {
        let mut current_id = court_id;
        let mut height = height;
        for _ in 0..=T::MaxCourtDepth::get() {
            let mut court = Courts::<T>::get(current_id).ok_or(Error::<T>::CorruptHierarchy)?;
            if court.height >= height {
                return Ok(());
            }
            court.height = height;
            let parent = court.parent;
            Courts::<T>::insert(current_id, court);
            match parent {
                Some(parent_id) => {
                    current_id = parent_id;
                    height = height.checked_add_res(&1)?;
                }
                None => return Ok(()),
            }
        }
        Err(Error::<T>::CorruptHierarchy.into())
    }

    /// Recompute the height of `court_id` from its children and propagate the change up to the
    /// root. Stops at the first court whose height is unchanged.
    pub(crate) fn recompute_heights(court_id: CourtId) -> DispatchResult {
        let mut current_id = court_id;
        for _ in 0..=T::MaxCourtDepth::get() {
            let mut court = Courts::<T>::get(current_id).ok_or(Error::<T>::CorruptHierarchy)?;
            let mut height = 0u32;
            for child_id in court.children.iter() {
                let child = Courts::<T>::get(child_id).ok_or(Error::<T>::CorruptHierarchy)?;
                height = height.max(child.height.checked_add_res(&1)?);
            }
            if court.height == height {
                return Ok(());
            }
            court.height = height;
            let parent = court.parent;
            Courts::<T>::insert(current_id, court);
            match parent {
                Some(parent_id) => current_id = parent_id,
                None => return Ok(()),
            }
        }
        Err(Error::<T>::CorruptHierarchy.into())
    }

    /// Return the number of jurors with non-zero stake in `court_id`.
    pub fn eligible_jurors(court_id: CourtId) -> Result<u32, DispatchError> {
        Ok(Self::sortition_tree(court_id)?.eligible_count())
    }

    pub fn session(session_id: SessionId) -> Result<Session<T>, DispatchError> {
        Sessions::<T>::get(session_id).ok_or(Error::<T>::SessionNotFound.into())
    }

    /// Return the number of blocks `session_id` has spent in its current phase.
    pub fn elapsed_in_phase(session_id: SessionId) -> Result<BlockNumberFor<T>, DispatchError> {
        let session = Self::session(session_id)?;
        let now = frame_system::Pallet::<T>::block_number();
        Ok(now.saturating_sub(session.last_phase_change))
    }

    pub(crate) fn sortition_tree(court_id: CourtId) -> Result<SortitionTreeOf<T>, DispatchError> {
        SortitionTrees::<T>::get(court_id).ok_or(Error::<T>::UnknownCourt.into())
    }

    /// Fails unless `session` has spent enough time in its current phase to move on.
    pub(crate) fn ensure_phase_can_end(
        session: &Session<T>,
        allow_partial_panel: bool,
    ) -> DispatchResult {
        let parameters = Self::get_court(session.court_id)?.parameters;
        let now = frame_system::Pallet::<T>::block_number();
        let elapsed = now.saturating_sub(session.last_phase_change);
        let min_duration = match session.phase {
            Phase::Staking => MinStakingTime::<T>::get().max(parameters.time_of(Period::Evidence)),
            Phase::Drawing => {
                if !session.is_panel_full() {
                    ensure!(
                        elapsed >= MaxDrawingTime::<T>::get(),
                        Error::<T>::InvalidPhaseTransition
                    );
                    ensure!(allow_partial_panel, Error::<T>::DrawingTimedOut);
                }
                Zero::zero()
            }
            Phase::Voting => {
                let vote_time = parameters.time_of(Period::Vote);
                if parameters.hidden_votes {
                    vote_time.saturating_add(parameters.time_of(Period::Commit))
                } else {
                    vote_time
                }
            }
            Phase::Appeal => parameters.time_of(Period::Appeal),
            Phase::Execution => return Err(Error::<T>::InvalidPhaseTransition.into()),
        };
        ensure!(elapsed >= min_duration, Error::<T>::InvalidPhaseTransition);
        Ok(())
    }
}

impl<T> CourtStakeApi for Pallet<T>
where
    T: Config,
{
    type AccountId = T::AccountId;
    type Balance = BalanceOf<T>;
    type CourtId = CourtId;

    fn set_stake(court_id: CourtId, who: &T::AccountId, stake: BalanceOf<T>) -> DispatchResult {
        let court = Self::get_court(court_id)?;
        ensure!(
            stake.is_zero() || stake >= court.parameters.min_stake,
            Error::<T>::InvalidWeight
        );
        SortitionTrees::<T>::try_mutate(court_id, |maybe_tree| -> DispatchResult {
            let tree = maybe_tree.as_mut().ok_or(Error::<T>::UnknownCourt)?;
            tree.insert_or_update(who, stake)
        })?;

        Self::deposit_event(Event::<T>::StakeSet { court_id, who: who.clone(), stake });

        Ok(())
    }

    fn remove_stake(court_id: CourtId, who: &T::AccountId) -> DispatchResult {
        SortitionTrees::<T>::try_mutate(court_id, |maybe_tree| -> DispatchResult {
            let tree = maybe_tree.as_mut().ok_or(Error::<T>::UnknownCourt)?;
            tree.remove(who)
        })?;

        Self::deposit_event(Event::<T>::StakeRemoved { court_id, who: who.clone() });

        Ok(())
    }

    fn stake_of(court_id: CourtId, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError> {
        Self::sortition_tree(court_id)?.weight_of(who)
    }

    fn total_stake(court_id: CourtId) -> Result<BalanceOf<T>, DispatchError> {
        Self::sortition_tree(court_id)?.total_weight()
    }
}
