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

use crate::Config;
use frame_support::{
    pallet_prelude::RuntimeDebugNoBound, storage::bounded_vec::BoundedVec, CloneNoBound,
    PartialEqNoBound,
};
use frame_system::pallet_prelude::BlockNumberFor;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use zeitgeist_primitives::types::CourtId;

/// The lifecycle of a dispute session. Sessions only ever move forward through the phases in the
/// order in which they're declared.
#[derive(
    Clone,
    Copy,
    Decode,
    Encode,
    Eq,
    MaxEncodedLen,
    Ord,
    PartialEq,
    PartialOrd,
    RuntimeDebug,
    TypeInfo,
)]
pub enum Phase {
    Staking,
    Drawing,
    Voting,
    Appeal,
    Execution,
}

impl Phase {
    /// Return the phase following `self`; `None` for `Execution`.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Staking => Some(Phase::Drawing),
            Phase::Drawing => Some(Phase::Voting),
            Phase::Voting => Some(Phase::Appeal),
            Phase::Appeal => Some(Phase::Execution),
            Phase::Execution => None,
        }
    }
}

/// A juror drawn for a session, together with the court whose tree they were drawn from.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DrawnJuror<AccountId> {
    pub juror: AccountId,
    pub court_id: CourtId,
}

#[derive(
    CloneNoBound, Decode, Encode, Eq, MaxEncodedLen, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct Session<T>
where
    T: Config,
{
    /// The court the session was opened in. Draws may still be served by an ancestor.
    pub court_id: CourtId,
    pub creator: T::AccountId,
    pub phase: Phase,
    /// The block in which the session entered its current phase.
    pub last_phase_change: BlockNumberFor<T>,
    /// The size of a full panel.
    pub jurors_required: u32,
    pub drawn_jurors: BoundedVec<DrawnJuror<T::AccountId>, T::MaxJurorsPerSession>,
    /// The number of random values consumed by draws of this session so far.
    pub draw_index: u64,
}

impl<T> Session<T>
where
    T: Config,
{
    pub fn jurors_drawn(&self) -> u32 {
        self.drawn_jurors.len() as u32
    }

    pub fn remaining_jurors(&self) -> u32 {
        self.jurors_required.saturating_sub(self.jurors_drawn())
    }

    pub fn is_panel_full(&self) -> bool {
        self.remaining_jurors() == 0
    }
}
