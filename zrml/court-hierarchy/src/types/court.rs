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

use crate::{Config, CourtParametersOf};
use frame_support::{
    pallet_prelude::RuntimeDebugNoBound, storage::bounded_btree_set::BoundedBTreeSet,
    CloneNoBound, PartialEqNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::{traits::Zero, RuntimeDebug};
use zeitgeist_primitives::{
    constants::{DEFAULT_JURORS_FOR_JUMP, DEFAULT_MIN_JURORS, DEFAULT_SORTITION_ARITY},
    types::CourtId,
};

/// The periods of a dispute. Used to index `CourtParameters::times_per_period`.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum Period {
    Evidence = 0,
    Commit = 1,
    Vote = 2,
    Appeal = 3,
}

/// The configuration of a court.
///
/// # Types
///
/// - `Balance`: Balance type.
/// - `BlockNumber`: Block number type.
#[derive(
    Clone,
    Decode,
    Deserialize,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEq,
    RuntimeDebug,
    Serialize,
    TypeInfo,
)]
#[serde(rename_all = "camelCase")]
pub struct CourtParameters<Balance, BlockNumber> {
    /// Whether jurors commit to their votes before revealing them.
    pub hidden_votes: bool,
    /// The smallest non-zero stake a juror may hold in the court.
    pub min_stake: Balance,
    /// The share of `min_stake` locked per draw, in basis points.
    pub alpha: u64,
    /// The fee paid to each drawn juror.
    pub juror_fee: Balance,
    /// The minimum number of jurors of a panel.
    pub min_jurors: u32,
    /// Draws move up to the parent court while the court has fewer eligible jurors than this.
    pub jurors_for_jump: u32,
    /// The durations of the evidence, commit, vote and appeal periods in blocks.
    pub times_per_period: [BlockNumber; 4],
    /// The branching factor of the court's sortition tree. Fixed at creation.
    pub sortition_arity: u32,
}

impl<Balance, BlockNumber> CourtParameters<Balance, BlockNumber>
where
    BlockNumber: Copy,
{
    pub fn time_of(&self, period: Period) -> BlockNumber {
        self.times_per_period[period as usize]
    }
}

impl<Balance, BlockNumber> CourtParameters<Balance, BlockNumber> {
    /// Overwrite the field selected by `parameter`.
    pub fn apply(&mut self, parameter: CourtParameter<Balance, BlockNumber>) {
        match parameter {
            CourtParameter::HiddenVotes(value) => self.hidden_votes = value,
            CourtParameter::MinStake(value) => self.min_stake = value,
            CourtParameter::Alpha(value) => self.alpha = value,
            CourtParameter::JurorFee(value) => self.juror_fee = value,
            CourtParameter::MinJurors(value) => self.min_jurors = value,
            CourtParameter::JurorsForJump(value) => self.jurors_for_jump = value,
            CourtParameter::TimesPerPeriod(value) => self.times_per_period = value,
        }
    }
}

impl<Balance, BlockNumber> Default for CourtParameters<Balance, BlockNumber>
where
    Balance: Zero,
    BlockNumber: Copy + Zero,
{
    fn default() -> Self {
        CourtParameters {
            hidden_votes: false,
            min_stake: Zero::zero(),
            alpha: 0,
            juror_fee: Zero::zero(),
            min_jurors: DEFAULT_MIN_JURORS,
            jurors_for_jump: DEFAULT_JURORS_FOR_JUMP,
            times_per_period: [Zero::zero(); 4],
            sortition_arity: DEFAULT_SORTITION_ARITY,
        }
    }
}

/// A single mutable court parameter. The sortition arity is absent since it can't change after
/// the court's tree is created.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum CourtParameter<Balance, BlockNumber> {
    HiddenVotes(bool),
    MinStake(Balance),
    Alpha(u64),
    JurorFee(Balance),
    MinJurors(u32),
    JurorsForJump(u32),
    TimesPerPeriod([BlockNumber; 4]),
}

/// A node of the court hierarchy.
///
/// The root court has no parent. Every other court has exactly one parent and the parent lists it
/// among its children.
#[derive(
    CloneNoBound, Decode, Encode, Eq, MaxEncodedLen, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo,
)]
#[scale_info(skip_type_params(T))]
pub struct CourtInfo<T>
where
    T: Config,
{
    pub parent: Option<CourtId>,
    pub children: BoundedBTreeSet<CourtId, T::MaxChildCourts>,
    /// The length of the longest path from the court down to a leaf. Zero for a leaf.
    pub height: u32,
    pub parameters: CourtParametersOf<T>,
}

impl<T> CourtInfo<T>
where
    T: Config,
{
    pub fn new(parent: Option<CourtId>, parameters: CourtParametersOf<T>) -> Self {
        CourtInfo { parent, children: BoundedBTreeSet::new(), height: 0, parameters }
    }
}
