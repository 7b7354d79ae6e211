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

use sp_runtime::{DispatchError, DispatchResult};

/// Interface of a court hierarchy towards the stake ledger.
///
/// The ledger owns the token accounting. Whenever a juror stakes or withdraws, the ledger reports
/// the new stake of the juror in the affected court through this interface. Implementations don't
/// move any tokens.
pub trait CourtStakeApi {
    type AccountId;
    type Balance;
    type CourtId;

    /// Set the stake of `who` in the court `court_id` to `stake`.
    ///
    /// Jurors who aren't staked in the court yet are inserted. A stake of zero keeps the juror's
    /// slot, but makes the juror ineligible for draws.
    ///
    /// **Must** fail if `stake` is non-zero but below the minimum stake of the court.
    fn set_stake(
        court_id: Self::CourtId,
        who: &Self::AccountId,
        stake: Self::Balance,
    ) -> DispatchResult;

    /// Remove `who` from the court `court_id` and free their slot for reuse.
    fn remove_stake(court_id: Self::CourtId, who: &Self::AccountId) -> DispatchResult;

    /// Return the stake of `who` in the court `court_id`.
    fn stake_of(
        court_id: Self::CourtId,
        who: &Self::AccountId,
    ) -> Result<Self::Balance, DispatchError>;

    /// Return the sum of all stakes in the court `court_id`.
    fn total_stake(court_id: Self::CourtId) -> Result<Self::Balance, DispatchError>;
}
