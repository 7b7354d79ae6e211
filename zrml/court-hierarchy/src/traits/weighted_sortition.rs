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

use crate::{BalanceOf, Config};
use sp_runtime::{DispatchError, DispatchResult};

/// Weighted random selection of participants.
///
/// Each participant carries a non-negative weight. A draw selects a participant with probability
/// proportional to its weight; participants with zero weight are never selected.
pub(crate) trait WeightedSortition<T>
where
    T: Config,
{
    /// Set the weight of `who` to `weight`, inserting `who` if they're not a participant yet.
    ///
    /// A weight of zero keeps the participant's slot, but makes them ineligible. Fails if a new
    /// participant doesn't fit into the tree or if the total weight overflows. The tree is left
    /// untouched on failure.
    fn insert_or_update(&mut self, who: &T::AccountId, weight: BalanceOf<T>) -> DispatchResult;

    /// Remove `who` and mark their slot for reuse.
    fn remove(&mut self, who: &T::AccountId) -> DispatchResult;

    /// Return the sum of the weights of all participants.
    fn total_weight(&self) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the weight of `who`.
    fn weight_of(&self, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError>;

    /// Return the number of participants with non-zero weight.
    fn eligible_count(&self) -> u32;

    /// Select a participant using `random_value`.
    ///
    /// The value is reduced modulo the total weight to a cursor, which is then used to descend the
    /// tree. Fails if the total weight is zero.
    fn draw(&self, random_value: u128) -> Result<T::AccountId, DispatchError>;
}
