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

use core::marker::PhantomData;
use sp_runtime::traits::Get;

/// Gets the maximum number of nodes of a sortition tree as a function of the maximum number of
/// participants. Every leaf split adds one sum node, so a tree with `n` leaves has fewer than `2n`
/// nodes including the root. Saturates at `u32::MAX`.
///
/// # Generics
///
/// - `S`: A getter for the maximum number of participants.
pub(crate) struct SortitionTreeMaxNodes<S>(PhantomData<S>);

impl<S> Get<u32> for SortitionTreeMaxNodes<S>
where
    S: Get<u32>,
{
    fn get() -> u32 {
        S::get().saturating_mul(2).saturating_add(1)
    }
}
