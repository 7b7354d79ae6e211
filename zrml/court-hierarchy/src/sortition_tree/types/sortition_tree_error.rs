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

use crate::{Config, Error};
use frame_support::{PalletError, RuntimeDebugNoBound};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;

#[derive(Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebugNoBound, TypeInfo)]
pub enum SortitionTreeError {
    /// There is no leaf which belongs to this participant.
    ParticipantNotFound,
    /// There is no node with this index.
    NodeNotFound,
    /// The tree is full and can't accept any new participants.
    TreeIsFull,
    /// The branching factor is smaller than two.
    InvalidArity,
    /// A draw was attempted on a tree without any weight.
    EmptyTree,
    /// A draw ended on a leaf without an owner. This is unexpected behavior.
    VacantLeaf,
    /// The weights of a node's children don't add up to the node's weight. This is unexpected
    /// behavior.
    InconsistentSums,
    /// Unexpected storage overflow.
    StorageOverflow(StorageOverflowError),
}

#[derive(Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebugNoBound, TypeInfo)]
pub enum StorageOverflowError {
    /// Encountered a storage overflow when trying to push onto the `nodes` vector.
    Nodes,
    /// Encountered a storage overflow when trying to insert into the `leaf_owners` map.
    LeafOwners,
    /// Encountered a storage overflow when trying to insert into the `participant_to_index` map.
    ParticipantToIndex,
    /// Encountered a storage overflow when trying to push onto the `vacant_leaves` vector.
    VacantLeaves,
}

impl From<StorageOverflowError> for SortitionTreeError {
    fn from(error: StorageOverflowError) -> SortitionTreeError {
        SortitionTreeError::StorageOverflow(error)
    }
}

impl StorageOverflowError {
    pub(crate) fn into_dispatch_error<T>(self) -> DispatchError
    where
        T: Config,
    {
        let sortition_tree_error: SortitionTreeError = self.into();
        sortition_tree_error.into_dispatch_error::<T>()
    }
}

impl<T> From<SortitionTreeError> for Error<T> {
    fn from(error: SortitionTreeError) -> Error<T> {
        Error::<T>::SortitionTreeError(error)
    }
}

impl SortitionTreeError {
    pub(crate) fn into_dispatch_error<T>(self) -> DispatchError
    where
        T: Config,
    {
        Error::<T>::SortitionTreeError(self).into()
    }
}
