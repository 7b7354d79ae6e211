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
    traits::WeightedSortition, types::Session, Config, DrawNonce, DrawnJurorOf, Error, Pallet,
    SortitionTreeOf, LOG_TARGET,
};
use alloc::{collections::BTreeSet, vec::Vec};
use frame_support::{ensure, traits::Randomness};
use parity_scale_codec::Encode;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sp_runtime::{
    traits::{Get, Hash, Zero},
    DispatchError,
};
use zeitgeist_primitives::{
    math::checked_ops_res::CheckedAddRes,
    types::{CourtId, SessionId},
};

const DRAW_SUBJECT: &[u8] = b"zrml/court-hierarchy/draw";

/// The result of a batch of draws.
pub(crate) struct DrawOutcome<AccountId> {
    /// The court whose tree served the draws.
    pub(crate) court_id: CourtId,
    /// The drawn jurors in the order in which they were drawn.
    pub(crate) jurors: Vec<AccountId>,
    /// The draw index to continue with in the next batch.
    pub(crate) next_draw_index: u64,
}

impl<T: Config> Pallet<T> {
    /// Draw `count` jurors for `session_id`.
    ///
    /// The drawing court is resolved once per batch by walking up from the session's court (see
    /// `resolve_drawing_court`). Each draw consumes one random value derived from the batch seed
    /// and a fresh draw index, starting at the session's `draw_index`. A juror who's already on
    /// the panel is re-rolled up to `MaxDrawRetries` times and accepted after that.
    ///
    /// # Parameters
    ///
    /// - `session_id`: The session the jurors are drawn for.
    /// - `session`: The session as it was before this batch.
    /// - `count`: The number of jurors to draw.
    pub(crate) fn draw_panel(
        session_id: SessionId,
        session: &Session<T>,
        count: u32,
    ) -> Result<DrawOutcome<T::AccountId>, DispatchError> {
        let panel = session.drawn_jurors.as_slice();
        let (drawing_court_id, tree) =
            Self::resolve_drawing_court(session.court_id, panel, session.remaining_jurors())?;
        let seed = Self::draw_seed(session_id);
        let max_retries = T::MaxDrawRetries::get();
        let mut draw_index = session.draw_index;
        let mut jurors: Vec<T::AccountId> = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let mut retries = 0u32;
            let juror = loop {
                let candidate = tree.draw(Self::random_value(&seed, draw_index))?;
                draw_index = draw_index.checked_add_res(&1)?;
                let is_duplicate = jurors.contains(&candidate)
                    || panel.iter().any(|drawn_juror| drawn_juror.juror == candidate);
                if !is_duplicate {
                    break candidate;
                }
                if retries >= max_retries {
                    log::warn!(
                        target: LOG_TARGET,
                        "Accepting duplicate juror {:?} for session {:?} after {} retries",
                        candidate,
                        session_id,
                        retries,
                    );
                    break candidate;
                }
                retries = retries.saturating_add(1);
            };
            jurors.push(juror);
        }
        Ok(DrawOutcome { court_id: drawing_court_id, jurors, next_draw_index: draw_index })
    }

    /// Find the court whose tree serves the next draws for a session in `court_id`.
    ///
    /// Starting at `court_id`, the walk moves to the parent while the current court has fewer
    /// eligible jurors than its `jurors_for_jump`. The root serves the draw if its eligible jurors
    /// who aren't on `panel` yet can fill all `open_seats`, and fails with `InsufficientJurors`
    /// otherwise. The root check doesn't depend on how the draws are split into batches.
    pub(crate) fn resolve_drawing_court(
        court_id: CourtId,
        panel: &[DrawnJurorOf<T>],
        open_seats: u32,
    ) -> Result<(CourtId, SortitionTreeOf<T>), DispatchError> {
        let mut current_id = court_id;
        for _ in 0..=T::MaxCourtDepth::get() {
            let court = Self::get_court(current_id)?;
            let tree = Self::sortition_tree(current_id)?;
            let eligible_count = tree.eligible_count();
            match court.parent {
                Some(parent_id) if eligible_count < court.parameters.jurors_for_jump => {
                    log::debug!(
                        target: LOG_TARGET,
                        "Court {:?} has {} eligible jurors (jump threshold {}), jumping to {:?}",
                        current_id,
                        eligible_count,
                        court.parameters.jurors_for_jump,
                        parent_id,
                    );
                    current_id = parent_id;
                }
                Some(_) => return Ok((current_id, tree)),
                None => {
                    let seated: BTreeSet<&T::AccountId> = panel
                        .iter()
                        .map(|drawn_juror| &drawn_juror.juror)
                        .filter(|juror| tree.weight_of(juror).is_ok_and(|stake| !stake.is_zero()))
                        .collect();
                    let available = eligible_count.saturating_sub(seated.len() as u32);
                    ensure!(
                        available > 0 && available >= open_seats,
                        Error::<T>::InsufficientJurors
                    );
                    return Ok((current_id, tree));
                }
            }
        }
        Err(Error::<T>::CorruptHierarchy.into())
    }

    /// Derive the seed of a batch of draws from `T::Random`, the session and `DrawNonce`.
    pub(crate) fn draw_seed(session_id: SessionId) -> [u8; 32] {
        let nonce = DrawNonce::<T>::mutate(|n| {
            let current = *n;
            *n = n.wrapping_add(1);
            current
        });
        let subject = (DRAW_SUBJECT, session_id, nonce).encode();
        let (random_hash, _) = T::Random::random(&subject);
        let mixed_hash = T::Hashing::hash_of(&(random_hash, subject));
        let mut seed = [0; 32];
        for (byte, el) in mixed_hash.as_ref().iter().copied().zip(seed.iter_mut()) {
            *el = byte
        }
        seed
    }

    /// Derive the random value of draw number `draw_index` from `seed`. Every draw index selects a
    /// separate ChaCha stream, so the values are independent of each other.
    pub(crate) fn random_value(seed: &[u8; 32], draw_index: u64) -> u128 {
        let mut rng = ChaCha20Rng::from_seed(*seed);
        rng.set_stream(draw_index);
        rng.gen::<u128>()
    }
}
