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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
mod dispatchable_impls;
mod juror_draw;
pub mod mock;
mod pallet_impls;
mod sortition_tree;
mod tests;
mod traits;
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        sortition_tree::types::{SortitionTree, SortitionTreeError},
        types::{CourtInfo, CourtParameter, CourtParameters, DrawnJuror, Phase, Session},
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use frame_support::{
        pallet_prelude::{IsType, StorageMap, StorageValue, StorageVersion, ValueQuery},
        traits::{BuildGenesisConfig, EnsureOrigin, Get, Hooks, Randomness},
        transactional, DefaultNoBound, Parameter, Twox64Concat,
    };
    use frame_system::{
        ensure_signed,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use parity_scale_codec::MaxEncodedLen;
    use sp_runtime::{
        traits::{AtLeast32BitUnsigned, MaybeSerializeDeserialize, Member},
        DispatchResult,
    };
    use zeitgeist_primitives::{
        constants::MIN_SORTITION_ARITY,
        types::{CourtId, SessionId},
    };

    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-court-hierarchy";

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The type of juror stakes and fees.
        type Balance: AtLeast32BitUnsigned
            + Copy
            + Default
            + MaxEncodedLen
            + MaybeSerializeDeserialize
            + Member
            + Parameter;

        /// The origin which may create, move and configure courts.
        type CourtGovernanceOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// The maximum number of direct subcourts of a court.
        #[pallet::constant]
        type MaxChildCourts: Get<u32>;

        /// The maximum distance between a court and the root court. Bounds the cost of every walk
        /// up the hierarchy.
        #[pallet::constant]
        type MaxCourtDepth: Get<u32>;

        /// The number of times a draw is repeated if it selects a juror who's already on the
        /// panel. The duplicate is accepted once the retries are exhausted.
        #[pallet::constant]
        type MaxDrawRetries: Get<u32>;

        /// The maximum size of a panel.
        #[pallet::constant]
        type MaxJurorsPerSession: Get<u32>;

        /// The maximum branching factor of a sortition tree.
        #[pallet::constant]
        type MaxSortitionArity: Get<u32>;

        /// The maximum number of jurors staked in a single court.
        #[pallet::constant]
        type MaxStakersPerCourt: Get<u32>;

        /// Randomness source
        type Random: Randomness<Self::Hash, BlockNumberFor<Self>>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub type BalanceOf<T> = <T as Config>::Balance;
    pub type CourtParametersOf<T> = CourtParameters<BalanceOf<T>, BlockNumberFor<T>>;
    pub type CourtParameterOf<T> = CourtParameter<BalanceOf<T>, BlockNumberFor<T>>;
    pub type DrawnJurorOf<T> = DrawnJuror<AccountIdOf<T>>;
    pub(crate) type SortitionTreeOf<T> = SortitionTree<T, <T as Config>::MaxStakersPerCourt>;

    /// The court hierarchy. The root court is created at genesis.
    #[pallet::storage]
    pub type Courts<T: Config> = StorageMap<_, Twox64Concat, CourtId, CourtInfo<T>>;

    /// The stakes of the jurors of each court.
    #[pallet::storage]
    pub(crate) type SortitionTrees<T: Config> =
        StorageMap<_, Twox64Concat, CourtId, SortitionTreeOf<T>>;

    #[pallet::storage]
    pub type NextCourtId<T: Config> = StorageValue<_, CourtId, ValueQuery>;

    #[pallet::storage]
    pub type Sessions<T: Config> = StorageMap<_, Twox64Concat, SessionId, Session<T>>;

    #[pallet::storage]
    pub type NextSessionId<T: Config> = StorageValue<_, SessionId, ValueQuery>;

    /// The minimum number of blocks a session stays in the staking phase.
    #[pallet::storage]
    pub type MinStakingTime<T: Config> = StorageValue<_, BlockNumberFor<T>, ValueQuery>;

    /// The number of blocks after which a session in the drawing phase stops accepting draws.
    #[pallet::storage]
    pub type MaxDrawingTime<T: Config> = StorageValue<_, BlockNumberFor<T>, ValueQuery>;

    /// An extra layer of pseudo randomness mixed into every draw seed.
    #[pallet::storage]
    pub(crate) type DrawNonce<T: Config> = StorageValue<_, u64, ValueQuery>;

    #[pallet::genesis_config]
    #[derive(DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub root_court: CourtParametersOf<T>,
        pub min_staking_time: BlockNumberFor<T>,
        pub max_drawing_time: BlockNumberFor<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let result = Pallet::<T>::initialize_registry(self.root_court.clone());
            assert!(result.is_ok(), "Invalid root court: {:?}", result);
            MinStakingTime::<T>::put(self.min_staking_time);
            MaxDrawingTime::<T>::put(self.max_drawing_time);
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// Court `court_id` was created below `parent_id`.
        CourtCreated { court_id: CourtId, parent_id: CourtId, parameters: CourtParametersOf<T> },
        /// Court `court_id` was moved from `old_parent_id` to `new_parent_id`. The court's
        /// subtree and stakes moved with it.
        CourtMoved { court_id: CourtId, old_parent_id: CourtId, new_parent_id: CourtId },
        CourtParameterChanged { court_id: CourtId, parameter: CourtParameterOf<T> },
        MinStakingTimeSet { min_staking_time: BlockNumberFor<T> },
        MaxDrawingTimeSet { max_drawing_time: BlockNumberFor<T> },
        /// The stake of juror `who` in court `court_id` was set to `stake`.
        StakeSet { court_id: CourtId, who: AccountIdOf<T>, stake: BalanceOf<T> },
        /// Juror `who` left court `court_id`.
        StakeRemoved { court_id: CourtId, who: AccountIdOf<T> },
        SessionCreated {
            session_id: SessionId,
            court_id: CourtId,
            creator: AccountIdOf<T>,
            jurors_required: u32,
        },
        PhaseAdvanced { session_id: SessionId, from: Phase, to: Phase },
        /// Session `session_id` left the drawing phase with fewer jurors than required.
        PartialPanelAccepted { session_id: SessionId, jurors_drawn: u32, jurors_required: u32 },
        /// `jurors` were drawn for session `session_id` from the tree of court `court_id`.
        JurorsDrawn { session_id: SessionId, court_id: CourtId, jurors: Vec<AccountIdOf<T>> },
        SessionClosed { session_id: SessionId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The origin is not allowed to govern courts.
        Unauthorized,
        /// There is no court with the specified ID.
        UnknownCourt,
        /// The specified parent court doesn't exist.
        UnknownParent,
        /// The operation would make a court its own ancestor.
        CycleDetected,
        /// A walk up the hierarchy took more steps than the maximum court depth. This is
        /// unexpected behavior.
        CorruptHierarchy,
        /// The parent court already has the maximum number of subcourts.
        MaxChildCourtsReached,
        /// The operation would place a court further than `MaxCourtDepth` below the root.
        MaxCourtDepthExceeded,
        /// The minimum number of jurors must be positive.
        MinJurorsZero,
        /// The jump threshold must be positive.
        JurorsForJumpZero,
        /// The sortition arity is outside of the allowed range.
        InvalidSortitionArity,
        /// The stake is non-zero but below the minimum stake of the court.
        InvalidWeight,
        /// There is no session with the specified ID.
        SessionNotFound,
        /// The session can't advance to the next phase yet.
        InvalidPhaseTransition,
        /// Jurors can only be drawn while the session is in the drawing phase.
        NotInDrawingPhase,
        /// The drawing window of the session has elapsed.
        DrawingTimedOut,
        /// The number of jurors to draw must be positive.
        ZeroJurorCount,
        /// The session's panel is already complete.
        PanelAlreadyFull,
        /// The requested panel is larger than the maximum panel size.
        TooManyJurors,
        /// Not even the root court has enough eligible jurors.
        InsufficientJurors,
        /// Only sessions in the execution phase can be closed.
        SessionNotConcluded,
        /// An error occurred in a sortition tree.
        SortitionTreeError(SortitionTreeError),
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                T::MaxSortitionArity::get() >= MIN_SORTITION_ARITY,
                "MaxSortitionArity must be at least {}",
                MIN_SORTITION_ARITY,
            );
            assert!(T::MaxCourtDepth::get() > 0, "MaxCourtDepth must be positive");
            assert!(T::MaxStakersPerCourt::get() > 0, "MaxStakersPerCourt must be positive");
            assert!(T::MaxJurorsPerSession::get() > 0, "MaxJurorsPerSession must be positive");
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a court below `parent_id`.
        ///
        /// The court receives the next free court ID and an empty sortition tree with branching
        /// factor `parameters.sortition_arity`, which can't be changed later. Fails if the new
        /// court would be more than `MaxCourtDepth` levels below the root.
        ///
        /// Must be called by `CourtGovernanceOrigin`.
        ///
        /// # Parameters
        ///
        /// - `origin`: The governance origin.
        /// - `parent_id`: The court below which the new court is created.
        /// - `parameters`: The configuration of the new court.
        ///
        /// # Complexity
        ///
        /// `O(log(c) + d)`, where `c` is the number of children of the parent court and `d` is
        /// `MaxCourtDepth`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_court(T::MaxCourtDepth::get()))]
        #[transactional]
        pub fn create_court(
            origin: OriginFor<T>,
            parent_id: CourtId,
            parameters: CourtParametersOf<T>,
        ) -> DispatchResult {
            Self::ensure_governance(origin)?;
            let _ = Self::do_create_court(parent_id, parameters)?;
            Ok(())
        }

        /// Move `court_id` and its whole subtree below `new_parent_id`.
        ///
        /// Stakes, sessions and parameters of the moved courts are untouched. Fails if the move
        /// would make a court its own ancestor. In particular, the root court can't be moved. Also
        /// fails if a court of the moved subtree would end up more than `MaxCourtDepth` levels
        /// below the root.
        ///
        /// Must be called by `CourtGovernanceOrigin`.
        ///
        /// # Complexity
        ///
        /// `O(d * c)`, where `d` is `MaxCourtDepth` and `c` is `MaxChildCourts`.
        #[pallet::call_index(1)]
        #[pallet::weight(
            T::WeightInfo::move_court(T::MaxCourtDepth::get(), T::MaxChildCourts::get())
        )]
        #[transactional]
        pub fn move_court(
            origin: OriginFor<T>,
            court_id: CourtId,
            new_parent_id: CourtId,
        ) -> DispatchResult {
            Self::ensure_governance(origin)?;
            Self::do_move_court(court_id, new_parent_id)
        }

        /// Change a single parameter of `court_id`. The sortition arity can't be changed.
        ///
        /// Must be called by `CourtGovernanceOrigin`.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::change_court_parameter())]
        #[transactional]
        pub fn change_court_parameter(
            origin: OriginFor<T>,
            court_id: CourtId,
            parameter: CourtParameterOf<T>,
        ) -> DispatchResult {
            Self::ensure_governance(origin)?;
            Self::do_change_court_parameter(court_id, parameter)
        }

        /// Set the minimum number of blocks a session stays in the staking phase.
        ///
        /// Must be called by `CourtGovernanceOrigin`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_min_staking_time())]
        #[transactional]
        pub fn set_min_staking_time(
            origin: OriginFor<T>,
            min_staking_time: BlockNumberFor<T>,
        ) -> DispatchResult {
            Self::ensure_governance(origin)?;
            MinStakingTime::<T>::put(min_staking_time);
            Self::deposit_event(Event::MinStakingTimeSet { min_staking_time });
            Ok(())
        }

        /// Set the number of blocks after which draws are no longer accepted.
        ///
        /// Must be called by `CourtGovernanceOrigin`.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_max_drawing_time())]
        #[transactional]
        pub fn set_max_drawing_time(
            origin: OriginFor<T>,
            max_drawing_time: BlockNumberFor<T>,
        ) -> DispatchResult {
            Self::ensure_governance(origin)?;
            MaxDrawingTime::<T>::put(max_drawing_time);
            Self::deposit_event(Event::MaxDrawingTimeSet { max_drawing_time });
            Ok(())
        }

        /// Open a dispute session in `court_id`.
        ///
        /// The panel size is `jurors_requested`, but at least the court's `min_jurors`. The session
        /// starts in the staking phase.
        ///
        /// # Parameters
        ///
        /// - `origin`: The creator of the session.
        /// - `court_id`: The court in which the dispute is heard.
        /// - `jurors_requested`: The requested panel size.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::create_session())]
        #[transactional]
        pub fn create_session(
            origin: OriginFor<T>,
            court_id: CourtId,
            jurors_requested: u32,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let _ = Self::do_create_session(who, court_id, jurors_requested)?;
            Ok(())
        }

        /// Move `session_id` to its next phase.
        ///
        /// Staking ends once both `MinStakingTime` and the court's evidence period have elapsed.
        /// Drawing ends as soon as the panel is full. A session with an incomplete panel may only
        /// leave the drawing phase after `MaxDrawingTime` has elapsed and if `allow_partial_panel`
        /// is set. Voting ends after the vote period (plus the commit period if votes are hidden)
        /// and the appeal phase ends after the appeal period.
        ///
        /// May be called by anyone.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::pass_phase())]
        #[transactional]
        pub fn pass_phase(
            origin: OriginFor<T>,
            session_id: SessionId,
            allow_partial_panel: bool,
        ) -> DispatchResult {
            let _ = ensure_signed(origin)?;
            Self::do_pass_phase(session_id, allow_partial_panel)
        }

        /// Draw up to `count` jurors for `session_id`.
        ///
        /// The number of jurors drawn is capped by the number of open seats on the panel. If the
        /// session's court has fewer eligible jurors than its jump threshold, the jurors are drawn
        /// from the closest ancestor which doesn't. If the draw reaches the root court, the root's
        /// eligible jurors who aren't on the panel yet must be able to fill every open seat, or the
        /// call fails with `InsufficientJurors`.
        ///
        /// May be called by anyone.
        ///
        /// # Complexity
        ///
        /// `O(d + n * r * K * log_K(s))`, where `d` is `MaxCourtDepth`, `n` is `count`, `r` is
        /// `MaxDrawRetries`, `K` is the arity of the drawing court and `s` the number of its
        /// jurors.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::draw_jurors(
            (*count).min(T::MaxJurorsPerSession::get()),
            T::MaxCourtDepth::get(),
        ))]
        #[transactional]
        pub fn draw_jurors(
            origin: OriginFor<T>,
            session_id: SessionId,
            count: u32,
        ) -> DispatchResult {
            let _ = ensure_signed(origin)?;
            Self::do_draw_jurors(session_id, count)
        }

        /// Remove `session_id` after it reached the execution phase.
        ///
        /// May be called by anyone.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::close_session())]
        #[transactional]
        pub fn close_session(origin: OriginFor<T>, session_id: SessionId) -> DispatchResult {
            let _ = ensure_signed(origin)?;
            Self::do_close_session(session_id)
        }
    }
}
