#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but still generated for read access
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{self, Mutate},
        tokens::{Fortitude, Precision, Preservation},
    },
    Parameter,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::Saturating,
    DispatchError, RuntimeDebug,
};
use sp_std::prelude::*;

use guard::{standard_guards, Denial, EnforcementGate, GateState, Movement, Operation};
use traits::{InspectTransfer, TransferGuard, TransferIntent};

pub use extension::CheckTransferGate;
pub use pallet::*;
pub use weights::WeightInfo;

pub mod cross_chain;
pub mod extension;
pub mod guard;
pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-fiat-token";

pub type BalanceOf<T> =
    <<T as Config>::Currency as fungible::Inspect<<T as frame_system::Config>::AccountId>>::Balance;

/// Minting state of a single minter.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct MinterInfo<Balance> {
    /// Remaining amount the minter may mint.
    pub allowance: Balance,
    /// Removal deletes the record, so every stored minter is active.
    pub active: bool,
}

/// A controller and the minter it configures.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct MinterController<AccountId> {
    pub controller: AccountId,
    pub minter: AccountId,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Bank collaborator holding balances of the controlled denomination.
        type Currency: fungible::Mutate<Self::AccountId>;

        /// Denomination identifier used by the surrounding ledger.
        type Denom: Parameter + MaxEncodedLen;

        /// The denomination this pallet mints, burns and guards.
        #[pallet::constant]
        type ControlledDenom: Get<Self::Denom>;

        /// The denomination transaction fees are paid in.
        #[pallet::constant]
        type FeeDenom: Get<Self::Denom>;

        /// Finds value movements inside runtime calls for [`CheckTransferGate`].
        type TransferInspector: InspectTransfer<
            <Self as frame_system::Config>::RuntimeCall,
            Self::AccountId,
            Self::Denom,
            BalanceOf<Self>,
        >;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Top administrative role
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Candidate proposed by the owner, waiting to accept ownership
    #[pallet::storage]
    #[pallet::getter(fn pending_owner)]
    pub type PendingOwner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account that assigns minter controllers
    #[pallet::storage]
    #[pallet::getter(fn master_minter)]
    pub type MasterMinter<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account that toggles the pause flag
    #[pallet::storage]
    #[pallet::getter(fn pauser)]
    pub type Pauser<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account that maintains the blacklist
    #[pallet::storage]
    #[pallet::getter(fn blacklister)]
    pub type Blacklister<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Module-wide kill switch for value movement
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Blocked accounts (cannot send or receive the controlled denomination)
    #[pallet::storage]
    pub type Blacklisted<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Controller -> minter it configures. The only persisted direction of the
    /// association; see [`Pallet::controllers_of`] for the reverse lookup.
    #[pallet::storage]
    pub type MinterControllers<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::AccountId, OptionQuery>;

    /// Minter -> allowance and status
    #[pallet::storage]
    pub type Minters<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, MinterInfo<BalanceOf<T>>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Owner proposed a new owner
        OwnerUpdated { owner: T::AccountId, pending_owner: T::AccountId },
        /// Pending owner accepted ownership
        OwnershipAccepted { previous_owner: Option<T::AccountId>, new_owner: T::AccountId },
        MasterMinterUpdated { old: Option<T::AccountId>, new: T::AccountId },
        PauserUpdated { old: Option<T::AccountId>, new: T::AccountId },
        BlacklisterUpdated { old: Option<T::AccountId>, new: T::AccountId },
        /// Account added to the blacklist
        Blacklisted { account: T::AccountId },
        /// Account removed from the blacklist
        Unblacklisted { account: T::AccountId },
        /// Module is paused (emitted even if it already was)
        Paused,
        /// Module is unpaused (emitted even if it already was)
        Unpaused,
        MinterControllerConfigured { controller: T::AccountId, minter: T::AccountId },
        MinterControllerRemoved { controller: T::AccountId, minter: T::AccountId },
        /// Minter (re)configured with a fresh allowance
        MinterConfigured { controller: T::AccountId, minter: T::AccountId, allowance: BalanceOf<T> },
        MinterRemoved { controller: T::AccountId, minter: T::AccountId },
        /// New tokens minted
        Minted { minter: T::AccountId, to: T::AccountId, amount: BalanceOf<T> },
        /// Tokens burned from the minter's own balance
        Burned { minter: T::AccountId, amount: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// You are not the owner
        NotOwner,
        /// You are not the pending owner
        NotPendingOwner,
        /// You are not the master minter
        NotMasterMinter,
        /// You are not the pauser
        NotPauser,
        /// You are not the blacklister
        NotBlacklister,
        /// Caller is not a minter controller
        NotMinterController,
        /// Minter address ≠ minter controller's minter address
        ControllerMinterMismatch,
        /// You are not a minter
        NotMinter,
        /// Requested role holder is not set
        RoleNotSet,
        /// A minter with the given address doesn't exist
        MinterNotFound,
        /// Minter controller with the given address doesn't exist
        MinterControllerNotFound,
        /// User is already blacklisted
        AlreadyBlacklisted,
        /// The specified address is not blacklisted
        NotBlacklisted,
        /// Minting and burning are paused
        MintingPaused,
        /// The module is paused
        Paused,
        /// Minter address is blacklisted
        MinterBlacklisted,
        /// An address is blacklisted and can not send tokens
        SenderBlacklisted,
        /// An address is blacklisted and can not receive tokens
        ReceiverBlacklisted,
        /// Minting amount is greater than the allowance
        InsufficientAllowance,
        /// Address could not be decoded
        InvalidAddress,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Propose `candidate` as the next owner. Overwrites any pending proposal.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::update_owner())]
        pub fn update_owner(origin: OriginFor<T>, candidate: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Owner::<T>::get(), &caller, Error::<T>::NotOwner)?;

            PendingOwner::<T>::put(&candidate);
            log::info!(target: LOG_TARGET, "ownership of {:?} offered to {:?}", caller, candidate);
            Self::deposit_event(Event::OwnerUpdated { owner: caller, pending_owner: candidate });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::accept_owner())]
        pub fn accept_owner(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(PendingOwner::<T>::get(), &caller, Error::<T>::NotPendingOwner)?;

            let previous_owner = Owner::<T>::get();
            Owner::<T>::put(&caller);
            PendingOwner::<T>::kill();
            log::info!(target: LOG_TARGET, "ownership accepted by {:?}", caller);
            Self::deposit_event(Event::OwnershipAccepted { previous_owner, new_owner: caller });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::update_master_minter())]
        pub fn update_master_minter(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Owner::<T>::get(), &caller, Error::<T>::NotOwner)?;

            let old = MasterMinter::<T>::get();
            MasterMinter::<T>::put(&new);
            Self::deposit_event(Event::MasterMinterUpdated { old, new });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::update_pauser())]
        pub fn update_pauser(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Owner::<T>::get(), &caller, Error::<T>::NotOwner)?;

            let old = Pauser::<T>::get();
            Pauser::<T>::put(&new);
            Self::deposit_event(Event::PauserUpdated { old, new });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::update_blacklister())]
        pub fn update_blacklister(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Owner::<T>::get(), &caller, Error::<T>::NotOwner)?;

            let old = Blacklister::<T>::get();
            Blacklister::<T>::put(&new);
            Self::deposit_event(Event::BlacklisterUpdated { old, new });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Blacklister::<T>::get(), &caller, Error::<T>::NotBlacklister)?;
            ensure!(!Self::is_blacklisted(&account), Error::<T>::AlreadyBlacklisted);

            Blacklisted::<T>::insert(&account, ());
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unblacklist())]
        pub fn unblacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Blacklister::<T>::get(), &caller, Error::<T>::NotBlacklister)?;
            ensure!(Self::is_blacklisted(&account), Error::<T>::NotBlacklisted);

            Blacklisted::<T>::remove(&account);
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Pauser::<T>::get(), &caller, Error::<T>::NotPauser)?;

            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "module paused by {:?}", caller);
            Self::deposit_event(Event::Paused);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Pauser::<T>::get(), &caller, Error::<T>::NotPauser)?;

            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "module unpaused by {:?}", caller);
            Self::deposit_event(Event::Unpaused);
            Ok(())
        }

        /// Point `controller` at `minter`, replacing any previous association.
        /// The minter record itself is left alone.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::configure_minter_controller())]
        pub fn configure_minter_controller(
            origin: OriginFor<T>,
            controller: T::AccountId,
            minter: T::AccountId,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(MasterMinter::<T>::get(), &caller, Error::<T>::NotMasterMinter)?;

            MinterControllers::<T>::insert(&controller, &minter);
            Self::deposit_event(Event::MinterControllerConfigured { controller, minter });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::remove_minter_controller())]
        pub fn remove_minter_controller(origin: OriginFor<T>, controller: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(MasterMinter::<T>::get(), &caller, Error::<T>::NotMasterMinter)?;
            let minter = MinterControllers::<T>::get(&controller)
                .ok_or(Error::<T>::MinterControllerNotFound)?;

            MinterControllers::<T>::remove(&controller);
            Self::deposit_event(Event::MinterControllerRemoved { controller, minter });
            Ok(())
        }

        /// Set the allowance of the minter controlled by the caller and mark it active.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::configure_minter())]
        pub fn configure_minter(
            origin: OriginFor<T>,
            minter: T::AccountId,
            allowance: BalanceOf<T>,
        ) -> DispatchResult {
            let controller = ensure_signed(origin)?;
            Self::ensure_controls(&controller, &minter)?;
            ensure!(!Self::is_paused(), Error::<T>::MintingPaused);

            Minters::<T>::insert(&minter, MinterInfo { allowance, active: true });
            Self::deposit_event(Event::MinterConfigured { controller, minter, allowance });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, minter: T::AccountId) -> DispatchResult {
            let controller = ensure_signed(origin)?;
            Self::ensure_controls(&controller, &minter)?;
            ensure!(Minters::<T>::contains_key(&minter), Error::<T>::MinterNotFound);

            Minters::<T>::remove(&minter);
            Self::deposit_event(Event::MinterRemoved { controller, minter });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            ensure!(!Self::is_paused(), Error::<T>::MintingPaused);
            let mut info = Self::resolve_minter(&minter)?;
            ensure!(!Self::is_blacklisted(&minter), Error::<T>::MinterBlacklisted);
            ensure!(!Self::is_blacklisted(&to), Error::<T>::ReceiverBlacklisted);
            ensure!(amount <= info.allowance, Error::<T>::InsufficientAllowance);

            info.allowance = info.allowance.saturating_sub(amount);
            Minters::<T>::insert(&minter, info);
            T::Currency::mint_into(&to, amount)?;
            Self::deposit_event(Event::Minted { minter, to, amount });
            Ok(())
        }

        /// Burn from the caller's own balance. Allowance is not restored.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: BalanceOf<T>) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            ensure!(!Self::is_paused(), Error::<T>::MintingPaused);
            Self::resolve_minter(&minter)?;
            ensure!(!Self::is_blacklisted(&minter), Error::<T>::MinterBlacklisted);

            T::Currency::burn_from(
                &minter,
                amount,
                Preservation::Expendable,
                Precision::Exact,
                Fortitude::Polite,
            )?;
            Self::deposit_event(Event::Burned { minter, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub owner: Option<T::AccountId>,
        pub master_minter: Option<T::AccountId>,
        pub pauser: Option<T::AccountId>,
        pub blacklister: Option<T::AccountId>,
        /// Start paused
        pub paused: bool,
        /// Accounts blacklisted at genesis
        pub blacklisted: Vec<T::AccountId>,
        /// (controller, minter) associations
        pub minter_controllers: Vec<(T::AccountId, T::AccountId)>,
        /// (minter, allowance); every listed minter starts active
        pub minters: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            if let Some(ref master_minter) = self.master_minter {
                MasterMinter::<T>::put(master_minter);
            }
            if let Some(ref pauser) = self.pauser {
                Pauser::<T>::put(pauser);
            }
            if let Some(ref blacklister) = self.blacklister {
                Blacklister::<T>::put(blacklister);
            }

            Paused::<T>::put(self.paused);

            for account in &self.blacklisted {
                Blacklisted::<T>::insert(account, ());
            }
            for (controller, minter) in &self.minter_controllers {
                MinterControllers::<T>::insert(controller, minter);
            }
            for (minter, allowance) in &self.minters {
                let allowance = BalanceOf::<T>::try_from(*allowance)
                    .unwrap_or_else(|_| panic!("minter allowance exceeds the balance type"));
                let info: MinterInfo<BalanceOf<T>> = MinterInfo { allowance, active: true };
                Minters::<T>::insert(minter, info);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn is_blacklisted(who: &T::AccountId) -> bool {
        Blacklisted::<T>::contains_key(who)
    }

    /// The active minter record of `who`.
    pub fn resolve_minter(who: &T::AccountId) -> Result<MinterInfo<BalanceOf<T>>, Error<T>> {
        Minters::<T>::get(who).filter(|info| info.active).ok_or(Error::<T>::NotMinter)
    }

    /// All controllers currently pointing at `minter`, sorted.
    pub fn controllers_of(minter: &T::AccountId) -> Vec<T::AccountId> {
        let mut controllers: Vec<_> = MinterControllers::<T>::iter()
            .filter(|(_, target)| target == minter)
            .map(|(controller, _)| controller)
            .collect();
        controllers.sort();
        controllers
    }

    pub fn show_owner() -> Result<(T::AccountId, Option<T::AccountId>), DispatchError> {
        let owner = Owner::<T>::get().ok_or(Error::<T>::RoleNotSet)?;
        Ok((owner, PendingOwner::<T>::get()))
    }

    pub fn show_master_minter() -> Result<T::AccountId, DispatchError> {
        MasterMinter::<T>::get().ok_or(Error::<T>::RoleNotSet.into())
    }

    pub fn show_pauser() -> Result<T::AccountId, DispatchError> {
        Pauser::<T>::get().ok_or(Error::<T>::RoleNotSet.into())
    }

    pub fn show_blacklister() -> Result<T::AccountId, DispatchError> {
        Blacklister::<T>::get().ok_or(Error::<T>::RoleNotSet.into())
    }

    pub fn show_paused() -> bool {
        Paused::<T>::get()
    }

    pub fn show_blacklisted(who: &T::AccountId) -> Result<T::AccountId, DispatchError> {
        ensure!(Self::is_blacklisted(who), Error::<T>::NotBlacklisted);
        Ok(who.clone())
    }

    pub fn show_minter_controller(
        controller: &T::AccountId,
    ) -> Result<MinterController<T::AccountId>, DispatchError> {
        let minter =
            MinterControllers::<T>::get(controller).ok_or(Error::<T>::MinterControllerNotFound)?;
        Ok(MinterController { controller: controller.clone(), minter })
    }

    pub fn show_minters(minter: &T::AccountId) -> Result<MinterInfo<BalanceOf<T>>, DispatchError> {
        Minters::<T>::get(minter).ok_or(Error::<T>::MinterNotFound.into())
    }

    pub fn list_minter_controllers() -> Vec<MinterController<T::AccountId>> {
        let mut entries: Vec<_> = MinterControllers::<T>::iter()
            .map(|(controller, minter)| MinterController { controller, minter })
            .collect();
        entries.sort_by(|a, b| a.controller.cmp(&b.controller));
        entries
    }

    pub fn list_blacklisted() -> Vec<T::AccountId> {
        let mut accounts: Vec<_> = Blacklisted::<T>::iter_keys().collect();
        accounts.sort();
        accounts
    }

    fn ensure_role(holder: Option<T::AccountId>, who: &T::AccountId, err: Error<T>) -> DispatchResult {
        ensure!(holder.as_ref() == Some(who), err);
        Ok(())
    }

    fn ensure_controls(controller: &T::AccountId, minter: &T::AccountId) -> DispatchResult {
        let controlled =
            MinterControllers::<T>::get(controller).ok_or(Error::<T>::NotMinterController)?;
        ensure!(&controlled == minter, Error::<T>::ControllerMinterMismatch);
        Ok(())
    }

    /// Run the standard gate over `movement` if it touches the controlled denomination.
    pub(crate) fn enforce(denom: &T::Denom, movement: Movement<T::AccountId>) -> DispatchResult {
        Self::screen(denom, &movement).map_err(|denial| Error::<T>::from(denial).into())
    }

    /// Like [`Self::evaluate`], but lets other denominations through.
    pub(crate) fn screen(
        denom: &T::Denom,
        movement: &Movement<T::AccountId>,
    ) -> Result<(), Denial<T::AccountId>> {
        if *denom != T::ControlledDenom::get() {
            return Ok(());
        }
        Self::evaluate(movement)
    }

    pub(crate) fn evaluate(movement: &Movement<T::AccountId>) -> Result<(), Denial<T::AccountId>> {
        let guards = standard_guards::<T::AccountId, StorageGateState<T>>();
        EnforcementGate::new(&guards).check(movement, &StorageGateState::<T>(PhantomData)).map_err(
            |denial| {
                log::debug!(
                    target: LOG_TARGET,
                    "{:?} denied: {}",
                    movement.operation,
                    denial.reason()
                );
                denial
            },
        )
    }
}

/// Gate state read straight from pallet storage.
pub struct StorageGateState<T>(PhantomData<T>);

impl<T: Config> GateState<T::AccountId> for StorageGateState<T> {
    fn is_paused(&self) -> bool {
        Paused::<T>::get()
    }

    fn is_blacklisted(&self, who: &T::AccountId) -> bool {
        Pallet::<T>::is_blacklisted(who)
    }
}

impl<T: Config> From<Denial<T::AccountId>> for Error<T> {
    fn from(denial: Denial<T::AccountId>) -> Self {
        match denial {
            Denial::Paused => Error::<T>::Paused,
            Denial::CannotSend(_) => Error::<T>::SenderBlacklisted,
            Denial::CannotReceive(_) => Error::<T>::ReceiverBlacklisted,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Screen a single classified movement.
    pub fn check_intent(
        intent: TransferIntent<T::AccountId, T::Denom, BalanceOf<T>>,
    ) -> Result<(), Denial<T::AccountId>> {
        let (denom, movement) = intent.into_movement();
        Self::screen(&denom, &movement)
    }

    fn enforce_intent(intent: TransferIntent<T::AccountId, T::Denom, BalanceOf<T>>) -> DispatchResult {
        Self::check_intent(intent).map_err(|denial| Error::<T>::from(denial).into())
    }
}

impl<T: Config> TransferGuard<T::AccountId, T::Denom, BalanceOf<T>> for Pallet<T> {
    fn pre_send_check(
        from: &T::AccountId,
        to: &T::AccountId,
        denom: &T::Denom,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        Self::enforce_intent(TransferIntent::Send {
            from: from.clone(),
            to: to.clone(),
            denom: denom.clone(),
            amount,
        })
    }

    fn pre_delegated_send_check(
        grantee: &T::AccountId,
        granter: &T::AccountId,
        to: &T::AccountId,
        denom: &T::Denom,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        Self::enforce_intent(TransferIntent::DelegatedSend {
            grantee: grantee.clone(),
            granter: granter.clone(),
            to: to.clone(),
            denom: denom.clone(),
            amount,
        })
    }

    fn pre_grant_check(granter: &T::AccountId, grantee: &T::AccountId, denom: &T::Denom) -> DispatchResult {
        Self::enforce_intent(TransferIntent::Grant {
            granter: granter.clone(),
            grantee: grantee.clone(),
            denom: denom.clone(),
        })
    }

    fn pre_fee_check(payer: &T::AccountId, denom: &T::Denom, _amount: BalanceOf<T>) -> DispatchResult {
        Self::enforce(denom, Movement::new(Operation::FeePayment).sender(payer.clone()))
    }

    fn pre_receive_check(
        sender: &T::AccountId,
        receiver: &T::AccountId,
        denom: &T::Denom,
        _amount: BalanceOf<T>,
    ) -> DispatchResult {
        let movement = Movement::new(Operation::CrossChainReceive)
            .sender(sender.clone())
            .receiver(receiver.clone());
        Self::enforce(denom, movement)
    }

    fn pre_outbound_check(
        sender: &T::AccountId,
        receiver: &T::AccountId,
        denom: &T::Denom,
        _amount: BalanceOf<T>,
    ) -> DispatchResult {
        let movement = Movement::new(Operation::CrossChainSend)
            .sender(sender.clone())
            .receiver(receiver.clone());
        Self::enforce(denom, movement)
    }
}
