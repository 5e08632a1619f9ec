//! Benchmarking setup for pallet-fiat-token

use super::*;

#[allow(unused)]
use crate::Pallet as FiatToken;
use frame_benchmarking::v2::*;
use frame_support::traits::fungible::{Inspect, Mutate};
use frame_system::RawOrigin;

fn units<T: Config>(n: u32) -> BalanceOf<T> {
    T::Currency::minimum_balance().max(1u32.into()).saturating_mul(n.into())
}

/// Seed a controller/minter pair with an allowance of 1_000 units.
fn seed_minter<T: Config>() -> (T::AccountId, T::AccountId) {
    let controller: T::AccountId = account("controller", 0, 0);
    let minter: T::AccountId = whitelisted_caller();
    MinterControllers::<T>::insert(&controller, &minter);
    Minters::<T>::insert(&minter, MinterInfo { allowance: units::<T>(1_000), active: true });
    (controller, minter)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn update_owner() {
        let owner: T::AccountId = whitelisted_caller();
        let candidate: T::AccountId = account("candidate", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), candidate.clone());

        assert_eq!(PendingOwner::<T>::get(), Some(candidate));
    }

    #[benchmark]
    fn accept_owner() {
        let owner: T::AccountId = account("owner", 0, 0);
        let candidate: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);
        PendingOwner::<T>::put(&candidate);

        #[extrinsic_call]
        _(RawOrigin::Signed(candidate.clone()));

        assert_eq!(Owner::<T>::get(), Some(candidate));
        assert_eq!(PendingOwner::<T>::get(), None);
    }

    #[benchmark]
    fn update_master_minter() {
        let owner: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("master_minter", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new.clone());

        assert_eq!(MasterMinter::<T>::get(), Some(new));
    }

    #[benchmark]
    fn update_pauser() {
        let owner: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("pauser", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new.clone());

        assert_eq!(Pauser::<T>::get(), Some(new));
    }

    #[benchmark]
    fn update_blacklister() {
        let owner: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("blacklister", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new.clone());

        assert_eq!(Blacklister::<T>::get(), Some(new));
    }

    #[benchmark]
    fn blacklist() {
        let blacklister: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        Blacklister::<T>::put(&blacklister);

        #[extrinsic_call]
        _(RawOrigin::Signed(blacklister), target.clone());

        assert!(Blacklisted::<T>::contains_key(&target));
    }

    #[benchmark]
    fn unblacklist() {
        let blacklister: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        Blacklister::<T>::put(&blacklister);
        Blacklisted::<T>::insert(&target, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(blacklister), target.clone());

        assert!(!Blacklisted::<T>::contains_key(&target));
    }

    #[benchmark]
    fn pause() {
        let pauser: T::AccountId = whitelisted_caller();
        Pauser::<T>::put(&pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let pauser: T::AccountId = whitelisted_caller();
        Pauser::<T>::put(&pauser);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn configure_minter_controller() {
        let master_minter: T::AccountId = whitelisted_caller();
        let controller: T::AccountId = account("controller", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        MasterMinter::<T>::put(&master_minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(master_minter), controller.clone(), minter.clone());

        assert_eq!(MinterControllers::<T>::get(&controller), Some(minter));
    }

    #[benchmark]
    fn remove_minter_controller() {
        let master_minter: T::AccountId = whitelisted_caller();
        let controller: T::AccountId = account("controller", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        MasterMinter::<T>::put(&master_minter);
        MinterControllers::<T>::insert(&controller, &minter);

        #[extrinsic_call]
        _(RawOrigin::Signed(master_minter), controller.clone());

        assert!(!MinterControllers::<T>::contains_key(&controller));
    }

    #[benchmark]
    fn configure_minter() {
        let (controller, minter) = seed_minter::<T>();
        Paused::<T>::put(false);
        let allowance = units::<T>(5_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(controller), minter.clone(), allowance);

        assert_eq!(Minters::<T>::get(&minter).map(|info| info.allowance), Some(allowance));
    }

    #[benchmark]
    fn remove_minter() {
        let (controller, minter) = seed_minter::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(controller), minter.clone());

        assert!(!Minters::<T>::contains_key(&minter));
    }

    #[benchmark]
    fn mint() {
        let (_, minter) = seed_minter::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Paused::<T>::put(false);
        let amount = units::<T>(10);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter.clone()), recipient.clone(), amount);

        assert_eq!(T::Currency::balance(&recipient), amount);
        assert_eq!(Minters::<T>::get(&minter).map(|info| info.allowance), Some(units::<T>(990)));
    }

    #[benchmark]
    fn burn() {
        let (_, minter) = seed_minter::<T>();
        Paused::<T>::put(false);
        T::Currency::mint_into(&minter, units::<T>(20)).expect("minter funded");
        let amount = units::<T>(10);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter.clone()), amount);

        assert_eq!(T::Currency::balance(&minter), units::<T>(10));
    }

    impl_benchmark_test_suite!(FiatToken, crate::mock::new_test_ext(), crate::mock::Test);
}
