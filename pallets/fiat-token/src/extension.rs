//! Transaction-validation stage of the enforcement gate.
//!
//! [`CheckTransferGate`] belongs in the runtime's transaction extension
//! pipeline, ahead of fee payment. For every signed transaction it screens
//! the movements of the controlled denomination that
//! [`Config::TransferInspector`] finds in the call, then the signer as fee
//! payer when fees are paid in the controlled denomination. A denied
//! transaction is invalid and never enters the pool or reaches dispatch.

use codec::{Decode, DecodeWithMemTracking, Encode};
use core::{fmt, marker::PhantomData};
use frame_support::{
    dispatch::DispatchInfo, traits::Get, weights::Weight, CloneNoBound, EqNoBound, PartialEqNoBound,
};
use scale_info::TypeInfo;
use sp_runtime::{
    impl_tx_ext_default,
    traits::{
        AsSystemOriginSigner, DispatchInfoOf, DispatchOriginOf, Dispatchable, Implication,
        TransactionExtension, ValidateResult,
    },
    transaction_validity::{
        InvalidTransaction, TransactionSource, TransactionValidityError, ValidTransaction,
    },
};

use crate::{
    guard::{Denial, Movement, Operation},
    traits::InspectTransfer,
    Config, Pallet, LOG_TARGET,
};

/// `InvalidTransaction::Custom` code: the module is paused.
pub const PAUSED: u8 = 1;
/// `InvalidTransaction::Custom` code: a sending-side account is blacklisted.
pub const SENDER_BLACKLISTED: u8 = 2;
/// `InvalidTransaction::Custom` code: a receiving-side account is blacklisted.
pub const RECEIVER_BLACKLISTED: u8 = 3;

fn reject<AccountId>(denial: Denial<AccountId>) -> TransactionValidityError {
    let code = match denial {
        Denial::Paused => PAUSED,
        Denial::CannotSend(_) => SENDER_BLACKLISTED,
        Denial::CannotReceive(_) => RECEIVER_BLACKLISTED,
    };
    InvalidTransaction::Custom(code).into()
}

#[derive(Encode, Decode, DecodeWithMemTracking, CloneNoBound, EqNoBound, PartialEqNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct CheckTransferGate<T>(PhantomData<T>);

impl<T: Config + Send + Sync> CheckTransferGate<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Config + Send + Sync> Default for CheckTransferGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Config + Send + Sync> fmt::Debug for CheckTransferGate<T> {
    #[cfg(feature = "std")]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CheckTransferGate")
    }

    #[cfg(not(feature = "std"))]
    fn fmt(&self, _: &mut fmt::Formatter) -> fmt::Result {
        Ok(())
    }
}

impl<T: Config + Send + Sync> TransactionExtension<T::RuntimeCall> for CheckTransferGate<T>
where
    T::RuntimeCall: Dispatchable<Info = DispatchInfo>,
    <T::RuntimeCall as Dispatchable>::RuntimeOrigin: AsSystemOriginSigner<T::AccountId> + Clone,
{
    const IDENTIFIER: &'static str = "CheckTransferGate";
    type Implicit = ();
    type Val = ();
    type Pre = ();

    fn weight(&self, _: &T::RuntimeCall) -> Weight {
        // Pause flag plus blacklist lookups for a signer and one counterparty
        T::DbWeight::get().reads(3)
    }

    fn validate(
        &self,
        origin: DispatchOriginOf<T::RuntimeCall>,
        call: &T::RuntimeCall,
        _info: &DispatchInfoOf<T::RuntimeCall>,
        _len: usize,
        _self_implicit: Self::Implicit,
        _inherited_implication: &impl Implication,
        _source: TransactionSource,
    ) -> ValidateResult<Self::Val, T::RuntimeCall> {
        let Some(who) = origin.as_system_origin_signer() else {
            return Ok((ValidTransaction::default(), (), origin));
        };

        for intent in T::TransferInspector::inspect(who, call) {
            Pallet::<T>::check_intent(intent).map_err(reject)?;
        }

        let fee = Movement::new(Operation::FeePayment).sender(who.clone());
        Pallet::<T>::screen(&T::FeeDenom::get(), &fee).map_err(|denial| {
            log::debug!(target: LOG_TARGET, "fee payer {:?} rejected", who);
            reject(denial)
        })?;

        Ok((ValidTransaction::default(), (), origin))
    }

    impl_tx_ext_default!(T::RuntimeCall; prepare);
}
