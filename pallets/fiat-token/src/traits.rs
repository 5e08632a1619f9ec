//! Interfaces consumed by the ledger collaborators that move value.

use frame_support::dispatch::DispatchResult;
use sp_runtime::RuntimeDebug;
use sp_std::vec::Vec;

use crate::guard::{Movement, Operation};

/// Pre-transfer checks for every path that moves the controlled denomination.
///
/// Implemented by the pallet. Bank transfer hooks, delegated execution,
/// the fee-deduction stage and cross-chain handlers call the matching check
/// before committing any balance change. Movements of other denominations
/// always pass.
pub trait TransferGuard<AccountId, Denom, Balance> {
    fn pre_send_check(from: &AccountId, to: &AccountId, denom: &Denom, amount: Balance) -> DispatchResult;

    /// `grantee` executes a transfer out of `granter`'s account.
    fn pre_delegated_send_check(
        grantee: &AccountId,
        granter: &AccountId,
        to: &AccountId,
        denom: &Denom,
        amount: Balance,
    ) -> DispatchResult;

    fn pre_grant_check(granter: &AccountId, grantee: &AccountId, denom: &Denom) -> DispatchResult;

    fn pre_fee_check(payer: &AccountId, denom: &Denom, amount: Balance) -> DispatchResult;

    fn pre_receive_check(
        sender: &AccountId,
        receiver: &AccountId,
        denom: &Denom,
        amount: Balance,
    ) -> DispatchResult;

    fn pre_outbound_check(
        sender: &AccountId,
        receiver: &AccountId,
        denom: &Denom,
        amount: Balance,
    ) -> DispatchResult;
}

/// A movement of value a runtime call would perform once dispatched.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum TransferIntent<AccountId, Denom, Balance> {
    Send { from: AccountId, to: AccountId, denom: Denom, amount: Balance },
    /// `grantee` moves funds out of `granter`'s account.
    DelegatedSend { grantee: AccountId, granter: AccountId, to: AccountId, denom: Denom, amount: Balance },
    Grant { granter: AccountId, grantee: AccountId, denom: Denom },
}

impl<AccountId, Denom, Balance> TransferIntent<AccountId, Denom, Balance> {
    /// Split into the denomination touched and the accounts the gate checks.
    pub fn into_movement(self) -> (Denom, Movement<AccountId>) {
        match self {
            Self::Send { from, to, denom, .. } =>
                (denom, Movement::new(Operation::Send).sender(from).receiver(to)),
            Self::DelegatedSend { grantee, granter, to, denom, .. } => (
                denom,
                Movement::new(Operation::DelegatedSend).sender(grantee).sender(granter).receiver(to),
            ),
            Self::Grant { granter, grantee, denom } =>
                (denom, Movement::new(Operation::DelegationGrant).sender(granter).receiver(grantee)),
        }
    }
}

/// Runtime-provided classifier that finds value movements inside calls.
///
/// Wrapping calls (batches, proxies, authorization execution) should be
/// unpacked and every inner movement reported.
pub trait InspectTransfer<Call, AccountId, Denom, Balance> {
    fn inspect(signer: &AccountId, call: &Call) -> Vec<TransferIntent<AccountId, Denom, Balance>>;
}

impl<Call, AccountId, Denom, Balance> InspectTransfer<Call, AccountId, Denom, Balance> for () {
    fn inspect(_: &AccountId, _: &Call) -> Vec<TransferIntent<AccountId, Denom, Balance>> {
        Vec::new()
    }
}
