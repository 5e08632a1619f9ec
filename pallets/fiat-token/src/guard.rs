//! Transfer enforcement gate.
//!
//! A gate is an ordered list of plain guard functions. Each guard looks at a
//! [`Movement`] (which accounts send, which receive, and what kind of
//! operation is being performed) together with a read-only view of the
//! module state, and either lets it through or returns a [`Denial`].
//! The first denial short-circuits the remaining guards.
//!
//! The standard guard list, [`standard_guards`], runs [`paused_guard`]
//! followed by [`blacklist_guard`].
//! Guards never write state, so they can be exercised against any
//! [`GateState`] implementation, including the storage-backed one the
//! pallet uses and simple in-memory fakes.

use sp_runtime::RuntimeDebug;
use sp_std::vec::Vec;

/// The kind of value movement being checked.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Operation {
    /// Direct bank transfer.
    Send,
    /// Transfer executed by a grantee on behalf of a granter.
    DelegatedSend,
    /// Creation of a send authorization for the controlled denomination.
    DelegationGrant,
    /// Fee deduction during transaction pre-processing.
    FeePayment,
    /// Inbound cross-chain transfer.
    CrossChainReceive,
    /// Outbound cross-chain transfer.
    CrossChainSend,
}

/// Accounts touched by a single value movement.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct Movement<AccountId> {
    pub operation: Operation,
    /// Accounts whose funds leave, or which act on behalf of those that do.
    pub senders: Vec<AccountId>,
    pub receivers: Vec<AccountId>,
}

impl<AccountId> Movement<AccountId> {
    pub fn new(operation: Operation) -> Self {
        Self { operation, senders: Vec::new(), receivers: Vec::new() }
    }

    pub fn sender(mut self, who: AccountId) -> Self {
        self.senders.push(who);
        self
    }

    pub fn receiver(mut self, who: AccountId) -> Self {
        self.receivers.push(who);
        self
    }
}

/// Why a guard refused a movement.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum Denial<AccountId> {
    Paused,
    CannotSend(AccountId),
    CannotReceive(AccountId),
}

impl<AccountId> Denial<AccountId> {
    /// Human readable reason, used in cross-chain error acknowledgements.
    pub fn reason(&self) -> &'static str {
        match self {
            Denial::Paused => "the module is paused",
            Denial::CannotSend(_) => "an address is blacklisted and can not send tokens",
            Denial::CannotReceive(_) => "an address is blacklisted and can not receive tokens",
        }
    }
}

/// Read-only view of the state guards depend on.
pub trait GateState<AccountId> {
    fn is_paused(&self) -> bool;
    fn is_blacklisted(&self, who: &AccountId) -> bool;
}

pub type Guard<AccountId, S> = fn(&Movement<AccountId>, &S) -> Result<(), Denial<AccountId>>;

/// Denies every movement while the module is paused.
pub fn paused_guard<AccountId, S: GateState<AccountId>>(
    _movement: &Movement<AccountId>,
    state: &S,
) -> Result<(), Denial<AccountId>> {
    if state.is_paused() {
        return Err(Denial::Paused);
    }
    Ok(())
}

/// Denies a movement touching a blacklisted account. Senders are checked
/// before receivers.
pub fn blacklist_guard<AccountId: Clone, S: GateState<AccountId>>(
    movement: &Movement<AccountId>,
    state: &S,
) -> Result<(), Denial<AccountId>> {
    if let Some(who) = movement.senders.iter().find(|who| state.is_blacklisted(who)) {
        return Err(Denial::CannotSend(who.clone()));
    }
    if let Some(who) = movement.receivers.iter().find(|who| state.is_blacklisted(who)) {
        return Err(Denial::CannotReceive(who.clone()));
    }
    Ok(())
}

/// Pause check first, then blacklist.
pub fn standard_guards<AccountId: Clone, S: GateState<AccountId>>() -> [Guard<AccountId, S>; 2] {
    [paused_guard::<AccountId, S>, blacklist_guard::<AccountId, S>]
}

/// Runs a borrowed list of guards in order.
pub struct EnforcementGate<'a, AccountId, S> {
    guards: &'a [Guard<AccountId, S>],
}

impl<'a, AccountId, S> EnforcementGate<'a, AccountId, S> {
    pub fn new(guards: &'a [Guard<AccountId, S>]) -> Self {
        Self { guards }
    }

    pub fn check(&self, movement: &Movement<AccountId>, state: &S) -> Result<(), Denial<AccountId>> {
        self.guards.iter().try_for_each(|guard| guard(movement, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeState {
        paused: bool,
        blacklisted: Vec<u64>,
    }

    impl GateState<u64> for FakeState {
        fn is_paused(&self) -> bool {
            self.paused
        }

        fn is_blacklisted(&self, who: &u64) -> bool {
            self.blacklisted.contains(who)
        }
    }

    fn send(from: u64, to: u64) -> Movement<u64> {
        Movement::new(Operation::Send).sender(from).receiver(to)
    }

    fn standard_check(movement: &Movement<u64>, state: &FakeState) -> Result<(), Denial<u64>> {
        EnforcementGate::new(&standard_guards()).check(movement, state)
    }

    #[test]
    fn open_gate_allows_movement() {
        assert_eq!(standard_check(&send(1, 2), &FakeState::default()), Ok(()));
    }

    #[test]
    fn pause_short_circuits_blacklist() {
        let state = FakeState { paused: true, blacklisted: vec![1] };
        assert_eq!(standard_check(&send(1, 2), &state), Err(Denial::Paused));
    }

    #[test]
    fn blacklisted_sender_is_denied() {
        let state = FakeState { paused: false, blacklisted: vec![1] };
        assert_eq!(standard_check(&send(1, 2), &state), Err(Denial::CannotSend(1)));
    }

    #[test]
    fn blacklisted_receiver_is_denied() {
        let state = FakeState { paused: false, blacklisted: vec![2] };
        assert_eq!(standard_check(&send(1, 2), &state), Err(Denial::CannotReceive(2)));
    }

    #[test]
    fn senders_are_checked_before_receivers() {
        let state = FakeState { paused: false, blacklisted: vec![1, 2] };
        assert_eq!(standard_check(&send(1, 2), &state), Err(Denial::CannotSend(1)));
    }

    #[test]
    fn delegated_send_checks_granter_and_grantee() {
        // grantee 7 acts for granter 1
        let movement = Movement::new(Operation::DelegatedSend).sender(7).sender(1).receiver(2);

        let granter_blocked = FakeState { paused: false, blacklisted: vec![1] };
        assert_eq!(standard_check(&movement, &granter_blocked), Err(Denial::CannotSend(1)));

        let grantee_blocked = FakeState { paused: false, blacklisted: vec![7] };
        assert_eq!(standard_check(&movement, &grantee_blocked), Err(Denial::CannotSend(7)));
    }

    #[test]
    fn empty_gate_allows_everything() {
        let gate = EnforcementGate::<u64, FakeState>::new(&[]);
        let state = FakeState { paused: true, blacklisted: vec![1, 2] };
        assert_eq!(gate.check(&send(1, 2), &state), Ok(()));
    }

    #[test]
    fn extra_guards_run_after_standard_ones() {
        fn no_self_transfer(movement: &Movement<u64>, _: &FakeState) -> Result<(), Denial<u64>> {
            match (movement.senders.first(), movement.receivers.first()) {
                (Some(from), Some(to)) if from == to => Err(Denial::CannotReceive(*to)),
                _ => Ok(()),
            }
        }

        let guards: [Guard<u64, FakeState>; 3] = [paused_guard, blacklist_guard, no_self_transfer];
        let gate = EnforcementGate::new(&guards);
        assert_eq!(gate.check(&send(3, 3), &FakeState::default()), Err(Denial::CannotReceive(3)));
        assert_eq!(standard_check(&send(3, 3), &FakeState::default()), Ok(()));

        let paused = FakeState { paused: true, blacklisted: vec![] };
        assert_eq!(gate.check(&send(3, 3), &paused), Err(Denial::Paused));
    }

    #[test]
    fn denial_reasons_name_direction() {
        assert_eq!(Denial::<u64>::Paused.reason(), "the module is paused");
        assert!(Denial::CannotSend(1u64).reason().contains("can not send tokens"));
        assert!(Denial::CannotReceive(1u64).reason().contains("can not receive tokens"));
    }
}
