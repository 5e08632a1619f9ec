use crate as pallet_fiat_token;
use crate::{
    cross_chain::{Acknowledgement, PacketHandler, TransferPacket},
    traits::{InspectTransfer, TransferIntent},
};
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    traits::{ConstU32, ConstU64, Get},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};
use std::cell::{Cell, RefCell};

type Block = frame_system::mocking::MockBlock<Test>;

pub type AccountId = u64;
pub type Balance = u64;

// Role holders seeded at genesis
pub const OWNER: AccountId = 1;
pub const MASTER_MINTER: AccountId = 2;
pub const PAUSER: AccountId = 3;
pub const BLACKLISTER: AccountId = 4;
pub const CONTROLLER: AccountId = 5;
pub const MINTER: AccountId = 6;

// Ordinary users
pub const ALICE: AccountId = 10;
pub const BOB: AccountId = 11;
pub const CHARLIE: AccountId = 12;

/// Controlled denomination
pub const USDC: u32 = 1;
/// Any other denomination known to the ledger
pub const ATOM: u32 = 2;

pub const MINTER_ALLOWANCE: u128 = 100;
pub const MINTER_BALANCE: Balance = 50;
pub const ALICE_BALANCE: Balance = 1_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        FiatToken: pallet_fiat_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<Balance>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

impl pallet_fiat_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Denom = u32;
    type ControlledDenom = ConstU32<USDC>;
    type FeeDenom = FeeDenom;
    type TransferInspector = BalancesTransfers;
    type WeightInfo = ();
}

pub type Packet = TransferPacket<u32, Balance>;

thread_local! {
    static FEE_DENOM: Cell<u32> = const { Cell::new(ATOM) };
}

/// Fees are paid in ATOM unless a test switches them over.
pub struct FeeDenom;

impl Get<u32> for FeeDenom {
    fn get() -> u32 {
        FEE_DENOM.with(|d| d.get())
    }
}

pub fn set_fee_denom(denom: u32) {
    FEE_DENOM.with(|d| d.set(denom));
}

/// Balances holds the controlled denomination in this runtime.
pub struct BalancesTransfers;

impl InspectTransfer<RuntimeCall, AccountId, u32, Balance> for BalancesTransfers {
    fn inspect(signer: &AccountId, call: &RuntimeCall) -> Vec<TransferIntent<AccountId, u32, Balance>> {
        match call {
            RuntimeCall::Balances(pallet_balances::Call::transfer_allow_death { dest, value }) |
            RuntimeCall::Balances(pallet_balances::Call::transfer_keep_alive { dest, value }) =>
                vec![TransferIntent::Send { from: *signer, to: *dest, denom: USDC, amount: *value }],
            _ => Vec::new(),
        }
    }
}

thread_local! {
    static RECEIVED: RefCell<Vec<Packet>> = const { RefCell::new(Vec::new()) };
    static SENT: RefCell<Vec<(AccountId, Packet)>> = const { RefCell::new(Vec::new()) };
}

/// Stand-in for the cross-chain transfer application: records every packet
/// that makes it through the middleware.
pub struct RecordingTransferApp;

impl PacketHandler<AccountId, u32, Balance> for RecordingTransferApp {
    fn on_recv_packet(packet: &Packet) -> Acknowledgement {
        RECEIVED.with(|r| r.borrow_mut().push(packet.clone()));
        Acknowledgement::Success(vec![1])
    }

    fn send_transfer(sender: &AccountId, packet: &Packet) -> DispatchResult {
        SENT.with(|s| s.borrow_mut().push((*sender, packet.clone())));
        Ok(())
    }
}

pub fn received_packets() -> Vec<Packet> {
    RECEIVED.with(|r| r.borrow().clone())
}

pub fn sent_packets() -> Vec<(AccountId, Packet)> {
    SENT.with(|s| s.borrow().clone())
}

// Build genesis storage according to the mock runtime.
//
// CONTROLLER -> MINTER with an allowance of 100; MINTER and ALICE hold funds.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(MINTER, MINTER_BALANCE), (ALICE, ALICE_BALANCE)],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_fiat_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        master_minter: Some(MASTER_MINTER),
        pauser: Some(PAUSER),
        blacklister: Some(BLACKLISTER),
        paused: false,
        blacklisted: vec![],
        minter_controllers: vec![(CONTROLLER, MINTER)],
        minters: vec![(MINTER, MINTER_ALLOWANCE)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    set_fee_denom(ATOM);
    RECEIVED.with(|r| r.borrow_mut().clear());
    SENT.with(|s| s.borrow_mut().clear());

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
