//! Cross-chain transfer middleware.
//!
//! [`GuardedPacketHandler`] sits in front of the cross-chain transfer
//! application. Packets carrying the controlled denomination are checked
//! against the enforcement gate before they reach the wrapped handler.
//! A rejected inbound packet is answered with an error acknowledgement
//! rather than a local failure, so the sending chain keeps its escrow and
//! can refund.
//!
//! The local party of a packet (receiver inbound, sender outbound) must
//! decode as a local account. The remote party is screened only when its
//! address decodes locally.

use codec::{Decode, DecodeAll, Encode};
use frame_support::{dispatch::DispatchResult, traits::Get};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::{marker::PhantomData, vec::Vec};

use crate::{
    guard::{Movement, Operation},
    BalanceOf, Config, Error, Pallet, LOG_TARGET,
};

/// Prefix of every error acknowledgement produced by the middleware.
pub const ERROR_ACK_PREFIX: &str = "error handling packet";

/// Fungible token transfer payload. Addresses are raw encoded account ids.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct TransferPacket<Denom, Balance> {
    pub denom: Denom,
    pub amount: Balance,
    pub sender: Vec<u8>,
    pub receiver: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub enum Acknowledgement {
    Success(Vec<u8>),
    Error(Vec<u8>),
}

impl Acknowledgement {
    pub fn error(reason: &str) -> Self {
        Self::Error([ERROR_ACK_PREFIX.as_bytes(), ": ".as_bytes(), reason.as_bytes()].concat())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The cross-chain transfer application being wrapped.
pub trait PacketHandler<AccountId, Denom, Balance> {
    fn on_recv_packet(packet: &TransferPacket<Denom, Balance>) -> Acknowledgement;

    /// Escrow or burn locally and emit the outbound packet.
    fn send_transfer(sender: &AccountId, packet: &TransferPacket<Denom, Balance>) -> DispatchResult;
}

pub struct GuardedPacketHandler<T, Inner>(PhantomData<(T, Inner)>);

impl<T, Inner> PacketHandler<T::AccountId, T::Denom, BalanceOf<T>> for GuardedPacketHandler<T, Inner>
where
    T: Config,
    Inner: PacketHandler<T::AccountId, T::Denom, BalanceOf<T>>,
{
    fn on_recv_packet(packet: &TransferPacket<T::Denom, BalanceOf<T>>) -> Acknowledgement {
        if packet.denom != T::ControlledDenom::get() {
            return Inner::on_recv_packet(packet);
        }

        let Some(receiver) = decode_account::<T>(&packet.receiver) else {
            log::debug!(target: LOG_TARGET, "rejecting inbound packet with malformed receiver");
            return Acknowledgement::error("invalid address");
        };

        let mut movement = Movement::new(Operation::CrossChainReceive).receiver(receiver);
        // Foreign address formats can never be blacklisted here
        if let Some(sender) = decode_account::<T>(&packet.sender) {
            movement = movement.sender(sender);
        }
        if let Err(denial) = Pallet::<T>::evaluate(&movement) {
            return Acknowledgement::error(denial.reason());
        }

        Inner::on_recv_packet(packet)
    }

    fn send_transfer(
        sender: &T::AccountId,
        packet: &TransferPacket<T::Denom, BalanceOf<T>>,
    ) -> DispatchResult {
        if packet.denom == T::ControlledDenom::get() {
            let packet_sender = decode_account::<T>(&packet.sender).ok_or(Error::<T>::InvalidAddress)?;

            let mut movement = Movement::new(Operation::CrossChainSend).sender(sender.clone());
            if packet_sender != *sender {
                movement = movement.sender(packet_sender);
            }
            if let Some(receiver) = decode_account::<T>(&packet.receiver) {
                movement = movement.receiver(receiver);
            }
            Pallet::<T>::enforce(&packet.denom, movement)?;
        }

        Inner::send_transfer(sender, packet)
    }
}

fn decode_account<T: Config>(raw: &[u8]) -> Option<T::AccountId> {
    T::AccountId::decode_all(&mut &raw[..]).ok()
}
