//! Connection seams and address discovery.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use crate::common::NetError;
use crate::protocol::Message;

/// Write half of a peer connection.
#[async_trait::async_trait]
pub trait MessageSender: Send {
    async fn send(&mut self, msg: Message) -> Result<(), NetError>;
}

/// Read half of a peer connection. `recv` resolves to one decoded message,
/// `NetError::Closed` on clean end of stream, or an error.
#[async_trait::async_trait]
pub trait MessageReceiver: Send {
    async fn recv(&mut self) -> Result<Message, NetError>;
}

pub mod in_memory;
pub mod tcp;

/// The machine's outward-facing IPv4 address, learned by connecting a UDP
/// socket to a public address without sending anything. Falls back to
/// loopback on any failure; used for display and the join announcement only.
pub fn local_ip() -> IpAddr {
    fn discover() -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect(("8.8.8.8", 80))?;
        Ok(socket.local_addr()?.ip())
    }
    discover().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
