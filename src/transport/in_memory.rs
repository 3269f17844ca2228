use std::io;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::common::NetError;
use crate::protocol::Message;
use crate::transport::{MessageReceiver, MessageSender};

/// A loopback connection: two transports wired to each other in process.
/// Dropping either side's halves closes the link for the peer.
pub struct InMemoryTransport {
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl InMemoryTransport {
    /// Two connected transports.
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_a) = unbounded_channel();
        let (tx_b, rx_b) = unbounded_channel();
        (
            Self { tx: tx_a, rx: rx_b },
            Self { tx: tx_b, rx: rx_a },
        )
    }

    /// Split into the same trait halves the TCP transport produces.
    pub fn into_split(self) -> (InMemorySender, InMemoryReceiver) {
        (
            InMemorySender { tx: self.tx },
            InMemoryReceiver { rx: self.rx },
        )
    }
}

pub struct InMemorySender {
    tx: UnboundedSender<Message>,
}

#[async_trait::async_trait]
impl MessageSender for InMemorySender {
    async fn send(&mut self, msg: Message) -> Result<(), NetError> {
        self.tx.send(msg).map_err(|_| {
            NetError::Send(io::Error::new(io::ErrorKind::BrokenPipe, "peer dropped"))
        })
    }
}

pub struct InMemoryReceiver {
    rx: UnboundedReceiver<Message>,
}

#[async_trait::async_trait]
impl MessageReceiver for InMemoryReceiver {
    async fn recv(&mut self) -> Result<Message, NetError> {
        self.rx.recv().await.ok_or(NetError::Closed)
    }
}
