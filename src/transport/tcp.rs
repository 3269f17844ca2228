use std::io;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{timeout, Duration};

use crate::common::NetError;
use crate::config::MAX_FRAME;
use crate::protocol::Message;
use crate::transport::{MessageReceiver, MessageSender};

/// Timeout for establishing the outbound connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for writing one frame. Frames are tiny, so a stalled write means
/// the peer is gone.
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// One established peer connection. Split into owned halves so the receive
/// loop can own the read side while the session keeps the write side.
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Wrap an already-established stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Bind the well-known port on all interfaces and accept exactly one
    /// peer. The listener is released as soon as the connection is up.
    pub async fn host(port: u16) -> Result<Self, NetError> {
        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(NetError::Bind)?;
        let (stream, peer) = listener.accept().await.map_err(NetError::Accept)?;
        log::info!("peer connected from {}", peer);
        Ok(Self { stream })
    }

    /// Connect to a hosting peer, bounded by the connect timeout.
    pub async fn connect(host: &str, port: u16) -> Result<Self, NetError> {
        let stream = timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port)))
            .await
            .map_err(|_| {
                NetError::Connect(io::Error::new(io::ErrorKind::TimedOut, "connect timed out"))
            })?
            .map_err(NetError::Connect)?;
        Ok(Self { stream })
    }

    /// Split into the trait halves used by the session and its receive loop.
    pub fn into_split(self) -> (TcpSender, TcpReceiver) {
        let (read, write) = self.stream.into_split();
        (
            TcpSender { writer: write },
            TcpReceiver {
                reader: BufReader::new(read),
                buf: Vec::with_capacity(MAX_FRAME),
            },
        )
    }
}

/// Write half: one encoded token plus newline delimiter per message.
pub struct TcpSender {
    writer: OwnedWriteHalf,
}

#[async_trait::async_trait]
impl MessageSender for TcpSender {
    async fn send(&mut self, msg: Message) -> Result<(), NetError> {
        let mut frame = msg.encode().into_bytes();
        frame.push(b'\n');
        timeout(SEND_TIMEOUT, self.writer.write_all(&frame))
            .await
            .map_err(|_| NetError::Send(io::Error::new(io::ErrorKind::TimedOut, "send timed out")))?
            .map_err(NetError::Send)
    }
}

/// Read half: newline-delimited frames, bounded by `MAX_FRAME`.
pub struct TcpReceiver {
    reader: BufReader<OwnedReadHalf>,
    buf: Vec<u8>,
}

#[async_trait::async_trait]
impl MessageReceiver for TcpReceiver {
    async fn recv(&mut self) -> Result<Message, NetError> {
        self.buf.clear();
        let n = (&mut self.reader)
            .take(MAX_FRAME as u64)
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => NetError::Closed,
                _ => NetError::Recv(e),
            })?;
        if n == 0 {
            return Err(NetError::Closed);
        }
        if self.buf.last() != Some(&b'\n') {
            // Either the stream ended mid-frame or the frame never fit in
            // MAX_FRAME; recovery is impossible in both cases.
            if n == MAX_FRAME {
                return Err(NetError::Recv(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("frame exceeds {} bytes", MAX_FRAME),
                )));
            }
            return Err(NetError::Closed);
        }
        let token = std::str::from_utf8(&self.buf[..n - 1])
            .map_err(|_| NetError::Malformed("frame is not valid UTF-8".to_string()))?;
        Message::decode(token.trim_end_matches('\r'))
    }
}
