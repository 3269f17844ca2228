use tictactoe::transport::in_memory::InMemoryTransport;
use tictactoe::transport::{MessageReceiver, MessageSender};
use tictactoe::{Message, NetError};

#[tokio::test]
async fn pair_delivers_both_ways() {
    let (a, b) = InMemoryTransport::pair();
    let (mut a_tx, mut a_rx) = a.into_split();
    let (mut b_tx, mut b_rx) = b.into_split();

    a_tx.send(Message::Move { row: 0, col: 2 }).await.unwrap();
    assert_eq!(b_rx.recv().await.unwrap(), Message::Move { row: 0, col: 2 });

    b_tx.send(Message::JoinAnnounce {
        ip: "127.0.0.1".to_string(),
    })
    .await
    .unwrap();
    assert_eq!(
        a_rx.recv().await.unwrap(),
        Message::JoinAnnounce {
            ip: "127.0.0.1".to_string()
        }
    );
}

#[tokio::test]
async fn messages_arrive_in_order() {
    let (a, b) = InMemoryTransport::pair();
    let (mut a_tx, _a_rx) = a.into_split();
    let (_b_tx, mut b_rx) = b.into_split();

    for col in 0..3u8 {
        a_tx.send(Message::Move { row: 1, col }).await.unwrap();
    }
    for col in 0..3u8 {
        assert_eq!(b_rx.recv().await.unwrap(), Message::Move { row: 1, col });
    }
}

#[tokio::test]
async fn dropping_the_sender_closes_the_peer() {
    let (a, b) = InMemoryTransport::pair();
    let (a_tx, _a_rx) = a.into_split();
    let (_b_tx, mut b_rx) = b.into_split();

    drop(a_tx);
    assert!(matches!(b_rx.recv().await, Err(NetError::Closed)));
}

#[tokio::test]
async fn sending_to_a_dropped_peer_fails() {
    let (a, b) = InMemoryTransport::pair();
    let (mut a_tx, _a_rx) = a.into_split();
    drop(b);

    let err = a_tx.send(Message::Move { row: 0, col: 0 }).await.unwrap_err();
    assert!(matches!(err, NetError::Send(_)));
}
