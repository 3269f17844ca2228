use proptest::prelude::*;
use tictactoe::{Message, NetError};

#[test]
fn move_encodes_to_bare_digits() {
    assert_eq!(Message::Move { row: 2, col: 1 }.encode(), "2,1");
}

#[test]
fn join_announce_encodes_with_prefix() {
    let msg = Message::JoinAnnounce {
        ip: "10.0.0.5".to_string(),
    };
    assert_eq!(msg.encode(), "join_10.0.0.5");
}

#[test]
fn join_announce_decodes_back() {
    assert_eq!(
        Message::decode("join_192.168.1.20").unwrap(),
        Message::JoinAnnounce {
            ip: "192.168.1.20".to_string()
        }
    );
}

#[test]
fn malformed_tokens_are_rejected() {
    for token in [
        "",
        "1",
        "a,b",
        "1,",
        ",2",
        "3,0",
        "0,3",
        "1 ,2",
        "one,two",
        "joined",
    ] {
        let err = Message::decode(token).unwrap_err();
        assert!(
            matches!(err, NetError::Malformed(_)),
            "expected Malformed for {:?}, got {}",
            token,
            err
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Encoding then decoding any in-range move is the identity.
    #[test]
    fn move_roundtrip(row in 0u8..3, col in 0u8..3) {
        let msg = Message::Move { row, col };
        prop_assert_eq!(Message::decode(&msg.encode()).unwrap(), msg);
    }

    /// Any dotted-quad join announcement survives the trip.
    #[test]
    fn join_announce_roundtrip(ip in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}") {
        let msg = Message::JoinAnnounce { ip };
        prop_assert_eq!(Message::decode(&msg.encode()).unwrap(), msg.clone());
    }

    /// Lowercase junk matches neither pattern.
    #[test]
    fn alpha_junk_is_rejected(token in "[a-z]{1,12}") {
        prop_assert!(matches!(
            Message::decode(&token),
            Err(NetError::Malformed(_))
        ));
    }

    /// Out-of-range coordinates never decode.
    #[test]
    fn out_of_range_moves_are_rejected(row in 3u8..100, col in 0u8..100) {
        let token = format!("{},{}", row, col);
        prop_assert!(matches!(
            Message::decode(&token),
            Err(NetError::Malformed(_))
        ));
    }
}
