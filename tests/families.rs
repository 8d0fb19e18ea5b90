use num_bigint::BigUint;
use recodec::schema::{Family, Record, Role, ValueEncoding};
use recodec::{decode, encode, size, DecodeError, Encode, FormatError};

recodec::record_family! {
    /// New-order style family with signed and byte-string key parts
    pub mod ledger {
        key { region: [u8; 2], account: i64, seq: u16 }
        value(compact) { amount: i64, memo: String, attachment: Vec<u8>, cleared: bool, total: BigUint }
    }
}

recodec::record_family! {
    pub mod tick {
        key { symbol: [u8; 4], at: u64, price: f64 }
        value(pass_through) { bid: f32, ask: f32, volume: u32, flags: u8 }
    }
}

recodec::record_family! {
    pub mod counter {
        key { id: u32 }
        value { hits: u64 }
    }
}

fn ledger_keys() -> Vec<ledger::Key> {
    let mut keys = Vec::new();
    for region in [*b"EU", *b"US"] {
        for account in [i64::MIN, -70_000, -1, 0, 1, 255, 256, i64::MAX] {
            for seq in [0u16, 1, 0x00ff, 0x0100, u16::MAX] {
                keys.push(ledger::Key::new(region, account, seq));
            }
        }
    }
    keys
}

#[test]
fn keys_round_trip() {
    for k in ledger_keys() {
        assert_eq!(decode::<ledger::Key>(&encode(&k)).unwrap(), k);
    }
}

#[test]
fn keys_fixed_width() {
    for k in ledger_keys() {
        assert_eq!(size(&k), 12);
        assert_eq!(encode(&k).len(), 12);
    }
}

#[test]
fn keys_preserve_order() {
    let keys = ledger_keys();
    for a in &keys {
        for b in &keys {
            assert_eq!(
                a.partial_cmp(b),
                encode(a).partial_cmp(&encode(b)),
                "{a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn float_keys_preserve_order() {
    let prices = [
        -f64::NAN,
        -1e9,
        -3.25,
        -0.0,
        0.0,
        0.5,
        99.99,
        f64::INFINITY,
        f64::NAN,
    ];
    let mut keys = Vec::new();
    for at in [9, 10] {
        for p in prices {
            keys.push(tick::Key::new(*b"ACME", at, p));
        }
    }
    for a in &keys {
        for b in &keys {
            assert_eq!(a.cmp(b), encode(a).cmp(&encode(b)), "{a:?} vs {b:?}");
            assert_eq!(a == b, encode(a) == encode(b), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn float_keys_round_trip_exactly() {
    for p in [f64::NAN, -f64::NAN, -0.0, 0.0] {
        let k = tick::Key::new(*b"ACME", 1, p);
        let back = decode::<tick::Key>(&encode(&k)).unwrap();
        assert_eq!(back, k);
        assert_eq!(back.price.to_bits(), p.to_bits());
    }
    assert_ne!(
        tick::Key::new(*b"ACME", 1, -0.0),
        tick::Key::new(*b"ACME", 1, 0.0)
    );
}

#[test]
fn values_round_trip_and_size() {
    let values = [
        ledger::Value::default(),
        ledger::Value::new(300, "rent".into(), vec![1, 2, 3], true, BigUint::from(7u8)),
        ledger::Value::new(
            i64::MIN,
            "ü".repeat(100),
            vec![0xaa; 1000],
            false,
            BigUint::from(u128::MAX) << 3,
        ),
    ];
    for v in &values {
        let bytes = encode(v);
        assert_eq!(size(v), bytes.len());
        assert_eq!(v.counted_len(), bytes.len());
        assert_eq!(&decode::<ledger::Value>(&bytes).unwrap(), v);
    }
}

#[test]
fn equality_reflects_structure() {
    let base = ledger::Value::new(1, "a".into(), vec![1], true, BigUint::from(2u8));
    assert_eq!(base, base.clone());

    let mut changed = base.clone();
    changed.cleared = false;
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.attachment.push(0);
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.total += 1u8;
    assert_ne!(base, changed);
}

#[test]
fn pass_through_constant_size() {
    let lo = tick::Value::new(0.0, 0.0, 0, 0);
    let hi = tick::Value::new(f32::MAX, f32::MIN, u32::MAX, 0xff);
    assert_eq!(size(&lo), 13);
    assert_eq!(size(&hi), 13);
    assert_eq!(encode(&hi).len(), 13);
    assert_eq!(decode::<tick::Value>(&encode(&hi)).unwrap(), hi);
    assert_eq!(&encode(&hi)[8..12], &u32::MAX.to_le_bytes());
}

#[test]
fn default_encoding_follows_feature() {
    let expect = if cfg!(feature = "varint_values") {
        ValueEncoding::Compact
    } else {
        ValueEncoding::PassThrough
    };
    assert_eq!(<counter::Value as Record>::ROLE, Role::Value(expect));
    let v = counter::Value::new(5);
    assert_eq!(decode::<counter::Value>(&encode(&v)).unwrap(), v);
}

#[test]
fn truncated_records_fail() {
    let k = encode(&ledger::Key::new(*b"EU", 5, 6));
    for cut in 0..k.len() {
        assert!(matches!(
            decode::<ledger::Key>(&k[..cut]),
            Err(DecodeError::Truncated { .. })
        ));
    }

    let v = encode(&ledger::Value::new(1, "memo".into(), vec![9; 4], true, BigUint::from(1u8)));
    for cut in 0..v.len() {
        assert!(matches!(
            decode::<ledger::Value>(&v[..cut]),
            Err(DecodeError::Truncated { .. })
        ));
    }
}

#[test]
fn malformed_values_fail() {
    let mut v = encode(&ledger::Value::new(1, "m".into(), vec![], true, BigUint::from(1u8)));
    // amount(1) memo(2) attachment(1) cleared(1) total(1)
    assert_eq!(v.len(), 6);
    v[4] = 0x07;
    assert_eq!(
        decode::<ledger::Value>(&v).unwrap_err(),
        DecodeError::InvalidFormat {
            offset: 4,
            kind: FormatError::InvalidBool(0x07)
        }
    );
}

#[test]
fn wire_layout_documentation() {
    let text = ledger::Family::descriptor().to_string();
    assert!(text.starts_with("ledger::Key (key, canonical; 12 bytes)\n"));
    assert!(text.contains("0. region: bytes[2], 2 bytes, identity"));
    assert!(text.contains("1. account: i64, 8 bytes, big-endian, sign-flipped"));
    assert!(text.contains("ledger::Value (value, compact; variable)"));
    assert!(text.contains("4. total: nat, var, identity"));

    let tick = tick::Family::descriptor();
    assert_eq!(tick.value.fixed_width(), Some(13));
    assert_eq!(tick::Family::NAME, "tick");
}
