use bytes::Bytes;
use num_bigint::BigInt;

use super::*;

fn kind_of(data: &[u8]) -> ErrorKind {
    decode(data).unwrap_err().kind()
}

#[test]
fn test_decode_scalars() {
    assert_eq!(decode(b"n").unwrap(), Value::Null);
    assert_eq!(decode(b"t").unwrap(), Value::Boolean(true));
    assert_eq!(decode(b"f").unwrap(), Value::Boolean(false));
    assert_eq!(decode(b"i0e").unwrap(), Value::from(0i64));
    assert_eq!(decode(b"i-5e").unwrap(), Value::from(-5i64));
    assert_eq!(decode(b"i42e").unwrap(), Value::from(42i64));
}

#[test]
fn test_decode_integer_invalid() {
    assert_eq!(kind_of(b"i01e"), ErrorKind::Format);
    assert_eq!(kind_of(b"i-0e"), ErrorKind::Format);
    assert_eq!(kind_of(b"i+1e"), ErrorKind::Format);
    assert_eq!(kind_of(b"ie"), ErrorKind::Format);
    assert_eq!(kind_of(b"i1.5e"), ErrorKind::Format);
    assert_eq!(kind_of(b"i12"), ErrorKind::Truncated);
}

#[test]
fn test_decode_big_integer() {
    let value = decode(b"i340282366920938463463374607431768211456e").unwrap();
    let expected = BigInt::from(u128::MAX) + BigInt::from(1);
    assert_eq!(value.as_integer(), Some(&expected));
    assert_eq!(value.as_i64(), None);
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(decode(b"0:").unwrap(), Value::empty_bytes());
    assert_eq!(
        decode(b"3:\x00\xff\x80").unwrap(),
        Value::Bytes(Bytes::from_static(b"\x00\xff\x80"))
    );
}

#[test]
fn test_decode_bytes_length_exactness() {
    assert_eq!(kind_of(b"5:spam"), ErrorKind::Truncated);
    assert_eq!(kind_of(b"3:spam"), ErrorKind::TrailingData);
    assert_eq!(kind_of(b"04:spam"), ErrorKind::Format);
    assert_eq!(kind_of(b"4spam"), ErrorKind::Truncated);
    assert_eq!(
        kind_of(b"99999999999999999999999999:spam"),
        ErrorKind::Truncated
    );
}

#[test]
fn test_decode_text() {
    assert_eq!(decode(b"u5:hello").unwrap(), Value::text("hello"));
    assert_eq!(decode(b"u0:").unwrap(), Value::empty_text());
    assert_eq!(
        decode("u6:\u{d55c}\u{ae00}".as_bytes()).unwrap(),
        Value::text("\u{d55c}\u{ae00}")
    );
}

#[test]
fn test_decode_text_invalid() {
    assert!(matches!(
        decode(b"u2:\xff\xfe"),
        Err(BencodexError::InvalidUtf8 { offset: 3 })
    ));
    // length counts UTF-8 bytes, not characters
    assert_eq!(kind_of("u2:\u{d55c}".as_bytes()), ErrorKind::Format);
    assert_eq!(kind_of(b"u-1:"), ErrorKind::Format);
    assert_eq!(kind_of(b"u01:a"), ErrorKind::Format);
    assert_eq!(kind_of(b"u3:ab"), ErrorKind::Truncated);
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spami42eu1:xnte").unwrap();
    let list = result.as_list().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0], Value::Bytes(Bytes::from_static(b"spam")));
    assert_eq!(list[1], Value::from(42i64));
    assert_eq!(list[2], Value::text("x"));
    assert_eq!(list[3], Value::Null);
    assert_eq!(list[4], Value::Boolean(true));
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggsu1:ai1ee").unwrap();
    let dict = result.as_dict().unwrap();
    assert_eq!(dict.len(), 3);
    assert_eq!(
        result.get(b"cow"),
        Some(&Value::Bytes(Bytes::from_static(b"moo")))
    );
    assert_eq!(result.get("a"), Some(&Value::from(1i64)));
    assert_eq!(result.get("cow"), None);
}

#[test]
fn test_decode_dict_order_rejected() {
    let err = decode(b"d1:bi1e1:ai2ee").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Order);
    assert_eq!(err.offset(), Some(7));

    // text key before byte string key
    assert_eq!(kind_of(b"du1:ai1e1:bi2ee"), ErrorKind::Order);
    // longer key before its prefix
    assert_eq!(kind_of(b"d2:abn1:ane"), ErrorKind::Order);
}

#[test]
fn test_decode_dict_order_checked_before_value() {
    // the misordered key wins over whatever follows it
    for input in [&b"d1:bn1:ai01ee"[..], &b"d1:bn1:a"[..], &b"d1:bn1:ax"[..]] {
        let err = decode(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Order, "input {:?}", input);
        assert_eq!(err.offset(), Some(4));
    }
}

#[test]
fn test_decode_dict_duplicate_rejected() {
    assert_eq!(kind_of(b"d1:ai1e1:ai1ee"), ErrorKind::Order);
    assert_eq!(kind_of(b"du1:anu1:ane"), ErrorKind::Order);
}

#[test]
fn test_decode_dict_invalid_key() {
    for input in [
        &b"di1ei1ee"[..],
        &b"dnne"[..],
        &b"dlei1ee"[..],
        &b"ddei1ee"[..],
        &b"dti1ee"[..],
    ] {
        assert_eq!(kind_of(input), ErrorKind::Format, "input {:?}", input);
    }
    assert!(matches!(
        decode(b"di1ei1ee"),
        Err(BencodexError::InvalidKey {
            offset: 1,
            found: "integer"
        })
    ));
}

#[test]
fn test_decode_dict_missing_value() {
    assert_eq!(kind_of(b"d1:ae"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of(b"d1:a"), ErrorKind::Truncated);
}

#[test]
fn test_decode_unexpected_token() {
    assert_eq!(kind_of(b"x"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of(b"e"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of(b"lxe"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of(b"d-e"), ErrorKind::UnexpectedToken);
}

#[test]
fn test_decode_truncated() {
    assert_eq!(kind_of(b""), ErrorKind::Truncated);
    assert_eq!(kind_of(b"l"), ErrorKind::Truncated);
    assert_eq!(kind_of(b"li1e"), ErrorKind::Truncated);
    assert_eq!(kind_of(b"d1:a"), ErrorKind::Truncated);
    assert_eq!(kind_of(b"dle"), ErrorKind::Format);
}

#[test]
fn test_trailing_data_error() {
    let err = decode(b"i1ei2e").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TrailingData);
    assert_eq!(err.offset(), Some(3));
    assert_eq!(kind_of(b"lee"), ErrorKind::TrailingData);
    assert_eq!(kind_of(b"nn"), ErrorKind::TrailingData);
}

#[test]
fn test_depth_limit() {
    let depth = DEFAULT_MAX_DEPTH;
    let mut nested = vec![b'l'; depth];
    nested.extend(std::iter::repeat(b'e').take(depth));
    assert!(decode(&nested).is_ok());

    let mut too_deep = vec![b'l'; depth + 1];
    too_deep.extend(std::iter::repeat(b'e').take(depth + 1));
    assert_eq!(kind_of(&too_deep), ErrorKind::DepthLimit);

    let config = DecoderConfig::default().with_max_depth(0);
    assert!(decode_with(b"i1e", &config).is_ok());
    assert_eq!(
        decode_with(b"le", &config).unwrap_err().kind(),
        ErrorKind::DepthLimit
    );
}

#[test]
fn test_adversarial_nesting_does_not_overflow() {
    let input = vec![b'l'; 200_000];
    assert_eq!(kind_of(&input), ErrorKind::DepthLimit);

    let unlimited = DecoderConfig::default().with_max_depth(usize::MAX);
    let err = decode_with(&input, &unlimited).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
}

#[test]
fn test_encode_scalars() {
    assert_eq!(encode(&Value::Null).unwrap(), b"n");
    assert_eq!(encode(&Value::Boolean(true)).unwrap(), b"t");
    assert_eq!(encode(&Value::Boolean(false)).unwrap(), b"f");
    assert_eq!(encode(&Value::from(42i64)).unwrap(), b"i42e");
    assert_eq!(encode(&Value::from(-42i64)).unwrap(), b"i-42e");
    assert_eq!(encode(&Value::from(0i64)).unwrap(), b"i0e");
    assert_eq!(
        encode(&Value::Bytes(Bytes::from_static(b"spam"))).unwrap(),
        b"4:spam"
    );
    assert_eq!(encode(&Value::text("\u{e9}")).unwrap(), "u2:\u{e9}".as_bytes());
}

#[test]
fn test_encode_integer_from_any_construction() {
    let computed = BigInt::from(1000) - BigInt::from(1000);
    assert_eq!(encode(&Value::Integer(computed)).unwrap(), b"i0e");

    let negated = -BigInt::from(0);
    assert_eq!(encode(&Value::Integer(negated)).unwrap(), b"i0e");

    let big = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
    assert_eq!(
        encode(&Value::Integer(big)).unwrap(),
        b"i340282366920938463426481119284349108225e"
    );
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::from(42i64),
        Value::empty_list(),
    ]);
    assert_eq!(encode(&list).unwrap(), b"l4:spami42elee");
}

#[test]
fn test_encode_mixed_key_dict() {
    let mut dict = Dictionary::new();
    dict.insert(Key::text("b"), Value::Null);
    dict.insert(Key::from(b"a"), Value::from(1i64));
    let value = Value::Dict(dict);

    let encoded = encode(&value).unwrap();
    assert_eq!(encoded, b"d1:ai1eu1:bne");
    assert_eq!(decode(&encoded).unwrap(), value);
}

#[test]
fn test_typed_empty_roundtrip() {
    for (input, expected) in [
        (&b"u0:"[..], Value::empty_text()),
        (&b"0:"[..], Value::empty_bytes()),
        (&b"le"[..], Value::empty_list()),
        (&b"de"[..], Value::empty_dict()),
    ] {
        let decoded = decode(input).unwrap();
        assert_eq!(decoded, expected);
        assert!(!decoded.is_null());
        assert_eq!(encode(&decoded).unwrap(), input);
    }
}

#[test]
fn test_roundtrip() {
    let original: &[u8] = b"d1:\x00l1:a1:be8:announceu12:http://t.comu4:infod4:name4:test12:piece lengthi16384eeu1:zfe";
    let decoded = decode(original).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_roundtrip_constructed_values() {
    let mut inner = Dictionary::new();
    inner.insert("\u{ac00}", Value::empty_list());
    inner.insert("z", Value::from(BigInt::from(-1) << 100u32));
    inner.insert(vec![0xffu8, 0x00], Value::empty_text());

    let values = vec![
        Value::Null,
        Value::List(vec![Value::Dict(inner.clone()), Value::empty_bytes()]),
        Value::Dict(inner),
        Value::List(vec![Value::List(vec![Value::List(vec![])])]),
    ];

    for value in values {
        let encoded = encode(&value).unwrap();
        assert_eq!(encoded.len(), encoded_len(&value));
        assert_eq!(decode(&encoded).unwrap(), value);
    }
}

/// Takes a nested list apart one level at a time so it is not dropped
/// recursively.
fn dismantle(mut value: Value) {
    while let Value::List(mut items) = value {
        value = items.pop().unwrap_or(Value::Null);
    }
}

#[test]
fn test_encode_deep_value() {
    let depth = 200_000;
    let mut value = Value::empty_list();
    for _ in 1..depth {
        value = Value::List(vec![value]);
    }

    let encoded = encode(&value).unwrap();
    assert_eq!(encoded.len(), 2 * depth);
    assert_eq!(encoded_len(&value), 2 * depth);
    assert!(encoded[..depth].iter().all(|&b| b == b'l'));
    assert!(encoded[depth..].iter().all(|&b| b == b'e'));

    dismantle(value);
}

#[test]
fn test_encode_deep_dict() {
    let depth = 200_000;
    let mut value = Value::empty_dict();
    for _ in 1..depth {
        let mut dict = Dictionary::new();
        dict.insert("k", value);
        value = Value::List(vec![Value::Dict(dict)]);
    }

    let encoded = encode(&value).unwrap();
    assert_eq!(encoded.len(), encoded_len(&value));
    assert!(encoded.starts_with(b"ldu1:kld"));

    while let Value::List(mut items) = value {
        value = match items.pop() {
            Some(Value::Dict(dict)) => dict.into_iter().next().map_or(Value::Null, |(_, v)| v),
            _ => Value::Null,
        };
    }
}

#[test]
fn test_encode_to_writer() {
    let mut out = Vec::new();
    encode_to(&Value::text("hi"), &mut out).unwrap();
    encode_to(&Value::Null, &mut out).unwrap();
    assert_eq!(out, b"u2:hin");
}

#[test]
fn test_value_accessors() {
    let value = Value::from(42i64);
    assert_eq!(value.as_i64(), Some(42));
    assert!(value.as_bytes().is_none());
    assert_eq!(i64::try_from(&value).unwrap(), 42);

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_text(), None);
    assert!(value.as_integer().is_none());
    assert_eq!(
        i64::try_from(&value).unwrap_err().kind(),
        ErrorKind::Conversion
    );

    let value = Value::empty_list();
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
    assert_eq!(value.kind(), ValueKind::List);

    assert!(bool::try_from(&Value::Boolean(true)).unwrap());
    assert!(bool::try_from(&Value::Null).is_err());
}

#[test]
fn test_display() {
    let value = decode(b"d1:\x01lnti-3eeu1:xu2:hie").unwrap();
    assert_eq!(value.to_string(), r#"{b"\x01": [null, true, -3], "x": "hi"}"#);
}
