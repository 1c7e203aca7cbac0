use eosio_codec::{Reader, Writer, ZigZag};
use proptest::prelude::*;

proptest! {
    #[test]
    fn varuint32_round_trips(value: u32) {
        let mut buf = Vec::new();
        Writer::new(&mut buf).write_varuint32(value).unwrap();
        prop_assert_eq!(Reader::new(&buf[..]).read_varuint32().unwrap(), value);
    }

    #[test]
    fn varuint64_round_trips(value: u64) {
        let mut buf = Vec::new();
        Writer::new(&mut buf).write_varuint64(value).unwrap();
        prop_assert_eq!(Reader::new(&buf[..]).read_varuint64().unwrap(), value);
    }

    #[test]
    fn varint32_round_trips(value: i32) {
        let mut buf = Vec::new();
        Writer::new(&mut buf).write_varint32(value).unwrap();
        prop_assert_eq!(Reader::new(&buf[..]).read_varint32().unwrap(), value);
    }

    #[test]
    fn varint64_round_trips(value: i64) {
        let mut buf = Vec::new();
        Writer::new(&mut buf).write_varint64(value).unwrap();
        prop_assert_eq!(Reader::new(&buf[..]).read_varint64().unwrap(), value);
    }

    #[test]
    fn zigzag32_round_trips(value: i32) {
        prop_assert_eq!(i32::zigzag_decode(value.zigzag_encode()), value);
    }

    #[test]
    fn zigzag64_round_trips(value: i64) {
        prop_assert_eq!(i64::zigzag_decode(value.zigzag_encode()), value);
    }
}
