use eosio::codec::{Decode, Encode, Reader, Writer};
use eosio::Dispatcher;
use proptest::prelude::*;

proptest! {
    #[test]
    fn default_decode_round_trips_u64(value: u64) {
        let mut w = Writer::new(Vec::new());
        value.encode(&mut w).unwrap();
        let buf = w.into_inner();

        let mut dispatcher: Dispatcher<u64, Vec<u8>, &[u8]> =
            Dispatcher::new().with_decode_extension(|_r: &mut Reader<&[u8]>| Ok(None));
        let decoded = dispatcher.decode(&mut Reader::new(&buf[..])).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn encode_extension_short_circuits_for_any_value(value: u64) {
        let mut dispatcher: Dispatcher<u64, Vec<u8>, &[u8]> =
            Dispatcher::new().with_encode_extension(|_v: &u64, w: &mut Writer<Vec<u8>>| {
                w.write_u8(0xff)?;
                Ok(true)
            });
        let mut w = Writer::new(Vec::new());
        dispatcher.encode(&value, &mut w).unwrap();
        prop_assert_eq!(w.into_inner(), vec![0xff]);
    }
}
