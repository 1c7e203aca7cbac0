//! Value-routing shim: composes an optional user extension hook with the
//! crate's own `Encode`/`Decode` impls.
//!
//! Grounded on `pkg/chain/encoding.go`'s `chainDecoder` (a type-switch
//! dispatching to each chain type's `UnmarshalABI`) and `NewCustomDecoder`
//! (which wraps a user `DecodeFunc` so it runs first, falling through to
//! `chainDecoder` when the user function declines). Go needs the type-switch
//! because `interface{}` erases the concrete type at the call site; Rust's
//! generics don't have that problem; a call to `value.encode(w)` is already
//! resolved to the single most specific impl at compile time. So the shim's
//! only real job left in Rust is composition: try the extension, then fall
//! through to the type's own wire encoding.

use std::io::{Read, Write};

use eosio_codec::{Decode, Encode, Error, Reader, Writer};

type EncodeExtension<T, W> = Box<dyn FnMut(&T, &mut Writer<W>) -> Result<bool, Error>>;
type DecodeExtension<T, R> = Box<dyn FnMut(&mut Reader<R>) -> Result<Option<T>, Error>>;

/// Dispatches encode/decode calls for a single type `T`, trying a
/// user-registered extension before falling through to `T`'s own
/// [`Encode`]/[`Decode`] implementation.
pub struct Dispatcher<T, W, R> {
    encode_extension: Option<EncodeExtension<T, W>>,
    decode_extension: Option<DecodeExtension<T, R>>,
}

impl<T, W, R> Default for Dispatcher<T, W, R> {
    fn default() -> Self {
        Dispatcher {
            encode_extension: None,
            decode_extension: None,
        }
    }
}

impl<T, W, R> Dispatcher<T, W, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function that runs before the default encoder. Returning
    /// `Ok(true)` stops dispatch there; `Ok(false)` falls through to `T`'s
    /// own `Encode` impl.
    pub fn with_encode_extension<F>(mut self, f: F) -> Self
    where
        F: FnMut(&T, &mut Writer<W>) -> Result<bool, Error> + 'static,
    {
        self.encode_extension = Some(Box::new(f));
        self
    }

    /// Registers a function that runs before the default decoder. Returning
    /// `Ok(Some(value))` stops dispatch there with that value; `Ok(None)`
    /// falls through to `T`'s own `Decode` impl.
    pub fn with_decode_extension<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut Reader<R>) -> Result<Option<T>, Error> + 'static,
    {
        self.decode_extension = Some(Box::new(f));
        self
    }
}

impl<T: Encode, W: Write, R> Dispatcher<T, W, R> {
    pub fn encode(&mut self, value: &T, w: &mut Writer<W>) -> Result<(), Error> {
        if let Some(ext) = &mut self.encode_extension {
            if ext(value, w)? {
                return Ok(());
            }
        }
        value.encode(w)
    }
}

impl<T: Decode, W, R: Read> Dispatcher<T, W, R> {
    pub fn decode(&mut self, r: &mut Reader<R>) -> Result<T, Error> {
        if let Some(ext) = &mut self.decode_extension {
            if let Some(value) = ext(r)? {
                return Ok(value);
            }
        }
        T::decode(r)
    }
}
