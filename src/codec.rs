//! Wire codecs for the service's non-native scalar encodings.
//!
//! The Sketchware service encodes some integers as decimal strings and some
//! booleans as `"Y"`/`"N"` flags. Each encoding is a [`WireCodec`]; every codec
//! also works as a `serde_with` adapter so entity schemas can attach it per
//! field:
//!
//! ```
//! use serde::Deserialize;
//! use serde_with::serde_as;
//! use sketchware_api::codec::{StringInt, YesNo};
//!
//! #[serde_as]
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde_as(as = "StringInt")]
//!     reg_dt: i64,
//!     #[serde_as(as = "YesNo")]
//!     is_sns_user: bool,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"reg_dt":"1600000000000","is_sns_user":"Y"}"#).unwrap();
//! assert_eq!(row.reg_dt, 1_600_000_000_000);
//! assert!(row.is_sns_user);
//! ```

use std::fmt;
use std::num::ParseIntError;

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use serde_with::{DeserializeAs, SerializeAs};
use thiserror::Error;

/// Failure to decode a wire value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A string-encoded integer was not a valid decimal `i64`.
    #[error("invalid string-encoded integer {value:?}: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// A bidirectional conversion between a string wire form and a native value.
///
/// Implementations must round-trip: `decode(&encode(&x)) == Ok(x)` for every
/// `x` in the native domain.
pub trait WireCodec {
    /// Native representation exposed to callers.
    type Native;

    /// Convert the wire string into the native value.
    fn decode(wire: &str) -> Result<Self::Native, CodecError>;

    /// Convert the native value into its wire string.
    fn encode(native: &Self::Native) -> String;
}

/// Decimal string ↔ `i64`.
pub struct StringInt;

impl WireCodec for StringInt {
    type Native = i64;

    fn decode(wire: &str) -> Result<i64, CodecError> {
        wire.parse().map_err(|source| CodecError::InvalidInteger {
            value: wire.to_string(),
            source,
        })
    }

    fn encode(native: &i64) -> String {
        native.to_string()
    }
}

/// `"Y"`/`"N"` flag ↔ `bool`.
///
/// Decoding is lenient: only the exact string `"Y"` is true, everything else
/// (including `"y"` and the empty string) is false.
pub struct YesNo;

impl WireCodec for YesNo {
    type Native = bool;

    fn decode(wire: &str) -> Result<bool, CodecError> {
        Ok(wire == "Y")
    }

    fn encode(native: &bool) -> String {
        let flag = if *native { "Y" } else { "N" };
        flag.to_string()
    }
}

/// Visitor that accepts a JSON string and hands it to a codec.
struct WireVisitor<C>(std::marker::PhantomData<C>);

impl<'de, C: WireCodec> Visitor<'de> for WireVisitor<C> {
    type Value = C::Native;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string-encoded wire value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        C::decode(v).map_err(E::custom)
    }
}

macro_rules! serde_as_wire_codec {
    ($($codec:ty),* $(,)?) => {$(
        impl SerializeAs<<$codec as WireCodec>::Native> for $codec {
            fn serialize_as<S: Serializer>(
                source: &<$codec as WireCodec>::Native,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&<$codec as WireCodec>::encode(source))
            }
        }

        impl<'de> DeserializeAs<'de, <$codec as WireCodec>::Native> for $codec {
            fn deserialize_as<D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<<$codec as WireCodec>::Native, D::Error> {
                deserializer.deserialize_str(WireVisitor::<$codec>(std::marker::PhantomData))
            }
        }
    )*};
}

serde_as_wire_codec!(StringInt, YesNo);
