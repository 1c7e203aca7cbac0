//! `TimePoint`/`TimePointSec`/`BlockTimestamp`.
//!
//! Grounded on `pkg/chain/time.go`.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::error::Error;

const TIME_POINT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const TIME_POINT_SEC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const BLOCK_TIMESTAMP_EPOCH_MILLI: i64 = 946_684_800_000;

fn strip_trailing_z(s: &str) -> &str {
    s.strip_suffix('Z').unwrap_or(s)
}

/// Microseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct TimePoint(pub i64);

impl TimePoint {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        TimePoint(dt.timestamp_micros())
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_micros(self.0).unwrap_or_else(|| Utc::now())
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format(TIME_POINT_FORMAT))
    }
}

impl FromStr for TimePoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = strip_trailing_z(s);
        let naive = NaiveDateTime::parse_from_str(s, TIME_POINT_FORMAT)
            .map_err(|e| Error::InvalidTime(e.to_string()))?;
        Ok(TimePoint::from_datetime(naive.and_utc()))
    }
}

impl Encode for TimePoint {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_i64(self.0)
    }
}

impl Decode for TimePoint {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(TimePoint(r.read_i64()?))
    }
}

/// Seconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct TimePointSec(pub u32);

impl TimePointSec {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        TimePointSec(dt.timestamp() as u32)
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0 as i64, 0).unwrap_or_else(|| Utc::now())
    }
}

impl fmt::Display for TimePointSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format(TIME_POINT_SEC_FORMAT))
    }
}

impl FromStr for TimePointSec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = strip_trailing_z(s);
        let naive = NaiveDateTime::parse_from_str(s, TIME_POINT_SEC_FORMAT)
            .map_err(|e| Error::InvalidTime(e.to_string()))?;
        Ok(TimePointSec::from_datetime(naive.and_utc()))
    }
}

impl Encode for TimePointSec {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u32(self.0)
    }
}

impl Decode for TimePointSec {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(TimePointSec(r.read_u32()?))
    }
}

/// Count of 500ms slots since `2000-01-01T00:00:00Z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct BlockTimestamp(pub u32);

impl BlockTimestamp {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let millis = dt.timestamp_millis();
        let rounded = ((millis + 250) / 500) * 500;
        BlockTimestamp(((rounded - BLOCK_TIMESTAMP_EPOCH_MILLI) / 500) as u32)
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        let millis = self.0 as i64 * 500 + BLOCK_TIMESTAMP_EPOCH_MILLI;
        DateTime::from_timestamp_millis(millis).unwrap_or_else(|| Utc::now())
    }
}

impl fmt::Display for BlockTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format(TIME_POINT_FORMAT))
    }
}

impl FromStr for BlockTimestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = strip_trailing_z(s);
        let naive = NaiveDateTime::parse_from_str(s, TIME_POINT_FORMAT)
            .map_err(|e| Error::InvalidTime(e.to_string()))?;
        Ok(BlockTimestamp::from_datetime(naive.and_utc()))
    }
}

impl Encode for BlockTimestamp {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u32(self.0)
    }
}

impl Decode for BlockTimestamp {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(BlockTimestamp(r.read_u32()?))
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    macro_rules! text_json {
        ($ty:ty) => {
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                    s.serialize_str(&self.to_string())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                    String::deserialize(d)?.parse().map_err(D::Error::custom)
                }
            }
        };
    }

    text_json!(TimePoint);
    text_json!(TimePointSec);
    text_json!(BlockTimestamp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_point_parses_and_formats() {
        let tp: TimePoint = "2021-01-05T12:00:00.500".parse().unwrap();
        assert_eq!(tp.to_string(), "2021-01-05T12:00:00.500");
    }

    #[test]
    fn time_point_accepts_trailing_z() {
        let tp: TimePoint = "2021-01-05T12:00:00.000Z".parse().unwrap();
        assert_eq!(tp.to_string(), "2021-01-05T12:00:00.000");
    }

    #[test]
    fn time_point_sec_round_trip() {
        let tps: TimePointSec = "2021-01-05T12:00:00".parse().unwrap();
        assert_eq!(tps.to_string(), "2021-01-05T12:00:00");
    }

    #[test]
    fn block_timestamp_quantizes_to_500ms() {
        let bts: BlockTimestamp = "2021-01-05T12:00:00.000".parse().unwrap();
        let mut buf = Vec::new();
        bts.encode(&mut Writer::new(&mut buf)).unwrap();
        let decoded = BlockTimestamp::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(decoded.to_string(), "2021-01-05T12:00:00.000");
    }
}
