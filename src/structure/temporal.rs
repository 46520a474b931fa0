//! Temporal values.
//!
//! All fields are plain integers: days or seconds since the Unix epoch,
//! nanoseconds, and UTC offsets in seconds. Conversions from the matching
//! [`chrono`] types are provided for convenience.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serde_packstream::{Date, Pack};
//!
//! let date = Date::from(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
//! assert_eq!(date.days, 1);
//! assert_eq!(date.to_packstream().unwrap(), vec![0xB1, 0x44, 0x01]);
//! ```

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::{tag, StructureType};
use crate::packer::Packer;
use crate::{Result, Value};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

fn nanos_since_midnight(time: &NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(time.nanosecond())
}

/// A calendar date as days since 1970-01-01.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Date {
    pub days: i64,
}

impl Date {
    pub fn new(days: i64) -> Self {
        Date { days }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl StructureType for Date {
    fn tag(&self) -> u8 {
        tag::DATE
    }

    fn field_count(&self) -> usize {
        1
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.days)
    }

    fn fields(&self) -> Vec<Value> {
        vec![Value::Integer(self.days)]
    }
}

/// A time of day with a UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Time {
    /// Nanoseconds since local midnight.
    pub nanoseconds: i64,
    pub tz_offset_seconds: i64,
}

impl Time {
    pub fn new(nanoseconds: i64, tz_offset_seconds: i64) -> Self {
        Time {
            nanoseconds,
            tz_offset_seconds,
        }
    }

    pub fn from_chrono(time: NaiveTime, offset: FixedOffset) -> Self {
        Time::new(
            nanos_since_midnight(&time),
            i64::from(offset.local_minus_utc()),
        )
    }

    /// Nanoseconds since midnight UTC.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_packstream::Time;
    ///
    /// // 01:00 at UTC+01:00 is midnight UTC
    /// let time = Time::new(3_600_000_000_000, 3600);
    /// assert_eq!(time.to_utc_nanoseconds(), 0);
    /// ```
    #[must_use]
    pub fn to_utc_nanoseconds(&self) -> i128 {
        i128::from(self.nanoseconds)
            - i128::from(self.tz_offset_seconds) * i128::from(NANOS_PER_SECOND)
    }
}

impl StructureType for Time {
    fn tag(&self) -> u8 {
        tag::TIME
    }

    fn field_count(&self) -> usize {
        2
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.nanoseconds)?;
        packer.write_int(self.tz_offset_seconds)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.nanoseconds),
            Value::Integer(self.tz_offset_seconds),
        ]
    }
}

/// A time of day without a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalTime {
    /// Nanoseconds since midnight.
    pub nanoseconds: i64,
}

impl LocalTime {
    pub fn new(nanoseconds: i64) -> Self {
        LocalTime { nanoseconds }
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(time: NaiveTime) -> Self {
        LocalTime::new(nanos_since_midnight(&time))
    }
}

impl StructureType for LocalTime {
    fn tag(&self) -> u8 {
        tag::LOCAL_TIME
    }

    fn field_count(&self) -> usize {
        1
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.nanoseconds)
    }

    fn fields(&self) -> Vec<Value> {
        vec![Value::Integer(self.nanoseconds)]
    }
}

/// A date and time with a UTC offset.
///
/// `seconds` counts local wall-clock seconds since the epoch; subtract the
/// offset to get UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub seconds: i64,
    pub nanoseconds: i64,
    pub tz_offset_seconds: i64,
}

impl DateTime {
    pub fn new(seconds: i64, nanoseconds: i64, tz_offset_seconds: i64) -> Self {
        DateTime {
            seconds,
            nanoseconds,
            tz_offset_seconds,
        }
    }

    /// Nanoseconds since the Unix epoch in UTC.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_packstream::DateTime;
    ///
    /// let dt = DateTime::new(3600, 5, 3600);
    /// assert_eq!(dt.to_utc_nanoseconds(), 5);
    /// ```
    #[must_use]
    pub fn to_utc_nanoseconds(&self) -> i128 {
        let nanos_per_second = i128::from(NANOS_PER_SECOND);
        i128::from(self.seconds) * nanos_per_second + i128::from(self.nanoseconds)
            - i128::from(self.tz_offset_seconds) * nanos_per_second
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(dt: chrono::DateTime<FixedOffset>) -> Self {
        let local = dt.naive_local().and_utc();
        DateTime::new(
            local.timestamp(),
            i64::from(local.timestamp_subsec_nanos()),
            i64::from(dt.offset().local_minus_utc()),
        )
    }
}

impl StructureType for DateTime {
    fn tag(&self) -> u8 {
        tag::DATE_TIME
    }

    fn field_count(&self) -> usize {
        3
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.seconds)?;
        packer.write_int(self.nanoseconds)?;
        packer.write_int(self.tz_offset_seconds)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.seconds),
            Value::Integer(self.nanoseconds),
            Value::Integer(self.tz_offset_seconds),
        ]
    }
}

/// A date and time in a named time zone, e.g. `Europe/Stockholm`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateTimeZoneId {
    pub seconds: i64,
    pub nanoseconds: i64,
    pub tz_id: String,
}

impl DateTimeZoneId {
    pub fn new(seconds: i64, nanoseconds: i64, tz_id: impl Into<String>) -> Self {
        DateTimeZoneId {
            seconds,
            nanoseconds,
            tz_id: tz_id.into(),
        }
    }

    /// Builds the value from a local wall-clock time in the named zone.
    pub fn from_local(local: NaiveDateTime, tz_id: impl Into<String>) -> Self {
        let local = local.and_utc();
        DateTimeZoneId::new(
            local.timestamp(),
            i64::from(local.timestamp_subsec_nanos()),
            tz_id,
        )
    }
}

impl StructureType for DateTimeZoneId {
    fn tag(&self) -> u8 {
        tag::DATE_TIME_ZONE_ID
    }

    fn field_count(&self) -> usize {
        3
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.seconds)?;
        packer.write_int(self.nanoseconds)?;
        packer.write_string(&self.tz_id)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.seconds),
            Value::Integer(self.nanoseconds),
            Value::String(self.tz_id.clone()),
        ]
    }
}

/// A date and time without a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalDateTime {
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl LocalDateTime {
    pub fn new(seconds: i64, nanoseconds: i64) -> Self {
        LocalDateTime {
            seconds,
            nanoseconds,
        }
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        let dt = dt.and_utc();
        LocalDateTime::new(dt.timestamp(), i64::from(dt.timestamp_subsec_nanos()))
    }
}

impl StructureType for LocalDateTime {
    fn tag(&self) -> u8 {
        tag::LOCAL_DATE_TIME
    }

    fn field_count(&self) -> usize {
        2
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.seconds)?;
        packer.write_int(self.nanoseconds)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.seconds),
            Value::Integer(self.nanoseconds),
        ]
    }
}

/// An amount of time split into calendar and clock components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Duration {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl Duration {
    pub fn new(months: i64, days: i64, seconds: i64, nanoseconds: i64) -> Self {
        Duration {
            months,
            days,
            seconds,
            nanoseconds,
        }
    }
}

impl From<chrono::Duration> for Duration {
    fn from(delta: chrono::Duration) -> Self {
        Duration::new(
            0,
            0,
            delta.num_seconds(),
            i64::from(delta.subsec_nanos()),
        )
    }
}

impl StructureType for Duration {
    fn tag(&self) -> u8 {
        tag::DURATION
    }

    fn field_count(&self) -> usize {
        4
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.months)?;
        packer.write_int(self.days)?;
        packer.write_int(self.seconds)?;
        packer.write_int(self.nanoseconds)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.months),
            Value::Integer(self.days),
            Value::Integer(self.seconds),
            Value::Integer(self.nanoseconds),
        ]
    }
}
