//! Dates, times and durations from chrono.
//!
//! Run with: cargo run --example temporal_values

use chrono::{FixedOffset, NaiveDate, TimeZone};
use serde::Serialize;
use serde_packstream::{encode, to_vec, Date, DateTime, Duration, LocalDateTime};
use std::error::Error;

#[derive(Serialize)]
struct Event {
    name: String,
    day: Date,
    starts: DateTime,
    length: Duration,
}

fn main() -> Result<(), Box<dyn Error>> {
    let day = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid date")?;
    let offset = FixedOffset::east_opt(2 * 3600).ok_or("invalid offset")?;
    let starts = offset
        .with_ymd_and_hms(2024, 6, 1, 18, 30, 0)
        .single()
        .ok_or("ambiguous time")?;

    let event = Event {
        name: "Launch".to_string(),
        day: Date::from(day),
        starts: DateTime::from(starts),
        length: Duration::from(chrono::Duration::minutes(90)),
    };

    println!("date:     {:02X?}", encode(&event.day)?);
    println!("datetime: {:02X?}", encode(&event.starts)?);
    println!("utc ns:   {}", event.starts.to_utc_nanoseconds());
    println!("duration: {:02X?}", encode(&event.length)?);

    let local = LocalDateTime::from(day.and_hms_opt(9, 0, 0).ok_or("invalid time")?);
    println!("local:    {:02X?}", encode(&local)?);

    println!("event:    {} bytes", to_vec(&event)?.len());
    Ok(())
}
