//! Timestamp id minting.
//!
//! # Invariants
//! - Issued ids are ISO-8601 UTC timestamps with exactly three fractional
//!   digits and a `Z` suffix (`2026-10-17T09:30:00.123Z`).
//! - Issued ids are strictly increasing, so two creates within the same
//!   millisecond never collide.
//! - Past the last representable millisecond the timestamp is pinned and a
//!   zero-padded `#NNNNNN` counter keeps ids unique and ordered.

use crate::model::contact::{ContactId, OVERFLOW_SEPARATOR};
use log::warn;
use time::OffsetDateTime;

const NANOS_PER_MILLI: i128 = 1_000_000;
/// Latest four-digit-year id, as unix milliseconds and as text.
const MAX_ID_MILLIS: i128 = 253_402_300_799_999;
const MAX_ID_TEXT: &str = "9999-12-31T23:59:59.999Z";

/// Monotonic source of timestamp ids.
#[derive(Debug, Clone, Default)]
pub struct IdClock {
    last_issued_ms: Option<i128>,
    overflow_seq: u32,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an existing id so later ids sort after it.
    ///
    /// Ids that are not timestamps are ignored.
    pub fn observe(&mut self, id: &ContactId) {
        if let Some(created_at) = id.created_at() {
            let millis = unix_millis(created_at);
            let last = self.last_issued_ms.map_or(millis, |last| last.max(millis));
            self.last_issued_ms = Some(last);
        }
        if let Some(seq) = overflow_seq(id) {
            self.overflow_seq = self.overflow_seq.max(seq);
        }
    }

    /// Issues an id for the current wall-clock time.
    pub fn next_id(&mut self) -> ContactId {
        self.next_id_at(OffsetDateTime::now_utc())
    }

    /// Issues an id for `now`, bumped past the last issued millisecond.
    pub fn next_id_at(&mut self, now: OffsetDateTime) -> ContactId {
        let mut millis = unix_millis(now);
        if let Some(last) = self.last_issued_ms {
            if millis <= last {
                millis = last + 1;
            }
        }

        if millis > MAX_ID_MILLIS {
            return self.next_overflow_id();
        }
        match OffsetDateTime::from_unix_timestamp_nanos(millis * NANOS_PER_MILLI) {
            Ok(timestamp) => {
                self.last_issued_ms = Some(millis);
                ContactId::new(format_id(timestamp))
            }
            Err(_) => self.next_overflow_id(),
        }
    }

    fn next_overflow_id(&mut self) -> ContactId {
        self.last_issued_ms = Some(MAX_ID_MILLIS);
        self.overflow_seq += 1;
        warn!(
            "event=id_mint module=store status=clamped seq={}",
            self.overflow_seq
        );
        ContactId::new(format!(
            "{MAX_ID_TEXT}{OVERFLOW_SEPARATOR}{:06}",
            self.overflow_seq
        ))
    }
}

fn overflow_seq(id: &ContactId) -> Option<u32> {
    let (_, seq) = id.as_str().split_once(OVERFLOW_SEPARATOR)?;
    seq.parse().ok()
}

fn unix_millis(timestamp: OffsetDateTime) -> i128 {
    timestamp.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI)
}

fn format_id(timestamp: OffsetDateTime) -> String {
    let utc = timestamp.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.millisecond()
    )
}
