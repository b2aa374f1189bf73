/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone};

/// Format used for dates sent to the API, e.g. `2026-10-18T00:00:00+02:00`
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Builds the bracketed filter key the API expects, e.g. `query[user_id]`
pub fn filter_key(field: &str) -> String {
    format!("query[{field}]")
}

/// Today at 00:00:00 in the local timezone
///
/// When midnight does not exist locally (DST gap) the first valid instant
/// after it is used.
pub fn today_midnight() -> DateTime<Local> {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .unwrap_or_else(Local::now)
}

/// Today at 00:00:00 in the local timezone, formatted as ISO-8601 with offset
pub fn today_midnight_iso8601() -> String {
    today_midnight().format(ISO_8601_FORMAT).to_string()
}
