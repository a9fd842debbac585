use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;

use crate::helpers::time::Clock;

const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// Northern-hemisphere season, three months each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// `month0` is 0 for January.
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

/// Calendar facts the copy generators key on. Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateContext {
    pub year: i32,
    /// 0 = January
    pub month: u32,
    pub month_name: String,
    pub quarter: u32,
    pub week: u32,
    pub season: Season,
}

impl DateContext {
    /// Calendar fields are taken in UTC, never the server's local zone.
    pub fn from_datetime(now: DateTime<Utc>) -> Self {
        let month = now.month0();
        Self {
            year: now.year(),
            month,
            month_name: now.format("%B").to_string(),
            quarter: month / 3 + 1,
            week: week_of_year(now),
            season: Season::from_month0(month),
        }
    }

    pub fn now(clock: &dyn Clock) -> Self {
        Self::from_datetime(clock.now())
    }
}

/// Started weeks since Jan 1 00:00, so Jan 1 is week 1 and Dec 31 can be week 53.
fn week_of_year(now: DateTime<Utc>) -> u32 {
    let elapsed = i64::from(now.ordinal0()) * 86_400 + i64::from(now.num_seconds_from_midnight());
    let week = (elapsed + SECONDS_PER_WEEK - 1) / SECONDS_PER_WEEK;
    week.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn seasons_follow_month_buckets() {
        assert_eq!(Season::from_month0(0), Season::Winter);
        assert_eq!(Season::from_month0(1), Season::Winter);
        assert_eq!(Season::from_month0(2), Season::Spring);
        assert_eq!(Season::from_month0(4), Season::Spring);
        assert_eq!(Season::from_month0(5), Season::Summer);
        assert_eq!(Season::from_month0(7), Season::Summer);
        assert_eq!(Season::from_month0(8), Season::Fall);
        assert_eq!(Season::from_month0(10), Season::Fall);
        assert_eq!(Season::from_month0(11), Season::Winter);
    }

    #[test]
    fn quarter_and_month_name() {
        let ctx = DateContext::from_datetime(at(2025, 4, 15, 12));
        assert_eq!(ctx.year, 2025);
        assert_eq!(ctx.month, 3);
        assert_eq!(ctx.month_name, "April");
        assert_eq!(ctx.quarter, 2);
        assert_eq!(ctx.season, Season::Spring);

        assert_eq!(DateContext::from_datetime(at(2025, 12, 1, 0)).quarter, 4);
        assert_eq!(DateContext::from_datetime(at(2025, 1, 1, 0)).quarter, 1);
    }

    #[test]
    fn week_counts_started_weeks() {
        // the very first instant of the year is still week 1
        assert_eq!(week_of_year(at(2025, 1, 1, 0)), 1);
        assert_eq!(week_of_year(at(2025, 1, 1, 1)), 1);
        assert_eq!(week_of_year(at(2025, 1, 7, 23)), 1);
        assert_eq!(week_of_year(at(2025, 1, 8, 0)), 1);
        assert_eq!(week_of_year(at(2025, 1, 8, 1)), 2);
        assert_eq!(week_of_year(at(2025, 12, 31, 12)), 53);
        assert_eq!(week_of_year(at(2024, 12, 31, 12)), 53);
    }

    #[test]
    fn offset_instants_use_the_utc_calendar() {
        // 01:00 on Jan 1 in UTC+3 is still Dec 31 in UTC
        let local = DateTime::parse_from_rfc3339("2025-01-01T01:00:00+03:00").unwrap();
        let ctx = DateContext::from_datetime(local.with_timezone(&Utc));

        assert_eq!(ctx.year, 2024);
        assert_eq!(ctx.month, 11);
        assert_eq!(ctx.quarter, 4);
        assert_eq!(ctx.week, 53);
    }
}
