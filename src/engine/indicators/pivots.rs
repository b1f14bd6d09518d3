//! Daily pivot points.

use crate::types::{Candle, PivotLevels};
use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, Copy)]
struct DayAggregate {
    high: f64,
    low: f64,
    close: f64,
}

/// Classic daily pivots from the previous completed UTC calendar day:
/// `pivot = (H + L + C) / 3`, `r1 = 2P - L`, `s1 = 2P - H`,
/// `r2 = P + (H - L)`, `s2 = P - (H - L)`.
///
/// The last calendar day present is treated as partial and skipped;
/// with fewer than two distinct days the levels are undefined and
/// `None` is returned.
pub fn daily_pivots(candles: &[Candle]) -> Option<PivotLevels> {
    let mut days: Vec<((i32, u32, u32), DayAggregate)> = Vec::new();

    for c in candles {
        let datetime = DateTime::<Utc>::from_timestamp(c.time, 0)?;
        let key = (datetime.year(), datetime.month(), datetime.day());

        match days.last_mut() {
            Some((last_key, agg)) if *last_key == key => {
                agg.high = agg.high.max(c.high);
                agg.low = agg.low.min(c.low);
                agg.close = c.close;
            }
            _ => days.push((
                key,
                DayAggregate {
                    high: c.high,
                    low: c.low,
                    close: c.close,
                },
            )),
        }
    }

    if days.len() < 2 {
        return None;
    }

    let prev = days[days.len() - 2].1;
    let pivot = (prev.high + prev.low + prev.close) / 3.0;
    let range = prev.high - prev.low;

    Some(PivotLevels {
        pivot,
        r1: 2.0 * pivot - prev.low,
        s1: 2.0 * pivot - prev.high,
        r2: pivot + range,
        s2: pivot - range,
    })
}
