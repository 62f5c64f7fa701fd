//! Date and time-span literals
//!
//! ODS stores dates as ISO 8601 date-times (`2024-01-02T03:04:05`, optionally
//! with an offset) and time values as ISO 8601 durations (`PT1H2M3S`). The
//! parsers here are lenient in what they return: anything unparseable is
//! `None`, never an error.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// Largest whole-second count a [`Duration`] can hold
const MAX_DURATION_SECS: i64 = i64::MAX / 1_000;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Parse an ISO 8601 date-time, with or without an offset
///
/// Values without an offset (including bare dates) are taken as UTC.
pub fn parse_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let naive = parse_naive_date_time(s)?;
    let utc = FixedOffset::east_opt(0)?;
    Some(utc.from_utc_datetime(&naive))
}

/// Parse a date-time or date that carries no offset
pub fn parse_naive_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Parse an ISO 8601 duration such as `PT1H2M3S`, `P1DT12H` or `-PT0.5S`
///
/// Years count as 365 days and months as 30 days. Only the seconds
/// component may carry a fraction.
pub fn parse_iso_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let (negative, rest) = split_sign(s);
    let rest = rest.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let mut secs: i64 = 0;
    let mut nanos: i64 = 0;
    let mut in_time = false;
    let mut number = String::new();
    let mut components = 0;

    for ch in rest.chars() {
        match ch {
            '0'..='9' | '.' => number.push(ch),
            'T' if !in_time && number.is_empty() => in_time = true,
            unit => {
                if number.is_empty() {
                    return None;
                }
                let scale = match (in_time, unit) {
                    (false, 'Y') => 365 * SECS_PER_DAY,
                    (false, 'M') => 30 * SECS_PER_DAY,
                    (false, 'W') => 7 * SECS_PER_DAY,
                    (false, 'D') => SECS_PER_DAY,
                    (true, 'H') => SECS_PER_HOUR,
                    (true, 'M') => SECS_PER_MINUTE,
                    (true, 'S') => 1,
                    _ => return None,
                };
                if unit == 'S' {
                    let (whole, frac) = split_seconds(&number)?;
                    secs = secs.checked_add(whole)?;
                    nanos = frac;
                } else {
                    let n: i64 = number.parse().ok()?;
                    secs = secs.checked_add(n.checked_mul(scale)?)?;
                }
                number.clear();
                components += 1;
            }
        }
    }

    // trailing digits without a unit, or a bare "PT"
    if !number.is_empty() || components == 0 {
        return None;
    }

    build_duration(negative, secs, nanos)
}

/// Parse a clock-style span: `[-][d.]hh:mm[:ss[.fffffff]]`, or a whole number of days
pub fn parse_clock_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let (negative, rest) = split_sign(s);
    if rest.is_empty() {
        return None;
    }

    if !rest.contains(':') {
        let days: i64 = rest.parse().ok()?;
        return build_duration(negative, days.checked_mul(SECS_PER_DAY)?, 0);
    }

    let mut parts = rest.split(':');
    let head = parts.next()?;
    let (days, hours) = match head.split_once('.') {
        Some((d, h)) => (d.parse::<i64>().ok()?, h.parse::<i64>().ok()?),
        None => (0, head.parse::<i64>().ok()?),
    };
    let minutes: i64 = parts.next()?.parse().ok()?;
    let (seconds, nanos) = match parts.next() {
        Some(sec) => split_seconds(sec)?,
        None => (0, 0),
    };
    if parts.next().is_some() || hours >= 24 || minutes >= 60 || seconds >= 60 {
        return None;
    }

    let secs = days
        .checked_mul(SECS_PER_DAY)?
        .checked_add(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)?;
    build_duration(negative, secs, nanos)
}

/// Format a span as `[-][d.]hh:mm:ss[.fffffff]`
pub fn format_duration(d: Duration) -> String {
    let negative = d < Duration::zero();
    let abs = if negative { -d } else { d };

    let total_secs = abs.num_seconds();
    let nanos = (abs - Duration::seconds(total_secs))
        .num_nanoseconds()
        .unwrap_or(0);

    let days = total_secs / SECS_PER_DAY;
    let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;

    let mut out = String::with_capacity(20);
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&format!("{}.", days));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", hours, minutes, seconds));
    let ticks = nanos / 100;
    if ticks > 0 {
        out.push_str(&format!(".{:07}", ticks));
    }
    out
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

/// Split `"12.345"` into whole seconds and nanoseconds
fn split_seconds(s: &str) -> Option<(i64, i64)> {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut nanos: i64 = 0;
    for (i, digit) in frac.chars().take(9).enumerate() {
        let d = digit.to_digit(10)? as i64;
        nanos += d * 10_i64.pow(8 - i as u32);
    }
    Some((whole, nanos))
}

fn build_duration(negative: bool, secs: i64, nanos: i64) -> Option<Duration> {
    if secs > MAX_DURATION_SECS {
        return None;
    }
    let d = Duration::seconds(secs).checked_add(&Duration::nanoseconds(nanos))?;
    Some(if negative { -d } else { d })
}
