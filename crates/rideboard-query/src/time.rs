//! Departure-time parsing, in minutes since midnight.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `H:MM` / `HH:MM` with an optional `AM`/`PM` suffix anywhere in
/// the input, the way the original display strings carried them.
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)?").unwrap()
});

/// Parse a 24-hour `"HH:MM"` string into minutes since midnight.
///
/// Returns `None` for anything that is not two in-range numeric fields.
pub fn parse_hhmm(s: &str) -> Option<u32> {
  let (h, m) = s.trim().split_once(':')?;
  let hours: u32 = h.trim().parse().ok()?;
  let minutes: u32 = m.trim().parse().ok()?;
  (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Parse a clock string such as `"10:30 AM"` into minutes since midnight.
///
/// With a meridiem, `12 AM` normalizes to hour 0 and `12 PM` stays hour 12.
/// Without one, the hours are read as 24-hour time.
pub fn parse_clock(s: &str) -> Option<u32> {
  let captures = CLOCK_RE.captures(s)?;
  let mut hours: u32 = captures[1].parse().ok()?;
  let minutes: u32 = captures[2].parse().ok()?;
  if minutes >= 60 {
    return None;
  }

  match captures.get(3).map(|m| m.as_str().to_ascii_uppercase()) {
    Some(meridiem) => {
      // Hour 0 is tolerated: AM leaves it at midnight, PM pushes it to
      // 12:MM, as in the original's 12-hour normalization.
      if hours > 12 {
        return None;
      }
      if meridiem == "PM" && hours != 12 {
        hours += 12;
      } else if meridiem == "AM" && hours == 12 {
        hours = 0;
      }
    }
    None => {
      if hours >= 24 {
        return None;
      }
    }
  }

  Some(hours * 60 + minutes)
}
