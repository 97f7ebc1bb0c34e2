//! Time-of-day model.
//!
//! # Design
//!
//! A simulated day is a single working shift, so time is represented as
//! whole seconds since midnight rather than a calendar timestamp:
//!
//!   clock = hours * 3600 + minutes * 60 + seconds
//!
//! Integer seconds keep every arrival-time comparison exact.  Travel legs
//! are computed in floating-point miles and truncated to whole seconds once,
//! in [`ClockDuration::for_distance`], so no drift accumulates along a route.
//!
//! Values at or past 24:00:00 are representable: a vehicle held until the
//! end of the day may still compute an arrival after midnight, which simply
//! never compares below any valid query time.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

const SECS_PER_MINUTE: u32 = 60;
const SECS_PER_HOUR:   u32 = 3_600;

/// Absorbs binary representation error before truncation (e.g.
/// `3.8 * 200.0 = 759.999…`).
const TRUNCATION_EPSILON: f64 = 1e-9;

// ── ClockDuration ─────────────────────────────────────────────────────────────

/// An elapsed span of whole seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ClockDuration(pub u32);

impl ClockDuration {
    pub const ZERO: ClockDuration = ClockDuration(0);

    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    #[inline]
    pub const fn secs(self) -> u32 {
        self.0
    }

    /// Time needed to drive `miles` at `speed_mph`, truncated to whole
    /// seconds.
    ///
    /// Non-finite or non-positive inputs yield [`ClockDuration::ZERO`];
    /// callers validate the speed once at configuration time.
    pub fn for_distance(miles: f64, speed_mph: f64) -> Self {
        if !(miles.is_finite() && speed_mph.is_finite()) || miles <= 0.0 || speed_mph <= 0.0 {
            return Self::ZERO;
        }
        let secs = miles * f64::from(SECS_PER_HOUR) / speed_mph;
        Self((secs + TRUNCATION_EPSILON).floor() as u32)
    }
}

impl fmt::Display for ClockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ClockTime(self.0), f)
    }
}

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A time of day, in seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ClockTime(pub u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from components without range checks.  Intended for constants;
    /// use [`ClockTime::parse`] for user input.
    #[inline]
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)
    }

    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    #[inline]
    pub const fn secs(self) -> u32 {
        self.0
    }

    /// Split into `(hours, minutes, seconds)`.
    pub const fn hms(self) -> (u32, u32, u32) {
        (
            self.0 / SECS_PER_HOUR,
            (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE,
            self.0 % SECS_PER_MINUTE,
        )
    }

    /// Parse a 24-hour `H:MM:SS` / `HH:MM:SS` string.
    ///
    /// # Errors
    ///
    /// [`CoreError::TimeParse`] for a wrong number of components or a
    /// non-numeric component; [`CoreError::TimeOutOfRange`] when the hour
    /// exceeds 23 or minutes/seconds exceed 59.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let [h, m, sec] = parts.as_slice() else {
            return Err(CoreError::TimeParse(s.to_string()));
        };
        let hours   = component(h, s)?;
        let minutes = component(m, s)?;
        let seconds = component(sec, s)?;
        check_range("hour", hours, 23)?;
        check_range("minute", minutes, 59)?;
        check_range("second", seconds, 59)?;
        Ok(Self::from_hms(hours, minutes, seconds))
    }

    /// Parse a 12-hour deadline string such as `10:30 AM` or `9:00 pm`.
    pub fn parse_meridiem(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let (clock, suffix) = trimmed
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| CoreError::TimeParse(s.to_string()))?;
        let pm = match suffix.to_ascii_uppercase().as_str() {
            "AM" => false,
            "PM" => true,
            _ => return Err(CoreError::TimeParse(s.to_string())),
        };

        let parts: Vec<&str> = clock.trim().split(':').collect();
        let (hours, minutes, seconds) = match parts.as_slice() {
            [h, m] => (component(h, s)?, component(m, s)?, 0),
            [h, m, sec] => (component(h, s)?, component(m, s)?, component(sec, s)?),
            _ => return Err(CoreError::TimeParse(s.to_string())),
        };
        if hours == 0 {
            return Err(CoreError::TimeParse(s.to_string()));
        }
        check_range("hour", hours, 12)?;
        check_range("minute", minutes, 59)?;
        check_range("second", seconds, 59)?;

        let hours = match (hours, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Ok(Self::from_hms(hours, minutes, seconds))
    }

    /// Render as a 12-hour string (`10:30 AM`), seconds shown only when
    /// non-zero.
    pub fn to_meridiem(self) -> String {
        let (h, m, s) = self.hms();
        let h = h % 24;
        let suffix = if h < 12 { "AM" } else { "PM" };
        let h12 = match h % 12 {
            0 => 12,
            n => n,
        };
        if s == 0 {
            format!("{h12}:{m:02} {suffix}")
        } else {
            format!("{h12}:{m:02}:{s:02} {suffix}")
        }
    }
}

impl std::ops::Add<ClockDuration> for ClockTime {
    type Output = ClockTime;
    #[inline]
    fn add(self, rhs: ClockDuration) -> ClockTime {
        ClockTime(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for ClockTime {
    type Output = ClockDuration;
    /// Saturates at zero when `rhs` is later than `self`.
    #[inline]
    fn sub(self, rhs: ClockTime) -> ClockDuration {
        ClockDuration(self.0.saturating_sub(rhs.0))
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    /// Unpadded hours, padded minutes and seconds: `9:05:00`, `13:41:20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h}:{m:02}:{s:02}")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn component(part: &str, whole: &str) -> CoreResult<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::TimeParse(whole.to_string()));
    }
    part.parse::<u32>()
        .map_err(|_| CoreError::TimeParse(whole.to_string()))
}

fn check_range(component: &'static str, value: u32, max: u32) -> CoreResult<()> {
    if value > max {
        return Err(CoreError::TimeOutOfRange { component, value, max });
    }
    Ok(())
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}
