/*!
 * SRT timecodes.
 *
 * A `Timecode` holds hours, minutes, seconds and milliseconds. All
 * arithmetic goes through the total millisecond count and comes back
 * through `from_milliseconds`, which restores the canonical field ranges.
 */

use std::fmt;
use std::ops::{Add, Div};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

// @const: SRT timestamp regex (HH:MM:SS,mmm, any digit count per field)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+):([0-9]+):([0-9]+),([0-9]+)$").unwrap()
});

/// A point in time (or a duration) within a subtitle file
///
/// Fields built by hand may be out of their canonical ranges, e.g. 90
/// minutes. Every arithmetic result is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl Timecode {
    /// Create a timecode from raw fields
    pub fn new(hours: u64, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Total number of milliseconds
    pub fn to_milliseconds(&self) -> u64 {
        ((self.hours * 60 + u64::from(self.minutes)) * 60 + u64::from(self.seconds)) * MS_PER_SECOND
            + u64::from(self.milliseconds)
    }

    /// Same as `to_milliseconds`, but `None` on overflow
    pub fn checked_to_milliseconds(&self) -> Option<u64> {
        self.hours
            .checked_mul(60)?
            .checked_add(u64::from(self.minutes))?
            .checked_mul(60)?
            .checked_add(u64::from(self.seconds))?
            .checked_mul(MS_PER_SECOND)?
            .checked_add(u64::from(self.milliseconds))
    }

    /// Canonical decomposition of a millisecond count
    pub fn from_milliseconds(milliseconds: u64) -> Self {
        let hours = milliseconds / MS_PER_HOUR;
        let rest = milliseconds % MS_PER_HOUR;
        // Remaining components are bounded by 59, 59 and 999.
        Self {
            hours,
            minutes: (rest / MS_PER_MINUTE) as u32,
            seconds: ((rest % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
            milliseconds: (rest % MS_PER_SECOND) as u32,
        }
    }

    /// `self - other`, or `None` if `other` is later than `self`
    pub fn checked_sub(&self, other: &Timecode) -> Option<Timecode> {
        self.to_milliseconds()
            .checked_sub(other.to_milliseconds())
            .map(Self::from_milliseconds)
    }

    /// Truncating division, or `None` for a zero divisor
    pub fn checked_div(&self, divisor: u64) -> Option<Timecode> {
        self.to_milliseconds()
            .checked_div(divisor)
            .map(Self::from_milliseconds)
    }

    /// Parse an `HH:MM:SS,mmm` timestamp
    ///
    /// Each field must be one or more ASCII digits. Fields wider than two
    /// (or three) digits are accepted as long as they fit.
    pub fn parse(text: &str) -> Result<Self, SubtitleError> {
        let caps = TIMESTAMP_REGEX
            .captures(text)
            .ok_or_else(|| invalid_timestamp(text, "expected HH:MM:SS,mmm"))?;

        let hours: u64 = caps[1]
            .parse()
            .map_err(|_| invalid_timestamp(text, "hours out of range"))?;
        let small_field = |idx: usize, name: &str| -> Result<u32, SubtitleError> {
            caps[idx]
                .parse()
                .map_err(|_| invalid_timestamp(text, &format!("{} out of range", name)))
        };

        let timecode = Self {
            hours,
            minutes: small_field(2, "minutes")?,
            seconds: small_field(3, "seconds")?,
            milliseconds: small_field(4, "milliseconds")?,
        };

        if timecode.checked_to_milliseconds().is_none() {
            return Err(invalid_timestamp(text, "timestamp too large"));
        }

        Ok(timecode)
    }

    /// Format as `HH:MM:SS,mmm`
    pub fn format(&self) -> String {
        self.to_string()
    }
}

fn invalid_timestamp(value: &str, reason: &str) -> SubtitleError {
    SubtitleError::InvalidTimestamp {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

impl FromStr for Timecode {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Timecode {
    type Output = Timecode;

    fn add(self, other: Timecode) -> Timecode {
        Self::from_milliseconds(self.to_milliseconds() + other.to_milliseconds())
    }
}

/// Truncating division. Panics on a zero divisor, like integer division.
impl Div<u64> for Timecode {
    type Output = Timecode;

    fn div(self, divisor: u64) -> Timecode {
        Self::from_milliseconds(self.to_milliseconds() / divisor)
    }
}
