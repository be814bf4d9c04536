use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_HOURS: u8 = 23;
pub const MAX_MINUTES: u8 = 59;
pub const MAX_SECONDS: u8 = 59;

/// Inline message shown when any time component is out of range.
pub const TIME_LIMIT_MESSAGE: &str = "Preparation Time cannot exceed 23:59:59";
/// Message for input that is not a complete `HH:MM:SS` value.
pub const TIME_FORMAT_MESSAGE: &str = "Preparation Time must be in HH:MM:SS format";

/// Why a string could not become a [`PreparationTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparationTimeError {
    /// Not exactly `[0-9]{2}:[0-9]{2}:[0-9]{2}`.
    Format,
    /// Well-formed, but a component exceeds 23:59:59.
    OutOfRange,
}

impl fmt::Display for PreparationTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreparationTimeError::Format => f.write_str(TIME_FORMAT_MESSAGE),
            PreparationTimeError::OutOfRange => f.write_str(TIME_LIMIT_MESSAGE),
        }
    }
}

impl std::error::Error for PreparationTimeError {}

/// A time of day no later than 23:59:59, sent on the wire as `"HH:MM:SS"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PreparationTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl PreparationTime {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, PreparationTimeError> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES || seconds > MAX_SECONDS {
            return Err(PreparationTimeError::OutOfRange);
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Parse a complete masked value such as `"01:30:00"`.
    pub fn parse(s: &str) -> Result<Self, PreparationTimeError> {
        let mut parts = s.split(':');
        let mut next = || -> Result<u8, PreparationTimeError> {
            match parts.next() {
                Some(p) if p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit()) => {
                    p.parse().map_err(|_| PreparationTimeError::Format)
                }
                _ => Err(PreparationTimeError::Format),
            }
        };
        let (hours, minutes, seconds) = (next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(PreparationTimeError::Format);
        }
        Self::new(hours, minutes, seconds)
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl fmt::Display for PreparationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl From<PreparationTime> for String {
    fn from(t: PreparationTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for PreparationTime {
    type Error = PreparationTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}
