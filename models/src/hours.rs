// models/src/hours.rs

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ValidationError, ValidationResult};

/// A single day's opening interval, inclusive on both ends.
///
/// Wire and config form is the `"HH:MM-HH:MM"` string used by the clinic
/// reference data; parsing rejects malformed and inverted intervals so bad
/// hours surface when the directory loads, never as a silent "closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenInterval {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpenInterval {
    pub fn parse(value: &str) -> ValidationResult<Self> {
        let (open_str, close_str) = value
            .split_once('-')
            .ok_or_else(|| ValidationError::MalformedOpenInterval(value.to_string()))?;
        let open = NaiveTime::parse_from_str(open_str.trim(), "%H:%M")
            .map_err(|_| ValidationError::MalformedOpenInterval(value.to_string()))?;
        let close = NaiveTime::parse_from_str(close_str.trim(), "%H:%M")
            .map_err(|_| ValidationError::MalformedOpenInterval(value.to_string()))?;
        if open >= close {
            return Err(ValidationError::InvertedOpenInterval {
                open: open.format("%H:%M").to_string(),
                close: close.format("%H:%M").to_string(),
            });
        }
        Ok(Self { open, close })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.open <= time && time <= self.close
    }
}

impl fmt::Display for OpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.open.format("%H:%M"),
            self.close.format("%H:%M")
        )
    }
}

impl Serialize for OpenInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for OpenInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        OpenInterval::parse(&value).map_err(de::Error::custom)
    }
}

/// Per-weekday opening intervals; `None` means closed all day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHours {
    #[serde(default)]
    pub mon: Option<OpenInterval>,
    #[serde(default)]
    pub tue: Option<OpenInterval>,
    #[serde(default)]
    pub wed: Option<OpenInterval>,
    #[serde(default)]
    pub thu: Option<OpenInterval>,
    #[serde(default)]
    pub fri: Option<OpenInterval>,
    #[serde(default)]
    pub sat: Option<OpenInterval>,
    #[serde(default)]
    pub sun: Option<OpenInterval>,
}

impl WeeklyHours {
    pub fn interval_for(&self, weekday: Weekday) -> Option<&OpenInterval> {
        match weekday {
            Weekday::Mon => self.mon.as_ref(),
            Weekday::Tue => self.tue.as_ref(),
            Weekday::Wed => self.wed.as_ref(),
            Weekday::Thu => self.thu.as_ref(),
            Weekday::Fri => self.fri.as_ref(),
            Weekday::Sat => self.sat.as_ref(),
            Weekday::Sun => self.sun.as_ref(),
        }
    }

    pub fn is_open_at(&self, moment: NaiveDateTime) -> bool {
        use chrono::Datelike;
        self.interval_for(moment.weekday())
            .map(|interval| interval.contains(moment.time()))
            .unwrap_or(false)
    }
}
