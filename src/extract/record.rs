// src/extract/record.rs
use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::column::FieldValue;
use super::row::RecordBuilder;
use crate::config::{JoinField, ResolveField};

/// One ranked swim as read from the report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwimmerResult {
    pub swimmer_id: String,
    pub swimmer_name: String,
    pub swimmer_age: u32,
    pub time: RaceTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultField {
    SwimmerId,
    SwimmerName,
    SwimmerAge,
    Time,
}

impl ResultField {
    pub fn name(self) -> &'static str {
        match self {
            ResultField::SwimmerId => "swimmer_id",
            ResultField::SwimmerName => "swimmer_name",
            ResultField::SwimmerAge => "swimmer_age",
            ResultField::Time => "time",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultValue {
    SwimmerId(String),
    SwimmerName(String),
    SwimmerAge(u32),
    Time(RaceTime),
}

impl FieldValue for ResultValue {
    type Field = ResultField;

    fn field(&self) -> ResultField {
        match self {
            ResultValue::SwimmerId(_) => ResultField::SwimmerId,
            ResultValue::SwimmerName(_) => ResultField::SwimmerName,
            ResultValue::SwimmerAge(_) => ResultField::SwimmerAge,
            ResultValue::Time(_) => ResultField::Time,
        }
    }
}

#[derive(Default)]
pub struct ResultBuilder {
    swimmer_id: Option<String>,
    swimmer_name: Option<String>,
    swimmer_age: Option<u32>,
    time: Option<RaceTime>,
}

impl RecordBuilder for ResultBuilder {
    type Value = ResultValue;
    type Record = SwimmerResult;

    fn set(&mut self, value: ResultValue) {
        match value {
            ResultValue::SwimmerId(v) => self.swimmer_id = Some(v),
            ResultValue::SwimmerName(v) => self.swimmer_name = Some(v),
            ResultValue::SwimmerAge(v) => self.swimmer_age = Some(v),
            ResultValue::Time(v) => self.time = Some(v),
        }
    }

    fn build(self) -> Result<SwimmerResult, &'static str> {
        use ResultField::*;
        Ok(SwimmerResult {
            swimmer_id: self.swimmer_id.ok_or(SwimmerId.name())?,
            swimmer_name: self.swimmer_name.ok_or(SwimmerName.name())?,
            swimmer_age: self.swimmer_age.ok_or(SwimmerAge.name())?,
            time: self.time.ok_or(Time.name())?,
        })
    }
}

impl ResolveField {
    /// Project the contribution of one record to a combined row.
    pub fn resolve(self, r: &SwimmerResult) -> Value {
        match self {
            ResolveField::Time => Value::String(r.time.to_string()),
            ResolveField::Seconds => Value::from(r.time.seconds()),
            ResolveField::Age => Value::from(r.swimmer_age),
            ResolveField::Id => Value::String(r.swimmer_id.clone()),
        }
    }
}

impl JoinField {
    pub fn field(self) -> ResultField {
        match self {
            JoinField::Name => ResultField::SwimmerName,
            JoinField::Id => ResultField::SwimmerId,
        }
    }

    pub fn key(self, r: &SwimmerResult) -> String {
        match self {
            JoinField::Name => r.swimmer_name.clone(),
            JoinField::Id => r.swimmer_id.clone(),
        }
    }
}

/* ---------- race time ---------- */

/// `M:SS,FF` – minutes, seconds, hundredths.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{2}),(\d{2})$").expect("valid time regex"));

/// Swim time, stored in hundredths of a second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RaceTime {
    hundredths: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a M:SS,FF time: {0:?}")]
pub struct ParseTimeError(pub String);

impl RaceTime {
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self { hundredths }
    }

    pub fn hundredths(self) -> u32 {
        self.hundredths
    }

    /// `60*minutes + seconds + fractional/100`
    pub fn seconds(self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }
}

impl FromStr for RaceTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s!(s));
        let caps = TIME_RE.captures(s.trim()).ok_or_else(err)?;

        let minutes: u32 = caps[1].parse().map_err(|_| err())?;
        let seconds: u32 = caps[2].parse().map_err(|_| err())?;
        let fraction: u32 = caps[3].parse().map_err(|_| err())?;
        if seconds >= 60 {
            return Err(err());
        }

        minutes
            .checked_mul(6000)
            .and_then(|m| m.checked_add(seconds * 100 + fraction))
            .map(RaceTime::from_hundredths)
            .ok_or_else(err)
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.hundredths / 6000;
        let s = (self.hundredths % 6000) / 100;
        let h = self.hundredths % 100;
        write!(f, "{m}:{s:02},{h:02}")
    }
}

impl Serialize for RaceTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
