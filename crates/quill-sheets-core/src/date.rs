//! Serial date numbers
//!
//! Spreadsheets store dates as a day count with the time of day in the
//! fractional part. Which day is day zero depends on the workbook's date
//! system.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Largest serial number with a calendar date (9999-12-31 in the 1900 system)
pub const MAX_SERIAL: f64 = 2_958_466.0;

/// Workbook date system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSystem {
    /// Serial 1 is 1900-01-01, with the fictitious 1900-02-29 at serial 60
    #[default]
    Date1900,
    /// Serial 0 is 1904-01-01
    Date1904,
}

impl DateSystem {
    /// Convert a serial number to a calendar date and time
    ///
    /// The time of day is rounded to the nearest millisecond.
    pub fn to_datetime(self, serial: f64) -> Result<NaiveDateTime> {
        if !serial.is_finite() || serial < 0.0 || serial >= MAX_SERIAL {
            return Err(Error::InvalidSerial(serial));
        }

        let days = serial.trunc() as i64;
        let millis = (serial.fract() * MS_PER_DAY).round() as i64;

        let epoch = match self {
            // Serials below 60 predate the phantom leap day
            DateSystem::Date1900 if days < 60 => NaiveDate::from_ymd_opt(1899, 12, 31),
            DateSystem::Date1900 => NaiveDate::from_ymd_opt(1899, 12, 30),
            DateSystem::Date1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
        }
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(Error::InvalidSerial(serial))?;

        epoch
            .checked_add_signed(Duration::days(days))
            .and_then(|dt| dt.checked_add_signed(Duration::milliseconds(millis)))
            .ok_or(Error::InvalidSerial(serial))
    }
}
