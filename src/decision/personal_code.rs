use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const CODE_LENGTH: usize = 11;

/// Reasons an identifier is rejected before any credit logic runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonalCodeError {
    #[error("personal code must be 11 digits (found {0} characters)")]
    InvalidLength(usize),
    #[error("personal code may only contain digits")]
    NonDigit,
    #[error("unsupported century/sex marker '{0}'")]
    InvalidCenturyMarker(u8),
    #[error("personal code encodes an impossible birth date")]
    InvalidBirthDate,
}

/// Sex marker carried in the first digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Estonian personal identification code (`GYYMMDDSSSC`).
///
/// Validation covers the format only: length, digits, century marker, and a
/// real birth date. The trailing check digit is carried but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalCode {
    digits: [u8; CODE_LENGTH],
    birth_date: NaiveDate,
}

impl PersonalCode {
    pub fn parse(raw: &str) -> Result<Self, PersonalCodeError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length != CODE_LENGTH {
            return Err(PersonalCodeError::InvalidLength(length));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(trimmed.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(PersonalCodeError::NonDigit);
            }
            *slot = byte - b'0';
        }

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            other => return Err(PersonalCodeError::InvalidCenturyMarker(other)),
        };

        let year = century + i32::from(digits[1] * 10 + digits[2]);
        let month = u32::from(digits[3] * 10 + digits[4]);
        let day = u32::from(digits[5] * 10 + digits[6]);
        let birth_date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(PersonalCodeError::InvalidBirthDate)?;

        Ok(Self { digits, birth_date })
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn sex(&self) -> Sex {
        if self.digits[0] % 2 == 1 {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    /// Completed years of age on `today`. Returns 0 for dates before birth.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let birth = self.birth_date;
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Numeric value of the trailing `count` digits (serial number and check digit).
    pub fn trailing_number(&self, count: usize) -> u32 {
        let count = count.min(CODE_LENGTH);
        self.digits[CODE_LENGTH - count..]
            .iter()
            .fold(0, |acc, digit| acc * 10 + u32::from(*digit))
    }

    pub fn as_string(&self) -> String {
        self.digits.iter().map(|digit| char::from(b'0' + digit)).collect()
    }
}

impl fmt::Display for PersonalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for PersonalCode {
    type Err = PersonalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
