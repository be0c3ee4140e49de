// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::{BirthDate, BirthOrder, Gender, Governorate};
use crate::record::{is_well_formed, RECORD_LENGTH};
use crate::{Error, NationalId};

/// The date of birth with every part kept as text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BirthDateInfo {
    /// The century, e.g. `1900s`.
    pub century: String,
    /// The four digit year.
    pub year: String,
    /// The zero-padded month.
    pub month: String,
    /// The zero-padded day.
    pub day: String,
}

impl From<&BirthDate<'_>> for BirthDateInfo {
    fn from(date: &BirthDate<'_>) -> Self {
        Self {
            century: date.century.label(),
            year: date.year(),
            month: date.month.as_str().to_owned(),
            day: date.day.as_str().to_owned(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionInfo {
    pub code: String,
    pub name: String,
}

impl From<&Governorate<'_>> for RegionInfo {
    fn from(gov: &Governorate<'_>) -> Self {
        Self {
            code: gov.code().to_owned(),
            name: gov.name().to_owned(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonalInfo {
    /// The birth order with leading zeros.
    pub order: String,
    pub gender: Gender,
}

impl From<&BirthOrder<'_>> for PersonalInfo {
    fn from(order: &BirthOrder<'_>) -> Self {
        Self {
            order: order.as_str().to_owned(),
            gender: order.gender(),
        }
    }
}

/// Everything decoded from a national ID.
///
/// The record owns its values and is only created from a fully valid ID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DecodedRecord {
    pub is_valid: bool,
    pub birth_date: BirthDateInfo,
    pub region: RegionInfo,
    pub personal_info: PersonalInfo,
}

impl From<&NationalId<'_>> for DecodedRecord {
    fn from(id: &NationalId<'_>) -> Self {
        Self {
            is_valid: true,
            birth_date: BirthDateInfo::from(&id.birth_date),
            region: RegionInfo::from(&id.governorate),
            personal_info: PersonalInfo::from(&id.birth_order),
        }
    }
}

/// Writes the record as a console report with three sections.
impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = &self.birth_date;
        let region = &self.region;
        let info = &self.personal_info;

        writeln!(f, "=== Birth Date Information ===")?;
        writeln!(f, "Person born in {}", date.century)?;
        writeln!(f, "Year of birth: {}", date.year)?;
        writeln!(f, "Month of birth: {}", date.month)?;
        writeln!(f, "Day of birth: {}", date.day)?;

        writeln!(f, "\n=== Governorate Information ===")?;
        writeln!(f, "Governorate: {} (code: {})", region.name, region.code)?;

        writeln!(f, "\n=== Birth Order and Gender Information ===")?;
        writeln!(f, "Birth Order Number: {}", info.order)?;
        write!(f, "Gender: {}", info.gender)
    }
}

/// Returns `true` if the input is exactly 14 ASCII digits.
///
/// No whitespace, signs or separators are accepted.
pub fn validate(id: &str) -> bool {
    is_well_formed(id.as_bytes())
}

/// Decodes a national ID.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the input is not 14 digits, otherwise
/// the error of the first invalid field: century, month, day and at last the
/// governorate.
///
/// # Examples
///
/// ```
/// use egid::fields::Gender;
///
/// # fn main() -> Result<(), egid::Error> {
/// let record = egid::decode("29805150112345")?;
///
/// assert_eq!(record.birth_date.year, "1998");
/// assert_eq!(record.region.name, "Cairo");
/// assert_eq!(record.personal_info.gender, Gender::Female);
/// #     Ok(())
/// # }
/// ```
pub fn decode(input: &str) -> Result<DecodedRecord, Error> {
    let id = NationalId::try_from(input)
        .inspect_err(|err| debug!("rejected national ID: {err}"))?;
    trace!("decoded national ID {id:?}");
    Ok(DecodedRecord::from(&id))
}

/// Filters user input down to what may become a national ID.
///
/// Every character that is not an ASCII digit is dropped and at most 14
/// digits are kept.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(RECORD_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_format() {
        assert!(validate("29805150112345"));
        assert!(validate("00000000000000"));
        assert!(!validate(""));
        assert!(!validate("2980515011234"));
        assert!(!validate("298051501123456"));
        assert!(!validate("2980515011234a"));
        assert!(!validate(" 2980515011234"));
        assert!(!validate("+2980515011234"));
        assert!(!validate("2980-515-01123"));
    }

    #[test]
    fn decodes_record() {
        let record = decode("30012312101233").expect("ID should decode");

        assert_eq!(
            record,
            DecodedRecord {
                is_valid: true,
                birth_date: BirthDateInfo {
                    century: "2000s".to_string(),
                    year: "2000".to_string(),
                    month: "12".to_string(),
                    day: "31".to_string(),
                },
                region: RegionInfo {
                    code: "21".to_string(),
                    name: "Giza".to_string(),
                },
                personal_info: PersonalInfo {
                    order: "0123".to_string(),
                    gender: Gender::Male,
                },
            }
        );
    }

    #[test]
    fn displays_report() {
        let record = decode("29801010112345").expect("ID should decode");

        assert_eq!(
            record.to_string(),
            "=== Birth Date Information ===\n\
             Person born in 1900s\n\
             Year of birth: 1998\n\
             Month of birth: 01\n\
             Day of birth: 01\n\
             \n\
             === Governorate Information ===\n\
             Governorate: Cairo (code: 01)\n\
             \n\
             === Birth Order and Gender Information ===\n\
             Birth Order Number: 1234\n\
             Gender: Female"
        );
    }

    #[test]
    fn sanitizes_input() {
        assert_eq!(sanitize("2980-5150-1123-45"), "29805150112345");
        assert_eq!(sanitize("2980515011234567"), "29805150112345");
        assert_eq!(sanitize("abc"), "");
        assert_eq!(sanitize("٢٩٨"), "");
    }
}
