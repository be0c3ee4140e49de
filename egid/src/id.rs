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

use crate::fields::*;
use crate::{Error, Record};

/// A 14 digit Egyptian national ID.
///
/// The ID borrows the bytes it was parsed from. Each field reads its own
/// offsets:
///
/// ```text
/// 2 98 05 15 01 1234 5
/// | |  |  |  |  |    check digit
/// | |  |  |  |  birth order
/// | |  |  |  governorate
/// | |  |  day
/// | |  month
/// | year of century
/// century
/// ```
#[derive(Record, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct NationalId<'a> {
    pub birth_date: BirthDate<'a>,
    pub governorate: Governorate<'a>,
    pub birth_order: BirthOrder<'a>,
    pub check_digit: CheckDigit<'a>,
}

impl<'a> TryFrom<&'a str> for NationalId<'a> {
    type Error = Error;

    fn try_from(s: &'a str) -> Result<Self, Error> {
        Self::try_from(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIONAL_ID: &str = "29805150112345";

    #[test]
    fn national_id() {
        let id = NationalId::try_from(NATIONAL_ID).expect("ID should parse");

        assert_eq!(id.birth_date.century, Century::Nineteenth);
        assert_eq!(id.birth_date.year(), "1998");
        assert_eq!(id.birth_date.month.as_str(), "05");
        assert_eq!(id.birth_date.day.as_str(), "15");
        assert_eq!(id.governorate.code(), "01");
        assert_eq!(id.governorate.name(), "Cairo");
        assert_eq!(id.birth_order.as_str(), "1234");
        assert_eq!(id.birth_order.gender(), Gender::Female);
        assert_eq!(id.check_digit.as_u8(), 5);
    }

    #[test]
    fn rejects_wrong_length_before_fields() {
        // the century digit is invalid too but the length is checked first
        assert_eq!(
            NationalId::try_from("1980515011234"),
            Err(Error::InvalidFormat)
        );
        assert_eq!(
            NationalId::try_from("298051501123456"),
            Err(Error::InvalidFormat)
        );
    }

    #[test]
    fn reports_date_before_governorate() {
        assert_eq!(
            NationalId::try_from("29800157612345"),
            Err(Error::InvalidMonth { month: 0 })
        );
        assert_eq!(
            NationalId::try_from("29805157612345"),
            Err(Error::UnknownRegion {
                code: "76".to_string()
            })
        );
    }
}
