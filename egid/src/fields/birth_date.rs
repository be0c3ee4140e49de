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

use crate::record::Fields;
use crate::{Error, FixedField, Numeric};

use super::Century;

/// The last two digits of the year of birth.
pub type YearOfCentury<'a> = Numeric<'a, 2>;

/// Month of birth in the range 1 to 12.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Month<'a>(Numeric<'a, 2>);

impl<'a> Month<'a> {
    /// The month zero-padded as stored, e.g. `05`.
    pub fn as_str(&self) -> &'a str {
        self.0.as_str()
    }

    pub fn as_u8(&self) -> u8 {
        self.0.as_u8()
    }
}

impl<'a> FixedField<'a> for Month<'a> {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let month = Numeric::<2>::from_bytes(bytes)?;
        match month.as_u8() {
            1..=12 => Ok(Self(month)),
            month => Err(Error::InvalidMonth { month }),
        }
    }
}

/// Day of birth in the range 1 to 31.
///
/// The day is not checked against the length of the month, so the 31st is
/// accepted for every month.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Day<'a>(Numeric<'a, 2>);

impl<'a> Day<'a> {
    /// The day zero-padded as stored, e.g. `09`.
    pub fn as_str(&self) -> &'a str {
        self.0.as_str()
    }

    pub fn as_u8(&self) -> u8 {
        self.0.as_u8()
    }
}

impl<'a> FixedField<'a> for Day<'a> {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let day = Numeric::<2>::from_bytes(bytes)?;
        match day.as_u8() {
            1..=31 => Ok(Self(day)),
            day => Err(Error::InvalidDay { day }),
        }
    }
}

/// The date of birth at the start of a national ID.
///
/// Century, year, month and day are parsed in this order and the first
/// invalid one is reported.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct BirthDate<'a> {
    pub century: Century,
    pub year_of_century: YearOfCentury<'a>,
    pub month: Month<'a>,
    pub day: Day<'a>,
}

impl BirthDate<'_> {
    /// The four digit year of birth.
    pub fn year(&self) -> String {
        format!("{}{}", self.century.prefix(), self.year_of_century)
    }
}

impl<'a> FixedField<'a> for BirthDate<'a> {
    const LENGTH: usize = 7;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let mut fields = Fields::new(bytes);
        Ok(Self {
            century: fields.next()?,
            year_of_century: fields.next()?,
            month: fields.next()?,
            day: fields.next()?,
        })
    }
}
