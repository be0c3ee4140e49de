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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FixedField, Numeric};

/// Gender as encoded by the parity of the birth order's last digit.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "Female"),
            Self::Male => write!(f, "Male"),
        }
    }
}

/// The four digit sequence number of the birth registration.
///
/// This is an identifier and keeps its leading zeros.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct BirthOrder<'a>(Numeric<'a, 4>);

impl<'a> BirthOrder<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0.as_str()
    }

    /// Even last digits are female, odd ones male.
    pub fn gender(&self) -> Gender {
        if self.0.last_digit() % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl<'a> FixedField<'a> for BirthOrder<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Numeric::from_bytes(bytes).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_gender_from_last_digit() {
        let order = BirthOrder::from_bytes(b"1234").expect("order should parse");
        assert_eq!(order.as_str(), "1234");
        assert_eq!(order.gender(), Gender::Female);

        let order = BirthOrder::from_bytes(b"0017").expect("order should parse");
        assert_eq!(order.as_str(), "0017");
        assert_eq!(order.gender(), Gender::Male);

        let order = BirthOrder::from_bytes(b"0000").expect("order should parse");
        assert_eq!(order.gender(), Gender::Female);
    }

    #[test]
    fn displays_gender() {
        assert_eq!(Gender::Female.to_string(), "Female");
        assert_eq!(Gender::Male.to_string(), "Male");
    }
}
