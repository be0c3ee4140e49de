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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The input is not exactly 14 ASCII digits.
    InvalidFormat,
    InvalidCentury {
        digit: char,
    },
    InvalidMonth {
        month: u8,
    },
    InvalidDay {
        day: u8,
    },
    /// The governorate code has no entry in the governorate table.
    UnknownRegion {
        code: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => {
                write!(f, "national ID should be exactly 14 digits")
            }
            Self::InvalidCentury { digit } => {
                write!(f, "invalid birth century digit \"{digit}\" (should be 2 or 3)")
            }
            Self::InvalidMonth { month } => {
                write!(f, "invalid birth month {month:02}")
            }
            Self::InvalidDay { day } => {
                write!(f, "invalid birth day {day:02}")
            }
            Self::UnknownRegion { code } => {
                write!(f, "unknown governorate code: {code}")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_offending_values() {
        assert_eq!(
            Error::InvalidCentury { digit: '7' }.to_string(),
            "invalid birth century digit \"7\" (should be 2 or 3)"
        );
        assert_eq!(
            Error::InvalidMonth { month: 0 }.to_string(),
            "invalid birth month 00"
        );
        assert_eq!(
            Error::UnknownRegion {
                code: "76".to_string()
            }
            .to_string(),
            "unknown governorate code: 76"
        );
    }
}
