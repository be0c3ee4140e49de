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

use crate::{Error, FixedField};

/// The century of birth encoded by the leading digit.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Century {
    /// Digit `2`, born 1900 to 1999.
    Nineteenth,
    /// Digit `3`, born 2000 to 2099.
    Twentieth,
}

impl Century {
    /// The two leading digits of a year in this century.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Nineteenth => "19",
            Self::Twentieth => "20",
        }
    }

    /// The century as it is spoken of, e.g. `1900s`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}00s", self.prefix())
    }
}

impl FixedField<'_> for Century {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.first() {
            Some(b'2') => Ok(Self::Nineteenth),
            Some(b'3') => Ok(Self::Twentieth),
            Some(&byte) => Err(Error::InvalidCentury { digit: byte as char }),
            None => Err(Error::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_century() {
        assert_eq!(Century::from_bytes(b"2"), Ok(Century::Nineteenth));
        assert_eq!(Century::from_bytes(b"3"), Ok(Century::Twentieth));
        assert_eq!(
            Century::from_bytes(b"4"),
            Err(Error::InvalidCentury { digit: '4' })
        );
    }

    #[test]
    fn labels_century() {
        assert_eq!(Century::Nineteenth.label(), "1900s");
        assert_eq!(Century::Twentieth.to_string(), "2000s");
    }
}
