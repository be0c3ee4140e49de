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

use crate::Error;

/// A fixed-length field type.
///
/// This trait is implemented by all national ID fields. Each field is created
/// [`from_bytes`](FixedField::from_bytes) and stores a reference to those
/// bytes.
pub trait FixedField<'a>: Sized {
    /// The fixed length of this field in bytes.
    const LENGTH: usize;

    /// Parse this field from a byte slice starting at the field's offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte slice is too short or contains invalid data.
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error>;
}

/////////////////////////////////////////////////////////////////////////////
// Numeric Field
/////////////////////////////////////////////////////////////////////////////

/// A numeric field of exactly `N` ASCII digits.
///
/// The digits are kept as they are stored, leading zeros included. A field
/// has at least one digit; `Numeric<'_, 0>` fails to compile once it is
/// parsed.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a, const N: usize>(&'a [u8; N]);

macro_rules! numeric_impl {
    ($n:tt => $($method:ident : $t:ty),+) => {
        impl<'a> Numeric<'a, $n> {
            $(
                #[inline]
                pub fn $method(&self) -> $t {
                    parse_numeric!($n, $t, self.0)
                }
            )+
        }
    };
}

numeric_impl!(1 => as_u8: u8);
numeric_impl!(2 => as_u8: u8);
numeric_impl!(4 => as_u16: u16);

impl<'a, const N: usize> Numeric<'a, N> {
    const NOT_EMPTY: () = assert!(N > 0, "numeric field needs at least one digit");

    /// Returns the field as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        // only ASCII digits get past `from_bytes`
        std::str::from_utf8(self.0).unwrap_or("")
    }

    /// Returns the last digit of the field.
    #[inline]
    pub fn last_digit(&self) -> u8 {
        self.0[N - 1] & 0x0F
    }
}

impl<'a, const N: usize> FixedField<'a> for Numeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let () = Self::NOT_EMPTY;

        // 1. check if there are enough bytes
        let arr: &'a [u8; N] = bytes
            .get(..N)
            .and_then(|b| b.try_into().ok())
            .ok_or(Error::InvalidFormat)?;

        // 2. only digits make a number
        if arr.iter().all(u8::is_ascii_digit) {
            Ok(Self(arr))
        } else {
            Err(Error::InvalidFormat)
        }
    }
}

impl<const N: usize> fmt::Debug for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl<const N: usize> fmt::Display for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<const N: usize> From<Numeric<'_, N>> for String {
    fn from(n: Numeric<'_, N>) -> Self {
        n.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric() {
        let n = Numeric::<4>::from_bytes(b"0123").expect("digits should parse");
        assert_eq!(n.as_str(), "0123");
        assert_eq!(n.as_u16(), 123);
        assert_eq!(n.last_digit(), 3);

        let n = Numeric::<2>::from_bytes(b"07xx").expect("only two bytes are read");
        assert_eq!(n.as_u8(), 7);

        let n = Numeric::<1>::from_bytes(b"9").expect("digit should parse");
        assert_eq!(n.as_u8(), 9);
        assert_eq!(n.last_digit(), 9);
    }

    #[test]
    fn rejects_short_or_non_digit_bytes() {
        assert_eq!(Numeric::<2>::from_bytes(b"1"), Err(Error::InvalidFormat));
        assert_eq!(Numeric::<2>::from_bytes(b"1a"), Err(Error::InvalidFormat));
        assert_eq!(Numeric::<4>::from_bytes(b" 123"), Err(Error::InvalidFormat));
    }
}
