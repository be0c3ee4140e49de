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

use crate::{Error, FixedField};

/// The fixed length of a national ID in bytes.
pub const RECORD_LENGTH: usize = 14;

/// Returns `true` if the bytes are exactly [`RECORD_LENGTH`] ASCII digits.
#[inline]
pub(crate) fn is_well_formed(bytes: &[u8]) -> bool {
    bytes.len() == RECORD_LENGTH && bytes.iter().all(u8::is_ascii_digit)
}

/// A fixed-width record type.
pub trait Record<'a>: Sized {
    /// Parse this record type from a field iterator.
    ///
    /// # Errors
    ///
    /// Returns the error of the first field that fails to parse.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this record type from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the bytes are not 14 digits or any
    /// error returned by [`parse`][Record::parse].
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        if is_well_formed(bytes) {
            Self::parse(Fields::new(bytes))
        } else {
            Err(Error::InvalidFormat)
        }
    }
}

pub struct Fields<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, index: 0 }
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        let field = F::from_bytes(self.bytes.get(self.index..).unwrap_or(&[]))?;
        self.index += F::LENGTH;
        Ok(field)
    }
}
