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

use crate::{Error, FixedField, Numeric};

/// Governorate codes and their names, sorted by code.
const GOVERNORATES: [(&str, &str); 28] = [
    ("01", "Cairo"),
    ("02", "Alexandria"),
    ("03", "Port Said"),
    ("04", "Suez"),
    ("11", "Damietta"),
    ("12", "Dakahlia"),
    ("13", "Sharqia"),
    ("14", "Qalyubia"),
    ("15", "Kafr El Sheikh"),
    ("16", "Gharbia"),
    ("17", "Monufia"),
    ("18", "Beheira"),
    ("19", "Ismailia"),
    ("21", "Giza"),
    ("22", "Beni Suef"),
    ("23", "Fayoum"),
    ("24", "Minya"),
    ("25", "Assiut"),
    ("26", "Sohag"),
    ("27", "Qena"),
    ("28", "Aswan"),
    ("29", "Luxor"),
    ("31", "Red Sea"),
    ("32", "New Valley"),
    ("33", "Matrouh"),
    ("34", "North Sinai"),
    ("35", "South Sinai"),
    ("88", "Outside Egypt"),
];

/// Looks up the name of a governorate by its two digit code.
pub fn lookup_governorate(code: &str) -> Option<&'static str> {
    GOVERNORATES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| GOVERNORATES[i].1)
}

/// Returns all known governorates as `(code, name)` ordered by code.
pub fn governorates() -> impl Iterator<Item = (&'static str, &'static str)> {
    GOVERNORATES.iter().copied()
}

/// The governorate of birth, or `88` if born outside Egypt.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Governorate<'a> {
    code: Numeric<'a, 2>,
    name: &'static str,
}

impl<'a> Governorate<'a> {
    /// The two digit code as stored.
    pub fn code(&self) -> &'a str {
        self.code.as_str()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<'a> FixedField<'a> for Governorate<'a> {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let code = Numeric::<2>::from_bytes(bytes)?;
        match lookup_governorate(code.as_str()) {
            Some(name) => Ok(Self { code, name }),
            None => Err(Error::UnknownRegion {
                code: code.into(),
            }),
        }
    }
}
