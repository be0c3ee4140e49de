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

//! Egyptian national ID decoder.
//!
//! A national ID is 14 digits that encode the date of birth, the governorate
//! of birth, a birth order number and a check digit. This crate parses the ID
//! into its [fields] without copying and [`decode`]s it into an owned
//! [`DecodedRecord`].
//!
//! # Examples
//!
//! ```
//! use egid::NationalId;
//!
//! # fn main() -> Result<(), egid::Error> {
//! let id = NationalId::try_from("30012312101233")?;
//!
//! let year = id.birth_date.year();
//! let governorate = id.governorate.name();
//! let gender = id.birth_order.gender();
//! println!("{gender}, born {year} in {governorate}"); // => "Male, born 2000 in Giza"
//! #     Ok(())
//! # }
//! ```
//!
//! The check digit is read but never verified and days are accepted up to
//! the 31st of any month.
//!
//! [fields]: crate::fields

#[macro_use]
mod macros;

mod decode;
mod error;
mod field;
mod id;
mod record;

// Re-export the derive macro for convenience
pub(crate) use egid_derive::Record;

pub mod fields;
pub use decode::{
    decode, sanitize, validate, BirthDateInfo, DecodedRecord, PersonalInfo, RegionInfo,
};
pub use error::Error;
pub use field::{FixedField, Numeric};
pub use id::NationalId;
pub use record::RECORD_LENGTH;
