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

//! The fields of a national ID in the order they are stored.

use crate::Numeric;

mod birth_date;
mod birth_order;
mod century;
mod governorate;

pub use birth_date::{BirthDate, Day, Month, YearOfCentury};
pub use birth_order::{BirthOrder, Gender};
pub use century::Century;
pub use governorate::{governorates, lookup_governorate, Governorate};

/// The trailing verification digit. It is read but never checked.
pub type CheckDigit<'a> = Numeric<'a, 1>;
