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

use egid::fields::{governorates, Gender};
use egid::{decode, Error};
use proptest::prelude::*;

fn valid_id() -> impl Strategy<Value = String> {
    let codes: Vec<&str> = governorates().map(|(code, _)| code).collect();
    (
        prop::sample::select(vec!['2', '3']),
        0u8..100,
        1u8..=12,
        1u8..=31,
        prop::sample::select(codes),
        0u16..10000,
        0u8..10,
    )
        .prop_map(|(century, year, month, day, code, order, check)| {
            format!("{century}{year:02}{month:02}{day:02}{code}{order:04}{check}")
        })
}

proptest! {
    #[test]
    fn wrong_length_is_invalid_format(s in "[0-9]{0,13}|[0-9]{15,24}") {
        prop_assert_eq!(decode(&s), Err(Error::InvalidFormat));
    }

    #[test]
    fn non_digit_is_invalid_format(head in "[0-9]{0,13}", c in "[^0-9]", tail in "[0-9]{0,13}") {
        let s = format!("{head}{c}{tail}");
        prop_assert_eq!(decode(&s), Err(Error::InvalidFormat));
    }

    #[test]
    fn unknown_century_digit(first in "[014-9]", rest in "[0-9]{13}") {
        let s = format!("{first}{rest}");
        let digit = first.chars().next().unwrap();
        prop_assert_eq!(decode(&s), Err(Error::InvalidCentury { digit }));
    }

    #[test]
    fn fields_follow_offsets(id in valid_id()) {
        let record = decode(&id).unwrap();
        let prefix = if id.starts_with('2') { "19" } else { "20" };

        prop_assert_eq!(record.birth_date.year, format!("{prefix}{}", &id[1..3]));
        prop_assert_eq!(record.birth_date.month, &id[3..5]);
        prop_assert_eq!(record.birth_date.day, &id[5..7]);
        prop_assert_eq!(record.region.code, &id[7..9]);
        prop_assert_eq!(record.personal_info.order, &id[9..13]);
    }

    #[test]
    fn gender_follows_parity(id in valid_id()) {
        let record = decode(&id).unwrap();
        let last = id.as_bytes()[12] - b'0';
        prop_assert_eq!(record.personal_info.gender == Gender::Female, last % 2 == 0);
    }

    #[test]
    fn decoding_is_deterministic(s in "[0-9]{14}") {
        prop_assert_eq!(decode(&s), decode(&s));
    }
}
