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

/// Computes the value of a run of ASCII digits.
///
/// The caller must have checked that all bytes are digits.
macro_rules! parse_numeric {
    (1, $t:ty, $b:expr) => {
        ($b[0] & 0x0F) as $t
    };

    (2, $t:ty, $b:expr) => {
        ($b[0] & 0x0F) as $t * 10 + ($b[1] & 0x0F) as $t
    };

    (4, $t:ty, $b:expr) => {
        ($b[0] & 0x0F) as $t * 1000
            + ($b[1] & 0x0F) as $t * 100
            + ($b[2] & 0x0F) as $t * 10
            + ($b[3] & 0x0F) as $t
    };
}
