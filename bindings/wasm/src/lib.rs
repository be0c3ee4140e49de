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

//! Browser bindings of the national ID decoder.
//!
//! The page filters the input field with [`sanitize`] on every keystroke and
//! hands the value to [`decode`], which logs a report to the console and
//! returns the record as a plain JavaScript object.

use egid::DecodedRecord;
use wasm_bindgen::prelude::*;
use web_sys::console;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Decodes a national ID into `{ isValid, birthDate, region, personalInfo }`.
///
/// Throws an `Error` with the reason if the ID is invalid.
#[wasm_bindgen]
pub fn decode(national_id: &str) -> Result<JsValue, JsError> {
    let record = egid::decode(national_id).map_err(|e| {
        console::error_1(&JsValue::from_str(&e.to_string()));
        JsError::from(e)
    })?;

    log_report(&record);
    Ok(serde_wasm_bindgen::to_value(&record)?)
}

/// Keeps only digits and at most 14 of them.
#[wasm_bindgen]
pub fn sanitize(value: &str) -> String {
    egid::sanitize(value)
}

/// Returns `true` if the value is exactly 14 digits.
#[wasm_bindgen(js_name = isWellFormed)]
pub fn is_well_formed(value: &str) -> bool {
    egid::validate(value)
}

fn log_report(record: &DecodedRecord) {
    for line in record.to_string().lines() {
        console::log_1(&JsValue::from_str(line));
    }
}
