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

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "egid")]
#[command(about = "Decode Egyptian national ID numbers")]
struct Cli {
    /// National IDs, 14 digits each
    #[arg(required = true)]
    ids: Vec<String>,
    /// Print each decoded record as JSON
    #[arg(long)]
    json: bool,
    /// Drop non-digits and keep the first 14 digits before decoding
    #[arg(long)]
    sanitize: bool,
}

impl Cli {
    /// Applies the input filter if requested.
    fn input(&self, raw: &str) -> String {
        if self.sanitize {
            egid::sanitize(raw)
        } else {
            raw.to_owned()
        }
    }

    /// Decodes one ID into the text to print.
    fn render(&self, input: &str) -> Result<String, Box<dyn Error>> {
        debug!("decoding {} characters", input.chars().count());
        let record = egid::decode(input)?;

        if self.json {
            Ok(serde_json::to_string_pretty(&record)?)
        } else {
            Ok(format!("{record}\n"))
        }
    }

    /// Prints every ID and returns how many failed.
    fn run(&self) -> usize {
        let mut failed = 0;

        for raw in &self.ids {
            let input = self.input(raw);
            match self.render(&input) {
                Ok(out) => println!("{out}"),
                Err(e) => {
                    warn!("failed to decode national ID: {e}");
                    eprintln!("{input}: {e}");
                    failed += 1;
                }
            }
        }

        failed
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if Cli::parse().run() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
