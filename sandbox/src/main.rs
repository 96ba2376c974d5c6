// Copyright 2025 eraflo
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

// Quatra Sandbox
// Evaluates single quaternion operations from the command line.
// Run with: cargo run -p sandbox -- <command>

mod commands;
mod parse;

use anyhow::Result;
use clap::Parser;

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate quaternion operations", long_about = None)]
struct Args {
    /// Decimal places used when printing results
    #[arg(short, long, global = true, default_value_t = quatra_core::math::DEFAULT_DISPLAY_DIGITS)]
    digits: usize,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::debug!("Running {:?}", args.command);

    let output = args.command.run(args.digits)?;
    println!("{output}");
    Ok(())
}
