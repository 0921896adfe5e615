/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     main.rs
 * Purpose:  Binary entry point for the tilde harness.
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * 
 * License:
 * This file is part of the TILDE language project.
 * 
 * TILDE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use clap::Parser;
use std::process::ExitCode;
use tilde::cli::{Cli, CliError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(CliError::Source { rendered, .. }) => {
            eprint!("{}", rendered);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
