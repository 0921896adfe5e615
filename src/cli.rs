/*
 * ==========================================================================
 * TILDE - Source Text to Syntax Tree
 * ==========================================================================
 * 
 * File:     cli.rs
 * Purpose:  Command-line harness: reads a .tilde file, parses it and
 *           prints the AST (or token stream) as JSON.
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

use crate::diagnostics::DiagnosticPrinter;
use crate::error::TildeError;
use crate::lexer::tokenize;
use crate::parser::Parser;
use clap::Parser as ClapParser;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Parse a Tilde source file and print its syntax tree as JSON.
#[derive(Debug, ClapParser)]
#[command(name = "tilde", version, about)]
pub struct Cli {
    /// Source file to parse.
    #[arg(default_value = "app.tilde")]
    pub file: PathBuf,

    /// Print single-line JSON instead of indented JSON.
    #[arg(long)]
    pub compact: bool,

    /// Print the token stream instead of the syntax tree.
    #[arg(long)]
    pub tokens: bool,
}

/// Failures the harness can hit.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Already rendered as a diagnostic.
    #[error("{rendered}")]
    Source {
        error: TildeError,
        rendered: String,
    },

    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cli {
    /// Runs the harness and returns the text destined for stdout.
    pub fn run(&self) -> Result<String, CliError> {
        let path = self.file.display().to_string();
        let source = std::fs::read_to_string(&self.file).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;

        let outcome = if self.tokens {
            tokenize(&source).map(|tokens| self.to_json(&tokens))
        } else {
            Parser::new()
                .parse(&source)
                .map(|program| self.to_json(&program))
        };

        match outcome {
            Ok(json) => Ok(json?),
            Err(error) => {
                let rendered = DiagnosticPrinter::new(path, source).render(&error);
                Err(CliError::Source { error, rendered })
            }
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
    }
}
