// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tagdex command-line interface.
//!
//! Every subcommand loads one catalog (`--catalog`, then `TAGDEX_CATALOG`,
//! then the embedded default) and answers from it. `--json` swaps the boxed
//! terminal output for machine-readable JSON on stdout.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tagdex::DEFAULT_SUGGESTION_LIMIT;

#[derive(Parser)]
#[command(
    name = "tagdex",
    about = "Keyword search and validation for a services catalog",
    version
)]
pub struct Cli {
    /// Catalog JSON file (array of services, or {"services": [...]})
    ///
    /// Defaults to the catalog embedded in the binary.
    #[arg(long, global = true, env = "TAGDEX_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search services by keyword or free text
    ///
    /// An exact keyword match wins outright; otherwise every service whose
    /// id, title, summary, keywords or projects contain the query is listed.
    /// An empty query lists the whole catalog.
    Search {
        /// Search query
        #[arg(default_value = "")]
        query: String,
    },

    /// Show one service and its projects
    Show {
        /// Service id
        id: String,
    },

    /// List every indexed keyword, sorted
    Keywords,

    /// Autocomplete keywords from a prefix
    Suggest {
        /// Keyword prefix
        partial: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },

    /// List every technology used across projects
    Technologies,

    /// List every project in the catalog
    Projects {
        /// Only projects whose tech stack includes this technology
        #[arg(long)]
        tech: Option<String>,
    },

    /// Show catalog statistics
    Stats,

    /// Validate the catalog and report errors and warnings
    ///
    /// Exits with status 1 when any error is found.
    Validate {
        /// Treat warnings as failures too
        #[arg(long)]
        strict: bool,
    },
}
