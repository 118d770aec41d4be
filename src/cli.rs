// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-grab",
    version = "0.1.0",
    about = "Browse a GitHub repository and generate curl download commands",
    long_about = "gh-grab lists the file tree of any public GitHub repository and prints \
                  ready-to-run curl commands that download single files or whole folders \
                  without cloning the repository."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (tree, get)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the file tree of a repository
    ///
    /// Example: gh-grab tree rust-lang/rust --branch stable
    Tree {
        /// Repository, as "owner/repo" or a full https://github.com/... URL
        repo: String,

        /// Branch to list (never inferred from a pasted URL)
        #[arg(long, default_value = "main")]
        branch: String,

        /// Output the tree as JSON instead of indented text
        #[arg(long)]
        json: bool,
    },

    /// Print curl commands that download a file or folder
    ///
    /// Example: gh-grab get rust-lang/rust src/tools --branch stable
    Get {
        /// Repository, as "owner/repo" or a full https://github.com/... URL
        repo: String,

        /// Path inside the repository; omit it to target everything
        path: Option<String>,

        /// Branch to download from (never inferred from a pasted URL)
        #[arg(long, default_value = "main")]
        branch: String,

        /// Print raw-content URLs only, without the curl wrapping
        #[arg(long)]
        urls: bool,
    },
}
