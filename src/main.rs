// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Parse the repository reference the user gave us
// 3. Fetch the flat tree listing from the GitHub API (the only network call)
// 4. Rebuild the hierarchy and render either the tree or download commands
// 5. Exit with proper code (0 = success, 1 = user error, 2 = unexpected)
//
// Rust concepts used:
// - async/await: The tree fetch is the program's one suspension point
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod download; // src/download/ - curl command and raw URL generation
mod github; // src/github/ - reference parsing and tree fetching
mod tree; // src/tree/ - flat listing -> hierarchy reconstruction

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

use tree::TreeNode;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fetch failures and other unexpected errors land here
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success
//   Ok(1) = user error (bad reference, path not in tree)
//   Err   = unexpected error (network, GitHub API)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { repo, branch, json } => handle_tree(&repo, &branch, json).await,
        Commands::Get {
            repo,
            path,
            branch,
            urls,
        } => handle_get(&repo, path.as_deref(), &branch, urls).await,
    }
}

// Handles the 'tree' subcommand: fetch, rebuild, and render the hierarchy
async fn handle_tree(repo_input: &str, branch: &str, json: bool) -> Result<i32> {
    let Some(repo) = github::parse_repo(repo_input, branch) else {
        eprintln!(
            "Invalid GitHub repository. Please enter either 'owner/repo' or 'https://github.com/owner/repo'"
        );
        return Ok(1);
    };

    if !json {
        println!("🔍 Fetching {}/{} (branch: {})", repo.owner, repo.repo, repo.branch);
    }

    let response = github::fetch_repo_tree(&repo).await?;
    warn_if_truncated(&response);

    let forest = tree::build_forest(response.tree);

    if forest.is_empty() {
        println!("No files found in this repository");
        return Ok(0);
    }

    if json {
        // Machine-readable forest; chatter stays off stdout in this mode
        println!("{}", serde_json::to_string_pretty(&forest)?);
    } else {
        println!("\n📦 {}/{}", repo.owner, repo.repo);
        print_forest(&forest, 1);
    }

    Ok(0)
}

// Handles the 'get' subcommand: print download commands for a file, a
// folder, or (with no path) the whole repository
//
// Status lines go to stderr so stdout stays pipeable, e.g.:
//   gh-grab get owner/repo docs | sh
async fn handle_get(
    repo_input: &str,
    path: Option<&str>,
    branch: &str,
    urls_only: bool,
) -> Result<i32> {
    let Some(repo) = github::parse_repo(repo_input, branch) else {
        eprintln!(
            "Invalid GitHub repository. Please enter either 'owner/repo' or 'https://github.com/owner/repo'"
        );
        return Ok(1);
    };

    let response = github::fetch_repo_tree(&repo).await?;
    warn_if_truncated(&response);

    let forest = tree::build_forest(response.tree);

    // Work out which files the user is pointing at
    let files = match path {
        Some(path) => {
            let Some(node) = tree::find_node(&forest, path) else {
                eprintln!(
                    "Path '{}' not found in {}/{} (branch: {})",
                    path, repo.owner, repo.repo, repo.branch
                );
                return Ok(1);
            };
            download::collect_files(node)
        }
        // No path given: everything in the repository
        None => forest.iter().flat_map(download::collect_files).collect(),
    };

    if files.is_empty() {
        eprintln!("No downloadable files at the selected path");
        return Ok(0);
    }

    eprintln!("📄 {} file(s)", files.len());

    for file in &files {
        if urls_only {
            println!("{}", download::raw_file_url(&repo, file));
        } else {
            println!("{}", download::curl_command(&repo, file));
        }
    }

    Ok(0)
}

// Prints a truncation warning when GitHub cut the listing short
//
// The API silently truncates very large repositories; pretending the partial
// tree is complete would be worse than saying so.
fn warn_if_truncated(response: &github::TreeResponse) {
    if response.truncated {
        eprintln!(
            "⚠️  Warning: GitHub truncated the listing; this tree is incomplete"
        );
    }
}

// Prints the forest as an indented tree with type icons
fn print_forest(nodes: &[TreeNode], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        let icon = if node.is_dir() { "📁" } else { "📄" };
        println!("{}{} {}", indent, icon, node.name);

        if let Some(children) = &node.children {
            print_forest(children, depth + 1);
        }
    }
}