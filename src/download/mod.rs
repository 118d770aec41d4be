// src/download/mod.rs
// =============================================================================
// This module generates download artifacts from a built tree:
//
// - curl: raw-content URLs, single-file curl commands, and per-folder
//   command batches
//
// Nothing here ever performs a transfer; we only print commands for the
// user to run (or pipe) themselves.
// =============================================================================

mod curl;

pub use curl::{collect_files, curl_command, folder_commands, raw_file_url};
