// src/tree/mod.rs
// =============================================================================
// This module turns the flat GitHub listing into an owned hierarchy.
//
// Submodules:
// - build: flat entry list -> forest of TreeNode, plus path lookup
// =============================================================================

mod build;

pub use build::{build_forest, find_node, TreeNode};
