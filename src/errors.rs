//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`QuickMenuError`] covers all failure modes including:
//! - Malformed menu hierarchies (rejected at build time)
//! - Missing required components when assembling a [`QuickMenu`](crate::QuickMenu)
//! - Configuration loading errors
//!
//! None of these can occur once a menu has been built: the per-frame update
//! path is infallible.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quick_menu::errors::{QuickMenuError, Result};
//!
//! fn load_menu() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the quick menu.
#[derive(Error, Debug)]
pub enum QuickMenuError {
    // ========================================================================
    // Hierarchy Validation Errors
    // ========================================================================
    /// The hierarchy root has no children, so there is nothing to select.
    #[error("Menu root '{0}' has no entries")]
    EmptyRoot(String),

    /// A back entry must be a leaf: confirming it never descends.
    #[error("Back entry '{0}' must not have children")]
    BackNodeWithChildren(String),

    /// Entry names are rendered one per line.
    #[error("Invalid menu entry name {0:?}: names must be non-empty and single-line")]
    InvalidNodeName(String),

    /// The root is the menu itself and cannot navigate back.
    #[error("Menu root '{0}' cannot be a back entry")]
    BackRoot(String),

    /// A lookup by name or path found nothing.
    #[error("Menu entry not found: {0}")]
    NodeNotFound(String),

    // ========================================================================
    // Assembly Errors
    // ========================================================================
    /// A required component was not supplied to the builder.
    #[error("Quick menu is missing a required component: {0}")]
    MissingComponent(&'static str),

    /// A clip track would sample out of range.
    #[error("Invalid animation clip '{clip}': {reason}")]
    InvalidClip { clip: String, reason: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, QuickMenuError>`.
pub type Result<T> = std::result::Result<T, QuickMenuError>;
