//! spmat - Sparse Integer Matrix Arithmetic
//!
//! This library pairs the pure [`spmat_core`] data model with the I/O
//! collaborators around it: a loader for the line-oriented text format, a
//! presenter that renders matrices back into that format, and an optional
//! JSON interchange form.
//!
//! ## Architecture
//!
//! The workspace follows a specification/implementation separation:
//!
//! - **spmat-core**: data model, arithmetic, and pure parsing/validation (no I/O)
//! - **spmat**: file loading, rendering, JSON, and the command-line driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{load_matrix, render};
//!
//! fn example() -> spmat::Result<()> {
//!     let a = load_matrix("a.txt")?;
//!     let b = load_matrix("b.txt")?;
//!     let product = a.multiply(&b)?;
//!     println!("{}", render(&product));
//!     Ok(())
//! }
//! ```
//!
//! ## Text format
//!
//! ```text
//! rows=3
//! cols=4
//! (0, 1, 5)
//! (2, 3, -2)
//! ```
//!
//! Blank lines are ignored; any other line that does not parse propagates
//! a format error to the caller.

// Re-export the core data model and error types
pub use spmat_core::{MatrixError, Operation, SparseMatrix};

pub mod error;
pub mod loader;
pub mod presenter;

#[cfg(feature = "serde")]
pub mod json;

pub use error::{Error, Result};
pub use loader::{load_matrix, load_matrix_with, parse_matrix, parse_matrix_with, LoadOptions};
pub use presenter::{render, write_matrix};

#[cfg(feature = "serde")]
pub use json::{from_json, to_json};
