#![no_std]

//! spmat-core - Sparse Integer Matrix Data Model
//!
//! This crate provides the core sparse matrix representation, the three
//! algebraic operations (add, subtract, multiply), and pure parsing and
//! validation helpers for the line-oriented text format. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod ops;
pub mod parse;
pub mod validate;

pub use error::*;
pub use matrix::*;
pub use parse::{parse_dimension, parse_triple};
pub use validate::validate_entry_bounds;
