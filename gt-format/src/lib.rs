//! gt Format - Core primitives for the graph-tool binary format
//!
//! This crate provides the fundamental decoding utilities for `.gt` files
//! with no I/O dependencies. It includes:
//!
//! - Magic numbers and constants
//! - A sequential byte cursor with a switchable byte order
//! - Error types
//! - Decode limits
//! - The file header
//! - Key and value type tags
//! - The decoded value model and non-fatal diagnostics

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod header;
pub mod limits;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use cursor::{ByteCursor, Endianness, IntWidth};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{GtError, Result};
pub use header::GraphHeader;
pub use limits::Limits;
pub use types::{neighbor_index_width, required_index_bits, KeyType, ValueType};
pub use value::{DecodedValue, UnusableValue, Value};
