//! Error types for the scanner and its driver.
//!
//! This module defines:
//!
//! - `LexicalError`, the recoverable, line-scoped error a scan produces
//! - `ErrorImpl`, the two kinds of malformed input the scanner recognises
//! - `DriverError`, for I/O failures outside the scanner

pub mod errors;
