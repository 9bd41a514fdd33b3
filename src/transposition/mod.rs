//! Chromatic transposition of chart documents
//!
//! Every root and bass note is moved by the same interval and respelled
//! with the destination key's accidental style. Suffixes and bar layout
//! are carried over untouched.

pub mod chromatic;

pub use chromatic::{transpose_between_keys, Transpose};
