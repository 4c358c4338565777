//! Core utilities shared by the binfetch library and CLI.

pub mod core;

pub use core::{BinError, BinResult};
