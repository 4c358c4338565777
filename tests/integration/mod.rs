//! Integration tests module
//!
//! End-to-end tests for the providers and the binfetch CLI, run against
//! wiremock servers standing in for GitHub and generic download hosts.

pub mod cli;
pub mod common;
pub mod generic;
pub mod github;
