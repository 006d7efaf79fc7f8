//! Testing infrastructure for viewdeck integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions over catalog JSON output
//! - `fixtures`: Programmatic fixture-file construction
//! - `scripted`: A list service with per-operation failure injection

pub mod assertions;
pub mod fixtures;
pub mod scripted;
pub mod world;

pub use fixtures::{FixtureBuilder, ListFixture};
pub use scripted::{Op, ScriptedService};
pub use world::TestWorld;
