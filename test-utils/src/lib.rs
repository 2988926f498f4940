//! Spunya Test Utils
//!
//! Shared testing utilities for the Spunya bot. The bot loads its roll populations
//! and reply catalog from a resources directory, and its event handlers consume
//! serenity models; this crate provides both sides for tests.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for laying out a temporary resources directory
//! - **TestContext**: The built environment, keeping the directory alive
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: Ready-made JSON for substat tables and reply catalogs
//! - **serenity**: Factories for serenity `Guild`, `Member` and `Message` objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[test]
//! fn loads_substats() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_substats(fixture::substat::table())
//!         .build()?;
//!
//!     let repo = SubstatRepository::new(test.resources_dir());
//!     // Load and assert...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
