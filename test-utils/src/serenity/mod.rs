//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's gateway would deliver, with sensible defaults for
//! every field the bot does not look at.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_member, create_test_message};
//!
//! let alice = create_test_member(111, "alice", false, &[]);
//! let guild = create_test_guild(123456789, "Test Guild", &[alice]);
//! let message = create_test_message(1, 111, "hello there", Some(123456789));
//! ```
//!
//! # Available Factories
//!
//! - `user::user_json` - JSON for a Discord user, shared by the other factories
//! - `guild::create_test_guild` - Create Serenity Guild objects with members
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod guild;
pub mod member;
pub mod message;
pub mod user;

pub use guild::create_test_guild;
pub use member::create_test_member;
pub use message::{create_test_message, MessageBuilder};

/// Guild ID used by factories when the caller does not care.
pub const DEFAULT_GUILD_ID: u64 = 123456789;

/// Timestamp used by factories when the caller does not care.
pub const DEFAULT_TIMESTAMP: &str = "2024-01-01T12:00:00.000000+00:00";
