//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `account.rs` — register/login/logout/whoami.
//! - `admin.rs` — moderation review/approve/remove and data export.
//! - `runtime.rs` — browse/show/post/edit/remove/rate/report/favorites/profile.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Persist and audit right after each successful mutation.
//! - Keep behavior and output schema stable.

pub mod account;
pub mod admin;
pub mod runtime;

pub use account::handle_account_commands;
pub use admin::handle_admin_commands;
pub use runtime::handle_runtime_commands;
