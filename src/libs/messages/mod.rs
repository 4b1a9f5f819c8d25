//! User-facing messages and the macros that print them.
//!
//! ```rust,no_run
//! use taskcal::libs::messages::Message;
//! use taskcal::msg_success;
//!
//! msg_success!(Message::TaskCreated);
//! ```

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
