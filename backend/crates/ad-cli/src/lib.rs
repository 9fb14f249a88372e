//! JSON-lines driver for the admin dashboard stores.
//!
//! The library half is what the `admin-board` binary and the integration
//! tests share: parse a request line, run it against a [`Session`], and
//! serialize the [`Response`].

pub mod cli;
pub mod command;
pub mod error;
pub mod error_codes;
pub mod logger;
pub mod response;
pub mod session;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use command::Command;
pub use error::{CliError, Result as CliErrorResult};
pub use response::{ErrorBody, Response};
pub use session::Session;
