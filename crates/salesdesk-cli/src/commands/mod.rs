//! Command handlers.
//!
//! One module per subcommand. Handlers wire adapters into form services,
//! feed them raw field values, and translate outcomes into output lines and
//! exit codes. No parsing or validation happens here.

pub mod completions;
pub mod config;
pub mod department;
pub mod init;
pub mod seller;
