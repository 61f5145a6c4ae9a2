//! # brdoc-cli: Command-Line Adapter for Brazilian Identifiers
//!
//! Provides the `brdoc` command. This crate is the adapter layer around
//! `brdoc-core`: it owns argument parsing, output rendering, and logging, and
//! passes raw strings to the core's pure functions.
//!
//! ## Subcommands
//!
//! - `brdoc mask`: Apply the CPF/CNPJ punctuation to partial or full input.
//! - `brdoc classify`: Report the kind implied by the digit count.
//! - `brdoc validate`: Check-digit validation with the rejection reason.
//! - `brdoc generate`: Random valid identifiers for test data.
//!
//! ```bash
//! brdoc mask 5299822
//! brdoc validate 529.982.247-25
//! brdoc --format json validate 11.222.333/0001-81
//! brdoc generate cnpj --count 5
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handler logic; handlers take parsed
//!   args and return an exit code.
//! - Results go to stdout, logs go to stderr.
//! - No identifier logic lives here; everything delegates to `brdoc-core`.

pub mod classify;
pub mod generate;
pub mod mask;
pub mod output;
pub mod validate;

/// Exit code for a successful command.
pub const EXIT_OK: u8 = 0;

/// Exit code when the input is not a valid identifier.
pub const EXIT_INVALID: u8 = 2;
