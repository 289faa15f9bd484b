//! # CLI Module
//!
//! Command-line front end of the `serverenv` binary.
//!
//! ## Commands
//!
//! ### `fields`
//!
//! List every catalogue field with its target kind and accessor name:
//!
//! ```bash
//! serverenv fields
//! ```
//!
//! ### `dump`
//!
//! Print all catalogue fields with their typed values:
//!
//! ```bash
//! serverenv dump --fixture request.yaml --format text --redact full
//! ```
//!
//! Options:
//! - `--fixture <FILE>` - JSON/YAML fixture (default: process environment, or `SERVERENV_FIXTURE`)
//! - `--format <FORMAT>` - json, yaml, text (default: json)
//! - `--redact <LEVEL>` - none, credentials, full (default: credentials)
//! - `--present-only` - skip fields that are not set
//!
//! ### `get`
//!
//! Print one key, coerced, as JSON (`null` when absent):
//!
//! ```bash
//! serverenv get REQUEST_TIME --as int
//! ```

mod commands;


pub use commands::{coerce_key, run, run_cli, Cli, CoerceAs, Commands};
