//! # Environment Module
//!
//! [`ServerEnvironment`] is the named-accessor facade over an
//! [`EnvView`](crate::view::EnvView): one method per well-known CGI field,
//! each returning the field's declared type.
//!
//! ## Usage
//!
//! ```rust
//! use serverenv::ServerEnvironment;
//!
//! let env = ServerEnvironment::new([
//!     ("REQUEST_METHOD", "GET"),
//!     ("HTTPS", "on"),
//!     ("argc", "3"),
//! ]);
//!
//! assert_eq!(env.request_method().as_deref(), Some("GET"));
//! assert!(env.is_https());
//! assert_eq!(env.argument_count(), Some(3));
//! assert_eq!(env.remote_address(), None);
//! ```
//!
//! ## Return types
//!
//! - Text fields return `Option<String>`
//! - `argc` and `REQUEST_TIME` return `Option<i64>`
//! - `REQUEST_TIME_FLOAT` returns `Option<f64>`
//! - `argv` returns `Vec<RawValue>`, empty when absent
//! - `HTTPS` returns `bool`, `false` when absent
//!
//! Keys outside the catalogue remain reachable through
//! [`ServerEnvironment::view`].

mod core;

pub use core::*;
