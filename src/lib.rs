//! # serverenv
//!
//! **serverenv** is a read-only, strongly-typed accessor layer over the
//! environment a web server exposes to a CGI-style script: protocol fields,
//! client address, request headers, authentication credentials and
//! path/script information.
//!
//! ## Overview
//!
//! Server runtimes hand this data over as a loose key-value table. Keys may
//! be missing, values may be strings, numbers or lists, and nothing stops a
//! caller from writing into it. serverenv captures the table once and gives
//! every well-known field a named accessor with a fixed return type:
//!
//! ```rust
//! use serde_json::json;
//! use serverenv::ServerEnvironment;
//!
//! let env = ServerEnvironment::new([
//!     ("REQUEST_METHOD", json!("GET")),
//!     ("REQUEST_TIME", json!(1_700_000_000)),
//!     ("HTTPS", json!("on")),
//!     ("argv", json!(["index.php", "--verbose"])),
//! ]);
//!
//! assert_eq!(env.request_method().as_deref(), Some("GET"));
//! assert_eq!(env.request_time(), Some(1_700_000_000));
//! assert!(env.is_https());
//! assert_eq!(env.arguments().len(), 2);
//! assert_eq!(env.remote_address(), None);
//! ```
//!
//! ## Architecture
//!
//! - **[`value`]** - the untyped [`RawValue`] and one coercion function per target type
//! - **[`view`]** - [`EnvView`], the immutable snapshot with typed getters and the
//!   read-only [`EnvTable`] protocol
//! - **[`fields`]** - the field catalogue; generates [`Field`] and the named accessors
//! - **[`environment`]** - [`ServerEnvironment`], the named-accessor facade
//! - **[`source`]** - populate a view from the process environment or a fixture file
//! - **[`dump`]** - render all fields as JSON/YAML/text with redaction
//! - **[`logging`]** - `tracing` subscriber setup for the `serverenv` binary
//! - **[`cli`]** - the `serverenv` command line
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Env as ServerEnvironment
//!     participant View as EnvView
//!     participant Coerce as value::to_*
//!
//!     Caller->>Env: request_time()
//!     Env->>View: get_int("REQUEST_TIME")
//!     View->>View: lookup, null counts as absent
//!     alt Absent
//!         View-->>Caller: None
//!     end
//!     View->>Coerce: to_int(&value)
//!     Coerce-->>Caller: Some(i64)
//! ```
//!
//! ## Absence
//!
//! A missing field is an ordinary input, not an error. Text, integer and
//! float fields return `None`; the argument list returns an empty `Vec`; the
//! `HTTPS` flag returns `false`. A field holding `"0"` is *not* absent:
//! `argument_count()` returns `Some(0)` for it.
//!
//! ## Immutability
//!
//! [`EnvView`] implements `Index<&str>` but never `IndexMut`. Generic code
//! using [`EnvTable`] can call `assign`/`unset` on a view; both fail with
//! [`ImmutableViewError`] and leave the snapshot unchanged.
//!
//! ## Command Line
//!
//! ```bash
//! # Every field of the current process environment, credentials masked
//! serverenv dump
//!
//! # A recorded request, as aligned text
//! serverenv dump --fixture request.yaml --format text --present-only
//!
//! # A single key, coerced
//! serverenv get REQUEST_TIME_FLOAT --as float
//! ```

pub mod cli;
pub mod dump;
pub mod environment;
pub mod fields;
pub mod logging;
pub mod source;
pub mod value;
pub mod view;

pub use environment::{FieldValue, ServerEnvironment};
pub use fields::{Field, FieldKind, Sensitivity};
pub use value::RawValue;
pub use view::{EnvTable, EnvView, ImmutableViewError, ViewOperation};
