//! # View Module
//!
//! The view module provides [`EnvView`], an immutable snapshot of a server
//! environment map with typed, null-safe getters.
//!
//! ## Overview
//!
//! ```rust
//! use serde_json::json;
//! use serverenv::view::EnvView;
//!
//! let view = EnvView::new([
//!     ("REQUEST_TIME", json!("1700000000")),
//!     ("argv", json!("index.php")),
//! ]);
//!
//! assert_eq!(view.get_int("REQUEST_TIME"), Some(1_700_000_000));
//! assert_eq!(view.get_int("MISSING"), None);
//! assert_eq!(view.get_list("argv"), vec![json!("index.php")]);
//! assert_eq!(view["REQUEST_TIME"], json!("1700000000"));
//! ```
//!
//! ## Absence vs. falsy
//!
//! A missing field and a field holding `"0"` are different answers:
//! `get_int` returns `None` for the former and `Some(0)` for the latter.
//! Only [`EnvView::get_bool`] and [`EnvView::get_list`] collapse absence into
//! a default (`false` and `[]`).
//!
//! ## Read-only contract
//!
//! `EnvView` implements `Index<&str>` but not `IndexMut`. Code written
//! against the generic [`EnvTable`] protocol can try to `assign` or `unset`
//! through a view; both calls fail with [`ImmutableViewError`] and the
//! snapshot stays untouched.

mod core;
mod error;

pub use core::*;
pub use error::*;
