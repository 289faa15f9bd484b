//! # Value Module
//!
//! The value module defines the untyped value stored in a server environment
//! map and the coercion rules that turn it into a typed result.
//!
//! ## Overview
//!
//! A web server hands its environment over as a loose table: most entries are
//! strings, some runtimes store integers or floats (`REQUEST_TIME`,
//! `REQUEST_TIME_FLOAT`), and a few store lists (`argv`). Rather than relying
//! on implicit casts, every target type has one explicit conversion function:
//!
//! | Target  | Function      | Non-numeric string | `true` | empty list |
//! |---------|---------------|--------------------|--------|------------|
//! | text    | [`to_text`]   | itself             | `"1"`  | `"[]"`     |
//! | integer | [`to_int`]    | `0`                | `1`    | `0`        |
//! | float   | [`to_float`]  | `0.0`              | `1.0`  | `0.0`      |
//! | flag    | [`to_flag`]   | `true` unless `""` / `"0"` | `true` | `false` |
//! | list    | [`to_list`]   | `[s]`              | `[true]` | `[]`     |
//!
//! Numeric strings are read by their longest numeric prefix, so `"12abc"` is
//! `12` and `"1.5e2 ms"` is `150.0`.
//!
//! ## Absence
//!
//! These functions only ever see a *present* value. Whether a key is missing
//! (or holds `null`) is decided by [`crate::view::EnvView`], which maps that
//! case to `None`, an empty list, or `false` before coercion runs.

mod coerce;

pub use coerce::*;

/// Untyped value stored under a key in the source map.
pub type RawValue = serde_json::Value;
