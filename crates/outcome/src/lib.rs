//! # Nebula Outcome
//!
//! A chainable `Ok`/`Err` value for error handling without early returns,
//! plus an async counterpart that keeps the same vocabulary while the value is
//! still being computed.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_outcome::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     wrap(|| raw.parse::<u16>())
//!         .map_err(|e| format!("invalid port {raw:?}: {e}"))
//!         .and_then(|port| if port == 0 { err("port 0 is reserved".to_string()) } else { ok(port) })
//! }
//!
//! assert_eq!(parse_port("8080"), ok(8080));
//! assert!(parse_port("0").is_err());
//! assert_eq!(parse_port("x").unwrap_or(80), 80);
//! ```
//!
//! ## Vocabulary
//!
//! - **Raw-value callbacks**: `map`, `catch`, `map_err`, `tap`, `tap_err`
//! - **Outcome-returning callbacks** (flattened): `and_then`, `or_else`
//! - **Terminal**: `match_with`, `unwrap`, `try_unwrap`, `unwrap_or`, `unwrap_or_else`
//! - **Async**: the same names on [`AsyncOutcome`], plus `*_async` variants
//!   taking callbacks that return futures
//!
//! Domain failures held by `Err` are inert data. They only become a raised
//! failure through an explicit `unwrap*` call, which keeps the original cause
//! inside [`UnwrapError`].

pub mod error;
pub mod factory;
pub mod future;
pub mod outcome;
pub mod tag;

pub use error::UnwrapError;
pub use factory::{err, from_future, ok, wrap, wrap_async};
pub use future::{AsyncOutcome, SharedOutcome};
pub use outcome::Outcome;
pub use tag::IntoOutcome;

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{
        AsyncOutcome, IntoOutcome, Outcome, SharedOutcome, UnwrapError, err, from_future, ok,
        wrap, wrap_async,
    };
}
