//! # Kapasitas Models
//!
//! Production-line capacity models that turn shop-floor measurements into
//! throughput in tons per hour ("ton/jam"), built on
//! [Twine](https://github.com/isentropic-dev/twine) and [`uom`].
//!
//! ## Crate layout
//!
//! - [`models`]: Capacity models, exposed as functions and as
//!   [`twine_core::Model`] implementations.
//! - [`support`]: Numeric constraints, unit extensions, locale handling and
//!   shift report formatting.
//!
//! The `kapasitas` binary (feature `cli`, on by default) is a small
//! terminal front end over both.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are public because the front end and downstream
//! tools need them, but their APIs are not stable.

pub mod models;
pub mod support;
