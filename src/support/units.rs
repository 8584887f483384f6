//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] types. Production lines
//! report throughput in kilograms or tons per hour rather than the SI base
//! unit of kilograms per second, so this module adds accessors for those.
//!
//! ```
//! use uom::si::{f64::{Mass, Time}, mass::kilogram, time::second};
//! use kapasitas_models::support::units::Throughput;
//!
//! let rate = Mass::new::<kilogram>(96.0) / Time::new::<second>(10.0);
//! assert!((rate.kilograms_per_hour() - 34_560.0).abs() < 1e-9);
//! assert!((rate.tons_per_hour() - 34.56).abs() < 1e-12);
//! ```

mod throughput;

pub use throughput::{Throughput, one_hour};
