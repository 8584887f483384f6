//! Closed-form capacity models for a production line.
//!
//! Two formula families are provided:
//!
//! - [`compute_height_capacity`]: weighed net material per unit time,
//!   corrected for the height of the powder pile feeding the line.
//! - [`compute_dryer_capacity`]: a moisture mass balance across a dryer,
//!   multiplied by the number of batch units filled per hour.
//!
//! Both are pure functions of their inputs and configuration. Invalid input
//! fails with [`InvalidInput`] before anything is computed.

mod breakdown;
mod dryer;
mod error;
mod height;
mod results;

pub use breakdown::{Breakdown, label};
pub use dryer::{DryerModelConfig, DryerModelInput, compute_dryer_capacity};
pub use error::{InputField, InvalidInput};
pub use height::{
    DEFAULT_TARE_KG, HeightCorrection, HeightModelConfig, HeightModelInput,
    MISSING_HEIGHT_MULTIPLIER, OutputConvention, REFERENCE_HEIGHT_M, compute_height_capacity,
};
pub use results::CapacityResult;
