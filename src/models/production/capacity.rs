//! Throughput ("ton/jam") models for a production line.
//!
//! The computation lives in the internal `core` module. This module exposes
//! it as free functions and as [`twine_core::Model`] adapters.
//!
//! ```
//! use kapasitas_models::models::production::capacity::{
//!     HeightCapacity, HeightModelInput,
//! };
//! use twine_core::Model;
//!
//! let model = HeightCapacity::default();
//! let result = model
//!     .call(&HeightModelInput::from_shop_units(100.0, 10.0, 2.0, 1.5))
//!     .unwrap();
//!
//! assert!((result.per_hour_tons() - 34.56).abs() < 1e-9);
//! assert!((result.total_tons().unwrap() - 69.12).abs() < 1e-9);
//! ```

mod core;

pub use self::core::{
    Breakdown, CapacityResult, DEFAULT_TARE_KG, DryerModelConfig, DryerModelInput,
    HeightCorrection, HeightModelConfig, HeightModelInput, InputField, InvalidInput,
    MISSING_HEIGHT_MULTIPLIER, OutputConvention, REFERENCE_HEIGHT_M, compute_dryer_capacity,
    compute_height_capacity, label,
};

use twine_core::Model;

/// Height-correction model as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightCapacity {
    pub config: HeightModelConfig,
}

impl HeightCapacity {
    #[must_use]
    pub fn new(config: HeightModelConfig) -> Self {
        Self { config }
    }
}

impl Model for HeightCapacity {
    type Input = HeightModelInput;
    type Output = CapacityResult;
    type Error = InvalidInput;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute_height_capacity(input, &self.config)
    }
}

/// Moisture/drying model as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DryerCapacity {
    pub config: DryerModelConfig,
}

impl DryerCapacity {
    #[must_use]
    pub fn new(config: DryerModelConfig) -> Self {
        Self { config }
    }
}

impl Model for DryerCapacity {
    type Input = DryerModelInput;
    type Output = CapacityResult;
    type Error = InvalidInput;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute_dryer_capacity(input, &self.config)
    }
}
