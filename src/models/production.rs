//! Production-line models.
//!
//! Models in this domain turn shop-floor measurements (scale readings,
//! stopwatch times, moisture meter readings, pile heights) into throughput.

pub mod capacity;
