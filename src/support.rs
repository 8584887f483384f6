//! Supporting utilities used by the capacity models and their front ends.

pub mod constraint;
pub mod locale;
pub mod report;
pub mod units;
