//! Public models.
//!
//! Models are organized into domain-specific submodules. Each model keeps
//! its computation in an internal `core` submodule, and the public module
//! exposes that core through free functions and thin [`twine_core::Model`]
//! adapters.

pub mod production;
