//! # Contracts
//!
//! Frozen interface contracts between the host runtime and sensor models.
//! All business crates can only depend on this crate, reverse dependencies
//! are prohibited.
//!
//! ## Lifecycle Model
//! - The host constructs a model through the [`Registry`] and then drives it
//!   through [`Sensor::reconfigure`] and [`Sensor::get_readings`].
//! - Reconfiguration is serialized by the host against reads; reading calls
//!   may overlap with each other.

mod attributes;
mod error;
mod model;
mod readings;
mod registry;

pub use attributes::AttributeMap;
pub use error::{Result, SensorError};
pub use model::{ModelId, ReadingOptions, Sensor};
pub use readings::{ReadingValue, Readings};
pub use registry::{Registry, SensorFactory};
