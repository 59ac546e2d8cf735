//! Static model registration table.
//!
//! The host discovers models by id and instantiates them through a factory
//! function. A plain table, no reflection.

use std::collections::HashMap;

use crate::{AttributeMap, ModelId, Result, Sensor, SensorError};

/// Factory building a boxed sensor from host attributes.
pub type SensorFactory = Box<dyn Fn(&AttributeMap) -> Result<Box<dyn Sensor>> + Send + Sync>;

/// Model id -> factory table.
///
/// # Examples
/// ```
/// use contracts::{ModelId, Registry};
///
/// let mut registry = Registry::new();
/// let model = ModelId::new("acme", "sensor", "noop");
/// assert!(!registry.contains(&model));
/// ```
#[derive(Default)]
pub struct Registry {
    factories: HashMap<ModelId, SensorFactory>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a model id.
    ///
    /// # Errors
    /// `DuplicateModel` if the id is already taken.
    pub fn register<F>(&mut self, model: ModelId, factory: F) -> Result<()>
    where
        F: Fn(&AttributeMap) -> Result<Box<dyn Sensor>> + Send + Sync + 'static,
    {
        if self.factories.contains_key(&model) {
            return Err(SensorError::DuplicateModel {
                model: model.to_string(),
            });
        }
        self.factories.insert(model, Box::new(factory));
        Ok(())
    }

    /// Instantiate a model from host attributes.
    ///
    /// Construction runs the model's own configuration extraction, so an
    /// invalid config fails here and no half-configured instance escapes.
    ///
    /// # Errors
    /// `ModelNotFound` for an unknown id; any factory error propagates.
    pub fn build(&self, model: &ModelId, attributes: &AttributeMap) -> Result<Box<dyn Sensor>> {
        let factory = self
            .factories
            .get(model)
            .ok_or_else(|| SensorError::ModelNotFound {
                model: model.to_string(),
            })?;
        factory(attributes)
    }

    /// Whether a factory is registered under the id.
    pub fn contains(&self, model: &ModelId) -> bool {
        self.factories.contains_key(model)
    }

    /// Registered model ids, in arbitrary order.
    pub fn models(&self) -> impl Iterator<Item = &ModelId> {
        self.factories.keys()
    }
}
