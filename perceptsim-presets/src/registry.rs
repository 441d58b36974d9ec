//! Preset Registry for Named Screen Configurations
//!
//! Lets the UI offer named starting points ("showcase", "adverse_weather")
//! and lets a deployment add its own from JSON without recompiling.

use std::collections::HashMap;
use std::sync::RwLock;

use perceptsim_core::{ExperimentConfig, ExplorerConfig};

use crate::{PresetError, Screen, ScreenRequest, ScreenResponse};

/// Thread-safe map of preset name to screen configuration
pub struct PresetRegistry {
    presets: RwLock<HashMap<String, Screen>>,
}

impl PresetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            presets: RwLock::new(HashMap::new()),
        }
    }

    /// Register a preset under a new name
    pub fn register(&self, name: &str, screen: Screen) -> Result<(), PresetError> {
        let mut presets = self.presets.write().map_err(|_| PresetError::Unavailable)?;

        if presets.contains_key(name) {
            return Err(PresetError::AlreadyRegistered(name.to_string()));
        }
        presets.insert(name.to_string(), screen);
        log::debug!("registered preset {}", name);
        Ok(())
    }

    /// Register a preset from a request document
    pub fn register_json(&self, name: &str, json: &str) -> Result<(), PresetError> {
        let screen = ScreenRequest::from_json(json)?.to_screen()?;
        self.register(name, screen)
    }

    /// Look up a preset
    pub fn get(&self, name: &str) -> Result<Screen, PresetError> {
        let presets = self.presets.read().map_err(|_| PresetError::Unavailable)?;

        presets
            .get(name)
            .copied()
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Sorted preset names
    pub fn names(&self) -> Result<Vec<String>, PresetError> {
        let presets = self.presets.read().map_err(|_| PresetError::Unavailable)?;

        let mut names: Vec<String> = presets.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Remove a preset, returning it
    pub fn remove(&self, name: &str) -> Result<Screen, PresetError> {
        let mut presets = self.presets.write().map_err(|_| PresetError::Unavailable)?;

        presets
            .remove(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Score a preset
    pub fn evaluate(&self, name: &str) -> Result<ScreenResponse, PresetError> {
        self.get(name)?.evaluate()
    }

    /// Load the landing configurations of both screens
    pub fn load_defaults(&self) -> Result<(), PresetError> {
        self.register("explorer", Screen::Explorer(ExplorerConfig::default()))?;
        self.register("adverse_weather", Screen::Explorer(ExplorerConfig::adverse_weather()))?;
        self.register("experiment", Screen::Experiment(ExperimentConfig::default()))?;
        self.register("showcase", Screen::Experiment(ExperimentConfig::showcase()))?;
        Ok(())
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global preset registry with the default presets loaded
    pub static ref GLOBAL_PRESETS: PresetRegistry = {
        let registry = PresetRegistry::new();
        if let Err(e) = registry.load_defaults() {
            log::warn!("default presets not loaded: {}", e);
        }
        registry
    };
}
