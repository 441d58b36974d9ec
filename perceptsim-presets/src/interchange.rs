//! Request and response documents exchanged with the presentation layer

use perceptsim_core::{
    ComputeTier, Dataset, ExperimentConfig, ExperimentSnapshot, ExplorerConfig, ExplorerSnapshot,
    ModelFamily, Scenario,
};
use serde::{Deserialize, Serialize};

use crate::PresetError;

/// Screen configuration as sent by the UI, with string keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenRequest {
    /// Datasets page
    Explorer {
        /// Dataset key
        dataset: String,
        /// Model family key
        model: String,
        /// Compute tier key, absent when the control is hidden
        #[serde(default)]
        compute: Option<String>,
        /// Scenario key
        #[serde(default = "clear_key")]
        scenario: String,
    },
    /// Results page
    Experiment {
        /// Dataset key
        dataset: String,
        /// Model family key
        model: String,
        /// Compute tier key
        compute: String,
        /// Noise slider, 0-100
        #[serde(default)]
        noise: f32,
        /// Accuracy slider, absent when hidden
        #[serde(default)]
        accuracy_slider: Option<f32>,
    },
}

fn clear_key() -> String {
    Scenario::Clear.key().to_string()
}

impl ScreenRequest {
    /// Parse a request document
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        serde_json::from_str(json).map_err(|e| PresetError::ParseError(e.to_string()))
    }

    /// Encode as a request document
    pub fn to_json(&self) -> Result<String, PresetError> {
        serde_json::to_string(self).map_err(|e| PresetError::SerializeError(e.to_string()))
    }

    /// Resolve string keys into a typed configuration
    pub fn to_screen(&self) -> Result<Screen, PresetError> {
        let screen = match self {
            Self::Explorer { dataset, model, compute, scenario } => {
                let mut config =
                    ExplorerConfig::new(dataset.parse::<Dataset>()?, model.parse::<ModelFamily>()?)
                        .with_scenario(scenario.parse::<Scenario>()?);
                if let Some(compute) = compute {
                    config = config.with_compute(compute.parse::<ComputeTier>()?);
                }
                Screen::Explorer(config)
            }
            Self::Experiment { dataset, model, compute, noise, accuracy_slider } => {
                let mut config = ExperimentConfig::new(
                    dataset.parse::<Dataset>()?,
                    model.parse::<ModelFamily>()?,
                    compute.parse::<ComputeTier>()?,
                )
                .with_noise(*noise);
                if let Some(slider) = accuracy_slider {
                    config = config.with_accuracy_slider(*slider);
                }
                Screen::Experiment(config)
            }
        };
        Ok(screen)
    }

    /// Resolve and score in one step
    pub fn evaluate(&self) -> Result<ScreenResponse, PresetError> {
        self.to_screen()?.evaluate()
    }
}

/// Typed configuration of either screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    /// Datasets page
    Explorer(ExplorerConfig),
    /// Results page
    Experiment(ExperimentConfig),
}

impl Screen {
    /// Score the configuration and build the screen's view state
    pub fn evaluate(&self) -> Result<ScreenResponse, PresetError> {
        let response = match self {
            Self::Explorer(config) => {
                ScreenResponse::Explorer(ExplorerSnapshot::evaluate(config)?)
            }
            Self::Experiment(config) => {
                ScreenResponse::Experiment(ExperimentSnapshot::evaluate(config)?)
            }
        };
        Ok(response)
    }
}

impl From<Screen> for ScreenRequest {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Explorer(c) => Self::Explorer {
                dataset: c.dataset.key().to_string(),
                model: c.model.key().to_string(),
                compute: c.compute.map(|tier| tier.key().to_string()),
                scenario: c.scenario.key().to_string(),
            },
            Screen::Experiment(c) => Self::Experiment {
                dataset: c.dataset.key().to_string(),
                model: c.model.key().to_string(),
                compute: c.compute.key().to_string(),
                noise: c.noise,
                accuracy_slider: c.accuracy_slider,
            },
        }
    }
}

/// View state returned to the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenResponse {
    /// Datasets page
    Explorer(ExplorerSnapshot),
    /// Results page
    Experiment(ExperimentSnapshot),
}

impl ScreenResponse {
    /// Encode as a response document
    pub fn to_json(&self) -> Result<String, PresetError> {
        serde_json::to_string(self).map_err(|e| PresetError::SerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perceptsim_core::{Grade, KeyDomain, ScoringError};

    #[test]
    fn parses_experiment_request() {
        let request = ScreenRequest::from_json(
            r#"{"screen":"experiment","dataset":"Waymo","model":"transformer","compute":"high","noise":20,"accuracy_slider":75}"#,
        )
        .unwrap();

        assert_eq!(request.to_screen().unwrap(), Screen::Experiment(ExperimentConfig::showcase()));
    }

    #[test]
    fn explorer_defaults_to_clear_without_compute() {
        let request = ScreenRequest::from_json(
            r#"{"screen":"explorer","dataset":"kitti","model":"pointnet"}"#,
        )
        .unwrap();

        let Screen::Explorer(config) = request.to_screen().unwrap() else {
            panic!("expected explorer screen");
        };
        assert_eq!(config.scenario, Scenario::Clear);
        assert_eq!(config.compute, None);
    }

    #[test]
    fn unknown_key_names_its_domain() {
        let request = ScreenRequest::from_json(
            r#"{"screen":"experiment","dataset":"waymo","model":"yolo","compute":"high"}"#,
        )
        .unwrap();

        assert!(matches!(
            request.evaluate(),
            Err(PresetError::Scoring(ScoringError::UnknownKey { domain: KeyDomain::Model }))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ScreenRequest::from_json(r#"{"screen":"results"}"#),
            Err(PresetError::ParseError(_))
        ));
        assert!(matches!(
            ScreenRequest::from_json("not json"),
            Err(PresetError::ParseError(_))
        ));
    }

    #[test]
    fn response_is_tagged_by_screen() {
        let response = Screen::Experiment(ExperimentConfig::default().with_noise(100.0))
            .evaluate()
            .unwrap();

        let ScreenResponse::Experiment(snapshot) = &response else {
            panic!("expected experiment response");
        };
        assert_eq!(snapshot.metrics.grade, Grade::from_accuracy(snapshot.metrics.accuracy));

        let value: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(value["screen"], "experiment");
        assert_eq!(value["metrics"]["fps"], snapshot.metrics.fps);
        assert!(value["scene"]["detections"].is_array());
    }

    #[test]
    fn typed_screen_exports_string_keys() {
        let request = ScreenRequest::from(Screen::Explorer(ExplorerConfig::adverse_weather()));
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(value["screen"], "explorer");
        assert_eq!(value["dataset"], "nuscenes");
        assert_eq!(value["scenario"], "snow");
        assert_eq!(value["compute"], "medium");
    }
}
