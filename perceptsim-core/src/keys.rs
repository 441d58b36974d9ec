//! Enumerated configuration keys
//!
//! Every categorical control on a simulator screen draws from one of these
//! enums. The tables are indexed by them, so a lookup inside the engine is
//! total; the only place an unknown key can appear is string parsing at the
//! presentation boundary.

use core::fmt;
use core::str::FromStr;

use crate::errors::{KeyDomain, ScoringError};

macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $domain:expr, {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in table order
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Number of variants
            pub const COUNT: usize = Self::ALL.len();

            /// Stable lowercase key used by the presentation layer
            pub fn key(&self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            /// Row/column index into the lookup tables
            pub fn index(&self) -> usize {
                *self as usize
            }
        }

        impl FromStr for $name {
            type Err = ScoringError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($key) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(ScoringError::UnknownKey { domain: $domain })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

key_enum! {
    /// Public benchmark a model is evaluated on
    Dataset, KeyDomain::Dataset, {
        /// Waymo Open Dataset
        Waymo => "waymo", "Waymo Open",
        /// nuScenes
        NuScenes => "nuscenes", "nuScenes",
        /// KITTI Vision Benchmark
        Kitti => "kitti", "KITTI",
    }
}

key_enum! {
    /// Detector architecture family
    ModelFamily, KeyDomain::Model, {
        /// Convolutional single-stage detector
        Cnn => "cnn", "CNN",
        /// Attention-based detector
        Transformer => "transformer", "Transformer",
        /// Point-cloud network on raw LiDAR points
        PointNet => "pointnet", "PointNet",
        /// Camera + LiDAR fusion detector
        Fusion => "fusion", "Sensor Fusion",
    }
}

key_enum! {
    /// Inference hardware tier
    ComputeTier, KeyDomain::Compute, {
        /// Embedded board
        Low => "low", "Low",
        /// Automotive-grade SoC
        Medium => "medium", "Medium",
        /// Datacenter GPU
        High => "high", "High",
    }
}

key_enum! {
    /// Weather or lighting condition
    Scenario, KeyDomain::Scenario, {
        /// Clear daylight
        Clear => "clear", "Clear",
        /// Rain
        Rain => "rain", "Rain",
        /// Fog
        Fog => "fog", "Fog",
        /// Night
        Night => "night", "Night",
        /// Snow
        Snow => "snow", "Snow",
    }
}
