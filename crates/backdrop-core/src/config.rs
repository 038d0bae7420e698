use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("could not parse {field} from {raw:?}")]
    Parse { field: &'static str, raw: String },
}

/// Runtime tuning for one engine instance.
///
/// `Default` is the normal-motion profile; [`EngineConfig::reduced_motion`]
/// trims counts and slows the wheel ghosts. Neither changes how the engine is
/// wired, only the numbers it runs with.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub reduced_motion: bool,
    pub seed: Option<u64>,
    pub token_count: usize,
    pub glow_count: usize,
    pub gold_probability: f32,
    pub repel_radius: f32,
    pub repel_gain: f32,
    pub sparkle_burst: usize,
    pub sparkle_cap: usize,
    pub wheel_deltas: [f32; 2],
    pub wheel_alpha: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            seed: None,
            token_count: TOKEN_COUNT_NORMAL,
            glow_count: GLOW_COUNT_NORMAL,
            gold_probability: GOLD_PROBABILITY,
            repel_radius: REPEL_RADIUS,
            repel_gain: REPEL_GAIN,
            sparkle_burst: SPARKLE_BURST,
            sparkle_cap: SPARKLE_CAP,
            wheel_deltas: [WHEEL_DELTA_CW, WHEEL_DELTA_CCW],
            wheel_alpha: WHEEL_ALPHA,
        }
    }
}

impl EngineConfig {
    pub fn reduced_motion() -> Self {
        Self {
            reduced_motion: true,
            token_count: TOKEN_COUNT_REDUCED,
            glow_count: GLOW_COUNT_REDUCED,
            wheel_deltas: [WHEEL_DELTA_CW_REDUCED, WHEEL_DELTA_CCW_REDUCED],
            wheel_alpha: WHEEL_ALPHA_REDUCED,
            ..Self::default()
        }
    }

    /// Pick the profile matching the platform's motion preference.
    pub fn for_motion(reduced: bool) -> Self {
        if reduced {
            Self::reduced_motion()
        } else {
            Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.gold_probability) {
            return Err(ConfigError::OutOfRange {
                field: "gold_probability",
                value: self.gold_probability,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.repel_radius <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "repel_radius",
            });
        }
        if self.sparkle_burst == 0 {
            return Err(ConfigError::NotPositive {
                field: "sparkle_burst",
            });
        }
        if self.sparkle_cap < self.sparkle_burst {
            return Err(ConfigError::OutOfRange {
                field: "sparkle_cap",
                value: self.sparkle_cap as f32,
                min: self.sparkle_burst as f32,
                max: f32::INFINITY,
            });
        }
        // The two ghosts must keep counter-rotating.
        if self.wheel_deltas[0] <= 0.0 || self.wheel_deltas[1] >= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "wheel_deltas",
                value: self.wheel_deltas[0],
                min: 0.0,
                max: f32::INFINITY,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_validate() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
        assert_eq!(EngineConfig::reduced_motion().validate(), Ok(()));
    }

    #[test]
    fn reduced_profile_trims_counts() {
        let normal = EngineConfig::default();
        let reduced = EngineConfig::for_motion(true);
        assert!(reduced.token_count < normal.token_count);
        assert!(reduced.glow_count < normal.glow_count);
        assert!(reduced.wheel_alpha < normal.wheel_alpha);
    }

    #[test]
    fn rejects_bad_gold_bias() {
        let cfg = EngineConfig {
            gold_probability: 1.5,
            ..EngineConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange {
                field: "gold_probability",
                ..
            })
        ));
    }

    #[test]
    fn rejects_co_rotating_wheels() {
        let cfg = EngineConfig {
            wheel_deltas: [0.01, 0.01],
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
