//! Validation limits for health inputs
//!
//! Limits are loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/healthcalc.toml, optional)
//! 3. Environment variables (prefix: HC__)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the optional limits file
pub const DEFAULT_CONFIG_FILE: &str = "config/healthcalc.toml";

/// Plausible input ranges used by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthLimits {
    pub weight: WeightLimits,
    pub height: HeightLimits,
    pub bmi: BmiLimits,
}

/// Weight range in kilograms, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLimits {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl Default for WeightLimits {
    fn default() -> Self {
        Self {
            min_kg: 1.0,
            max_kg: 700.0,
        }
    }
}

/// Height range in meters, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightLimits {
    pub min_m: f64,
    pub max_m: f64,
}

impl Default for HeightLimits {
    fn default() -> Self {
        Self {
            min_m: 0.30,
            max_m: 3.00,
        }
    }
}

/// Upper bound for a classifiable BMI; the lower bound is always exclusive zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiLimits {
    pub max: f64,
}

impl Default for BmiLimits {
    fn default() -> Self {
        Self { max: 150.0 }
    }
}

impl HealthLimits {
    /// Load limits from the default file and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. config/healthcalc.toml, if present
    /// 3. Environment variables with HC__ prefix
    pub fn load() -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::Config::try_from(&HealthLimits::default())?)
            .add_source(::config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            // e.g., HC__WEIGHT__MAX_KG=500 sets weight.max_kg
            .add_source(::config::Environment::with_prefix("HC").separator("__"))
            .build()?;

        let limits: HealthLimits = config.try_deserialize()?;
        limits.check()?;
        tracing::debug!(?limits, "Loaded health limits");
        Ok(limits)
    }

    /// Load limits from a specific TOML file layered over the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::Config::try_from(&HealthLimits::default())?)
            .add_source(::config::File::from(path.as_ref()).required(true))
            .build()?;

        let limits: HealthLimits = config.try_deserialize()?;
        limits.check()?;
        Ok(limits)
    }

    /// Reject limits that cannot describe a usable range
    pub fn check(&self) -> Result<()> {
        let mut errors = Vec::new();

        check_range(
            &mut errors,
            "weight",
            self.weight.min_kg,
            self.weight.max_kg,
        );
        check_range(&mut errors, "height", self.height.min_m, self.height.max_m);
        if !self.bmi.max.is_finite() || self.bmi.max <= 0.0 {
            errors.push("bmi.max must be a positive number".to_string());
        }

        if !errors.is_empty() {
            bail!("Invalid health limits: {}", errors.join("; "));
        }
        Ok(())
    }
}

fn check_range(errors: &mut Vec<String>, field: &str, min: f64, max: f64) {
    if !min.is_finite() || !max.is_finite() {
        errors.push(format!("{field} limits must be valid numbers"));
    } else if min <= 0.0 {
        errors.push(format!("{field} minimum must be positive"));
    } else if min >= max {
        errors.push(format!("{field} minimum must be below its maximum"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes tests touching the process environment or working directory
    static PROCESS_LOCK: Mutex<()> = Mutex::new(());

    /// Sets HC__ variables and removes them again on drop
    struct EnvOverrides(Vec<&'static str>);

    impl EnvOverrides {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvOverrides {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_limits() {
        let limits = HealthLimits::default();
        assert_eq!(limits.weight.min_kg, 1.0);
        assert_eq!(limits.weight.max_kg, 700.0);
        assert_eq!(limits.height.min_m, 0.30);
        assert_eq!(limits.height.max_m, 3.00);
        assert_eq!(limits.bmi.max, 150.0);
        assert!(limits.check().is_ok());
    }

    #[test]
    fn test_load_without_overrides_uses_defaults() {
        let _lock = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let limits = HealthLimits::load().unwrap();
        assert_eq!(limits, HealthLimits::default());
    }

    #[test]
    fn test_load_applies_env_overrides() {
        let _lock = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvOverrides::set(&[("HC__WEIGHT__MAX_KG", "500"), ("HC__BMI__MAX", "90.5")]);

        let limits = HealthLimits::load().unwrap();
        assert_eq!(limits.weight.min_kg, 1.0);
        assert_eq!(limits.weight.max_kg, 500.0);
        assert_eq!(limits.height, HeightLimits::default());
        assert_eq!(limits.bmi.max, 90.5);
    }

    #[test]
    fn test_load_rejects_inverted_env_range() {
        let _lock = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvOverrides::set(&[("HC__HEIGHT__MIN_M", "5")]);

        let err = HealthLimits::load().unwrap_err();
        assert!(err
            .to_string()
            .contains("height minimum must be below its maximum"));
    }

    #[test]
    fn test_load_reads_default_file_then_env() {
        let _lock = PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("config")).unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[weight]\nmax_kg = 400.0\n\n[height]\nmax_m = 2.5\n",
        )
        .unwrap();

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let from_file = HealthLimits::load();
        let with_env = {
            let _env = EnvOverrides::set(&[("HC__WEIGHT__MAX_KG", "300")]);
            HealthLimits::load()
        };
        std::env::set_current_dir(original_dir).unwrap();

        let from_file = from_file.unwrap();
        assert_eq!(from_file.weight.max_kg, 400.0);
        assert_eq!(from_file.height.max_m, 2.5);

        let with_env = with_env.unwrap();
        assert_eq!(with_env.weight.max_kg, 300.0);
        assert_eq!(with_env.height.max_m, 2.5);
    }

    #[test]
    fn test_file_overrides_only_given_keys() {
        let file = toml_file("[weight]\nmax_kg = 500.0\n\n[bmi]\nmax = 100.0\n");

        let limits = HealthLimits::from_file(file.path()).unwrap();
        assert_eq!(limits.weight.min_kg, 1.0);
        assert_eq!(limits.weight.max_kg, 500.0);
        assert_eq!(limits.height, HeightLimits::default());
        assert_eq!(limits.bmi.max, 100.0);
    }

    #[test]
    fn test_file_with_inverted_range_is_rejected() {
        let file = toml_file("[height]\nmin_m = 2.5\nmax_m = 1.0\n");

        let err = HealthLimits::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("height minimum must be below its maximum"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(HealthLimits::from_file("does/not/exist.toml").is_err());
    }

    #[test]
    fn test_check_collects_every_problem() {
        let limits = HealthLimits {
            weight: WeightLimits {
                min_kg: 0.0,
                max_kg: 700.0,
            },
            height: HeightLimits {
                min_m: f64::NAN,
                max_m: 3.0,
            },
            bmi: BmiLimits { max: -1.0 },
        };

        let message = limits.check().unwrap_err().to_string();
        assert!(message.contains("weight minimum must be positive"));
        assert!(message.contains("height limits must be valid numbers"));
        assert!(message.contains("bmi.max must be a positive number"));
    }
}
