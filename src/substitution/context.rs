//! Launch context for configurations and environment

use std::collections::{BTreeMap, HashMap};

/// Launch-time state threaded through record generation.
///
/// Holds the launch configuration map (seeded from `name:=value` overrides,
/// filled in by argument defaults) and an optional environment overlay. The
/// overlay lets tests inject `CAM_TYPE` or `AMENT_PREFIX_PATH` without
/// mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    configurations: BTreeMap<String, String>,
    environment: Option<HashMap<String, String>>,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-seeded with launch-time overrides.
    pub fn with_overrides(overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            configurations: overrides.into_iter().collect(),
            environment: None,
        }
    }

    // ========== Launch Configuration Methods ==========

    /// Get a launch configuration value by name
    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    /// Set a launch configuration value
    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    /// All launch configurations, sorted by name
    pub fn configurations(&self) -> &BTreeMap<String, String> {
        &self.configurations
    }

    // ========== Environment Methods ==========

    /// Get an environment variable.
    ///
    /// Checks the overlay first, then falls back to `std::env`.
    pub fn get_env(&self, name: &str) -> Option<String> {
        if let Some(ref env_map) = self.environment {
            if let Some(value) = env_map.get(name) {
                return Some(value.clone());
            }
        }
        std::env::var(name).ok()
    }

    /// Set an environment variable in the overlay only
    pub fn set_env(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.environment
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let context = LaunchContext::new();
        assert!(context.get_configuration("device").is_none());
        assert!(context.configurations().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut context = LaunchContext::new();
        context.set_configuration("picture".to_string(), "./config/images/2.jpg".to_string());
        assert_eq!(
            context.get_configuration("picture"),
            Some("./config/images/2.jpg".to_string())
        );
    }

    #[test]
    fn test_override_configuration() {
        let mut context = LaunchContext::new();
        context.set_configuration("device".to_string(), "GC4663".to_string());
        context.set_configuration("device".to_string(), "F37".to_string());
        assert_eq!(context.get_configuration("device"), Some("F37".to_string()));
    }

    #[test]
    fn test_with_overrides() {
        let context = LaunchContext::with_overrides(vec![(
            "parking_perception_pub_topic".to_string(),
            "/custom_topic".to_string(),
        )]);
        assert_eq!(
            context.get_configuration("parking_perception_pub_topic"),
            Some("/custom_topic".to_string())
        );
    }

    #[test]
    fn test_env_overlay_wins() {
        let mut context = LaunchContext::new();
        context.set_env("CAM_TYPE", "usb");
        assert_eq!(context.get_env("CAM_TYPE"), Some("usb".to_string()));
    }

    #[test]
    fn test_env_missing() {
        let context = LaunchContext::new();
        assert_eq!(context.get_env("PARKING_BRINGUP_NONEXISTENT_VAR"), None);
    }
}
