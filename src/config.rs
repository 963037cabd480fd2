use std::sync::OnceLock;

pub const IS_DEPLOYED_ENV: &str = "VITE_IS_DEPLOYED";

static DEPLOYMENT: OnceLock<DeploymentConfig> = OnceLock::new();

/// Build/boot-time deployment flags. Read once, never re-evaluated per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeploymentConfig {
    /// Hosted mode: usage is gated by an access code.
    pub is_running_on_cloud: bool,
}

impl DeploymentConfig {
    pub fn hosted() -> Self {
        Self {
            is_running_on_cloud: true,
        }
    }

    pub fn local() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Only the exact value `"true"` selects hosted mode.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            is_running_on_cloud: lookup(IS_DEPLOYED_ENV).as_deref() == Some("true"),
        }
    }

    /// Process-wide config, resolved from the environment on first access.
    pub fn global() -> &'static DeploymentConfig {
        DEPLOYMENT.get_or_init(|| {
            let config = Self::from_env();
            tracing::info!(
                hosted = config.is_running_on_cloud,
                "resolved deployment config"
            );
            config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_true_selects_hosted_mode() {
        let config = DeploymentConfig::from_lookup(|key| {
            (key == IS_DEPLOYED_ENV).then(|| "true".to_string())
        });
        assert_eq!(config, DeploymentConfig::hosted());
    }

    #[test]
    fn other_values_stay_local() {
        for raw in ["TRUE", "1", "yes", "", " true"] {
            let config = DeploymentConfig::from_lookup(|_| Some(raw.to_string()));
            assert!(!config.is_running_on_cloud, "value {raw:?}");
        }
        assert_eq!(DeploymentConfig::from_lookup(|_| None), DeploymentConfig::local());
    }

    #[test]
    fn global_is_stable_across_calls() {
        let first = DeploymentConfig::global();
        let second = DeploymentConfig::global();
        assert!(std::ptr::eq(first, second));
    }
}
