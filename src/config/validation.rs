use super::{ConfigError, LoggerConfig};
use crate::filter::FilterMode;

impl LoggerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(filter) = &self.filter else {
            return Ok(());
        };

        // A whitelist without entries would silence the logger entirely
        if filter.mode == FilterMode::Whitelist && filter.packages.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Whitelist filter requires at least one package".to_string(),
            ));
        }

        if let Some(position) = filter.packages.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Filter package name at index {position} is empty"
            )));
        }

        // Origins are matched exactly, so padded names could never match
        if let Some(name) = filter.packages.iter().find(|name| name.trim() != name.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Filter package name '{name}' has surrounding whitespace"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    fn with_filter(mode: FilterMode, packages: &[&str]) -> LoggerConfig {
        LoggerConfig {
            filter: Some(FilterConfig {
                mode,
                packages: packages.iter().map(|p| p.to_string()).collect(),
            }),
            ..LoggerConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        LoggerConfig::default().validate().unwrap();
    }

    #[test]
    fn test_empty_whitelist_rejected() {
        let config = with_filter(FilterMode::Whitelist, &[]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least one package"));
    }

    #[test]
    fn test_empty_blacklist_allowed() {
        with_filter(FilterMode::Blacklist, &[]).validate().unwrap();
    }

    #[test]
    fn test_padded_package_rejected() {
        let config = with_filter(FilterMode::Whitelist, &["app", " app::api"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("' app::api'"));

        with_filter(FilterMode::Whitelist, &["app::api"]).validate().unwrap();
    }

    #[test]
    fn test_blank_package_rejected() {
        let config = with_filter(FilterMode::Blacklist, &["app", "  "]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }
}
