use std::path::Path;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// External site generator invoked after a note lands in the posts directory.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub command: String,
    pub generate: String,
    pub deploy: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: "hexo".to_string(),
            generate: "g".to_string(),
            deploy: "d".to_string(),
        }
    }
}

pub fn validate_generator_config(config: &GeneratorConfig, origin: &Path) -> Result<()> {
    if config.command.trim().is_empty() {
        bail!("{}: generator.command must not be empty", origin.display());
    }
    if config.command.chars().any(char::is_whitespace) {
        bail!(
            "{}: generator.command '{}' must be a single program name",
            origin.display(),
            config.command
        );
    }

    for (key, value) in [("generate", &config.generate), ("deploy", &config.deploy)] {
        if value.trim().is_empty() {
            bail!("{}: generator.{} must not be empty", origin.display(), key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_hexo() {
        let config = GeneratorConfig::default();
        assert_eq!(config.command, "hexo");
        assert_eq!(config.generate, "g");
        assert_eq!(config.deploy, "d");
        assert!(validate_generator_config(&config, Path::new("clhe.yaml")).is_ok());
    }

    #[test]
    fn reject_empty_command() {
        let config = GeneratorConfig {
            command: "  ".into(),
            ..Default::default()
        };
        let error = validate_generator_config(&config, Path::new("clhe.yaml")).unwrap_err();
        assert!(error.to_string().contains("generator.command must not be empty"));
    }

    #[test]
    fn reject_command_with_arguments() {
        let config = GeneratorConfig {
            command: "npx hexo".into(),
            ..Default::default()
        };
        let error = validate_generator_config(&config, Path::new("clhe.yaml")).unwrap_err();
        assert!(error.to_string().contains("single program name"));
    }

    #[test]
    fn reject_empty_deploy_mode() {
        let config = GeneratorConfig {
            deploy: String::new(),
            ..Default::default()
        };
        let error = validate_generator_config(&config, Path::new("clhe.yaml")).unwrap_err();
        assert!(error.to_string().contains("generator.deploy"));
    }
}
