use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::company::CompanyInfo;
use crate::models::roles::JobRoleCatalog;

/// Prompt templates for the generation backend, keyed by document type.
/// Tokens like `{role}` are substituted before the prompt is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationPrompts {
    pub contract_generation: ContractPrompts,
    pub confirmation_letter: ConfirmationPrompts,
    pub roles_responsibilities: RolesPrompts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractPrompts {
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationPrompts {
    pub personalized: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesPrompts {
    pub main_description: String,
}

/// The three static configuration files, loaded once at startup and shared
/// read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub company: CompanyInfo,
    pub roles: JobRoleCatalog,
    pub prompts: GenerationPrompts,
}

impl Settings {
    pub fn load(config_dir: &Path) -> Result<Self> {
        Ok(Self {
            company: load_json(&config_dir.join("company-info.json"))?,
            roles: load_json(&config_dir.join("job-roles.json"))?,
            prompts: load_json(&config_dir.join("ai-prompts.json"))?,
        })
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading configuration file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shipped_config_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config")
    }

    #[test]
    fn shipped_configuration_parses() {
        let settings = Settings::load(&shipped_config_dir()).unwrap();
        assert!(!settings.company.company.name.is_empty());
        assert!(settings
            .roles
            .career_levels
            .contains_key(JobRoleCatalog::DEFAULT_CAREER_LEVEL));
        assert!(settings
            .prompts
            .contract_generation
            .job_description
            .contains("{role}"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(Settings::load(Path::new("/nonexistent/config")).is_err());
    }
}
