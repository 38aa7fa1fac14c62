use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Static job-role catalog (`config/job-roles.json`): career-level role
/// definitions and per-team focus areas. Loaded once, read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRoleCatalog {
    #[serde(default)]
    pub career_levels: HashMap<String, RoleDefinition>,
    #[serde(default)]
    pub teams: HashMap<String, TeamProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleDefinition {
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Raw KPI weights as configured, keyed by the catalog's own area names.
    /// Folded into the canonical categories at context-build time.
    #[serde(default)]
    pub kpi_breakdown: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamProfile {
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

impl JobRoleCatalog {
    /// Career level used when the requested one has no catalog entry.
    pub const DEFAULT_CAREER_LEVEL: &'static str = "Associate";

    /// Role definition for a career level, falling back to the default level,
    /// then to an empty definition. Never fails the request.
    pub fn role_for(&self, career_level: &str) -> RoleDefinition {
        self.career_levels
            .get(career_level)
            .or_else(|| self.career_levels.get(Self::DEFAULT_CAREER_LEVEL))
            .cloned()
            .unwrap_or_default()
    }

    /// Team profile, empty when the team is not in the catalog.
    pub fn team_profile(&self, team: &str) -> TeamProfile {
        self.teams.get(team).cloned().unwrap_or_default()
    }
}
