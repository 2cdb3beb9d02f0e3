//! Internal implementation for project module
//!
//! Handles `_bmad/_config/project-config.yaml` - the project configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

use super::defaults;
use super::document::ConfigDocument;
use crate::paths::SetupPaths;

// =============================================================================
// Errors
// =============================================================================

/// Why a configuration document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed configuration file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to read configuration file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Config Types - Initialization Skeleton
// =============================================================================

/// Project configuration as written by `init`.
///
/// Field order is serialization order, which is the section order of the
/// saved document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    pub team: TeamSection,
    pub paths: PathsSection,
    pub openproject: OpenProjectSection,
    pub archon: ArchonSection,
    pub testing: TestingSection,
    pub workflows: WorkflowsSection,
    #[serde(default)]
    pub custom: Mapping,
}

impl ProjectConfig {
    /// Convert into an order-preserving document.
    pub fn into_document(self) -> Result<ConfigDocument> {
        match serde_yaml::to_value(self).context("Failed to serialize project config")? {
            Value::Mapping(root) => Ok(ConfigDocument::from_mapping(root)),
            _ => anyhow::bail!("Project config did not serialize to a mapping"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Kebab-case project name
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Empty when not provided
    pub github_repo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSection {
    pub user_name: String,
    pub user_skill_level: String,
    pub communication_language: String,
    pub document_output_language: String,
}

impl TeamSection {
    pub fn for_user(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Default::default()
        }
    }
}

impl Default for TeamSection {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            user_skill_level: defaults::USER_SKILL_LEVEL.to_string(),
            communication_language: defaults::LANGUAGE.to_string(),
            document_output_language: defaults::LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsSection {
    pub output_folder: String,
    pub planning_artifacts: String,
    pub implementation_artifacts: String,
    pub project_knowledge: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            output_folder: defaults::OUTPUT_FOLDER.to_string(),
            planning_artifacts: defaults::PLANNING_ARTIFACTS.to_string(),
            implementation_artifacts: defaults::IMPLEMENTATION_ARTIFACTS.to_string(),
            project_knowledge: defaults::PROJECT_KNOWLEDGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenProjectSection {
    pub enabled: bool,
    /// `None` until the tracker project is known; serialized as `null`
    pub project_id: Option<u64>,
    pub types: Mapping,
    pub statuses: Mapping,
    pub priorities: Mapping,
    pub workflow: Mapping,
}

impl Default for OpenProjectSection {
    fn default() -> Self {
        Self {
            enabled: true,
            project_id: None,
            types: id_table(defaults::TYPE_IDS),
            statuses: id_table(defaults::STATUS_IDS),
            priorities: id_table(defaults::PRIORITY_IDS),
            workflow: id_table(defaults::WORKFLOW_STATUS_IDS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchonSection {
    pub enabled: bool,
    /// Only needed for project management; RAG works without it
    pub project_id: Option<String>,
    pub rag: RagSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagSection {
    pub default_match_count: u32,
    pub code_examples_match_count: u32,
    pub preferred_sources: Vec<String>,
}

impl Default for RagSection {
    fn default() -> Self {
        Self {
            default_match_count: defaults::RAG_DEFAULT_MATCH_COUNT,
            code_examples_match_count: defaults::RAG_CODE_EXAMPLES_MATCH_COUNT,
            preferred_sources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestingSection {
    pub tea_use_mcp_enhancements: bool,
    pub tea_use_playwright_utils: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowsSection {
    pub story_min_hours: f64,
    pub story_max_hours: u32,
    pub sprint_duration_days: u32,
    pub require_acceptance_criteria: bool,
    pub require_technical_notes: bool,
}

impl Default for WorkflowsSection {
    fn default() -> Self {
        Self {
            story_min_hours: defaults::STORY_MIN_HOURS,
            story_max_hours: defaults::STORY_MAX_HOURS,
            sprint_duration_days: defaults::SPRINT_DURATION_DAYS,
            require_acceptance_criteria: true,
            require_technical_notes: true,
        }
    }
}

/// Build an ordered name → id mapping from a defaults table.
pub fn id_table(entries: &[(&str, u32)]) -> Mapping {
    entries
        .iter()
        .map(|(name, id)| (Value::from(*name), Value::from(*id)))
        .collect()
}

// =============================================================================
// Config Load/Save
// =============================================================================

/// Load the configuration document.
pub fn load(paths: &SetupPaths) -> Result<ConfigDocument, ConfigError> {
    let path = paths.config_path();

    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    match ConfigDocument::from_yaml(&contents) {
        Ok(document) => {
            tracing::debug!(
                path = %path.display(),
                sections = document.as_mapping().len(),
                "loaded project config"
            );
            Ok(document)
        }
        Err(reason) => Err(ConfigError::Malformed { path, reason }),
    }
}

/// Save the configuration document, creating parent directories.
///
/// The whole document is written in one call; there is no partial update.
pub fn save(paths: &SetupPaths, document: &ConfigDocument) -> Result<PathBuf> {
    let path = paths.config_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let contents = document
        .to_yaml()
        .context("Failed to serialize project config")?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write project config: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "saved project config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.team.user_skill_level, "intermediate");
        assert_eq!(config.team.communication_language, "English");
        assert!(config.openproject.enabled);
        assert!(config.openproject.project_id.is_none());
        assert!(!config.archon.enabled);
        assert_eq!(config.openproject.types.len(), 6);
        assert_eq!(config.openproject.statuses.len(), 14);
        assert_eq!(config.openproject.priorities.len(), 4);
        assert_eq!(config.openproject.workflow.len(), 4);
        assert_eq!(config.workflows.sprint_duration_days, 14);
    }

    #[test]
    fn test_document_section_order() {
        let document = ProjectConfig::default().into_document().unwrap();
        let keys: Vec<&str> = document
            .as_mapping()
            .keys()
            .filter_map(|k| k.as_str())
            .collect();
        assert_eq!(keys, crate::project::document::SECTIONS);
    }

    #[test]
    fn test_id_table_preserves_order() {
        let table = id_table(defaults::STATUS_IDS);
        let first = table.keys().next().and_then(|k| k.as_str());
        let last = table.keys().last().and_then(|k| k.as_str());
        assert_eq!(first, Some("new"));
        assert_eq!(last, Some("rejected"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let paths = SetupPaths::new(tmp.path());

        let mut config = ProjectConfig::default();
        config.project.name = "demo-app".to_string();
        config.openproject.project_id = Some(12);
        config.archon.project_id = Some("b1c2".to_string());
        let document = config.into_document().unwrap();

        save(&paths, &document).unwrap();
        let loaded = load(&paths).unwrap();

        assert_eq!(loaded, document);
    }

    #[test]
    fn test_save_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        let paths = SetupPaths::new(tmp.path());
        let document = ProjectConfig::default().into_document().unwrap();

        save(&paths, &document).unwrap();
        let first = fs::read_to_string(paths.config_path()).unwrap();
        save(&paths, &document).unwrap();
        let second = fs::read_to_string(paths.config_path()).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("project_id: null"));
        assert!(first.contains("story_min_hours: 0.5"));
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = load(&SetupPaths::new(tmp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_garbage_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let paths = SetupPaths::new(tmp.path());
        fs::create_dir_all(paths.config_path().parent().unwrap()).unwrap();
        fs::write(paths.config_path(), "project: [unclosed\n").unwrap();

        let err = load(&paths).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }
}
