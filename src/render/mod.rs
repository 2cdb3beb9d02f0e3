//! CLAUDE.md generation
//!
//! Reads `_bmad/templates/CLAUDE.md.template`, replaces every `{{TOKEN}}`
//! from the [`PLACEHOLDERS`] table and writes `CLAUDE.md` at the project root.
//! The only side effect is that one write; the template is never modified.

mod placeholders;

use std::fs;
use std::path::PathBuf;

use crate::paths::SetupPaths;
use crate::project::{self, ConfigDocument, ConfigError};

pub use placeholders::{
    placeholder_map, substitute, unresolved_tokens, Placeholder, PLACEHOLDERS,
};

/// Why `CLAUDE.md` could not be generated.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("template file not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render `template` against `document`.
pub fn render_template(template: &str, document: &ConfigDocument) -> String {
    let rendered = substitute(template, &placeholder_map(document));

    let leftover = unresolved_tokens(&rendered);
    if !leftover.is_empty() {
        tracing::debug!(tokens = ?leftover, "template tokens without a config binding");
    }

    rendered
}

/// Load config and template, render, and write `CLAUDE.md`.
///
/// Returns the path of the generated document.
pub fn generate(paths: &SetupPaths) -> Result<PathBuf, RenderError> {
    let document = project::load(paths)?;

    let template_path = paths.template_path();
    if !template_path.exists() {
        return Err(RenderError::TemplateNotFound {
            path: template_path,
        });
    }
    let template = fs::read_to_string(&template_path).map_err(|source| RenderError::Io {
        action: "read template",
        path: template_path.clone(),
        source,
    })?;

    let output = render_template(&template, &document);

    let output_path = paths.claude_md_path();
    fs::write(&output_path, output).map_err(|source| RenderError::Io {
        action: "write",
        path: output_path.clone(),
        source,
    })?;

    tracing::info!(
        template = %template_path.display(),
        output = %output_path.display(),
        "rendered template"
    );
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(config: Option<&str>, template: Option<&str>) -> (TempDir, SetupPaths) {
        let tmp = TempDir::new().unwrap();
        let paths = SetupPaths::new(tmp.path());
        if let Some(config) = config {
            fs::create_dir_all(paths.config_path().parent().unwrap()).unwrap();
            fs::write(paths.config_path(), config).unwrap();
        }
        if let Some(template) = template {
            fs::create_dir_all(paths.template_path().parent().unwrap()).unwrap();
            fs::write(paths.template_path(), template).unwrap();
        }
        (tmp, paths)
    }

    #[test]
    fn test_generate_demo_scenario() {
        let (_tmp, paths) = setup(
            Some("project:\n  display_name: Demo\n"),
            Some("Project: {{PROJECT_NAME}}, Epic type: {{TYPE_EPIC}}"),
        );

        let out = generate(&paths).unwrap();
        assert_eq!(out, paths.claude_md_path());
        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "Project: Demo, Epic type: 40"
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let (_tmp, paths) = setup(
            Some("project:\n  display_name: Demo\nworkflows:\n  story_min_hours: 0.5\n"),
            Some("# {{PROJECT_NAME}}\nMin: {{STORY_MIN_HOURS}}h, max: {{STORY_MAX_HOURS}}h\n"),
        );

        generate(&paths).unwrap();
        let first = fs::read(paths.claude_md_path()).unwrap();
        generate(&paths).unwrap();
        let second = fs::read(paths.claude_md_path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "# Demo\nMin: 0.5h, max: 4h\n"
        );
    }

    #[test]
    fn test_generate_overwrites_previous_output() {
        let (_tmp, paths) = setup(Some("project: {}\n"), Some("{{PROJECT_NAME}}"));
        fs::write(paths.claude_md_path(), "stale content that is longer").unwrap();

        generate(&paths).unwrap();
        assert_eq!(
            fs::read_to_string(paths.claude_md_path()).unwrap(),
            "Unknown Project"
        );
    }

    #[test]
    fn test_generate_without_config() {
        let (_tmp, paths) = setup(None, Some("{{PROJECT_NAME}}"));
        let err = generate(&paths).unwrap_err();
        assert!(matches!(err, RenderError::Config(ConfigError::NotFound { .. })));
        assert!(!paths.claude_md_path().exists());
    }

    #[test]
    fn test_generate_without_template() {
        let (_tmp, paths) = setup(Some("project: {}\n"), None);
        let err = generate(&paths).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound { .. }));
        assert!(!paths.claude_md_path().exists());
    }

    #[test]
    fn test_unknown_tokens_left_untouched() {
        let document = ConfigDocument::default();
        assert_eq!(
            render_template("{{NOT_A_TOKEN}} {{TYPE_BUG}}", &document),
            "{{NOT_A_TOKEN}} 42"
        );
    }
}
