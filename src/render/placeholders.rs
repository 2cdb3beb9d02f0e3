//! Placeholder table for `CLAUDE.md.template`
//!
//! Each entry maps one `{{TOKEN}}` to a path in the configuration document
//! and the literal used when that path is absent. Defaults mirror the values
//! `init` writes, so a partially filled config still renders sensibly.

use crate::project::ConfigDocument;

/// One `{{TOKEN}}` → config path binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub token: &'static str,
    pub path: &'static [&'static str],
    pub default: &'static str,
}

impl Placeholder {
    const fn new(
        token: &'static str,
        path: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            token,
            path,
            default,
        }
    }

    /// Value for this placeholder in `document`
    pub fn resolve(&self, document: &ConfigDocument) -> String {
        document.string_or(self.path, self.default)
    }
}

/// Substitution order is table order.
pub const PLACEHOLDERS: &[Placeholder] = &[
    Placeholder::new("{{PROJECT_NAME}}", &["project", "display_name"], "Unknown Project"),
    Placeholder::new("{{OPENPROJECT_PROJECT_ID}}", &["openproject", "project_id"], "NOT_CONFIGURED"),
    Placeholder::new("{{ARCHON_PROJECT_ID}}", &["archon", "project_id"], "NOT_CONFIGURED"),
    // Types
    Placeholder::new("{{TYPE_EPIC}}", &["openproject", "types", "epic"], "40"),
    Placeholder::new("{{TYPE_FEATURE}}", &["openproject", "types", "feature"], "39"),
    Placeholder::new("{{TYPE_USER_STORY}}", &["openproject", "types", "user_story"], "41"),
    Placeholder::new("{{TYPE_TASK}}", &["openproject", "types", "task"], "36"),
    Placeholder::new("{{TYPE_BUG}}", &["openproject", "types", "bug"], "42"),
    Placeholder::new("{{TYPE_MILESTONE}}", &["openproject", "types", "milestone"], "37"),
    // Statuses
    Placeholder::new("{{STATUS_NEW}}", &["openproject", "statuses", "new"], "71"),
    Placeholder::new("{{STATUS_IN_SPECIFICATION}}", &["openproject", "statuses", "in_specification"], "72"),
    Placeholder::new("{{STATUS_SPECIFIED}}", &["openproject", "statuses", "specified"], "73"),
    Placeholder::new("{{STATUS_IN_PROGRESS}}", &["openproject", "statuses", "in_progress"], "77"),
    Placeholder::new("{{STATUS_DEVELOPED}}", &["openproject", "statuses", "developed"], "78"),
    Placeholder::new("{{STATUS_IN_TESTING}}", &["openproject", "statuses", "in_testing"], "79"),
    Placeholder::new("{{STATUS_TESTED}}", &["openproject", "statuses", "tested"], "80"),
    Placeholder::new("{{STATUS_TEST_FAILED}}", &["openproject", "statuses", "test_failed"], "81"),
    Placeholder::new("{{STATUS_CLOSED}}", &["openproject", "statuses", "closed"], "82"),
    Placeholder::new("{{STATUS_ON_HOLD}}", &["openproject", "statuses", "on_hold"], "83"),
    Placeholder::new("{{STATUS_REJECTED}}", &["openproject", "statuses", "rejected"], "84"),
    Placeholder::new("{{STATUS_CONFIRMED}}", &["openproject", "statuses", "confirmed"], "74"),
    Placeholder::new("{{STATUS_TO_BE_SCHEDULED}}", &["openproject", "statuses", "to_be_scheduled"], "75"),
    Placeholder::new("{{STATUS_SCHEDULED}}", &["openproject", "statuses", "scheduled"], "76"),
    // Priorities
    Placeholder::new("{{PRIORITY_LOW}}", &["openproject", "priorities", "low"], "72"),
    Placeholder::new("{{PRIORITY_NORMAL}}", &["openproject", "priorities", "normal"], "73"),
    Placeholder::new("{{PRIORITY_HIGH}}", &["openproject", "priorities", "high"], "74"),
    Placeholder::new("{{PRIORITY_IMMEDIATE}}", &["openproject", "priorities", "immediate"], "75"),
    // Workflow stages
    Placeholder::new("{{WORKFLOW_DEFAULT_STATUS}}", &["openproject", "workflow", "default_status"], "71"),
    Placeholder::new("{{WORKFLOW_START_WORK_STATUS}}", &["openproject", "workflow", "start_work_status"], "77"),
    Placeholder::new("{{WORKFLOW_REVIEW_STATUS}}", &["openproject", "workflow", "review_status"], "79"),
    Placeholder::new("{{WORKFLOW_COMPLETE_STATUS}}", &["openproject", "workflow", "complete_status"], "82"),
    // Workflows
    Placeholder::new("{{STORY_MIN_HOURS}}", &["workflows", "story_min_hours"], "0.5"),
    Placeholder::new("{{STORY_MAX_HOURS}}", &["workflows", "story_max_hours"], "4"),
];

/// Resolve every placeholder against `document`, in table order.
pub fn placeholder_map(document: &ConfigDocument) -> Vec<(&'static str, String)> {
    PLACEHOLDERS
        .iter()
        .map(|p| (p.token, p.resolve(document)))
        .collect()
}

/// Literal, all-occurrence replacement of each token, applied in order.
pub fn substitute(template: &str, replacements: &[(&str, String)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (token, value)| {
            text.replace(token, value)
        })
}

/// `{{...}}` tokens still present in `text`, in order of appearance.
pub fn unresolved_tokens(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        let end = start + len + 2;
        found.push(&rest[start..end]);
        rest = &rest[end..];
    }
    found
}
