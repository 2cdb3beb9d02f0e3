//! Fixed defaults written by `init`.
//!
//! OpenProject identifiers are instance-specific; these are the ids of the
//! reference instance and are expected to be edited after initialization.

/// Work package types: name → OpenProject type id
pub const TYPE_IDS: &[(&str, u32)] = &[
    ("epic", 40),
    ("feature", 39),
    ("user_story", 41),
    ("task", 36),
    ("bug", 42),
    ("milestone", 37),
];

/// Work package statuses: name → OpenProject status id
pub const STATUS_IDS: &[(&str, u32)] = &[
    ("new", 71),
    ("in_specification", 72),
    ("specified", 73),
    ("confirmed", 74),
    ("to_be_scheduled", 75),
    ("scheduled", 76),
    ("in_progress", 77),
    ("developed", 78),
    ("in_testing", 79),
    ("tested", 80),
    ("test_failed", 81),
    ("closed", 82),
    ("on_hold", 83),
    ("rejected", 84),
];

/// Priorities: name → OpenProject priority id
pub const PRIORITY_IDS: &[(&str, u32)] = &[
    ("low", 72),
    ("normal", 73),
    ("high", 74),
    ("immediate", 75),
];

/// Workflow stages: stage → status id
pub const WORKFLOW_STATUS_IDS: &[(&str, u32)] = &[
    ("default_status", 71),
    ("start_work_status", 77),
    ("review_status", 79),
    ("complete_status", 82),
];

pub const USER_SKILL_LEVEL: &str = "intermediate";
pub const LANGUAGE: &str = "English";

pub const OUTPUT_FOLDER: &str = "{project-root}/_bmad-output";
pub const PLANNING_ARTIFACTS: &str = "{project-root}/_bmad-output/planning-artifacts";
pub const IMPLEMENTATION_ARTIFACTS: &str = "{project-root}/_bmad-output/implementation-artifacts";
pub const PROJECT_KNOWLEDGE: &str = "{project-root}/docs";

pub const RAG_DEFAULT_MATCH_COUNT: u32 = 5;
pub const RAG_CODE_EXAMPLES_MATCH_COUNT: u32 = 3;

pub const STORY_MIN_HOURS: f64 = 0.5;
pub const STORY_MAX_HOURS: u32 = 4;
pub const SPRINT_DURATION_DAYS: u32 = 14;
