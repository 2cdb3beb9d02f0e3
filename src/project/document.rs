//! Loaded configuration document
//!
//! Kept as an order-preserving YAML mapping rather than typed structs so
//! hand-edited keys (especially under `custom`) survive a load/save cycle.

use serde_yaml::{Mapping, Value};

/// Top-level sections of an initialized document, in canonical order.
pub const SECTIONS: &[&str] = &[
    "project",
    "team",
    "paths",
    "openproject",
    "archon",
    "testing",
    "workflows",
    "custom",
];

/// The project configuration as a nested, insertion-ordered mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: Mapping,
}

impl ConfigDocument {
    pub fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Parse YAML text, requiring a mapping of mapping-valued sections.
    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        let value: Value = serde_yaml::from_str(contents).map_err(|e| e.to_string())?;

        let root = match value {
            Value::Mapping(root) => root,
            Value::Null => return Err("document is empty".to_string()),
            _ => return Err("top level must be a mapping of sections".to_string()),
        };

        for (key, section) in &root {
            if !matches!(section, Value::Mapping(_) | Value::Null) {
                let name = key.as_str().unwrap_or("<non-string key>");
                return Err(format!("section '{name}' must be a mapping"));
            }
        }

        Ok(Self { root })
    }

    /// Render as block-style YAML, keys in insertion order.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.root)
    }

    /// Descend section → subsection → key. `None` if any segment is absent
    /// or an intermediate value is not a mapping.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(*first)?;
        for segment in rest {
            current = current.get(*segment)?;
        }
        Some(current)
    }

    /// Like [`lookup`](Self::lookup), but an explicit `null` counts as absent.
    pub fn lookup_present(&self, path: &[&str]) -> Option<&Value> {
        self.lookup(path).filter(|value| !value.is_null())
    }

    /// Whether the value at `path` exists and is truthy.
    pub fn is_set(&self, path: &[&str]) -> bool {
        self.lookup(path).is_some_and(is_truthy)
    }

    /// Resolve `path` to its plain string form, or `default`.
    pub fn string_or(&self, path: &[&str], default: &str) -> String {
        self.lookup_present(path)
            .and_then(plain_string)
            .unwrap_or_else(|| default.to_string())
    }
}

/// Truthiness of a YAML value: null, false, zero and empty values are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Plain string form of a value: scalars as written, collections as inline YAML.
pub fn plain_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => plain_string(&tagged.value),
        other => serde_yaml::to_string(other)
            .ok()
            .map(|s| s.trim_end().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> ConfigDocument {
        ConfigDocument::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_lookup_nested() {
        let d = doc("openproject:\n  types:\n    epic: 40\n");
        assert_eq!(
            d.lookup(&["openproject", "types", "epic"]),
            Some(&Value::from(40))
        );
        assert!(d.lookup(&["openproject", "types", "bug"]).is_none());
        assert!(d.lookup(&["archon", "project_id"]).is_none());
        assert!(d.lookup(&[]).is_none());
    }

    #[test]
    fn test_lookup_through_scalar_is_absent() {
        let d = doc("project:\n  name: demo\n");
        assert!(d.lookup(&["project", "name", "deeper"]).is_none());
    }

    #[test]
    fn test_explicit_null_resolves_to_default() {
        let d = doc("openproject:\n  project_id: null\n");
        assert!(d.lookup(&["openproject", "project_id"]).is_some());
        assert!(d.lookup_present(&["openproject", "project_id"]).is_none());
        assert_eq!(
            d.string_or(&["openproject", "project_id"], "NOT_CONFIGURED"),
            "NOT_CONFIGURED"
        );
    }

    #[test]
    fn test_plain_string_forms() {
        let d = doc("workflows:\n  story_min_hours: 0.5\n  story_max_hours: 4\n  strict: true\n  label: fast\n");
        assert_eq!(d.string_or(&["workflows", "story_min_hours"], "x"), "0.5");
        assert_eq!(d.string_or(&["workflows", "story_max_hours"], "x"), "4");
        assert_eq!(d.string_or(&["workflows", "strict"], "x"), "true");
        assert_eq!(d.string_or(&["workflows", "label"], "x"), "fast");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&Value::from(0)));
        assert!(!is_truthy(&Value::from("")));
        assert!(!is_truthy(&Value::from(false)));
        assert!(is_truthy(&Value::from(40)));
        assert!(is_truthy(&Value::from("demo")));
    }

    #[test]
    fn test_rejects_non_mapping_documents() {
        assert!(ConfigDocument::from_yaml("").is_err());
        assert!(ConfigDocument::from_yaml("- a\n- b\n").is_err());
        assert!(ConfigDocument::from_yaml("project: just-a-string\n").is_err());
        assert!(ConfigDocument::from_yaml("project: [unclosed\n").is_err());
    }

    #[test]
    fn test_empty_sections_are_allowed() {
        let d = doc("custom: {}\ntesting:\n");
        assert_eq!(d.as_mapping().len(), 2);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let d = doc("workflows: {}\nproject: {}\nteam: {}\n");
        let yaml = d.to_yaml().unwrap();
        let workflows = yaml.find("workflows").unwrap();
        let project = yaml.find("project").unwrap();
        let team = yaml.find("team").unwrap();
        assert!(workflows < project && project < team);
    }
}
