//! Interpreting wizard answers

/// Answer to the OpenProject project id prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectIdAnswer {
    /// Operator typed `skip`
    Skip,
    /// All-digit input
    Id(u64),
    /// Anything else, including an empty answer
    Unrecognized,
}

impl ProjectIdAnswer {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("skip") {
            return Self::Skip;
        }
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = input.parse() {
                return Self::Id(id);
            }
        }
        Self::Unrecognized
    }

    pub fn id(self) -> Option<u64> {
        match self {
            Self::Id(id) => Some(id),
            Self::Skip | Self::Unrecognized => None,
        }
    }
}

/// Blank answers become `None`.
pub fn optional(answer: String) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}
