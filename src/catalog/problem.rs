use serde::{Deserialize, Serialize};

/// Capabilities the problem list needs from anything it displays.
pub trait ListEntry {
    fn display_title(&self) -> &str;
    /// Text matched by the list's plain (non-tag) filter.
    fn filter_text(&self) -> &str;
    fn description(&self) -> String;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityDetail {
    #[serde(default)]
    pub notation: String,
    #[serde(default)]
    pub justification: String,
}

impl ComplexityDetail {
    pub fn summary(&self) -> String {
        format!("{}: {}", self.notation, self.justification)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    #[serde(default)]
    pub time: ComplexityDetail,
    #[serde(default)]
    pub space: ComplexityDetail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub whiteboard: String,
    #[serde(default)]
    pub dry_run: String,
    #[serde(default)]
    pub test_cases: String,
    #[serde(default)]
    pub ia_solution: String,
    #[serde(default)]
    pub manual_solution: String,
}

impl ListEntry for Problem {
    fn display_title(&self) -> &str {
        &self.title
    }

    fn filter_text(&self) -> &str {
        &self.title
    }

    fn description(&self) -> String {
        self.keywords.join(", ")
    }
}
