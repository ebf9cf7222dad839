//! Suite plan entries: which executables to run, grouped by category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Test grouping with independent pass/fail accounting.
///
/// Unit and integration tests gate the overall verdict; examples are
/// reported but never gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Unit-test executables under `<build_dir>/tests/`.
    Unit,
    /// Integration-test executables under `<build_dir>/tests/`.
    Integration,
    /// Example executables under `<build_dir>/examples/`.
    Example,
}

impl Category {
    /// All categories in run order.
    pub const ALL: [Self; 3] = [Self::Unit, Self::Integration, Self::Example];

    /// Build-tree subdirectory holding this category's executables.
    #[must_use]
    pub const fn subdir(self) -> &'static str {
        match self {
            Self::Unit | Self::Integration => "tests",
            Self::Example => "examples",
        }
    }

    /// True when results in this category gate the overall verdict.
    #[must_use]
    pub const fn gates_overall(self) -> bool {
        matches!(self, Self::Unit | Self::Integration)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::Example => "example",
        };
        f.write_str(s)
    }
}

/// One planned executable: its category and logical name.
///
/// The name is the executable file name inside the category's
/// subdirectory, never a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SuiteEntry {
    /// Category the result is accounted under.
    pub category: Category,

    /// Executable file name under the category's subdirectory.
    pub name: String,
}

impl SuiteEntry {
    /// Entry for `name` in `category`.
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_run_order() {
        assert_eq!(
            Category::ALL,
            [Category::Unit, Category::Integration, Category::Example]
        );
    }

    #[test]
    fn test_subdir_mapping() {
        assert_eq!(Category::Unit.subdir(), "tests");
        assert_eq!(Category::Integration.subdir(), "tests");
        assert_eq!(Category::Example.subdir(), "examples");
    }

    #[test]
    fn test_only_examples_do_not_gate() {
        assert!(Category::Unit.gates_overall());
        assert!(Category::Integration.gates_overall());
        assert!(!Category::Example.gates_overall());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_value(Category::Integration).unwrap();
        assert_eq!(json, serde_json::json!("integration"));
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = SuiteEntry::new(Category::Unit, "test_types");
        let yaml = serde_yaml::to_string(&entry).unwrap();
        let back: SuiteEntry = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, entry);
    }
}
