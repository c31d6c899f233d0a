//! Include launch action

use crate::substitution::Expr;

/// References an external package's launch file with forwarded arguments.
///
/// The included file's contents are opaque to the composer; only the package
/// name, launch file name, and the argument strings handed over are part of
/// this crate's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeLaunchAction {
    pub package: String,
    pub launch_file: String,
    /// Args as Vec to preserve order (later args can reference earlier ones)
    pub launch_arguments: Vec<(String, Expr)>,
}

impl IncludeLaunchAction {
    pub fn new(package: impl Into<String>, launch_file: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            launch_file: launch_file.into(),
            launch_arguments: Vec::new(),
        }
    }

    /// Append a launch argument handed to the included file.
    pub fn with_argument(mut self, name: impl Into<String>, value: Expr) -> Self {
        self.launch_arguments.push((name.into(), value));
        self
    }

    /// Value of a forwarded argument, if present.
    pub fn argument(&self, name: &str) -> Option<&Expr> {
        self.launch_arguments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}
