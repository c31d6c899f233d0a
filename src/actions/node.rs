//! Node action

use crate::substitution::Expr;

/// Describes one directly launched process.
///
/// The executable is located through the ament index at record-generation
/// time; nothing is spawned by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub output: Option<String>,
    pub parameters: Vec<(String, Expr)>,
    /// Extra arguments appended to the `--ros-args` section of the command.
    pub ros_args: Vec<String>,
}

impl NodeAction {
    pub fn new(package: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            output: None,
            parameters: Vec::new(),
            ros_args: Vec::new(),
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Expr) -> Self {
        self.parameters.push((name.into(), value));
        self
    }

    pub fn with_ros_arg(mut self, arg: impl Into<String>) -> Self {
        self.ros_args.push(arg.into());
        self
    }

    /// Value of a declared parameter, if present.
    pub fn parameter(&self, name: &str) -> Option<&Expr> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}
