//! record.json data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root structure for record.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub include: Vec<IncludeRecord>,
    pub node: Vec<NodeRecord>,
    pub variables: BTreeMap<String, String>,
}

impl LaunchRecord {
    pub fn new() -> Self {
        Self {
            include: Vec::new(),
            node: Vec::new(),
            variables: BTreeMap::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for LaunchRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A launch file brought in from another package, with resolved arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludeRecord {
    pub package: String,
    pub launch_file: String,
    /// Absolute path of the launch file in the package's share directory.
    pub file: String,
    pub args: Vec<(String, String)>,
}

/// A directly launched node with its synthesized command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub package: String,
    pub executable: String,
    pub name: String,
    pub output: Option<String>,
    pub params: Vec<(String, String)>,
    pub ros_args: Vec<String>,
    pub cmd: Vec<String>,
}
