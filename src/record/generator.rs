//! Record generation and command-line synthesis
//!
//! Resolution happens here, not at composition time: launch arguments are
//! applied to the context first, then every include path, argument value,
//! and node command line is resolved against it.

use crate::actions::{IncludeLaunchAction, NodeAction};
use crate::ament;
use crate::description::{LaunchAction, LaunchDescription};
use crate::error::GenerationError;
use crate::record::types::{IncludeRecord, LaunchRecord, NodeRecord};
use crate::substitution::LaunchContext;

pub struct RecordGenerator;

impl RecordGenerator {
    /// Resolve a launch description into a replayable record.
    ///
    /// Declared arguments are applied before anything resolves, so overrides
    /// already present in the context win over declared defaults.
    pub fn generate(
        description: &LaunchDescription,
        context: &mut LaunchContext,
    ) -> Result<LaunchRecord, GenerationError> {
        description.apply_arguments(context);

        let mut record = LaunchRecord::new();
        for action in description.iter() {
            match action {
                LaunchAction::DeclareArgument(_) => {}
                LaunchAction::Include(include) => {
                    record
                        .include
                        .push(Self::generate_include_record(include, context)?);
                }
                LaunchAction::Node(node) => {
                    record.node.push(Self::generate_node_record(node, context)?);
                }
            }
        }

        record.variables = context.configurations().clone();
        Ok(record)
    }

    pub fn generate_include_record(
        include: &IncludeLaunchAction,
        context: &LaunchContext,
    ) -> Result<IncludeRecord, GenerationError> {
        let share = ament::find_package_share(context, &include.package)
            .ok_or_else(|| GenerationError::PackageNotFound(include.package.clone()))?;
        let file = share.join("launch").join(&include.launch_file);

        let args = include
            .launch_arguments
            .iter()
            .map(|(name, expr)| {
                let value = expr.resolve(context)?;
                Ok((name.clone(), value))
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        Ok(IncludeRecord {
            package: include.package.clone(),
            launch_file: include.launch_file.clone(),
            file: file.to_string_lossy().into_owned(),
            args,
        })
    }

    pub fn generate_node_record(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<NodeRecord, GenerationError> {
        let cmd = Self::generate_node_command(node, context)?;

        let params = node
            .parameters
            .iter()
            .map(|(name, expr)| {
                let value = expr.resolve(context)?;
                Ok((name.clone(), value))
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        Ok(NodeRecord {
            package: node.package.clone(),
            executable: node.executable.clone(),
            name: node.executable.clone(),
            output: node.output.clone(),
            params,
            ros_args: node.ros_args.clone(),
            cmd,
        })
    }

    pub fn generate_node_command(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<Vec<String>, GenerationError> {
        let exec_path = ament::find_package_executable(context, &node.package, &node.executable)
            .ok_or_else(|| GenerationError::ExecutableNotFound {
                package: node.package.clone(),
                executable: node.executable.clone(),
            })?;

        let mut cmd = vec![exec_path.to_string_lossy().into_owned()];
        cmd.push("--ros-args".to_string());

        // Nodes here carry no explicit name; ROS defaults would in-process,
        // but the record pins it so replays stay addressable.
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node.executable));

        for (name, expr) in &node.parameters {
            let value = expr.resolve(context)?;
            cmd.push("-p".to_string());
            cmd.push(format!("{}:={}", name, value));
        }

        cmd.extend(node.ros_args.iter().cloned());
        Ok(cmd)
    }
}
