//! Launch description model
//!
//! An ordered, declarative list of launch actions. Order mirrors the topic
//! producer/consumer chain of the pipeline; the consuming launch framework
//! starts all descriptors concurrently, so ordering is documentational and
//! carries no startup barrier.

use crate::actions::{DeclareArgumentAction, IncludeLaunchAction, NodeAction};
use crate::substitution::LaunchContext;

/// All launch action types emitted by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// Declares a launch argument with a default.
    DeclareArgument(DeclareArgumentAction),
    /// Includes an external package's launch file.
    Include(IncludeLaunchAction),
    /// Launches an executable directly.
    Node(NodeAction),
}

impl LaunchAction {
    /// Short kind label used by the topology printout.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchAction::DeclareArgument(_) => "arg",
            LaunchAction::Include(_) => "include",
            LaunchAction::Node(_) => "node",
        }
    }
}

/// A complete, ordered launch description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaunchDescription {
    pub actions: Vec<LaunchAction>,
}

impl LaunchDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: LaunchAction) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchAction> {
        self.actions.iter()
    }

    pub fn first(&self) -> Option<&LaunchAction> {
        self.actions.first()
    }

    pub fn last(&self) -> Option<&LaunchAction> {
        self.actions.last()
    }

    /// All declared arguments, in declaration order.
    pub fn arguments(&self) -> Vec<&DeclareArgumentAction> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                LaunchAction::DeclareArgument(arg) => Some(arg),
                _ => None,
            })
            .collect()
    }

    /// All include actions, in declaration order.
    pub fn includes(&self) -> Vec<&IncludeLaunchAction> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                LaunchAction::Include(include) => Some(include),
                _ => None,
            })
            .collect()
    }

    /// All directly launched nodes, in declaration order.
    pub fn nodes(&self) -> Vec<&NodeAction> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                LaunchAction::Node(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    /// Apply every argument declaration to the context, in order.
    /// Launch-time overrides already present in the context win.
    pub fn apply_arguments(&self, context: &mut LaunchContext) {
        for arg in self.arguments() {
            arg.apply(context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::Expr;

    fn sample_description() -> LaunchDescription {
        let mut description = LaunchDescription::new();
        description.push(LaunchAction::DeclareArgument(DeclareArgumentAction::new(
            "device",
            "GC4663",
            "mipi camera device",
        )));
        description.push(LaunchAction::Include(IncludeLaunchAction::new(
            "hobot_shm",
            "hobot_shm.launch.py",
        )));
        description.push(LaunchAction::Node(
            NodeAction::new("parking_perception", "parking_perception")
                .with_parameter("ai_msg_pub_topic_name", Expr::config("topic")),
        ));
        description
    }

    #[test]
    fn test_collectors() {
        let description = sample_description();
        assert_eq!(description.len(), 3);
        assert_eq!(description.arguments().len(), 1);
        assert_eq!(description.includes().len(), 1);
        assert_eq!(description.nodes().len(), 1);
        assert_eq!(description.arguments()[0].name, "device");
    }

    #[test]
    fn test_first_last() {
        let description = sample_description();
        assert!(matches!(
            description.first(),
            Some(LaunchAction::DeclareArgument(_))
        ));
        assert!(matches!(description.last(), Some(LaunchAction::Node(_))));
    }

    #[test]
    fn test_apply_arguments_fills_defaults() {
        let description = sample_description();
        let mut context = LaunchContext::new();
        description.apply_arguments(&mut context);
        assert_eq!(context.get_configuration("device"), Some("GC4663".to_string()));
    }

    #[test]
    fn test_apply_arguments_respects_overrides() {
        let description = sample_description();
        let mut context =
            LaunchContext::with_overrides(vec![("device".to_string(), "F37".to_string())]);
        description.apply_arguments(&mut context);
        assert_eq!(context.get_configuration("device"), Some("F37".to_string()));
    }

    #[test]
    fn test_kind_labels() {
        let description = sample_description();
        let kinds: Vec<&str> = description.iter().map(LaunchAction::kind).collect();
        assert_eq!(kinds, vec!["arg", "include", "node"]);
    }
}
