//! Declare argument action

use crate::substitution::LaunchContext;

/// Declares a launch argument with a default value.
///
/// Downstream descriptors reference the argument through
/// `Expr::config(name)`; the value is fixed only when the argument is applied
/// to a `LaunchContext` at record-generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareArgumentAction {
    pub name: String,
    pub default: String,
    pub description: String,
}

impl DeclareArgumentAction {
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            description: description.into(),
        }
    }

    /// Apply the argument to a context.
    ///
    /// A value already present (a launch-time override) wins over the default.
    pub fn apply(&self, context: &mut LaunchContext) {
        if context.get_configuration(&self.name).is_some() {
            return;
        }
        context.set_configuration(self.name.clone(), self.default.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_default() {
        let arg = DeclareArgumentAction::new("device", "GC4663", "mipi camera device");
        let mut context = LaunchContext::new();
        arg.apply(&mut context);

        assert_eq!(context.get_configuration("device"), Some("GC4663".to_string()));
    }

    #[test]
    fn test_apply_keeps_override() {
        let arg = DeclareArgumentAction::new("device", "/dev/video8", "usb camera device");
        let mut context =
            LaunchContext::with_overrides(vec![("device".to_string(), "/dev/video0".to_string())]);
        arg.apply(&mut context);

        assert_eq!(
            context.get_configuration("device"),
            Some("/dev/video0".to_string())
        );
    }
}
