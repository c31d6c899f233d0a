//! Substitution types

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;

/// A single deferred-substitution element inside a launch value.
///
/// The pipeline carries only two shapes: literal text and `$(var name)`
/// references to a launch configuration. References are resolved at
/// record-generation time, never at composition time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// $(var name) - Launch configuration variable
    LaunchConfiguration(String),
}

impl Substitution {
    /// Resolve substitution to a string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedVariable(name.clone())),
        }
    }
}

/// Resolve a chain of substitutions to a single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}
