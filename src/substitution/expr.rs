//! Lazy launch value expressions

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;
use crate::substitution::types::{resolve_substitutions, Substitution};
use std::fmt;

/// A lazy string expression (unevaluated substitution chain).
/// Evaluate with a `LaunchContext` to resolve to a concrete string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr(pub Vec<Substitution>);

impl Expr {
    /// Create an `Expr` from a literal string (no substitutions).
    pub fn literal(s: impl Into<String>) -> Self {
        Expr(vec![Substitution::Text(s.into())])
    }

    /// Create an `Expr` referencing a launch configuration, `$(var name)`.
    pub fn config(name: impl Into<String>) -> Self {
        Expr(vec![Substitution::LaunchConfiguration(name.into())])
    }

    /// Returns `true` if this expression is a single literal text with no substitutions.
    pub fn is_literal(&self) -> bool {
        self.0.len() == 1 && matches!(&self.0[0], Substitution::Text(_))
    }

    /// If this expression is a literal, return its value.
    pub fn as_literal(&self) -> Option<&str> {
        if self.0.len() == 1 {
            if let Substitution::Text(s) = &self.0[0] {
                return Some(s.as_str());
            }
        }
        None
    }

    /// Name of the referenced configuration, if this is a single `$(var name)`.
    pub fn as_config(&self) -> Option<&str> {
        if self.0.len() == 1 {
            if let Substitution::LaunchConfiguration(name) = &self.0[0] {
                return Some(name.as_str());
            }
        }
        None
    }

    /// Resolve this expression against a `LaunchContext`.
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        resolve_substitutions(&self.0, context)
    }
}

impl From<Vec<Substitution>> for Expr {
    fn from(subs: Vec<Substitution>) -> Self {
        Expr(subs)
    }
}

/// Renders the unresolved launch syntax, e.g. `$(var device)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sub in &self.0 {
            match sub {
                Substitution::Text(s) => write!(f, "{}", s)?,
                Substitution::LaunchConfiguration(name) => write!(f, "$(var {})", name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_expr() {
        let expr = Expr::literal("/image");
        assert!(expr.is_literal());
        assert_eq!(expr.as_literal(), Some("/image"));
        assert_eq!(expr.as_config(), None);
    }

    #[test]
    fn test_config_expr() {
        let expr = Expr::config("picture");
        assert!(!expr.is_literal());
        assert_eq!(expr.as_config(), Some("picture"));
        assert_eq!(expr.to_string(), "$(var picture)");
    }

    #[test]
    fn test_resolve_config() {
        let expr = Expr::config("device");
        let mut context = LaunchContext::new();
        context.set_configuration("device".to_string(), "/dev/video8".to_string());
        assert_eq!(expr.resolve(&context).unwrap(), "/dev/video8");
    }

    #[test]
    fn test_display_chain() {
        let expr = Expr(vec![
            Substitution::Text("prefix_".to_string()),
            Substitution::LaunchConfiguration("device".to_string()),
        ]);
        assert_eq!(expr.to_string(), "prefix_$(var device)");
        assert!(expr.as_literal().is_none());
        assert!(expr.as_config().is_none());
    }
}
