//! Inference configuration.
//!
//! ```
//! use tylam_typecheck::{Formulation, InferConfig};
//!
//! let config = InferConfig::default()
//!     .with_formulation(Formulation::Substitution)
//!     .with_max_depth(64);
//! assert_eq!(config.max_depth, 64);
//! ```

use std::fmt;
use std::str::FromStr;
use tylam_log::warn;

/// Environment variable selecting the [`Formulation`].
pub const FORMULATION_ENV_VAR: &str = "TYLAM_FORMULATION";

/// Environment variable setting [`InferConfig::max_depth`].
pub const MAX_DEPTH_ENV_VAR: &str = "TYLAM_MAX_DEPTH";

/// Default bound on nested expression and pattern nodes.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Which unifier an inference run uses. Both produce the same results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formulation {
    /// Union-find over an arena, mutated in place
    #[default]
    UnionFind,
    /// Substitutions returned by each unification and composed
    Substitution,
}

impl Formulation {
    /// Name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Formulation::UnionFind => "union-find",
            Formulation::Substitution => "substitution",
        }
    }
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union-find" | "unionfind" => Ok(Formulation::UnionFind),
            "substitution" | "subst" => Ok(Formulation::Substitution),
            _ => Err(format!("invalid formulation: {s}")),
        }
    }
}

/// Settings for [`TypeChecker`](crate::TypeChecker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferConfig {
    /// Unifier used by each run
    pub formulation: Formulation,
    /// Maximum number of nested nodes before `RecursionLimit`
    pub max_depth: usize,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            formulation: Formulation::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl InferConfig {
    /// Sets the formulation.
    #[must_use]
    pub fn with_formulation(mut self, formulation: Formulation) -> Self {
        self.formulation = formulation;
        self
    }

    /// Sets the depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reads `TYLAM_FORMULATION` and `TYLAM_MAX_DEPTH`.
    ///
    /// Unset variables keep their defaults; unparsable ones are reported at
    /// `warn` and keep their defaults too.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(FORMULATION_ENV_VAR) {
            match value.parse() {
                Ok(formulation) => config.formulation = formulation,
                Err(err) => warn!("ignoring {}: {}", FORMULATION_ENV_VAR, err),
            }
        }

        if let Some(value) = lookup(MAX_DEPTH_ENV_VAR) {
            match value.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_depth = depth,
                _ => warn!(
                    "ignoring {}: expected a positive integer, got {:?}",
                    MAX_DEPTH_ENV_VAR, value
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = InferConfig::default();
        assert_eq!(config.formulation, Formulation::UnionFind);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(InferConfig::from_lookup(lookup(&[])), config);
    }

    #[test]
    fn test_formulation_parse() {
        assert_eq!("union-find".parse(), Ok(Formulation::UnionFind));
        assert_eq!(" Substitution ".parse(), Ok(Formulation::Substitution));
        assert!("magic".parse::<Formulation>().is_err());
        assert_eq!(Formulation::Substitution.to_string(), "substitution");
    }

    #[test]
    fn test_from_lookup() {
        let config = InferConfig::from_lookup(lookup(&[
            (FORMULATION_ENV_VAR, "substitution"),
            (MAX_DEPTH_ENV_VAR, "32"),
        ]));
        assert_eq!(config.formulation, Formulation::Substitution);
        assert_eq!(config.max_depth, 32);
    }

    #[test]
    fn test_from_lookup_falls_back() {
        let config = InferConfig::from_lookup(lookup(&[
            (FORMULATION_ENV_VAR, "fastest"),
            (MAX_DEPTH_ENV_VAR, "0"),
        ]));
        assert_eq!(config, InferConfig::default());

        let config = InferConfig::from_lookup(lookup(&[(MAX_DEPTH_ENV_VAR, "deep")]));
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
