use std::fmt;

use thiserror::Error;

/// One side of a numeric range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bound {
    Inclusive(i64),
    Exclusive(i64),
}

impl Bound {
    fn admits_from_below(&self, actual: i64) -> bool {
        match *self {
            Bound::Inclusive(min) => actual >= min,
            Bound::Exclusive(min) => actual > min,
        }
    }

    fn admits_from_above(&self, actual: i64) -> bool {
        match *self {
            Bound::Inclusive(max) => actual <= max,
            Bound::Exclusive(max) => actual < max,
        }
    }
}

pub(crate) fn within(actual: i64, min: Option<Bound>, max: Option<Bound>) -> bool {
    min.map_or(true, |b| b.admits_from_below(actual))
        && max.map_or(true, |b| b.admits_from_above(actual))
}

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    #[error("{path} in body is required")]
    MissingRequiredField { path: String },

    #[error("{path} in body should be {}, got {actual}", describe_bounds(.min, .max))]
    OutOfRange {
        path: String,
        min: Option<Bound>,
        max: Option<Bound>,
        actual: i64,
    },

    #[error("{path} in body should be one of [{}], got {actual:?}", .allowed.join(" "))]
    NotInEnum {
        path: String,
        allowed: Vec<String>,
        actual: String,
    },

    #[error("{path} in body must be of type {expected}: {actual:?}")]
    BadFormat {
        path: String,
        expected: &'static str,
        actual: String,
    },

    #[error("{path} is invalid: {}", summarize(.cause))]
    NestedValidationFailure {
        path: String,
        cause: ValidationErrors,
    },
}

impl Violation {
    pub fn path(&self) -> &str {
        match self {
            Violation::MissingRequiredField { path }
            | Violation::OutOfRange { path, .. }
            | Violation::NotInEnum { path, .. }
            | Violation::BadFormat { path, .. }
            | Violation::NestedValidationFailure { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> &mut String {
        match self {
            Violation::MissingRequiredField { path }
            | Violation::OutOfRange { path, .. }
            | Violation::NotInEnum { path, .. }
            | Violation::BadFormat { path, .. }
            | Violation::NestedValidationFailure { path, .. } => path,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Violation::NestedValidationFailure { .. })
    }

    /// Returns the same violation with `prefix.` prepended to its path.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        let path = self.path_mut();
        *path = join_path(prefix, path);
        self
    }
}

pub(crate) fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{path}"),
    }
}

fn describe_bounds(min: &Option<Bound>, max: &Option<Bound>) -> String {
    let lower = min.map(|b| match b {
        Bound::Inclusive(v) => format!("greater than or equal to {v}"),
        Bound::Exclusive(v) => format!("greater than {v}"),
    });
    let upper = max.map(|b| match b {
        Bound::Inclusive(v) => format!("less than or equal to {v}"),
        Bound::Exclusive(v) => format!("less than {v}"),
    });
    match (lower, upper) {
        (Some(l), Some(u)) => format!("{l} and {u}"),
        (Some(l), None) => l,
        (None, Some(u)) => u,
        (None, None) => "a number".to_string(),
    }
}

fn summarize(cause: &ValidationErrors) -> String {
    cause
        .leaves()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every violation found in one record, in field order.
#[derive(Error, Clone, Debug, Default, Eq, PartialEq)]
#[error("validation failure list:\n{}", list_leaves(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn list_leaves(violations: &[Violation]) -> String {
    let mut leaves = Vec::new();
    collect_leaves("", violations, &mut leaves);
    leaves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Finds the top-level violation recorded at `path`, if any.
    pub fn at(&self, path: &str) -> Option<&Violation> {
        self.0.iter().find(|v| v.path() == path)
    }

    /// Flattens nested failures into leaf violations carrying their full
    /// dotted path, e.g. `neighbor_cell_list.1.pci`.
    pub fn leaves(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        collect_leaves("", &self.0, &mut out);
        out
    }
}

fn collect_leaves(prefix: &str, violations: &[Violation], out: &mut Vec<Violation>) {
    for violation in violations {
        match violation {
            Violation::NestedValidationFailure { path, cause } => {
                collect_leaves(&join_path(prefix, path), &cause.0, out)
            }
            leaf => out.push(leaf.clone().prefixed(prefix)),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Inclusive(v) => write!(f, "{v} (inclusive)"),
            Bound::Exclusive(v) => write!(f, "{v} (exclusive)"),
        }
    }
}
