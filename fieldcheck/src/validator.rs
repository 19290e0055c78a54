use crate::violation::{ValidationErrors, Violation};

/// A record that can check its own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        (**self).validate()
    }
}

/// Collects violations across all fields of a record.
///
/// Fields never short-circuit each other: every check is recorded and the
/// full list comes back from [`Validator::finish`].
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the violation, if any, and hands back the checked value.
    pub fn check<T>(&mut self, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                log::trace!("{violation}");
                self.violations.push(violation);
                None
            }
        }
    }

    /// Validates an optional nested record under `path`.
    pub fn nested<V: Validate + ?Sized>(&mut self, path: &str, value: Option<&V>) {
        let Some(value) = value else {
            return;
        };
        if let Err(cause) = value.validate() {
            self.check::<()>(Err(Violation::NestedValidationFailure {
                path: path.to_string(),
                cause,
            }));
        }
    }

    /// Validates every non-null element of a list under `path.<index>`.
    pub fn each<V: Validate>(&mut self, path: &str, items: &[Option<V>]) {
        for (index, item) in items.iter().enumerate() {
            self.nested(&format!("{path}.{index}"), item.as_ref());
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(self.violations))
        }
    }
}
