//! Diagnostic reporting for a finished translation.

use std::fmt;

use tessera_tree::{IngestionFailure, Library, LocatedDiagnostic, Severity};

/// Every diagnostic in a library plus the declarations that never made it in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Diagnostics in tree order.
    pub diagnostics: Vec<LocatedDiagnostic>,
    /// Declarations rejected during ingestion.
    pub failures: Vec<IngestionFailure>,
}

impl DiagnosticReport {
    /// Builds the report for `library`.
    #[must_use]
    pub fn from_library(library: &Library) -> Self {
        Self {
            diagnostics: library.all_diagnostics(),
            failures: library.failures.iter().cloned().collect(),
        }
    }

    /// Number of diagnostics with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|located| located.diagnostic.severity == severity)
            .count()
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of ingestion failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if anything was dropped from emission.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0 || !self.failures.is_empty()
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(
                f,
                "{}: fatal: {}: {}",
                failure.file, failure.declaration, failure.reason
            )?;
        }
        for located in &self.diagnostics {
            writeln!(
                f,
                "{}: {} ({}): {}",
                located.file, located.name, located.declaration, located.diagnostic
            )?;
        }
        write!(
            f,
            "{} fatal, {} errors, {} warnings",
            self.failure_count(),
            self.error_count(),
            self.warning_count()
        )
    }
}
