use colored::*;
use std::path::PathBuf;

/// Error type for generation-time problems.
#[derive(Debug)]
pub enum GenError {
    /// Bad declaration: unknown extension, wrong dependency kind, malformed
    /// template, non-executable script.
    Config(String),
    /// Filesystem failure while checking a script.
    Resource {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::Config(msg) => write!(f, "{}", msg),
            GenError::Resource { path, source } => {
                write!(f, "could not stat {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Config(_) => None,
            GenError::Resource { source, .. } => Some(source),
        }
    }
}

/// One recorded problem, tied to the module whose generation raised it.
#[derive(Debug)]
pub struct Diagnostic {
    pub module: String,
    pub error: GenError,
}

/// Collects per-module diagnostics across a generation pass.
///
/// Recording an error never aborts sibling modules; the pass runs to
/// completion and the host checks [`Reporter::failed`] at the end.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn module_error(&mut self, module: &str, error: GenError) {
        self.diagnostics.push(Diagnostic {
            module: module.to_string(),
            error,
        });
    }

    pub fn config_error(&mut self, module: &str, msg: impl Into<String>) {
        self.module_error(module, GenError::Config(msg.into()));
    }

    /// True once any module recorded any error.
    pub fn failed(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render everything collected so far to stderr.
    pub fn print_summary(&self) {
        for diag in &self.diagnostics {
            eprintln!(
                "{} {}: {}",
                "x".red(),
                diag.module.bold(),
                diag.error
            );
        }
        if self.failed() {
            eprintln!(
                "{} Generation failed with {} error(s)",
                "x".red(),
                self.diagnostics.len()
            );
        }
    }
}
