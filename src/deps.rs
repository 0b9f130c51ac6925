use crate::module::LibExports;
use crate::report::Reporter;
use std::path::PathBuf;

/// What the host hands the propagator for one declared dependency edge,
/// already typed. Built by the driver from modules generated earlier in the
/// pass, so no dynamic type inspection happens here.
#[derive(Debug, Clone)]
pub enum DepSummary {
    /// A shared library that finished generating.
    SharedLib { name: String, exports: LibExports },
    /// Any other module kind. Contributes nothing to the link.
    Other { name: String, kind: &'static str },
}

/// Aggregated dependency metadata in traversal order.
///
/// Nothing here is deduplicated or sorted: the sequences become linker
/// argument order, and repeated `-l` references are meaningful to
/// single-pass symbol resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepAggregate {
    pub include_paths: Vec<PathBuf>,
    pub link_paths: Vec<PathBuf>,
    pub lib_names: Vec<String>,
    /// Artifact paths, attached to link steps as implicit inputs so the
    /// engine rebuilds dependers after a library changes.
    pub artifacts: Vec<PathBuf>,
}

/// Fold the dependency summaries of one module into a [`DepAggregate`].
///
/// Non-shared-library edges are reported against `module` and skipped;
/// traversal always continues.
pub fn aggregate(module: &str, deps: &[DepSummary], reporter: &mut Reporter) -> DepAggregate {
    let mut agg = DepAggregate::default();
    for dep in deps {
        match dep {
            DepSummary::SharedLib { name, exports } => {
                agg.include_paths.extend(exports.include_paths.iter().cloned());
                agg.link_paths.push(exports.link_path.clone());
                agg.lib_names.push(name.clone());
                agg.artifacts.push(exports.artifact.clone());
            }
            DepSummary::Other { name, kind } => {
                reporter.config_error(
                    module,
                    format!("dependency {} is a {}, not a shared library", name, kind),
                );
            }
        }
    }
    agg
}
