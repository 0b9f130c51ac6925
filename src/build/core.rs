use super::{ModuleContext, compile, link, link::LinkKind, register_rules, script};
use crate::actions::ActionSink;
use crate::config::BuildConfig;
use crate::deps::{self, DepSummary};
use crate::module::{LibExports, Module};
use crate::report::Reporter;
use crate::toolchain::ToolchainSet;
use std::path::PathBuf;

/// One module as the host hands it to the driver: identity, declared
/// dependency names, and the populated module instance.
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    pub name: String,
    /// Declaring directory, relative to the source root.
    pub dir: PathBuf,
    /// Dependency module names, in declaration order.
    pub deps: Vec<String>,
    pub module: Module,
}

impl ModuleEntry {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, module: Module) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            deps: Vec::new(),
            module,
        }
    }

    pub fn with_deps(mut self, deps: &[&str]) -> Self {
        self.deps = deps.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Run one generation pass over host-topologically-ordered entries.
///
/// Registers the rules once, then generates each module exactly once in the
/// given order. Returns false if any module recorded an error; sibling
/// modules still generate either way.
pub fn generate(
    entries: &mut [ModuleEntry],
    config: &BuildConfig,
    toolchains: &ToolchainSet,
    sink: &mut dyn ActionSink,
    reporter: &mut Reporter,
) -> bool {
    register_rules(toolchains, sink);

    for idx in 0..entries.len() {
        let summaries = resolve_deps(entries, idx, reporter);
        generate_module(&mut entries[idx], &summaries, config, toolchains, sink, reporter);
    }
    !reporter.failed()
}

/// Resolve one entry's declared dependency names against the already
/// generated prefix of the pass, producing typed summaries.
///
/// Unknown names and forward references violate the host's topological
/// guarantee; they are reported and contribute nothing.
fn resolve_deps(entries: &[ModuleEntry], idx: usize, reporter: &mut Reporter) -> Vec<DepSummary> {
    let entry = &entries[idx];
    let mut summaries = Vec::with_capacity(entry.deps.len());
    for dep_name in &entry.deps {
        match entries[..idx].iter().find(|e| &e.name == dep_name) {
            Some(dep) => match &dep.module {
                Module::SharedLib(lib) => match &lib.exports {
                    Some(exports) => summaries.push(DepSummary::SharedLib {
                        name: dep.name.clone(),
                        exports: exports.clone(),
                    }),
                    None => reporter.config_error(
                        &entry.name,
                        format!("dependency {} has not generated yet", dep_name),
                    ),
                },
                other => summaries.push(DepSummary::Other {
                    name: dep.name.clone(),
                    kind: other.kind(),
                }),
            },
            None => reporter.config_error(
                &entry.name,
                format!("unknown dependency {}", dep_name),
            ),
        }
    }
    summaries
}

/// Generate one module's actions. Invoked exactly once per entry per pass.
pub fn generate_module(
    entry: &mut ModuleEntry,
    dep_summaries: &[DepSummary],
    config: &BuildConfig,
    toolchains: &ToolchainSet,
    sink: &mut dyn ActionSink,
    reporter: &mut Reporter,
) {
    let ctx = ModuleContext {
        name: &entry.name,
        dir: &entry.dir,
        config,
        toolchains,
    };

    match &mut entry.module {
        Module::Binary(bin) => {
            let agg = deps::aggregate(ctx.name, dep_summaries, reporter);
            let output = config.build_root.join(ctx.dir).join(ctx.name);

            let objs = compile::compile_sources(
                &ctx,
                &bin.props.srcs,
                &bin.props.cflags,
                &agg.include_paths,
                sink,
                reporter,
            );
            link::link_objects(
                &ctx,
                objs,
                &bin.props.ldflags,
                &agg,
                LinkKind::Binary,
                &output,
                sink,
            );
            bin.output = Some(output);
        }

        Module::SharedLib(lib) => {
            let agg = deps::aggregate(ctx.name, dep_summaries, reporter);
            let link_path = config.build_root.join(ctx.dir);
            let artifact =
                link_path.join(format!("lib{}.{}", ctx.name, toolchains.shared_lib_ext));

            // Library objects are position independent; module flags follow
            // the PIC flag.
            let mut cflags = Vec::with_capacity(lib.props.base.cflags.len() + 1);
            cflags.push(toolchains.pic_flag.clone());
            cflags.extend(lib.props.base.cflags.iter().cloned());

            let objs = compile::compile_sources(
                &ctx,
                &lib.props.base.srcs,
                &cflags,
                &agg.include_paths,
                sink,
                reporter,
            );
            link::link_objects(
                &ctx,
                objs,
                &lib.props.base.ldflags,
                &agg,
                LinkKind::SharedLib,
                &artifact,
                sink,
            );

            // Exports become visible to dependers only now, once this
            // module's generation is complete.
            lib.exports = Some(LibExports {
                include_paths: lib
                    .props
                    .include_paths
                    .iter()
                    .map(|path| entry.dir.join(path))
                    .collect(),
                link_path,
                artifact,
            });
        }

        Module::Script(script_module) => {
            if let Err(error) = script::generate_script(&ctx, &script_module.props, sink) {
                reporter.module_error(&entry.name, error);
            }
        }
    }
}
