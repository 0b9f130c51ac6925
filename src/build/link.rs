use super::{ModuleContext, RULE_LINK};
use crate::actions::{ActionSink, Step};
use crate::deps::DepAggregate;
use std::path::{Path, PathBuf};

/// Shape of the link target. Selects variant default flags and the alias
/// naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Binary,
    SharedLib,
}

/// Emit the link action for a module, then a phony alias so the target can
/// be invoked by logical name.
///
/// Flag order: module-declared ldflags, linker defaults, the shared flag for
/// library targets. Search paths and library references follow as separate
/// parameters, one `-L`/`-l` token per aggregated entry, in traversal order.
/// Aggregated artifacts ride along as implicit inputs so the engine re-links
/// dependers after a library rebuild.
pub fn link_objects(
    ctx: &ModuleContext,
    objs: Vec<PathBuf>,
    ldflags: &[String],
    deps: &DepAggregate,
    kind: LinkKind,
    output: &Path,
    sink: &mut dyn ActionSink,
) {
    let mut flags = ldflags.to_vec();
    flags.extend(ctx.toolchains.linker.default_flags.iter().cloned());
    if kind == LinkKind::SharedLib {
        flags.push(ctx.toolchains.linker.shared_flag.clone());
    }

    let ldpaths = deps
        .link_paths
        .iter()
        .map(|path| format!("-L{}", path.display()))
        .collect::<Vec<_>>()
        .join(" ");
    let libs = deps
        .lib_names
        .iter()
        .map(|name| format!("-l{}", name))
        .collect::<Vec<_>>()
        .join(" ");

    sink.step(Step {
        rule: RULE_LINK,
        inputs: objs,
        outputs: vec![output.to_path_buf()],
        implicits: deps.artifacts.clone(),
        bindings: vec![
            ("ldflags", flags.join(" ")),
            ("ldpaths", ldpaths),
            ("libs", libs),
        ],
    });

    let alias = match kind {
        LinkKind::Binary => ctx.name.to_string(),
        LinkKind::SharedLib => format!("lib{}.{}", ctx.name, ctx.toolchains.shared_lib_ext),
    };
    sink.alias(&alias, output);
}
