use super::{ModuleContext, RULE_CC, RULE_CXX};
use crate::actions::{ActionSink, Step};
use crate::report::Reporter;
use crate::toolchain::{Language, ToolchainSet};
use std::path::PathBuf;

/// Emit one compile action per recognized source file.
///
/// Flag order per action: `cflags` (module-declared, already including any
/// variant prefix) followed by the toolchain defaults for the file's
/// language. Unrecognized extensions are reported per file and skipped;
/// the remaining files still compile.
///
/// Returns the object paths produced, in source order.
pub fn compile_sources(
    ctx: &ModuleContext,
    srcs: &[String],
    cflags: &[String],
    include_paths: &[PathBuf],
    sink: &mut dyn ActionSink,
    reporter: &mut Reporter,
) -> Vec<PathBuf> {
    let inc_str = include_paths
        .iter()
        .map(|path| format!("-I{}", path.display()))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objs = Vec::with_capacity(srcs.len());
    for src in srcs {
        let src_path = ctx.dir.join(src);
        let Some(lang) = ToolchainSet::language_for(&src_path) else {
            reporter.config_error(
                ctx.name,
                format!("unknown extension for {}", src_path.display()),
            );
            continue;
        };

        let compiler = ctx.toolchains.compiler(lang);
        let flag_str = cflags
            .iter()
            .chain(compiler.default_flags.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        let obj = ctx
            .config
            .build_root
            .join(&src_path)
            .with_extension("o");

        sink.step(Step {
            rule: match lang {
                Language::C => RULE_CC,
                Language::Cxx => RULE_CXX,
            },
            inputs: vec![src_path],
            outputs: vec![obj.clone()],
            implicits: Vec::new(),
            bindings: vec![("cflags", flag_str), ("incflags", inc_str.clone())],
        });
        objs.push(obj);
    }
    objs
}
