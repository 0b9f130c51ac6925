use super::{ModuleContext, RULE_SCRIPT};
use crate::actions::{ActionSink, Step};
use crate::module::ScriptProps;
use crate::report::GenError;
use crate::template::{RenderContext, Template};
use std::fs;
use std::path::PathBuf;

/// Emit one action per script input.
///
/// Fail-fast preconditions: the script must stat and carry an executable
/// bit, and both templates must parse, before any action is emitted. A
/// render failure mid-input-list stops the module there; this is stricter
/// than the compile builder's per-file policy on purpose.
pub fn generate_script(
    ctx: &ModuleContext,
    props: &ScriptProps,
    sink: &mut dyn ActionSink,
) -> Result<(), GenError> {
    let script_path = resolve_script_path(ctx, &props.script);

    let meta = fs::metadata(&script_path).map_err(|source| GenError::Resource {
        path: script_path.clone(),
        source,
    })?;
    if !is_executable(&meta) {
        return Err(GenError::Config(format!(
            "{} is not an executable",
            script_path.display()
        )));
    }

    let out_tmpl = Template::parse(&props.output)
        .map_err(|e| GenError::Config(format!("could not parse output template: {}", e)))?;
    let args_tmpl = Template::parse(&props.args)
        .map_err(|e| GenError::Config(format!("could not parse args template: {}", e)))?;

    let script_str = script_path.to_string_lossy().into_owned();
    for input in &props.inputs {
        let input_path = ctx.dir.join(input);
        let mut tctx = RenderContext::for_input(&input_path.to_string_lossy());

        let out_rel = out_tmpl.render(&tctx).map_err(|e| {
            GenError::Config(format!(
                "could not render output for {}: {}",
                input_path.display(),
                e
            ))
        })?;
        let out_path = ctx.config.build_root.join(out_rel);
        tctx.output = Some(out_path.to_string_lossy().into_owned());

        let args = args_tmpl.render(&tctx).map_err(|e| {
            GenError::Config(format!(
                "could not render args for {}: {}",
                input_path.display(),
                e
            ))
        })?;

        sink.step(Step {
            rule: RULE_SCRIPT,
            inputs: vec![input_path],
            outputs: vec![out_path],
            // The script itself: edits to it invalidate every output.
            implicits: vec![script_path.clone()],
            bindings: vec![("script", script_str.clone()), ("args", args)],
        });
    }
    Ok(())
}

/// `//`-prefixed specs resolve against the source root; everything else is
/// module-relative.
fn resolve_script_path(ctx: &ModuleContext, spec: &str) -> PathBuf {
    match spec.strip_prefix("//") {
        Some(rest) => ctx.config.src_root.join(rest),
        None => ctx.dir.join(spec),
    }
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(meta: &fs::Metadata) -> bool {
    meta.is_file()
}
