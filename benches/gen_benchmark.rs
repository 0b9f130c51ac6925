use criterion::{Criterion, criterion_group, criterion_main};
use cxgen::actions::ActionLog;
use cxgen::build::{self, ModuleEntry};
use cxgen::config::BuildConfig;
use cxgen::module::{BaseProps, BinaryModule, Module, SharedLibModule, SharedLibProps};
use cxgen::report::Reporter;
use cxgen::template::{RenderContext, Template};
use cxgen::toolchain::ToolchainSet;
use std::hint::black_box;
use toml;

const MOCK_LIB_PROPS: &str = r#"
srcs = ["a.c", "b.c", "c.cpp"]
cflags = ["-DFEATURE_X"]
include_paths = ["include"]
"#;

fn bench_props_decode(c: &mut Criterion) {
    c.bench_function("decode_shared_lib_props", |b| {
        b.iter(|| {
            let _: SharedLibProps = toml::from_str(black_box(MOCK_LIB_PROPS)).unwrap();
        })
    });
}

fn bench_template(c: &mut Criterion) {
    let tmpl = Template::parse("--from {input} --to {output} ({basename}{ext})").unwrap();
    let mut ctx = RenderContext::for_input("gen/tables/a.txt");
    ctx.output = Some("out/gen/tables/a.h".to_string());

    c.bench_function("template_parse", |b| {
        b.iter(|| Template::parse(black_box("--from {input} --to {output}")).unwrap())
    });
    c.bench_function("template_render", |b| {
        b.iter(|| tmpl.render(black_box(&ctx)).unwrap())
    });
}

fn bench_generation_pass(c: &mut Criterion) {
    let config = BuildConfig::new(".", "out");
    let toolchains = ToolchainSet::gnu();

    c.bench_function("generate_lib_chain", |b| {
        b.iter(|| {
            let mut entries = vec![
                ModuleEntry::new(
                    "core",
                    "libs/core",
                    Module::SharedLib(SharedLibModule::new(SharedLibProps {
                        base: BaseProps {
                            srcs: vec!["a.c".into(), "b.c".into(), "c.cpp".into()],
                            ..Default::default()
                        },
                        include_paths: vec!["include".into()],
                    })),
                ),
                ModuleEntry::new(
                    "app",
                    "apps/app",
                    Module::Binary(BinaryModule::new(BaseProps {
                        srcs: vec!["main.c".into()],
                        ..Default::default()
                    })),
                )
                .with_deps(&["core"]),
            ];
            let mut log = ActionLog::default();
            let mut reporter = Reporter::default();
            build::generate(
                black_box(&mut entries),
                &config,
                &toolchains,
                &mut log,
                &mut reporter,
            );
            log
        })
    });
}

criterion_group!(
    benches,
    bench_props_decode,
    bench_template,
    bench_generation_pass
);
criterion_main!(benches);
