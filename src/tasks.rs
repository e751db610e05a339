//! Built-in task graph for the envvars project build
//!
//! Namespaces: `build`, `test`, `clippy`, `clean`, plus a bare `default`
//! task that chains the three `*:envvars` aggregates.

use crate::error::Result;
use crate::registry::{Registry, TaskDef};
use crate::report::{Category, Owner};
use crate::runner::with_directory;

/// Sub-project directory used as a working-directory scope
pub const EXTRACTOR_DIR: &str = "extractor";

const EXTRACTOR_TARGET: &str = "extractor/target";
const LIB_TARGET: &str = "target";
const CLIPPY_CMD: &str = "cargo clippy --all-targets -- -D warnings";

/// Build the full task registry. Fails only on a duplicate definition,
/// which would be a programming error caught at startup.
pub fn builtin_registry() -> Result<Registry> {
    let mut registry = Registry::new();

    registry.define(TaskDef::new("build:rust").describe("Install stable Rust").action(
        |ctx| {
            ctx.sh("rustup install stable")?;
            ctx.sh("rustup default stable")
        },
    ))?;
    registry.define(
        TaskDef::new("build:extractor")
            .describe("Build extractor")
            .action(|ctx| {
                with_directory(EXTRACTOR_DIR, || {
                    ctx.sh("cargo build --release")?;
                    ctx.record(Category::Building, Owner::Extractor, "built", "");
                    Ok(())
                })
            }),
    )?;
    registry.define(TaskDef::new("build:lib").describe("Build lib").action(|ctx| {
        ctx.sh("cargo build --release")?;
        ctx.record(Category::Building, Owner::Lib, "built", "");
        Ok(())
    }))?;
    registry.define(
        TaskDef::new("build:envvars")
            .describe("Build everything")
            .depends_on(["build:rust", "build:extractor", "build:lib"]),
    )?;

    registry.define(
        TaskDef::new("test:extractor")
            .describe("Test extractor")
            .action(|ctx| {
                with_directory(EXTRACTOR_DIR, || {
                    ctx.sh("cargo test")?;
                    ctx.record(Category::Test, Owner::Extractor, "tested", "");
                    Ok(())
                })
            }),
    )?;
    registry.define(TaskDef::new("test:lib").describe("Test lib").action(|ctx| {
        ctx.sh("cargo test")?;
        ctx.record(Category::Test, Owner::Lib, "tested", "");
        Ok(())
    }))?;
    registry.define(
        TaskDef::new("test:envvars")
            .describe("Test everything")
            .depends_on(["build:envvars", "test:extractor", "test:lib"]),
    )?;

    registry.define(
        TaskDef::new("clippy:nightly")
            .describe("Install nightly clippy")
            .action(|ctx| {
                ctx.sh("rustup install nightly")?;
                ctx.sh("rustup default nightly")?;
                ctx.sh("rustup component add --toolchain=nightly clippy-preview")
            }),
    )?;
    registry.define(
        TaskDef::new("clippy:extractor")
            .describe("Clippy extractor")
            .action(|ctx| {
                ctx.record(Category::Clippy, Owner::Extractor, "checked", "");
                with_directory(EXTRACTOR_DIR, || ctx.sh(CLIPPY_CMD))
            }),
    )?;
    registry.define(
        TaskDef::new("clippy:lib")
            .describe("Clippy lib")
            // The lib lint needs the extractor binary in place first
            .depends_on(["build:extractor"])
            .action(|ctx| {
                ctx.record(Category::Clippy, Owner::Lib, "checked", "");
                ctx.sh(CLIPPY_CMD)
            }),
    )?;
    registry.define(
        TaskDef::new("clippy:envvars")
            .describe("Clippy everything")
            .depends_on(["clippy:nightly", "clippy:extractor", "clippy:lib"]),
    )?;

    registry.define(
        TaskDef::new("clean:extractor")
            .describe("Clean extractor")
            .action(|ctx| {
                ctx.rm_rf(EXTRACTOR_TARGET)?;
                ctx.record(
                    Category::Clearing,
                    Owner::Extractor,
                    "removed: extractor/target",
                    "",
                );
                Ok(())
            }),
    )?;
    registry.define(TaskDef::new("clean:lib").describe("Clean lib").action(|ctx| {
        ctx.rm_rf(LIB_TARGET)?;
        ctx.record(Category::Clearing, Owner::Lib, "removed: ./target", "");
        Ok(())
    }))?;
    registry.define(
        TaskDef::new("clean:envvars")
            .describe("Clean everything")
            .depends_on(["clean:extractor", "clean:lib"]),
    )?;

    registry.define(
        TaskDef::new("default")
            .describe("Clippy, test and build everything")
            .depends_on(["clippy:envvars", "test:envvars", "build:envvars"]),
    )?;

    Ok(registry)
}
