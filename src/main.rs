//! `starbot` binary: opens a window running the galaxy or robot scene.
//!
//! ```text
//! starbot <galaxy|robot> [preset.toml] [--set section.field=value]...
//! ```
//!
//! Rendering goes through the tracing backend; run with
//! `RUST_LOG=starbot=trace` to see every draw.

use std::path::Path;

use starbot::{Options, SceneKind, StarbotError, Viewer};

const USAGE: &str =
    "Usage: starbot <galaxy|robot> [preset.toml] [--set section.field=value]...";

/// Scene, preset path and overrides pulled from the command line.
struct Args {
    scene: SceneKind,
    preset: Option<String>,
    overrides: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, StarbotError> {
    let scene = args
        .next()
        .ok_or_else(|| StarbotError::UnknownScene(String::new()))?
        .parse()?;

    let mut preset = None;
    let mut overrides = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--set" {
            let assignment = args.next().ok_or_else(|| {
                StarbotError::OptionsParse("--set needs section.field=value".into())
            })?;
            overrides.push(assignment);
        } else if preset.is_none() {
            preset = Some(arg);
        } else {
            return Err(StarbotError::OptionsParse(format!(
                "unexpected argument '{arg}'"
            )));
        }
    }

    Ok(Args {
        scene,
        preset,
        overrides,
    })
}

fn load_options(args: &Args) -> Result<Options, StarbotError> {
    let mut options = match &args.preset {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    for assignment in &args.overrides {
        options.apply_override(assignment)?;
    }
    Ok(options)
}

fn run() -> Result<(), StarbotError> {
    let args = parse_args(std::env::args().skip(1))?;
    let options = load_options(&args)?;
    Viewer::builder()
        .with_scene(args.scene)
        .with_options(options)
        .build()
        .run()
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        if matches!(e, StarbotError::UnknownScene(_)) {
            log::error!("{USAGE}");
        }
        std::process::exit(1);
    }
}
