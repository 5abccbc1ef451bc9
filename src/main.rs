//! Headless replay of recorded viewport input sessions.

use std::path::Path;

use vista::replay::ReplayScript;
use vista::{MenuRequest, Options, RecordingSurface, Viewport};

const DEFAULT_SIZE: (u32, u32) = (800, 600);

fn run(script_path: &str, options_path: Option<&str>) -> Result<(), vista::VistaError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let script = ReplayScript::load(Path::new(script_path))?;

    let mut viewport = Viewport::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1, options);
    viewport.set_menu_handler(|req: &MenuRequest| {
        log::info!(
            "context menu at window {:?} / world {:?}",
            req.window_pos,
            req.world_pos
        );
    });

    let mut surface = RecordingSurface::new();
    let summary = script.run(&mut viewport, &mut surface);
    log::info!(
        "{} steps, {} camera changes, {} frames",
        summary.steps,
        summary.camera_changes,
        summary.frames
    );
    if let Some(frame) = summary.last_frame {
        log::info!(
            "last frame: {} layers painted, depth [{}, {}]",
            frame.layers_painted,
            frame.depth.zmin,
            frame.depth.zmax
        );
    }

    match serde_json::to_string(viewport.camera()) {
        Ok(camera) => log::info!("final camera: {camera}"),
        Err(e) => log::warn!("could not serialize camera: {e}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        log::error!("Usage: vista-replay <script.json> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    if let Err(e) = run(&script_path, options_path.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
