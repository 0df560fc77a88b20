use anyhow::{Context, Result};
use glam::Vec2;
use measure_core::MeasureSession;

mod constants;
mod scene;
mod tracking;

use constants::{CAMERA_Z, FEATURE_COUNT, FEATURE_HIT_RADIUS, FEATURE_SEED, VIEW_HEIGHT, VIEW_WIDTH};
use scene::LoggingScene;
use tracking::FeatureCloud;

/// Parse `x,y` pixel pairs from the command line.
fn parse_taps(args: &[String]) -> Result<Vec<Vec2>> {
    args.iter()
        .map(|arg| {
            let (x, y) = arg
                .split_once(',')
                .with_context(|| format!("tap '{arg}' is not in x,y form"))?;
            let x: f32 = x.trim().parse().with_context(|| format!("bad x in '{arg}'"))?;
            let y: f32 = y.trim().parse().with_context(|| format!("bad y in '{arg}'"))?;
            Ok(Vec2::new(x, y))
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let cloud = FeatureCloud::new(
        FEATURE_SEED,
        FEATURE_COUNT,
        VIEW_WIDTH,
        VIEW_HEIGHT,
        CAMERA_Z,
        FEATURE_HIT_RADIUS,
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let taps = if args.is_empty() {
        tracking::demo_taps(&cloud)
    } else {
        parse_taps(&args)?
    };

    let mut session = MeasureSession::new(cloud, LoggingScene::default());
    session.begin_session();

    for (i, tap) in taps.iter().enumerate() {
        let result = session.on_screen_tap(*tap);
        log::info!(
            "[demo] tap {i} at ({:.0},{:.0}) -> {result:?}, markers={}",
            tap.x,
            tap.y,
            session.marker_count()
        );
    }

    // Tear down like the end of a tracking run, then audit the ledger.
    session.begin_session();
    let (_, scene) = session.into_parts();
    anyhow::ensure!(
        scene.outstanding() == 0,
        "leaked {} scene nodes",
        scene.outstanding()
    );
    log::info!(
        "[demo] scene balanced: {} adds, {} removes",
        scene.adds(),
        scene.removes()
    );
    Ok(())
}
