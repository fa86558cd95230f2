//! Keepout overlay walkthrough.
//!
//! Loads a keepout boundary file, replays a short synthetic detection track
//! and prints the box color each detection would be drawn with.
//!
//! Usage:
//! ```text
//! cargo run --example frame_overlay -- config/keepout_points.csv
//! cargo run --example frame_overlay -- config/keepout_points.csv --bottom-edge
//! cargo run --example frame_overlay -- --bottom-edge
//! RUST_LOG=keepout=debug cargo run --example frame_overlay -- points.csv
//! ```

use keepout::operations::creation::MakeBox;
use keepout::{load_keepout_polygon, CollisionMode, CollisionParams, KeepoutZone};
use tracing::{debug, info};

const FRAME_WIDTH: u32 = 960;
const FRAME_HEIGHT: u32 = 540;

/// One detection track: a person walking left to right across the frame,
/// in normalized `[x1, y1, x2, y2]` coordinates.
fn synthetic_frames() -> Vec<Vec<[f32; 4]>> {
    (0..10u8)
        .map(|i| {
            let x = 0.05 + f32::from(i) * 0.09;
            vec![[x, 0.30, x + 0.08, 0.85]]
        })
        .collect()
}

fn main() -> keepout::Result<()> {
    // Default: WARN for everything, INFO for the demo and the engine.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("frame_overlay=info".parse().unwrap_or_default())
        .add_directive("keepout=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (flags, positional): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));
    let path = positional
        .into_iter()
        .next()
        .unwrap_or_else(|| "config/keepout_points.csv".to_owned());
    let mode = if flags.iter().any(|a| a == "--bottom-edge") {
        CollisionMode::BottomEdgeOnly
    } else {
        CollisionMode::WholeBox
    };

    let zone = KeepoutZone::new(
        load_keepout_polygon(&path),
        CollisionParams::new(FRAME_WIDTH).with_mode(mode),
    );
    info!(path = %path, enabled = zone.is_enabled(), ?mode, "keepout zone ready");

    let mut frame_num: u64 = 0;
    for detections in synthetic_frames() {
        frame_num += 1;
        debug!(frame = frame_num, candidates = detections.len());

        for corners in detections {
            let bbox = MakeBox::from_normalized(corners, FRAME_WIDTH, FRAME_HEIGHT).execute()?;
            let color = if zone.check(&bbox) { "red" } else { "lightgreen" };
            println!("frame {frame_num:>3}  {bbox}  {color}");
        }
    }

    if let Some(outline) = zone.polygon().outline() {
        println!("outline: {outline}");
    }
    Ok(())
}
