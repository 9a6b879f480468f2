//! Drives the fill preview against an in-memory track.
//!
//! Usage:
//! ```text
//! cargo run --example fill_square
//! RUST_LOG=trackfill=debug cargo run --example fill_square
//! ```

use trackfill::geometry::Segment;
use trackfill::preview::{FillPreview, PreviewConfig, SPACING_RANGE};
use trackfill::track::TrackStore;

fn main() -> trackfill::Result<()> {
    // Default: WARN for everything, INFO for trackfill.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fill_square=info".parse().unwrap_or_default())
        .add_directive("trackfill=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut track = TrackStore::new();
    let corners = [(0.0, 0.0), (40.0, 0.0), (40.0, 25.0), (0.0, 25.0)];
    for (i, &(x1, y1)) in corners.iter().enumerate() {
        let (x2, y2) = corners[(i + 1) % corners.len()];
        let id = track.add_line(Segment::from_coords(x1, y1, x2, y2))?;
        track.select_line(id);
    }
    track.set_stroke_width(0.5);

    let mut preview = FillPreview::new(PreviewConfig::default());
    preview.activate(&mut track)?;
    tracing::info!(outcome = ?preview.last_outcome(), "initial preview");

    for angle in [15.0, 30.0, 45.0] {
        preview.set_angle(&mut track, angle)?;
        tracing::info!(angle, outcome = ?preview.last_outcome(), "angle changed");
    }
    preview.set_spacing(&mut track, *SPACING_RANGE.start())?;
    tracing::info!(outcome = ?preview.last_outcome(), "spacing changed");

    preview.commit(&mut track)?;
    preview.deactivate(&mut track);

    println!(
        "committed {} lines after {} commands",
        track.committed_lines().len(),
        track.commands().len()
    );
    Ok(())
}
