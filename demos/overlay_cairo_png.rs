use std::fs::File;

use oi_overlay::core::{Bounding, PriceAxis};
use oi_overlay::extensions::OiOverlay;
use oi_overlay::layout::{AnchorPolicy, LayoutConfig};
use oi_overlay::render::{CairoRenderer, Renderer};
use oi_overlay::synthetic::StrikeLadderGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = oi_overlay::telemetry::init_default_tracing();

    let anchor = match std::env::args().nth(1).as_deref() {
        Some("left") => AnchorPolicy::LeftAnchored,
        Some("split") => AnchorPolicy::AxisSplit,
        _ => AnchorPolicy::RightAnchored,
    };

    let records = StrikeLadderGenerator::new(7, 24_000.0, 200.0)?.generate(11);
    let overlay = OiOverlay::new(records)
        .with_config(LayoutConfig::default().with_anchor(anchor).with_bar_height(8.0))?;
    let axis = PriceAxis::new(23_900.0, 26_100.0, 20.0, 660.0)?;
    let bounds = Bounding::from_edges(0.0, 0.0, 900.0, 680.0);

    let mut renderer = CairoRenderer::new(960, 680)?;
    renderer.render(&overlay.build_frame(bounds, &axis))?;

    let path = std::env::temp_dir().join("oi_overlay.png");
    let mut file = File::create(&path)?;
    renderer.surface().write_to_png(&mut file)?;

    let stats = renderer.last_stats();
    println!(
        "wrote {} (rects={} texts={} lines={})",
        path.display(),
        stats.rects_drawn,
        stats.texts_drawn,
        stats.lines_drawn
    );
    Ok(())
}
