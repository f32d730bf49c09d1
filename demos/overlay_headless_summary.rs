use oi_overlay::core::{Bounding, PriceAxis};
use oi_overlay::extensions::OiOverlay;
use oi_overlay::render::{NullRenderer, PrimitiveRole};
use oi_overlay::synthetic::StrikeLadderGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = oi_overlay::telemetry::init_default_tracing();

    let records = StrikeLadderGenerator::new(2024, 100.0, 100.0)?.generate(10);
    let overlay = OiOverlay::new(records);
    let axis = PriceAxis::new(80.0, 1_020.0, 0.0, 680.0)?;
    let bounds = Bounding::from_edges(0.0, 0.0, 1_000.0, 680.0);

    let frame = overlay.build_frame(bounds, &axis);
    let mut renderer = NullRenderer::default();
    overlay.render(&mut renderer, bounds, &axis)?;

    println!(
        "frame primitives: rects={} texts={} lines={}",
        frame.rect_count(),
        frame.text_count(),
        frame.line_count()
    );
    for guide in frame.primitives_for_role(PrimitiveRole::GuideLine) {
        if let Some(line) = guide.as_line() {
            println!("strike {:>6} at y={:.1}", guide.strike_price, line.y1);
        }
    }

    Ok(())
}
