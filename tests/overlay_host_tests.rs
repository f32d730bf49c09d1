use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use oi_overlay::core::{Bounding, PriceAxis, StrikeRecord, parse_strike_records_json};
use oi_overlay::extensions::{DrawSurface, FigureRegistry, OiOverlay, register_overlay_figures};
use oi_overlay::layout::{AnchorPolicy, LayoutConfig};
use oi_overlay::render::{
    LinePrimitive, NullRenderer, PrimitiveRole, RectPrimitive, TextPrimitive,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Default)]
struct RecordingSurface {
    commands: Vec<&'static str>,
    texts: Vec<String>,
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, _rect: &RectPrimitive) {
        self.commands.push("rect");
    }

    fn stroke_line(&mut self, _line: &LinePrimitive) {
        self.commands.push("line");
    }

    fn fill_text(&mut self, text: &TextPrimitive) {
        self.commands.push("text");
        self.texts.push(text.text.clone());
    }
}

#[derive(Debug, Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn warnings_during(action: impl FnOnce()) -> usize {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, action);
    counter.count()
}

fn demo_overlay() -> OiOverlay {
    OiOverlay::new(vec![
        StrikeRecord::new(24_800.0, 3_100.0, 2_900.0, 150.0, -40.0),
        StrikeRecord::new(25_000.0, 4_500.0, 4_200.0, 200.0, -170.0),
        StrikeRecord::new(27_000.0, 900.0, 600.0, -10.0, 5.0),
    ])
}

fn demo_axis() -> PriceAxis {
    PriceAxis::new(24_500.0, 25_500.0, 0.0, 680.0).expect("axis")
}

fn demo_bounds() -> Bounding {
    Bounding::from_edges(0.0, 0.0, 500.0, 680.0)
}

#[test]
fn overlay_draws_every_primitive_through_registered_figures() {
    let registry = FigureRegistry::new();
    assert!(OiOverlay::install(Some(&registry)));

    let overlay = demo_overlay();
    let mut surface = RecordingSurface::default();
    let drawn = overlay.draw(&mut surface, demo_bounds(), &demo_axis(), Some(&registry));

    assert_eq!(drawn, 20);
    assert_eq!(surface.commands.len(), 20);
    assert_eq!(
        surface.commands.iter().filter(|cmd| **cmd == "line").count(),
        2
    );
    assert!(surface.texts.contains(&"24800".to_owned()));
    assert!(!surface.texts.contains(&"27000".to_owned()));
}

#[test]
fn missing_registry_degrades_to_no_overlay() {
    assert!(!OiOverlay::install(None));

    let overlay = demo_overlay();
    let mut surface = RecordingSurface::default();
    let mut drawn = usize::MAX;
    let warnings = warnings_during(|| {
        drawn = overlay.draw(&mut surface, demo_bounds(), &demo_axis(), None);
    });

    assert_eq!(drawn, 0);
    assert_eq!(warnings, 1);
    assert!(surface.commands.is_empty());
}

#[test]
fn unregistered_kinds_are_skipped() {
    let registry = FigureRegistry::new();
    let overlay = demo_overlay();
    let mut surface = RecordingSurface::default();

    let mut drawn = usize::MAX;
    let warnings = warnings_during(|| {
        drawn = overlay.draw(&mut surface, demo_bounds(), &demo_axis(), Some(&registry));
    });

    assert_eq!(drawn, 0);
    assert_eq!(warnings, 1, "one warning per draw pass, not per primitive");
    assert!(surface.commands.is_empty());
}

#[test]
fn repeated_install_does_not_duplicate_kinds() {
    let registry = FigureRegistry::new();
    assert!(OiOverlay::install(Some(&registry)));
    assert!(OiOverlay::install(Some(&registry)));
    assert_eq!(registry.len(), 3);
    assert_eq!(register_overlay_figures(&registry), 0);
}

#[test]
fn hit_test_returns_bar_under_pointer() {
    let registry = FigureRegistry::new();
    OiOverlay::install(Some(&registry));
    let overlay = demo_overlay();
    let axis = demo_axis();
    let center_y = axis.price_to_pixel(25_000.0).expect("visible strike");

    // Top row of the stack is the CE bar, right-aligned at 495.
    let hit = overlay
        .hit_test(490.0, center_y - 13.0, demo_bounds(), &axis, Some(&registry))
        .expect("ce bar hit");
    assert_eq!(hit.role, PrimitiveRole::Ce);
    assert_eq!(hit.strike_price, 25_000.0);

    assert!(
        overlay
            .hit_test(10.0, center_y, demo_bounds(), &axis, Some(&registry))
            .is_none(),
        "guide lines and labels are not hit targets"
    );
    assert!(
        overlay
            .hit_test(490.0, center_y - 13.0, demo_bounds(), &axis, None)
            .is_none()
    );
}

#[test]
fn null_renderer_receives_overlay_frame_counts() {
    let overlay = demo_overlay();
    let mut renderer = NullRenderer::default();
    overlay
        .render(&mut renderer, demo_bounds(), &demo_axis())
        .expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 8);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 10);
}

#[test]
fn frame_exposes_primitives_by_role() {
    let overlay = demo_overlay()
        .with_config(LayoutConfig::default().with_anchor(AnchorPolicy::LeftAnchored))
        .expect("valid config");
    let frame = overlay.build_frame(demo_bounds(), &demo_axis());

    frame.validate().expect("valid frame");
    assert_eq!(frame.primitives_for_role(PrimitiveRole::StrikeLabel).count(), 2);
    assert!(
        frame
            .primitives_for_role(PrimitiveRole::Ce)
            .filter_map(|p| p.as_rect())
            .all(|rect| rect.x == 5.0)
    );
}

#[test]
fn invalid_config_is_rejected_and_previous_config_kept() {
    let mut overlay = demo_overlay();
    let result = overlay.set_config(LayoutConfig::default().with_bar_height(-1.0));
    assert!(result.is_err());
    assert_eq!(overlay.config(), &LayoutConfig::default());
}

#[test]
fn json_payload_feeds_the_overlay() {
    let records = parse_strike_records_json(
        r#"[
            {"price": 25000, "ce": 4500, "pe": 4200, "changeInCE": 200, "changeInPE": -170},
            {"price": "oops", "ce": 10},
            {"price": 24800, "ce": "3100"}
        ]"#,
    )
    .expect("payload");
    assert_eq!(records.len(), 3);

    let overlay = OiOverlay::new(records);
    let primitives = overlay.create_figures(demo_bounds(), &demo_axis());
    let guide_prices: Vec<f64> = primitives
        .iter()
        .filter(|p| p.role == PrimitiveRole::GuideLine)
        .map(|p| p.strike_price)
        .collect();
    assert_eq!(guide_prices, vec![25_000.0, 24_800.0]);
}
