use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use indexmap::IndexMap;
use tracing::debug;

use crate::render::{
    BAR_FIGURE, LinePrimitive, OverlayPrimitive, RectPrimitive, STRIKE_LINE_FIGURE, TEXT_FIGURE,
    TextPrimitive,
};

/// Drawing surface exposed by the host charting engine.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: &RectPrimitive);
    fn stroke_line(&mut self, line: &LinePrimitive);
    fn fill_text(&mut self, text: &TextPrimitive);
}

pub type DrawFigureFn = fn(&mut dyn DrawSurface, &OverlayPrimitive);
pub type HitTestFn = fn(&OverlayPrimitive, f64, f64) -> bool;

/// A named drawable kind the host knows how to paint and hit-test.
#[derive(Debug, Clone)]
pub struct FigureKind {
    pub name: String,
    pub draw: DrawFigureFn,
    pub hit_test: HitTestFn,
}

impl FigureKind {
    #[must_use]
    pub fn new(name: impl Into<String>, draw: DrawFigureFn, hit_test: HitTestFn) -> Self {
        Self {
            name: name.into(),
            draw,
            hit_test,
        }
    }
}

/// Registration table of figure kinds keyed by name.
///
/// Registration is idempotent: a second registration under a known name is a
/// no-op and keeps the first entry.
#[derive(Debug, Default)]
pub struct FigureRegistry {
    kinds: Mutex<IndexMap<String, FigureKind>>,
}

static GLOBAL_REGISTRY: OnceLock<FigureRegistry> = OnceLock::new();

impl FigureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, created on first use and never torn down.
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::new)
    }

    /// Returns `true` when the kind was newly added.
    pub fn register(&self, kind: FigureKind) -> bool {
        let mut kinds = self.lock();
        if kinds.contains_key(&kind.name) {
            debug!(figure = %kind.name, "figure kind already registered");
            return false;
        }
        debug!(figure = %kind.name, "registering figure kind");
        kinds.insert(kind.name.clone(), kind);
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Registered kind names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Draws `primitive` through its registered kind. Returns `false` when
    /// the kind is unknown and nothing was drawn.
    pub fn draw(&self, surface: &mut dyn DrawSurface, primitive: &OverlayPrimitive) -> bool {
        let Some(draw) = self.lock().get(primitive.figure_name()).map(|kind| kind.draw) else {
            return false;
        };
        draw(surface, primitive);
        true
    }

    #[must_use]
    pub fn hit_test(&self, primitive: &OverlayPrimitive, x: f64, y: f64) -> bool {
        self.lock()
            .get(primitive.figure_name())
            .is_some_and(|kind| (kind.hit_test)(primitive, x, y))
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, FigureKind>> {
        self.kinds.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registers the `oiBar`, `oiText` and `strikeLine` kinds.
///
/// Returns how many kinds were newly registered; repeated calls return 0.
pub fn register_overlay_figures(registry: &FigureRegistry) -> usize {
    [
        FigureKind::new(BAR_FIGURE, draw_bar, hit_test_bar),
        FigureKind::new(TEXT_FIGURE, draw_text, never_hit),
        FigureKind::new(STRIKE_LINE_FIGURE, draw_strike_line, never_hit),
    ]
    .into_iter()
    .filter(|kind| registry.register(kind.clone()))
    .count()
}

fn draw_bar(surface: &mut dyn DrawSurface, primitive: &OverlayPrimitive) {
    if let Some(rect) = primitive.as_rect() {
        surface.fill_rect(rect);
    }
}

fn draw_text(surface: &mut dyn DrawSurface, primitive: &OverlayPrimitive) {
    if let Some(text) = primitive.as_text() {
        surface.fill_text(text);
    }
}

fn draw_strike_line(surface: &mut dyn DrawSurface, primitive: &OverlayPrimitive) {
    if let Some(line) = primitive.as_line() {
        surface.stroke_line(line);
    }
}

fn hit_test_bar(primitive: &OverlayPrimitive, x: f64, y: f64) -> bool {
    primitive
        .as_rect()
        .is_some_and(|rect| rect.contains_point(x, y))
}

fn never_hit(_primitive: &OverlayPrimitive, _x: f64, _y: f64) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::{FigureKind, FigureRegistry, register_overlay_figures};
    use crate::render::{Color, OverlayPrimitive, PrimitiveRole, RectPrimitive};

    #[test]
    fn overlay_figures_register_once() {
        let registry = FigureRegistry::new();
        assert_eq!(register_overlay_figures(&registry), 3);
        assert_eq!(register_overlay_figures(&registry), 0);
        assert_eq!(registry.names(), vec!["oiBar", "oiText", "strikeLine"]);
    }

    #[test]
    fn duplicate_registration_keeps_first_entry() {
        let registry = FigureRegistry::new();
        register_overlay_figures(&registry);
        let replaced = registry.register(FigureKind::new("oiBar", |_, _| {}, |_, _, _| true));
        assert!(!replaced);

        let bar = OverlayPrimitive::rect(
            100.0,
            PrimitiveRole::Ce,
            RectPrimitive::new(0.0, 0.0, 10.0, 6.0, Color::rgb(0.0, 1.0, 0.0)),
        );
        assert!(registry.hit_test(&bar, 5.0, 3.0));
        assert!(!registry.hit_test(&bar, 50.0, 3.0));
    }

    #[test]
    fn global_registry_is_shared() {
        let first = FigureRegistry::global();
        register_overlay_figures(first);
        assert!(FigureRegistry::global().contains("strikeLine"));
        assert_eq!(register_overlay_figures(FigureRegistry::global()), 0);
    }
}
