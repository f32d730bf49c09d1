use tracing::{debug, warn};

use crate::core::{Bounding, CoordinateMapper, StrikeRecord};
use crate::error::OverlayResult;
use crate::extensions::{DrawSurface, FigureRegistry, register_overlay_figures};
use crate::layout::{LayoutConfig, compute_overlay_primitives};
use crate::render::{OverlayFrame, OverlayPrimitive, Renderer};

/// Host-facing OI overlay: owns the strike data and layout config, and
/// answers the host's draw and hit-test callbacks.
///
/// Every callback recomputes the layout from the bounds and mapper it is
/// given, so the overlay always matches the current viewport.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OiOverlay {
    records: Vec<StrikeRecord>,
    config: LayoutConfig,
}

impl OiOverlay {
    #[must_use]
    pub fn new(records: Vec<StrikeRecord>) -> Self {
        Self {
            records,
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> OverlayResult<Self> {
        self.config = config.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn records(&self) -> &[StrikeRecord] {
        &self.records
    }

    pub fn set_records(&mut self, records: Vec<StrikeRecord>) {
        self.records = records;
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> OverlayResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Declares the overlay figure kinds to the host registry.
    ///
    /// A host without an extension registry gets no overlay; this is logged
    /// and reported as `false` rather than failing.
    pub fn install(registry: Option<&FigureRegistry>) -> bool {
        let Some(registry) = registry else {
            warn!("host exposes no figure registry; oi overlay will not be drawn");
            return false;
        };
        let added = register_overlay_figures(registry);
        debug!(added, "oi overlay figures installed");
        true
    }

    /// Layout for one render pass.
    #[must_use]
    pub fn create_figures<M>(&self, bounds: Bounding, mapper: &M) -> Vec<OverlayPrimitive>
    where
        M: CoordinateMapper + ?Sized,
    {
        compute_overlay_primitives(&self.records, bounds, mapper, &self.config)
    }

    #[must_use]
    pub fn build_frame<M>(&self, bounds: Bounding, mapper: &M) -> OverlayFrame
    where
        M: CoordinateMapper + ?Sized,
    {
        OverlayFrame::from_primitives(bounds, self.create_figures(bounds, mapper))
    }

    pub fn render<R, M>(&self, renderer: &mut R, bounds: Bounding, mapper: &M) -> OverlayResult<()>
    where
        R: Renderer + ?Sized,
        M: CoordinateMapper + ?Sized,
    {
        renderer.render(&self.build_frame(bounds, mapper))
    }

    /// Draws the overlay through the registered figure kinds and returns how
    /// many primitives were drawn.
    pub fn draw<M>(
        &self,
        surface: &mut dyn DrawSurface,
        bounds: Bounding,
        mapper: &M,
        registry: Option<&FigureRegistry>,
    ) -> usize
    where
        M: CoordinateMapper + ?Sized,
    {
        let Some(registry) = registry else {
            warn!("host exposes no figure registry; oi overlay draw skipped");
            return 0;
        };

        let mut drawn = 0;
        let mut skipped = 0;
        for primitive in self.create_figures(bounds, mapper) {
            if registry.draw(surface, &primitive) {
                drawn += 1;
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!(skipped, drawn, "figure kinds not registered; primitives skipped");
        }
        drawn
    }

    /// Topmost primitive under `(x, y)`, i.e. the last drawn one whose figure
    /// kind reports a hit.
    #[must_use]
    pub fn hit_test<M>(
        &self,
        x: f64,
        y: f64,
        bounds: Bounding,
        mapper: &M,
        registry: Option<&FigureRegistry>,
    ) -> Option<OverlayPrimitive>
    where
        M: CoordinateMapper + ?Sized,
    {
        let registry = registry?;
        self.create_figures(bounds, mapper)
            .into_iter()
            .rev()
            .find(|primitive| registry.hit_test(primitive, x, y))
    }
}
