use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{Bounding, CoordinateMapper, StrikeRecord};
use crate::error::OverlayResult;
use crate::layout::label::{format_change, format_value};
use crate::layout::{AnchorPolicy, LayoutConfig};
use crate::render::{
    LinePrimitive, OverlayPrimitive, PrimitiveRole, RectPrimitive, TextHAlign, TextPrimitive,
};

/// Upper bound of primitives emitted for one strike: four bars, four value
/// labels, the guide line and the strike label.
pub const MAX_PRIMITIVES_PER_STRIKE: usize = 10;

/// Computes the OI overlay for one render pass.
///
/// Invalid bounds or config yield an empty list and a warning; a broken
/// overlay must never break the chart underneath. Use
/// [`try_compute_overlay_primitives`] to observe those failures.
#[must_use]
pub fn compute_overlay_primitives<M>(
    records: &[StrikeRecord],
    bounds: Bounding,
    mapper: &M,
    config: &LayoutConfig,
) -> Vec<OverlayPrimitive>
where
    M: CoordinateMapper + ?Sized,
{
    match try_compute_overlay_primitives(records, bounds, mapper, config) {
        Ok(primitives) => primitives,
        Err(err) => {
            warn!(error = %err, "skipping oi overlay for this render pass");
            Vec::new()
        }
    }
}

/// Fallible variant of [`compute_overlay_primitives`].
///
/// Fails on invalid bounds or config. Malformed and unmappable records are
/// skipped individually and never fail the pass.
pub fn try_compute_overlay_primitives<M>(
    records: &[StrikeRecord],
    bounds: Bounding,
    mapper: &M,
    config: &LayoutConfig,
) -> OverlayResult<Vec<OverlayPrimitive>>
where
    M: CoordinateMapper + ?Sized,
{
    let bounds = bounds.validate()?;
    let config = config.validate()?;
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let scale = global_max(records);
    let mut primitives = Vec::with_capacity(records.len() * MAX_PRIMITIVES_PER_STRIKE);
    let mut skipped = 0_usize;

    for (index, record) in records.iter().enumerate() {
        if !record.is_well_formed() {
            warn!(index, price = record.price, "skipping malformed strike record");
            skipped += 1;
            continue;
        }
        let Some(center_y) = mapper.resolve_pixel_y(record.price) else {
            debug!(index, price = record.price, "strike price outside visible range");
            skipped += 1;
            continue;
        };

        layout_strike(record, center_y, scale, bounds, &config, &mut primitives);
    }

    trace!(
        records = records.len(),
        skipped,
        primitives = primitives.len(),
        scale,
        "oi overlay layout pass"
    );
    Ok(primitives)
}

/// Largest OI magnitude across all well-formed records, floored at 1.
///
/// One scale for the whole dataset keeps bars comparable across strikes.
#[must_use]
pub fn global_max(records: &[StrikeRecord]) -> f64 {
    records
        .iter()
        .filter(|record| record.is_well_formed())
        .map(|record| OrderedFloat(record.max_magnitude()))
        .max()
        .map_or(1.0, |max| max.0.max(1.0))
}

#[derive(Debug, Clone, Copy)]
struct BarRow {
    role: PrimitiveRole,
    value: f64,
    width: f64,
    top: f64,
}

fn bar_rows(
    record: &StrikeRecord,
    center_y: f64,
    scale: f64,
    config: &LayoutConfig,
) -> SmallVec<[BarRow; 4]> {
    let top = center_y - config.stack_height() / 2.0;
    let values = [
        record.ce,
        record.pe,
        record.change_in_ce,
        record.change_in_pe,
    ];

    PrimitiveRole::BAR_ROWS
        .iter()
        .zip(values)
        .enumerate()
        .map(|(row, (&role, value))| BarRow {
            role,
            value,
            width: value.abs() / scale * config.row_width_limit(role),
            top: top + row as f64 * (config.bar_height + config.bar_gap),
        })
        .collect()
}

fn layout_strike(
    record: &StrikeRecord,
    center_y: f64,
    scale: f64,
    bounds: Bounding,
    config: &LayoutConfig,
    out: &mut Vec<OverlayPrimitive>,
) {
    let theme = &config.theme;
    let edge = bounds.right - config.right_padding;
    let origin = bounds.left + config.right_padding;

    for row in bar_rows(record, center_y, scale, config) {
        if row.width <= 0.0 {
            continue;
        }

        let (bar_x, label_x, h_align) = match (config.anchor, row.role) {
            (AnchorPolicy::LeftAnchored, _) => (
                origin,
                origin + row.width + config.label_offset,
                TextHAlign::Left,
            ),
            (AnchorPolicy::AxisSplit, PrimitiveRole::Pe | PrimitiveRole::PeChange) => {
                let x = edge - config.max_bar_width;
                (x, x + row.width + config.label_offset, TextHAlign::Left)
            }
            (AnchorPolicy::RightAnchored | AnchorPolicy::AxisSplit, _) => (
                edge - row.width,
                edge - row.width - config.label_offset,
                TextHAlign::Right,
            ),
        };

        let rect = RectPrimitive::new(
            bar_x,
            row.top,
            row.width,
            config.bar_height,
            theme.bar_color(row.role, row.value),
        );
        out.push(OverlayPrimitive::rect(record.price, row.role, rect));

        let text = if row.role.is_change() {
            format_change(row.value)
        } else {
            format_value(row.value)
        };
        let label = TextPrimitive::new(
            text,
            label_x,
            row.top + config.bar_height / 2.0,
            theme.label_font_size(row.role),
            theme.label_color(row.role),
            h_align,
        );
        out.push(OverlayPrimitive::text(record.price, row.role, label));
    }

    let guide = LinePrimitive::new(
        bounds.left,
        center_y,
        bounds.right,
        center_y,
        theme.guide_line_width,
        theme.guide_line,
    )
    .with_stroke_style(theme.guide_line_style);
    out.push(OverlayPrimitive::line(
        record.price,
        PrimitiveRole::GuideLine,
        guide,
    ));

    let strike_label = TextPrimitive::new(
        format_value(record.price),
        edge + config.strike_label_offset,
        center_y,
        theme.strike_font_size_px,
        theme.strike_label,
        TextHAlign::Left,
    );
    out.push(OverlayPrimitive::text(
        record.price,
        PrimitiveRole::StrikeLabel,
        strike_label,
    ));
}
