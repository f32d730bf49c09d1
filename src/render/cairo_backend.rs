use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{OverlayError, OverlayResult};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, OverlayFrame, OverlayShape, RectPrimitive, Renderer,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw the overlay into an external Cairo context, for
/// example the host chart's own draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &OverlayFrame,
    ) -> OverlayResult<()>;
}

/// Cairo + Pango + PangoCairo overlay backend.
///
/// Offscreen rendering clears the surface first. Rendering onto an external
/// context composites over whatever the host already drew.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> OverlayResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(OverlayError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(1.0, 1.0, 1.0, 0.0),
            font_family: "Arial".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> OverlayResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn draw_frame(&mut self, context: &Context, frame: &OverlayFrame) -> OverlayResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match &primitive.shape {
                OverlayShape::Rect(rect) => {
                    draw_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                OverlayShape::Line(line) => {
                    draw_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                OverlayShape::Text(text) => {
                    draw_text(context, text, &self.font_family);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> OverlayResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context.set_operator(cairo::Operator::Source);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(cairo::Operator::Over);
        self.draw_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &OverlayFrame,
    ) -> OverlayResult<()> {
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        let result = self.draw_frame(context, frame);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        result
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> OverlayResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_line(context: &Context, line: LinePrimitive) -> OverlayResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = line.stroke_style {
        context.set_dash(&[dash_px, gap_px], 0.0);
    }
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    result
}

fn draw_text(context: &Context, text: &TextPrimitive, family: &str) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("{family} {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y - f64::from(text_height) / 2.0);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> OverlayError {
    OverlayError::Backend(format!("{prefix}: {err}"))
}
