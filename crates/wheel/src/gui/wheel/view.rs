use super::{CENTER_CIRCLE_RADIUS, LABEL_FONT, LABEL_FONT_SIZE, SEGMENT_STROKE_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;
use wheel_core::geometry::CENTER;
use wheel_core::{Category, Chart, LabelAnchor, SegmentView, Viewport};

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct SegmentRenderer<'a> {
    segment: &'a SegmentView<'a>,
}

impl<'a> SegmentRenderer<'a> {
    fn new(segment: &'a SegmentView<'a>) -> Self {
        Self { segment }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.trace_outline(cr);
        set_source(
            cr,
            self.segment.fill.color(self.segment.category.color, colors.empty),
        );
        cr.fill_preserve()?;

        set_source(cr, colors.stroke);
        cr.set_line_width(SEGMENT_STROKE_WIDTH);
        cr.stroke()
    }

    // outer arc clockwise, inner arc back counter-clockwise
    fn trace_outline(&self, cr: &Context) {
        let w = &self.segment.wedge;
        cr.new_path();
        cr.move_to(w.inner_start.x, w.inner_start.y);
        cr.line_to(w.outer_start.x, w.outer_start.y);
        cr.arc(CENTER.x, CENTER.y, w.outer_radius, w.start_angle, w.end_angle);
        cr.line_to(w.inner_end.x, w.inner_end.y);
        cr.arc_negative(CENTER.x, CENTER.y, w.inner_radius, w.end_angle, w.start_angle);
        cr.close_path();
    }
}

fn draw_label(
    cr: &Context,
    category: &Category,
    anchor: &LabelAnchor,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let text = if category.icon.is_empty() {
        category.name.to_string()
    } else {
        format!("{} {}", category.icon, category.name)
    };

    cr.save()?;
    cr.translate(anchor.point.x, anchor.point.y);
    cr.rotate(anchor.text_rotation());
    set_source(cr, colors.text);
    cr.select_font_face(LABEL_FONT, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(LABEL_FONT_SIZE);

    if let Ok(ext) = cr.text_extents(&text) {
        // text always runs away from the wheel
        let x = if anchor.is_flipped() { -ext.width() } else { 0.0 };
        cr.move_to(x, ext.height() / 2.0);
        cr.show_text(&text)?;
    }
    cr.restore()
}

fn draw_center_circle(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.center_circle);
    cr.arc(CENTER.x, CENTER.y, CENTER_CIRCLE_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}

pub fn draw(
    cr: &Context,
    chart: &Chart,
    viewport: Viewport,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let offset = viewport.offset();
    let scale = viewport.scale();
    if scale <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.translate(offset.x, offset.y);
    cr.scale(scale, scale);

    draw_center_circle(cr, colors)?;

    for segment in chart.segments() {
        SegmentRenderer::new(&segment).draw(cr, colors)?;
    }

    for (category, anchor) in chart.labels() {
        draw_label(cr, category, &anchor, colors)?;
    }

    cr.restore()
}
