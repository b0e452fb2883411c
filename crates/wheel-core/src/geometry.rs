use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

pub const CHART_SIZE: f64 = 750.0;
pub const CENTER: Point = Point::new(CHART_SIZE / 2.0, CHART_SIZE / 2.0);
pub const MIN_RADIUS: f64 = 55.0; // innermost ring edge
pub const MAX_RADIUS: f64 = 265.0; // outermost ring edge
pub const TOTAL_RINGS: usize = 10;
pub const RING_WIDTH: f64 = (MAX_RADIUS - MIN_RADIUS) / TOTAL_RINGS as f64;
pub const LABEL_OFFSET: f64 = 30.0; // label distance beyond MAX_RADIUS
pub const START_OFFSET: f64 = -FRAC_PI_2; // 12 o'clock

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn polar(radius: f64, angle: f64) -> Self {
        Self::new(
            CENTER.x + radius * angle.cos(),
            CENTER.y + radius * angle.sin(),
        )
    }
}

/// Logical address of one wedge: slice `category`, concentric band `ring` (0 = innermost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentAddress {
    pub category: usize,
    pub ring: usize,
}

impl SegmentAddress {
    pub fn new(category: usize, ring: usize) -> Self {
        Self { category, ring }
    }

    /// 1-based ring number, which is also the impact value the ring stands for.
    ///
    /// Panics if `ring` is not below `TOTAL_RINGS`.
    pub fn segment_number(&self) -> u8 {
        assert!(
            self.ring < TOTAL_RINGS,
            "ring {} outside 0..{}",
            self.ring,
            TOTAL_RINGS
        );
        self.ring as u8 + 1
    }
}

pub fn angle_step(category_count: usize) -> f64 {
    debug_assert!(category_count > 0, "wheel geometry needs at least one category");
    TAU / category_count as f64
}

pub fn start_angle(category: usize, category_count: usize) -> f64 {
    START_OFFSET + category as f64 * angle_step(category_count)
}

/// Annular wedge for one (category, ring) pair.
///
/// The outline runs inner-start -> outer-start, clockwise along the outer arc to outer-end,
/// then inner-end and counter-clockwise back along the inner arc. Filling it as a single
/// closed path depends on that winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub inner_start: Point,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn calculate(address: SegmentAddress, category_count: usize) -> Self {
        let start_angle = start_angle(address.category, category_count);
        let end_angle = start_angle + angle_step(category_count);
        let inner_radius = MIN_RADIUS + address.ring as f64 * RING_WIDTH;
        let outer_radius = inner_radius + RING_WIDTH;

        Self {
            inner_start: Point::polar(inner_radius, start_angle),
            outer_start: Point::polar(outer_radius, start_angle),
            outer_end: Point::polar(outer_radius, end_angle),
            inner_end: Point::polar(inner_radius, end_angle),
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        }
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn centroid(&self) -> Point {
        Point::polar(
            (self.inner_radius + self.outer_radius) / 2.0,
            self.mid_angle(),
        )
    }

    /// SVG path data for the outline. Each arc is split at the mid angle so that no single
    /// arc command spans more than half a turn, which keeps a one-slice wheel drawable.
    pub fn svg_path(&self) -> String {
        let mid = self.mid_angle();
        let outer_mid = Point::polar(self.outer_radius, mid);
        let inner_mid = Point::polar(self.inner_radius, mid);
        let (r_out, r_in) = (self.outer_radius, self.inner_radius);

        let mut d = String::new();
        let _ = write!(d, "M {:.3} {:.3} ", self.inner_start.x, self.inner_start.y);
        let _ = write!(d, "L {:.3} {:.3} ", self.outer_start.x, self.outer_start.y);
        for p in [outer_mid, self.outer_end] {
            let _ = write!(d, "A {r_out:.3} {r_out:.3} 0 0 1 {:.3} {:.3} ", p.x, p.y);
        }
        let _ = write!(d, "L {:.3} {:.3} ", self.inner_end.x, self.inner_end.y);
        for p in [inner_mid, self.inner_start] {
            let _ = write!(d, "A {r_in:.3} {r_in:.3} 0 0 0 {:.3} {:.3} ", p.x, p.y);
        }
        d.push('Z');
        d
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub point: Point,
    pub angle: f64,
}

impl LabelAnchor {
    pub fn calculate(category: usize, category_count: usize) -> Self {
        let angle = start_angle(category, category_count) + angle_step(category_count) / 2.0;
        Self {
            point: Point::polar(MAX_RADIUS + LABEL_OFFSET, angle),
            angle,
        }
    }

    /// Radial text on the left half of the wheel reads upside down unless turned half a turn.
    pub fn is_flipped(&self) -> bool {
        let a = self.angle.rem_euclid(TAU);
        a > FRAC_PI_2 && a < 3.0 * FRAC_PI_2
    }

    pub fn text_rotation(&self) -> f64 {
        if self.is_flipped() {
            self.angle + PI
        } else {
            self.angle
        }
    }
}

/// Resolves a chart-space point to the wedge under it, or `None` outside the ring annulus.
///
/// Both radial edges are inclusive: `MIN_RADIUS` lands on ring 0 and `MAX_RADIUS` on the
/// outermost ring.
pub fn hit_test(point: Point, category_count: usize) -> Option<SegmentAddress> {
    let (dx, dy) = (point.x - CENTER.x, point.y - CENTER.y);
    let radius = dx.hypot(dy);

    if !(MIN_RADIUS..=MAX_RADIUS).contains(&radius) {
        return None;
    }

    let normalized = (dy.atan2(dx) - START_OFFSET).rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU
    let category = ((normalized / angle_step(category_count)) as usize).min(category_count - 1);
    let ring = (((radius - MIN_RADIUS) / RING_WIDTH) as usize).min(TOTAL_RINGS - 1);

    Some(SegmentAddress::new(category, ring))
}

/// Uniform fit of the chart's square user space into a widget, centered on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scale(&self) -> f64 {
        self.width.min(self.height).max(0.0) / CHART_SIZE
    }

    pub fn offset(&self) -> Point {
        let side = CHART_SIZE * self.scale();
        Point::new((self.width - side) / 2.0, (self.height - side) / 2.0)
    }

    /// Widget coordinates to chart coordinates. `None` for a collapsed widget.
    pub fn to_chart(&self, point: Point) -> Option<Point> {
        let scale = self.scale();
        if scale <= 0.0 {
            return None;
        }
        let offset = self.offset();
        Some(Point::new(
            (point.x - offset.x) / scale,
            (point.y - offset.y) / scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(radius: f64, angle: f64) -> Point {
        Point::polar(radius, START_OFFSET + angle)
    }

    #[test]
    fn test_centroid_round_trip() {
        for count in 1..=12 {
            for category in 0..count {
                for ring in 0..TOTAL_RINGS {
                    let address = SegmentAddress::new(category, ring);
                    let centroid = Wedge::calculate(address, count).centroid();
                    assert_eq!(
                        hit_test(centroid, count),
                        Some(address),
                        "count {count}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_category_index_stays_in_range() {
        for count in [1, 2, 3, 7, 10] {
            for step in 0..=3600 {
                let angle = step as f64 * TAU / 3600.0;
                for offset in [-1e-12, 0.0, 1e-12] {
                    let hit = hit_test(at(150.0, angle + offset), count)
                        .expect("inside the annulus");
                    assert!(hit.category < count);
                }
            }
        }
    }

    #[test]
    fn test_twelve_o_clock_is_first_category() {
        let top = Point::new(CENTER.x, CENTER.y - 100.0);
        assert_eq!(hit_test(top, 4).map(|h| h.category), Some(0));

        // clockwise: 3 o'clock belongs to the second quarter
        let right = Point::new(CENTER.x + 100.0, CENTER.y);
        assert_eq!(hit_test(right, 4).map(|h| h.category), Some(1));

        let just_left_of_top = Point::new(CENTER.x - 0.01, CENTER.y - 100.0);
        assert_eq!(hit_test(just_left_of_top, 4).map(|h| h.category), Some(3));
    }

    #[test]
    fn test_radial_boundaries() {
        let top = |r: f64| Point::new(CENTER.x, CENTER.y - r);

        assert_eq!(hit_test(top(MAX_RADIUS), 8), Some(SegmentAddress::new(0, 9)));
        assert_eq!(hit_test(top(MIN_RADIUS), 8), Some(SegmentAddress::new(0, 0)));
        assert_eq!(hit_test(top(MIN_RADIUS - 0.01), 8), None);
        assert_eq!(hit_test(top(MAX_RADIUS + 0.01), 8), None);
        assert_eq!(hit_test(CENTER, 8), None);
    }

    #[test]
    fn test_inner_rings_use_min_radius_offset() {
        // radius / MAX_RADIUS would put this on ring 2
        let p = Point::new(CENTER.x, CENTER.y - 60.0);
        assert_eq!(hit_test(p, 8), Some(SegmentAddress::new(0, 0)));

        let p = Point::new(CENTER.x, CENTER.y - (MIN_RADIUS + RING_WIDTH + 1.0));
        assert_eq!(hit_test(p, 8), Some(SegmentAddress::new(0, 1)));
    }

    #[test]
    fn test_points_beyond_max_radius_always_miss() {
        for count in [1, 5, 10] {
            for step in 0..360 {
                let angle = (step as f64).to_radians();
                for radius in [MAX_RADIUS + 0.5, 300.0, 1000.0] {
                    assert_eq!(hit_test(at(radius, angle), count), None);
                }
            }
        }
    }

    #[test]
    fn test_segment_numbers() {
        assert_eq!(SegmentAddress::new(0, 0).segment_number(), 1);
        assert_eq!(SegmentAddress::new(3, TOTAL_RINGS - 1).segment_number(), 10);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_segment_number_rejects_ring_past_the_rim() {
        SegmentAddress::new(0, TOTAL_RINGS).segment_number();
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_segment_number_does_not_wrap() {
        // 266 as u8 would be 10, a valid-looking impact
        SegmentAddress::new(0, 266).segment_number();
    }

    #[test]
    fn test_wedge_corners() {
        let wedge = Wedge::calculate(SegmentAddress::new(0, 0), 4);
        assert_eq!(wedge.inner_radius, MIN_RADIUS);
        assert_eq!(wedge.outer_radius, MIN_RADIUS + RING_WIDTH);

        // first slice starts straight up and ends at 3 o'clock
        assert!((wedge.inner_start.x - CENTER.x).abs() < 1e-9);
        assert!((wedge.inner_start.y - (CENTER.y - MIN_RADIUS)).abs() < 1e-9);
        assert!((wedge.outer_end.x - (CENTER.x + wedge.outer_radius)).abs() < 1e-9);
        assert!((wedge.outer_end.y - CENTER.y).abs() < 1e-9);

        let outer = Wedge::calculate(SegmentAddress::new(3, 9), 4);
        assert!((outer.outer_radius - MAX_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn test_svg_path_shape() {
        let d = Wedge::calculate(SegmentAddress::new(1, 2), 6).svg_path();
        assert!(d.starts_with("M "));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches(" 0 0 1 ").count(), 2);
        assert_eq!(d.matches(" 0 0 0 ").count(), 2);
        assert_eq!(d.matches("L ").count(), 2);
    }

    #[test]
    fn test_label_flip() {
        // 4 slices: midpoints at 1:30, 4:30, 7:30 and 10:30
        let flips: Vec<_> = (0..4)
            .map(|c| LabelAnchor::calculate(c, 4).is_flipped())
            .collect();
        assert_eq!(flips, vec![false, false, true, true]);

        let flipped = LabelAnchor::calculate(2, 4);
        assert!((flipped.text_rotation() - (flipped.angle + PI)).abs() < 1e-12);

        // single slice: midpoint straight down, on the boundary, not flipped
        let anchor = LabelAnchor::calculate(0, 1);
        assert!((anchor.point.y - (CENTER.y + MAX_RADIUS + LABEL_OFFSET)).abs() < 1e-9);
        assert!(!anchor.is_flipped());
        assert_eq!(anchor.text_rotation(), anchor.angle);
    }

    #[test]
    fn test_viewport_mapping() {
        let square = Viewport::new(CHART_SIZE, CHART_SIZE);
        assert_eq!(square.to_chart(Point::new(10.0, 20.0)), Some(Point::new(10.0, 20.0)));

        // wide widget: chart is scaled to height and centered horizontally
        let wide = Viewport::new(1000.0, 375.0);
        assert_eq!(wide.scale(), 0.5);
        assert_eq!(wide.offset(), Point::new(312.5, 0.0));
        assert_eq!(
            wide.to_chart(Point::new(312.5 + 187.5, 187.5)),
            Some(CENTER)
        );

        assert_eq!(Viewport::new(0.0, 400.0).to_chart(Point::default()), None);
    }
}
