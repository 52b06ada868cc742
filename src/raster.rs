//! Rasterization of points and segments onto a [`Grid`].

use crate::rendering::cell::Marker;
use crate::rendering::color::Color;
use crate::rendering::grid::Grid;
use crate::util::for_coord_in_line;
use crate::view::{Point, Segment, ViewWindow};

/// Draws a single point.
pub fn draw_point(grid: &mut Grid, window: &ViewWindow, point: Point, color: Color, marker: Marker) {
    let (col, subrow) = window.map(point, grid.width(), grid.height());
    grid.set_cell(col, subrow, color, marker);
}

/// Draws a segment as an unbroken 8-connected path of sub-row pixels, endpoints included.
pub fn draw_line(
    grid: &mut Grid,
    window: &ViewWindow,
    segment: Segment,
    color: Color,
    marker: Marker,
) {
    let Some(segment) = clip_to_margin(grid, window, segment) else {
        return;
    };
    let start = window.map(segment.a, grid.width(), grid.height());
    let end = window.map(segment.b, grid.width(), grid.height());
    if outside_same_edge(grid, start, end) {
        return;
    }
    for_coord_in_line(start, end, |col, subrow| {
        grid.set_cell(col, subrow, color, marker);
    });
}

/// Clips `segment` to the window grown by `width + 2 * height` cells on every side.
///
/// Endpoints already inside that margin are returned untouched, so ordinary segments walk
/// exactly the same path as unclipped ones. Far endpoints are moved onto the margin edge,
/// which bounds the walk by the grid size. Returns `None` if the segment misses the margin.
fn clip_to_margin(grid: &Grid, window: &ViewWindow, segment: Segment) -> Option<Segment> {
    let origin = window.origin();
    let (dx, dy) = window.extent();
    let margin = (grid.width() + grid.subrows()) as f64;
    let mx = margin * dx / grid.width() as f64;
    let my = margin * dy / grid.subrows() as f64;
    let (x_lo, x_hi) = min_max(origin.x - mx, origin.x + dx + mx);
    let (y_lo, y_hi) = min_max(origin.y - my, origin.y + dy + my);
    let lo = [x_lo, y_lo];
    let hi = [x_hi, y_hi];

    let a = [segment.a.x, segment.a.y];
    let b = [segment.b.x, segment.b.y];
    // half the direction, so far apart endpoints cannot overflow the difference
    let half = [b[0] * 0.5 - a[0] * 0.5, b[1] * 0.5 - a[1] * 0.5];

    // Liang-Barsky over s in [0, 2]; remembers the edge that clipped each end
    let mut enter: (f64, Option<(usize, f64)>) = (0.0, None);
    let mut exit: (f64, Option<(usize, f64)>) = (2.0, None);
    for axis in 0..2 {
        let edges = [
            (-half[axis], a[axis] - lo[axis], lo[axis]),
            (half[axis], hi[axis] - a[axis], hi[axis]),
        ];
        for (p, q, edge) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > enter.0 {
                    enter = (r, Some((axis, edge)));
                }
            } else if r < exit.0 {
                exit = (r, Some((axis, edge)));
            }
        }
    }
    if enter.0 > exit.0 {
        return None;
    }

    let clipped = |(s, edge): (f64, Option<(usize, f64)>), endpoint: Point| {
        let Some((axis, edge)) = edge else {
            return endpoint;
        };
        let t = s / 2.0;
        let mut p = [0.0; 2];
        for i in 0..2 {
            p[i] = (a[i] * (1.0 - t) + b[i] * t).clamp(lo[i], hi[i]);
        }
        // exact on the clipping edge
        p[axis] = edge;
        Point::new(p[0], p[1])
    };
    Some(Segment::new(
        clipped(enter, segment.a),
        clipped(exit, segment.b),
    ))
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Whether both endpoints lie past the same grid edge, in which case no visited coordinate
/// can be inside the grid.
fn outside_same_edge(grid: &Grid, (x1, y1): (i64, i64), (x2, y2): (i64, i64)) -> bool {
    let width = grid.width() as i64;
    let subrows = grid.subrows() as i64;
    (x1 < 0 && x2 < 0)
        || (y1 < 0 && y2 < 0)
        || (x1 >= width && x2 >= width)
        || (y1 >= subrows && y2 >= subrows)
}
