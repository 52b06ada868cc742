//! Common utility functions.

/// Runs a function for each coordinate on the Bresenham line from `start` to `end`.
///
/// Both endpoints are visited, consecutive coordinates differ by at most one in each axis,
/// and a zero-length line visits its single coordinate once.
pub fn for_coord_in_line(
    (start_x, start_y): (i64, i64),
    (end_x, end_y): (i64, i64),
    mut f: impl FnMut(i64, i64),
) {
    let dx = (end_x - start_x).abs();
    let dy = (end_y - start_y).abs();
    let sx = if start_x < end_x { 1 } else { -1 };
    let sy = if start_y < end_y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut x = start_x;
    let mut y = start_y;
    loop {
        f(x, y);
        if x == end_x && y == end_y {
            break;
        }
        // the y test uses the error from before the x step
        let e2 = 2 * err;
        if err > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn collect(start: (i64, i64), end: (i64, i64)) -> Vec<(i64, i64)> {
        let mut coords = vec![];
        for_coord_in_line(start, end, |x, y| coords.push((x, y)));
        coords
    }

    #[test]
    fn test_single_coordinate() {
        assert_eq!(collect((3, -2), (3, -2)), vec![(3, -2)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(
            collect((0, 0), (3, 3)),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn test_steep_line_steps_x_early() {
        assert_eq!(
            collect((0, 0), (1, 3)),
            vec![(0, 0), (1, 1), (1, 2), (1, 3)]
        );
        assert_eq!(
            collect((1, 4), (0, 0)),
            vec![(1, 4), (0, 3), (0, 2), (0, 1), (0, 0)]
        );
    }

    #[test]
    fn test_shallow_and_steep() {
        assert_eq!(
            collect((0, 0), (4, 1)),
            vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 1)]
        );
        let steep = collect((1, 4), (0, 0));
        assert_eq!(steep.first(), Some(&(1, 4)));
        assert_eq!(steep.last(), Some(&(0, 0)));
        assert_eq!(steep.len(), 5);
    }

    #[test]
    fn test_random_lines_are_connected() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let start = (rng.gen_range(-40..40), rng.gen_range(-40..40));
            let end = (rng.gen_range(-40..40), rng.gen_range(-40..40));
            let coords = collect(start, end);

            assert_eq!(coords.first(), Some(&start));
            assert_eq!(coords.last(), Some(&end));
            // one visit per step along the major axis
            let major = (end.0 - start.0).abs().max((end.1 - start.1).abs());
            assert_eq!(coords.len() as i64, major + 1);
            for pair in coords.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
                assert_ne!(a, b);
            }
        }
    }
}
