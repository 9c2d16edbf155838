use crate::error::{Error, Result};
use crate::polar::{LineParameters, Point};
use std::f64::consts::FRAC_PI_2;

/// Four corners, in the order produced by [`resolve`].
pub type Quad = [Point; 4];

const STEP: f64 = 100.0;

// Below this |sin| of the angle between two lines they count as parallel.
const PARALLEL_SINE: f64 = 1e-9;

fn two_points(line: &LineParameters) -> (Point, Point) {
    let a = line.foot();
    let direction = FRAC_PI_2 - line.theta;
    let b = Point::new(a.x + STEP * direction.cos(), a.y - STEP * direction.sin());
    (a, b)
}

/// Intersection of two polar lines.
///
/// Parallel lines have no intersection and yield non-finite coordinates.
pub fn intersect(l1: &LineParameters, l2: &LineParameters) -> Point {
    let (p1, p2) = two_points(l1);
    let (p3, p4) = two_points(l2);

    // https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection
    let d12 = p1 - p2;
    let d34 = p3 - p4;
    let denominator = d12.perp(&d34);
    if denominator.abs() <= PARALLEL_SINE * STEP * STEP {
        return Point::new(f64::NAN, f64::NAN);
    }
    let t = (p1 - p3).perp(&d34) / denominator;

    p1 + (p2 - p1) * t
}

/// Intersects the first two lines of each orientation group.
///
/// Corners come out as `g0[0]×g1[1]`, `g0[0]×g1[0]`, `g0[1]×g1[0]`,
/// `g0[1]×g1[1]`, which walks around the quadrilateral as long as each
/// group lists one side before its opposite side. That ordering is taken
/// from the caller as is. Groups past the second are ignored.
pub fn resolve(groups: &[Vec<LineParameters>]) -> Result<Quad> {
    if groups.len() < 2 {
        return Err(Error::NotEnoughGroups { found: groups.len() });
    }

    for (index, g) in groups[..2].iter().enumerate() {
        if g.len() < 2 {
            return Err(Error::NotEnoughLines { group: index, found: g.len() });
        }
    }

    let (g0, g1) = (&groups[0], &groups[1]);

    Ok([
        intersect(&g0[0], &g1[1]),
        intersect(&g0[0], &g1[0]),
        intersect(&g0[1], &g1[0]),
        intersect(&g0[1], &g1[1]),
    ])
}

/// Like [`resolve`], but a corner with non-finite coordinates is an error
/// instead of a point.
pub fn calculate(groups: &[Vec<LineParameters>]) -> Result<Quad> {
    let quad = resolve(groups)?;

    match quad.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(index) => Err(Error::CornerNotFound { index }),
        None => Ok(quad),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(p: &Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> LineParameters {
        LineParameters::from_points(&Point::new(x1, y1), &Point::new(x2, y2))
    }

    #[test]
    fn perpendicular_lines() {
        let vertical = line(5.0, 0.0, 5.0, 10.0);
        let horizontal = line(0.0, 3.0, 10.0, 3.0);
        assert!(close(&intersect(&vertical, &horizontal), 5.0, 3.0));
        assert!(close(&intersect(&horizontal, &vertical), 5.0, 3.0));
    }

    #[test]
    fn slanted_lines() {
        // y = 10 - x and y = x
        let falling = line(0.0, 10.0, 10.0, 0.0);
        let rising = line(0.0, 0.0, 10.0, 10.0);
        assert!(close(&intersect(&falling, &rising), 5.0, 5.0));
    }

    #[test]
    fn parallel_lines_are_not_finite() {
        let a = LineParameters::new(0.0, 0.0);
        let b = LineParameters::new(10.0, 0.0);
        let p = intersect(&a, &b);
        assert!(!(p.x.is_finite() && p.y.is_finite()));

        // rounding in the second point must not turn these into far corners
        let angle = 74.5f64.to_radians();
        let p = intersect(&LineParameters::new(300.0, angle), &LineParameters::new(700.0, angle));
        assert!(!(p.x.is_finite() && p.y.is_finite()));

        let p = intersect(&LineParameters::new(-20.0, PI - 0.3), &LineParameters::new(20.0, -0.3));
        assert!(!(p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn nearly_parallel_lines_still_meet() {
        // one degree apart, crossing far away but finitely
        let p = intersect(&LineParameters::new(0.0, 0.0), &LineParameters::new(10.0, 1f64.to_radians()));
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn square_corners_in_order() {
        let groups = vec![
            vec![LineParameters::new(0.0, FRAC_PI_2), LineParameters::new(10.0, FRAC_PI_2)],
            vec![LineParameters::new(10.0, 0.0), LineParameters::new(0.0, 0.0)],
        ];

        let quad = resolve(&groups).unwrap();
        assert!(close(&quad[0], 0.0, 0.0));
        assert!(close(&quad[1], 10.0, 0.0));
        assert!(close(&quad[2], 10.0, 10.0));
        assert!(close(&quad[3], 0.0, 10.0));
    }

    #[test]
    fn single_line_group_fails() {
        let groups = vec![
            vec![LineParameters::new(0.0, FRAC_PI_2), LineParameters::new(10.0, FRAC_PI_2)],
            vec![LineParameters::new(10.0, 0.0)],
        ];
        assert_eq!(resolve(&groups), Err(Error::NotEnoughLines { group: 1, found: 1 }));
    }

    #[test]
    fn single_group_fails() {
        let groups = vec![vec![LineParameters::new(0.0, 0.0), LineParameters::new(10.0, 0.0)]];
        assert_eq!(resolve(&groups), Err(Error::NotEnoughGroups { found: 1 }));
        assert_eq!(resolve(&[]), Err(Error::NotEnoughGroups { found: 0 }));
    }

    #[test]
    fn parallel_groups_report_missing_corner() {
        // second group is parallel to the first, so nothing intersects
        let groups = vec![
            vec![LineParameters::new(0.0, 0.0), LineParameters::new(10.0, 0.0)],
            vec![LineParameters::new(20.0, 0.0), LineParameters::new(30.0, 0.0)],
        ];
        assert!(resolve(&groups).is_ok());
        assert_eq!(calculate(&groups), Err(Error::CornerNotFound { index: 0 }));
    }
}
