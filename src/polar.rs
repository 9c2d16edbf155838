use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{Error, Result};

pub type Point = nalgebra::Point2<f64>;

/// A raw detected line as `[x1, y1, x2, y2]`, the layout Hough segment
/// detectors hand out.
pub type Segment = [f64; 4];

/// Polar form of an undirected line: `x·cos(theta) + y·sin(theta) = rho`.
///
/// `theta` always lies in `(-π, π]`. The same line can also be written as
/// `(-rho, theta - π)`; use [`LineParameters::opposite`] before comparing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineParameters {
    pub rho: f64,
    pub theta: f64,
}

impl LineParameters {
    pub fn new(rho: f64, theta: f64) -> Self {
        LineParameters { rho, theta }
    }

    /// Converts the line through `p1` and `p2` into polar form.
    ///
    /// For lines with positive slope the sign of `rho` follows the sign of
    /// the y-intercept; every other line gets the unsigned distance. The
    /// result is meaningless when `p1 == p2`.
    pub fn from_points(p1: &Point, p2: &Point) -> Self {
        if p1.x == p2.x {
            return LineParameters::new(p2.x, 0.0);
        }

        let m = (p2.y - p1.y) / (p2.x - p1.x);
        let distance = (-p1.y + m * p1.x).abs() / (m * m + 1.0).sqrt();

        if m < 0.0 {
            LineParameters::new(distance, normalize_angle(FRAC_PI_2 - (-m).atan()))
        } else if m > 0.0 {
            let theta = normalize_angle(FRAC_PI_2 + m.atan());
            let intercept = p1.y - m * p1.x;
            if intercept < 0.0 {
                LineParameters::new(-distance, theta)
            } else {
                LineParameters::new(distance, theta)
            }
        } else {
            LineParameters::new(p1.y.abs(), FRAC_PI_2)
        }
    }

    pub fn from_segment(segment: &Segment) -> Self {
        let [x1, y1, x2, y2] = *segment;
        LineParameters::from_points(&Point::new(x1, y1), &Point::new(x2, y2))
    }

    /// The alternative `(-rho, theta - π)` spelling of lines leaning past
    /// vertical (`theta > π/2`). Other lines are returned unchanged, so
    /// applying it twice is the same as applying it once.
    pub fn opposite(&self) -> Self {
        if self.theta > FRAC_PI_2 {
            LineParameters::new(-self.rho, self.theta - PI)
        } else {
            *self
        }
    }

    /// Foot of the perpendicular dropped from the origin.
    pub fn foot(&self) -> Point {
        Point::new(self.theta.cos() * self.rho, self.theta.sin() * self.rho)
    }
}

impl std::fmt::Display for LineParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "theta = {}deg, rho = {}", self.theta.to_degrees(), self.rho)
    }
}

/// Whole-pixel `(x, y)` rendering of a point, for logs.
pub fn format_point(p: &Point) -> String {
    format!("({}, {})", p.x as i64, p.y as i64)
}

/// Wraps an angle into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle;
    while a <= -PI {
        a += 2.0 * PI;
    }
    while a > PI {
        a -= 2.0 * PI;
    }
    a
}

/// Converts raw segments into polar lines, refusing segments whose two
/// endpoints coincide.
pub fn calculate(segments: &[Segment]) -> Result<Vec<LineParameters>> {
    segments
        .iter()
        .enumerate()
        .map(|(index, s)| {
            if s[0] == s[2] && s[1] == s[3] {
                Err(Error::DegenerateSegment { index })
            } else {
                Ok(LineParameters::from_segment(s))
            }
        })
        .collect()
}
