use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

pub mod config;
pub mod corners;
pub mod error;
pub mod groups;
pub mod lines;
pub mod polar;

pub use config::Tolerances;
pub use corners::Quad;
pub use error::{Error, Result};
pub use polar::{LineParameters, Point, Segment};

#[derive(Default, Debug, Clone, Copy)]
pub struct StageTimes {
    pub polar: std::time::Duration,
    pub lines: std::time::Duration,
    pub groups: std::time::Duration,
    pub corners: std::time::Duration,
}

/// Runs the whole chain over one set of detected segments and reports how
/// long each stage took.
pub fn process(segments: &[Segment], tolerances: &Tolerances) -> (StageTimes, Result<Quad>) {
    let mut times = StageTimes::default();

    let mut time = Instant::now();
    let normalized = match polar::calculate(segments) {
        Ok(normalized) => normalized,
        Err(e) => return (times, Err(e)),
    };
    times.polar = time.elapsed();
    time = Instant::now();

    let lines = lines::collapse(&normalized, tolerances.rho_tolerance, tolerances.theta_tolerance);
    times.lines = time.elapsed();
    time = Instant::now();

    let groups = groups::group(&lines, tolerances.theta_tolerance);
    times.groups = time.elapsed();
    time = Instant::now();

    if groups.len() > 2 {
        warn!("{} orientation groups found, using the first two", groups.len());
    }

    let quad = corners::calculate(&groups);
    times.corners = time.elapsed();

    match &quad {
        Ok(q) => debug!("corners {}", q.iter().map(polar::format_point).collect::<Vec<_>>().join(" ")),
        Err(e) => debug!("no quadrilateral: {}", e),
    }

    (times, quad)
}

pub fn detect(segments: &[Segment], tolerances: &Tolerances) -> Result<Quad> {
    process(segments, tolerances).1
}

/// Detects independent segment sets in parallel. Results follow input order.
pub fn detect_batch(batch: &[Vec<Segment>], tolerances: &Tolerances) -> Vec<Result<Quad>> {
    batch
        .par_iter()
        .map(|segments| detect(segments, tolerances))
        .collect()
}
