use crate::polar::LineParameters;
use log::debug;
use std::f64::consts::PI;

/// Whether two angles describe the same orientation, including the
/// antiparallel case (179° against 0°).
pub fn are_thetas_close(a: f64, b: f64, tolerance: f64) -> bool {
    let delta = (a - b).abs();
    delta <= tolerance || (delta - PI).abs() <= tolerance
}

/// Splits lines into orientation families. Each group is anchored on its
/// first line.
///
/// Returns however many groups exist; a quadrilateral needs exactly two
/// with at least two lines each, which is checked when resolving corners.
pub fn group(lines: &[LineParameters], theta_tolerance: f64) -> Vec<Vec<LineParameters>> {
    let mut groups: Vec<Vec<LineParameters>> = vec![];

    for line in lines.iter() {
        let family = groups
            .iter()
            .position(|g| are_thetas_close(line.theta, g[0].theta, theta_tolerance));

        match family {
            None => groups.push(vec![*line]),
            Some(index) => groups[index].push(*line),
        }
    }

    debug!(
        "grouped {} lines into {} orientation groups {:?}",
        lines.len(),
        groups.len(),
        groups.iter().map(Vec::len).collect::<Vec<_>>(),
    );

    groups
}
