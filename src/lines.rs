use crate::polar::LineParameters;
use log::debug;

fn close_parameters(l1: &LineParameters, l2: &LineParameters, rho_tolerance: f64, theta_tolerance: f64) -> bool {
    (l1.rho - l2.rho).abs() <= rho_tolerance && (l1.theta - l2.theta).abs() <= theta_tolerance
}

/// Whether two lines are the same detection, trying both polar spellings.
pub fn are_lines_similar(l1: &LineParameters, l2: &LineParameters, rho_tolerance: f64, theta_tolerance: f64) -> bool {
    close_parameters(l1, l2, rho_tolerance, theta_tolerance)
        || close_parameters(&l1.opposite(), &l2.opposite(), rho_tolerance, theta_tolerance)
}

/// Greedy single pass clustering. A line joins the first cluster whose
/// first member is similar, otherwise it starts a new cluster.
pub fn cluster(lines: &[LineParameters], rho_tolerance: f64, theta_tolerance: f64) -> Vec<Vec<LineParameters>> {
    let mut clusters: Vec<Vec<LineParameters>> = vec![];

    for line in lines.iter() {
        let dup = clusters
            .iter()
            .position(|c| are_lines_similar(line, &c[0], rho_tolerance, theta_tolerance));

        match dup {
            None => clusters.push(vec![*line]),
            Some(index) => clusters[index].push(*line),
        }
    }

    clusters
}

/// One representative per cluster, in order of first appearance.
///
/// The representative is the first line seen, never an average: averaging
/// angles next to the ±π seam mixes up the two spellings of a line.
pub fn collapse(lines: &[LineParameters], rho_tolerance: f64, theta_tolerance: f64) -> Vec<LineParameters> {
    let clusters = cluster(lines, rho_tolerance, theta_tolerance);
    debug!("collapsed {} lines into {} clusters", lines.len(), clusters.len());

    clusters.iter().map(|c| c[0]).collect()
}
