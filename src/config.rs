use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How aggressively near-duplicate lines are merged and orientations
/// grouped. There is no universal default: both depend on image resolution
/// and detector noise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Pixels.
    pub rho_tolerance: f64,
    /// Radians.
    pub theta_tolerance: f64,
}

impl Tolerances {
    pub fn new(rho_tolerance: f64, theta_tolerance: f64) -> Result<Self> {
        let t = Tolerances { rho_tolerance, theta_tolerance };
        t.validate()?;
        Ok(t)
    }

    pub fn from_degrees(rho_tolerance: f64, theta_tolerance_deg: f64) -> Result<Self> {
        Tolerances::new(rho_tolerance, theta_tolerance_deg.to_radians())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("rho_tolerance", self.rho_tolerance), ("theta_tolerance", self.theta_tolerance)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("{name} must be finite and non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

pub fn parse_tolerances(contents: &str) -> Result<Tolerances> {
    let tolerances: Tolerances =
        serde_json::from_str(contents).map_err(|e| Error::Config(format!("failed to parse tolerances: {e}")))?;
    tolerances.validate()?;
    Ok(tolerances)
}

pub fn load_tolerances(path: &Path) -> Result<Tolerances> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
    parse_tolerances(&contents)
}
