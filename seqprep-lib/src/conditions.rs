use std::fmt;

use crate::error::{Result, SeqPrepError};

/// Physical conditions of a simulation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Condition {
    /// Setup name
    pub name: &'static str,
    /// Scaling factor of the interaction strength epsilon
    pub eps_factor: f64,
    /// Absolute temperature [K]
    pub temperature_kelvin: f64,
    /// Solvent pH
    pub ph: f64,
    /// Ionic strength of the solution [M]
    pub ionic_strength_molar: f64,
}

/// Standard condition setups
static CONDITIONS: [Condition; 2] = [
    Condition { name: "default", eps_factor: 0.2, temperature_kelvin: 298.0, ph: 7.0, ionic_strength_molar: 0.15 },
    Condition { name: "Borgia_in_silico", eps_factor: 0.2, temperature_kelvin: 300.0, ph: 6.0, ionic_strength_molar: 0.0 },
];

/// All the standard setups, in declaration order
pub fn conditions() -> &'static [Condition] { &CONDITIONS }

/// Finds a standard setup by its name
pub fn condition(name: &str) -> Result<&'static Condition> {
    CONDITIONS.iter().find(|c| c.name == name)
        .ok_or_else(|| SeqPrepError::InvalidInput(format!("unknown condition setup '{}'", name)))
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name\teps_factor\ttemp\tpH\tionic")?;
        writeln!(f, "{}\t{}\t{}\t{}\t{}", self.name, self.eps_factor, self.temperature_kelvin,
                 self.ph, self.ionic_strength_molar)
    }
}
