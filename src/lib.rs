//! Physical constants, unit-conversion factors and periodic-table
//! data for quantum-chemistry calculations.
//!
//! The registry is built in four stages with an explicit data-flow
//! order: the CODATA base constants ([`constants`]) feed the derived
//! constant chain, which feeds the conversion factors (both in
//! [`units`]), and the Angstrom -> Bohr factor from that stage drives
//! the one-time rescaling of the length-valued element tables
//! ([`elements`]). Once built, a [`Registry`] is immutable.
//!
//! Most consumers want the process-wide instance:
//!
//! ```
//! let reg = physcon::registry();
//! let r = reg.elements.covalent_radius(6)?; // carbon, in Bohr
//! assert!(r > 0.0);
//! # Ok::<(), physcon::ElementError>(())
//! ```

use std::sync::OnceLock;

pub mod config;
pub mod constants;
pub mod elements;
pub mod units;

pub use config::{Settings, SettingsError};
pub use elements::{ElementError, ElementTables};
pub use units::{ConversionFactors, DerivedConstants};

/// The complete constants-and-tables registry.
///
/// Built once from a [`Settings`]; every field is plain data and may
/// be read concurrently without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    /// Constants derived from the CODATA base set
    pub constants: DerivedConstants,
    /// Conversion factors between atomic units and other unit systems
    pub units: ConversionFactors,
    /// Periodic-table property tables
    pub elements: ElementTables,
    max_mom: usize,
}

impl Registry {
    /// Builds the registry, evaluating the four stages in dependency
    /// order. Pure arithmetic over literal data: cannot fail.
    pub fn build(settings: &Settings) -> Self {
        log::debug!("building registry with max_mom = {}", settings.max_mom);
        let constants = DerivedConstants::derive();
        let units = ConversionFactors::derive(&constants, settings.max_mom);
        let elements = ElementTables::build(units.bohr);
        Self {
            constants,
            units,
            elements,
            max_mom: settings.max_mom,
        }
    }

    /// The maximum electrostatic-moment rank this registry was built
    /// with; equals the length of `units.esu` when greater than 1.
    pub fn max_mom(&self) -> usize {
        self.max_mom
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry, built on first use with the
/// default settings (maximum moment rank 3).
///
/// Code that needs a non-default moment rank should carry its own
/// `Registry::build(&settings)` instead; the singleton is never
/// rebuilt.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry::build(&Settings::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_deterministic() {
        let a = Registry::build(&Settings::default());
        let b = Registry::build(&Settings::default());
        // bit-identical, not merely close
        assert_eq!(a, b);
    }

    #[test]
    fn singleton_uses_default_settings() {
        let reg = registry();
        assert_eq!(reg.max_mom(), 3);
        assert_eq!(reg.units.esu.len(), 3);
        assert!(std::ptr::eq(reg, registry()));
    }

    #[test]
    fn stages_are_wired_in_order() {
        let reg = Registry::build(&Settings::default());
        // the transform pass must have used this build's bohr factor
        let raw_covrad_c = 0.77; // Angstrom
        let r = reg.elements.covalent_radius(6).unwrap();
        let rel_err = (r - raw_covrad_c * reg.units.bohr).abs() / r;
        assert!(rel_err < 1.0e-9);
        assert_eq!(reg.units.bohr, 1.0e-10 / reg.constants.abohr);
    }

    #[test]
    fn custom_moment_rank() {
        let settings = Settings { max_mom: 5 };
        let reg = Registry::build(&settings);
        assert_eq!(reg.units.esu.len(), 5);
        for lm in 1..5 {
            assert_eq!(reg.units.esu[lm], reg.units.esu[lm - 1] / reg.units.bohr);
        }
    }

    #[test]
    fn exact_literals_survive() {
        use crate::constants::*;
        assert_eq!(CLIGHT, 2.99792458e8);
        assert_eq!(PRESSURE, 1.0e5);
        let reg = registry();
        assert_eq!(reg.elements.atomic_mass(6).unwrap(), 12.011);
        assert_eq!(AOSYM[0], "s");
        assert_eq!(AOSYM[3], "f");
        assert_eq!(XYZ, ["x", "y", "z"]);
        assert_eq!(NOS, ["1", "2", "3"]);
    }
}
