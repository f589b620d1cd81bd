//! Derived physical constants and conversion factors between
//! atomic units and SI/CGS/spectroscopic units

use std::f64::consts;

use crate::constants::*;

/// Physical constants derived from the CODATA base set.
///
/// Each field is defined by a closed-form expression over the base
/// constants and the fields that precede it; `derive` evaluates the
/// chain in dependency order.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedConstants {
    /// Archimedes' constant
    pub pi: f64,
    /// Permeability of vacuum, units of N/A^2
    pub muperm: f64,
    /// Fine-structure constant
    pub afine: f64,
    /// Gas constant, units of J/(K mol)
    pub rgas: f64,
    /// Rydberg constant, units of 1/m
    pub rydberg: f64,
    /// Bohr radius, units of m
    pub abohr: f64,
    /// Coulomb type constant for MM, units of kcal/mol
    pub cmm: f64,
}

impl DerivedConstants {
    /// Evaluates the derivation chain. The order of the bindings is a
    /// hard constraint: every right-hand side refers only to the base
    /// constants and to values bound above it.
    pub fn derive() -> Self {
        let pi = consts::PI;
        let muperm = 4.0 * pi * 1.0e-7;
        let afine = 0.5 * muperm * CLIGHT * ECHARGE.powi(2) / HPLANCK;
        let rgas = NAVOG * KBOLTZ;
        let rydberg = 0.5 * EMASS * CLIGHT * afine.powi(2) / HPLANCK;
        let abohr = afine / (4.0 * pi * rydberg);
        let cmm = ECHARGE.powi(2) * NAVOG * 1.0e7 / (4.184 * 4.0 * pi * EPSI0);

        log::debug!(
            "derived constants: afine = {:.9e}, rydberg = {:.9e}, abohr = {:.9e}",
            afine, rydberg, abohr,
        );

        Self { pi, muperm, afine, rgas, rydberg, abohr, cmm }
    }
}

/// Multipliers that translate between atomic units and other unit
/// systems, computed from the derived constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionFactors {
    /// amu -> atomic units (electron masses)
    pub amu: f64,
    /// Angstrom -> Bohr
    pub bohr: f64,
    /// femtosecond -> atomic units of time
    pub fsec: f64,
    /// Hartree -> J
    pub joule: f64,
    /// Hartree -> kJ/mol
    pub kjmol: f64,
    /// Hartree -> kcal/mol
    pub kcalmol: f64,
    /// Hartree -> eV
    pub evolt: f64,
    /// Hartree -> Hz
    pub hz: f64,
    /// Hartree -> MHz
    pub mhz: f64,
    /// Hartree -> 1/cm (wave numbers)
    pub wavenum: f64,
    /// 1/cm -> 1/s
    pub wavesec: f64,
    /// Hartree/Bohr^2 -> 1/cm, for harmonic vibrational frequencies
    pub vibfac: f64,
    /// atomic units -> Pa
    pub pascal: f64,
    /// Hartree -> esu, one entry per electrostatic-moment rank.
    /// Entry k is entry k-1 divided by the Angstrom -> Bohr factor,
    /// so the monopole, dipole, quadrupole, ... conversions each pick
    /// up one additional inverse length.
    pub esu: Vec<f64>,
}

impl ConversionFactors {
    /// Computes the conversion factor set. `max_mom` is the maximum
    /// electrostatic-moment rank; the esu sequence degenerates to a
    /// single entry whenever `max_mom <= 1`.
    pub fn derive(c: &DerivedConstants, max_mom: usize) -> Self {
        let amu = AMUKG / EMASS;
        let bohr = 1.0e-10 / c.abohr;
        let fsec = 4.0 * c.pi * c.rydberg * CLIGHT * 1.0e-15;
        let joule = 2.0 * c.rydberg * HPLANCK * CLIGHT;
        let kjmol = 0.001 * joule * NAVOG;
        let kcalmol = kjmol / 4.184;
        let evolt = joule / ECHARGE;
        let hz = joule / HPLANCK;
        let mhz = 1.0e-6 * hz;
        let wavenum = 0.02 * c.rydberg;
        let wavesec = 100.0 * CLIGHT;
        let vibfac = 5.0 * kjmol.sqrt() / (c.pi * c.abohr * CLIGHT);
        let pascal = 1.0e30 * EMASS * fsec.powi(2) / c.abohr;

        let mut esu = Vec::with_capacity(max_mom.max(1));
        esu.push(1.0e21 * c.abohr * CLIGHT * ECHARGE);
        for lm in 1..max_mom.max(1) {
            let next = esu[lm - 1] / bohr;
            esu.push(next);
        }

        log::debug!(
            "conversion factors: bohr = {:.9e}, joule = {:.9e}, esu ranks = {}",
            bohr, joule, esu.len(),
        );

        Self {
            amu, bohr, fsec, joule, kjmol, kcalmol, evolt,
            hz, mhz, wavenum, wavesec, vibfac, pascal, esu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(value: f64, expected: f64, max_rel_err: f64) -> bool {
        let err = ((value - expected) / expected).abs();
        println!("got {:.10e}, expected {:.10e}, rel. err. = {:e}", value, expected, err);
        err < max_rel_err
    }

    #[test]
    fn codata_2002_values() {
        let c = DerivedConstants::derive();
        assert!(close(c.afine, 7.297352568e-3, 1.0e-8));
        assert!(close(c.rydberg, 1.0973731568e7, 1.0e-8));
        assert!(close(c.abohr, 0.5291772108e-10, 1.0e-8));
        assert!(close(c.rgas, 8.314472, 1.0e-7));
    }

    #[test]
    fn derivation_chain_is_reproducible() {
        let c = DerivedConstants::derive();
        // recompute each link from its documented formula
        assert_eq!(c.muperm, 4.0 * c.pi * 1.0e-7);
        assert_eq!(c.afine, 0.5 * c.muperm * CLIGHT * ECHARGE.powi(2) / HPLANCK);
        assert_eq!(c.rydberg, 0.5 * EMASS * CLIGHT * c.afine.powi(2) / HPLANCK);
        assert_eq!(c.abohr, c.afine / (4.0 * c.pi * c.rydberg));
    }

    #[test]
    fn hartree_conversions() {
        let c = DerivedConstants::derive();
        let u = ConversionFactors::derive(&c, 3);
        assert!(close(u.bohr, 1.8897261, 1.0e-7));
        assert!(close(u.evolt, 27.2113845, 1.0e-8));
        assert!(close(u.kcalmol, 627.5095, 1.0e-6));
        assert!(close(u.wavenum, 219474.63, 1.0e-7));
        assert!(close(u.amu, 1822.88848, 1.0e-7));
        assert_eq!(u.bohr, 1.0e-10 / c.abohr);
        assert_eq!(u.mhz, 1.0e-6 * u.hz);
        assert_eq!(u.wavesec, 100.0 * CLIGHT);
    }

    #[test]
    fn esu_geometric_progression() {
        let c = DerivedConstants::derive();
        let u = ConversionFactors::derive(&c, 3);
        assert_eq!(u.esu.len(), 3);
        assert!(close(u.esu[0], 2.5417463, 1.0e-6));
        for lm in 1..u.esu.len() {
            assert_eq!(u.esu[lm], u.esu[lm - 1] / u.bohr);
        }
    }

    #[test]
    fn esu_degenerates_below_rank_one() {
        let c = DerivedConstants::derive();
        assert_eq!(ConversionFactors::derive(&c, 0).esu.len(), 1);
        assert_eq!(ConversionFactors::derive(&c, 1).esu.len(), 1);
        assert_eq!(ConversionFactors::derive(&c, 5).esu.len(), 5);
    }
}
