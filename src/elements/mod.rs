//! Per-element property tables, indexed by atomic number

use std::error::Error;
use std::fmt;

mod data;

/// Number of table entries: atomic numbers 0 (dummy atom) through 110.
pub const N_SPECIES: usize = 111;

/// Highest atomic number with tabulated properties.
pub const MAX_ATOMIC_NUMBER: usize = N_SPECIES - 1;

/// Highest atomic number covered by the r2r4 table.
pub const MAX_R2R4_ATOMIC_NUMBER: usize = 94;

// All tables share the indexing convention; the shorter r2r4 table is
// checked against its own bound.
const _: () = assert!(data::COVRAD.len() == N_SPECIES);
const _: () = assert!(data::D3CR.len() == N_SPECIES);
const _: () = assert!(data::VDWRAD.len() == N_SPECIES);
const _: () = assert!(data::CSIX.len() == N_SPECIES);
const _: () = assert!(data::ELSYM.len() == N_SPECIES);
const _: () = assert!(data::ELGRP.len() == N_SPECIES);
const _: () = assert!(data::ELCONF.len() == N_SPECIES);
const _: () = assert!(data::STDMATOM.len() == N_SPECIES);
const _: () = assert!(data::R2R4.len() == MAX_R2R4_ATOMIC_NUMBER);

/// Error returned when an element lookup is given an atomic number
/// outside the tabulated range.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ElementError {
    z: usize,
    max: usize,
}

impl fmt::Debug for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "no tabulated data for atomic number {} (tables end at {})",
            self.z, self.max,
        )
    }
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ElementError {}

impl ElementError {
    fn out_of_range(z: usize, max: usize) -> Self {
        Self { z, max }
    }

    /// The offending atomic number
    pub fn atomic_number(&self) -> usize {
        self.z
    }
}

/// The periodic-table property tables exposed to consumers.
///
/// The three length-valued tables (covalent, D3 covalent and van der
/// Waals radii) are stored in Bohr, converted from their Angstrom
/// source values exactly once during `build`. Everything else is
/// served in its published units.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTables {
    covrad: [f64; N_SPECIES],
    d3cr: [f64; N_SPECIES],
    vdwrad: [f64; N_SPECIES],
}

impl ElementTables {
    /// Runs the unit-transform pass: rescales the Angstrom-sourced
    /// radius tables by `bohr`, the Angstrom -> Bohr conversion factor.
    pub fn build(bohr: f64) -> Self {
        log::debug!("element tables: rescaling radii with bohr = {:.9e}", bohr);
        Self {
            covrad: data::COVRAD.map(|x| x * bohr),
            d3cr: data::D3CR.map(|x| x * bohr),
            vdwrad: data::VDWRAD.map(|x| x * bohr),
        }
    }

    fn check(&self, z: usize) -> Result<usize, ElementError> {
        if z < N_SPECIES {
            Ok(z)
        } else {
            Err(ElementError::out_of_range(z, MAX_ATOMIC_NUMBER))
        }
    }

    /// Element symbol, right-justified to two characters ("X" for the
    /// dummy atom at index 0).
    pub fn symbol(&self, z: usize) -> Result<&'static str, ElementError> {
        self.check(z).map(|z| data::ELSYM[z])
    }

    /// Element symbol with the justification padding removed.
    pub fn trimmed_symbol(&self, z: usize) -> Result<&'static str, ElementError> {
        self.symbol(z).map(|s| s.trim())
    }

    /// Periodic-table group label, right-justified to five characters.
    pub fn group(&self, z: usize) -> Result<&'static str, ElementError> {
        self.check(z).map(|z| data::ELGRP[z])
    }

    /// Ground-state electron configuration.
    pub fn configuration(&self, z: usize) -> Result<&'static str, ElementError> {
        self.check(z).map(|z| data::ELCONF[z])
    }

    /// Standard atomic mass, units of amu.
    pub fn atomic_mass(&self, z: usize) -> Result<f64, ElementError> {
        self.check(z).map(|z| data::STDMATOM[z])
    }

    /// Covalent radius, units of Bohr.
    pub fn covalent_radius(&self, z: usize) -> Result<f64, ElementError> {
        self.check(z).map(|z| self.covrad[z])
    }

    /// Covalent radius used by the D3 dispersion correction, units of Bohr.
    pub fn d3_covalent_radius(&self, z: usize) -> Result<f64, ElementError> {
        self.check(z).map(|z| self.d3cr[z])
    }

    /// Van der Waals radius, units of Bohr.
    pub fn vdw_radius(&self, z: usize) -> Result<f64, ElementError> {
        self.check(z).map(|z| self.vdwrad[z])
    }

    /// Empirical C6 dispersion coefficient, atomic units.
    pub fn c6(&self, z: usize) -> Result<f64, ElementError> {
        self.check(z).map(|z| data::CSIX[z])
    }

    /// Multipole expectation-value ratio <r^4>/<r^2>, atomic units.
    /// Tabulated for elements 1 through 94 only.
    pub fn r2r4(&self, z: usize) -> Result<f64, ElementError> {
        if (1..=MAX_R2R4_ATOMIC_NUMBER).contains(&z) {
            Ok(data::R2R4[z - 1])
        } else {
            Err(ElementError::out_of_range(z, MAX_R2R4_ATOMIC_NUMBER))
        }
    }

    /// Looks up the atomic number for an element symbol, ignoring the
    /// justification padding. Returns None for unknown symbols; note
    /// that "X", the dummy atom, maps to 0.
    pub fn atomic_number(&self, symbol: &str) -> Option<usize> {
        let symbol = symbol.trim();
        data::ELSYM.iter().position(|s| s.trim() == symbol)
    }

    /// All element symbols, in atomic-number order.
    pub fn symbols(&self) -> &'static [&'static str] {
        &data::ELSYM
    }

    /// All group labels, in atomic-number order.
    pub fn groups(&self) -> &'static [&'static str] {
        &data::ELGRP
    }

    /// All electron configurations, in atomic-number order.
    pub fn configurations(&self) -> &'static [&'static str] {
        &data::ELCONF
    }

    /// All standard atomic masses, in atomic-number order.
    pub fn atomic_masses(&self) -> &'static [f64] {
        &data::STDMATOM
    }

    /// All covalent radii in Bohr, in atomic-number order.
    pub fn covalent_radii(&self) -> &[f64] {
        &self.covrad
    }

    /// All D3 covalent radii in Bohr, in atomic-number order.
    pub fn d3_covalent_radii(&self) -> &[f64] {
        &self.d3cr
    }

    /// All van der Waals radii in Bohr, in atomic-number order.
    pub fn vdw_radii(&self) -> &[f64] {
        &self.vdwrad
    }

    /// All C6 coefficients, in atomic-number order.
    pub fn c6_coefficients(&self) -> &'static [f64] {
        &data::CSIX
    }

    /// All <r^4>/<r^2> ratios, for elements 1 through 94.
    pub fn r2r4_ratios(&self) -> &'static [f64] {
        &data::R2R4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ConversionFactors, DerivedConstants};

    fn tables() -> (ElementTables, f64) {
        let c = DerivedConstants::derive();
        let u = ConversionFactors::derive(&c, 3);
        (ElementTables::build(u.bohr), u.bohr)
    }

    #[test]
    fn symbols_and_sentinels() {
        let (t, _) = tables();
        assert_eq!(t.trimmed_symbol(0).unwrap(), "X");
        assert_eq!(t.trimmed_symbol(1).unwrap(), "H");
        assert_eq!(t.trimmed_symbol(6).unwrap(), "C");
        assert_eq!(t.symbol(6).unwrap(), " C");
        assert_eq!(t.trimmed_symbol(110).unwrap(), "Ds");
        assert_eq!(t.group(0).unwrap(), " NONE");
        assert_eq!(t.group(26).unwrap(), "VIIIB");
        assert_eq!(t.configuration(2).unwrap(), "1s^2");
    }

    #[test]
    fn radii_are_transformed_exactly_once() {
        let (t, bohr) = tables();
        // literal source values are in Angstrom
        assert_eq!(t.covalent_radius(6).unwrap(), 0.77 * bohr);
        assert_eq!(t.d3_covalent_radius(1).unwrap(), 0.32 * bohr);
        assert_eq!(t.vdw_radius(1).unwrap(), 1.20 * bohr);
        // the dummy atom has no size in any unit system
        assert_eq!(t.covalent_radius(0).unwrap(), 0.0);
    }

    #[test]
    fn placeholder_radii_are_capped() {
        let (t, bohr) = tables();
        for z in 92..=110 {
            assert_eq!(t.covalent_radius(z).unwrap(), 2.00 * bohr);
        }
    }

    #[test]
    fn masses_and_dispersion_data() {
        let (t, _) = tables();
        assert_eq!(t.atomic_mass(6).unwrap(), 12.011);
        assert_eq!(t.atomic_mass(43).unwrap(), 98.0); // Tc, mass-number placeholder
        assert_eq!(t.c6(1).unwrap(), 2.845);
        assert_eq!(t.r2r4(1).unwrap(), 8.0589);
        assert_eq!(t.r2r4(94).unwrap(), 16.1576);
    }

    #[test]
    fn tables_are_aligned() {
        let (t, _) = tables();
        assert_eq!(t.symbols().len(), N_SPECIES);
        assert_eq!(t.groups().len(), N_SPECIES);
        assert_eq!(t.configurations().len(), N_SPECIES);
        assert_eq!(t.atomic_masses().len(), N_SPECIES);
        assert_eq!(t.covalent_radii().len(), N_SPECIES);
        assert_eq!(t.d3_covalent_radii().len(), N_SPECIES);
        assert_eq!(t.vdw_radii().len(), N_SPECIES);
        assert_eq!(t.c6_coefficients().len(), N_SPECIES);
        assert_eq!(t.r2r4_ratios().len(), MAX_R2R4_ATOMIC_NUMBER);
    }

    #[test]
    fn out_of_range_lookups_are_rejected() {
        let (t, _) = tables();
        assert!(t.symbol(111).is_err());
        assert!(t.covalent_radius(usize::MAX).is_err());
        assert!(t.r2r4(0).is_err());
        assert!(t.r2r4(95).is_err());
        let err = t.atomic_mass(111).unwrap_err();
        assert_eq!(err.atomic_number(), 111);
    }

    #[test]
    fn symbol_round_trip() {
        let (t, _) = tables();
        for z in 0..N_SPECIES {
            let sym = t.symbol(z).unwrap();
            assert_eq!(t.atomic_number(sym), Some(z));
        }
        assert_eq!(t.atomic_number("H"), Some(1));
        assert_eq!(t.atomic_number("Og"), None);
    }
}
