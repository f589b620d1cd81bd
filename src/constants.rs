//! Fundamental physical constants
//!
//! Values follow P.J. Mohr, B.N. Taylor, The 2002 CODATA Recommended
//! Values of the Fundamental Physical Constants, Web Version 4.0,
//! available at physics.nist.gov/constants

/// Speed of light in vacuum, units of m/s
pub const CLIGHT: f64 = 2.99792458e8;
/// Elementary charge, units of C
pub const ECHARGE: f64 = 1.6021765314e-19;
/// Electron mass, units of kg
pub const EMASS: f64 = 9.109382616e-31;
/// Electric field constant (vacuum permittivity), units of F/m
pub const EPSI0: f64 = 8.854187817e-12;
/// Planck constant, units of J s
pub const HPLANCK: f64 = 6.626069311e-34;
/// Boltzmann constant, units of J/K
pub const KBOLTZ: f64 = 1.380650524e-23;
/// Avogadro constant, units of 1/mol
pub const NAVOG: f64 = 6.022141510e23;
/// Atomic mass unit, units of kg
pub const AMUKG: f64 = 1.66053886e-27;
/// Parts per million
pub const PPM: f64 = 1.0e-6;
/// Standard pressure, units of Pa
pub const PRESSURE: f64 = 1.0e5;

/// Default maximum rank of the electrostatic moments covered by
/// the esu conversion sequence: monopole, dipole and quadrupole.
pub const DEFAULT_MAX_MOM: usize = 3;

/// Atomic orbital symbols, in order of increasing angular momentum
pub static AOSYM: [&str; 13] = [
    "s", "p", "d", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
];

/// Labels for the Cartesian components
pub static XYZ: [&str; 3] = ["x", "y", "z"];

/// Frequency labels
pub static ABC: [&str; 3] = ["a", "b", "c"];

/// Labels for matrix numbering
pub static NOS: [&str; 3] = ["1", "2", "3"];
