//! Literal per-element property tables
//!
//! One entry per atomic number, from 0 (the dummy atom) to 110.
//! Radii are stored in Angstrom exactly as published; the conversion
//! to Bohr happens once, in `ElementTables::build`. Entries of 2.00 in
//! the radius tables and integer masses in `STDMATOM` are documented
//! placeholders for synthetic and superheavy elements, not data.

use super::N_SPECIES;

/// Standard covalent radii, units of Angstrom.
/// Lit.: R.T. Sanderson, Inorganic Chemistry, Reinhold 1967
pub static COVRAD: [f64; N_SPECIES] = [
    0.00,
    0.32, 0.93,
    1.23, 0.90, 0.82, 0.77, 0.75, 0.73, 0.72, 0.71,
    1.54, 1.36, 1.18, 1.11, 1.06, 1.02, 0.99, 0.98,
    2.03, 1.74, 1.44, 1.32, 1.22, 1.18, 1.17, 1.17, 1.16, 1.15,
    1.17, 1.25, 1.26, 1.22, 1.20, 1.16, 1.14, 1.12,
    2.16, 1.91, 1.62, 1.45, 1.34, 1.30, 1.27, 1.25, 1.25, 1.28,
    1.34, 1.48, 1.44, 1.41, 1.40, 1.36, 1.33, 1.31,
    2.35, 1.98, 1.69, 1.65, 1.65, 1.64, 1.63, 1.62, 1.85, 1.61,
    1.59, 1.59, 1.58, 1.57, 1.56, 1.74, 1.56, 1.44, 1.34, 1.30,
    1.28, 1.26, 1.27, 1.30, 1.34, 1.49, 1.48, 1.47, 1.46, 1.46,
    1.45, 1.90,
    1.65, 1.42, 1.34, 1.55, 1.89, 2.00, 2.00, 2.00, 2.00, 2.00,
    2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00,
    2.00, 2.00, 2.00, 2.00,
];

/// Covalent radii used by the D3 dispersion correction, units of
/// Angstrom. All covalent radii for metals are decreased by 10%.
/// Lit.: P. Pyykko, M. Atsumi, Chem. Eur. J. 15, 186 (2009)
pub static D3CR: [f64; N_SPECIES] = [
    0.00,
    0.32, 0.46,
    1.20, 0.94, 0.77, 0.75, 0.71, 0.63, 0.64, 0.67,
    1.40, 1.25, 1.13, 1.04, 1.10, 1.02, 0.99, 0.96,
    1.76, 1.54, 1.33, 1.22, 1.21, 1.10, 1.07, 1.04, 1.00, 0.99,
    1.01, 1.09, 1.12, 1.09, 1.15, 1.10, 1.14, 1.17,
    1.89, 1.67, 1.47, 1.39, 1.32, 1.24, 1.15, 1.13, 1.13, 1.08,
    1.15, 1.23, 1.28, 1.26, 1.26, 1.23, 1.32, 1.31,
    2.09, 1.76, 1.62, 1.47, 1.58, 1.57, 1.56, 1.55, 1.51, 1.52,
    1.51, 1.50, 1.49, 1.49, 1.48, 1.53, 1.46, 1.37, 1.31, 1.23,
    1.18, 1.16, 1.11, 1.12, 1.13, 1.32, 1.30, 1.30, 1.36, 1.31,
    1.38, 1.42,
    2.01, 1.81, 1.67, 1.58, 1.52, 1.53, 1.54, 1.55, 1.66, 1.66,
    1.68, 1.68, 1.65, 1.67, 1.73, 1.76, 1.61, 1.57, 1.49, 1.43,
    1.41, 1.34, 1.29, 1.28,
];

/// Standard van der Waals radii, units of Angstrom.
/// Lit.: A. Bondi, J. Phys. Chem. 68, 441 (1964)
pub static VDWRAD: [f64; N_SPECIES] = [
    0.00,
    1.20, 1.40,
    1.82, 2.00, 2.00, 1.70, 1.55, 1.52, 1.47, 1.54,
    2.27, 1.73, 2.00, 2.10, 1.80, 1.80, 1.75, 1.88,
    2.75, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 1.63,
    1.40, 2.00, 1.87, 2.00, 1.85, 1.90, 1.85, 2.02,
    2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 1.63,
    1.72, 1.58, 1.93, 2.17, 2.00, 2.06, 1.98, 2.16,
    2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00,
    2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00,
    2.00, 2.00, 2.00, 1.72, 1.66, 1.55, 1.96, 2.02, 2.00, 2.00,
    2.00, 2.00,
    2.00, 1.86, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00,
    2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00, 2.00,
    2.00, 2.00, 2.00, 2.00,
];

/// Empirical atomic C6 dispersion coefficients, atomic units, for the
/// formal oxidation number tabulated in the references.
/// Lit.: Q. Wu, W. Yang, J. Chem. Phys. 116, 515 (2002) for H, C, N, O;
/// A. Rappe et al., J. Am. Chem. Soc. 114, 10024 (1992) for the rest.
pub static CSIX: [f64; N_SPECIES] = [
    0.000,
    2.845, 1.109,
    0.787, 5.278, 121.048, 26.360, 19.480, 12.415, 10.518, 7.092,
    3.068, 12.247, 607.850, 366.281, 225.171, 171.641, 124.577, 89.929,
    15.588, 53.271, 3.529, 2.528, 2.243, 1.662, 1.272, 1.151, 1.140, 1.128,
    1.323, 8.008, 427.057, 338.151, 256.927, 233.506, 196.854, 161.014,
    28.148, 79.470, 14.639, 9.309, 8.608, 6.569, 5.059, 5.500, 4.857, 4.136,
    5.085, 17.660, 687.064, 590.699, 485.947, 460.826, 408.586, 351.585,
    55.478, 136.217, 4.710, 3.815, 3.191, 3.030, 2.610, 2.209, 2.109, 1.907,
    1.716, 1.649, 1.595, 1.545, 1.285, 47.195, 13.842, 10.036, 11.930, 8.126,
    6.365, 4.954, 5.560, 5.066, 7.218, 21.891, 665.972, 605.780, 523.633,
    514.357, 473.466,
    421.345,
    100.451, 144.928, 8.478, 5.789, 5.146, 4.890, 4.444, 3.742, 3.035, 2.554,
    2.615, 2.495, 2.245, 2.193, 1.966, 1.875, 1.833, 1.833, 1.833, 1.833,
    1.833, 1.833, 1.833, 1.833,
];

/// Ratio of multipole expectation values <r^4>/<r^2> derived from
/// atomic densities, atomic units. Covers elements 1 through 94 only;
/// there is no dummy-atom entry.
/// Lit.: S. Grimme et al., J. Chem. Phys. 132, 154104 (2010)
pub static R2R4: [f64; 94] = [
    8.0589, 3.4698,
    29.0974, 14.8517, 11.8799, 7.8715, 5.5588, 4.7566, 3.8025, 3.1036,
    26.1552, 17.2304, 17.7210, 12.7442, 9.5361, 8.1652, 6.7463, 5.6004,
    29.2012, 22.3934, 19.0598, 16.8590, 15.4023, 12.5589, 13.4788, 12.2309,
    11.2809, 10.5569, 10.1428, 9.4907, 13.4606, 10.8544, 8.9386, 8.1350,
    7.1251, 6.1971,
    30.0162, 24.4103, 20.3537, 17.4780, 13.5528, 11.8451, 11.0355, 10.1997,
    9.5414, 9.0061, 8.6417, 8.9975, 14.0834, 11.8333, 10.0179, 9.3844,
    8.4110, 7.5152,
    32.7622, 27.5708, 23.1671, 21.6003, 20.9615, 20.4562, 20.1010, 19.7475,
    19.4828, 15.6013, 19.2362, 17.4717, 17.8321, 17.4237, 17.1954, 17.1631,
    14.5716, 15.8758, 13.8989, 12.4834, 11.4421, 10.2671, 8.3549, 7.8496,
    7.3278, 7.482, 13.5124, 11.6554, 10.0959, 9.7340, 8.8584, 8.0125,
    29.8135, 26.3157, 19.1885, 15.8542, 16.1305, 15.6161, 15.1226, 16.1576,
];

/// Element symbols, right-justified to two characters.
pub static ELSYM: [&str; N_SPECIES] = [
    " X",
    " H", "He",
    "Li", "Be", " B", " C", " N", " O", " F", "Ne",
    "Na", "Mg", "Al", "Si", " P", " S", "Cl", "Ar",
    " K", "Ca", "Sc", "Ti", " V", "Cr", "Mn", "Fe", "Co", "Ni",
    "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", " Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd",
    "Ag", "Cd", "In", "Sn", "Sb", "Te", " I", "Xe",
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", " W",
    "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po",
    "At", "Rn",
    "Fr", "Ra", "Ac", "Th", "Pa", " U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg",
    "Bh", "Hs", "Mt", "Ds",
];

/// Periodic-table group labels, right-justified to five characters.
pub static ELGRP: [&str; N_SPECIES] = [
    " NONE",
    "   IA", "VIIIA",
    "   IA", "  IIA", " IIIA", "  IVA", "   VA", "  VIA", " VIIA", "VIIIA",
    "   IA", "  IIA", " IIIA", "  IVA", "   VA", "  VIA", " VIIA", "VIIIA",
    "   IA", "  IIA", " IIIB", "  IVB", "   VB", "  VIB", " VIIB", "VIIIB",
    "VIIIB", "VIIIB", "   IB", "  IIB", " IIIA", "  IVA", "   VA", "  VIA",
    " VIIA", "VIIIA",
    "   IA", "  IIA", " IIIB", "  IVB", "   VB", "  VIB", " VIIB", "VIIIB",
    "VIIIB", "VIIIB", "   IB", "  IIB", " IIIA", "  IVA", "   VA", "  VIA",
    " VIIA", "VIIIA",
    "   IA", "  IIA", " IIIB",
    " LANS", " LANS", " LANS", " LANS", " LANS", " LANS", " LANS",
    " LANS", " LANS", " LANS", " LANS", " LANS", " LANS", " LANS",
    "  IVB", "   VB", "  VIB", " VIIB", "VIIIB", "VIIIB", "VIIIB",
    "   IB", "  IIB", " IIIA", "  IVA", "   VA", "  VIA", " VIIA", "VIIIA",
    "   IA", "  IIA", " IIIB",
    " ACTS", " ACTS", " ACTS", " ACTS", " ACTS", " ACTS", " ACTS",
    " ACTS", " ACTS", " ACTS", " ACTS", " ACTS", " ACTS", " ACTS",
    "  IVB", "   VB", "  VIB", " VIIB", "VIIIB", "VIIIB", "VIIIB",
];

/// Ground-state electron configurations.
/// Lit.: http://pearl1.lanl.gov/periodic
pub static ELCONF: [&str; N_SPECIES] = [
    "1s^1",
    "1s^1",
    "1s^2",
    "[He] 2s^1",
    "[He] 2s^2",
    "[He] 2s^2 2p^1",
    "[He] 2s^2 2p^2",
    "[He] 2s^2 2p^3",
    "[He] 2s^2 2p^4",
    "[He] 2s^2 2p^5",
    "[He] 2s^2 2p^6",
    "[Ne] 3s^1",
    "[Ne] 3s^2",
    "[Ne] 3s^2 3p^1",
    "[Ne] 3s^2 3p^2",
    "[Ne] 3s^2 3p^3",
    "[Ne] 3s^2 3p^4",
    "[Ne] 3s^2 3p^5",
    "[Ne] 3s^2 3p^6",
    "[Ar] 4s^1",
    "[Ar] 4s^2",
    "[Ar] 4s^2 3d^1",
    "[Ar] 4s^2 3d^2",
    "[Ar] 4s^2 3d^3",
    "[Ar] 3d^5 4s^1",
    "[Ar] 4s^2 3d^5",
    "[Ar] 4s^2 3d^6",
    "[Ar] 4s^2 3d^7",
    "[Ar] 4s^2 3d^8",
    "[Ar] 3d^10 4s^1",
    "[Ar] 3d^10 4s^2",
    "[Ar] 3d^10 4s^2 4p^1",
    "[Ar] 3d^10 4s^2 4p^2",
    "[Ar] 3d^10 4s^2 4p^3",
    "[Ar] 3d^10 4s^2 4p^4",
    "[Ar] 3d^10 4s^2 4p^5",
    "[Ar] 3d^10 4s^2 4p^6",
    "[Kr] 5s^1",
    "[Kr] 5s^2",
    "[Kr] 5s^2 4d^1",
    "[Kr] 5s^2 4d^2",
    "[Kr] 4d^4 5s^1",
    "[Kr] 4d^5 5s^1",
    "[Kr] 5s^2 4d^5",
    "[Kr] 4d^7 5s^1",
    "[Kr] 4d^8 5s^1",
    "[Kr] 4d^10 5s^0",
    "[Kr] 4d^10 5s^1",
    "[Kr] 4d^10 5s^2",
    "[Kr] 4d^10 5s^2 5p^1",
    "[Kr] 4d^10 5s^2 5p^2",
    "[Kr] 4d^10 5s^2 5p^3",
    "[Kr] 4d^10 5s^2 5p^4",
    "[Kr] 4d^10 5s^2 5p^5",
    "[Kr] 4d^10 5s^2 5p^6",
    "[Xe] 6s^1",
    "[Xe] 6s^2",
    "[Xe] 6s^2 5d^1",
    "[Xe] 4f^1 6s^2 5d^1",
    "[Xe] 4f^3 6s^2",
    "[Xe] 4f^4 6s^2",
    "[Xe] 4f^5 6s^2",
    "[Xe] 4f^6 6s^2",
    "[Xe] 4f^7 6s^2",
    "[Xe] 4f^7 6s^2 5d^1",
    "[Xe] 4f^9 6s^2",
    "[Xe] 4f^10 6s^2",
    "[Xe] 4f^11 6s^2",
    "[Xe] 4f^12 6s^2",
    "[Xe] 4f^13 6s^2",
    "[Xe] 4f^14 6s^2",
    "[Xe] 4f^14 6s^2 5d^1",
    "[Xe] 4f^14 6s^2 5d^2",
    "[Xe] 4f^14 6s^2 5d^3",
    "[Xe] 4f^14 6s^2 5d^4",
    "[Xe] 4f^14 6s^2 5d^5",
    "[Xe] 4f^14 6s^2 5d^6",
    "[Xe] 4f^14 6s^2 5d^7",
    "[Xe] 4f^14 5d^9 6s^1",
    "[Xe] 4f^14 5d^10 6s^1",
    "[Xe] 4f^14 5d^10 6s^2",
    "[Xe] 4f^14 5d^10 6s^2 6p^1",
    "[Xe] 4f^14 5d^10 6s^2 6p^2",
    "[Xe] 4f^14 5d^10 6s^2 6p^3",
    "[Xe] 4f^14 5d^10 6s^2 6p^4",
    "[Xe] 4f^14 5d^10 6s^2 6p^5",
    "[Xe] 4f^14 5d^10 6s^2 6p^6",
    "[Rn] 7s^1",
    "[Rn] 7s^2",
    "[Rn] 7s^2 6d^1",
    "[Rn] 7s^2 6d^2",
    "[Rn] 5f^2 7s^2 6d^1",
    "[Rn] 5f^3 7s^2 6d^1",
    "[Rn] 5f^4 7s^2 6d^1",
    "[Rn] 5f^6 7s^2",
    "[Rn] 5f^7 7s^2",
    "[Rn] 5f^7 7s^2 6d^1",
    "[Rn] 5f^9 7s^2",
    "[Rn] 5f^10 7s^2",
    "[Rn] 5f^11 7s^2",
    "[Rn] 5f^11 7s^2 6d^1",
    "[Rn] 5f^13 7s^2",
    "[Rn] 5f^14 7s^2",
    "[Rn] 5f^14 7s^2 6d^1",
    "[Rn] 5f^14 7s^2 6d^2",
    "[Rn] 5f^14 7s^2 6d^3",
    "[Rn] 5f^14 7s^2 6d^4",
    "[Rn] 5f^14 7s^2 6d^5",
    "[Rn] 5f^14 7s^2 6d^6",
    "[Rn] 5f^14 7s^2 6d^7",
    "[Rn] 5f^14 6d^9 7s^1",
];

/// Standard isotopic masses, units of amu. Synthetic elements carry
/// the mass number of the most stable isotope.
/// Lit.: CRC Handbook of Chemistry and Physics, 1989
pub static STDMATOM: [f64; N_SPECIES] = [
    0.000000,
    1.007940, 4.002602,
    6.941000, 9.012182, 10.811000, 12.011000, 14.006740, 15.999400,
    18.998400, 20.179700,
    22.989768, 24.305000, 26.981539, 28.085500, 30.973762, 32.066000,
    35.452700, 39.948000,
    39.098300, 40.078000, 44.955910, 47.880000, 50.941500, 51.996100,
    54.938050, 55.847000, 58.933200, 58.693400, 63.546000, 65.390000,
    69.723000, 72.610000, 74.921590, 78.960000, 79.904000, 83.800000,
    85.467800, 87.620000, 88.905850, 91.224000, 92.906380, 95.940000,
    98.000000, 101.070000, 102.905500, 106.420000, 107.868200, 112.411000,
    114.820000, 118.710000, 121.757000, 127.600000, 126.904470, 131.290000,
    132.905430, 137.327000, 138.905500, 140.115000, 140.907650, 144.240000,
    145.000000, 150.360000, 151.965000, 157.250000, 158.925340, 162.500000,
    164.930320, 167.260000, 168.934210, 173.040000, 174.967000, 178.490000,
    180.947900, 183.850000, 186.207000, 190.200000, 192.220000, 195.080000,
    196.966540, 200.590000, 204.383300, 207.200000, 208.980370, 209.000000,
    210.000000, 222.000000,
    223.000000, 226.000000, 227.000000, 232.038100, 231.035880, 238.028900,
    237.000000, 244.000000, 243.000000, 247.000000, 247.000000, 251.000000,
    252.000000, 257.000000, 258.000000, 259.000000, 262.000000, 267.000000,
    268.000000, 271.000000, 270.000000, 277.000000, 276.000000, 281.000000,
];
