//! Parse registry settings
//!
//! The registry has a single tunable: the maximum rank of the
//! electrostatic moments covered by the esu conversion sequence.
//! Settings are YAML-formatted; numeric fields may be given as
//! integer literals or as arithmetic expressions.

use std::error::Error;
use std::fmt;
use std::path::Path;

use evalexpr::{eval_int, eval_number};
use yaml_rust::{yaml::Yaml, YamlLoader};

use crate::constants::DEFAULT_MAX_MOM;

/// Why did Settings parsing fail?
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SettingsErrorKind {
    File,
    Conversion,
    Domain,
}

/// Error returned when a settings field cannot be read.
pub struct SettingsError {
    kind: SettingsErrorKind,
    field: String,
    cause: String,
}

impl fmt::Debug for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            SettingsErrorKind::File => {
                write!(f, "Unable to read settings: not valid YAML.")
            }
            SettingsErrorKind::Conversion => write!(
                f,
                "Could not convert field \"{}\" (= \"{}\") to an integer.",
                self.field, self.cause,
            ),
            SettingsErrorKind::Domain => write!(
                f,
                "Field \"{}\" (= \"{}\") must be a positive integer.",
                self.field, self.cause,
            ),
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for SettingsError {}

impl SettingsError {
    fn file() -> Self {
        Self {
            kind: SettingsErrorKind::File,
            field: String::new(),
            cause: String::new(),
        }
    }

    fn conversion(field: &str, cause: &str) -> Self {
        Self {
            kind: SettingsErrorKind::Conversion,
            field: field.to_owned(),
            cause: cause.to_owned(),
        }
    }

    fn domain(field: &str, cause: &str) -> Self {
        Self {
            kind: SettingsErrorKind::Domain,
            field: field.to_owned(),
            cause: cause.to_owned(),
        }
    }

    pub fn kind(&self) -> SettingsErrorKind {
        self.kind
    }
}

/// Build-time parameters of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum rank of the electrostatic moments: the esu conversion
    /// sequence has one entry per rank. Default 3 (monopole, dipole,
    /// quadrupole).
    pub max_mom: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_mom: DEFAULT_MAX_MOM }
    }
}

impl Settings {
    /// Loads settings from a YAML-formatted string, e.g.
    ///
    /// ```
    /// use physcon::config::Settings;
    /// let settings = Settings::from_string("---
    ///     moments:
    ///         max_rank: 2 + 2
    /// ").unwrap();
    /// assert_eq!(settings.max_mom, 4);
    /// ```
    ///
    /// Missing sections or fields fall back to the defaults; fields
    /// that are present but malformed or non-positive are errors.
    pub fn from_string(s: &str) -> Result<Self, SettingsError> {
        let docs = YamlLoader::load_from_str(s)
            .map_err(|_| SettingsError::file())?;
        let input = docs.first().ok_or_else(SettingsError::file)?;

        let max_mom = match &input["moments"]["max_rank"] {
            Yaml::BadValue => DEFAULT_MAX_MOM,
            field => read_positive_int("moments:max_rank", field)?,
        };

        Ok(Self { max_mom })
    }

    /// Loads settings from a YAML-formatted file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| SettingsError::file())?;
        Self::from_string(&contents)
    }
}

fn read_positive_int(field: &str, value: &Yaml) -> Result<usize, SettingsError> {
    let i = match value {
        Yaml::Integer(i) => *i,
        Yaml::String(s) => {
            // accept arithmetic expressions, but not fractional results
            eval_int(s)
                .or_else(|_| {
                    eval_number(s).map_err(|_| ()).and_then(|x| {
                        if x.fract() == 0.0 { Ok(x as i64) } else { Err(()) }
                    })
                })
                .map_err(|_| SettingsError::conversion(field, s))?
        }
        other => {
            return Err(SettingsError::conversion(field, &format!("{:?}", other)))
        }
    };

    if i > 0 {
        Ok(i as usize)
    } else {
        Err(SettingsError::domain(field, &i.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Settings::default().max_mom, 3);
        let settings = Settings::from_string("---\nother_section:\n    key: 1\n").unwrap();
        assert_eq!(settings.max_mom, 3);
    }

    #[test]
    fn explicit_rank() {
        let text = "---
            moments:
                max_rank: 5
        ";
        let settings = Settings::from_string(text).unwrap();
        assert_eq!(settings.max_mom, 5);
    }

    #[test]
    fn rank_as_expression() {
        let text = "---
            moments:
                max_rank: 1 + 2
        ";
        let settings = Settings::from_string(text).unwrap();
        assert_eq!(settings.max_mom, 3);
    }

    #[test]
    fn bad_input_is_rejected() {
        let text = "---
            moments:
                max_rank: quadrupole
        ";
        let err = Settings::from_string(text).unwrap_err();
        assert_eq!(err.kind(), SettingsErrorKind::Conversion);

        let text = "---
            moments:
                max_rank: -1
        ";
        let err = Settings::from_string(text).unwrap_err();
        assert_eq!(err.kind(), SettingsErrorKind::Domain);
    }
}
