//! Java version strings.
//!
//! Two numbering schemes are in the wild: the legacy `1.<major>.0_<update>`
//! scheme (through Java 8) and the plain `<major>[.minor.patch]` scheme from
//! Java 9 on. Classification only ever branches on the major version, but
//! the raw string is kept because Windows installers name sibling
//! directories after it (`jdk1.6.0` next to `jre6`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::JvmScoutError;

/// A parsed java version: raw reported string plus its major component.
#[derive(Debug, Clone, Serialize)]
pub struct JavaVersion {
    raw: String,
    major: u32,
}

impl JavaVersion {
    /// Build a version from a bare major number (`9` -> "9").
    pub fn from_major(major: u32) -> Self {
        Self {
            raw: major.to_string(),
            major,
        }
    }

    /// The reported version string, verbatim.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Major version under the modern scheme (`1.6.0_07` is major 6).
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Java 9 restructured installations: no embedded `jre/`, no
    /// `lib/tools.jar`. Most layout rules switch off here.
    pub fn is_java9_compatible(&self) -> bool {
        self.major >= 9
    }

    pub fn is_java5(&self) -> bool {
        self.major == 5
    }

    pub fn is_java6(&self) -> bool {
        self.major == 6
    }

    pub fn is_java7(&self) -> bool {
        self.major == 7
    }

    pub fn is_java8(&self) -> bool {
        self.major == 8
    }

    /// Best-effort extraction of a version from an install directory name
    /// such as `jdk-17`, `jdk1.8.0_292` or `temurin-11.0.2`.
    pub fn infer_from_dir_name(name: &str) -> Option<Self> {
        let re = regex::Regex::new(r"1\.\d[\d._]*|\d+(?:\.\d+)*").expect("static pattern");
        let parsed = re
            .find_iter(name)
            .map(|m| m.as_str())
            .find_map(|candidate| candidate.parse().ok());
        parsed
    }
}

impl FromStr for JavaVersion {
    type Err = JvmScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unrecognized = || JvmScoutError::UnrecognizedVersion {
            version: s.to_string(),
        };

        let major = if let Some(rest) = trimmed.strip_prefix("1.") {
            // Legacy scheme: the digit after "1." is the major version.
            rest.split(['.', '_'])
                .next()
                .and_then(|part| part.parse::<u32>().ok())
                .ok_or_else(unrecognized)?
        } else {
            trimmed
                .split(['.', '-', '+'])
                .next()
                .and_then(|part| part.parse::<u32>().ok())
                .ok_or_else(unrecognized)?
        };

        if major == 0 {
            return Err(unrecognized());
        }

        Ok(Self {
            raw: trimmed.to_string(),
            major,
        })
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for JavaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
    }
}

impl Eq for JavaVersion {}
