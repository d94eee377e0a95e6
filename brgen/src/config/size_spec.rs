use crate::core::utils::errors::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};

static SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+);([0-9]+)$").expect("size pattern is a valid regex"));

/// Combined `<vertices>;<multiplicity>` size specifier, e.g. `"1000;3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub vertex_count: usize,
    pub edge_multiplicity: usize,
}

impl FromStr for SizeSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedSizeSpec(s.to_string());
        let captures = SIZE_PATTERN.captures(s.trim()).ok_or_else(malformed)?;
        let vertex_count = captures[1].parse().map_err(|_| malformed())?;
        let edge_multiplicity = captures[2].parse().map_err(|_| malformed())?;
        Ok(Self {
            vertex_count,
            edge_multiplicity,
        })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.vertex_count, self.edge_multiplicity)
    }
}
