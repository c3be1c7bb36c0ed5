//! Cloud Foundry deployment target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const SEPARATOR: char = '/';

/// A space within an org, written as `"org/space"`.
///
/// Parsing requires exactly one separator with a non-empty org on the
/// left and a non-empty space on the right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrgSpace {
    org: String,
    space: String,
}

impl OrgSpace {
    /// Creates a target from its parts.
    pub fn new(org: impl Into<String>, space: impl Into<String>) -> Result<Self, ValidationError> {
        let org = org.into();
        let space = space.into();
        if org.trim().is_empty() {
            return Err(ValidationError::empty_field("org"));
        }
        if space.trim().is_empty() {
            return Err(ValidationError::empty_field("space"));
        }
        if org.contains(SEPARATOR) || space.contains(SEPARATOR) {
            return Err(ValidationError::invalid_format(
                "space",
                "org and space names cannot contain '/'",
            ));
        }
        Ok(Self { org, space })
    }

    /// Parses `"org/space"`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("space"));
        }
        let mut pieces = value.split(SEPARATOR);
        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some(org), Some(space), None) if !org.is_empty() && !space.is_empty() => {
                Self::new(org, space)
            }
            _ => Err(ValidationError::invalid_format(
                "space",
                format!("expected 'org/space', got '{}'", value),
            )),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn space(&self) -> &str {
        &self.space
    }
}

impl fmt::Display for OrgSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.org, SEPARATOR, self.space)
    }
}

impl FromStr for OrgSpace {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrgSpace {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrgSpace> for String {
    fn from(value: OrgSpace) -> Self {
        value.to_string()
    }
}
