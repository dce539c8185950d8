//! The identity record and its validator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Honorific prefixes the form offers. The set is fixed; free-text
/// prefixes are not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prefix {
    #[serde(rename = "นาย")]
    Mr,
    #[serde(rename = "นางสาว")]
    Miss,
    #[serde(rename = "คุณ")]
    Khun,
}

impl Prefix {
    /// All selectable prefixes, in form order.
    pub const ALL: [Prefix; 3] = [Prefix::Mr, Prefix::Miss, Prefix::Khun];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Mr => "นาย",
            Prefix::Miss => "นางสาว",
            Prefix::Khun => "คุณ",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "นาย" => Ok(Prefix::Mr),
            "นางสาว" => Ok(Prefix::Miss),
            "คุณ" => Ok(Prefix::Khun),
            other => Err(Error::UnknownPrefix(other.to_string())),
        }
    }
}

/// The three-field record the certificate is personalized with.
///
/// Freely mutable while the session is collecting; [`validate`] gates the
/// transition to previewing. Never persisted.
///
/// [`validate`]: IdentityRecord::validate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityRecord {
    #[serde(default)]
    pub prefix: Option<Prefix>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl IdentityRecord {
    /// Names of the fields that are unset, empty, or whitespace-only.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.prefix.is_none() {
            missing.push("prefix".to_string());
        }
        if self.first_name.trim().is_empty() {
            missing.push("first name".to_string());
        }
        if self.last_name.trim().is_empty() {
            missing.push("last name".to_string());
        }
        missing
    }

    /// A record is complete when a prefix is chosen and both names survive
    /// trimming. The error lists every missing field at once.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::IncompleteRecord(missing))
        }
    }
}
