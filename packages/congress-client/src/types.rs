use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CongressError;

/// A legislative body. Joint committees draw members from both chambers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
    Joint,
}

impl Chamber {
    pub fn is_joint(self) -> bool {
        self == Chamber::Joint
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
            Chamber::Joint => "joint",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chamber {
    type Err = CongressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "house" => Ok(Chamber::House),
            "senate" => Ok(Chamber::Senate),
            "joint" => Ok(Chamber::Joint),
            other => Err(CongressError::Config(format!("Invalid chamber: {}", other))),
        }
    }
}

/// A committee record as returned by the committees endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committee {
    #[serde(rename = "committee_id")]
    pub id: String,
    pub name: String,
    pub chamber: Chamber,
    #[serde(default)]
    pub subcommittee: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_committee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Committee {
    /// Parent committee id, only meaningful for subcommittees.
    pub fn parent_id(&self) -> Option<&str> {
        if self.subcommittee {
            self.parent_committee_id.as_deref()
        } else {
            None
        }
    }
}

/// Minimal legislator record; committees are keyed by `bioguide_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legislator {
    pub bioguide_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Legislator {
    pub fn new(bioguide_id: impl Into<String>) -> Self {
        Self {
            bioguide_id: bioguide_id.into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

/// Wrapper for paginated list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
    /// Pagination metadata; shape varies with `per_page`.
    #[serde(default)]
    pub page: Option<serde_json::Value>,
}
