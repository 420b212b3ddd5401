use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dialog page. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    List,
    Add,
    Edit,
}

impl Page {
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Add | Self::Edit)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::List => "Data Connections",
            Self::Add => "Add New Connection",
            Self::Edit => "Edit Connection",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Add => write!(f, "add"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "edit" => Ok(Self::Edit),
            _ => Err(format!("Unknown page: {}", s)),
        }
    }
}
