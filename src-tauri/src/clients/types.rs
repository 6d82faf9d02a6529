//! Client record types shared by the filter pipeline and the frontend.
//!
//! Stage and contact method serialize as their display labels, which is
//! also what the filter dropdowns send back.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Position of a client in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "意向阶段")]
    Intent,
    #[serde(rename = "潜在阶段")]
    Potential,
    #[serde(rename = "兴趣阶段")]
    Interest,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Intent, Stage::Potential, Stage::Interest];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Intent => "意向阶段",
            Stage::Potential => "潜在阶段",
            Stage::Interest => "兴趣阶段",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| format!("Unknown stage: {}", s))
    }
}

/// Channel used for the most recent client contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactMethod {
    #[serde(rename = "电话")]
    Phone,
    #[serde(rename = "微信")]
    WeChat,
    #[serde(rename = "邮件")]
    Email,
    #[serde(rename = "拜访")]
    Visit,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 4] = [
        ContactMethod::Phone,
        ContactMethod::WeChat,
        ContactMethod::Email,
        ContactMethod::Visit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Phone => "电话",
            ContactMethod::WeChat => "微信",
            ContactMethod::Email => "邮件",
            ContactMethod::Visit => "拜访",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactMethod::ALL
            .into_iter()
            .find(|method| method.label() == s)
            .ok_or_else(|| format!("Unknown contact method: {}", s))
    }
}

/// A client shown in the "today's tasks" table. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub last_contact_method: ContactMethod,
    /// Display string, e.g. "今天 09:30"
    pub last_contact_time: String,
    pub stage: Stage,
    pub tags: Vec<String>,
    pub concerns: Vec<String>,
    pub suggestion: String,
    pub next_action: String,
    pub analysis_background: String,
}

/// A dropdown value: either the literal `"all"` or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("all"),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "all" {
            return Ok(Selection::All);
        }
        raw.parse().map(Selection::Only).map_err(D::Error::custom)
    }
}

/// User-supplied filter state for the client table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub stage: Selection<Stage>,
    #[serde(default)]
    pub contact_method: Selection<ContactMethod>,
}

impl FilterCriteria {
    /// True when no criterion narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.stage == Selection::All
            && self.contact_method == Selection::All
    }
}

/// Result of a filter pass. `total` is the size of the unfiltered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOutcome {
    pub clients: Vec<ClientRecord>,
    pub total: usize,
}

impl FilterOutcome {
    /// The table has rows but none survived the criteria.
    pub fn is_empty_match(&self) -> bool {
        self.clients.is_empty() && self.total > 0
    }
}
