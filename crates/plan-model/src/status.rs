//! Status and criticality labels
//!
//! Storage holds these as free-form labels, in English or in the French
//! used by the plan generator. Both spellings decode to the same variant;
//! encoding always uses the English label.

use crate::error::UnknownLabel;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase, trim and fold `_`/`-` separators into single spaces
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Progress status shared by phases, milestones and tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Status {
    /// Not started
    #[default]
    #[serde(rename = "To do")]
    ToDo,
    /// Started, not finished
    #[serde(rename = "In progress")]
    InProgress,
    /// Finished
    #[serde(rename = "Done")]
    Done,
}

impl Status {
    /// All statuses in workflow order
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

    /// Canonical label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::ToDo => "To do",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }

    /// Check if work is finished
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "to do" | "todo" | "à faire" | "a faire" | "pending" | "not started" => {
                Ok(Status::ToDo)
            }
            "in progress" | "inprogress" | "en cours" | "ongoing" => Ok(Status::InProgress),
            "done" | "terminé" | "termine" | "terminée" | "completed" | "complete" => {
                Ok(Status::Done)
            }
            _ => Err(UnknownLabel {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(label) if !label.trim().is_empty() => {
                label.parse().map_err(serde::de::Error::custom)
            }
            _ => Ok(Status::default()),
        }
    }
}

/// Milestone criticality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Criticality {
    /// Must not slip
    Critical,
    /// Significant
    Important,
    /// Regular checkpoint
    Normal,
    /// Blocks later work until reached
    Blocking,
    /// High priority
    High,
    /// Moderate priority
    Moderate,
}

impl Criticality {
    /// Canonical label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Critical => "Critical",
            Criticality::Important => "Important",
            Criticality::Normal => "Normal",
            Criticality::Blocking => "Blocking",
            Criticality::High => "High",
            Criticality::Moderate => "Moderate",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criticality {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "critical" | "critique" => Ok(Criticality::Critical),
            "important" | "importante" => Ok(Criticality::Important),
            "normal" | "normale" => Ok(Criticality::Normal),
            "blocking" | "blocker" | "bloquant" | "bloquante" => Ok(Criticality::Blocking),
            "high" | "haute" | "élevée" | "élevé" | "elevee" | "eleve" => Ok(Criticality::High),
            "moderate" | "modérée" | "modéré" | "moderee" | "modere" => {
                Ok(Criticality::Moderate)
            }
            _ => Err(UnknownLabel {
                kind: "criticality",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Criticality {
    type Error = UnknownLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_accepts_both_languages() {
        assert_eq!("À faire".parse::<Status>().unwrap(), Status::ToDo);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("En cours".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("Terminé".parse::<Status>().unwrap(), Status::Done);
        assert_eq!("  DONE ".parse::<Status>().unwrap(), Status::Done);
        assert!("archived".parse::<Status>().is_err());
    }

    #[test]
    fn status_null_is_todo() {
        let status: Status = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(status, Status::ToDo);
        let status: Status = serde_json::from_value(json!("")).unwrap();
        assert_eq!(status, Status::ToDo);
    }

    #[test]
    fn status_encodes_english_label() {
        assert_eq!(
            serde_json::to_value(Status::InProgress).unwrap(),
            json!("In progress")
        );
    }

    #[test]
    fn criticality_labels() {
        assert_eq!("Élevée".parse::<Criticality>().unwrap(), Criticality::High);
        assert_eq!("bloquant".parse::<Criticality>().unwrap(), Criticality::Blocking);
        assert_eq!("Modérée".parse::<Criticality>().unwrap(), Criticality::Moderate);
        let err = "urgent".parse::<Criticality>().unwrap_err();
        assert_eq!(err.kind, "criticality");
    }
}
