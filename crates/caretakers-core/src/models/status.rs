//! Closed enumerations for patient status, caretaker availability and gender.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Warning,
    Destructive,
    Secondary,
}

/// Unknown enumeration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Care status of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Stable,
    Attention,
    Critical,
    Improving,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 4] = [
        PatientStatus::Stable,
        PatientStatus::Attention,
        PatientStatus::Critical,
        PatientStatus::Improving,
    ];

    /// Wire name, e.g. `"attention"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PatientStatus::Stable => "stable",
            PatientStatus::Attention => "attention",
            PatientStatus::Critical => "critical",
            PatientStatus::Improving => "improving",
        }
    }

    /// Label shown in status pickers.
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Stable => "Stable",
            PatientStatus::Attention => "Needs Attention",
            PatientStatus::Critical => "Critical",
            PatientStatus::Improving => "Improving",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            PatientStatus::Stable | PatientStatus::Improving => BadgeVariant::Success,
            PatientStatus::Attention => BadgeVariant::Warning,
            PatientStatus::Critical => BadgeVariant::Destructive,
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatientStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "patient status",
                value: s.to_string(),
            })
    }
}

/// Whether a caretaker can take on work right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, uniffi::Enum)]
pub enum Availability {
    #[default]
    Available,
    Busy,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Available,
        Availability::Busy,
        Availability::OffDuty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::OffDuty => "Off Duty",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            Availability::Available => BadgeVariant::Success,
            Availability::Busy => BadgeVariant::Warning,
            Availability::OffDuty => BadgeVariant::Secondary,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Availability {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Availability::ALL
            .into_iter()
            .find(|a| {
                a.label().eq_ignore_ascii_case(wanted)
                    || format!("{:?}", a).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseEnumError {
                kind: "availability",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, uniffi::Enum)]
pub enum Gender {
    Male,
    #[default]
    Female,
    Other,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Gender::Male, Gender::Female, Gender::Other]
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badges() {
        assert_eq!(PatientStatus::Stable.badge(), BadgeVariant::Success);
        assert_eq!(PatientStatus::Improving.badge(), BadgeVariant::Success);
        assert_eq!(PatientStatus::Attention.badge(), BadgeVariant::Warning);
        assert_eq!(PatientStatus::Critical.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("critical".parse::<PatientStatus>(), Ok(PatientStatus::Critical));
        assert_eq!(" Improving ".parse::<PatientStatus>(), Ok(PatientStatus::Improving));
        assert!("unknown".parse::<PatientStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_wire_names() {
        let json = serde_json::to_string(&PatientStatus::Attention).unwrap();
        assert_eq!(json, "\"attention\"");
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(Availability::OffDuty.label(), "Off Duty");
        assert_eq!(Availability::OffDuty.badge(), BadgeVariant::Secondary);
        assert_eq!("off duty".parse::<Availability>(), Ok(Availability::OffDuty));
        assert_eq!("OffDuty".parse::<Availability>(), Ok(Availability::OffDuty));

        let json = serde_json::to_string(&Availability::OffDuty).unwrap();
        assert_eq!(json, "\"Off Duty\"");
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(Gender::default(), Gender::Female);
    }
}
