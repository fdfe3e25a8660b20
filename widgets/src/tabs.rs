//! Site sections and hash routing.
//!
//! There is a single recovery section whose id is `recovery-plan`; the
//! public hash and the short name are both `recovery`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Welcome,
    Resources,
    Community,
    Growth,
    Study,
    #[serde(rename = "payit")]
    PayIt,
    RecoveryPlan,
}

impl Tab {
    pub const ALL: [Tab; 7] =
        [Tab::Welcome, Tab::Resources, Tab::Community, Tab::Growth, Tab::Study, Tab::PayIt, Tab::RecoveryPlan];

    /// Resolve a location hash (`"#growth"`, `"recovery"`, `""`). Empty
    /// means the welcome tab; unknown names resolve to `None`.
    #[must_use]
    pub fn from_hash(hash: &str) -> Option<Self> {
        let key = hash.trim().trim_start_matches('#');
        match key {
            "" | "welcome" => Some(Self::Welcome),
            "recovery" | "recovery-plan" => Some(Self::RecoveryPlan),
            other => Self::ALL.into_iter().find(|t| t.section_id() == other),
        }
    }

    /// Element id of the section.
    #[must_use]
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Resources => "resources",
            Self::Community => "community",
            Self::Growth => "growth",
            Self::Study => "study",
            Self::PayIt => "payit",
            Self::RecoveryPlan => "recovery-plan",
        }
    }

    /// Canonical hash shown in the address bar.
    #[must_use]
    pub fn hash(self) -> String {
        match self {
            Self::RecoveryPlan => "#recovery".to_owned(),
            other => format!("#{}", other.section_id()),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Resources => "Resources",
            Self::Community => "Community",
            Self::Growth => "Personal Growth",
            Self::Study => "Bible Study",
            Self::PayIt => "Pay it Forward",
            Self::RecoveryPlan => "Recovery",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Welcome => "Bible-focused study with a warm invitation to worship in a local church of your preference.",
            Self::Resources => "Browse a Starter Kit for many religions and denominations.",
            Self::Community => "Local information and lightweight chats with your contacts.",
            Self::Growth => "Devotional, goals, journal, and practical ministry.",
            Self::Study => "Keep dated notes, create a Google Meet, and set simple schedules.",
            Self::PayIt => "Fundraising and donations to support local ministry and platform costs.",
            Self::RecoveryPlan => "Recovery signups and a printable personal recovery plan.",
        }
    }
}
