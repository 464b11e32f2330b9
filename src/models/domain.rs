use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Default minimum fraction of an event's required skills a talent must share
/// for the event to count as a skill match. Tunable via `matching.min_match_ratio`.
pub const DEFAULT_MIN_MATCH_RATIO: f64 = 0.3;

/// A named skill tag. Identity is the id, never the name string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
}

/// An academic faculty, used only as a membership test for restricted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Bachelor,
    Master,
    Specialist,
}

/// A talent's profile as served by the platform catalog.
///
/// Education level and course are carried through for serialization but play
/// no part in matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentProfile {
    pub user_id: Uuid,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub faculty: Option<Faculty>,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub course: Option<u8>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl TalentProfile {
    /// A profile with no skills and no faculty, used when the talent has not
    /// filled in a profile yet. Recommendations degrade to open events only.
    pub fn anonymous(user_id: Uuid) -> Self {
        Self {
            user_id,
            skills: Vec::new(),
            faculty: None,
            education_level: None,
            course: None,
            bio: None,
        }
    }

    pub fn skill_ids(&self) -> HashSet<Uuid> {
        self.skills.iter().map(|s| s.id).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Closed,
    Cancelled,
}

/// An organizer-published event as served by the platform catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<Skill>,
    pub date: chrono::NaiveDate,
    pub location: String,
    pub status: EventStatus,
    #[serde(default)]
    pub faculty_restriction: bool,
    #[serde(default)]
    pub faculties: Vec<Faculty>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Event {
    pub fn required_skill_ids(&self) -> HashSet<Uuid> {
        self.required_skills.iter().map(|s| s.id).collect()
    }

    /// Open events carry no faculty restriction and are visible to every talent.
    pub fn is_open(&self) -> bool {
        !self.faculty_restriction
    }
}

/// A recommended event with the match metadata that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedEvent {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: chrono::NaiveDate,
    pub location: String,
    pub faculty_restriction: bool,
    pub match_ratio: f64,
    pub shared_skills: Vec<Skill>,
    /// False when the event surfaced only via the open-event fallback.
    pub skill_matched: bool,
}

/// Matching policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    pub min_match_ratio: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_match_ratio: DEFAULT_MIN_MATCH_RATIO,
        }
    }
}
