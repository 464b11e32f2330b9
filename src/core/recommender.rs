use crate::core::{eligibility::is_eligible, matching::skill_overlap};
use crate::models::{Event, EventStatus, MatchPolicy, RecommendedEvent, TalentProfile};
use std::collections::HashSet;

/// Result of a recommendation run
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<RecommendedEvent>,
    pub total_candidates: usize,
}

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Published-status check
/// 2. Faculty eligibility gate
/// 3. Skill-overlap matching against the configured threshold
/// 4. Open-event fallback union, dedup and recency ordering
#[derive(Debug, Clone)]
pub struct Recommender {
    policy: MatchPolicy,
}

impl Recommender {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: MatchPolicy::default(),
        }
    }

    /// Compute the events a talent should be shown.
    ///
    /// # Arguments
    /// * `talent` - The requesting talent's profile (skills + faculty)
    /// * `events` - Candidate events from the catalog
    ///
    /// # Returns
    /// RecommendationResult with deduplicated events, newest first
    pub fn recommend(&self, talent: &TalentProfile, events: Vec<Event>) -> RecommendationResult {
        let total_candidates = events.len();
        let talent_skills = talent.skill_ids();

        if talent_skills.is_empty() {
            tracing::debug!(
                user_id = %talent.user_id,
                "talent has no skills, skill filtering disabled"
            );
        }

        let mut seen_ids = HashSet::new();
        let mut recommendations: Vec<RecommendedEvent> = Vec::new();

        for event in events {
            // Only published events are ever recommended
            if event.status != EventStatus::Published {
                continue;
            }

            // Stage 2: restricted events are never shown to ineligible talents,
            // regardless of skill overlap
            if !is_eligible(talent, &event) {
                tracing::trace!(
                    user_id = %talent.user_id,
                    event_id = %event.id,
                    "faculty mismatch, event discarded"
                );
                continue;
            }

            // Stage 3: skill matching
            let (match_ratio, shared_skills) =
                skill_overlap(&talent_skills, &event.required_skills);

            let skill_matched = if talent_skills.is_empty() {
                // An empty skill set cannot be filtered against; the faculty
                // gate has already run
                true
            } else if event.required_skills.is_empty() {
                // Null-matches-null: an event with no required skills only
                // auto-matches a talent with no skills
                false
            } else {
                match_ratio >= self.policy.min_match_ratio
            };

            // Stage 4: open events always survive as fallback candidates
            if !skill_matched && !event.is_open() {
                continue;
            }

            if !seen_ids.insert(event.id) {
                continue;
            }

            recommendations.push(RecommendedEvent {
                event_id: event.id,
                title: event.title,
                description: event.description,
                date: event.date,
                location: event.location,
                faculty_restriction: event.faculty_restriction,
                match_ratio,
                shared_skills,
                skill_matched,
            });
        }

        // Newest first; event id as a deterministic tie-break
        recommendations.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.event_id.cmp(&b.event_id))
        });

        RecommendationResult {
            recommendations,
            total_candidates,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Faculty, Skill};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn skill(name: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn faculty(name: &str) -> Faculty {
        Faculty {
            id: Uuid::new_v4(),
            name: name.to_string(),
            short_name: String::new(),
        }
    }

    fn open_event(title: &str, date: (i32, u32, u32), required: Vec<Skill>) -> Event {
        Event {
            id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Description".to_string(),
            required_skills: required,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            location: "Main Hall".to_string(),
            status: EventStatus::Published,
            faculty_restriction: false,
            faculties: vec![],
            created_at: None,
        }
    }

    fn restricted_event(
        title: &str,
        date: (i32, u32, u32),
        required: Vec<Skill>,
        faculties: Vec<Faculty>,
    ) -> Event {
        Event {
            faculty_restriction: true,
            faculties,
            ..open_event(title, date, required)
        }
    }

    fn talent(skills: Vec<Skill>, faculty: Option<Faculty>) -> TalentProfile {
        TalentProfile {
            user_id: Uuid::new_v4(),
            skills,
            faculty,
            education_level: None,
            course: None,
            bio: None,
        }
    }

    #[test]
    fn test_skill_match_above_threshold_included() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");
        let django = skill("Django");

        let events = vec![open_event(
            "Hackathon",
            (2025, 6, 1),
            vec![python.clone(), django],
        )];
        let result = recommender.recommend(&talent(vec![python], None), events);

        assert_eq!(result.recommendations.len(), 1);
        let rec = &result.recommendations[0];
        assert!(rec.skill_matched);
        assert_eq!(rec.match_ratio, 0.5);
        assert_eq!(rec.shared_skills.len(), 1);
    }

    #[test]
    fn test_open_event_without_overlap_surfaces_as_fallback() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");

        let events = vec![open_event("Java Meetup", (2025, 6, 1), vec![skill("Java")])];
        let result = recommender.recommend(&talent(vec![python], None), events);

        // Excluded by the skill rule but kept by the open-event fallback
        assert_eq!(result.recommendations.len(), 1);
        let rec = &result.recommendations[0];
        assert!(!rec.skill_matched);
        assert_eq!(rec.match_ratio, 0.0);
    }

    #[test]
    fn test_restricted_event_requires_faculty_even_with_full_skill_match() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");
        let engineering = faculty("Engineering");

        let events = vec![restricted_event(
            "Engineering Day",
            (2025, 6, 1),
            vec![python.clone()],
            vec![engineering],
        )];
        let result = recommender.recommend(&talent(vec![python], None), events);

        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_restricted_event_included_for_eligible_faculty() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");
        let engineering = faculty("Engineering");

        let events = vec![restricted_event(
            "Engineering Day",
            (2025, 6, 1),
            vec![python.clone()],
            vec![engineering.clone()],
        )];
        let result = recommender.recommend(&talent(vec![python], Some(engineering)), events);

        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].skill_matched);
    }

    #[test]
    fn test_restricted_event_excluded_for_wrong_faculty() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");

        let events = vec![restricted_event(
            "Engineering Day",
            (2025, 6, 1),
            vec![python.clone()],
            vec![faculty("Engineering")],
        )];
        let result =
            recommender.recommend(&talent(vec![python], Some(faculty("Law"))), events);

        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_empty_profile_sees_all_open_events_newest_first() {
        let recommender = Recommender::with_default_policy();

        let events = vec![
            open_event("Older", (2025, 5, 1), vec![skill("Python")]),
            open_event("Newer", (2025, 7, 1), vec![]),
            restricted_event("Closed Doors", (2025, 8, 1), vec![], vec![faculty("Law")]),
        ];
        let result = recommender.recommend(&talent(vec![], None), events);

        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].title, "Newer");
        assert_eq!(result.recommendations[1].title, "Older");
    }

    #[test]
    fn test_null_matches_null() {
        let recommender = Recommender::with_default_policy();

        let events = vec![open_event("Underspecified", (2025, 6, 1), vec![])];
        let result = recommender.recommend(&talent(vec![], None), events);

        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].skill_matched);
    }

    #[test]
    fn test_event_without_requirements_is_not_a_skill_match_for_skilled_talent() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");

        // Open: surfaces via fallback only
        let open = open_event("No Requirements", (2025, 6, 1), vec![]);
        // Restricted with eligible faculty: dropped entirely
        let engineering = faculty("Engineering");
        let restricted = restricted_event(
            "No Requirements Restricted",
            (2025, 6, 2),
            vec![],
            vec![engineering.clone()],
        );

        let result = recommender.recommend(
            &talent(vec![python], Some(engineering)),
            vec![open, restricted],
        );

        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].title, "No Requirements");
        assert!(!result.recommendations[0].skill_matched);
    }

    #[test]
    fn test_unpublished_events_never_recommended() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");

        let mut draft = open_event("Draft", (2025, 6, 1), vec![python.clone()]);
        draft.status = EventStatus::Draft;
        let mut closed = open_event("Closed", (2025, 6, 2), vec![python.clone()]);
        closed.status = EventStatus::Closed;
        let mut cancelled = open_event("Cancelled", (2025, 6, 3), vec![python.clone()]);
        cancelled.status = EventStatus::Cancelled;

        let result =
            recommender.recommend(&talent(vec![python], None), vec![draft, closed, cancelled]);

        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_duplicate_events_deduplicated() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");

        let event = open_event("Hackathon", (2025, 6, 1), vec![python.clone()]);
        let duplicate = event.clone();

        let result = recommender.recommend(&talent(vec![python], None), vec![event, duplicate]);

        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn test_recommendations_sorted_by_date_descending() {
        let recommender = Recommender::with_default_policy();

        let events = vec![
            open_event("May", (2025, 5, 1), vec![]),
            open_event("July", (2025, 7, 1), vec![]),
            open_event("June", (2025, 6, 1), vec![]),
        ];
        let result = recommender.recommend(&talent(vec![], None), events);

        let titles: Vec<&str> = result
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["July", "June", "May"]);
    }

    #[test]
    fn test_idempotent_for_unchanged_inputs() {
        let recommender = Recommender::with_default_policy();
        let python = skill("Python");
        let profile = talent(vec![python.clone()], None);

        let events = vec![
            open_event("A", (2025, 6, 1), vec![python.clone()]),
            open_event("B", (2025, 6, 1), vec![skill("Java")]),
            open_event("C", (2025, 7, 1), vec![python.clone()]),
        ];

        let first = recommender.recommend(&profile, events.clone());
        let second = recommender.recommend(&profile, events);

        let ids_first: Vec<_> = first.recommendations.iter().map(|r| r.event_id).collect();
        let ids_second: Vec<_> = second.recommendations.iter().map(|r| r.event_id).collect();
        assert_eq!(ids_first, ids_second);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let python = skill("Python");
        let required = vec![
            python.clone(),
            skill("Django"),
            skill("PostgreSQL"),
            skill("Docker"),
        ];
        let engineering = faculty("Engineering");
        let profile = talent(vec![python], Some(engineering.clone()));

        // One of four shared: 0.25 passes a 0.2 policy, fails a 0.3 policy.
        // A restricted event is used so the fallback union cannot mask the rule.
        let strict = Recommender::new(MatchPolicy {
            min_match_ratio: 0.3,
        });
        let permissive = Recommender::new(MatchPolicy {
            min_match_ratio: 0.2,
        });

        let event = restricted_event("DevOps Day", (2025, 6, 1), required, vec![engineering]);

        assert!(strict
            .recommend(&profile, vec![event.clone()])
            .recommendations
            .is_empty());
        assert_eq!(
            permissive
                .recommend(&profile, vec![event])
                .recommendations
                .len(),
            1
        );
    }
}
