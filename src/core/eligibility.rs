use crate::models::{Event, TalentProfile};

/// Faculty-restriction gate.
///
/// This predicate is the single source of truth for faculty eligibility: both
/// recommendation filtering and application-submission validation go through it.
/// An open event is eligible for everyone; a restricted event requires the
/// talent's faculty to appear in the event's eligible-faculty set.
#[inline]
pub fn is_eligible(talent: &TalentProfile, event: &Event) -> bool {
    if !event.faculty_restriction {
        return true;
    }

    match &talent.faculty {
        Some(faculty) => event.faculties.iter().any(|f| f.id == faculty.id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventStatus, Faculty};
    use uuid::Uuid;

    fn faculty(name: &str) -> Faculty {
        Faculty {
            id: Uuid::new_v4(),
            name: name.to_string(),
            short_name: String::new(),
        }
    }

    fn event(faculty_restriction: bool, faculties: Vec<Faculty>) -> Event {
        Event {
            id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            title: "Test Event".to_string(),
            description: "Test Description".to_string(),
            required_skills: vec![],
            date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            location: "Main Hall".to_string(),
            status: EventStatus::Published,
            faculty_restriction,
            faculties,
            created_at: None,
        }
    }

    fn talent(faculty: Option<Faculty>) -> TalentProfile {
        TalentProfile {
            user_id: Uuid::new_v4(),
            skills: vec![],
            faculty,
            education_level: None,
            course: None,
            bio: None,
        }
    }

    #[test]
    fn test_open_event_always_eligible() {
        let event = event(false, vec![]);

        assert!(is_eligible(&talent(None), &event));
        assert!(is_eligible(&talent(Some(faculty("Engineering"))), &event));
    }

    #[test]
    fn test_restricted_event_requires_matching_faculty() {
        let eligible = faculty("Engineering");
        let event = event(true, vec![eligible.clone()]);

        assert!(is_eligible(&talent(Some(eligible)), &event));
        assert!(!is_eligible(&talent(Some(faculty("Law"))), &event));
    }

    #[test]
    fn test_restricted_event_rejects_talent_without_faculty() {
        let event = event(true, vec![faculty("Engineering")]);

        assert!(!is_eligible(&talent(None), &event));
    }

    #[test]
    fn test_faculty_identity_is_by_id_not_name() {
        // Two faculties with the same display name are distinct entities.
        let event = event(true, vec![faculty("Engineering")]);

        assert!(!is_eligible(&talent(Some(faculty("Engineering"))), &event));
    }
}
