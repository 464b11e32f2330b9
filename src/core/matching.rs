use crate::models::Skill;
use std::collections::HashSet;
use uuid::Uuid;

/// Compute the skill overlap between a talent and an event.
///
/// Returns the match ratio (fraction of the event's required skills the talent
/// holds) together with the shared skills. Skills are compared by id, never by
/// name. An event with no required skills yields a ratio of 0.0; the caller
/// decides what an empty requirement list means.
pub fn skill_overlap(
    talent_skills: &HashSet<Uuid>,
    required_skills: &[Skill],
) -> (f64, Vec<Skill>) {
    if required_skills.is_empty() {
        return (0.0, Vec::new());
    }

    let mut shared: Vec<Skill> = required_skills
        .iter()
        .filter(|skill| talent_skills.contains(&skill.id))
        .cloned()
        .collect();

    // Deterministic output regardless of catalog ordering
    shared.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let ratio = shared.len() as f64 / required_skills.len() as f64;

    (ratio, shared)
}
