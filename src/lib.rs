//! TalentHub Algo - Event recommendation service for the TalentHub platform
//!
//! This library provides the matching logic used to recommend published events
//! to talents: skill-overlap matching against a configurable threshold, faculty
//! eligibility gating, and the open-event fallback.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{is_eligible, skill_overlap, RecommendationResult, Recommender};
pub use crate::models::{
    Event, EventStatus, Faculty, FindRecommendationsRequest, FindRecommendationsResponse,
    MatchPolicy, RecommendedEvent, Skill, TalentProfile, DEFAULT_MIN_MATCH_RATIO,
};
