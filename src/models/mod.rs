// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    EducationLevel, Event, EventStatus, Faculty, MatchPolicy, RecommendedEvent, Skill,
    TalentProfile, DEFAULT_MIN_MATCH_RATIO,
};
pub use requests::{FindRecommendationsRequest, SubmitApplicationRequest};
pub use responses::{
    ErrorResponse, FindRecommendationsResponse, HealthResponse, SubmitApplicationResponse,
};
