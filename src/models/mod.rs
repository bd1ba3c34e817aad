mod card;
mod diagnostics;
mod ratings;
mod recommendations;
mod user_id;

pub use card::{MovieCard, PLACEHOLDER_POSTER, UNKNOWN_TITLE};
pub use diagnostics::DebugScore;
pub use ratings::{RatingRecord, RatingsResponse};
pub use recommendations::{RecommendationRecord, RecommendationsResponse};
pub use user_id::UserId;
