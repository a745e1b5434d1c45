pub mod chat;
pub mod profile;
pub mod recommendation;
pub mod skill;
pub mod trends;

pub use chat::{ChatMessage, ChatRole};
pub use profile::{Profile, ProfileUpdate};
pub use recommendation::CareerRecommendation;
pub use skill::{Difficulty, LearningResource, ResourceKind, SkillSuggestion};
pub use trends::{GroundingSource, TrendReport};
