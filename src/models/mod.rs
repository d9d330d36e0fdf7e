pub mod epic;
pub mod label;
pub mod member;
pub mod project;
pub mod stats;
pub mod story;
pub mod team;

// Re-export commonly used types
pub use epic::Epic;
pub use label::Label;
pub use member::{Member, Profile};
pub use project::Project;
pub use stats::Stats;
pub use story::{OwnerIds, Story, StoryDraft};
pub use team::Team;
