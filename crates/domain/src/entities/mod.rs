//! Entities - server-owned records the client displays

mod game_state;
mod moment;
mod narrative_event;
mod storybook;

pub use game_state::GameStateSnapshot;
pub use moment::Moment;
pub use narrative_event::{EventChoice, TriggeredEvent};
pub use storybook::{CompletionAction, EndingData, StoryPage, Storybook};
