//! Application services - one per endpoint family
//!
//! Services are generic over `ApiPort` and translate `success: false`
//! envelopes into `ServiceError::Rejected`.

mod chat_service;
mod game_service;
mod storybook_service;
mod training_service;

pub use chat_service::ChatService;
pub use game_service::GameService;
pub use storybook_service::StorybookService;
pub use training_service::{TrainingOutcome, TrainingService};
