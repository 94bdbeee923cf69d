//! Headless application core (state/action/effect).

pub mod action;
pub mod dataset;
pub mod effect;
pub mod random;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use dataset::{Dataset, DatasetError, Record};
pub use effect::Effect;
pub use random::{FixedIndex, IndexSource, SequenceIndex, ThreadRngIndex};
pub use state::{HideToken, QuizState, SearchState, WidgetConfig, WidgetState};
pub use store::{DispatchResult, Store};
