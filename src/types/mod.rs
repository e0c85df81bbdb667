pub mod result;

pub use result::{TokenUsage, TurnOutcome};
