pub mod backup;
pub mod calculator;
pub mod flow;
pub mod log;
pub mod text;

pub use flow::{ActivityFlow, FlowOutcome, FlowView};
