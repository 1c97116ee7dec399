//! Explanation engine
//!
//! Explanations are structured records over observed case state: each rule
//! that could have contributed is listed with an explicit evaluation and the
//! raw field values it read. They carry no authority of their own; the
//! verdict always comes from the gate machine.

mod assessment;
mod model;

pub use assessment::{explain, explain_gate};
pub use model::{
    Conclusion, Explanation, ExplanationBuilder, ExplanationType, Facts, RuleApplication,
    RuleEvaluation,
};
