//! Leveraged Looping Calculator
//!
//! Models a looping position between two lending-protocol assets: deposit
//! asset A, borrow asset B against it, and re-deposit to amplify yield.
//!
//! # Workflow
//!
//! clamp LLTV -> max leverage -> clamp leverage -> target LTV ->
//! health ratio, resulting APR, liquidation ratios, position breakdown.
//!
//! Every function is a stateless transform; [`evaluate`] runs the whole
//! pipeline and presentation layers call it on every input change.

pub mod calculator;
pub mod constants;
pub mod display;
pub mod simulation;
pub mod state;
pub mod validate;

// Re-exports
pub use calculator::*;
pub use display::*;
pub use looping_core::{AssetLabels, CalcError, LoopingInputs, Ratio};
pub use simulation::*;
pub use state::*;
pub use validate::*;
