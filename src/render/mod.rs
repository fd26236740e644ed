//! Parameter rendering stage: blending of the per-frame acoustic parameters
//! at phoneme boundaries.

pub mod blend_table;
pub mod linear_interpolator;
pub mod parameter_store;
pub mod pitch_interpolator;
pub mod transitions;

pub use blend_table::{BlendEntry, BlendPhases, BlendRankTable, BlendTable};
pub use parameter_store::{Channel, ParameterFrame, ParameterStore, FRAME_CAPACITY};
pub use transitions::{TransitionScheduler, TransitionWindow};

/// Phoneme identifier terminating an utterance.
pub const PHONEME_END: u8 = 255;
