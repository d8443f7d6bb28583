//! DSP primitives and the block processor.
//!
//! Everything in here runs on the audio thread: fixed-size state, no
//! allocation, no locking.

pub mod engine;
pub mod envelope;
pub mod filter;
pub mod noise;
