//! Decomposition and stochastic level-of-detail resynthesis.
//!
//! Overview
//! - [`SynthEngine::decompose`] box-downsamples an upload through every
//!   power-of-two level, computes residuals against the magnified coarser
//!   level, summarizes colour and residual with per-channel mean/std, and
//!   copies those statistics (by value) into the target pyramid.
//! - [`SynthEngine::resynthesize`] maps a detail value to a level index and
//!   rebuilds the reconstruction chain from level 0: mean broadcast at the
//!   coarsest level, then magnify-plus-Gaussian-noise per finer level using
//!   the stored delta std. Alpha is pinned to 255.
//! - [`SynthEngine::flatten_output`] hands the magnified result back as RGBA
//!   bytes.
//!
//! Modules
//! - [`detail`] – detail value → level index.
//! - [`reconstruct`] – the noise-driven reconstruction chain.
//! - `engine` – the [`SynthEngine`] owning both pyramids and the output.
//! - `options` – [`SynthOptions`].

pub mod detail;
mod engine;
mod options;
pub mod reconstruct;

pub use detail::{clamp_detail, level_index_for_detail};
pub use engine::SynthEngine;
pub use options::SynthOptions;
pub use reconstruct::reconstruct_chain;
