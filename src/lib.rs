//! Generator for themed vocabulary flashcards
//!
//! This application illustrates a character in a user-supplied scene via a
//! generative image model, then feeds the image back to a multimodal model to
//! extract a labeled vocabulary list (English/Korean/Chinese terms plus
//! bounding boxes) for flashcard creation.

pub mod ai;
pub mod characters;
pub mod error;
pub mod generator;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
