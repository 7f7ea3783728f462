//! Text-timing engine and playback scheduler for RSVP speed reading.

#![no_std]

extern crate alloc;

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod text_policy;
