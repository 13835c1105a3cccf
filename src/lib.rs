//! Two-paddle volley game for a 240x160 direct-color framebuffer.
//!
//! The match logic only talks to a [`render::Renderer`] and consumes
//! [`input::InputSnapshot`]s, so it runs the same against the desktop host's
//! window, a headless [`framebuffer::Framebuffer`], or a test recorder.

pub mod control;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod input;
pub mod params;
pub mod pong;
pub mod render;
pub mod round;

pub use framebuffer::Framebuffer;
pub use input::{Buttons, InputSnapshot, InputSource, KeyTracker};
pub use params::{Config, HostConfig, Params};
pub use pong::{Body, Events, MatchState, Score, Side};
pub use render::{Color, Renderer};
pub use round::{frame, Phase, RoundTimer};
