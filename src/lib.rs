//! A terminal arcade game: steer the player around a fixed field, dodge the
//! bouncing bombs and blow them up with beams.
//!
//! - `geometry`: rectangles and the field bounds test
//! - `entities`: player, beams, bombs, explosions, score
//! - `compute`: the per-frame game loop
//! - `input`: key events → per-frame input
//! - `display`: render surfaces (terminal and recording)
//! - `clock`: frame-rate limiter

pub mod clock;
pub mod compute;
pub mod consts;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod input;

pub use compute::Game;
pub use entities::GameStatus;
