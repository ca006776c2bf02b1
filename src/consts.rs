//! Compile-time game constants.  Nothing here is configurable at runtime.

use std::time::Duration;

use crossterm::style::Color;

// ── Field & pacing ────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 1100;
pub const FIELD_HEIGHT: i32 = 650;

/// Bombs created at game start.  They are never replenished.
pub const NUM_OF_BOMBS: usize = 5;

/// Units per frame for the player, beams and bombs alike.
pub const SPEED: i32 = 5;

pub const FRAME_RATE: u32 = 50;
pub const FRAME: Duration = Duration::from_millis(1000 / FRAME_RATE as u64);

/// How long the game-over screen stays up before the process exits.
pub const GAME_OVER_PAUSE: Duration = Duration::from_secs(1);

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: (i32, i32) = (60, 50);
pub const PLAYER_START: (i32, i32) = (300, 200);

// ── Beams ─────────────────────────────────────────────────────────────────────

pub const BEAM_SIZE_HORIZONTAL: (i32, i32) = (50, 20);
pub const BEAM_SIZE_VERTICAL: (i32, i32) = (20, 50);
pub const BEAM_SIZE_DIAGONAL: (i32, i32) = (40, 40);

// ── Bombs ─────────────────────────────────────────────────────────────────────

pub const BOMB_RADIUS: i32 = 10;
pub const BOMB_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };

// ── Explosions ────────────────────────────────────────────────────────────────

pub const EXPLOSION_LIFE: u32 = 50;
/// Ticks of the shared blink counter between frame swaps.
pub const EXPLOSION_BLINK: u32 = 10;
pub const EXPLOSION_SIZE: (i32, i32) = (60, 60);

// ── Text ──────────────────────────────────────────────────────────────────────

pub const SCORE_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 255 };
pub const SCORE_TEXT_SIZE: u16 = 30;
/// Top-left of the score label, bottom-left corner of the field.
pub const SCORE_POS: (i32, i32) = (40, FIELD_HEIGHT - 65);

pub const GAME_OVER_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const GAME_OVER_TEXT_SIZE: u16 = 80;
pub const GAME_OVER_POS: (i32, i32) = (FIELD_WIDTH / 2 - 150, FIELD_HEIGHT / 2);
