//! Glyph art for every `Sprite`.  Each entry is a list of rows drawn from the
//! sprite's top-left cell downward.

use crossterm::style::Color;

use crate::entities::{Direction, Flip, Pose, Sprite};

type Art = &'static [&'static str];

const C_BACKGROUND: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_POSE_HIT: Color = Color::Yellow;
const C_POSE_DEAD: Color = Color::DarkRed;
const C_BEAM: Color = Color::Cyan;
const C_EXPLOSION: Color = Color::Yellow;

/// Player art, indexed by `Direction::index()` (counter-clockwise from right).
const PLAYER_ART: [Art; 8] = [
    &["    ", "(●)▶"],
    &["   ◥", "(●) "],
    &[" ▲ ", "(●)"],
    &["◤   ", " (●)"],
    &["    ", "◀(●)"],
    &[" (●)", "◣   "],
    &["(●)", " ▼ "],
    &["(●) ", "   ◢"],
];

/// Beam art, indexed the same way.
const BEAM_ART: [Art; 8] = [
    &["═══"],
    &["╱"],
    &["║", "║"],
    &["╲"],
    &["═══"],
    &["╱"],
    &["║", "║"],
    &["╲"],
];

const POSE_HIT_ART: Art = &["\\(●)/", "  !  "];
const POSE_DEAD_ART: Art = &["(×_×)", " ~~~ "];
const BOMB_ART: Art = &["●"];
const EXPLOSION_UPRIGHT_ART: Art = &[" * ", "*#*", " * "];
const EXPLOSION_MIRRORED_ART: Art = &["* *", " # ", "* *"];

/// Glyph rows for `sprite`.  The background has none; it clears instead.
pub fn art(sprite: Sprite) -> Art {
    match sprite {
        Sprite::Background => &[],
        Sprite::Player(direction) => PLAYER_ART[direction.index()],
        Sprite::Pose(Pose::Hit) => POSE_HIT_ART,
        Sprite::Pose(Pose::Dead) => POSE_DEAD_ART,
        Sprite::Beam(direction) => BEAM_ART[direction.index()],
        Sprite::Bomb(_) => BOMB_ART,
        Sprite::Explosion(Flip::Upright) => EXPLOSION_UPRIGHT_ART,
        Sprite::Explosion(Flip::Mirrored) => EXPLOSION_MIRRORED_ART,
    }
}

pub fn color_of(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Background => C_BACKGROUND,
        Sprite::Player(_) => C_PLAYER,
        Sprite::Pose(Pose::Hit) => C_POSE_HIT,
        Sprite::Pose(Pose::Dead) => C_POSE_DEAD,
        Sprite::Beam(_) => C_BEAM,
        Sprite::Bomb(color) => color,
        Sprite::Explosion(_) => C_EXPLOSION,
    }
}
