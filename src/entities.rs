//! Game entity types and their per-frame motion.
//!
//! Nothing in this module draws; each entity reports which `Sprite` it wants
//! shown and the game loop hands that to the render surface.

use crossterm::style::Color;
use rand::Rng;

use crate::consts::{
    BEAM_SIZE_DIAGONAL, BEAM_SIZE_HORIZONTAL, BEAM_SIZE_VERTICAL, BOMB_COLOR, BOMB_RADIUS,
    EXPLOSION_BLINK, EXPLOSION_LIFE, EXPLOSION_SIZE, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_SIZE,
    SPEED,
};
use crate::geometry::{check_bound, in_field, Rect};

// ── Directions ────────────────────────────────────────────────────────────────

/// The eight facing directions, counter-clockwise from "right".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Per-frame displacement, screen coordinates (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (SPEED, 0),
            Direction::UpRight => (SPEED, -SPEED),
            Direction::Up => (0, -SPEED),
            Direction::UpLeft => (-SPEED, -SPEED),
            Direction::Left => (-SPEED, 0),
            Direction::DownLeft => (-SPEED, SPEED),
            Direction::Down => (0, SPEED),
            Direction::DownRight => (SPEED, SPEED),
        }
    }

    /// Inverse of `delta`.  `None` for the zero vector and for anything that
    /// is not a whole `SPEED` step on each axis.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        let step = |v: i32| match v {
            0 => Some(0),
            v if v.abs() == SPEED => Some(v.signum()),
            _ => None,
        };
        match (step(dx)?, step(dy)?) {
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Image rotation for this direction in whole degrees, counter-clockwise.
    pub fn angle_degrees(self) -> f32 {
        let (dx, dy) = self.delta();
        (-dy as f32).atan2(dx as f32).to_degrees().round()
    }

    /// Index into fixed-size per-direction tables.
    pub fn index(self) -> usize {
        self as usize
    }

    fn beam_size(self) -> (i32, i32) {
        match self {
            Direction::Right | Direction::Left => BEAM_SIZE_HORIZONTAL,
            Direction::Up | Direction::Down => BEAM_SIZE_VERTICAL,
            _ => BEAM_SIZE_DIAGONAL,
        }
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Cosmetic player overrides that ignore the facing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Shown the instant a beam destroys a bomb.
    Hit,
    /// Shown on the game-over frame.
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flip {
    Upright,
    Mirrored,
}

/// Every image the game can put on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Player(Direction),
    Pose(Pose),
    Beam(Direction),
    Bomb(Color),
    Explosion(Flip),
}

// ── Input state ───────────────────────────────────────────────────────────────

/// Which directional keys are held this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Sum of the per-key displacements; opposing keys cancel.
    pub fn displacement(&self) -> (i32, i32) {
        let mut dx = 0;
        let mut dy = 0;
        if self.up {
            dy -= SPEED;
        }
        if self.down {
            dy += SPEED;
        }
        if self.left {
            dx -= SPEED;
        }
        if self.right {
            dx += SPEED;
        }
        (dx, dy)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Last non-zero movement; aims new beams.
    pub facing: Direction,
    pub sprite: Sprite,
}

impl Player {
    pub fn new(center: (i32, i32)) -> Self {
        let (w, h) = PLAYER_SIZE;
        Player {
            rect: Rect::centered(center.0, center.1, w, h),
            facing: Direction::Right,
            sprite: Sprite::Player(Direction::Right),
        }
    }

    /// Moves by the summed key displacement.  A move that would leave the
    /// field on either axis is undone as a whole.  Facing and sprite follow
    /// any non-zero input, even when the move itself was undone.
    pub fn steer(&mut self, keys: &KeyState) {
        let (dx, dy) = keys.displacement();
        self.rect.move_by(dx, dy);
        if !in_field(&self.rect) {
            self.rect.move_by(-dx, -dy);
        }
        if let Some(direction) = Direction::from_delta(dx, dy) {
            self.facing = direction;
            self.sprite = Sprite::Player(direction);
        }
    }

    /// Swaps in a pose sprite until the next non-zero move.
    pub fn set_pose(&mut self, pose: Pose) {
        self.sprite = Sprite::Pose(pose);
    }
}

// ── Beam ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
    pub direction: Direction,
    /// Sprite rotation, degrees counter-clockwise from "right".
    pub angle: f32,
}

impl Beam {
    /// Fires along the player's facing direction, centred half a player
    /// extent away from the player's centre.
    pub fn new(player: &Player) -> Self {
        let direction = player.facing;
        let (vx, vy) = direction.delta();
        let (w, h) = direction.beam_size();
        let (pcx, pcy) = player.rect.center();
        let cx = pcx + player.rect.w / 2 * vx / SPEED;
        let cy = pcy + player.rect.h / 2 * vy / SPEED;
        Beam {
            rect: Rect::centered(cx, cy, w, h),
            vx,
            vy,
            direction,
            angle: direction.angle_degrees(),
        }
    }

    /// Moves one step if still inside the field.  Returns whether the beam
    /// moved, i.e. whether it should be drawn this frame.  A beam that has
    /// left the field stays frozen until the prune step removes it.
    pub fn advance(&mut self) -> bool {
        if in_field(&self.rect) {
            self.rect.move_by(self.vx, self.vy);
            true
        } else {
            false
        }
    }

    pub fn in_field(&self) -> bool {
        in_field(&self.rect)
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Beam(self.direction)
    }
}

// ── Bomb ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bomb {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
    pub color: Color,
    pub radius: i32,
}

impl Bomb {
    /// A bomb at a random spot with its whole body inside the field.
    pub fn new(rng: &mut impl Rng) -> Self {
        let cx = rng.gen_range(BOMB_RADIUS..=FIELD_WIDTH - BOMB_RADIUS);
        let cy = rng.gen_range(BOMB_RADIUS..=FIELD_HEIGHT - BOMB_RADIUS);
        Bomb::at(cx, cy)
    }

    /// A bomb centred at `(cx, cy)`, heading down-right.
    pub fn at(cx: i32, cy: i32) -> Self {
        let d = 2 * BOMB_RADIUS;
        Bomb {
            rect: Rect::centered(cx, cy, d, d),
            vx: SPEED,
            vy: SPEED,
            color: BOMB_COLOR,
            radius: BOMB_RADIUS,
        }
    }

    /// Reflects off whichever edges it is past, then always moves.
    pub fn advance(&mut self) {
        let (horizontal, vertical) = check_bound(&self.rect, FIELD_WIDTH, FIELD_HEIGHT);
        if !horizontal {
            self.vx = -self.vx;
        }
        if !vertical {
            self.vy = -self.vy;
        }
        self.rect.move_by(self.vx, self.vy);
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Bomb(self.color)
    }
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub rect: Rect,
    /// Remaining updates before the explosion is pruned.
    pub life: u32,
    /// `frames[0]` is the one drawn; the blink swaps the pair.
    pub frames: [Sprite; 2],
}

impl Explosion {
    pub fn new(bomb: &Bomb) -> Self {
        let (cx, cy) = bomb.rect.center();
        let (w, h) = EXPLOSION_SIZE;
        Explosion {
            rect: Rect::centered(cx, cy, w, h),
            life: EXPLOSION_LIFE,
            frames: [Sprite::Explosion(Flip::Upright), Sprite::Explosion(Flip::Mirrored)],
        }
    }

    /// Burns one frame of life.  Returns the sprite to draw, or `None` once
    /// the explosion has expired.
    pub fn update(&mut self) -> Option<Sprite> {
        if self.life > 0 {
            self.life -= 1;
            Some(self.frames[0])
        } else {
            None
        }
    }

    pub fn swap_frames(&mut self) {
        self.frames.swap(0, 1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Frame counter shared by every live explosion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlinkCounter {
    pub count: u32,
}

impl BlinkCounter {
    /// Advances once.  Returns `true` on the tick that reaches the blink
    /// period, resetting the counter.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count < EXPLOSION_BLINK {
            false
        } else {
            self.count = 0;
            true
        }
    }
}

// ── Score & status ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn label(&self) -> String {
        format!("score: {}", self.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// The player touched a bomb.  Terminal.
    GameOver,
    /// The player asked to leave.
    Quit,
}
