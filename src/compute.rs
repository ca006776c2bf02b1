//! The per-frame game loop.
//!
//! `Game` owns every entity.  `step` runs one frame against an injected
//! `Surface`; pacing (frame cap, game-over pause) is the caller's job so the
//! frame logic stays testable without a clock.

use std::io;

use log::{debug, info, trace};
use rand::Rng;

use crate::consts::{
    GAME_OVER_COLOR, GAME_OVER_POS, GAME_OVER_TEXT_SIZE, NUM_OF_BOMBS, PLAYER_START, SCORE_COLOR,
    SCORE_POS, SCORE_TEXT_SIZE,
};
use crate::display::Surface;
use crate::entities::{
    Beam, BlinkCounter, Bomb, Explosion, GameStatus, Player, Pose, Score, Sprite,
};
use crate::geometry::Rect;
use crate::input::FrameInput;

#[derive(Clone, Debug)]
pub struct Game {
    pub player: Player,
    pub bombs: Vec<Bomb>,
    pub beams: Vec<Beam>,
    pub explosions: Vec<Explosion>,
    pub score: Score,
    pub blink: BlinkCounter,
    pub status: GameStatus,
    /// Frames completed so far.
    pub frame: u64,
}

impl Game {
    /// Fresh game: player at the start position, `NUM_OF_BOMBS` bombs at
    /// random spots, nothing else.
    pub fn new(rng: &mut impl Rng) -> Self {
        let bombs = (0..NUM_OF_BOMBS).map(|_| Bomb::new(rng)).collect();
        Game::with_bombs(bombs)
    }

    /// Fresh game with a caller-chosen bomb layout.
    pub fn with_bombs(bombs: Vec<Bomb>) -> Self {
        Game {
            player: Player::new(PLAYER_START),
            bombs,
            beams: Vec::new(),
            explosions: Vec::new(),
            score: Score::default(),
            blink: BlinkCounter::default(),
            status: GameStatus::Running,
            frame: 0,
        }
    }

    /// Appends a beam along the player's current facing.
    pub fn fire(&mut self) {
        let beam = Beam::new(&self.player);
        debug!("beam fired {:?} from {:?}", beam.direction, beam.rect);
        self.beams.push(beam);
    }

    /// Runs one frame.  Returns the status after the frame; anything other
    /// than `Running` is final and later calls do nothing.
    pub fn step<S: Surface>(&mut self, input: &FrameInput, surface: &mut S) -> io::Result<GameStatus> {
        if self.status != GameStatus::Running {
            return Ok(self.status);
        }

        // ── 1. Events ────────────────────────────────────────────────────────
        if input.quit {
            info!("quit at frame {} with score {}", self.frame, self.score.value);
            self.status = GameStatus::Quit;
            return Ok(self.status);
        }
        for _ in 0..input.fire {
            self.fire();
        }

        // ── 2. Background ────────────────────────────────────────────────────
        surface.blit(Sprite::Background, Rect::field())?;

        // ── 3. Collisions ────────────────────────────────────────────────────
        let mut spent_beams = vec![false; self.beams.len()];
        let mut destroyed_bombs = vec![false; self.bombs.len()];

        let mut player_hit = false;

        for (bi, bomb) in self.bombs.iter().enumerate() {
            if self.player.rect.collides(&bomb.rect) {
                player_hit = true;
                break;
            }

            for (ki, beam) in self.beams.iter().enumerate() {
                if spent_beams[ki] || !bomb.rect.collides(&beam.rect) {
                    continue;
                }
                spent_beams[ki] = true;
                destroyed_bombs[bi] = true;
                self.score.increment();
                self.player.set_pose(Pose::Hit);
                surface.blit(self.player.sprite, self.player.rect)?;
                self.explosions.push(Explosion::new(bomb));
                debug!(
                    "bomb at {:?} destroyed, score {}",
                    bomb.rect.center(),
                    self.score.value
                );
                // Show the hit right away, mid-frame
                surface.present()?;
            }
        }

        if player_hit {
            return self.game_over(surface);
        }

        // ── 4. Prune ─────────────────────────────────────────────────────────
        self.beams = std::mem::take(&mut self.beams)
            .into_iter()
            .zip(spent_beams)
            .filter(|(beam, spent)| !spent && beam.in_field())
            .map(|(beam, _)| beam)
            .collect();
        self.bombs = std::mem::take(&mut self.bombs)
            .into_iter()
            .zip(destroyed_bombs)
            .filter(|(_, destroyed)| !destroyed)
            .map(|(bomb, _)| bomb)
            .collect();
        self.explosions.retain(Explosion::is_alive);

        // ── 5. Explosions ────────────────────────────────────────────────────
        for explosion in &mut self.explosions {
            if self.blink.tick() {
                explosion.swap_frames();
            } else if let Some(sprite) = explosion.update() {
                surface.blit(sprite, explosion.rect)?;
            }
        }

        // ── 6. Player ────────────────────────────────────────────────────────
        self.player.steer(&input.keys);
        surface.blit(self.player.sprite, self.player.rect)?;

        // ── 7. Beams, then bombs ─────────────────────────────────────────────
        for beam in &mut self.beams {
            if beam.advance() {
                surface.blit(beam.sprite(), beam.rect)?;
            }
        }
        for bomb in &mut self.bombs {
            bomb.advance();
            surface.blit(bomb.sprite(), bomb.rect)?;
        }

        // ── 8. Score ─────────────────────────────────────────────────────────
        surface.draw_text(&self.score.label(), SCORE_COLOR, SCORE_TEXT_SIZE, SCORE_POS)?;

        // ── 9. Present ───────────────────────────────────────────────────────
        surface.present()?;
        self.frame += 1;
        trace!(
            "frame {}: {} bombs, {} beams, {} explosions",
            self.frame,
            self.bombs.len(),
            self.beams.len(),
            self.explosions.len()
        );

        Ok(self.status)
    }

    fn game_over<S: Surface>(&mut self, surface: &mut S) -> io::Result<GameStatus> {
        self.player.set_pose(Pose::Dead);
        surface.blit(self.player.sprite, self.player.rect)?;
        surface.draw_text("Game Over", GAME_OVER_COLOR, GAME_OVER_TEXT_SIZE, GAME_OVER_POS)?;
        surface.present()?;
        self.status = GameStatus::GameOver;
        info!("game over at frame {} with score {}", self.frame, self.score.value);
        Ok(self.status)
    }
}
