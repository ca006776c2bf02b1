//! Turns raw crossterm key events into a `FrameInput` snapshot per frame.
//!
//! `KeyTracker` stamps every key with the frame number of its latest press or
//! repeat.  Movement keys read as held for `HOLD_WINDOW` frames after that
//! stamp, or until a release event clears them on terminals that send one.
//! Terminals without release events re-send `Press` while a key is down, so
//! Space only counts as a shot when it was not already held: one beam per
//! physical press, re-armed by a release or by the hold window running out.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::KeyState;

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  The OS key-repeat rate is ≥ 15 Hz, so 5 frames at 50 FPS
/// (100 ms) is always refreshed before it runs out.
pub const HOLD_WINDOW: u64 = 5;

/// Everything the game loop needs from the keyboard for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    /// Fresh Space presses since the previous frame.
    pub fire: u32,
    pub keys: KeyState,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen.
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    fire: u32,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame: clears the one-shot events of the previous one.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.fire = 0;
        self.quit = false;
    }

    pub fn handle(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        match kind {
            KeyEventKind::Press => {
                let was_held = self.is_held(*code);
                self.key_frame.insert(*code, self.frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Char(' ') if !was_held => self.fire += 1,
                    _ => {}
                }
            }
            // Repeat: refresh timestamp so key stays "held"
            KeyEventKind::Repeat => {
                self.key_frame.insert(*code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(code);
            }
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }

    /// Snapshot for the current frame.
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            quit: self.quit,
            fire: self.fire,
            keys: KeyState {
                up: self.any_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
                down: self.any_held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
                left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
                right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            },
        }
    }
}
