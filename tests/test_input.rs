use bomb_dodger::entities::KeyState;
use bomb_dodger::input::*;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press))
}

fn repeat(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

fn tracker() -> KeyTracker {
    let mut t = KeyTracker::new();
    t.begin_frame();
    t
}

// ── Fire ──────────────────────────────────────────────────────────────────────

#[test]
fn space_press_fires_once() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char(' ')));
    assert_eq!(t.frame_input().fire, 1);
}

#[test]
fn held_space_does_not_refire() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char(' ')));
    t.begin_frame();
    t.handle(&repeat(KeyCode::Char(' ')));
    assert_eq!(t.frame_input().fire, 0);
}

#[test]
fn space_held_across_frames_fires_once() {
    // Terminals without release events send Press again on autorepeat.
    let mut t = KeyTracker::new();
    let mut shots = 0;
    for _ in 0..10 {
        t.begin_frame();
        t.handle(&press(KeyCode::Char(' ')));
        shots += t.frame_input().fire;
    }
    assert_eq!(shots, 1);
}

#[test]
fn space_fires_again_once_the_hold_lapses() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char(' ')));
    for _ in 0..=HOLD_WINDOW {
        t.begin_frame();
    }
    t.handle(&press(KeyCode::Char(' ')));
    assert_eq!(t.frame_input().fire, 1);
}

#[test]
fn every_press_in_a_frame_counts() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char(' ')));
    t.handle(&release(KeyCode::Char(' ')));
    t.handle(&press(KeyCode::Char(' ')));
    assert_eq!(t.frame_input().fire, 2);
}

// ── Quit ──────────────────────────────────────────────────────────────────────

#[test]
fn q_and_esc_quit() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        let mut t = tracker();
        t.handle(&press(code));
        assert!(t.frame_input().quit);
    }
}

#[test]
fn ctrl_c_quits_but_plain_c_does_not() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char('c')));
    assert!(!t.frame_input().quit);

    t.handle(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(t.frame_input().quit);
}

#[test]
fn one_shot_events_reset_each_frame() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Esc));
    t.handle(&press(KeyCode::Char(' ')));
    t.begin_frame();
    let input = t.frame_input();
    assert!(!input.quit);
    assert_eq!(input.fire, 0);
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[test]
fn arrows_and_wasd_map_to_directions() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Up));
    t.handle(&press(KeyCode::Char('d')));
    assert_eq!(
        t.frame_input().keys,
        KeyState { up: true, right: true, ..KeyState::default() }
    );

    let mut t = tracker();
    t.handle(&press(KeyCode::Char('S')));
    t.handle(&press(KeyCode::Left));
    assert_eq!(
        t.frame_input().keys,
        KeyState { down: true, left: true, ..KeyState::default() }
    );
}

#[test]
fn key_expires_after_hold_window() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Left));
    for _ in 0..HOLD_WINDOW {
        t.begin_frame();
    }
    assert!(t.frame_input().keys.left);
    t.begin_frame();
    assert!(!t.frame_input().keys.left);
}

#[test]
fn repeat_keeps_key_alive() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Right));
    for _ in 0..3 * HOLD_WINDOW {
        t.begin_frame();
        t.handle(&repeat(KeyCode::Right));
    }
    assert!(t.frame_input().keys.right);
}

#[test]
fn release_drops_key_immediately() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Down));
    t.handle(&release(KeyCode::Down));
    assert!(!t.frame_input().keys.down);
}

#[test]
fn non_key_events_are_ignored() {
    let mut t = tracker();
    t.handle(&Event::Resize(80, 24));
    t.handle(&Event::FocusLost);
    assert_eq!(t.frame_input(), FrameInput::default());
}
