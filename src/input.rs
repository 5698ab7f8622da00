use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Held state of the five logical game inputs, sampled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Polls crossterm events and tracks which game keys are currently held,
/// plus a one-shot exit request.
pub struct InputManager {
    state: InputState,
    exit_requested: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            state: InputState::default(),
            exit_requested: false,
        }
    }

    /// Drains all pending events without blocking. Call once per tick,
    /// before reading `state()` or `exit_requested()`.
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Current held state of the five game inputs.
    pub fn state(&self) -> InputState {
        self.state
    }

    /// True once any exit key (`q`, `Esc`, `Ctrl-C`) has been seen.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key_event),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.exit_requested = true;
            return;
        }

        // Movement keys - WASD and arrows. Opposite keys held together
        // cancel out arithmetically in the player update, so no exclusion
        // happens here.
        match key_event.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.state.up = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                self.state.down = true;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.state.left = true;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.state.right = true;
            }
            KeyCode::Char(' ') => {
                self.state.fire = true;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.state.up = false;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                self.state.down = false;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.state.right = false;
            }
            KeyCode::Char(' ') => {
                self.state.fire = false;
            }
            _ => {}
        }
    }
}
