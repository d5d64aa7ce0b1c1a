use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Game-level meaning of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Fire,
    Quit,
    Start,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// `repeat` is set for auto-repeat events on terminals that report them.
    Press { control: Control, repeat: bool },
    Release(Control),
    /// Left mouse button pressed at a terminal cell.
    Click { column: u16, row: u16 },
}

pub fn decode(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => decode_mouse(mouse),
        _ => None,
    }
}

fn decode_key(key: &KeyEvent) -> Option<Input> {
    let control = control_for(key)?;
    Some(match key.kind {
        KeyEventKind::Press => Input::Press { control, repeat: false },
        KeyEventKind::Repeat => Input::Press { control, repeat: true },
        KeyEventKind::Release => Input::Release(control),
    })
}

fn control_for(key: &KeyEvent) -> Option<Control> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Control::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Char(' ') => Some(Control::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Control::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Control::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Restart),
        _ => None,
    }
}

fn decode_mouse(mouse: &MouseEvent) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Most terminals only send key presses, so "is the key still down" has to be
/// inferred. Once a release event has been seen we trust releases; until then
/// a key counts as held for a while after its last press. The first press
/// gets a longer window to cover the keyboard's auto-repeat delay.
#[derive(Debug)]
pub struct HeldKeys {
    release_events: bool,
    first_window: u64,
    repeat_window: u64,
    left: Option<Hold>,
    right: Option<Hold>,
}

#[derive(Clone, Copy, Debug)]
struct Hold {
    last_seen: u64,
    repeated: bool,
}

const FIRST_HOLD_SECS: f32 = 0.55;
const REPEAT_HOLD_SECS: f32 = 0.15;

impl HeldKeys {
    pub fn new(fps: u32) -> Self {
        let frames = |secs: f32| ((fps as f32 * secs).round() as u64).max(1);
        Self {
            release_events: false,
            first_window: frames(FIRST_HOLD_SECS),
            repeat_window: frames(REPEAT_HOLD_SECS),
            left: None,
            right: None,
        }
    }

    fn slot(&mut self, control: Control) -> Option<&mut Option<Hold>> {
        match control {
            Control::Left => Some(&mut self.left),
            Control::Right => Some(&mut self.right),
            _ => None,
        }
    }

    pub fn press(&mut self, control: Control, repeat: bool, frame: u64) {
        let repeated = repeat || self.is_held(control, frame);
        if let Some(slot) = self.slot(control) {
            *slot = Some(Hold { last_seen: frame, repeated });
        }
    }

    pub fn release(&mut self, control: Control) {
        self.release_events = true;
        if let Some(slot) = self.slot(control) {
            *slot = None;
        }
    }

    /// Drop all holds, e.g. when a new game starts.
    pub fn clear(&mut self) {
        self.left = None;
        self.right = None;
    }

    pub fn is_held(&self, control: Control, frame: u64) -> bool {
        let hold = match control {
            Control::Left => self.left,
            Control::Right => self.right,
            _ => None,
        };
        let Some(hold) = hold else { return false };
        if self.release_events {
            return true;
        }
        let window = if hold.repeated { self.repeat_window } else { self.first_window };
        frame.saturating_sub(hold.last_seen) <= window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: crossterm::event::KeyEventState::NONE,
        })
    }

    #[test]
    fn maps_keys_to_controls() {
        let press = |code| decode(&key(code, KeyEventKind::Press));
        assert_eq!(press(KeyCode::Left), Some(Input::Press { control: Control::Left, repeat: false }));
        assert_eq!(press(KeyCode::Char('d')), Some(Input::Press { control: Control::Right, repeat: false }));
        assert_eq!(press(KeyCode::Char(' ')), Some(Input::Press { control: Control::Fire, repeat: false }));
        assert_eq!(press(KeyCode::Char('q')), Some(Input::Press { control: Control::Quit, repeat: false }));
        assert_eq!(press(KeyCode::Char('p')), Some(Input::Press { control: Control::Start, repeat: false }));
        assert_eq!(press(KeyCode::Char('R')), Some(Input::Press { control: Control::Restart, repeat: false }));
        assert_eq!(press(KeyCode::Char('x')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(decode(&ev), Some(Input::Press { control: Control::Quit, repeat: false }));
    }

    #[test]
    fn repeat_and_release_kinds() {
        assert_eq!(
            decode(&key(KeyCode::Right, KeyEventKind::Repeat)),
            Some(Input::Press { control: Control::Right, repeat: true })
        );
        assert_eq!(decode(&key(KeyCode::Right, KeyEventKind::Release)), Some(Input::Release(Control::Right)));
    }

    #[test]
    fn left_click_only() {
        let mouse = |kind| {
            Event::Mouse(MouseEvent { kind, column: 7, row: 3, modifiers: KeyModifiers::NONE })
        };
        assert_eq!(
            decode(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Input::Click { column: 7, row: 3 })
        );
        assert_eq!(decode(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(decode(&mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn press_without_release_expires() {
        let mut held = HeldKeys::new(60);
        held.press(Control::Left, false, 10);
        assert!(held.is_held(Control::Left, 10));
        assert!(held.is_held(Control::Left, 10 + 33));
        assert!(!held.is_held(Control::Left, 10 + 34));
        assert!(!held.is_held(Control::Right, 10));
    }

    #[test]
    fn repeated_presses_use_short_window() {
        let mut held = HeldKeys::new(60);
        held.press(Control::Right, false, 0);
        held.press(Control::Right, false, 30);
        assert!(held.is_held(Control::Right, 39));
        assert!(!held.is_held(Control::Right, 40));

        // A fresh tap after the hold lapsed gets the long window again.
        held.press(Control::Right, false, 100);
        assert!(held.is_held(Control::Right, 133));
    }

    #[test]
    fn release_events_switch_to_exact_tracking() {
        let mut held = HeldKeys::new(60);
        held.press(Control::Left, false, 0);
        held.release(Control::Left);
        assert!(!held.is_held(Control::Left, 0));
        held.press(Control::Left, false, 5);
        assert!(held.is_held(Control::Left, 5000));
        held.release(Control::Left);
        assert!(!held.is_held(Control::Left, 5001));
    }

    #[test]
    fn clear_drops_holds() {
        let mut held = HeldKeys::new(60);
        held.press(Control::Left, false, 0);
        held.press(Control::Right, false, 0);
        held.clear();
        assert!(!held.is_held(Control::Left, 0));
        assert!(!held.is_held(Control::Right, 0));
    }
}
