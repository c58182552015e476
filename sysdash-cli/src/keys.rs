use std::io;

use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sysdash_core::state::Command;

/// Blocking source of dashboard commands
pub trait KeySource {
    /// Wait for the next key press and translate it.
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Reads keys from the controlling terminal with no timeout
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(command_for_key(key));
                }
                // redraw at the new size on the next frame
                CEvent::Resize(..) => return Ok(Command::Ignore),
                _ => continue,
            }
        }
    }
}

/// Map a key press to a command.
pub fn command_for_key(key: KeyEvent) -> Command {
    match (key.code, key.modifiers) {
        // raw mode swallows SIGINT
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Command::Quit,
        (KeyCode::Up, _) => Command::Up,
        (KeyCode::Down, _) => Command::Down,
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Command::from_char(c)
        }
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use sysdash_core::signal::ControlSignal;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for_key(key(KeyCode::Up)), Command::Up);
        assert_eq!(command_for_key(key(KeyCode::Down)), Command::Down);
    }

    #[test]
    fn test_action_keys_both_cases() {
        assert_eq!(
            command_for_key(key(KeyCode::Char('k'))),
            Command::Control(ControlSignal::Terminate)
        );
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            Command::Control(ControlSignal::Terminate)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('s'))),
            Command::Control(ControlSignal::Pause)
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char('r'))),
            Command::Control(ControlSignal::Resume)
        );
        assert_eq!(command_for_key(key(KeyCode::Char('q'))), Command::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(command_for_key(key(KeyCode::Char('x'))), Command::Ignore);
        assert_eq!(command_for_key(key(KeyCode::Enter)), Command::Ignore);
        assert_eq!(command_for_key(key(KeyCode::PageDown)), Command::Ignore);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Command::Ignore
        );
    }
}
