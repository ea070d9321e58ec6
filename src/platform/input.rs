//! Terminal keyboard input
//!
//! Reads stdin line by line on a background thread; every recognised
//! character becomes one key press, queued with a blocking send.

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use super::queue::Event;
use crate::game::{InputEvent, Key};

/// wasd / hjkl for directions, space or `e` to confirm, `q` for back
pub fn key_for_char(c: char) -> Option<Key> {
    match c.to_ascii_lowercase() {
        'w' | 'k' => Some(Key::Up),
        's' | 'j' => Some(Key::Down),
        'a' | 'h' => Some(Key::Left),
        'd' | 'l' => Some(Key::Right),
        ' ' | 'e' => Some(Key::Ok),
        'q' => Some(Key::Back),
        _ => None,
    }
}

/// Keys for one input line. An empty line confirms.
pub fn keys_for_line(line: &str) -> Vec<Key> {
    if line.trim().is_empty() && !line.contains(' ') {
        return vec![Key::Ok];
    }
    line.chars().filter_map(key_for_char).collect()
}

/// Forward key presses from any reader until it ends or the queue closes
pub fn pump_keys(reader: impl BufRead, events: &Sender<Event>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("input read failed: {}", e);
                break;
            }
        };
        for key in keys_for_line(&line) {
            if events.send(Event::Input(InputEvent::press(key))).is_err() {
                return;
            }
        }
    }
    log::debug!("input stream closed");
}

pub fn spawn_stdin_reader(events: Sender<Event>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-input".into())
        .spawn(move || pump_keys(io::stdin().lock(), &events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::EventQueue;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_for_char('A'), Some(Key::Left));
        assert_eq!(key_for_char('l'), Some(Key::Right));
        assert_eq!(key_for_char('q'), Some(Key::Back));
        assert_eq!(key_for_char('x'), None);
    }

    #[test]
    fn test_empty_line_confirms() {
        assert_eq!(keys_for_line(""), vec![Key::Ok]);
        assert_eq!(keys_for_line("ad"), vec![Key::Left, Key::Right]);
        assert_eq!(keys_for_line(" "), vec![Key::Ok]);
    }

    #[test]
    fn test_pump_forwards_presses() {
        let queue = EventQueue::bounded(8);
        pump_keys("a\nxd\n".as_bytes(), &queue.sender());
        let rx = queue.receiver();
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::Input(InputEvent::press(Key::Left))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::Input(InputEvent::press(Key::Right))
        );
        assert!(rx.try_recv().is_err());
    }
}
