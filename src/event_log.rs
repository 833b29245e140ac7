//! Event log shown in the text view.
//!
//! A small ring buffer of short lines. Old lines drop off the front when the
//! buffer is full and long lines are truncated, so pushing never fails and
//! never allocates.

use heapless::{Deque, String};

/// Lines kept in the ring buffer.
pub const LOG_CAPACITY: usize = 6;

/// Maximum characters per line (including room for truncation).
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of recent app events.
pub struct EventLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_CAPACITY>,
}

impl EventLog {
    pub const fn new() -> Self { Self { lines: Deque::new() } }

    /// Append a line, dropping the oldest when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            if line.push(c).is_err() {
                break;
            }
        }

        self.lines.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.lines.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_last() {
        let mut log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);

        log.push("View: graphical");
        log.push("View: text");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("View: text"));
    }

    #[test]
    fn test_oldest_line_dropped_when_full() {
        let mut log = EventLog::new();
        for i in 0..=LOG_CAPACITY {
            log.push(&i.to_string());
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.iter().next(), Some("1"));
    }

    #[test]
    fn test_long_lines_truncated() {
        let mut log = EventLog::new();
        log.push("Orientation sensor is not supported by this runtime, surface hidden");
        let stored = log.last().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH - 1);
        assert!(stored.starts_with("Orientation sensor"));
    }
}
