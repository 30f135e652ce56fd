#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_appends_line_terminator() {
    let handler = BufferPrintHandler::new();
    handler.write_line("6");
    handler.write_line("a b");
    assert_eq!(handler.output(), "6\na b\n");
}

#[test]
fn buffer_clear_empties_output() {
    let handler = buffer_handler();
    handler.write_line("x");
    handler.clear();
    assert_eq!(handler.output(), "");
}

#[test]
fn silent_discards_everything() {
    let handler = silent_handler();
    handler.write_line("hello");
    handler.clear();
    assert_eq!(handler.output(), "");
}

#[test]
fn stdout_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.output(), "");
}

#[test]
fn shared_buffer_collects_from_threads() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);

    let worker = std::thread::spawn(move || {
        for _ in 0..50 {
            other.write_line("a");
        }
    });
    for _ in 0..50 {
        handler.write_line("b");
    }
    worker.join().unwrap();

    assert_eq!(handler.output().lines().count(), 100);
}
