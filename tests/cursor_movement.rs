//! Cursor movement tests - arrows, vertical navigation over tabs, paging

mod common;

use aurum::messages::{Direction, EditCommand};
use common::{apply, test_session};

fn move_cursor(session: &mut aurum::EditSession, direction: Direction) {
    apply(session, EditCommand::MoveCursor(direction));
}

#[test]
fn test_up_then_down_between_line_starts() {
    let (mut session, _) = test_session("line1\nline2\nline3", 6);

    move_cursor(&mut session, Direction::Up);
    assert_eq!(session.cursor(), 0);

    move_cursor(&mut session, Direction::Down);
    assert_eq!(session.cursor(), 6);
}

#[test]
fn test_up_on_first_line_goes_to_start() {
    let (mut session, _) = test_session("hello\nworld", 3);
    move_cursor(&mut session, Direction::Up);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_down_on_last_line_goes_to_end() {
    let (mut session, _) = test_session("hello\nworld", 8);
    move_cursor(&mut session, Direction::Down);
    assert_eq!(session.cursor(), 11);
}

#[test]
fn test_vertical_keeps_column() {
    let (mut session, _) = test_session("abcdef\nabcdef", 10);
    move_cursor(&mut session, Direction::Up);
    assert_eq!(session.cursor(), 3);
}

#[test]
fn test_vertical_clamps_to_shorter_line() {
    let (mut session, _) = test_session("ab\nabcdef", 8);
    move_cursor(&mut session, Direction::Up);
    assert_eq!(session.cursor(), 2);
}

#[test]
fn test_vertical_uses_expanded_tab_columns() {
    // Cursor after "\tx" sits at visual column 5; "abcdefgh" column 5 is 'f'
    let (mut session, _) = test_session("abcdefgh\n\tx", 11);
    move_cursor(&mut session, Direction::Up);
    assert_eq!(session.cursor(), 5);

    move_cursor(&mut session, Direction::Down);
    assert_eq!(session.cursor(), 11);
}

#[test]
fn test_left_right_clamp_at_bounds() {
    let (mut session, _) = test_session("ab", 0);
    move_cursor(&mut session, Direction::Left);
    assert_eq!(session.cursor(), 0);

    move_cursor(&mut session, Direction::Right);
    move_cursor(&mut session, Direction::Right);
    move_cursor(&mut session, Direction::Right);
    assert_eq!(session.cursor(), 2);
}

#[test]
fn test_right_crosses_newline() {
    let (mut session, _) = test_session("a\nb", 1);
    move_cursor(&mut session, Direction::Right);
    assert_eq!(session.cursor(), 2);
    assert_eq!(session.buffer().line_of(session.cursor()), 1);
}

#[test]
fn test_page_down_moves_a_page_of_lines() {
    let text: String = (0..30).map(|i| format!("{}\n", i)).collect();
    let (mut session, _) = test_session(&text, 0);

    move_cursor(&mut session, Direction::PageDown);
    assert_eq!(session.buffer().line_of(session.cursor()), 10);

    move_cursor(&mut session, Direction::PageUp);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_page_down_near_end_stops_at_document_end() {
    let (mut session, _) = test_session("a\nb\nc", 0);
    move_cursor(&mut session, Direction::PageDown);
    assert_eq!(session.cursor(), 5);
}

#[test]
fn test_form_feed_is_not_a_line_break() {
    let (mut session, _) = test_session("a\x0cb", 0);
    move_cursor(&mut session, Direction::Down);
    assert_eq!(session.cursor(), 3);
}

#[test]
fn test_carriage_return_stays_inside_line() {
    let (mut session, _) = test_session("ab\rcd\nxy", 4);
    move_cursor(&mut session, Direction::Up);
    assert_eq!(session.cursor(), 0);

    let (mut session, _) = test_session("ab\rcd\nxy", 4);
    move_cursor(&mut session, Direction::Down);
    assert_eq!(session.cursor(), 8);
}
