//! Property tests for markup stripping and the edit/undo model

mod common;

use aurum::clipboard::MemoryClipboard;
use aurum::markup::{parse_line, strip_markup, MARKERS};
use aurum::messages::{Direction, EditCommand};
use common::{apply, test_session};
use proptest::prelude::*;

// Text built from plain characters and marker fragments, so stripping often
// has to splice pieces back into whole markers
fn marked_text() -> impl Strategy<Value = String> {
    let pieces: Vec<&'static str> = MARKERS
        .iter()
        .map(|(marker, _)| *marker)
        .chain(["[~|", "|~]", "bo", "ld", "a", " ", "\n"])
        .collect();
    prop::collection::vec(prop::sample::select(pieces), 0..30).prop_map(|parts| parts.concat())
}

fn document_text() -> impl Strategy<Value = String> {
    "[ab \t\n]{0,40}"
}

fn fresh_edit() -> impl Strategy<Value = EditCommand> {
    prop_oneof![
        "[xy\n\t]{1,3}".prop_map(EditCommand::InsertText),
        Just(EditCommand::Backspace),
        Just(EditCommand::Newline),
        Just(EditCommand::Tab),
        Just(EditCommand::PasteClipboard),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::PageUp),
        Just(Direction::PageDown),
    ]
}

fn edit_commands() -> impl Strategy<Value = Vec<EditCommand>> {
    prop::collection::vec(
        prop_oneof![
            "[xy\n\t]{1,3}".prop_map(EditCommand::InsertText),
            Just(EditCommand::Backspace),
            Just(EditCommand::Newline),
            direction().prop_map(EditCommand::MoveCursor),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_strip_is_idempotent(text in marked_text()) {
        let once = strip_markup(&text);
        prop_assert_eq!(strip_markup(&once), once.clone());
        for (marker, _) in MARKERS {
            prop_assert!(!once.contains(marker));
        }
    }

    #[test]
    fn prop_tokens_are_spaces_plus_one(line in "[a b]{0,30}") {
        let spaces = line.matches(' ').count();
        prop_assert_eq!(parse_line(&line).len(), spaces + 1);
    }

    #[test]
    fn prop_empty_insert_is_noop(text in document_text(), cursor in 0usize..50) {
        let cursor = cursor.min(text.chars().count());
        let (mut session, _) = test_session(&text, cursor);

        prop_assert_eq!(apply(&mut session, EditCommand::InsertText(String::new())), None);
        prop_assert_eq!(session.text(), text);
        prop_assert_eq!(session.cursor(), cursor);
        prop_assert!(!session.history().can_undo());
    }

    #[test]
    fn prop_backspace_removes_one_char(text in document_text(), cursor in 1usize..50) {
        prop_assume!(!text.is_empty());
        let cursor = cursor.min(text.chars().count());
        let (mut session, _) = test_session(&text, cursor);

        apply(&mut session, EditCommand::Backspace);

        let mut expected: Vec<char> = text.chars().collect();
        expected.remove(cursor - 1);
        prop_assert_eq!(session.text(), expected.into_iter().collect::<String>());
        prop_assert_eq!(session.cursor(), cursor - 1);
    }

    #[test]
    fn prop_cursor_stays_in_range(text in document_text(), commands in edit_commands()) {
        let (mut session, _) = test_session(&text, 0);
        for command in commands {
            apply(&mut session, command);
            prop_assert!(session.cursor() <= session.buffer().len_chars());
        }
    }

    #[test]
    fn prop_undo_everything_restores_original(
        text in document_text(),
        commands in edit_commands(),
    ) {
        let (mut session, _) = test_session(&text, 0);
        for command in commands {
            apply(&mut session, command);
        }

        while session.history().can_undo() {
            apply(&mut session, EditCommand::Undo);
        }
        prop_assert_eq!(session.text(), text);
    }

    #[test]
    fn prop_undo_then_redo_restores_edit(
        text in document_text(),
        cursor in 0usize..50,
        insert in "[xy\n]{1,4}",
    ) {
        let cursor = cursor.min(text.chars().count());
        let (mut session, _) = test_session(&text, cursor);

        apply(&mut session, EditCommand::InsertText(insert));
        let edited = (session.text(), session.cursor());

        apply(&mut session, EditCommand::Undo);
        prop_assert_eq!(session.text(), text);
        prop_assert_eq!(session.cursor(), cursor);

        apply(&mut session, EditCommand::Redo);
        prop_assert_eq!((session.text(), session.cursor()), edited);
    }

    #[test]
    fn prop_fresh_edit_clears_redo(
        text in document_text(),
        commands in edit_commands(),
        edit in fresh_edit(),
    ) {
        let (session, _) = test_session(&text, 0);
        let mut session = session.with_clipboard(MemoryClipboard::with_text("clip"));
        for command in commands {
            apply(&mut session, command);
        }
        // Guarantees something to undo, and a nonzero cursor for Backspace
        apply(&mut session, EditCommand::InsertText("q".to_string()));
        apply(&mut session, EditCommand::InsertText("z".to_string()));
        apply(&mut session, EditCommand::Undo);
        prop_assert!(session.history().can_redo());

        apply(&mut session, edit);
        prop_assert!(!session.history().can_redo());

        let after_edit = session.text();
        prop_assert_eq!(apply(&mut session, EditCommand::Redo), None);
        prop_assert_eq!(session.text(), after_edit);
    }
}
