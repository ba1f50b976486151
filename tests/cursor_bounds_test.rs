// Cursor bounds validation tests
// Every motion and edit must leave the cursor inside the buffer

mod common;
use common::{ALL_MOTIONS, boundary, stress, validation};

use vedit::buffer::{Buffer, DeleteUnit};
use vedit::editor::Editor;
use vedit::key::Key;
use vedit::motion::{Motion, Position};

#[test]
fn test_set_cursor_clamps_out_of_range() {
    let mut editor = boundary::create_editor_with_text("abc\nde");

    editor.set_cursor(0, 99);
    assert_eq!(editor.cursor().position(), Position::new(0, 3));

    editor.set_cursor(99, 99);
    assert_eq!(editor.cursor().position(), Position::new(1, 2));

    editor.set_cursor(usize::MAX, usize::MAX);
    validation::assert_cursor_valid(&editor);
}

#[test]
fn test_right_stops_at_line_end_of_last_line() {
    let mut editor = boundary::create_editor_with_text("abc");
    editor.set_cursor(0, 3);
    editor.move_cursor(Motion::Right);
    assert_eq!(editor.cursor().position(), Position::new(0, 3));
}

#[test]
fn test_cursor_at_all_boundaries() {
    let buffer = boundary::create_multiline_buffer(5);
    let positions = boundary::get_boundary_positions(&buffer);
    let mut editor = Editor::with_buffer(buffer);

    for (line, col) in positions {
        for motion in ALL_MOTIONS {
            editor.set_cursor(line, col);
            editor.move_cursor(motion);
            validation::assert_cursor_valid(&editor);
        }
    }
}

#[test]
fn test_vertical_motion_clamps_column() {
    let mut editor = boundary::create_editor_with_text("long line\nab\nanother long");
    editor.set_cursor(0, 8);

    editor.move_cursor(Motion::Down);
    assert_eq!(editor.cursor().position(), Position::new(1, 2));

    // The column is not remembered across the short line
    editor.move_cursor(Motion::Down);
    assert_eq!(editor.cursor().position(), Position::new(2, 2));

    editor.move_cursor(Motion::Down);
    assert_eq!(editor.cursor().position(), Position::new(2, 2));
}

#[test]
fn test_horizontal_wrapping() {
    let mut editor = boundary::create_editor_with_text("ab\ncd");
    editor.set_cursor(1, 0);

    editor.move_cursor(Motion::Left);
    assert_eq!(editor.cursor().position(), Position::new(0, 2));

    editor.move_cursor(Motion::Right);
    assert_eq!(editor.cursor().position(), Position::new(1, 0));

    editor.set_cursor(0, 0);
    editor.move_cursor(Motion::Left);
    assert_eq!(editor.cursor().position(), Position::new(0, 0));
}

#[test]
fn test_word_motions_stay_on_line() {
    let mut editor = boundary::create_editor_with_text("foo  bar\nbaz");
    editor.set_cursor(0, 0);

    editor.move_cursor(Motion::WordForward);
    assert_eq!(editor.cursor().position(), Position::new(0, 5));
    editor.move_cursor(Motion::WordForward);
    assert_eq!(editor.cursor().position(), Position::new(0, 8));
    editor.move_cursor(Motion::WordForward);
    assert_eq!(editor.cursor().position(), Position::new(0, 8));

    editor.move_cursor(Motion::WordBackward);
    assert_eq!(editor.cursor().position(), Position::new(0, 5));
    editor.move_cursor(Motion::WordBackward);
    assert_eq!(editor.cursor().position(), Position::new(0, 0));
}

#[test]
fn test_cursor_update_after_backspace_join() {
    let mut editor = boundary::create_editor_with_text("abc\nxyz");
    editor.set_cursor(1, 0);
    editor.handle_key(Key::Char('i'));
    editor.handle_key(Key::Backspace);

    assert_eq!(editor.buffer().lines(), ["abcxyz"]);
    assert_eq!(editor.cursor().position(), Position::new(0, 3));
    validation::assert_cursor_valid(&editor);
}

#[test]
fn test_cursor_after_line_delete_at_end() {
    let mut editor = boundary::create_editor_with_text("first\nsecond line");
    editor.set_cursor(1, 10);
    editor.delete(DeleteUnit::Line);

    assert_eq!(editor.buffer().lines(), ["first"]);
    assert_eq!(editor.cursor().position(), Position::new(0, 5));
}

#[test]
fn test_cursor_after_replace_shrinks_line() {
    let mut editor = boundary::create_editor_with_text("xxxxxx");
    editor.set_cursor(0, 6);
    editor.replace("xxxxxx", "y", false);
    assert_eq!(editor.cursor().position(), Position::new(0, 1));
}

#[test]
fn test_cursor_after_edit_loads_shorter_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("short.txt");
    std::fs::write(&path, "a\n").unwrap();

    let mut editor = Editor::with_buffer(boundary::create_multiline_buffer(20));
    editor.set_cursor(19, 5);
    editor.open_file(&path).unwrap();
    assert_eq!(editor.cursor().position(), Position::new(0, 0));
    validation::assert_cursor_valid(&editor);
}

#[test]
fn test_all_movements_on_empty_buffer() {
    let mut editor = Editor::with_buffer(Buffer::new());
    stress::test_all_movements(&mut editor);
    assert_eq!(editor.cursor().position(), Position::new(0, 0));
}

#[test]
fn test_multibyte_columns_count_chars() {
    let mut editor = boundary::create_editor_with_text("héllo wörld");
    editor.move_cursor(Motion::LineEnd);
    assert_eq!(editor.cursor().col(), 11);

    editor.move_cursor(Motion::WordBackward);
    assert_eq!(editor.cursor().col(), 6);

    editor.handle_key(Key::Char('x'));
    assert_eq!(editor.buffer().lines(), ["héllowörld"]);
    assert_eq!(editor.cursor().col(), 5);
}
