use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use bramble::app::{App, Modal, Mode, PromptKind};
use bramble::config::Config;
use tempfile::TempDir;

// ─── Helpers ─────────────────────────────────────────────────────────────

fn new_app() -> App {
    App::new(Config::default())
}

/// Creates an App with `name.txt` inside a TempDir already opened.
fn app_in_tempdir(content: &str) -> (App, TempDir, String) {
    let dir = TempDir::new().unwrap();
    let name = dir.path().join("draft").to_str().unwrap().to_string();
    std::fs::write(format!("{}.txt", name), content).unwrap();
    let mut app = new_app();
    app.open(&name).unwrap();
    (app, dir, name)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_char(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn char_key(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_event(char_key(ch));
    }
}

fn open_prompt_kind(app: &App) -> Option<PromptKind> {
    match &app.mode {
        Mode::Modal(Modal::Prompt(prompt)) => Some(prompt.kind),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// A. Command Keys
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ctrl_e_opens_save_as_prompt() {
    let mut app = new_app();
    app.handle_event(ctrl_char('e'));
    assert_eq!(open_prompt_kind(&app), Some(PromptKind::SaveAs));
}

#[test]
fn ctrl_o_opens_load_prompt() {
    let mut app = new_app();
    app.handle_event(ctrl_char('o'));
    assert_eq!(open_prompt_kind(&app), Some(PromptKind::Open));
}

#[test]
fn ctrl_g_opens_goal_prompt() {
    let mut app = new_app();
    app.handle_event(ctrl_char('g'));
    assert_eq!(open_prompt_kind(&app), Some(PromptKind::Goal));
}

#[test]
fn ctrl_k_opens_jump_prompt() {
    let mut app = new_app();
    app.handle_event(ctrl_char('k'));
    assert_eq!(open_prompt_kind(&app), Some(PromptKind::JumpToLine));
}

#[test]
fn ctrl_p_then_e_opens_export_prompt() {
    let mut app = new_app();
    app.handle_event(ctrl_char('p'));
    assert_eq!(app.mode, Mode::Modal(Modal::ImportExport));
    app.handle_event(char_key('E'));
    assert_eq!(open_prompt_kind(&app), Some(PromptKind::Export));
}

#[test]
fn ctrl_p_esc_cancels() {
    let mut app = new_app();
    app.handle_event(ctrl_char('p'));
    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.mode, Mode::Editing);
    assert_eq!(app.status_message, "Cancelled");
}

#[test]
fn uppercase_control_letters_work() {
    let mut app = new_app();
    app.handle_event(ctrl_char('G'));
    assert_eq!(open_prompt_kind(&app), Some(PromptKind::Goal));
}

#[test]
fn command_keys_do_not_insert_text() {
    let mut app = new_app();
    app.handle_event(ctrl_char('t'));
    app.handle_event(ctrl_char('n'));
    assert_eq!(app.document.buffer.lines(), [String::new()]);
}

#[test]
fn esc_in_editing_is_noop() {
    let mut app = new_app();
    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.mode, Mode::Editing);
    assert!(!app.should_quit);
}

// ═══════════════════════════════════════════════════════════════════════
// B. Cursor Movement
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn arrows_move_cursor_across_lines() {
    let (mut app, _dir, _name) = app_in_tempdir("ab\ncdef\n");
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Right));
    assert_eq!(app.document.buffer.cursor(), (1, 0));
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.document.buffer.cursor(), (0, 2));
}

#[test]
fn up_down_clamp_column_to_line_length() {
    let (mut app, _dir, _name) = app_in_tempdir("ab\ncdef\n");
    app.handle_event(key(KeyCode::Down));
    for _ in 0..4 {
        app.handle_event(key(KeyCode::Right));
    }
    assert_eq!(app.document.buffer.cursor(), (1, 4));
    app.handle_event(key(KeyCode::Up));
    assert_eq!(app.document.buffer.cursor(), (0, 2));
}

#[test]
fn movement_at_edges_is_noop() {
    let (mut app, _dir, _name) = app_in_tempdir("ab\n");
    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.document.buffer.cursor(), (0, 0));
    app.handle_event(key(KeyCode::Down));
    assert_eq!(app.document.buffer.cursor(), (0, 0));
    assert!(!app.document.dirty);
}

// ═══════════════════════════════════════════════════════════════════════
// C. Session Flows
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn edit_save_exit_without_confirmation() {
    let (mut app, _dir, name) = app_in_tempdir("Once\n");
    for _ in 0..4 {
        app.handle_event(key(KeyCode::Right));
    }
    type_text(&mut app, " upon");
    assert!(app.document.dirty);
    app.handle_event(ctrl_char('w'));
    assert!(!app.document.dirty);
    app.handle_event(ctrl_char('x'));
    assert!(app.should_quit);

    let written = std::fs::read_to_string(format!("{}.txt", name)).unwrap();
    assert!(written.ends_with("::end::\nOnce upon\n"), "got: {:?}", written);
}

#[test]
fn chapters_and_goal_survive_save_and_reopen() {
    let (mut app, _dir, name) = app_in_tempdir("Title\nPart One\nbody\n");
    app.handle_event(key(KeyCode::Down));
    app.handle_event(ctrl_char('n'));
    app.handle_event(ctrl_char('g'));
    type_text(&mut app, "800");
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(ctrl_char('t'));
    app.handle_event(ctrl_char('w'));

    let mut reopened = new_app();
    reopened.open(&name).unwrap();
    assert!(reopened.document.meta.is_chapter(1));
    assert_eq!(reopened.document.meta.goal, 800);
    assert!(!reopened.document.meta.clock24h);
    assert_eq!(reopened.document.buffer.lines(), ["Title", "Part One", "body"]);
}

#[test]
fn export_from_named_document_prefills_name() {
    let (mut app, dir, _name) = app_in_tempdir("clean text\n");
    app.handle_event(ctrl_char('p'));
    app.handle_event(char_key('e'));
    app.handle_event(key(KeyCode::Enter));

    let written = std::fs::read_to_string(dir.path().join("draft_clean.txt")).unwrap();
    assert_eq!(written, "clean text\n");
}

#[test]
fn import_missing_file_starts_clean_untitled_document() {
    let (mut app, dir, _name) = app_in_tempdir("old\n");
    let missing = dir.path().join("nope.txt");
    app.handle_event(ctrl_char('p'));
    app.handle_event(char_key('i'));
    type_text(&mut app, missing.to_str().unwrap());
    app.handle_event(key(KeyCode::Enter));

    assert!(app.document.is_untitled());
    assert!(!app.document.dirty);
    assert_eq!(app.document.buffer.lines(), [String::new()]);
}

#[test]
fn dirty_document_exit_requires_confirmation() {
    let mut app = new_app();
    type_text(&mut app, "x");
    app.handle_event(ctrl_char('x'));
    assert_eq!(app.mode, Mode::ConfirmExit);
    app.handle_event(char_key('y'));
    assert!(app.should_quit);
}
