use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if app.route().is_form() {
        handle_form_key(app, key);
    } else {
        handle_browse_key(app, key);
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'n') {
        app.switch_form();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_secret();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.cycle_selection(-1),
        KeyCode::Right => app.cycle_selection(1),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Char(ch) if is_plain(key) => app.type_char(ch),
        _ => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Backspace => app.filter_pop(),
        KeyCode::Char(ch) if is_plain(key) => app.filter_push(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Printable input: no modifiers beyond Shift.
fn is_plain(key: KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::UiConfig;
    use crate::forms::Field;
    use crate::navigation::Route;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), &UiConfig::default(), 2025)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn ctrl_q_and_esc_quit() {
        let mut app = app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());

        let mut app = self::app();
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_is_typed_not_quit() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.form().map(|form| form.value(Field::Email)), Some("q"));
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut app = app();
        type_text(&mut app, "a@b.co");
        handle_key(&mut app, press(KeyCode::Tab));
        type_text(&mut app, "secret");
        handle_key(&mut app, press(KeyCode::Backspace));

        let form = app.form().cloned().unwrap_or_default();
        assert_eq!(form.value(Field::Email), "a@b.co");
        assert_eq!(form.value(Field::Password), "secre");
    }

    #[test]
    fn ctrl_n_switches_forms() {
        let mut app = app();
        handle_key(&mut app, ctrl('n'));
        assert_eq!(app.route(), Route::SignUp);
        handle_key(&mut app, ctrl('n'));
        assert_eq!(app.route(), Route::SignIn);
    }

    #[test]
    fn enter_submits_and_lands_on_directory() {
        let mut app = app();
        type_text(&mut app, "a@b.co");
        handle_key(&mut app, press(KeyCode::Down));
        type_text(&mut app, "secret");
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.route(), Route::AlumniDirectory);
        assert_eq!(app.notice(), Some("Login successful!"));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.form().map(|form| form.value(Field::Email)), Some(""));
    }
}
