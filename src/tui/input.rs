use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::to_input_request;

use crate::app::{App, Phase};
use crate::event::Submission;

/// Route a key press to the app.
///
/// Returns the submission when the key completed a form; the caller feeds it
/// back into the event loop.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Submission> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl-C quits from anywhere, even mid-typing
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return None;
    }

    if app.idea_form().is_some() {
        return handle_idea_input(app, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return None;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return None;
        }
        KeyCode::Char('t') => {
            app.next_theme();
            return None;
        }
        KeyCode::Char('a') => {
            app.next_preset();
            return None;
        }
        KeyCode::Char('s') => {
            app.next_snark();
            return None;
        }
        _ => {}
    }

    match app.phase() {
        Phase::Setup => handle_setup(app, key),
        Phase::Running => {
            handle_running(app, key);
            None
        }
        Phase::Splash | Phase::Done => None,
    }
}

fn handle_setup(app: &mut App, key: KeyEvent) -> Option<Submission> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.setup_form_mut().prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.setup_form_mut().next(),
        KeyCode::Enter => return Some(Submission::Setup(app.setup_form().selected())),
        _ => {}
    }
    None
}

fn handle_idea_input(app: &mut App, key: KeyEvent) -> Option<Submission> {
    let form = app.idea_form_mut()?;
    if key.code == KeyCode::Enter {
        return Some(Submission::Idea(form.value().to_string()));
    }
    // Delegate to tui-input for text editing (Emacs-like keybindings)
    if let Some(req) = to_input_request(&Event::Key(key)) {
        form.handle_input(req);
    }
    None
}

fn handle_running(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('d') if ctrl => app.log_mut().scroll_half_page_down(),
        KeyCode::Char('u') if ctrl => app.log_mut().scroll_half_page_up(),
        KeyCode::PageDown => app.log_mut().scroll_half_page_down(),
        KeyCode::PageUp => app.log_mut().scroll_half_page_up(),
        KeyCode::Char('j') | KeyCode::Down => app.log_mut().scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.log_mut().scroll_up(),
        KeyCode::Char('h') | KeyCode::Left => app.log_mut().scroll_left(),
        KeyCode::Char('l') | KeyCode::Right => app.log_mut().scroll_right(),
        KeyCode::Char('g') => app.log_mut().scroll_to_top(),
        KeyCode::Char('G') => app.log_mut().scroll_to_bottom(),
        KeyCode::Char('f') => app.log_mut().toggle_follow(),
        KeyCode::Char('r') => app.rerun(),
        _ => {}
    }
}
