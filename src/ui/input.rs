use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('c') => app.request_connect(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => app.move_selection(-1),
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('m') => app.request_mint_selected(),
        _ => {}
    }
}
