use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::forms::{Field, FormState};
use crate::navigation::Route;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

const FORM_WIDTH: u16 = 60;
/// Label, value and error line per field.
const LINES_PER_FIELD: u16 = 3;
/// Borders, spacer, submit and link lines.
const CHROME_LINES: u16 = 6;
const MASK: char = '•';

/// Text shown in a field's value slot.
///
/// Secrets are masked one bullet per character unless visible; a focused
/// selection shows the cycle arrows.
pub fn display_value(form: &FormState, field: Field, focused: bool) -> String {
    let value = form.value(field);
    if value.is_empty() {
        return field.placeholder().to_string();
    }
    if field.is_secret() && !form.is_secret_visible(field) {
        return std::iter::repeat(MASK).take(value.chars().count()).collect();
    }
    if field.is_selection() && focused {
        return format!("◀ {value} ▶");
    }
    value.to_string()
}

pub fn render_form(frame: &mut Frame, area: Rect, route: Route, form: &FormState, focused: usize) {
    let layout = form.layout();
    let height = layout.len() as u16 * LINES_PER_FIELD + CHROME_LINES;
    let rect = centered_rect_by_size(FORM_WIDTH, height, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(format!(" {} ", route.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let mut lines = Vec::with_capacity(height as usize);
    for (index, field) in layout.iter().copied().enumerate() {
        let is_focused = index == focused;
        lines.extend(field_lines(form, field, is_focused));
    }

    let (submit, link) = match route {
        Route::SignUp => (
            "Create Account",
            "Already have an account? Ctrl+N to sign in",
        ),
        _ => ("Sign In", "Don't have an account? Ctrl+N to sign up"),
    };
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("[ Enter ] {submit}"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(link, Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn field_lines(form: &FormState, field: Field, focused: bool) -> [Line<'static>; 3] {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let value_style = if form.value(field).is_empty() {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if focused { "▶ " } else { "  " };

    let mut label = vec![Span::styled(format!(" {}", field.label()), label_style)];
    if field.is_secret() {
        let hint = if form.is_secret_visible(field) {
            "  (shown)"
        } else {
            "  (hidden)"
        };
        label.push(Span::styled(hint, Style::default().fg(MUTED_TEXT)));
    }

    let error = match form.errors().message(field) {
        Some(message) => Line::from(Span::styled(
            format!("   {message}"),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    };

    [
        Line::from(label),
        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(display_value(form, field, focused), value_style),
        ]),
        error,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{SIGN_IN_FIELDS, SIGN_UP_FIELDS};

    #[test]
    fn empty_value_shows_placeholder() {
        let form = FormState::new(SIGN_IN_FIELDS);
        assert_eq!(display_value(&form, Field::Email, false), "Enter your email");
    }

    #[test]
    fn secret_is_masked_until_toggled() {
        let form = FormState::new(SIGN_IN_FIELDS).apply_change(Field::Password, "hunter2".into());
        assert_eq!(display_value(&form, Field::Password, true), "•••••••");
        let form = form.apply_toggle_secret(Field::Password);
        assert_eq!(display_value(&form, Field::Password, true), "hunter2");
    }

    #[test]
    fn focused_selection_shows_arrows() {
        let form =
            FormState::new(SIGN_UP_FIELDS).apply_change(Field::GraduationYear, "2012".into());
        assert_eq!(display_value(&form, Field::GraduationYear, true), "◀ 2012 ▶");
        assert_eq!(display_value(&form, Field::GraduationYear, false), "2012");
    }
}
