use crate::navigation::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const FORM_HINTS: &str =
    " Tab: Next │ Enter: Submit │ Ctrl+T: Show/Hide │ Ctrl+N: Switch Form │ Ctrl+Q: Quit";
const SIGN_UP_HINTS: &str = " Tab: Next │ ←/→: Year │ Enter: Submit │ Ctrl+T: Show/Hide │ Ctrl+N: Switch Form │ Ctrl+Q: Quit";
const DIRECTORY_HINTS: &str = " Tab: Section │ ↑/↓: Select │ Type: Search │ Ctrl+Q: Quit";
const BROWSE_HINTS: &str = " Tab: Section │ ↑/↓: Select │ Ctrl+Q: Quit";

pub struct Footer {
    route: Route,
}

impl Footer {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn hints(&self) -> &'static str {
        match self.route {
            Route::SignIn => FORM_HINTS,
            Route::SignUp => SIGN_UP_HINTS,
            Route::AlumniDirectory => DIRECTORY_HINTS,
            Route::Jobs | Route::Events | Route::Campaigns => BROWSE_HINTS,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hint_only_in_directory() {
        assert!(Footer::new(Route::AlumniDirectory).hints().contains("Search"));
        assert!(!Footer::new(Route::Jobs).hints().contains("Search"));
    }

    #[test]
    fn year_hint_only_on_sign_up() {
        assert!(Footer::new(Route::SignUp).hints().contains("Year"));
        assert!(!Footer::new(Route::SignIn).hints().contains("Year"));
    }
}
