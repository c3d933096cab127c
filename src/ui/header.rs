use crate::navigation::Route;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    route: Route,
    signed_in: bool,
    notice: Option<&'static str>,
}

impl Header {
    pub fn new(route: Route, signed_in: bool, notice: Option<&'static str>) -> Self {
        Self {
            route,
            signed_in,
            notice,
        }
    }

    pub fn line(&self) -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (session_icon, session_label) = if self.signed_in {
            ("●", "Signed in")
        } else {
            ("○", "Guest")
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "NEXUS",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                session_icon,
                Style::default().fg(if self.signed_in { STATUS_OK } else { MUTED_TEXT }),
            ),
            Span::styled(format!(" {session_label}"), text_style),
        ];
        if let Some(notice) = self.notice {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                notice,
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
