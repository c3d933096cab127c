use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::catalog::{AlumniProfile, Campaign, Catalog, Event, EventStatus, JobPosting};
use crate::navigation::{Route, BROWSE_ROUTES};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::BrowseState;

/// Width share of the list pane, in percent.
const LIST_PERCENT: u16 = 40;

pub fn render_browse(frame: &mut Frame, area: Rect, state: &BrowseState, catalog: &Catalog) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_tabs(frame, rows[0], state.route);

    let body = if state.is_searchable() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(rows[1]);
        let search = Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(state.query.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled("_", Style::default().fg(ACCENT)),
        ]);
        frame.render_widget(Paragraph::new(search), split[0]);
        split[1]
    } else {
        rows[1]
    };

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_PERCENT),
            Constraint::Percentage(100 - LIST_PERCENT),
        ])
        .split(body);

    match state.route {
        Route::AlumniDirectory => {
            let matches = catalog.search_alumni(&state.query);
            let items = matches
                .iter()
                .map(|alumni| list_item(&alumni.name, &alumni.company))
                .collect();
            render_list(frame, panes[0], "Alumni", items, state.selected);
            match matches.get(state.selected) {
                Some(alumni) => render_detail(frame, panes[1], alumni_detail(alumni)),
                None => render_detail(frame, panes[1], vec![muted("No alumni match this search.")]),
            }
        }
        Route::Jobs => {
            let items = catalog
                .jobs
                .iter()
                .map(|job| list_item(&job.title, &job.company))
                .collect();
            render_list(frame, panes[0], "Job Postings", items, state.selected);
            if let Some(job) = catalog.jobs.get(state.selected) {
                render_detail(frame, panes[1], job_detail(job));
            }
        }
        Route::Events => {
            let items = catalog
                .events
                .iter()
                .map(|event| list_item(&event.name, &event.date))
                .collect();
            render_list(frame, panes[0], "Events", items, state.selected);
            if let Some(event) = catalog.events.get(state.selected) {
                render_detail(frame, panes[1], event_detail(event));
            }
        }
        Route::Campaigns => {
            let items = catalog
                .campaigns
                .iter()
                .map(|campaign| list_item(&campaign.name, &campaign.category))
                .collect();
            render_list(frame, panes[0], "Campaigns", items, state.selected);
            if let Some(campaign) = catalog.campaigns.get(state.selected) {
                render_campaign(frame, panes[1], campaign);
            }
        }
        Route::SignIn | Route::SignUp => {}
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Route) {
    let titles: Vec<Line> = BROWSE_ROUTES
        .iter()
        .map(|route| Line::from(route.title()))
        .collect();
    let selected = BROWSE_ROUTES
        .iter()
        .position(|route| *route == active)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(tabs, area);
}

fn list_item(primary: &str, secondary: &str) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            primary.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("  {secondary}"),
            Style::default().fg(MUTED_TEXT),
        )),
    ])
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn detail_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_detail(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(detail_block());
    frame.render_widget(paragraph, area);
}

fn render_campaign(frame: &mut Frame, area: Rect, campaign: &Campaign) {
    let block = detail_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(campaign_detail(campaign)).wrap(Wrap { trim: true }),
        rows[0],
    );
    let ratio = (f64::from(campaign.progress) / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(STATUS_OK).bg(ACTIVE_HIGHLIGHT))
        .ratio(ratio)
        .label(format!("{}% funded", campaign.progress));
    frame.render_widget(gauge, rows[1]);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.into(), Style::default().fg(HEADER_TEXT)),
    ])
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(MUTED_TEXT)))
}

fn alumni_detail(alumni: &AlumniProfile) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(&alumni.name),
        muted(&format!("{} at {}", alumni.title, alumni.company)),
        Line::from(""),
        field_line("Location", alumni.location.clone()),
        field_line(
            "Class of",
            format!("{} · {}", alumni.graduation_year, alumni.degree),
        ),
        field_line("Department", alumni.department.clone()),
        field_line("Email", alumni.email.clone()),
        field_line("Match", format!("{}%", alumni.match_score)),
        field_line("Skills", alumni.skills.join(", ")),
        Line::from(""),
        Line::from(alumni.achievements.clone()),
    ];
    let socials = [
        ("LinkedIn", &alumni.linkedin),
        ("GitHub", &alumni.github),
        ("Twitter", &alumni.twitter),
    ];
    let socials: Vec<Line<'static>> = socials
        .into_iter()
        .filter_map(|(label, handle)| handle.as_ref().map(|h| field_line(label, h.clone())))
        .collect();
    if !socials.is_empty() {
        lines.push(Line::from(""));
        lines.extend(socials);
    }
    lines
}

fn job_detail(job: &JobPosting) -> Vec<Line<'static>> {
    vec![
        heading(&job.title),
        muted(&format!("{} · {}", job.company, job.location)),
        Line::from(""),
        field_line("Salary", job.salary.clone()),
        field_line("Type", job.employment_type.clone()),
        field_line("Posted", job.posted_date.clone()),
        field_line("Applicants", job.applicants.to_string()),
        field_line("Requirements", job.requirements.join(", ")),
        Line::from(""),
        Line::from(job.description.clone()),
    ]
}

fn event_detail(event: &Event) -> Vec<Line<'static>> {
    let status = match event.status {
        EventStatus::Open => Span::styled("Open", Style::default().fg(STATUS_OK)),
        EventStatus::Closed => Span::styled("Closed", Style::default().fg(STATUS_ERROR)),
    };
    let mut lines = vec![
        heading(&event.name),
        muted(&format!("{} · {}", event.date, event.time)),
        Line::from(""),
        field_line("Location", event.location.clone()),
        field_line("Fee", event.fee.clone()),
        field_line("Attendees", event.attendees.to_string()),
        field_line("Register by", event.registration_deadline.clone()),
        Line::from(vec![
            Span::styled("Registration: ", Style::default().fg(MUTED_TEXT)),
            status,
        ]),
        Line::from(""),
        Line::from(event.description.clone()),
        Line::from(""),
        heading("Speakers"),
    ];
    lines.extend(
        event
            .speakers
            .iter()
            .map(|speaker| Line::from(format!("  • {speaker}"))),
    );
    lines
}

fn campaign_detail(campaign: &Campaign) -> Vec<Line<'static>> {
    vec![
        heading(&campaign.name),
        muted(&campaign.category),
        Line::from(""),
        Line::from(campaign.description.clone()),
        Line::from(""),
        field_line(
            "Raised",
            format!(
                "₹{} of ₹{}",
                format_amount(campaign.raised),
                format_amount(campaign.goal)
            ),
        ),
        field_line("Supporters", campaign.supporters.to_string()),
        field_line("Ends", campaign.end_date.clone()),
    ]
}

/// Groups digits in threes: `750000` → `750,000`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
