use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::browse::render_browse;
use crate::ui::footer::Footer;
use crate::ui::form_view::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(
        app.route(),
        app.session().is_authenticated(),
        app.notice(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    if let Some(form) = app.form() {
        render_form(frame, body, app.route(), form, app.focused_index());
    } else if let Some(state) = app.browse() {
        render_browse(frame, body, state, app.catalog());
    }

    let footer_widget = Footer::new(app.route());
    frame.render_widget(footer_widget.widget(footer), footer);
}
