use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::UiConfig;
use crate::forms::{graduation_years, step_year, Field, FormState};
use crate::navigation::{NavigationQueue, Route};
use crate::session::Session;
use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use crate::ui::form::{FormController, SubmitOutcome};
use crate::ui::mvi::Reducer;
use crate::ui::sign_in::SignInController;
use crate::ui::sign_up::SignUpController;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {
        *$state = <$reducer>::reduce(std::mem::take($state), $intent);
    };
}

enum Screen {
    Form {
        controller: Box<dyn FormController>,
        focused: usize,
    },
    Browse(BrowseState),
}

struct Notice {
    text: &'static str,
    ticks_left: u32,
}

/// Shell state: the active screen plus the collaborators the form
/// controllers report to.
pub struct App {
    should_quit: bool,
    route: Route,
    screen: Screen,
    session: Session,
    navigation: NavigationQueue,
    catalog: Catalog,
    years: Vec<i32>,
    notice: Option<Notice>,
    notice_ticks: u32,
}

impl App {
    pub fn new(catalog: Catalog, ui: &UiConfig, current_year: i32) -> Self {
        let mut app = Self {
            should_quit: false,
            route: Route::SignIn,
            screen: Screen::Browse(BrowseState::default()),
            session: Session::new(),
            navigation: NavigationQueue::new(),
            catalog,
            years: graduation_years(current_year),
            notice: None,
            notice_ticks: ui.notice_ticks,
        };
        app.open(ui.start_screen);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.as_ref().map(|notice| notice.text)
    }

    /// Form state of the active form screen.
    pub fn form(&self) -> Option<&FormState> {
        match &self.screen {
            Screen::Form { controller, .. } => Some(controller.form()),
            Screen::Browse(_) => None,
        }
    }

    pub fn focused_index(&self) -> usize {
        match &self.screen {
            Screen::Form { focused, .. } => *focused,
            Screen::Browse(_) => 0,
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.form()
            .and_then(|form| form.layout().get(self.focused_index()).copied())
    }

    pub fn browse(&self) -> Option<&BrowseState> {
        match &self.screen {
            Screen::Browse(state) => Some(state),
            Screen::Form { .. } => None,
        }
    }

    /// Enters `route` with fresh screen state.
    ///
    /// Browse routes without an authenticated session fall back to sign-in.
    pub fn open(&mut self, route: Route) {
        let route = if route.requires_session() && !self.session.is_authenticated() {
            warn!(screen = %route, "screen requires sign-in");
            Route::SignIn
        } else {
            route
        };

        self.screen = match route {
            Route::SignIn => Screen::Form {
                controller: Box::new(SignInController::new(
                    self.session.clone(),
                    self.navigation.clone(),
                )),
                focused: 0,
            },
            Route::SignUp => Screen::Form {
                controller: Box::new(SignUpController::new(
                    self.session.clone(),
                    self.navigation.clone(),
                )),
                focused: 0,
            },
            browse => Screen::Browse(BrowseReducer::reduce(
                BrowseState::default(),
                BrowseIntent::Open { route: browse },
            )),
        };
        self.route = route;
        info!(screen = %route, "entered screen");
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    // -- Form screens ---------------------------------------------------------

    pub fn switch_form(&mut self) {
        match self.route {
            Route::SignIn => self.open(Route::SignUp),
            Route::SignUp => self.open(Route::SignIn),
            _ => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        if let Screen::Form {
            controller,
            focused,
        } = &mut self.screen
        {
            let len = controller.form().layout().len() as isize;
            if len > 0 {
                *focused = (*focused as isize + delta).rem_euclid(len) as usize;
            }
        }
    }

    /// Appends `ch` to the focused text field. Selections ignore typing.
    pub fn type_char(&mut self, ch: char) {
        self.edit_focused(|field, value| {
            if field.is_selection() {
                return false;
            }
            value.push(ch);
            true
        });
    }

    /// Removes the last character; clears a selection entirely.
    pub fn backspace(&mut self) {
        self.edit_focused(|field, value| {
            if field.is_selection() {
                value.clear();
            } else {
                value.pop();
            }
            true
        });
    }

    /// Steps the focused selection through the offered graduation years.
    pub fn cycle_selection(&mut self, delta: isize) {
        let years = &self.years;
        if let Screen::Form {
            controller,
            focused,
        } = &mut self.screen
        {
            let Some(&field) = controller.form().layout().get(*focused) else {
                return;
            };
            if !field.is_selection() {
                return;
            }
            if let Some(year) = step_year(years, controller.form().value(field), delta) {
                controller.change(field, year.to_string());
            }
        }
    }

    /// Shows or hides the focused secret, or the form's first secret when
    /// focus is elsewhere.
    pub fn toggle_secret(&mut self) {
        if let Screen::Form {
            controller,
            focused,
        } = &mut self.screen
        {
            let layout = controller.form().layout();
            let target = layout
                .get(*focused)
                .copied()
                .filter(|field| field.is_secret())
                .or_else(|| layout.iter().copied().find(|field| field.is_secret()));
            if let Some(field) = target {
                controller.toggle_secret(field);
            }
        }
    }

    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        let Screen::Form { controller, .. } = &mut self.screen else {
            return None;
        };
        let outcome = controller.submit();
        if outcome == SubmitOutcome::Accepted {
            self.notice = Some(Notice {
                text: controller.success_notice(),
                ticks_left: self.notice_ticks.max(1),
            });
        }
        self.apply_navigation();
        Some(outcome)
    }

    fn edit_focused(&mut self, edit: impl FnOnce(Field, &mut String) -> bool) {
        if let Screen::Form {
            controller,
            focused,
        } = &mut self.screen
        {
            let Some(&field) = controller.form().layout().get(*focused) else {
                return;
            };
            let mut value = controller.form().value(field).to_string();
            if edit(field, &mut value) {
                controller.change(field, value);
            }
        }
    }

    /// Acts on navigation requests issued by the form controllers.
    fn apply_navigation(&mut self) {
        for route in self.navigation.drain() {
            self.open(route);
        }
    }

    // -- Browse screens -------------------------------------------------------

    pub fn next_section(&mut self) {
        self.dispatch_browse(BrowseIntent::NextSection);
    }

    pub fn prev_section(&mut self) {
        self.dispatch_browse(BrowseIntent::PrevSection);
    }

    pub fn move_selection(&mut self, delta: isize) {
        let item_count = self.browse_item_count();
        let intent = if delta < 0 {
            BrowseIntent::MoveUp { item_count }
        } else {
            BrowseIntent::MoveDown { item_count }
        };
        self.dispatch_browse(intent);
    }

    pub fn filter_push(&mut self, ch: char) {
        self.dispatch_browse(BrowseIntent::QueryPush(ch));
    }

    pub fn filter_pop(&mut self) {
        self.dispatch_browse(BrowseIntent::QueryPop);
    }

    fn dispatch_browse(&mut self, intent: BrowseIntent) {
        if let Screen::Browse(state) = &mut self.screen {
            dispatch_mvi!(state, BrowseReducer, intent);
            self.route = state.route;
        }
    }

    /// Rows in the active browse list.
    pub fn browse_item_count(&self) -> usize {
        let Some(state) = self.browse() else {
            return 0;
        };
        match state.route {
            Route::AlumniDirectory => self.catalog.search_alumni(&state.query).len(),
            Route::Jobs => self.catalog.jobs.len(),
            Route::Events => self.catalog.events.len(),
            Route::Campaigns => self.catalog.campaigns.len(),
            Route::SignIn | Route::SignUp => 0,
        }
    }
}
