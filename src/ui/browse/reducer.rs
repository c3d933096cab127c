use crate::navigation::{Route, BROWSE_ROUTES};
use crate::ui::mvi::Reducer;

use super::intent::BrowseIntent;
use super::state::BrowseState;

pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::Open { route } if route.requires_session() => BrowseState {
                route,
                ..BrowseState::default()
            },
            BrowseIntent::Open { .. } => state,
            BrowseIntent::NextSection => open(step_section(state.route, 1)),
            BrowseIntent::PrevSection => open(step_section(state.route, -1)),
            BrowseIntent::MoveUp { item_count } => {
                let selected = if item_count == 0 {
                    0
                } else if state.selected == 0 || state.selected >= item_count {
                    item_count - 1
                } else {
                    state.selected - 1
                };
                BrowseState { selected, ..state }
            }
            BrowseIntent::MoveDown { item_count } => {
                let selected = if state.selected + 1 >= item_count {
                    0
                } else {
                    state.selected + 1
                };
                BrowseState { selected, ..state }
            }
            BrowseIntent::QueryPush(ch) if state.is_searchable() => {
                let mut query = state.query;
                query.push(ch);
                BrowseState {
                    query,
                    selected: 0,
                    ..state
                }
            }
            BrowseIntent::QueryPop if state.is_searchable() => {
                let mut query = state.query;
                query.pop();
                BrowseState {
                    query,
                    selected: 0,
                    ..state
                }
            }
            BrowseIntent::QueryPush(_) | BrowseIntent::QueryPop => state,
        }
    }
}

fn open(route: Route) -> BrowseState {
    BrowseState {
        route,
        ..BrowseState::default()
    }
}

fn step_section(current: Route, delta: isize) -> Route {
    let len = BROWSE_ROUTES.len() as isize;
    let index = BROWSE_ROUTES
        .iter()
        .position(|route| *route == current)
        .unwrap_or(0) as isize;
    BROWSE_ROUTES[(index + delta).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ignores_form_routes() {
        let state = BrowseReducer::reduce(
            BrowseState::default(),
            BrowseIntent::Open {
                route: Route::SignIn,
            },
        );
        assert_eq!(state.route, Route::AlumniDirectory);
    }

    #[test]
    fn sections_wrap_both_ways() {
        let state = BrowseReducer::reduce(BrowseState::default(), BrowseIntent::PrevSection);
        assert_eq!(state.route, Route::Campaigns);
        let state = BrowseReducer::reduce(state, BrowseIntent::NextSection);
        assert_eq!(state.route, Route::AlumniDirectory);
    }

    #[test]
    fn switching_section_resets_selection_and_query() {
        let state = BrowseState {
            route: Route::AlumniDirectory,
            selected: 3,
            query: "data".to_string(),
        };
        let state = BrowseReducer::reduce(state, BrowseIntent::NextSection);
        assert_eq!(state.route, Route::Jobs);
        assert_eq!(state.selected, 0);
        assert!(state.query.is_empty());
    }

    #[test]
    fn move_wraps_within_item_count() {
        let state = BrowseReducer::reduce(
            BrowseState::default(),
            BrowseIntent::MoveUp { item_count: 4 },
        );
        assert_eq!(state.selected, 3);
        let state = BrowseReducer::reduce(state, BrowseIntent::MoveDown { item_count: 4 });
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn move_with_no_items_stays_at_zero() {
        let state = BrowseReducer::reduce(
            BrowseState::default(),
            BrowseIntent::MoveDown { item_count: 0 },
        );
        assert_eq!(state.selected, 0);
        let state = BrowseReducer::reduce(state, BrowseIntent::MoveUp { item_count: 0 });
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn query_edits_only_apply_to_directory() {
        let state = BrowseReducer::reduce(BrowseState::default(), BrowseIntent::QueryPush('r'));
        assert_eq!(state.query, "r");
        let jobs = BrowseReducer::reduce(state, BrowseIntent::NextSection);
        let jobs = BrowseReducer::reduce(jobs, BrowseIntent::QueryPush('x'));
        assert!(jobs.query.is_empty());
    }
}
