use crate::navigation::Route;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowseIntent {
    /// Show a browse section from the top. Non-browse routes are ignored.
    Open { route: Route },
    NextSection,
    PrevSection,
    /// Selection moves wrap within `item_count` rows.
    MoveUp { item_count: usize },
    MoveDown { item_count: usize },
    /// Extends the alumni directory search query.
    QueryPush(char),
    QueryPop,
}

impl Intent for BrowseIntent {}
