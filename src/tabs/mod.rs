use log::debug;

pub mod models;


use models::*;

pub const PAID_TAB: &'static str = "paidTab";
pub const UNPAID_TAB: &'static str = "unpaidTab";
pub const SETTLED_TAB: &'static str = "settledTab";

/// The table each tab panel filters over. Unknown panels have no table.
pub fn table_for_panel(panel_id: &str) -> Option<&'static str> {
    match panel_id {
        PAID_TAB => Some("paidTable"),
        UNPAID_TAB => Some("unpaidTable"),
        SETTLED_TAB => Some("settledTable"),
        _ => None,
    }
}

///
/// Tab bar with an explicit panel-to-button mapping, built once at
/// initialization. At most one panel (and its button) is active.
///
#[derive(Debug, Clone)]
pub struct TabBar {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabBar {
    pub fn new<I>(tabs: I) -> TabBar
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let tabs = tabs
            .into_iter()
            .map(|(panel_id, button_id)| Tab { panel_id, button_id })
            .collect::<Vec<_>>();
        let active = if tabs.is_empty() { None } else { Some(0) };
        TabBar { tabs, active }
    }

    /// Activates the panel with the given id, deactivating all others.
    /// An id with no matching panel leaves the current state unchanged.
    pub fn switch_to(&mut self, panel_id: &str) {
        match self.tabs.iter().position(|t| t.panel_id == panel_id) {
            Some(idx) => self.active = Some(idx),
            None => debug!("No tab panel matching id {}", panel_id),
        }
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active.map(|idx| self.tabs[idx].panel_id.as_str())
    }

    pub fn active_button(&self) -> Option<&str> {
        self.active.map(|idx| self.tabs[idx].button_id.as_str())
    }
}

///
/// Hides every row whose cells contain no case-insensitive match for the
/// query, and shows all others. An empty query shows every row.
///
pub fn apply_search_filter(table: &mut TableView, query: &str) {
    let query = query.to_lowercase();
    for row in table.rows.iter_mut() {
        row.visible = row
            .cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(&query));
    }
}
