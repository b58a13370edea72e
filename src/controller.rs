use std::collections::HashSet;

use lazy_static::lazy_static;
use log::{debug, error};
use regex::Regex;

use crate::{
    api::{models::MarkPaidRequest, DynSpendingsApi},
    config::Config,
    prompt::DynPrompter,
    settlement::{SettlementItem, SettlementModal, SettlementSummary},
    spending_form::{
        self,
        models::{Category, DieselStatus, FieldVisibility, SpendingFormInputs, SubmissionFields},
    },
    spendings::{self, models::SpendingRecord},
    tabs::{self, models::PaymentsTables, TabBar},
};

lazy_static! {
    // The HTML month input guarantees YYYY-MM; re-checked before a request
    static ref MONTH_RE: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();
}

/// The network actions a busy flag can be held for. A second trigger of an
/// action already in flight is ignored, and the host UI can disable the
/// triggering control while `is_busy` reports true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LoadSpendings,
    ToggleMark(i64),
    MarkPaid(i64),
    DeleteSpending(i64),
    Settlement,
}

///
/// The page controller: owns the view state (tab bar, settlement modal,
/// form selectors, loaded spendings), issues each network action through
/// the SpendingsApi, and surfaces every outcome through the Prompter.
/// Rendering is a pure function of the held state.
///
pub struct PageController {
    api: DynSpendingsApi,
    prompter: DynPrompter,
    config: Config,
    busy: HashSet<Action>,

    tab_bar: TabBar,
    settlement: SettlementModal,
    form_category: Category,
    diesel_status: DieselStatus,
    selected_vehicle: Option<i64>,
    spendings: Option<Vec<SpendingRecord>>,
}

impl PageController {
    pub fn new(api: DynSpendingsApi, prompter: DynPrompter, config: Config) -> PageController {
        let tab_bar = TabBar::new([
            (String::from(tabs::PAID_TAB), String::from("paidTabBtn")),
            (String::from(tabs::UNPAID_TAB), String::from("unpaidTabBtn")),
            (String::from(tabs::SETTLED_TAB), String::from("settledTabBtn")),
        ]);

        PageController {
            api,
            prompter,
            config,
            busy: HashSet::new(),
            tab_bar,
            settlement: SettlementModal::new(vec![]),
            form_category: Category::Diesel,
            diesel_status: DieselStatus::default(),
            selected_vehicle: None,
            spendings: None,
        }
    }

    /// One-time page initialization: shows the advisory duplicate notice
    /// when the page query string flags one.
    pub fn init(&mut self, query_string: &str) {
        if query_flags_duplicate(query_string) {
            self.prompter
                .alert("This spending entry already exists. Please check for duplicates.");
        }
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.busy.contains(&action)
    }

    fn begin(&mut self, action: Action) -> bool {
        if !self.busy.insert(action) {
            debug!("Action {:?} already in flight - ignoring trigger", action);
            return false;
        }
        true
    }

    fn finish(&mut self, action: Action) {
        self.busy.remove(&action);
    }

    // ---- Form field visibility ----

    pub fn set_category(&mut self, category: Category) {
        self.form_category = category;
    }

    pub fn set_diesel_status(&mut self, status: DieselStatus) {
        self.diesel_status = status;
    }

    /// Which field groups are currently visible, derived from the selectors.
    pub fn visible_fields(&self) -> FieldVisibility {
        spending_form::visible_fields(self.form_category, self.diesel_status)
    }

    // ---- Form submission ----

    ///
    /// Synthesizes the submission fields for the current category and
    /// validates them. Returns None (after alerting) when validation blocks
    /// the submission; the caller must not submit in that case.
    ///
    pub fn submit_spending_form(&self, inputs: &SpendingFormInputs) -> Option<SubmissionFields> {
        let fields = spending_form::synthesize_fields(self.form_category, inputs);
        if let Err(e) = spending_form::validate_fields(self.form_category, &fields) {
            self.prompter.alert(&e.to_string());
            return None;
        }
        Some(fields)
    }

    // ---- Tabs and search ----

    pub fn switch_tab(&mut self, panel_id: &str) {
        self.tab_bar.switch_to(panel_id);
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.tab_bar.active_panel()
    }

    /// Filters the active tab's table only; the other tables are untouched.
    pub fn filter_payments(&self, tables: &mut PaymentsTables, query: &str) {
        let Some(panel_id) = self.tab_bar.active_panel() else {
            return;
        };
        let Some(table_id) = tabs::table_for_panel(panel_id) else {
            return;
        };
        if let Some(table) = tables.table_mut(table_id) {
            tabs::apply_search_filter(table, query);
        }
    }

    // ---- Vehicle spendings ----

    pub fn select_vehicle(&mut self, vehicle_id: i64) {
        self.selected_vehicle = Some(vehicle_id);
    }

    pub fn spendings(&self) -> Option<&[SpendingRecord]> {
        self.spendings.as_deref()
    }

    /// Rendered HTML for the spendings panel, or None before the first load.
    pub fn spendings_panel_html(&self) -> Option<String> {
        self.spendings
            .as_deref()
            .map(spendings::render_spendings)
    }

    /// The explicit load button: requires a vehicle selection first.
    pub async fn load_selected_vehicle(&mut self, month: &str) {
        match self.selected_vehicle {
            Some(vehicle_id) => self.load_vehicle_spendings(vehicle_id, month).await,
            None => self.prompter.alert("Click a vehicle button first"),
        }
    }

    pub async fn load_vehicle_spendings(&mut self, vehicle_id: i64, month: &str) {
        // An empty month loads all months; anything else must be YYYY-MM
        if !month.is_empty() && !MONTH_RE.is_match(month) {
            self.prompter.alert("Please select a valid month");
            return;
        }
        if !self.begin(Action::LoadSpendings) {
            return;
        }

        let res = self.api.vehicle_spendings(vehicle_id, month).await;
        self.finish(Action::LoadSpendings);

        match res {
            Ok(rows) => {
                self.selected_vehicle = Some(vehicle_id);
                self.spendings = Some(rows);
            }
            Err(e) => {
                // Prior panel state stays intact on failure
                error!("Failed to load spendings for vehicle {}: {}", vehicle_id, e);
                self.prompter.alert("Failed to load vehicle spendings");
            }
        }
    }

    // ---- Row actions ----

    pub async fn toggle_mark(&mut self, id: i64) {
        if !self.begin(Action::ToggleMark(id)) {
            return;
        }
        let res = self.api.toggle_mark(id).await;
        self.finish(Action::ToggleMark(id));

        match res {
            Ok(data) if data.success => {
                // Stale guard: the row may have been reloaded away while the
                // request was in flight. Flip only a row that still exists.
                if let Some(row) = self
                    .spendings
                    .iter_mut()
                    .flatten()
                    .find(|row| row.id == id)
                {
                    row.marked = !row.marked;
                }
            }
            Ok(_) => self.prompter.alert("Failed to toggle mark"),
            Err(e) => {
                error!("Failed to toggle mark on spending {}: {}", id, e);
                self.prompter.alert("Failed to toggle mark");
            }
        }
    }

    pub async fn mark_as_paid(&mut self, id: i64) {
        if !self
            .prompter
            .confirm("Are you sure you want to mark this payment as paid?")
        {
            return;
        }
        if !self.begin(Action::MarkPaid(id)) {
            return;
        }

        let req = MarkPaidRequest {
            spended_by: self.config.mark_paid.spended_by.clone(),
            mode: self.config.mark_paid.mode.clone(),
        };
        let res = self.api.mark_paid(id, req).await;
        self.finish(Action::MarkPaid(id));

        match res {
            Ok(data) if data.success => {
                self.prompter.alert("Payment marked as paid successfully");
                self.prompter.request_reload();
            }
            Ok(data) => self.prompter.alert(&format!(
                "Failed to mark payment as paid: {}",
                data.message.as_deref().unwrap_or("Unknown error")
            )),
            Err(e) => {
                error!("Failed to mark spending {} as paid: {}", id, e);
                self.prompter
                    .alert("An error occurred while marking payment as paid");
            }
        }
    }

    pub async fn delete_spending(&mut self, id: i64) {
        if !self
            .prompter
            .confirm("Are you sure you want to delete this spending?")
        {
            return;
        }
        if !self.begin(Action::DeleteSpending(id)) {
            return;
        }

        let res = self.api.delete_spending(id).await;
        self.finish(Action::DeleteSpending(id));

        match res {
            // No optimistic removal: the row disappears on the next reload
            Ok(data) if data.success => self.prompter.request_reload(),
            Ok(_) => self.prompter.alert("Failed to delete spending"),
            Err(e) => {
                error!("Failed to delete spending {}: {}", id, e);
                self.prompter.alert("Failed to delete spending");
            }
        }
    }

    /// Editing is not offered yet; the action only shows the notice.
    pub fn edit_spending(&self, id: i64) {
        self.prompter.alert(&format!(
            "Edit functionality for spending ID: {} will be implemented soon.",
            id
        ));
    }

    // ---- Settlement workflow ----

    pub fn settlement(&self) -> &SettlementModal {
        &self.settlement
    }

    pub fn set_settlement_items(&mut self, items: Vec<SettlementItem>) {
        self.settlement.set_items(items);
    }

    pub fn open_settlement(&mut self) {
        self.settlement.open();
    }

    pub fn close_settlement(&mut self) {
        self.settlement.close();
    }

    pub fn settlement_outside_click(&mut self) {
        self.settlement.click_outside();
    }

    pub fn settlement_select_all(&mut self, checked: bool) {
        self.settlement.set_all_checked(checked);
    }

    pub fn settlement_set_checked(&mut self, id: i64, checked: bool) {
        self.settlement.set_checked(id, checked);
    }

    pub fn settlement_summary(&self) -> SettlementSummary {
        self.settlement.summary()
    }

    ///
    /// Submits the settlement batch. Zero selected items is rejected locally
    /// with no request sent. On success the modal closes and a reload is
    /// requested; on failure it stays open so the user can retry.
    ///
    pub async fn submit_settlement(&mut self, spended_by: &str, mode: &str) {
        let req = match self.settlement.submission(spended_by, mode) {
            Ok(req) => req,
            Err(e) => {
                self.prompter.alert(&e.to_string());
                return;
            }
        };
        if !self.begin(Action::Settlement) {
            return;
        }

        let res = self.api.process_settlement(req).await;
        self.finish(Action::Settlement);

        match res {
            Ok(data) if data.success => {
                self.prompter
                    .alert(data.message.as_deref().unwrap_or("Settlement processed"));
                self.settlement.close();
                self.prompter.request_reload();
            }
            Ok(data) => self.prompter.alert(&format!(
                "Error: {}",
                data.message.as_deref().unwrap_or("Unknown error")
            )),
            Err(e) => {
                error!("Failed to process settlement: {}", e);
                self.prompter
                    .alert("An error occurred while processing the settlement.");
            }
        }
    }
}

/// True when the page query string carries `duplicate=true`.
fn query_flags_duplicate(query_string: &str) -> bool {
    query_string
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "duplicate" && value == "true")
}
