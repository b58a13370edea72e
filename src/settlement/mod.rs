use crate::api::models::SettlementRequest;

use error::*;

pub mod error;

#[cfg(test)]
mod test;

/// One unpaid spending offered for settlement, with its selection state.
#[derive(Debug, Clone)]
pub struct SettlementItem {
    pub id: i64,
    pub amount: f64,
    pub checked: bool,
}

/// Count and amount total of the currently selected items.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementSummary {
    pub count: usize,
    pub total: f64,
}

impl SettlementSummary {
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total)
    }
}

///
/// The settlement modal: Closed until the "make settlement" action opens
/// it, Closed again via explicit close, a click outside the dialog, or a
/// successful submission. While open, item checks drive a running summary.
///
#[derive(Debug, Clone)]
pub struct SettlementModal {
    open: bool,
    items: Vec<SettlementItem>,
}

impl SettlementModal {
    pub fn new(items: Vec<SettlementItem>) -> SettlementModal {
        SettlementModal { open: false, items }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click outside the dialog closes it, same as the explicit close.
    pub fn click_outside(&mut self) {
        self.close();
    }

    pub fn items(&self) -> &[SettlementItem] {
        &self.items
    }

    /// Replaces the set of unpaid items offered in the modal. Selection
    /// state starts cleared.
    pub fn set_items(&mut self, items: Vec<SettlementItem>) {
        self.items = items;
    }

    /// The "select all" checkbox: sets every item to match.
    pub fn set_all_checked(&mut self, checked: bool) {
        for item in self.items.iter_mut() {
            item.checked = checked;
        }
    }

    /// An unknown id is ignored (the row was reloaded away).
    pub fn set_checked(&mut self, id: i64, checked: bool) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.checked = checked;
        }
    }

    pub fn summary(&self) -> SettlementSummary {
        let checked = self.items.iter().filter(|i| i.checked);
        SettlementSummary {
            count: checked.clone().count(),
            total: checked.map(|i| i.amount).sum(),
        }
    }

    ///
    /// Assembles the batch request from the checked items and the chosen
    /// payer/mode. Rejected locally when nothing is selected — no request
    /// may be sent in that case.
    ///
    pub fn submission(&self, spended_by: &str, mode: &str) -> Result<SettlementRequest> {
        let spending_ids = self
            .items
            .iter()
            .filter(|i| i.checked)
            .map(|i| i.id)
            .collect::<Vec<_>>();

        if spending_ids.is_empty() {
            return Err(Error::NoItemsSelected);
        }

        Ok(SettlementRequest {
            spending_ids,
            spended_by: spended_by.to_string(),
            mode: mode.to_string(),
        })
    }
}
