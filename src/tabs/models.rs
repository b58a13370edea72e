#[derive(Debug, Clone)]
pub struct Tab {
    pub panel_id: String,
    pub button_id: String,
}

/// A row of visible cell text, plus whether the search filter shows it.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub visible: bool,
}

impl TableRow {
    pub fn new<I>(cells: I) -> TableRow
    where
        I: IntoIterator<Item = String>,
    {
        TableRow {
            cells: cells.into_iter().collect(),
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

///
/// The three payments tables the search filter knows about. Only the
/// table belonging to the active tab is ever filtered.
///
#[derive(Debug, Clone, Default)]
pub struct PaymentsTables {
    pub paid: TableView,
    pub unpaid: TableView,
    pub settled: TableView,
}

impl PaymentsTables {
    pub fn table_mut(&mut self, table_id: &str) -> Option<&mut TableView> {
        match table_id {
            "paidTable" => Some(&mut self.paid),
            "unpaidTable" => Some(&mut self.unpaid),
            "settledTable" => Some(&mut self.settled),
            _ => None,
        }
    }
}
