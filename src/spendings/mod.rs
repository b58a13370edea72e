use std::fmt::Write;

use models::*;

pub mod models;

#[cfg(test)]
mod test;

pub const EMPTY_STATE_MESSAGE: &'static str = "No spendings found for selected month.";

///
/// Renders the monthly spendings panel for a vehicle as a pure function
/// of the fetched rows. Marked rows receive the `marked` row class.
///
pub fn render_spendings(records: &[SpendingRecord]) -> String {
    let mut html = String::from("<h4>Spendings</h4>");
    if records.is_empty() {
        write!(html, "<p>{}</p>", EMPTY_STATE_MESSAGE).unwrap();
        return html;
    }

    html.push_str(
        "<table class=\"spend-table\"><thead><tr>\
         <th>Date</th><th>Category</th><th>Reason</th>\
         <th>Amount</th><th>Status</th><th>Marked</th>\
         </tr></thead><tbody>",
    );
    for r in records {
        write!(
            html,
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            if r.marked { "marked" } else { "" },
            r.date,
            r.category,
            r.reason.as_deref().unwrap_or(""),
            r.amount_display(),
            r.status(),
            if r.marked { "Yes" } else { "No" },
        )
        .unwrap();
    }
    html.push_str("</tbody></table>");
    html
}
