use super::{models::*, render_spendings, EMPTY_STATE_MESSAGE};

fn test_record(id: i64) -> SpendingRecord {
    SpendingRecord {
        id,
        date: String::from("2024-03-15"),
        category: String::from("diesel"),
        reason: Some(String::from("Diesel - Paid")),
        amount: 1500.5,
        spended_by: Some(String::from("TSR")),
        mode: Some(String::from("Cash")),
        marked: false,
    }
}

#[test]
fn test_status_derivation() {
    let mut rec = test_record(1);
    assert_eq!(PaymentStatus::Paid, rec.status());

    rec.mode = None;
    assert_eq!(PaymentStatus::Unpaid, rec.status());

    // Empty strings count as absent
    rec.mode = Some(String::new());
    assert_eq!(PaymentStatus::Unpaid, rec.status());

    rec.mode = Some(String::from("UPI"));
    rec.spended_by = Some(String::new());
    assert_eq!(PaymentStatus::Unpaid, rec.status());
}

#[test]
fn test_render_empty_state() {
    let html = render_spendings(&[]);
    assert!(html.starts_with("<h4>Spendings</h4>"));
    assert!(html.contains(EMPTY_STATE_MESSAGE));
    assert!(!html.contains("<table"));
}

#[test]
fn test_render_rows() {
    let mut marked_rec = test_record(2);
    marked_rec.marked = true;
    marked_rec.amount = 300.0;
    marked_rec.spended_by = None;
    marked_rec.reason = None;

    let html = render_spendings(&[test_record(1), marked_rec]);
    assert!(html.contains("<table class=\"spend-table\">"));

    // Currency-formatted amounts, two decimal places
    assert!(html.contains("<td>₹1500.50</td>"));
    assert!(html.contains("<td>₹300.00</td>"));

    // Derived statuses
    assert!(html.contains("<td>Paid</td>"));
    assert!(html.contains("<td>Unpaid</td>"));

    // Marked row treatment, and blank cell for a missing reason
    assert!(html.contains("<tr class=\"marked\">"));
    assert!(html.contains("<tr class=\"\">"));
    assert!(html.contains("<td>Yes</td>"));
    assert!(html.contains("<td>No</td>"));
    assert!(html.contains("<td></td>"));
}
