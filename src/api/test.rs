use super::models::ActionResponse;
use crate::spendings::models::{PaymentStatus, SpendingRecord};

#[test]
fn test_action_response_parse() -> anyhow::Result<()> {
    let res = serde_json::from_str::<ActionResponse>(r#"{"success": true, "marked": 1}"#)?;
    assert!(res.success);
    assert_eq!(None, res.message);

    let res = serde_json::from_str::<ActionResponse>(
        r#"{"success": false, "message": "Spending record not found"}"#,
    )?;
    assert!(!res.success);
    assert_eq!(Some(String::from("Spending record not found")), res.message);

    Ok(())
}

#[test]
fn test_spending_record_parse() -> anyhow::Result<()> {
    // The backend serializes `marked` as a 0/1 tinyint and may serialize
    // decimal amounts as strings
    let row = serde_json::from_str::<SpendingRecord>(
        r#"{
            "id": 12,
            "date": "Fri, 15 Mar 2024 00:00:00 GMT",
            "category": "diesel",
            "reason": "Diesel - Paid",
            "amount": "1500.50",
            "spended_by": "TSR",
            "mode": "Cash",
            "marked": 1
        }"#,
    )?;
    assert_eq!(12, row.id);
    assert_eq!(1500.50, row.amount);
    assert!(row.marked);
    assert_eq!(PaymentStatus::Paid, row.status());

    let row = serde_json::from_str::<SpendingRecord>(
        r#"{
            "id": 13,
            "date": "Sat, 16 Mar 2024 00:00:00 GMT",
            "category": "diesel",
            "reason": null,
            "amount": 500,
            "spended_by": null,
            "mode": null,
            "marked": false
        }"#,
    )?;
    assert_eq!(None, row.reason);
    assert_eq!(500.0, row.amount);
    assert!(!row.marked);
    assert_eq!(PaymentStatus::Unpaid, row.status());

    Ok(())
}
