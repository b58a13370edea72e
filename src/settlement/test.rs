use super::{Error, SettlementItem, SettlementModal};

fn test_modal() -> SettlementModal {
    SettlementModal::new(vec![
        SettlementItem { id: 1, amount: 100.0, checked: false },
        SettlementItem { id: 2, amount: 250.0, checked: false },
        SettlementItem { id: 3, amount: 75.5, checked: false },
    ])
}

#[test]
fn test_open_close_transitions() {
    let mut modal = test_modal();
    assert!(!modal.is_open());

    modal.open();
    assert!(modal.is_open());

    modal.close();
    assert!(!modal.is_open());

    modal.open();
    modal.click_outside();
    assert!(!modal.is_open());
}

#[test]
fn test_select_all_sets_every_item() {
    let mut modal = test_modal();
    modal.set_all_checked(true);
    assert!(modal.items().iter().all(|i| i.checked));
    assert_eq!(3, modal.summary().count);

    modal.set_all_checked(false);
    assert!(modal.items().iter().all(|i| !i.checked));
    assert_eq!(0, modal.summary().count);
}

#[test]
fn test_summary_recomputed_per_change() {
    let mut modal = test_modal();
    modal.set_checked(1, true);
    modal.set_checked(2, true);

    let summary = modal.summary();
    assert_eq!(2, summary.count);
    assert_eq!(350.0, summary.total);
    assert_eq!("350.00", summary.total_display());

    modal.set_checked(2, false);
    modal.set_checked(3, true);
    let summary = modal.summary();
    assert_eq!(2, summary.count);
    assert_eq!("175.50", summary.total_display());

    // Checking a row that no longer exists changes nothing
    modal.set_checked(99, true);
    assert_eq!(2, modal.summary().count);
}

#[test]
fn test_submission_requires_selection() {
    let modal = test_modal();
    assert_eq!(Err(Error::NoItemsSelected), modal.submission("TSR", "Cash"));
}

#[test]
fn test_submission_collects_checked_ids() -> anyhow::Result<()> {
    let mut modal = test_modal();
    modal.set_checked(1, true);
    modal.set_checked(3, true);

    let req = modal.submission("MSR", "UPI")?;
    assert_eq!(vec![1, 3], req.spending_ids);
    assert_eq!("MSR", req.spended_by);
    assert_eq!("UPI", req.mode);

    Ok(())
}
