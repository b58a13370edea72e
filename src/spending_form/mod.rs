use {error::*, models::*};

pub mod error;
pub mod models;


/// Derives the visible field groups from the current selector values.
/// Idempotent: the same inputs always produce the same visible state.
pub fn visible_fields(category: Category, diesel_status: DieselStatus) -> FieldVisibility {
    FieldVisibility {
        group: category,
        diesel_sub: (category == Category::Diesel).then_some(diesel_status),
    }
}

///
/// Synthesizes the submitted fields from the category-specific inputs.
/// Each call builds the payload from scratch, so re-submitting replaces
/// any previously synthesized values rather than appending to them.
///
pub fn synthesize_fields(category: Category, inputs: &SpendingFormInputs) -> SubmissionFields {
    match category {
        Category::Diesel => {
            let reason = format!("Diesel - {}", inputs.diesel_payment_status);
            match inputs.diesel_payment_status {
                DieselStatus::Paid => SubmissionFields {
                    amount: inputs.diesel_amount.clone(),
                    spended_by: inputs.diesel_spended_by.clone(),
                    mode: inputs.diesel_mode.clone(),
                    reason,
                },
                // Unpaid diesel forces payer and mode to empty strings so the
                // server persists them as NULL rather than literal values
                DieselStatus::Unpaid => SubmissionFields {
                    amount: inputs.unpaid_diesel_amount.clone(),
                    spended_by: String::new(),
                    mode: String::new(),
                    reason,
                },
            }
        }
        Category::Salary => SubmissionFields {
            amount: inputs.salary_amount.clone(),
            spended_by: inputs.salary_spended_by.clone(),
            mode: inputs.salary_mode.clone(),
            reason: String::from("Driver Salary"),
        },
        Category::Others => SubmissionFields {
            amount: inputs.others_amount.clone(),
            spended_by: inputs.others_spended_by.clone(),
            mode: inputs.others_mode.clone(),
            reason: inputs.reason.clone(),
        },
    }
}

///
/// Validates the synthesized fields (not the raw sub-fields): the amount
/// must parse to a positive number, and an "others" spending must carry a
/// non-blank reason. The reason check runs last, so its message wins when
/// both fail.
///
pub fn validate_fields(category: Category, fields: &SubmissionFields) -> Result<()> {
    let mut result = Ok(());

    let amount_ok = fields.amount.parse::<f64>().map(|am| am > 0.0).unwrap_or(false);
    if !amount_ok {
        result = Err(Error::InvalidAmount);
    }
    if category == Category::Others && fields.reason.trim().is_empty() {
        result = Err(Error::MissingReason);
    }

    result
}
