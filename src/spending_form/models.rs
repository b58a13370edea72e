use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Diesel,
    Salary,
    Others,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Diesel => write!(f, "diesel"),
            Category::Salary => write!(f, "salary"),
            Category::Others => write!(f, "others"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DieselStatus {
    Paid,
    #[default]
    Unpaid,
}

impl fmt::Display for DieselStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieselStatus::Paid => write!(f, "Paid"),
            DieselStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}

///
/// Which field groups are visible for the current selector values.
/// Exactly one category group is shown, and for diesel exactly one
/// of the paid/unpaid sub-groups.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub group: Category,
    pub diesel_sub: Option<DieselStatus>,
}

/// Raw values of the category-specific visible inputs, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct SpendingFormInputs {
    pub diesel_payment_status: DieselStatus,
    pub diesel_amount: String,
    pub diesel_spended_by: String,
    pub diesel_mode: String,
    pub unpaid_diesel_amount: String,
    pub salary_amount: String,
    pub salary_spended_by: String,
    pub salary_mode: String,
    pub reason: String,
    pub others_amount: String,
    pub others_spended_by: String,
    pub others_mode: String,
}

///
/// The four fields actually submitted to the server, synthesized from the
/// category-specific inputs immediately before submission.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFields {
    pub amount: String,
    pub spended_by: String,
    pub mode: String,
    pub reason: String,
}
