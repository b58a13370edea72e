pub mod api;
pub mod config;
pub mod controller;
pub mod prompt;
pub mod settlement;
pub mod spending_form;
pub mod spendings;
pub mod tabs;
