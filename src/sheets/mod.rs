//! Spreadsheet access: service-account credentials and the values gateway.

mod client;
mod credentials;

pub use client::{SheetStore, SheetsClient};
