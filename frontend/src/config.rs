//! Fixed UI settings of the conversion pages.

pub const COPY_LABEL: &str = " Copy";
pub const COPIED_LABEL: &str = " Copied!";
pub const COPY_FAILED_ALERT: &str = "Failed to copy text.";

/// File types accepted by the spreadsheet based tools.
pub const SPREADSHEET_ACCEPT: &str = ".xlsx,.xls,.csv";
pub const JSON_ACCEPT: &str = ".json,application/json";

pub const APP_TITLE: &str = "Data Conversion Tools";
