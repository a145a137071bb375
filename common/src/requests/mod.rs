//! Endpoint paths and form field names of the conversion server.

/// Header discovery endpoint. Expects a multipart `file` field.
pub const GET_HEADERS_PATH: &str = "/api/get-headers";

/// Multipart field carrying an uploaded file.
pub const FILE_FIELD: &str = "file";

/// One of the conversion forms and the endpoint it submits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionTarget {
    List,
    Json,
    FromJson,
    Clipboard,
}

impl ConversionTarget {
    pub const ALL: [ConversionTarget; 4] = [
        ConversionTarget::List,
        ConversionTarget::Json,
        ConversionTarget::FromJson,
        ConversionTarget::Clipboard,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            ConversionTarget::List => "/convert/list",
            ConversionTarget::Json => "/convert/json",
            ConversionTarget::FromJson => "/convert/from-json",
            ConversionTarget::Clipboard => "/convert/clipboard",
        }
    }

    /// DOM id of the `<form>` element.
    pub fn form_id(self) -> &'static str {
        match self {
            ConversionTarget::List => "list-form",
            ConversionTarget::Json => "json-form",
            ConversionTarget::FromJson => "from-json-form",
            ConversionTarget::Clipboard => "clipboard-form",
        }
    }
}

/// Output method of the file based list and JSON forms (`output_method`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOutput {
    File,
    Display,
    /// JSON form only: append the JSON column to the uploaded table.
    AddToTable,
}

impl FormOutput {
    pub const FIELD: &'static str = "output_method";

    pub fn value(self) -> &'static str {
        match self {
            FormOutput::File => "file",
            FormOutput::Display => "display",
            FormOutput::AddToTable => "add_to_table",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormOutput::File => "Download as file",
            FormOutput::Display => "Display on page",
            FormOutput::AddToTable => "Add JSON column to table",
        }
    }
}

/// Table formats accepted by `/convert/from-json` (`output_format`).
pub const FROM_JSON_FORMATS: [FileFormat; 3] = [FileFormat::Csv, FileFormat::Xlsx, FileFormat::Xls];

/// Field carrying the target table format of the from-JSON form.
pub const OUTPUT_FORMAT_FIELD: &str = "output_format";

/// File formats the server can generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Markdown,
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    pub fn value(self) -> &'static str {
        match self {
            FileFormat::Markdown => "md",
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Xls => "xls",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileFormat::Markdown => "Markdown (.md)",
            FileFormat::Csv => "CSV (.csv)",
            FileFormat::Xlsx => "Excel (.xlsx)",
            FileFormat::Xls => "Excel 97-2003 (.xls)",
        }
    }
}

/// Fields of the clipboard form that are not tied to one action.
pub mod clipboard {
    /// Pasted text.
    pub const DATA_FIELD: &str = "data";
    /// Selected action (`to_list`, `from_json`, `extract_lists`).
    pub const ACTION_FIELD: &str = "action";
}
