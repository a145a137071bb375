//! Option panels of the clipboard form.
//!
//! The form has one radio group choosing the action and, inside each action
//! panel, a radio group choosing where the result goes. Picking "file"
//! reveals that panel's file format group. Exactly one action panel is
//! visible at any time.

use crate::requests::FileFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardAction {
    ToList,
    FromJson,
    ExtractLists,
}

impl ClipboardAction {
    pub const ALL: [ClipboardAction; 3] = [
        ClipboardAction::ToList,
        ClipboardAction::FromJson,
        ClipboardAction::ExtractLists,
    ];

    /// Submitted value of the `action` field.
    pub fn value(self) -> &'static str {
        match self {
            ClipboardAction::ToList => "to_list",
            ClipboardAction::FromJson => "from_json",
            ClipboardAction::ExtractLists => "extract_lists",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClipboardAction::ToList => "Convert column to list",
            ClipboardAction::FromJson => "Convert JSON to table",
            ClipboardAction::ExtractLists => "Extract lists from text",
        }
    }

    /// DOM id of the action radio button.
    pub fn input_id(self) -> &'static str {
        match self {
            ClipboardAction::ToList => "action-to-list",
            ClipboardAction::FromJson => "action-from-json",
            ClipboardAction::ExtractLists => "action-extract-lists",
        }
    }

    /// DOM id of the option panel belonging to this action.
    pub fn panel_id(self) -> &'static str {
        match self {
            ClipboardAction::ToList => "to-list-options",
            ClipboardAction::FromJson => "from-json-options",
            ClipboardAction::ExtractLists => "extract-lists-options",
        }
    }

    /// Prefix shared by the ids and field names of this panel's controls.
    fn prefix(self) -> &'static str {
        match self {
            ClipboardAction::ToList => "list",
            ClipboardAction::FromJson => "json",
            ClipboardAction::ExtractLists => "extract",
        }
    }

    /// Field name of the output method radio group, e.g. `list_output_method`.
    pub fn output_field(self) -> String {
        format!("{}_output_method", self.prefix())
    }

    /// Field name of the file format select, e.g. `list_file_format`.
    pub fn format_field(self) -> String {
        format!("{}_file_format", self.prefix())
    }

    /// DOM id of an output radio button, e.g. `list-output-file`.
    pub fn output_input_id(self, method: OutputMethod) -> String {
        format!("{}-output-{}", self.prefix(), method.value())
    }

    /// DOM id of the file format group, e.g. `list-file-format-group`.
    pub fn format_group_id(self) -> String {
        format!("{}-file-format-group", self.prefix())
    }

    /// Formats the server can write for this action.
    pub fn file_formats(self) -> &'static [FileFormat] {
        match self {
            ClipboardAction::ToList => &[FileFormat::Markdown],
            ClipboardAction::FromJson => &[FileFormat::Csv, FileFormat::Xlsx],
            ClipboardAction::ExtractLists => &[FileFormat::Markdown],
        }
    }
}

/// Where a clipboard conversion result goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMethod {
    File,
    Display,
}

impl OutputMethod {
    pub const ALL: [OutputMethod; 2] = [OutputMethod::Display, OutputMethod::File];

    pub fn value(self) -> &'static str {
        match self {
            OutputMethod::File => "file",
            OutputMethod::Display => "display",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputMethod::File => "Download as file",
            OutputMethod::Display => "Display on page",
        }
    }
}

/// Visibility state of the clipboard form's panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardOptions {
    action: ClipboardAction,
    list_output: OutputMethod,
    json_output: OutputMethod,
    extract_output: OutputMethod,
}

impl Default for ClipboardOptions {
    fn default() -> Self {
        Self {
            action: ClipboardAction::ToList,
            list_output: OutputMethod::Display,
            json_output: OutputMethod::Display,
            extract_output: OutputMethod::Display,
        }
    }
}

impl ClipboardOptions {
    pub fn action(&self) -> ClipboardAction {
        self.action
    }

    pub fn select_action(&mut self, action: ClipboardAction) {
        self.action = action;
    }

    pub fn output(&self, action: ClipboardAction) -> OutputMethod {
        match action {
            ClipboardAction::ToList => self.list_output,
            ClipboardAction::FromJson => self.json_output,
            ClipboardAction::ExtractLists => self.extract_output,
        }
    }

    pub fn select_output(&mut self, action: ClipboardAction, method: OutputMethod) {
        let slot = match action {
            ClipboardAction::ToList => &mut self.list_output,
            ClipboardAction::FromJson => &mut self.json_output,
            ClipboardAction::ExtractLists => &mut self.extract_output,
        };
        *slot = method;
    }

    pub fn is_panel_visible(&self, action: ClipboardAction) -> bool {
        self.action == action
    }

    pub fn is_format_group_visible(&self, action: ClipboardAction) -> bool {
        self.output(action) == OutputMethod::File
    }
}

/// Inline `display` style for a panel.
pub fn display_style(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_panels(options: &ClipboardOptions) -> Vec<ClipboardAction> {
        ClipboardAction::ALL
            .into_iter()
            .filter(|a| options.is_panel_visible(*a))
            .collect()
    }

    #[test]
    fn defaults_show_list_panel_without_format_groups() {
        let options = ClipboardOptions::default();
        assert_eq!(visible_panels(&options), [ClipboardAction::ToList]);
        assert!(ClipboardAction::ALL.iter().all(|a| !options.is_format_group_visible(*a)));
    }

    #[test]
    fn exactly_one_action_panel_is_visible() {
        let mut options = ClipboardOptions::default();
        let sequence = [
            ClipboardAction::FromJson,
            ClipboardAction::ToList,
            ClipboardAction::FromJson,
            ClipboardAction::FromJson,
            ClipboardAction::ExtractLists,
            ClipboardAction::ToList,
        ];
        for action in sequence {
            options.select_action(action);
            assert_eq!(visible_panels(&options), [action]);
        }
    }

    #[test]
    fn output_choice_is_tracked_per_panel() {
        let mut options = ClipboardOptions::default();
        options.select_output(ClipboardAction::ToList, OutputMethod::File);
        assert!(options.is_format_group_visible(ClipboardAction::ToList));
        assert!(!options.is_format_group_visible(ClipboardAction::FromJson));

        options.select_output(ClipboardAction::ToList, OutputMethod::Display);
        assert!(!options.is_format_group_visible(ClipboardAction::ToList));
    }

    #[test]
    fn output_choice_survives_action_switch() {
        let mut options = ClipboardOptions::default();
        options.select_output(ClipboardAction::FromJson, OutputMethod::File);
        options.select_action(ClipboardAction::ToList);
        options.select_action(ClipboardAction::FromJson);
        assert_eq!(options.output(ClipboardAction::FromJson), OutputMethod::File);
    }

    #[test]
    fn field_names_follow_server_contract() {
        assert_eq!(ClipboardAction::ToList.output_field(), "list_output_method");
        assert_eq!(ClipboardAction::FromJson.format_field(), "json_file_format");
        assert_eq!(ClipboardAction::ExtractLists.output_field(), "extract_output_method");
        assert_eq!(ClipboardAction::ToList.output_input_id(OutputMethod::File), "list-output-file");
        assert_eq!(ClipboardAction::FromJson.format_group_id(), "json-file-format-group");
    }
}
