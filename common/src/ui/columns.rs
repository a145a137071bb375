//! Column selection state built from discovered headers.
//!
//! A [`ColumnSet`] holds one selection control per header, in header order.
//! Controls are addressed by index, never by a string derived from the
//! header, so duplicate or oddly formatted headers cannot collide. The DOM
//! id still carries a readable form of the header for styling and labels.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::headers::HeadersFailure;

pub const LOADING_TEXT: &str = "Loading columns...";
pub const NO_COLUMNS_TEXT: &str = "No columns found in the file.";
pub const IDLE_TEXT: &str = "Select a file to load its columns.";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Whether a column set allows one or many selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Radio buttons; submitted as `column_name`.
    Single,
    /// Checkboxes; submitted as repeated `column_names`.
    Multiple,
}

impl ColumnKind {
    pub fn input_type(self) -> &'static str {
        match self {
            ColumnKind::Single => "radio",
            ColumnKind::Multiple => "checkbox",
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            ColumnKind::Single => "column_name",
            ColumnKind::Multiple => "column_names",
        }
    }
}

/// Text of the select-all button, describing what the next click does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllLabel {
    SelectAll,
    DeselectAll,
}

impl SelectAllLabel {
    pub fn text(self) -> &'static str {
        match self {
            SelectAllLabel::SelectAll => "Select All",
            SelectAllLabel::DeselectAll => "Deselect All",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnOption {
    pub id: String,
    pub header: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSet {
    kind: ColumnKind,
    options: Vec<ColumnOption>,
    /// Configuration to return to if the next action is another select-all.
    restore_point: Option<Vec<bool>>,
}

impl ColumnSet {
    /// Builds a fresh, fully unchecked set for `headers`.
    pub fn new(container_id: &str, kind: ColumnKind, headers: Vec<String>) -> Self {
        let options = headers
            .into_iter()
            .enumerate()
            .map(|(index, header)| ColumnOption {
                id: control_id(container_id, index, &header),
                header,
                checked: false,
            })
            .collect();
        Self {
            kind,
            options,
            restore_point: None,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn options(&self) -> &[ColumnOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Applies a user change to one control. Radio sets keep at most one
    /// control checked.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if index >= self.options.len() {
            return;
        }
        self.restore_point = None;
        if self.kind == ColumnKind::Single && checked {
            for option in &mut self.options {
                option.checked = false;
            }
        }
        self.options[index].checked = checked;
    }

    pub fn all_checked(&self) -> bool {
        !self.options.is_empty() && self.options.iter().all(|o| o.checked)
    }

    pub fn select_all_label(&self) -> SelectAllLabel {
        if self.all_checked() {
            SelectAllLabel::DeselectAll
        } else {
            SelectAllLabel::SelectAll
        }
    }

    /// Flips every checkbox to the opposite of the current aggregate state.
    ///
    /// Returns `false` without touching anything for radio sets and empty
    /// sets. A toggle that follows another toggle with no change in between
    /// restores the configuration the first one started from.
    pub fn toggle_all(&mut self) -> bool {
        if self.kind != ColumnKind::Multiple || self.options.is_empty() {
            return false;
        }

        if let Some(previous) = self.restore_point.take() {
            for (option, checked) in self.options.iter_mut().zip(previous) {
                option.checked = checked;
            }
            return true;
        }

        let before: Vec<bool> = self.options.iter().map(|o| o.checked).collect();
        let target = !self.all_checked();
        for option in &mut self.options {
            option.checked = target;
        }
        self.restore_point = Some(before);
        true
    }

    pub fn selected_headers(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.header.as_str())
            .collect()
    }
}

/// What a column container shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColumnPanel {
    #[default]
    Idle,
    Loading,
    Ready(ColumnSet),
    NoColumns,
    Failed(String),
}

impl ColumnPanel {
    /// Panel for a finished discovery request.
    pub fn from_discovery(
        container_id: &str,
        kind: ColumnKind,
        result: Result<Vec<String>, HeadersFailure>,
    ) -> Self {
        match result {
            Ok(headers) if headers.is_empty() => ColumnPanel::NoColumns,
            Ok(headers) => ColumnPanel::Ready(ColumnSet::new(container_id, kind, headers)),
            Err(failure) => ColumnPanel::Failed(failure.placeholder_message()),
        }
    }

    /// Placeholder text shown instead of controls, if any.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ColumnPanel::Idle => Some(IDLE_TEXT),
            ColumnPanel::Loading => Some(LOADING_TEXT),
            ColumnPanel::Ready(_) => None,
            ColumnPanel::NoColumns => Some(NO_COLUMNS_TEXT),
            ColumnPanel::Failed(message) => Some(message.as_str()),
        }
    }

    /// Empty and failed panels are styled as errors.
    pub fn is_error(&self) -> bool {
        matches!(self, ColumnPanel::NoColumns | ColumnPanel::Failed(_))
    }

    /// The select-all button only appears next to a populated checkbox set.
    pub fn shows_select_all(&self) -> bool {
        matches!(self, ColumnPanel::Ready(set) if set.kind() == ColumnKind::Multiple)
    }
}

/// DOM id of one selection control: `col-<container>-<index>-<header>`,
/// with whitespace runs in the header replaced by `-`.
pub fn control_id(container_id: &str, index: usize, header: &str) -> String {
    format!(
        "col-{}-{}-{}",
        container_id,
        index,
        WHITESPACE.replace_all(header, "-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn checked(set: &ColumnSet) -> Vec<bool> {
        set.options().iter().map(|o| o.checked).collect()
    }

    #[test]
    fn radio_set_has_one_control_per_header() {
        let set = ColumnSet::new("columns-container", ColumnKind::Single, headers(&["A", "B"]));
        let values: Vec<_> = set.options().iter().map(|o| o.header.as_str()).collect();
        assert_eq!(values, ["A", "B"]);
        assert_eq!(set.kind().input_type(), "radio");
        assert_eq!(set.kind().field_name(), "column_name");

        let ids: HashSet<_> = set.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn ids_stay_unique_for_colliding_headers() {
        let set = ColumnSet::new(
            "json-columns-container",
            ColumnKind::Multiple,
            headers(&["First Name", "First-Name", "First  Name", "First Name"]),
        );
        let ids: HashSet<_> = set.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(set.options()[0].id, "col-json-columns-container-0-First-Name");
        assert_eq!(set.options()[2].id, "col-json-columns-container-2-First-Name");
        assert_eq!(set.options()[0].header, "First Name");
    }

    #[test]
    fn radio_selection_is_exclusive() {
        let mut set = ColumnSet::new("c", ColumnKind::Single, headers(&["A", "B", "C"]));
        set.set_checked(0, true);
        set.set_checked(2, true);
        assert_eq!(checked(&set), [false, false, true]);
        assert_eq!(set.selected_headers(), ["C"]);
    }

    #[test]
    fn out_of_range_change_is_ignored() {
        let mut set = ColumnSet::new("c", ColumnKind::Multiple, headers(&["A"]));
        set.set_checked(5, true);
        assert_eq!(checked(&set), [false]);
    }

    #[test]
    fn select_all_then_deselect_all() {
        let mut set = ColumnSet::new("c", ColumnKind::Multiple, headers(&["A", "B", "C"]));
        assert_eq!(set.select_all_label(), SelectAllLabel::SelectAll);

        assert!(set.toggle_all());
        assert_eq!(checked(&set), [true, true, true]);
        assert_eq!(set.select_all_label().text(), "Deselect All");

        assert!(set.toggle_all());
        assert_eq!(checked(&set), [false, false, false]);
        assert_eq!(set.select_all_label().text(), "Select All");
    }

    #[test]
    fn double_toggle_restores_any_configuration() {
        let configurations = [
            vec![false, false, false],
            vec![true, true, true],
            vec![true, false, true],
            vec![false, true, false],
        ];
        for original in configurations {
            let mut set = ColumnSet::new("c", ColumnKind::Multiple, headers(&["A", "B", "C"]));
            for (index, value) in original.iter().enumerate() {
                set.set_checked(index, *value);
            }
            set.toggle_all();
            set.toggle_all();
            assert_eq!(checked(&set), original);
        }
    }

    #[test]
    fn mixed_configuration_is_first_completed() {
        let mut set = ColumnSet::new("c", ColumnKind::Multiple, headers(&["A", "B"]));
        set.set_checked(0, true);
        set.toggle_all();
        assert_eq!(checked(&set), [true, true]);
    }

    #[test]
    fn manual_change_discards_restore_point() {
        let mut set = ColumnSet::new("c", ColumnKind::Multiple, headers(&["A", "B"]));
        set.set_checked(0, true);
        set.toggle_all();
        set.set_checked(1, true);
        set.toggle_all();
        assert_eq!(checked(&set), [false, false]);
    }

    #[test]
    fn toggle_is_a_no_op_for_empty_and_radio_sets() {
        let mut empty = ColumnSet::new("c", ColumnKind::Multiple, Vec::new());
        assert!(!empty.toggle_all());
        assert!(!empty.all_checked());

        let mut radios = ColumnSet::new("c", ColumnKind::Single, headers(&["A", "B"]));
        assert!(!radios.toggle_all());
        assert_eq!(checked(&radios), [false, false]);
    }

    #[test]
    fn empty_discovery_shows_placeholder_without_select_all() {
        let panel = ColumnPanel::from_discovery("c", ColumnKind::Multiple, Ok(Vec::new()));
        assert_eq!(panel, ColumnPanel::NoColumns);
        assert_eq!(panel.placeholder(), Some(NO_COLUMNS_TEXT));
        assert!(panel.is_error());
        assert!(!panel.shows_select_all());
    }

    #[test]
    fn populated_discovery_reveals_select_all_for_checkboxes_only() {
        let multiple = ColumnPanel::from_discovery("c", ColumnKind::Multiple, Ok(headers(&["A"])));
        assert!(multiple.shows_select_all());
        assert_eq!(multiple.placeholder(), None);

        let single = ColumnPanel::from_discovery("c", ColumnKind::Single, Ok(headers(&["A"])));
        assert!(!single.shows_select_all());
    }

    #[test]
    fn failed_discovery_renders_inline_message() {
        let panel = ColumnPanel::from_discovery(
            "c",
            ColumnKind::Single,
            Err(HeadersFailure::Transport("network down".to_string())),
        );
        assert_eq!(
            panel.placeholder(),
            Some("An unexpected error occurred. Check console for details.")
        );
        assert!(panel.is_error());
        assert!(!ColumnPanel::Loading.is_error());
    }
}
