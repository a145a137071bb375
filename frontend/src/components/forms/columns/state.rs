use common::ui::picker::ColumnPicker;

/// State of a column picker.
#[derive(Default)]
pub struct ColumnSelectorComponent {
    /// Container contents and the tickets of its header requests.
    pub picker: ColumnPicker,
}
