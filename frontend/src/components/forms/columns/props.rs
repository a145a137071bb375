//! Properties of the `ColumnSelectorComponent`.

use common::ui::columns::ColumnKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ColumnSelectorProps {
    /// DOM id of the file input, e.g. `list-file`.
    pub file_input_id: AttrValue,

    /// DOM id of the column container, e.g. `columns-container`. Also the
    /// middle part of every generated control id.
    pub container_id: AttrValue,

    /// Radio buttons or checkboxes.
    pub kind: ColumnKind,

    /// DOM id of the select-all button. No button is rendered when `None`.
    #[prop_or_default]
    pub select_all_id: Option<AttrValue>,

    /// `accept` attribute of the file input.
    pub accept: AttrValue,

    /// Label of the file input.
    pub file_label: AttrValue,
}
