//! State of a column picker across overlapping header requests.

use crate::model::headers::HeadersFailure;

use super::columns::{ColumnKind, ColumnPanel, ColumnSet};
use super::sequence::{RequestSequence, Ticket};

/// What one column container shows, plus the tickets of its header
/// requests. Only the latest request may replace the panel.
#[derive(Clone, Debug, Default)]
pub struct ColumnPicker {
    panel: ColumnPanel,
    requests: RequestSequence,
}

impl ColumnPicker {
    pub fn panel(&self) -> &ColumnPanel {
        &self.panel
    }

    /// A file was chosen: show the loading text and take a ticket for the
    /// request about to be sent.
    pub fn start(&mut self) -> Ticket {
        self.panel = ColumnPanel::Loading;
        self.requests.issue()
    }

    /// Applies a finished request. Returns false, leaving the panel as it
    /// is, when a later file change superseded `ticket`.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        container_id: &str,
        kind: ColumnKind,
        result: Result<Vec<String>, HeadersFailure>,
    ) -> bool {
        if !self.requests.is_current(ticket) {
            return false;
        }
        self.panel = ColumnPanel::from_discovery(container_id, kind, result);
        true
    }

    /// The rendered controls, if the container holds any.
    pub fn columns_mut(&mut self) -> Option<&mut ColumnSet> {
        match &mut self.panel {
            ColumnPanel::Ready(set) => Some(set),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Result<Vec<String>, HeadersFailure> {
        Ok(names.iter().map(|name| name.to_string()).collect())
    }

    #[test]
    fn starts_idle_and_loads_on_file_change() {
        let mut picker = ColumnPicker::default();
        assert_eq!(picker.panel(), &ColumnPanel::Idle);

        picker.start();
        assert_eq!(picker.panel(), &ColumnPanel::Loading);
    }

    #[test]
    fn slow_response_for_earlier_file_is_dropped() {
        let mut picker = ColumnPicker::default();
        let first = picker.start();
        let second = picker.start();

        assert!(picker.finish(second, "columns-container", ColumnKind::Multiple, headers(&["B"])));
        assert!(!picker.finish(first, "columns-container", ColumnKind::Multiple, headers(&["A"])));

        let columns = picker.columns_mut().expect("controls rendered");
        assert_eq!(columns.options().len(), 1);
        assert_eq!(columns.options()[0].header, "B");
    }

    #[test]
    fn superseded_response_does_not_end_loading() {
        let mut picker = ColumnPicker::default();
        let first = picker.start();
        picker.start();

        assert!(!picker.finish(
            first,
            "columns-container",
            ColumnKind::Single,
            Err(HeadersFailure::Transport("network".to_string())),
        ));
        assert_eq!(picker.panel(), &ColumnPanel::Loading);
    }

    #[test]
    fn failure_is_shown_inline() {
        let mut picker = ColumnPicker::default();
        let ticket = picker.start();
        let failure = HeadersFailure::Rejected { status: 400, message: None };

        assert!(picker.finish(ticket, "json-columns", ColumnKind::Multiple, Err(failure)));
        assert_eq!(picker.panel().placeholder(), Some("Error: Could not parse file."));
        assert!(picker.columns_mut().is_none());
    }
}
