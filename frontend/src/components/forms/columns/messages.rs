use common::model::headers::HeadersFailure;
use common::ui::sequence::Ticket;

pub enum Msg {
    /// The file input changed. `None` when the selection was cleared.
    FileChanged(Option<web_sys::File>),
    HeadersLoaded {
        ticket: Ticket,
        result: Result<Vec<String>, HeadersFailure>,
    },
    SetChecked(usize, bool),
    ToggleAll,
}
