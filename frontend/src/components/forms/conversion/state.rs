use common::ui::submission::SubmitState;
use yew::prelude::*;

/// State of one conversion form.
///
/// Every form owns its own instance, so two forms on the same page never
/// share an in-flight flag or a button label.
#[derive(Default)]
pub struct ConversionFormComponent {
    /// Reference to the `<form>` element serialized on submit.
    pub form_ref: NodeRef,

    /// In-flight flag and the failure alert waiting for the next render.
    pub submission: SubmitState,
}
