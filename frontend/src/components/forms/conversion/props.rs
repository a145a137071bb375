//! Properties of the `ConversionFormComponent`.

use common::model::conversion::ConversionOutcome;
use common::requests::ConversionTarget;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConversionFormProps {
    /// Which form this is; decides the DOM id and the endpoint.
    pub target: ConversionTarget,

    /// Text of the submit button while idle.
    pub submit_label: AttrValue,

    /// Fired once a request is about to be sent. The page hides the shared
    /// result area and copy button in response.
    pub on_started: Callback<()>,

    /// Fired with the rendered outcome of a successful conversion.
    pub on_converted: Callback<ConversionOutcome>,

    /// Form fields. Anything with a `name` is submitted.
    #[prop_or_default]
    pub children: Html,
}
