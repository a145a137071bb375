use common::model::conversion::{ConversionOutcome, SubmissionFailure};

pub enum Msg {
    Submit,
    Finished(Result<ConversionOutcome, SubmissionFailure>),
}
