/// Dialogue states of the joke session.
///
/// The category keyboard is shared between the browse and submission flows;
/// which flow a button press belongs to is decided by the current state
/// alone. A joke sent as free text travels as the `pending_joke` payload
/// until the user files it into a category.
#[derive(Clone, Default, Debug)]
pub(crate) enum State {
    #[default]
    Start,
    /// Browse flow
    ReceiveBrowseCategory,
    ReceiveJokeRating,
    /// Submission flow
    ReceiveSubmissionCategory {
        pending_joke: String,
    },
}
