//! Navigation collaborator trait.

/// Views the flows can request a transition to.
///
/// The client only needs an abstract destination; routing mechanics belong
/// to the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum View {
    /// The authenticated landing view.
    Profile,
}

/// View-transition requests.
///
/// Fire-and-forget: the flows request a transition and move on.
pub trait Navigator: Send + Sync {
    /// Request a transition to the given view.
    fn go_to(&self, view: View);
}
