//! Callback coverage policy.

/// How strictly a table requires callbacks for the states it mentions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coverage {
    /// Every state used as a transition source or destination must have a
    /// callback. Tables that violate this fail to build.
    #[default]
    Strict,

    /// States without a callback are allowed in the transition graph.
    /// Dispatching out of or into one fails with
    /// [`DispatchError::MissingCallback`](crate::table::DispatchError::MissingCallback).
    Lenient,
}
