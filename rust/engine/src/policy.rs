use crate::state::{BlackjackAction, BlackjackState};

/// A decision-maker that plays the player's side of the table.
///
/// Implementations must answer for every state in
/// [`all_states`](crate::state::all_states). How the answer is produced is
/// up to them: a lookup table, a learned value function, a coin flip.
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_engine::policy::Policy;
/// use blackjack_engine::state::{BlackjackAction, BlackjackState};
///
/// struct AlwaysStick;
///
/// impl Policy for AlwaysStick {
///     fn choose_action(&self, _state: &BlackjackState) -> BlackjackAction {
///         BlackjackAction::Stick
///     }
///
///     fn name(&self) -> &str {
///         "always-stick"
///     }
/// }
///
/// let s = BlackjackState::new(12, false, 10, false);
/// assert_eq!(AlwaysStick.choose_action(&s), BlackjackAction::Stick);
/// ```
pub trait Policy: Send + Sync {
    /// Pick the next action for the given state.
    fn choose_action(&self, state: &BlackjackState) -> BlackjackAction;

    /// Identifier used in logs and episode records.
    fn name(&self) -> &str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose_action(&self, state: &BlackjackState) -> BlackjackAction {
        (**self).choose_action(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Policy + ?Sized> Policy for &P {
    fn choose_action(&self, state: &BlackjackState) -> BlackjackAction {
        (**self).choose_action(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
