//! Lookup-table policies over the enumerated state space.

use std::collections::BTreeMap;

use blackjack_engine::policy::Policy;
use blackjack_engine::state::{all_states, BlackjackAction, BlackjackState};

/// A policy stored as one action per state.
///
/// Tables built with [`TabularPolicy::from_fn`] cover every state in
/// [`all_states`]. States outside the table (a bust past 30) map to
/// [`BlackjackAction::Stick`]; they are terminal, so no episode asks for them.
///
/// # Example
///
/// ```rust
/// use blackjack_agents::tabular::TabularPolicy;
/// use blackjack_engine::policy::Policy;
/// use blackjack_engine::state::{BlackjackAction, BlackjackState};
///
/// let mut policy = TabularPolicy::from_fn("hit-soft", |s| {
///     if s.usable_ace { BlackjackAction::Hit } else { BlackjackAction::Stick }
/// });
/// let soft = BlackjackState::new(17, true, 9, false);
/// assert_eq!(policy.choose_action(&soft), BlackjackAction::Hit);
///
/// policy.set(soft, BlackjackAction::Stick);
/// assert_eq!(policy.choose_action(&soft), BlackjackAction::Stick);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularPolicy {
    name: String,
    table: BTreeMap<BlackjackState, BlackjackAction>,
}

impl TabularPolicy {
    /// Build a table by asking `f` once per state, in state order.
    pub fn from_fn<F>(name: impl Into<String>, mut f: F) -> Self
    where
        F: FnMut(&BlackjackState) -> BlackjackAction,
    {
        let table = all_states().into_iter().map(|s| (s, f(&s))).collect();
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn get(&self, state: &BlackjackState) -> Option<BlackjackAction> {
        self.table.get(state).copied()
    }

    /// Overwrite the action for one state. Returns the previous action.
    pub fn set(&mut self, state: BlackjackState, action: BlackjackAction) -> Option<BlackjackAction> {
        self.table.insert(state, action)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BlackjackState, &BlackjackAction)> {
        self.table.iter()
    }
}

impl Policy for TabularPolicy {
    fn choose_action(&self, state: &BlackjackState) -> BlackjackAction {
        self.get(state).unwrap_or(BlackjackAction::Stick)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
