//! The mutation command seam: `Apply`, `Outcome`, `Mutation`, reconciliation.
//!
//! Every board mutation is a command value with an idempotent apply function.
//! The UI layer applies a command locally (optimistic), then mirrors it to the
//! backend; if the server call later fails, the command value can be handed to
//! a [`ReconcilePolicy`] to decide what to do about the already-applied local
//! change. The container itself never rolls back.

use crate::error::{BoardError, Result};
use crate::store::BoardStore;

use crate::card::{AddCard, DeleteCard, MoveCard, UpdateCard};
use crate::column::{AddColumn, DeleteColumn, MoveColumn, UpdateColumn};
use crate::label::{AddLabel, DeleteLabel, UpdateLabel};
use crate::member::{AddMember, RemoveMember, UpdateMemberRole};

/// Apply a command to the store.
///
/// Implementations are total: they never panic and never return an error.
/// A command whose target cannot be found leaves the snapshot valid and
/// unchanged and reports [`Outcome::Ignored`].
pub trait Apply {
    fn apply(&self, store: &mut BoardStore) -> Outcome;
}

/// Whether a command changed the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect
    Applied,
    /// The command was a silent no-op (no board, or target not found)
    Ignored,
}

impl Outcome {
    pub fn was_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Upgrade `Ignored` to an error for callers that want strict handling.
    /// The default contract stays silent; this is opt-in.
    pub fn ok_or(self, err: BoardError) -> Result<()> {
        match self {
            Self::Applied => Ok(()),
            Self::Ignored => Err(err),
        }
    }

    pub(crate) fn from_applied(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

/// A board mutation as a value, so it can be stored, logged, replayed against
/// a fresh snapshot, or handed to a [`ReconcilePolicy`] after a server
/// failure.
#[derive(Debug, Clone)]
pub enum Mutation {
    AddCard(AddCard),
    UpdateCard(UpdateCard),
    DeleteCard(DeleteCard),
    MoveCard(MoveCard),
    AddColumn(AddColumn),
    UpdateColumn(UpdateColumn),
    DeleteColumn(DeleteColumn),
    MoveColumn(MoveColumn),
    AddMember(AddMember),
    RemoveMember(RemoveMember),
    UpdateMemberRole(UpdateMemberRole),
    AddLabel(AddLabel),
    UpdateLabel(UpdateLabel),
    DeleteLabel(DeleteLabel),
}

impl Mutation {
    /// Verb-noun name of this operation, for logging
    pub fn op(&self) -> &'static str {
        match self {
            Self::AddCard(_) => "add card",
            Self::UpdateCard(_) => "update card",
            Self::DeleteCard(_) => "delete card",
            Self::MoveCard(_) => "move card",
            Self::AddColumn(_) => "add column",
            Self::UpdateColumn(_) => "update column",
            Self::DeleteColumn(_) => "delete column",
            Self::MoveColumn(_) => "move column",
            Self::AddMember(_) => "add member",
            Self::RemoveMember(_) => "remove member",
            Self::UpdateMemberRole(_) => "update member role",
            Self::AddLabel(_) => "add label",
            Self::UpdateLabel(_) => "update label",
            Self::DeleteLabel(_) => "delete label",
        }
    }
}

impl Apply for Mutation {
    fn apply(&self, store: &mut BoardStore) -> Outcome {
        match self {
            Self::AddCard(m) => m.apply(store),
            Self::UpdateCard(m) => m.apply(store),
            Self::DeleteCard(m) => m.apply(store),
            Self::MoveCard(m) => m.apply(store),
            Self::AddColumn(m) => m.apply(store),
            Self::UpdateColumn(m) => m.apply(store),
            Self::DeleteColumn(m) => m.apply(store),
            Self::MoveColumn(m) => m.apply(store),
            Self::AddMember(m) => m.apply(store),
            Self::RemoveMember(m) => m.apply(store),
            Self::UpdateMemberRole(m) => m.apply(store),
            Self::AddLabel(m) => m.apply(store),
            Self::UpdateLabel(m) => m.apply(store),
            Self::DeleteLabel(m) => m.apply(store),
        }
    }
}

macro_rules! mutation_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Mutation {
                fn from(m: $variant) -> Self {
                    Self::$variant(m)
                }
            }
        )+
    };
}

mutation_from!(
    AddCard,
    UpdateCard,
    DeleteCard,
    MoveCard,
    AddColumn,
    UpdateColumn,
    DeleteColumn,
    MoveColumn,
    AddMember,
    RemoveMember,
    UpdateMemberRole,
    AddLabel,
    UpdateLabel,
    DeleteLabel,
);

/// What the calling layer should do after the server rejected a mutation that
/// was already applied locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Apply a caller-computed inverse mutation
    Revert,
    /// Discard the local snapshot and reload from the backend
    Refetch,
    /// Keep the optimistic state as-is
    Ignore,
}

/// Reconciliation policy for failed server mirrors of local mutations.
///
/// The policy is advisory: the container exposes `set_board`/`reset` for the
/// refetch path but never acts on the returned [`Recovery`] itself.
pub trait ReconcilePolicy {
    fn on_mutation_failed(&self, mutation: &Mutation) -> Recovery;
}

impl<F> ReconcilePolicy for F
where
    F: Fn(&Mutation) -> Recovery,
{
    fn on_mutation_failed(&self, mutation: &Mutation) -> Recovery {
        self(mutation)
    }
}

/// Policy that always asks for a fresh snapshot from the backend
#[derive(Debug, Clone, Copy, Default)]
pub struct RefetchOnFailure;

impl ReconcilePolicy for RefetchOnFailure {
    fn on_mutation_failed(&self, mutation: &Mutation) -> Recovery {
        tracing::warn!("mutation failed on server, requesting refetch: {}", mutation.op());
        Recovery::Refetch
    }
}
