use super::*;

/// Whether the viewer has voted on an entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoteState {
  #[default]
  NotVoted,
  Voted,
}

impl VoteState {
  pub(crate) fn from_marker(marked: bool) -> Self {
    if marked {
      Self::Voted
    } else {
      Self::NotVoted
    }
  }

  pub(crate) fn is_voted(self) -> bool {
    self == Self::Voted
  }

  pub(crate) fn action(self) -> Action {
    match self {
      Self::NotVoted => Action::Vote,
      Self::Voted => Action::Unvote,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
  Unvote,
  Vote,
}

impl Action {
  pub(crate) fn path(self, endpoints: &Endpoints) -> &str {
    match self {
      Self::Unvote => &endpoints.unvote,
      Self::Vote => &endpoints.vote,
    }
  }

  pub(crate) fn outcome(self) -> VoteState {
    match self {
      Self::Unvote => VoteState::NotVoted,
      Self::Vote => VoteState::Voted,
    }
  }
}
