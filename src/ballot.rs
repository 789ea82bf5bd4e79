use super::*;

/// A click resolved to the entry it votes on.
#[derive(Debug)]
pub(crate) struct Ballot<E> {
  pub(crate) button: E,
  pub(crate) counter: Option<E>,
  pub(crate) entry: E,
  pub(crate) state: VoteState,
  pub(crate) token: String,
}

impl<E: Element> Ballot<E> {
  /// Returns `None` when the click isn't on a votable entry.
  pub(crate) fn resolve(markers: &Markers, target: &E) -> Option<Self> {
    let button = if target.has_class(&markers.button) {
      target.clone()
    } else if let Some(button) = target.closest(&markers.button) {
      button
    } else {
      log::trace!("ignoring click outside vote button");
      return None;
    };

    let state = VoteState::from_marker(button.has_class(&markers.voted));

    let Some(entry) = button.closest(&markers.entry) else {
      log::debug!("ignoring vote button outside entry: {button:?}");
      return None;
    };

    let Some(token) = entry
      .attribute(&markers.token)
      .filter(|token| !token.is_empty())
    else {
      log::debug!("ignoring entry without vote token: {entry:?}");
      return None;
    };

    let counter = entry.find(&markers.counter);

    Some(Self {
      button,
      counter,
      entry,
      state,
      token,
    })
  }

  pub(crate) fn apply(self, markers: &Markers, action: Action, tally: &Tally) {
    if action.outcome().is_voted() {
      self.button.add_class(&markers.voted);
    } else {
      self.button.remove_class(&markers.voted);
    }

    if let Some(counter) = &self.counter {
      counter.set_text(&tally.totalvotes.to_string());
    }

    log::debug!("{action} applied to {:?}: {tally}", self.entry);
  }
}
