use super::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Notification {
  pub(crate) current: TrendingList,
  pub(crate) should_alert: bool,
}

impl Notification {
  // Matched by title: distinct stories sharing a title count as unchanged.
  pub(crate) fn new(previous: &TrendingList, candidate: TrendingList) -> Self {
    let should_alert = match (previous.first(), candidate.first()) {
      (_, None) => false,
      (None, Some(_)) => true,
      (Some(previous), Some(candidate)) => previous.title != candidate.title,
    };

    Self {
      current: candidate,
      should_alert,
    }
  }
}
