use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CycleOptions {
  pub(crate) max_in_flight: usize,
  pub(crate) order: StoryOrder,
  pub(crate) threshold: u64,
}

impl From<&Settings> for CycleOptions {
  fn from(settings: &Settings) -> Self {
    Self {
      max_in_flight: settings.max_in_flight.max(1),
      order: settings.order,
      threshold: settings.threshold,
    }
  }
}
