#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
  Manual,
  Scheduled,
}
