use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelPreferences,
  HideHelp,
  None,
  OpenPreferences,
  OpenSelected,
  Quit,
  Refresh(Trigger),
  SavePreferences,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}
