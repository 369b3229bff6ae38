use super::*;

#[derive(Default)]
pub(crate) struct MenuView {
  list: TrendingList,
  loaded: bool,
  selected: usize,
}

impl MenuView {
  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('r' | 'R') => Command::Refresh(Trigger::Manual),
      KeyCode::Char('p' | 'P' | ',') => Command::OpenPreferences,
      KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
      KeyCode::Home | KeyCode::Char('g') => Command::SelectFirst,
      KeyCode::End | KeyCode::Char('G') => Command::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenSelected,
      _ => Command::None,
    }
  }

  pub(crate) fn is_loaded(&self) -> bool {
    self.loaded
  }

  pub(crate) fn list(&self) -> &TrendingList {
    &self.list
  }

  pub(crate) fn replace(&mut self, list: TrendingList) {
    self.list = list;
    self.loaded = true;
    self.selected = self.selected.min(self.list.len().saturating_sub(1));
  }

  pub(crate) fn select_first(&mut self) {
    self.selected = 0;
  }

  pub(crate) fn select_last(&mut self) {
    self.selected = self.list.len().saturating_sub(1);
  }

  pub(crate) fn select_next(&mut self) {
    if self.selected + 1 < self.list.len() {
      self.selected += 1;
    }
  }

  pub(crate) fn select_previous(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub(crate) fn selected_entry(&self) -> Option<&TrendingEntry> {
    self.list.get(self.selected)
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (!self.list.is_empty()).then_some(self.selected)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn list(count: u64) -> TrendingList {
    TrendingList::new((1..=count).map(|id| TrendingEntry {
      id,
      link: format!("https://news.ycombinator.com/item?id={id}"),
      score: 300,
      title: format!("Story {id}"),
    }))
  }

  #[test]
  fn starts_unloaded_without_selection() {
    let view = MenuView::default();

    assert!(!view.is_loaded());
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_entry().is_none());
  }

  #[test]
  fn selection_stays_within_bounds() {
    let mut view = MenuView::default();

    view.replace(list(3));

    view.select_previous();
    assert_eq!(view.selected_index(), Some(0));

    view.select_next();
    view.select_next();
    view.select_next();
    assert_eq!(view.selected_index(), Some(2));

    view.select_first();
    assert_eq!(view.selected_entry().map(|entry| entry.id), Some(1));

    view.select_last();
    assert_eq!(view.selected_entry().map(|entry| entry.id), Some(3));
  }

  #[test]
  fn replace_clamps_selection_to_shorter_list() {
    let mut view = MenuView::default();

    view.replace(list(5));
    view.select_last();

    view.replace(list(2));

    assert!(view.is_loaded());
    assert_eq!(view.selected_index(), Some(1));
  }

  #[test]
  fn replace_with_empty_list_clears_selection() {
    let mut view = MenuView::default();

    view.replace(list(2));
    view.replace(TrendingList::default());

    assert!(view.is_loaded());
    assert_eq!(view.selected_index(), None);
  }

  #[test]
  fn keys_map_to_menu_commands() {
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    assert_eq!(
      MenuView::handle_key(key(KeyCode::Char('r'))),
      Command::Refresh(Trigger::Manual)
    );
    assert_eq!(
      MenuView::handle_key(key(KeyCode::Char(','))),
      Command::OpenPreferences
    );
    assert_eq!(MenuView::handle_key(key(KeyCode::Enter)), Command::OpenSelected);
    assert_eq!(MenuView::handle_key(key(KeyCode::Char('q'))), Command::Quit);
    assert_eq!(MenuView::handle_key(key(KeyCode::Char('x'))), Command::None);
  }
}
