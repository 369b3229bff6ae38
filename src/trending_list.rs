use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TrendingEntry {
  pub(crate) id: StoryId,
  pub(crate) link: String,
  pub(crate) score: u64,
  pub(crate) title: String,
}

impl From<Story> for TrendingEntry {
  fn from(story: Story) -> Self {
    Self {
      link: story.permalink(),
      id: story.id,
      score: story.score,
      title: story.title,
    }
  }
}

impl TrendingEntry {
  pub(crate) fn label(&self) -> String {
    format!("({}★) {}", self.score, self.title)
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TrendingList {
  entries: Vec<TrendingEntry>,
}

impl TrendingList {
  pub(crate) const MAX_LEN: usize = 5;

  pub(crate) fn entries(&self) -> &[TrendingEntry] {
    &self.entries
  }

  pub(crate) fn first(&self) -> Option<&TrendingEntry> {
    self.entries.first()
  }

  pub(crate) fn get(&self, index: usize) -> Option<&TrendingEntry> {
    self.entries.get(index)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn new<I>(entries: I) -> Self
  where
    I: IntoIterator<Item = TrendingEntry>,
  {
    Self {
      entries: entries.into_iter().take(Self::MAX_LEN).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(id: StoryId) -> TrendingEntry {
    TrendingEntry::from(Story {
      id,
      score: 300,
      title: format!("Story {id}"),
      url: None,
    })
  }

  #[test]
  fn new_keeps_at_most_five_entries_in_order() {
    let list = TrendingList::new((1..=8).map(entry));

    assert_eq!(list.len(), TrendingList::MAX_LEN);

    assert_eq!(
      list.entries().iter().map(|entry| entry.id).collect::<Vec<_>>(),
      vec![1, 2, 3, 4, 5]
    );
  }

  #[test]
  fn entry_uses_permalink_instead_of_story_url() {
    let entry = TrendingEntry::from(Story {
      id: 7,
      score: 251,
      title: "Seven".into(),
      url: Some("https://example.com/seven".into()),
    });

    assert_eq!(entry.link, "https://news.ycombinator.com/item?id=7");
  }

  #[test]
  fn label_shows_score_then_title() {
    assert_eq!(entry(3).label(), "(300★) Story 3");
  }

  #[test]
  fn default_list_is_empty() {
    let list = TrendingList::default();

    assert!(list.is_empty());
    assert!(list.first().is_none());
    assert!(list.get(0).is_none());
  }
}
