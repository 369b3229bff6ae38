use super::*;

pub(crate) type StoryId = u64;

#[derive(Debug, Deserialize)]
pub(crate) struct Story {
  pub(crate) id: StoryId,
  pub(crate) score: u64,
  pub(crate) title: String,
  #[allow(dead_code)]
  pub(crate) url: Option<String>,
}

impl Story {
  pub(crate) const PERMALINK_URL: &str = "https://news.ycombinator.com/item?id=";

  pub(crate) fn permalink(&self) -> String {
    format!("{}{}", Self::PERMALINK_URL, self.id)
  }
}
