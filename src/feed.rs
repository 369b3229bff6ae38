use super::*;

pub(crate) trait Feed: Sync {
  type Error: Display + Send;

  fn fetch_story(
    &self,
    id: StoryId,
  ) -> impl Future<Output = Result<Story, Self::Error>> + Send;

  fn fetch_top_story_ids(
    &self,
  ) -> impl Future<Output = Result<Vec<StoryId>, Self::Error>> + Send;
}
