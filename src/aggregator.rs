use super::*;

pub(crate) async fn aggregate<F: Feed>(
  feed: &F,
  ids: Vec<StoryId>,
  options: &CycleOptions,
) -> TrendingList {
  let requested = ids.len();

  let requests = stream::iter(ids)
    .map(move |id| async move { (id, feed.fetch_story(id).await) });

  let limit = options.max_in_flight.max(1);

  let responses: Vec<(StoryId, Result<Story, F::Error>)> = match options.order
  {
    StoryOrder::Completion => requests.buffer_unordered(limit).collect().await,
    StoryOrder::Rank => requests.buffered(limit).collect().await,
  };

  let mut failed = 0usize;

  let qualifying = responses
    .into_iter()
    .filter_map(|(id, response)| match response {
      Ok(story) if story.score >= options.threshold => Some(story),
      Ok(story) => {
        trace!(id, score = story.score, "below threshold");
        None
      }
      Err(error) => {
        failed += 1;
        warn!(id, %error, "could not load story");
        None
      }
    })
    .map(TrendingEntry::from)
    .collect::<Vec<_>>();

  debug!(
    requested,
    failed,
    qualifying = qualifying.len(),
    threshold = options.threshold,
    "aggregated story details"
  );

  TrendingList::new(qualifying)
}
