use super::*;

pub(crate) async fn run_cycle<F: Feed>(
  feed: &F,
  options: &CycleOptions,
) -> Result<TrendingList, F::Error> {
  let ids = feed.fetch_top_story_ids().await.inspect_err(|error| {
    warn!(%error, "could not load top stories, skipping cycle");
  })?;

  debug!(count = ids.len(), "loaded top story ids");

  Ok(aggregate(feed, ids, options).await)
}

#[cfg(test)]
mod tests {
  use {super::*, crate::aggregator::tests::FakeFeed};

  fn options() -> CycleOptions {
    CycleOptions::from(&Settings::default())
  }

  #[tokio::test]
  async fn failed_id_list_aborts_cycle() {
    let feed = FakeFeed::default().scored(1, 300);

    assert!(run_cycle(&feed, &options()).await.is_err());
  }

  #[tokio::test]
  async fn cycle_filters_with_default_threshold() {
    let feed = FakeFeed::default()
      .ranked(vec![3, 1, 2])
      .scored(1, 300)
      .scored(2, 249)
      .scored(3, 251);

    let list = run_cycle(&feed, &options()).await.unwrap();

    assert_eq!(
      list.entries().iter().map(|entry| entry.id).collect::<Vec<_>>(),
      vec![3, 1]
    );
  }
}
