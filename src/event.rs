use super::*;

pub(crate) enum Event {
  CycleFinished {
    cycle_id: u64,
    result: Result<TrendingList, FeedError>,
  },
  IndicatorStage {
    generation: u64,
    indicator: Indicator,
  },
}
