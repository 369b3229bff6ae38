use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  OpenUrl {
    url: String,
  },
  PlaySound {
    custom_sound: Option<PathBuf>,
    sound: Sound,
  },
  RunCycle {
    cycle_id: u64,
    options: CycleOptions,
  },
  ScheduleIndicator {
    delay: Duration,
    generation: u64,
    indicator: Indicator,
  },
}
