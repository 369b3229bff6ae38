use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Indicator {
  Alert,
  #[default]
  Idle,
  Secondary,
}

impl Indicator {
  pub(crate) const ANIMATION: [(Duration, Indicator); 2] = [
    (Duration::from_secs(1), Indicator::Secondary),
    (Duration::from_secs(2), Indicator::Idle),
  ];

  pub(crate) fn glyph(self) -> &'static str {
    match self {
      Indicator::Alert => "🔔",
      Indicator::Idle => "📰",
      Indicator::Secondary => "❗",
    }
  }

  pub(crate) fn style(self) -> Style {
    match self {
      Indicator::Alert | Indicator::Secondary => Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
      Indicator::Idle => Style::default().fg(Color::Rgb(255, 102, 0)),
    }
  }
}
