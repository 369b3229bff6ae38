pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}

pub(crate) fn format_countdown(seconds: u64) -> String {
  match (seconds / 3600, (seconds % 3600) / 60, seconds % 60) {
    (0, 0, seconds) => format!("{seconds}s"),
    (0, minutes, _) => format!("{minutes}m"),
    (hours, minutes, _) => format!("{hours}h {minutes:02}m"),
  }
}
