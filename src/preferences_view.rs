use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
  Sound,
  Threshold,
}

pub(crate) struct PreferencesView {
  field: Field,
  sound: Sound,
  threshold: String,
}

impl PreferencesView {
  const HEIGHT: u16 = 9;
  const WIDTH: u16 = 48;

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let area = Self::popup_area(frame.area());

    frame.render_widget(Clear, area);

    let focus = |field: Field| {
      if self.field == field {
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::White)
      }
    };

    let cursor = if self.field == Field::Threshold {
      "_"
    } else {
      ""
    };

    let lines = vec![
      Line::from(Span::styled(
        "Min score threshold:",
        Style::default().fg(Color::DarkGray),
      )),
      Line::from(Span::styled(
        format!("[ {}{cursor} ]", self.threshold),
        focus(Field::Threshold),
      )),
      Line::default(),
      Line::from(Span::styled(
        "Notification sound:",
        Style::default().fg(Color::DarkGray),
      )),
      Line::from(Span::styled(
        format!("< {} >", self.sound.label()),
        focus(Field::Sound),
      )),
      Line::default(),
      Line::from(Span::styled(
        PREFERENCES_STATUS,
        Style::default().fg(Color::DarkGray),
      )),
    ];

    let form = Paragraph::new(lines)
      .block(
        Block::default()
          .title(PREFERENCES_TITLE)
          .borders(Borders::ALL),
      )
      .wrap(Wrap { trim: true });

    frame.render_widget(form, area);
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelPreferences,
      KeyCode::Enter => Command::SavePreferences,
      KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
        self.field = match self.field {
          Field::Sound => Field::Threshold,
          Field::Threshold => Field::Sound,
        };

        Command::None
      }
      KeyCode::Left if self.field == Field::Sound => {
        self.sound = self.sound.previous();
        Command::None
      }
      KeyCode::Right | KeyCode::Char(' ') if self.field == Field::Sound => {
        self.sound = self.sound.next();
        Command::None
      }
      KeyCode::Backspace if self.field == Field::Threshold => {
        self.threshold.pop();
        Command::None
      }
      KeyCode::Char(ch) if self.field == Field::Threshold => {
        let modifiers = key.modifiers;

        if !modifiers.contains(KeyModifiers::CONTROL)
          && !modifiers.contains(KeyModifiers::ALT)
          && !modifiers.contains(KeyModifiers::SUPER)
        {
          self.threshold.push(ch);
        }

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn new(settings: &Settings) -> Self {
    Self {
      field: Field::Threshold,
      sound: settings.sound,
      threshold: settings.threshold.to_string(),
    }
  }

  fn popup_area(area: Rect) -> Rect {
    let width = Self::WIDTH.min(area.width);
    let height = Self::HEIGHT.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }

  pub(crate) fn sound(&self) -> Sound {
    self.sound
  }

  pub(crate) fn threshold_input(&self) -> &str {
    &self.threshold
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(view: &mut PreferencesView, code: KeyCode) -> Command {
    view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn starts_from_current_settings() {
    let view = PreferencesView::new(&Settings::default());

    assert_eq!(view.threshold_input(), "250");
    assert_eq!(view.sound(), Sound::Ping);
  }

  #[test]
  fn threshold_accepts_free_text() {
    let mut view = PreferencesView::new(&Settings::default());

    for _ in 0..3 {
      press(&mut view, KeyCode::Backspace);
    }

    for ch in "1e3".chars() {
      press(&mut view, KeyCode::Char(ch));
    }

    assert_eq!(view.threshold_input(), "1e3");
  }

  #[test]
  fn sound_cycles_only_when_focused() {
    let mut view = PreferencesView::new(&Settings::default());

    press(&mut view, KeyCode::Right);
    assert_eq!(view.sound(), Sound::Ping);

    press(&mut view, KeyCode::Tab);
    press(&mut view, KeyCode::Right);
    assert_eq!(view.sound(), Sound::Submarine);

    press(&mut view, KeyCode::Left);
    press(&mut view, KeyCode::Left);
    assert_eq!(view.sound(), Sound::Mute);

    press(&mut view, KeyCode::Char('9'));
    assert_eq!(view.threshold_input(), "250");
  }

  #[test]
  fn enter_saves_and_esc_cancels() {
    let mut view = PreferencesView::new(&Settings::default());

    assert_eq!(press(&mut view, KeyCode::Enter), Command::SavePreferences);
    assert_eq!(press(&mut view, KeyCode::Esc), Command::CancelPreferences);
  }

  #[test]
  fn popup_fits_small_terminals() {
    let area = PreferencesView::popup_area(Rect::new(0, 0, 20, 5));

    assert_eq!(area, Rect::new(0, 0, 20, 5));
  }
}
