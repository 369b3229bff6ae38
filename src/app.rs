use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  next_refresh: Instant,
  refresh_interval: Duration,
  state: State,
}

impl App {
  fn dispatch(&mut self, command: Command) -> bool {
    match self.state.dispatch_command(command) {
      Ok(dispatch) => {
        for effect in dispatch.effects {
          self.execute_effect(effect);
        }

        dispatch.should_exit
      }
      Err(error) => {
        warn!("command {command:?} failed: {error:#}");
        self.state.clear_pending_effects();
        self.state.set_transient_message(format!("error: {error}"));
        false
      }
    }
  }

  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let indicator = self.state.indicator();

    let countdown = format_countdown(
      self
        .next_refresh
        .saturating_duration_since(Instant::now())
        .as_secs(),
    );

    let header = Paragraph::new(Line::from(vec![
      Span::styled(indicator.glyph(), indicator.style()),
      Span::raw(" "),
      Span::styled(
        HEADER_TITLE,
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        format!(
          "  min score {} • next refresh in {countdown}",
          self.state.settings().threshold
        ),
        Style::default().fg(Color::DarkGray),
      ),
    ]));

    frame.render_widget(header, layout[0]);

    let menu = self.state.menu();

    let title_width = usize::from(layout[1].width).saturating_sub(2);

    let list_items: Vec<ListItem> = if !menu.is_loaded() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(FETCHING_STATUS),
      ]))]
    } else if menu.list().is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(EMPTY_STATUS),
      ]))]
    } else {
      menu
        .list()
        .entries()
        .iter()
        .map(|entry| {
          ListItem::new(vec![
            Line::from(vec![
              Span::raw(BASE_INDENT),
              Span::styled(
                truncate(&entry.label(), title_width),
                Style::default().fg(Color::White),
              ),
            ]),
            Line::from(Span::raw(BASE_INDENT)),
          ])
        })
        .collect()
    };

    let mut list_state =
      ListState::default().with_selected(menu.selected_index());

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    let status = Paragraph::new(self.state.status().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    if let Some(preferences) = self.state.preferences() {
      preferences.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::OpenUrl { url } => {
        let message = match reqwest::Url::parse(&url) {
          Ok(parsed) => match webbrowser::open(parsed.as_str()) {
            Ok(()) => format!("Opened in browser: {}", truncate(&url, 80)),
            Err(error) => format!("Could not open link: {error}"),
          },
          Err(error) => format!("Not a valid link: {error}"),
        };

        self.state.set_transient_message(message);
      }
      Effect::PlaySound {
        custom_sound,
        sound,
      } => {
        if let Err(error) = SoundPlayer::new(custom_sound).play(sound) {
          warn!(
            %error,
            sound = sound.label(),
            "could not play notification sound"
          );
        }
      }
      Effect::RunCycle { cycle_id, options } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::CycleFinished {
            cycle_id,
            result: run_cycle(&client, &options).await,
          });
        });
      }
      Effect::ScheduleIndicator {
        delay,
        generation,
        indicator,
      } => {
        let sender = self.event_tx.clone();

        self.handle.spawn(async move {
          tokio::time::sleep(delay).await;

          let _ = sender.send(Event::IndicatorStage {
            generation,
            indicator,
          });
        });
      }
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let refresh_interval = state.settings().refresh_interval();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      next_refresh: Instant::now(),
      refresh_interval,
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      let now = Instant::now();

      if now >= self.next_refresh {
        self.next_refresh = now + self.refresh_interval;

        if self.dispatch(Command::Refresh(Trigger::Scheduled)) {
          break;
        }
      }

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if let Some(command) = self.state.preferences_command(key)
      {
        command
      } else if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        MenuView::handle_key(key)
      };

      if self.dispatch(command) {
        break;
      }
    }

    Ok(())
  }
}
