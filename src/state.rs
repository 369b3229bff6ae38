use super::*;

pub(crate) struct State {
  alert_generation: u64,
  cycle_in_flight: Option<u64>,
  help: HelpView,
  indicator: Indicator,
  menu: MenuView,
  message: String,
  next_cycle_id: u64,
  pending_effects: Vec<Effect>,
  preferences: Option<PreferencesView>,
  settings: Settings,
  settings_path: PathBuf,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn alert(&mut self) {
    self.alert_generation = self.alert_generation.wrapping_add(1);

    let generation = self.alert_generation;

    self.indicator = Indicator::Alert;

    self.pending_effects.push(Effect::PlaySound {
      custom_sound: self.settings.custom_sound.clone(),
      sound: self.settings.sound,
    });

    for (delay, indicator) in Indicator::ANIMATION {
      self.pending_effects.push(Effect::ScheduleIndicator {
        delay,
        generation,
        indicator,
      });
    }
  }

  fn cancel_preferences(&mut self) {
    if self.preferences.take().is_some() {
      self.message = MENU_STATUS.into();
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::Refresh(trigger) => self.refresh(trigger),
      Command::OpenPreferences => self.open_preferences(),
      Command::CancelPreferences => self.cancel_preferences(),
      Command::SavePreferences => self.save_preferences()?,
      Command::SelectNext => self.menu.select_next(),
      Command::SelectPrevious => self.menu.select_previous(),
      Command::SelectFirst => self.menu.select_first(),
      Command::SelectLast => self.menu.select_last(),
      Command::OpenSelected => self.open_selected(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::CycleFinished { cycle_id, result } => {
        if self.cycle_in_flight != Some(cycle_id) {
          debug!(cycle_id, "ignoring result of stale cycle");
          return Vec::new();
        }

        self.cycle_in_flight = None;

        match result {
          Ok(candidate) => {
            let Notification {
              current,
              should_alert,
            } = Notification::new(self.menu.list(), candidate);

            info!(
              cycle_id,
              stories = current.len(),
              should_alert,
              top = current.first().map(|entry| entry.title.as_str()),
              "cycle finished"
            );

            self.menu.replace(current);

            if should_alert {
              self.alert();
            }
          }
          Err(error) => {
            warn!(
              cycle_id,
              %error,
              malformed = error.is_decode(),
              timed_out = error.is_timeout(),
              "cycle failed, keeping current stories"
            );
          }
        }
      }
      Event::IndicatorStage {
        generation,
        indicator,
      } => {
        if generation == self.alert_generation {
          self.indicator = indicator;
        } else {
          trace!(generation, "dropping superseded indicator stage");
        }
      }
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn indicator(&self) -> Indicator {
    self.indicator
  }

  pub(crate) fn menu(&self) -> &MenuView {
    &self.menu
  }

  pub(crate) fn new(settings: Settings, settings_path: PathBuf) -> Self {
    Self {
      alert_generation: 0,
      cycle_in_flight: None,
      help: HelpView::new(),
      indicator: Indicator::Idle,
      menu: MenuView::default(),
      message: MENU_STATUS.into(),
      next_cycle_id: 0,
      pending_effects: Vec::new(),
      preferences: None,
      settings,
      settings_path,
      transient_message: None,
    }
  }

  fn open_preferences(&mut self) {
    if self.preferences.is_none() {
      self.preferences = Some(PreferencesView::new(&self.settings));
    }
  }

  fn open_selected(&mut self) {
    if let Some(entry) = self.menu.selected_entry() {
      debug!(id = entry.id, "opening story");

      self.pending_effects.push(Effect::OpenUrl {
        url: entry.link.clone(),
      });
    }
  }

  pub(crate) fn preferences(&self) -> Option<&PreferencesView> {
    self.preferences.as_ref()
  }

  pub(crate) fn preferences_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    self.preferences.as_mut().map(|form| form.handle_key(key))
  }

  fn refresh(&mut self, trigger: Trigger) {
    if let Some(cycle_id) = self.cycle_in_flight {
      debug!(cycle_id, ?trigger, "cycle already running, dropping trigger");

      if trigger == Trigger::Manual {
        self.set_transient_message(REFRESH_BUSY_STATUS.into());
      }

      return;
    }

    let cycle_id = self.next_cycle_id;

    self.next_cycle_id = self.next_cycle_id.wrapping_add(1);
    self.cycle_in_flight = Some(cycle_id);

    let options = CycleOptions::from(&self.settings);

    info!(cycle_id, ?trigger, threshold = options.threshold, "starting cycle");

    self
      .pending_effects
      .push(Effect::RunCycle { cycle_id, options });
  }

  fn save_preferences(&mut self) -> Result {
    let Some(form) = self.preferences.take() else {
      return Ok(());
    };

    match Settings::parse_threshold(form.threshold_input()) {
      Ok(threshold) => self.settings.threshold = threshold,
      Err(error) => {
        warn!(
          %error,
          threshold = self.settings.threshold,
          "keeping previous score threshold"
        );
      }
    }

    self.settings.sound = form.sound();

    self.message = MENU_STATUS.into();

    self
      .settings
      .save_to(&self.settings_path)
      .context("could not save preferences")?;

    Ok(())
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original, Instant::now()));

    self.message = message;
  }

  pub(crate) fn settings(&self) -> &Settings {
    &self.settings
  }

  pub(crate) fn status(&self) -> &str {
    if self.cycle_in_flight.is_some() && self.message == MENU_STATUS {
      REFRESHING_STATUS
    } else {
      &self.message
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    self.update_transient_message_at(Instant::now());
  }

  fn update_transient_message_at(&mut self, now: Instant) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired(now) {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
