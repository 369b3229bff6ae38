use super::*;

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
  #[error("score threshold must be a whole number, got `{input}`")]
  InvalidThreshold {
    input: String,
    source: ParseIntError,
  },
  #[error("could not access settings file `{}`", path.display())]
  Io { path: PathBuf, source: io::Error },
  #[error("could not parse settings file `{}`", path.display())]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub(crate) struct Settings {
  pub(crate) api_base_url: String,
  pub(crate) custom_sound: Option<PathBuf>,
  pub(crate) max_in_flight: usize,
  pub(crate) order: StoryOrder,
  pub(crate) refresh_interval_secs: u64,
  pub(crate) request_timeout_secs: u64,
  pub(crate) sound: Sound,
  pub(crate) threshold: u64,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      api_base_url: Client::API_BASE_URL.into(),
      custom_sound: None,
      max_in_flight: Client::FAN_OUT,
      order: StoryOrder::default(),
      refresh_interval_secs: 3600,
      request_timeout_secs: 10,
      sound: Sound::default(),
      threshold: Self::DEFAULT_THRESHOLD,
    }
  }
}

impl Settings {
  pub(crate) const DEFAULT_THRESHOLD: u64 = 250;

  pub(crate) fn load_from(path: &Path) -> Result<Self, SettingsError> {
    let data = match fs::read(path) {
      Ok(data) => data,
      Err(error) if error.kind() == io::ErrorKind::NotFound => {
        return Ok(Self::default());
      }
      Err(source) => {
        return Err(SettingsError::Io {
          path: path.into(),
          source,
        });
      }
    };

    if data.iter().all(u8::is_ascii_whitespace) {
      return Ok(Self::default());
    }

    serde_json::from_slice(&data).map_err(|source| SettingsError::Parse {
      path: path.into(),
      source,
    })
  }

  pub(crate) fn load_or_default(path: &Path) -> Self {
    match Self::load_from(path) {
      Ok(settings) => {
        info!(path = %path.display(), "loaded settings");
        settings
      }
      Err(error) => {
        warn!(%error, "using default settings");
        Self::default()
      }
    }
  }

  pub(crate) fn parse_threshold(input: &str) -> Result<u64, SettingsError> {
    input
      .trim()
      .parse()
      .map_err(|source| SettingsError::InvalidThreshold {
        input: input.into(),
        source,
      })
  }

  pub(crate) fn path() -> Result<PathBuf> {
    if let Ok(path) = env::var("HN_TRENDING_SETTINGS") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("hn-trending").join("settings.json"))
  }

  pub(crate) fn refresh_interval(&self) -> Duration {
    Duration::from_secs(self.refresh_interval_secs.max(1))
  }

  pub(crate) fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_secs.max(1))
  }

  pub(crate) fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
    let io_error = |source: io::Error| SettingsError::Io {
      path: path.into(),
      source,
    };

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(io_error)?;
    }

    let serialized =
      serde_json::to_vec_pretty(self).map_err(|source| SettingsError::Parse {
        path: path.into(),
        source,
      })?;

    fs::write(path, serialized).map_err(io_error)?;

    info!(path = %path.display(), "saved settings");

    Ok(())
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use {
    super::*,
    std::sync::atomic::{AtomicUsize, Ordering},
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  pub(crate) fn temp_settings_file() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    env::temp_dir()
      .join(format!("hn_trending_settings_{}", process::id()))
      .join(format!("settings_{unique}.json"))
  }

  #[test]
  fn missing_file_yields_defaults() {
    let settings = Settings::load_from(&temp_settings_file()).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.threshold, 250);
    assert_eq!(settings.sound, Sound::Ping);
    assert_eq!(settings.refresh_interval(), Duration::from_secs(3600));
  }

  #[test]
  fn partial_file_fills_in_defaults() {
    let path = temp_settings_file();

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"threshold": 100, "sound": "No Sound"}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.threshold, 100);
    assert_eq!(settings.sound, Sound::Mute);
    assert_eq!(settings.max_in_flight, Client::FAN_OUT);
    assert_eq!(settings.order, StoryOrder::Rank);

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn saved_settings_load_back() {
    let path = temp_settings_file();

    let settings = Settings {
      custom_sound: Some(PathBuf::from("/tmp/alert.mp3")),
      order: StoryOrder::Completion,
      sound: Sound::Custom,
      threshold: 500,
      ..Settings::default()
    };

    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), settings);

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn malformed_file_is_a_parse_error() {
    let path = temp_settings_file();

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
      Settings::load_from(&path),
      Err(SettingsError::Parse { .. })
    ));

    assert_eq!(Settings::load_or_default(&path), Settings::default());

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn parse_threshold_accepts_whole_numbers_only() {
    assert_eq!(Settings::parse_threshold("300").unwrap(), 300);
    assert_eq!(Settings::parse_threshold(" 42 ").unwrap(), 42);

    for input in ["", "abc", "12.5", "-1"] {
      assert!(
        matches!(
          Settings::parse_threshold(input),
          Err(SettingsError::InvalidThreshold { .. })
        ),
        "{input:?} should be rejected"
      );
    }
  }

  #[test]
  fn cycle_options_snapshot_settings() {
    let settings = Settings {
      max_in_flight: 0,
      threshold: 10,
      ..Settings::default()
    };

    let options = CycleOptions::from(&settings);

    assert_eq!(options.threshold, 10);
    assert_eq!(options.max_in_flight, 1);
    assert_eq!(options.order, StoryOrder::Rank);
  }
}
