use super::*;

#[derive(Debug, Error)]
pub(crate) enum SoundError {
  #[error("could not ring the terminal bell")]
  Bell { source: io::Error },
  #[error("no custom sound file is configured")]
  MissingCustomFile,
  #[error("could not start `{program}`")]
  Spawn { program: String, source: io::Error },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Playback {
  Bell,
  Command { args: Vec<String>, program: String },
  Silent,
}

pub(crate) struct SoundPlayer {
  custom_sound: Option<PathBuf>,
}

impl SoundPlayer {
  const MACOS_PLAYER: &str = "afplay";
  const MACOS_SOUNDS_DIR: &str = "/System/Library/Sounds";
  const MP3_PLAYER: &str = "mpg123";
  const PLAYER: &str = "paplay";

  fn custom_player(path: &Path) -> &'static str {
    if cfg!(target_os = "macos") {
      return Self::MACOS_PLAYER;
    }

    // paplay only decodes what libsndfile reads, which excludes MP3.
    let mp3 = path
      .extension()
      .and_then(|extension| extension.to_str())
      .is_some_and(|extension| extension.eq_ignore_ascii_case("mp3"));

    if mp3 { Self::MP3_PLAYER } else { Self::PLAYER }
  }

  pub(crate) fn new(custom_sound: Option<PathBuf>) -> Self {
    Self { custom_sound }
  }

  pub(crate) fn play(&self, sound: Sound) -> Result<(), SoundError> {
    match self.playback(sound)? {
      Playback::Bell => {
        let mut stdout = io::stdout();

        stdout
          .write_all(b"\x07")
          .and_then(|()| stdout.flush())
          .map_err(|source| SoundError::Bell { source })
      }
      Playback::Command { args, program } => {
        let mut child = process::Command::new(&program)
          .args(&args)
          .stdin(process::Stdio::null())
          .stdout(process::Stdio::null())
          .stderr(process::Stdio::null())
          .spawn()
          .map_err(|source| SoundError::Spawn {
            program: program.clone(),
            source,
          })?;

        std::thread::spawn(move || {
          if let Err(error) = child.wait() {
            warn!(%error, %program, "sound player did not exit cleanly");
          }
        });

        Ok(())
      }
      Playback::Silent => {
        debug!("notifications are muted");
        Ok(())
      }
    }
  }

  pub(crate) fn playback(&self, sound: Sound) -> Result<Playback, SoundError> {
    let macos = cfg!(target_os = "macos");

    Ok(match (sound, sound.system_name()) {
      (Sound::Mute, _) => Playback::Silent,
      (Sound::Custom, _) => {
        let path = self
          .custom_sound
          .as_ref()
          .ok_or(SoundError::MissingCustomFile)?;

        Playback::Command {
          args: vec![path.display().to_string()],
          program: Self::custom_player(path).into(),
        }
      }
      (_, Some(name)) if macos => Playback::Command {
        args: vec![format!("{}/{name}.aiff", Self::MACOS_SOUNDS_DIR)],
        program: Self::MACOS_PLAYER.into(),
      },
      _ => Playback::Bell,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mute_is_silent() {
    assert_eq!(
      SoundPlayer::new(None).playback(Sound::Mute).unwrap(),
      Playback::Silent
    );
  }

  #[test]
  fn custom_sound_requires_a_file() {
    assert!(matches!(
      SoundPlayer::new(None).playback(Sound::Custom),
      Err(SoundError::MissingCustomFile)
    ));
  }

  #[test]
  fn custom_sound_plays_configured_file() {
    let player = SoundPlayer::new(Some(PathBuf::from("/tmp/all-your-base.mp3")));

    let Playback::Command { args, .. } = player.playback(Sound::Custom).unwrap()
    else {
      panic!("expected a player command");
    };

    assert_eq!(args, vec!["/tmp/all-your-base.mp3".to_string()]);
  }

  #[test]
  fn custom_player_follows_file_format() {
    let playback = |path: &str| {
      let Playback::Command { program, .. } =
        SoundPlayer::new(Some(PathBuf::from(path)))
          .playback(Sound::Custom)
          .unwrap()
      else {
        panic!("expected a player command");
      };

      program
    };

    if cfg!(target_os = "macos") {
      assert_eq!(playback("/tmp/alert.mp3"), "afplay");
      assert_eq!(playback("/tmp/alert.wav"), "afplay");
    } else {
      assert_eq!(playback("/tmp/alert.mp3"), "mpg123");
      assert_eq!(playback("/tmp/ALERT.MP3"), "mpg123");
      assert_eq!(playback("/tmp/alert.wav"), "paplay");
      assert_eq!(playback("/tmp/alert"), "paplay");
    }
  }

  #[test]
  fn system_sound_uses_platform_player() {
    let playback = SoundPlayer::new(None).playback(Sound::Ping).unwrap();

    if cfg!(target_os = "macos") {
      assert_eq!(
        playback,
        Playback::Command {
          args: vec!["/System/Library/Sounds/Ping.aiff".into()],
          program: "afplay".into(),
        }
      );
    } else {
      assert_eq!(playback, Playback::Bell);
    }
  }
}
