use super::*;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub(crate) enum Sound {
  #[serde(rename = "Custom File")]
  Custom,
  Morse,
  #[serde(rename = "No Sound")]
  Mute,
  #[default]
  Ping,
  Sosumi,
  Submarine,
}

impl Sound {
  pub(crate) fn all() -> &'static [Sound] {
    &[
      Sound::Mute,
      Sound::Ping,
      Sound::Submarine,
      Sound::Sosumi,
      Sound::Morse,
      Sound::Custom,
    ]
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Sound::Custom => "Custom File",
      Sound::Morse => "Morse",
      Sound::Mute => "No Sound",
      Sound::Ping => "Ping",
      Sound::Sosumi => "Sosumi",
      Sound::Submarine => "Submarine",
    }
  }

  pub(crate) fn next(self) -> Sound {
    Self::step(self, 1)
  }

  pub(crate) fn previous(self) -> Sound {
    Self::step(self, Self::all().len() - 1)
  }

  fn step(self, by: usize) -> Sound {
    let all = Self::all();

    let index = all.iter().position(|sound| *sound == self).unwrap_or(0);

    all[(index + by) % all.len()]
  }

  pub(crate) fn system_name(self) -> Option<&'static str> {
    match self {
      Sound::Custom | Sound::Mute => None,
      Sound::Morse | Sound::Ping | Sound::Sosumi | Sound::Submarine => {
        Some(self.label())
      }
    }
  }
}
