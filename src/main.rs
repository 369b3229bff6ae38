use {
  aggregator::aggregate,
  anyhow::Context,
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  cycle_options::CycleOptions,
  effect::Effect,
  event::Event,
  feed::Feed,
  feed_error::FeedError,
  futures::stream::{self, StreamExt},
  help_view::HelpView,
  indicator::Indicator,
  menu_view::MenuView,
  monitor::run_cycle,
  notification::Notification,
  preferences_view::PreferencesView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  settings::Settings,
  sound::Sound,
  sound_player::SoundPlayer,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    fmt::Display,
    fs,
    io::{self, IsTerminal, Stdout, Write},
    num::ParseIntError,
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  story::{Story, StoryId},
  story_order::StoryOrder,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, trace, warn},
  transient_message::TransientMessage,
  trending_list::{TrendingEntry, TrendingList},
  trigger::Trigger,
  utils::{format_countdown, truncate},
};

mod aggregator;
mod app;
mod client;
mod command;
mod command_dispatch;
mod cycle_options;
mod effect;
mod event;
mod feed;
mod feed_error;
mod help_view;
mod indicator;
mod logging;
mod menu_view;
mod monitor;
mod notification;
mod preferences_view;
mod settings;
mod sound;
mod sound_player;
mod state;
mod story;
mod story_order;
mod transient_message;
mod trending_list;
mod trigger;
mod utils;

const MENU_STATUS: &str =
  "↑/k up • ↓/j down • enter open • r refresh • p preferences • q quit • ? help";

const HEADER_TITLE: &str = "Hacker News trending";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const PREFERENCES_TITLE: &str = "Preferences";
const PREFERENCES_STATUS: &str =
  "tab switch field • ←/→ sound • enter save • esc cancel";

const FETCHING_STATUS: &str = "Fetching...";
const EMPTY_STATUS: &str = "No trending posts";
const REFRESHING_STATUS: &str = "Refreshing...";
const REFRESH_BUSY_STATUS: &str = "A refresh is already in progress";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Menu:
  ↑ / k     move selection up
  ↓ / j     move selection down
  home / g  jump to first story
  end / G   jump to last story
  enter / o open the selected story's discussion page
  r         refresh now
  p / ,     open preferences
  q / esc   quit
  ?         toggle this help

Preferences:
  tab       switch between threshold and sound
  0-9       edit the minimum score threshold
  ← / →     choose the notification sound
  enter     save
  esc       cancel

Stories are checked at startup and then on the configured
interval (hourly by default). When the top story changes,
the notification sound plays and the header icon flashes.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let log_path = logging::init().context("could not initialize logging")?;

  let settings_path =
    Settings::path().context("could not determine settings path")?;

  let settings = Settings::load_or_default(&settings_path);

  let client =
    Client::new(&settings.api_base_url, settings.request_timeout())?;

  info!(
    log = %log_path.display(),
    settings = %settings_path.display(),
    threshold = settings.threshold,
    "starting"
  );

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, State::new(settings, settings_path));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  info!("exiting");

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
