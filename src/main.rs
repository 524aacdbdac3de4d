use {
  anyhow::{Context, anyhow},
  api::{get_post_comments, get_user, get_user_posts, get_users},
  app::App,
  builders::{build_comments_fragment, build_element, build_options_from_users},
  change_ticket::ChangeTicket,
  click_event::ClickEvent,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_toggle::CommentToggle,
  company::Company,
  config::Config,
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
  document::Document,
  effect::Effect,
  element::Element,
  event::Event,
  fetch_error::FetchError,
  focus::Focus,
  futures::stream::{self, StreamExt},
  help_view::HelpView,
  listener_registry::ListenerRegistry,
  node::{Node, NodeKind},
  node_id::NodeId,
  outcome::Outcome,
  outline::Outline,
  page::Page,
  post::Post,
  post_bundle::PostBundle,
  posts_reply::PostsReply,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
  },
  refresh_summary::RefreshSummary,
  renderer::{load_posts, render_posts},
  reqwest::StatusCode,
  select_lock::SelectLock,
  selector::Selector,
  serde::{Deserialize, de::DeserializeOwned},
  serde_json::Value,
  slot::Slot,
  source::Source,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    env, fs,
    io::{self, IsTerminal, Stdout},
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  toggle::{SHOW_COMMENTS, toggle_comments},
  transient_message::TransientMessage,
  user::User,
  utils::{truncate, wrap_text},
};

#[cfg(test)]
use {
  fake_source::FakeSource,
  page::{EMPLOYEES_OPTION, PLACEHOLDER_TEXT},
  std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
  },
  toggle::HIDE_COMMENTS,
};

mod api;
mod app;
mod builders;
mod change_ticket;
mod click_event;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_toggle;
mod company;
mod config;
mod document;
mod effect;
mod element;
mod event;
#[cfg(test)]
mod fake_source;
mod fetch_error;
mod focus;
mod help_view;
mod listener_registry;
mod logging;
mod node;
mod node_id;
mod outcome;
mod outline;
mod page;
mod post;
mod post_bundle;
mod posts_reply;
mod refresh_summary;
mod renderer;
mod select_lock;
mod selector;
mod slot;
mod source;
mod state;
mod toggle;
mod transient_message;
mod user;
mod utils;

const MENU_STATUS: &str =
  "←/h previous • →/l next • enter load posts • tab posts • q/esc quit • ? help";

const POSTS_STATUS: &str = "↑/k up • ↓/j down • enter toggle comments • tab employees • q/esc quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_POSTS_STATUS: &str = "Loading posts...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Employees:
  ← / h   previous employee
  → / l   next employee
  enter   load posts for the selected employee
  tab     move to the posts

Posts:
  ↑ / k   previous comment button
  ↓ / j   next comment button
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first post
  end     jump to last post
  enter   show or hide comments
  space   show or hide comments
  tab     move to the employee menu

General:
  q       quit
  esc     close help or quit
  ?       toggle this help
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
  let config = Config::load()?;

  let _guard = logging::init(&config).context("could not set up logging")?;

  tracing::info!(api_url = %config.api_url, "starting");

  let client = Client::new(&config.api_url);

  let mut page = Page::new();

  let (_, select) = page.init_page(&client).await;

  tracing::info!(
    employees = page.users().len(),
    menu = select.is_found(),
    "page initialized"
  );

  let mut terminal =
    initialize_terminal().context("could not initialize terminal")?;

  let result = App::new(client, page).run(&mut terminal);

  restore_terminal(&mut terminal)?;

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
