//! Line-oriented terminal front end: each stdin line is one user action.

use crate::{
    app::Storefront,
    error::Result,
    fl,
    message::{GalleryMessage, HeroMessage, Message, OrdersMessage},
    render,
};
use lightbox::{Key, LightboxEvent};
use std::{path::PathBuf, str::FromStr};
use storefront_media::{UploadClient, UploadOutcome};
use storefront_types::{Language, OrderStatus, Page, ParseError};
use thiserror::Error;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{
        broadcast::error::RecvError,
        mpsc::{self, UnboundedReceiver, UnboundedSender},
    },
    task::JoinHandle,
    time::{Interval, MissedTickBehavior},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(Page),
    /// 1-based image number
    Open(usize),
    Previous,
    Next,
    /// 1-based thumbnail number inside the lightbox
    Select(usize),
    Key(Key),
    Loaded,
    Failed,
    Close,
    Hero(HeroMessage),
    Cta,
    Language(Language),
    Orders {
        status: Option<OrderStatus>,
        query: String,
    },
    Upload(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("not an image number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn number(arg: Option<&str>, command: &'static str) -> std::result::Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let arg = (!rest.is_empty()).then_some(rest);

        let command = match word.to_ascii_lowercase().as_str() {
            "page" | "go" => Command::Page(arg.ok_or(CommandError::MissingArgument("page"))?.parse()?),
            "open" => Command::Open(number(arg, "open")?),
            "prev" | "previous" => Command::Previous,
            "next" => Command::Next,
            "select" => Command::Select(number(arg, "select")?),
            "key" => Command::Key(
                arg.ok_or(CommandError::MissingArgument("key"))?
                    .parse()
                    .unwrap_or_else(|never| match never {}),
            ),
            "loaded" => Command::Loaded,
            "failed" => Command::Failed,
            "close" => Command::Close,
            "hero" => match arg {
                Some("next") => Command::Hero(HeroMessage::Next),
                Some("prev") | Some("previous") => Command::Hero(HeroMessage::Previous),
                Some(other) => Command::Hero(HeroMessage::GoTo(number(Some(other), "hero")? - 1)),
                None => return Err(CommandError::MissingArgument("hero")),
            },
            "cta" => Command::Cta,
            "lang" | "language" => {
                Command::Language(arg.ok_or(CommandError::MissingArgument("lang"))?.parse()?)
            }
            "orders" => {
                let (status, query) = match arg {
                    Some(arg) => arg.split_once(char::is_whitespace).unwrap_or((arg, "")),
                    None => ("all", ""),
                };
                let status = if status.eq_ignore_ascii_case("all") {
                    None
                } else {
                    Some(status.parse()?)
                };
                Command::Orders {
                    status,
                    query: query.trim().to_string(),
                }
            }
            "upload" => Command::Upload(PathBuf::from(
                arg.ok_or(CommandError::MissingArgument("upload"))?,
            )),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(command)
    }
}

/// What a command turns into once it reaches the app.
enum Action {
    Update(Vec<Message>),
    Navigate(Page),
    Language(Language),
    Key(Key),
    Upload(PathBuf),
    Help,
    Quit,
}

fn action(command: Command) -> Action {
    use Action::Update;

    match command {
        Command::Page(page) => Action::Navigate(page),
        Command::Open(n) => Update(vec![Message::Gallery(GalleryMessage::Open(n - 1))]),
        Command::Previous => Update(vec![Message::Gallery(GalleryMessage::Previous)]),
        Command::Next => Update(vec![Message::Gallery(GalleryMessage::Next)]),
        Command::Select(n) => Update(vec![Message::Gallery(GalleryMessage::Select(n - 1))]),
        Command::Key(key) => Action::Key(key),
        Command::Loaded => Update(vec![Message::Gallery(GalleryMessage::ImageLoaded)]),
        Command::Failed => Update(vec![Message::Gallery(GalleryMessage::ImageFailed)]),
        Command::Close => Update(vec![Message::Gallery(GalleryMessage::Close)]),
        Command::Hero(hero) => Update(vec![Message::Hero(hero)]),
        Command::Cta => Update(vec![Message::Hero(HeroMessage::ActivateCta)]),
        Command::Language(language) => Action::Language(language),
        Command::Orders { status, query } => Update(vec![
            Message::Orders(OrdersMessage::FilterStatus(status)),
            Message::Orders(OrdersMessage::Search(query)),
        ]),
        Command::Upload(path) => Action::Upload(path),
        Command::Help => Action::Help,
        Command::Quit => Action::Quit,
    }
}

/// Run an upload off the event loop; the outcome arrives on `done`.
pub fn spawn_upload(
    uploads: &UploadClient,
    path: PathBuf,
    done: UnboundedSender<UploadOutcome>,
) -> JoinHandle<()> {
    let uploads = uploads.clone();
    tokio::spawn(async move {
        let outcome = uploads.upload_path(&path).await;
        let _ = done.send(outcome);
    })
}

async fn tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn print(app: &mut Storefront) {
    println!("{}", render::render(app));
}

/// Drive the app from stdin until `quit` or end of input.
pub async fn run(
    mut app: Storefront,
    mut lightbox_events: UnboundedReceiver<LightboxEvent>,
    uploads: UploadClient,
) -> Result<()> {
    let mut navigation = app.navigator().subscribe();
    let (upload_done, mut upload_outcomes) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut hero = app.config().hero_interval().map(|period| {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    });

    println!("{}", fl!("shell-help"));
    print(&mut app);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", fl!("shell-unknown", error = e.to_string()));
                        continue;
                    }
                };
                tracing::debug!("command: {command:?}");

                match action(command) {
                    Action::Update(messages) => {
                        for message in messages {
                            app.update(message);
                        }
                    }
                    Action::Language(language) => {
                        app.update(Message::SetLanguage(language));
                        if let Err(e) = storefront_config::save(app.config()) {
                            tracing::warn!("failed to save settings: {e}");
                        }
                    }
                    // Navigation goes through the bus like any other link.
                    Action::Navigate(page) => {
                        app.navigator().navigate(page);
                        continue;
                    }
                    Action::Key(key) => {
                        app.page_root().dispatch_key(&key);
                        continue;
                    }
                    Action::Upload(path) => {
                        spawn_upload(&uploads, path, upload_done.clone());
                        continue;
                    }
                    Action::Help => {
                        println!("{}", fl!("shell-help"));
                        continue;
                    }
                    Action::Quit => break,
                }
                print(&mut app);
            }
            Some(outcome) = upload_outcomes.recv() => {
                app.update(Message::UploadFinished(outcome));
                print(&mut app);
            }
            Some(event) = lightbox_events.recv() => {
                app.update(Message::Lightbox(event));
                print(&mut app);
            }
            page = navigation.recv() => match page {
                Ok(page) => {
                    app.update(Message::Navigate(page));
                    print(&mut app);
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("navigation fell behind by {skipped} pages");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tick(&mut hero) => {
                if app.page() == Page::Home {
                    app.update(Message::Hero(HeroMessage::Tick));
                    print(&mut app);
                }
            }
        }
    }

    tracing::info!("storefront shell finished");
    Ok(())
}
