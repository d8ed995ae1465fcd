//! Terminal front end and entry point.
//!
//! A thin line-oriented shell around the Spares Hub library. Each input line is
//! mapped to a library [`Event`], dispatched through a [`Session`], and the
//! resulting frame is printed.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse flags, merge them over the config file, initialize tracing
//! 2. **Open**: Open the listing store in the data directory
//! 3. **Loop**: Read a command, dispatch it, print the frame if it changed
//!
//! # Commands
//!
//! Browse:
//! - `<n>`: Pick tile `n` on the current step
//! - `search <text>` / `clear`: Set or clear the query
//! - `continue`: Apply the make named by the query
//! - `results`: Jump to results
//! - `skip`: Skip the model step
//! - `back`, `reset`, `crumb <field>`
//! - `sort newest|low|high`
//! - `open <n>`: Open the `n`th listed part
//!
//! Sell:
//! - `set <field> <value>`: Edit the draft (`era`, `make`, `model`, `category`,
//!   `title`, `description`, `condition`, `price`, `location`, `postage`)
//! - `photo <paths…>` / `rmphoto <n>`
//! - `clear`: Empty title and description
//! - `post`
//!
//! Anywhere: `browse`, `sell`, `message`, `offer`, `demo-reset`, `quit`.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use spareshub::app::{FunnelAction, FunnelField, Route, SortMode};
use spareshub::domain::{Category, Condition, Era};
use spareshub::observability::init_tracing;
use spareshub::sell::{DataUrlEncoder, DraftEdit};
use spareshub::storage::JsonListingStore;
use spareshub::ui::{render_viewmodel, PageView};
use spareshub::{Config, Event, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spareshub")]
#[command(about = "Classic-vehicle spare parts classifieds")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the listings file and the log
    #[arg(long)]
    data_dir: Option<String>,

    /// Built-in theme name (midnight, paper)
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long)]
    theme_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,

    /// Frame width in columns
    #[arg(long, default_value_t = 100)]
    cols: usize,
}

impl Cli {
    fn config(&self) -> spareshub::Result<Config> {
        let file = self
            .config
            .as_ref()
            .map(Config::from_file)
            .transpose()?
            .unwrap_or_default();

        Ok(file.merged_with(Config {
            data_dir: self.data_dir.clone(),
            theme_name: self.theme.clone(),
            theme_file: self.theme_file.clone(),
            trace_level: self.trace_level.clone(),
        }))
    }
}

/// A parsed input line.
#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Event),
    Photos(Vec<PathBuf>),
    Quit,
}

struct Shell {
    session: Session<JsonListingStore>,
    cols: usize,
}

impl Shell {
    fn print_frame(&self) {
        let frame = render_viewmodel(&self.session.viewmodel(), &self.session.state().theme, self.cols);
        print!("{frame}");
        let _ = io::stdout().flush();
    }

    fn run(&mut self) -> spareshub::Result<()> {
        self.print_frame();

        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let _span = tracing::debug_span!("command", input = %line).entered();

            let render = match self.map_command(line) {
                Ok(Command::Quit) => break,
                Ok(Command::Dispatch(event)) => self.session.dispatch(&event),
                Ok(Command::Photos(paths)) => self.attach_photos(&paths),
                Err(message) => {
                    eprintln!("{message}");
                    false
                }
            };

            if render {
                self.print_frame();
            }
        }

        Ok(())
    }

    fn attach_photos(&mut self, paths: &[PathBuf]) -> bool {
        match futures::executor::block_on(self.session.attach_photos(&DataUrlEncoder, paths)) {
            Ok(attached) => {
                tracing::debug!(attached, "photos attached");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "photo encoding failed");
                eprintln!("Could not add photos: {e}");
                false
            }
        }
    }

    fn map_command(&self, line: &str) -> Result<Command, String> {
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let route = &self.session.state().route;

        if let Ok(n) = verb.parse::<usize>() {
            return match n.checked_sub(1) {
                Some(index) if *route == Route::Browse => Ok(Command::Dispatch(Event::PickTile(index))),
                _ => Err(format!("no tile {n} here")),
            };
        }

        let event = match verb.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Command::Quit),

            "search" | "/" => Event::Funnel(FunnelAction::SetQuery(rest.to_string())),
            "clear" if *route == Route::Sell => Event::EditDraft(DraftEdit::ClearText),
            "clear" => Event::Funnel(FunnelAction::ClearQuery),
            "continue" => Event::Funnel(FunnelAction::ContinueWithQuery),
            "results" => Event::Funnel(FunnelAction::OpenResults),
            "skip" => Event::Funnel(FunnelAction::Skip(FunnelField::Model)),
            "back" => Event::Funnel(FunnelAction::Back),
            "reset" => Event::Funnel(FunnelAction::Reset),
            "crumb" => Event::Funnel(FunnelAction::ClearField(rest.parse::<FunnelField>()?)),
            "sort" => Event::Funnel(FunnelAction::SetSort(rest.parse::<SortMode>()?)),
            "open" => Event::OpenListing(self.visible_listing_id(rest)?),

            "browse" => Event::ShowBrowse,
            "sell" => Event::ShowSell,
            "set" => Event::EditDraft(Self::map_draft_edit(rest)?),
            "rmphoto" => Event::EditDraft(DraftEdit::RemovePhoto(Self::parse_index(rest)?)),
            "photo" | "photos" => {
                let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
                if paths.is_empty() {
                    return Err("usage: photo <path> [path…]".to_string());
                }
                return Ok(Command::Photos(paths));
            }
            "post" => Event::PostListing,

            "message" => Event::MessageSeller,
            "offer" => Event::MakeOffer,
            "demo-reset" => Event::ResetDemoData,

            other => return Err(format!("unknown command: {other}")),
        };

        Ok(Command::Dispatch(event))
    }

    /// Id of the `n`th card shown on the browse page, counting from 1.
    fn visible_listing_id(&self, arg: &str) -> Result<String, String> {
        let index = Self::parse_index(arg)?;
        let PageView::Browse(browse) = self.session.viewmodel().page else {
            return Err("open works on the browse page".to_string());
        };

        let cards = match (browse.results, browse.instant_matches) {
            (Some(results), _) => results.items,
            (None, Some(matches)) => matches.items,
            (None, None) => Vec::new(),
        };

        cards
            .into_iter()
            .nth(index)
            .map(|card| card.id)
            .ok_or_else(|| format!("no listing {arg} shown"))
    }

    fn parse_index(arg: &str) -> Result<usize, String> {
        arg.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| format!("expected a number from 1, got {arg:?}"))
    }

    fn map_draft_edit(args: &str) -> Result<DraftEdit, String> {
        let (field, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
        let value = value.trim();

        Ok(match field.to_ascii_lowercase().as_str() {
            "era" => DraftEdit::Era(Era::from_id(value).ok_or_else(|| {
                format!("unknown era {value:?} (pre1950, 50_70, 70_80, 80_2000)")
            })?),
            "make" => DraftEdit::Make(value.to_string()),
            "model" => DraftEdit::Model(value.to_string()),
            "category" | "cat" => DraftEdit::Category(
                Category::from_id(value).ok_or_else(|| format!("unknown category {value:?}"))?,
            ),
            "title" => DraftEdit::Title(value.to_string()),
            "description" | "desc" => DraftEdit::Description(value.to_string()),
            "condition" => DraftEdit::Condition(
                Condition::parse(value).ok_or_else(|| format!("unknown condition {value:?}"))?,
            ),
            "price" => DraftEdit::Price(value.parse::<u32>().map_err(|e| format!("bad price {value:?}: {e}"))?),
            "location" => DraftEdit::Location(value.to_string()),
            "postage" => DraftEdit::Postage(match value.to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" | "on" => true,
                "no" | "n" | "false" | "off" => false,
                _ => return Err(format!("postage takes yes or no, got {value:?}")),
            }),
            other => return Err(format!("unknown draft field: {other}")),
        })
    }
}

fn main() -> spareshub::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "spareshub starting");

    let session = spareshub::initialize(&config)?;
    let mut shell = Shell {
        session,
        cols: cli.cols,
    };

    shell.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> (tempfile::TempDir, Shell) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonListingStore::new(dir.path().join("listings.json")).unwrap();
        let shell = Shell {
            session: Session::new(store, spareshub::Theme::default()),
            cols: 80,
        };
        (dir, shell)
    }

    #[test]
    fn numbers_pick_tiles_from_one() {
        let (_dir, shell) = shell();
        assert_eq!(shell.map_command("2"), Ok(Command::Dispatch(Event::PickTile(1))));
        assert!(shell.map_command("0").is_err());
    }

    #[test]
    fn clear_depends_on_route() {
        let (_dir, mut shell) = shell();
        assert_eq!(
            shell.map_command("clear"),
            Ok(Command::Dispatch(Event::Funnel(FunnelAction::ClearQuery)))
        );

        shell.session.dispatch(&Event::ShowSell);
        assert_eq!(
            shell.map_command("clear"),
            Ok(Command::Dispatch(Event::EditDraft(DraftEdit::ClearText)))
        );
    }

    #[test]
    fn draft_fields_parse() {
        assert_eq!(Shell::map_draft_edit("price 640"), Ok(DraftEdit::Price(640)));
        assert_eq!(Shell::map_draft_edit("era 70_80"), Ok(DraftEdit::Era(Era::Seventies)));
        assert_eq!(
            Shell::map_draft_edit("title Smiths speedo head"),
            Ok(DraftEdit::Title("Smiths speedo head".to_string()))
        );
        assert_eq!(Shell::map_draft_edit("postage no"), Ok(DraftEdit::Postage(false)));
        assert!(Shell::map_draft_edit("price -3").is_err());
        assert!(Shell::map_draft_edit("colour red").is_err());
    }

    #[test]
    fn open_uses_visible_cards() {
        let (_dir, mut shell) = shell();
        for line in ["2", "search speedo"] {
            let Ok(Command::Dispatch(event)) = shell.map_command(line) else {
                panic!("expected event for {line}");
            };
            shell.session.dispatch(&event);
        }

        assert_eq!(
            shell.map_command("open 1"),
            Ok(Command::Dispatch(Event::OpenListing("seed2".to_string())))
        );
        assert!(shell.map_command("open 9").is_err());
    }
}
