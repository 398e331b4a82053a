mod cli;
mod settings;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use cli::{
	CliArgs, Command, OutputFormat, SearchOutcome, parse_cli, print_detail, print_movies,
	print_not_found, print_watched, search_titles,
};
use manimovies::catalog::{JsonFileStore, MovieSource, OmdbClient, WatchlistStore};
use manimovies::chrome::TerminalChrome;
use manimovies::{Controller, logging, ui};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Some(path) = logging::initialize() {
		log::info!("logging to {}", path.display());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.command.clone() {
		None => run_interactive(&resolved),
		Some(command) => run_command(&cli, command, &resolved),
	}
}

fn client(settings: &ResolvedConfig) -> Result<OmdbClient> {
	let config = settings.omdb_config()?;
	OmdbClient::new(config).context("failed to build the OMDb client")
}

/// Start the terminal UI.
fn run_interactive(settings: &ResolvedConfig) -> Result<()> {
	let source: Arc<dyn MovieSource> = Arc::new(client(settings)?);
	let store = JsonFileStore::new(&settings.watchlist);
	let chrome = Rc::new(RefCell::new(TerminalChrome));
	let controller = Controller::new(
		settings.controller_config(),
		source,
		Box::new(store),
		chrome,
	)?;
	ui::run(controller, settings.theme())
}

/// Execute a one-shot command and print its result in the chosen format.
fn run_command(cli: &CliArgs, command: Command, settings: &ResolvedConfig) -> Result<()> {
	let format: OutputFormat = cli.output;
	match command {
		Command::Search { query } => {
			let query = query.join(" ");
			let query = query.trim();
			match search_titles(query, settings.min_query_len, || client(settings))? {
				SearchOutcome::Movies(movies) => print_movies(format, query, &movies),
				SearchOutcome::NotFound(message) => print_not_found(format, &message),
			}
		}
		Command::Details { id } => {
			let detail = client(settings)?
				.details(&id)
				.with_context(|| format!("failed to fetch details for {id}"))?;
			print_detail(format, &detail)
		}
		Command::Watched => {
			let store = JsonFileStore::new(&settings.watchlist);
			let list = store
				.load()
				.with_context(|| format!("failed to read {}", store.path().display()))?;
			print_watched(format, &list)
		}
	}
}
