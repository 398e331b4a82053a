use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `manimovies` binary.
#[derive(Parser, Debug)]
#[command(
	name = "manimovies",
	version,
	long_version = long_version(),
	about = "Search movies on OMDb and keep a rated list of what you watched",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MANIMOVIES_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'k',
		long = "api-key",
		value_name = "KEY",
		global = true,
		help = "OMDb API key (default: omdb.api_key from configuration)"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		global = true,
		help = "OMDb endpoint (default: https://www.omdbapi.com/)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		global = true,
		help = "Request timeout in seconds (default: 10)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		long = "min-query-len",
		value_name = "NUM",
		help = "Shortest query that triggers a search (default: 3)"
	)]
	pub(crate) min_query_len: Option<usize>,
	#[arg(
		long = "debounce",
		value_name = "MS",
		help = "Delay before a typed query is sent (default: 250)"
	)]
	pub(crate) debounce: Option<u64>,
	#[arg(
		long = "max-rating",
		value_name = "NUM",
		help = "Number of stars in the rating row (default: 5)"
	)]
	pub(crate) max_rating: Option<u32>,
	#[arg(
		long = "star-color",
		value_name = "COLOR",
		help = "Star colour as a name or #rrggbb (default: #fcc419)"
	)]
	pub(crate) star_color: Option<String>,
	#[arg(
		long = "star-size",
		value_name = "CELLS",
		help = "Cells per star (default: 2)"
	)]
	pub(crate) star_size: Option<u16>,
	#[arg(
		short = 'w',
		long = "watchlist",
		value_name = "PATH",
		global = true,
		help = "Watched list file (default: watched.json in the data directory)"
	)]
	pub(crate) watchlist: Option<PathBuf>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Window title while no movie is open (default: ManiMovies)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how one-shot commands print their result"
	)]
	pub(crate) output: OutputFormat,
}

/// One-shot commands; without one the interactive UI starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Search titles and print the matches.
	Search {
		#[arg(required = true, num_args = 1.., value_name = "QUERY")]
		query: Vec<String>,
	},
	/// Print the full record of one title.
	Details {
		#[arg(value_name = "IMDB_ID")]
		id: String,
	},
	/// Print the watched list and its averages.
	Watched,
}
