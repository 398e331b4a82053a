mod args;
mod output;
mod search;

pub(crate) use args::{CliArgs, Command, OutputFormat, parse_cli};
pub(crate) use output::{print_detail, print_movies, print_not_found, print_watched};
pub(crate) use search::{SearchOutcome, search_titles};
