use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["manimovies"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.command.is_none());
}

#[test]
fn global_flags_follow_subcommands() {
	let parsed = CliArgs::parse_from([
		"manimovies",
		"search",
		"the",
		"matrix",
		"--output",
		"json",
		"--api-key",
		"k",
	]);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.api_key.as_deref(), Some("k"));
	assert_eq!(
		parsed.command,
		Some(Command::Search {
			query: vec!["the".into(), "matrix".into()]
		})
	);
}
