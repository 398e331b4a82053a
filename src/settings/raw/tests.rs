use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["manimovies", "--theme", "light"]);
	cli.api_key = Some("cli-key".into());
	cli.base_url = Some("http://localhost:9000/".into());
	cli.timeout = Some(3);
	cli.min_query_len = Some(2);
	cli.debounce = Some(100);
	cli.max_rating = Some(10);
	cli.star_color = Some("red".into());
	cli.star_size = Some(3);
	cli.title = Some("Films".into());
	cli.watchlist = Some(PathBuf::from("/tmp/list.json"));

	let mut config = RawConfig::default();
	config.omdb.api_key = Some("file-key".into());
	config.rating.max_rating = Some(5);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.omdb.api_key, cli.api_key);
	assert_eq!(config.omdb.base_url, cli.base_url);
	assert_eq!(config.omdb.timeout_secs, Some(3));
	assert_eq!(config.search.min_query_len, Some(2));
	assert_eq!(config.search.debounce_ms, Some(100));
	assert_eq!(config.rating.max_rating, Some(10));
	assert_eq!(config.rating.color, cli.star_color);
	assert_eq!(config.rating.size, Some(3));
	assert_eq!(config.ui.theme, Some("light".into()));
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.storage.watchlist, cli.watchlist);
}

#[test]
fn defaults_resolve_without_any_source() {
	let cli = CliArgs::parse_from([
		"manimovies",
		"--no-config",
		"--watchlist",
		"/tmp/watched.json",
	]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);
	let config = raw.resolve(&cli).unwrap();

	assert_eq!(config.api_key, None);
	assert_eq!(config.min_query_len, 3);
	assert_eq!(config.debounce_ms, 250);
	assert_eq!(config.max_rating, 5);
	assert_eq!(config.theme, "slate");
	assert_eq!(config.title, "ManiMovies");
	assert_eq!(config.watchlist, PathBuf::from("/tmp/watched.json"));
}

#[test]
fn blank_api_key_counts_as_missing() {
	let cli = CliArgs::parse_from(["manimovies", "--api-key", "  ", "-w", "/tmp/w.json"]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);
	let config = raw.resolve(&cli).unwrap();
	assert!(config.omdb_config().is_err());
}

#[test]
fn invalid_scale_from_cli_names_the_flag() {
	let cli = CliArgs::parse_from(["manimovies", "--max-rating", "11", "-w", "/tmp/w.json"]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);
	let message = raw.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("rating.max_rating"));
	assert!(message.contains("--max-rating"));
	assert!(message.contains("value: 11"));
}

#[test]
fn toml_sections_deserialize() {
	let raw: RawConfig = toml_config(
		r#"
		[omdb]
		api_key = "abc"
		timeout_secs = 4

		[rating]
		max_rating = 10
		messages = ["Bad", "Okay"]
		class_name = "bold"

		[ui]
		theme = "Light"
		"#,
	);
	assert_eq!(raw.omdb.api_key.as_deref(), Some("abc"));
	assert_eq!(raw.omdb.timeout_secs, Some(4));
	assert_eq!(raw.rating.max_rating, Some(10));
	assert_eq!(raw.rating.messages, Some(vec!["Bad".into(), "Okay".into()]));
	assert_eq!(raw.rating.class_name.as_deref(), Some("bold"));
	assert_eq!(raw.ui.theme.as_deref(), Some("Light"));
}

fn toml_config(text: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(text, config::FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap()
}
