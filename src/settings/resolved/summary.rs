use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!(
		"  OMDb API key: {}",
		if config.api_key.is_some() { "set" } else { "(missing)" }
	);
	println!("  OMDb endpoint: {}", config.base_url);
	println!("  Request timeout: {}s", config.timeout_secs);
	println!("  Minimum query length: {}", config.min_query_len);
	println!("  Search debounce: {}ms", config.debounce_ms);
	println!("  Rating scale: 1-{}", config.max_rating);
	println!("  Star colour: {}", config.star_color);
	println!("  Star size: {}", config.star_size);
	if !config.messages.is_empty() {
		println!("  Rating messages: {}", config.messages.join(", "));
	}
	if config.default_rating > 0 {
		println!("  Default rating: {}", config.default_rating);
	}
	if let Some(class_name) = &config.class_name {
		println!("  Rating classes: {class_name}");
	}
	println!("  UI theme: {}", config.theme);
	println!("  Window title: {}", config.title);
	println!("  Watched list: {}", config.watchlist.display());
}
