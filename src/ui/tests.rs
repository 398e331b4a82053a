use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use manimovies_catalog::{
	FetchError, MemoryStore, MovieDetail, MovieSource, MovieSummary, WatchedEntry, Watchlist,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::style::default_theme;
use super::{App, Focus};
use crate::chrome::RecordingChrome;
use crate::controller::{Controller, ControllerConfig, DetailSession};

struct StubSource;

impl MovieSource for StubSource {
	fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
		Ok((1..=2)
			.map(|n| MovieSummary {
				id: format!("tt-{query}-{n}"),
				title: format!("{query} part {n}"),
				year: format!("200{n}"),
				poster: None,
			})
			.collect())
	}

	fn details(&self, id: &str) -> Result<MovieDetail, FetchError> {
		Ok(MovieDetail {
			id: id.to_string(),
			title: format!("Feature {id}"),
			year: "2001".into(),
			poster: None,
			genre: Some("Sci-Fi".into()),
			runtime: Some("155 min".into()),
			runtime_minutes: Some(155),
			plot: Some("A desert planet.".into()),
			actors: Some("Someone Famous".into()),
			director: Some("A Director".into()),
			released: Some("22 Oct 2021".into()),
			imdb_rating: Some(8.0),
		})
	}
}

fn app() -> App<'static> {
	app_with(MemoryStore::new())
}

fn app_with(store: MemoryStore) -> App<'static> {
	let config = ControllerConfig {
		search_debounce: Duration::ZERO,
		..ControllerConfig::default()
	};
	let controller = Controller::new(
		config,
		Arc::new(StubSource),
		Box::new(store),
		Rc::new(RefCell::new(RecordingChrome::default())),
	)
	.unwrap();
	App::new(controller, default_theme())
}

fn press(app: &mut App<'_>, code: KeyCode) {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn mouse(app: &mut App<'_>, kind: MouseEventKind, column: u16, row: u16) {
	app.handle_mouse(MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	});
}

fn settle(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while Instant::now() < deadline {
		app.tick();
		let controller = app.controller();
		let loading = controller.detail().is_some_and(DetailSession::is_loading);
		if !controller.is_searching() && !loading {
			return;
		}
		thread::sleep(Duration::from_millis(2));
	}
	panic!("app did not settle");
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

fn open_first_result(app: &mut App<'_>) {
	type_text(app, "dune");
	settle(app);
	press(app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Results);
	press(app, KeyCode::Char(' '));
	settle(app);
	assert_eq!(app.focus(), Focus::Detail);
}

fn user_rating(app: &App<'_>) -> Option<u8> {
	app.controller().detail().map(DetailSession::user_rating)
}

#[test]
fn initial_screen_shows_navbar_and_empty_list() {
	let mut app = app();
	let view = render(&mut app);
	assert!(view.contains("ManiMovies"));
	assert!(view.contains("Found 0 results"));
	assert!(view.contains("Search for a movie"));
	assert!(view.contains("# 0 movies"));
	assert_eq!(app.focus(), Focus::Search);
}

#[test]
fn short_query_stays_idle() {
	let mut app = app();
	type_text(&mut app, "ab");
	assert!(!app.controller().is_searching());
	assert_eq!(app.controller().query(), "ab");
}

#[test]
fn typing_lists_results() {
	let mut app = app();
	type_text(&mut app, "dune");
	settle(&mut app);
	let view = render(&mut app);
	assert!(view.contains("Found 2 results"));
	assert!(view.contains("dune part 1"));
	assert!(view.contains("dune part 2"));
}

#[test]
fn keyboard_rating_and_adding() {
	let mut app = app();
	open_first_result(&mut app);

	let view = render(&mut app);
	assert!(view.contains("Feature tt-dune-1"));
	assert!(view.contains("22 Oct 2021 • 155 min"));
	assert!(view.contains("☆ ☆ ☆ ☆ ☆"));
	assert!(!view.contains("Add to list"));

	press(&mut app, KeyCode::Right);
	press(&mut app, KeyCode::Right);
	press(&mut app, KeyCode::Right);
	press(&mut app, KeyCode::Char(' '));
	assert_eq!(user_rating(&app), Some(3));

	let view = render(&mut app);
	assert!(view.contains("★ ★ ★ ☆ ☆"));
	assert!(view.contains("Add to list"));

	press(&mut app, KeyCode::Char('a'));
	assert!(app.controller().detail().is_none());
	assert_eq!(app.focus(), Focus::Results);
	let view = render(&mut app);
	assert!(view.contains("# 1 movies"));
	assert!(view.contains("Added Feature tt-dune-1"));
}

#[test]
fn digits_commit_directly() {
	let mut app = app();
	open_first_result(&mut app);
	press(&mut app, KeyCode::Char('4'));
	assert_eq!(user_rating(&app), Some(4));
	press(&mut app, KeyCode::Char('9'));
	assert_eq!(user_rating(&app), Some(4));
}

#[test]
fn mouse_hover_and_click_on_stars() {
	let mut app = app();
	open_first_result(&mut app);
	render(&mut app);
	let area = app.rating_area.expect("rating row drawn");

	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), area.x + 4, area.y);
	assert_eq!(user_rating(&app), Some(3));

	mouse(&mut app, MouseEventKind::Moved, area.x + 8, area.y);
	let rating = *app.controller().detail().unwrap().rating();
	assert_eq!(rating.rendered(), 5);

	mouse(&mut app, MouseEventKind::Moved, area.x, area.y + 3);
	let rating = *app.controller().detail().unwrap().rating();
	assert_eq!(rating.rendered(), 3);
}

#[test]
fn clicking_a_result_row_opens_it() {
	let mut app = app();
	type_text(&mut app, "dune");
	settle(&mut app);
	render(&mut app);
	let area = app.results.area.expect("results drawn");

	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), area.x + 4, area.y + 4);
	assert_eq!(app.controller().open_id(), Some("tt-dune-2"));
	assert_eq!(app.focus(), Focus::Detail);
}

#[test]
fn escape_closes_detail() {
	let mut app = app();
	open_first_result(&mut app);
	press(&mut app, KeyCode::Esc);
	assert!(app.controller().detail().is_none());
	assert_eq!(app.focus(), Focus::Results);
}

#[test]
fn enter_refocuses_and_clears_search() {
	let mut app = app();
	type_text(&mut app, "dune");
	settle(&mut app);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.focus(), Focus::Search);
	assert_eq!(app.controller().query(), "");
	assert_eq!(app.controller().result_count(), 0);
}

#[test]
fn rated_title_shows_previous_rating() {
	let mut app = app();
	open_first_result(&mut app);
	press(&mut app, KeyCode::Char('3'));
	press(&mut app, KeyCode::Char('a'));

	press(&mut app, KeyCode::Char(' '));
	settle(&mut app);
	let view = render(&mut app);
	assert!(view.contains("You've already rated this movie 3"));
	assert!(app.rating_area.is_none());
}

#[test]
fn watched_entries_can_be_removed() {
	let mut app = app();
	open_first_result(&mut app);
	press(&mut app, KeyCode::Char('5'));
	press(&mut app, KeyCode::Char('a'));
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Watched);

	press(&mut app, KeyCode::Char('d'));
	assert!(app.controller().watched().is_empty());
}

#[test]
fn function_keys_collapse_boxes() {
	let mut app = app();
	press(&mut app, KeyCode::F(2));
	press(&mut app, KeyCode::F(3));
	let view = render(&mut app);
	assert!(!view.contains("Search for a movie"));
	assert!(!view.contains("# 0 movies"));
	assert!(view.contains("[+]"));
}

#[test]
fn clicking_a_watched_row_selects_it() {
	let mut list = Watchlist::new();
	for (n, title) in ["Alien", "Brazil", "Casablanca"].into_iter().enumerate() {
		list.add(WatchedEntry {
			id: format!("tt{n}"),
			title: title.into(),
			year: "1980".into(),
			poster: None,
			imdb_rating: Some(8.0),
			runtime: Some(110),
			user_rating: 4,
			rating_revisions: 1,
		})
		.unwrap();
	}
	let mut app = app_with(MemoryStore::with_list(list));
	let view = render(&mut app);
	assert!(view.contains("Casablanca"));
	let area = app.watched.area.expect("watched pane drawn");

	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), area.x + 4, area.y + 7);
	assert_eq!(app.focus(), Focus::Watched);
	assert_eq!(app.watched.selected(), Some(1));

	press(&mut app, KeyCode::Char('d'));
	assert!(!app.controller().watched().contains("tt1"));
	assert_eq!(app.controller().watched().len(), 2);
}
