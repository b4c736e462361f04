use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countryname::{
	app::{App, AppMode},
	config,
	logging,
	load_catalog,
	resolve_and_display,
	ui,
	Catalog,
	Indexes,
	Placeholders,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf};

#[derive(Parser)]
#[command(name = "countryname")]
#[command(version)]
#[command(about = "Show the name of a country in another language")]
struct Cli {
	/// Config file (default: ~/.config/countryname/config.yaml)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the name of COUNTRY in LANGUAGE (names or codes)
	Lookup {
		language: String,
		country: String,
	},
	/// List the selectable languages
	Languages,
	/// List the selectable countries
	Countries,
	/// Print every translation of one country
	Show {
		country: String,
	},
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	let config = config::load(cli.config.as_deref()).context("loading configuration")?;
	logging::init(config.log_file.as_deref(), config.effective_log_filter().as_deref())?;
	let default_language = config.default_language_code()?;
	let catalog = load_catalog(config.data_dir.as_deref()).context("loading country data")?;
	let placeholders = config.placeholders;
	match cli.command {
		None => run_tui(App::new(catalog, placeholders, default_language.as_ref())),
		Some(Commands::Lookup { language, country }) => {
			let indexes = Indexes::build(&catalog);
			let language = indexes.languages.display_name(&language);
			let country = indexes.countries.display_name(&country);
			println!("{}", resolve_and_display(&indexes, &catalog.translator, &placeholders, Some(language), Some(country)));
			Ok(())
		}
		Some(Commands::Languages) => {
			let indexes = Indexes::build(&catalog);
			for name in indexes.languages.names() {
				if let Some(code) = indexes.languages.code(name) {
					println!("{}\t{}", code, name);
				}
			}
			Ok(())
		}
		Some(Commands::Countries) => {
			let indexes = Indexes::build(&catalog);
			for name in indexes.countries.names() {
				if let Some(code) = indexes.countries.code(name) {
					println!("{}\t{}", code, name);
				}
			}
			Ok(())
		}
		Some(Commands::Show { country }) => {
			show_country(&catalog, &placeholders, &country);
			Ok(())
		}
	}
}

fn show_country(catalog: &Catalog, placeholders: &Placeholders, country: &str) {
	let indexes = Indexes::build(catalog);
	let name = indexes.countries.display_name(country);
	let Some(code) = indexes.countries.code(name).or_else(|| catalog.countries.code_for(name)) else {
		println!("{}", placeholders.no_translation);
		return;
	};
	let mut any = false;
	for (language, translated) in catalog.translator.translations_for(code) {
		let language_name = catalog.languages.name(language).unwrap_or(language.as_str());
		println!("{}\t{}\t{}", language, language_name, translated);
		any = true;
	}
	if !any {
		println!("{}", placeholders.no_translation);
	}
}

fn run_tui(mut app: App) -> Result<()> {
	let _guard = ui::TerminalGuard::enter("countryname")?;
	let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
	event_loop(&mut terminal, &mut app)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
	let mut rng = rand::thread_rng();
	loop {
		terminal.draw(|f| ui::draw(f, app))?;
		let Event::Key(key) = event::read()? else {
			continue;
		};
		if key.kind != KeyEventKind::Press {
			continue;
		}
		if app.mode == AppMode::Filter {
			match key.code {
				KeyCode::Char(c) => {
					if !key.modifiers.contains(KeyModifiers::CONTROL) {
						app.filter_query.push(c);
						app.update_filter_results();
					}
				},
				KeyCode::Backspace => {
					app.filter_query.pop();
					app.update_filter_results();
				},
				KeyCode::Esc => app.cancel_filter(),
				KeyCode::Enter => app.apply_filter(),
				KeyCode::Up => app.previous_filtered(),
				KeyCode::Down => app.next_filtered(),
				_ => {}
			}
			continue;
		}
		match key.code {
			KeyCode::Char('q') => break,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
			KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => app.toggle_focus(),
			KeyCode::Down | KeyCode::Char('j') => app.next(),
			KeyCode::Up | KeyCode::Char('k') => app.previous(),
			KeyCode::Backspace => app.clear_selection(),
			KeyCode::Char('/') => app.open_filter(),
			KeyCode::Char('r') => app.random_country(&mut rng),
			_ => {}
		}
	}
	Ok(())
}
