//! Drives the sitewire layer against a sample encyclopedia page from the
//! terminal: search the built-in index, build citations, or replay a whole
//! interaction session against the headless page model.

mod page;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use sitewire::dom::Event;
use sitewire::{App, JsonFileStore, Key, MemoryStore, PrefKey, QueryOutcome, SearchIndex};

#[derive(Parser)]
#[command(name = "encyclopedia-demo", about = "Sitewire interactivity layer demo")]
struct Cli {
    /// Preference file standing in for per-origin storage. Temporary
    /// in-memory store when omitted.
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query the built-in keyword index.
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = Output::Text)]
        output: Output,
    },
    /// Print the citation string for the sample page.
    Cite,
    /// Replay a scripted interaction session and report what happened.
    Walkthrough,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Search { query, output } => search(&query, output),
        Command::Cite => cite(),
        Command::Walkthrough => walkthrough(cli.prefs),
    }
}

fn search(query: &str, output: Output) -> Result<()> {
    let index = SearchIndex::builtin();
    match index.query(query) {
        QueryOutcome::TooShort => {
            println!("{}", style("Interogare prea scurtă (minim 2 caractere).").dim());
        }
        QueryOutcome::Matches(hits) => match output {
            Output::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
            Output::Text => {
                if hits.is_empty() {
                    println!("{}", style("Nu s-au găsit rezultate").dim());
                }
                for hit in hits {
                    println!("{}  {}", style(&hit.title).bold(), style(&hit.page).dim());
                }
            }
        },
    }
    Ok(())
}

fn cite() -> Result<()> {
    let page = page::sample_page(None);
    println!("{}", sitewire::build_citation(&page));
    Ok(())
}

fn walkthrough(prefs: Option<PathBuf>) -> Result<()> {
    let builder = App::builder();
    let builder = match prefs {
        Some(path) => builder.store(JsonFileStore::open(path)?),
        None => builder.store(MemoryStore::new()),
    };
    let mut app = builder.build(page::sample_page(None));
    app.init();

    let step = |label: &str| println!("{} {label}", style("▸").cyan());

    step("toggling the theme");
    app.click_id("themeToggle");
    app.advance(300);
    let root = app.page().root().expect("sample page has a root");
    println!("  data-theme = {:?}", app.page().attr(root, "data-theme"));

    step("searching for \"dinasti\"");
    app.input_id("globalSearch", "dinasti");
    let panel = app.page().by_id("searchResults").expect("sample page has a panel");
    println!("  rendered entries: {}", app.page().children(panel).len());

    step("copying a citation");
    app.click_id("citeThis");
    app.click_id("citationCopy");
    println!("  clipboard: {:?}", app.host().clipboard().last());

    step("letting the toast expire");
    app.advance(3300);

    step("scrolling past the threshold");
    app.scroll(400.0);
    let back_to_top = app.page().by_id("backToTop").expect("control always exists");
    println!("  back-to-top opacity: {:?}", app.page().style(back_to_top, "opacity"));

    step("pressing Escape to sweep overlays");
    app.press(Key::Escape);
    app.dispatch(Event::Scroll { y: 0.0 });
    println!("  language preference: {}", app.store().get(PrefKey::Language));
    println!("{}", style("done").green());
    Ok(())
}
