//! Booky CLI
//!
//! Runs one command against a library file. Mutating commands close the
//! library afterwards (final save); read-only commands never write.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use booky::storage::LibraryFile;
use booky::{Book, Config, Library, SearchQuery};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Booky CLI
#[derive(Parser, Debug)]
#[command(name = "booky")]
#[command(about = "Manage a personal book collection stored in a JSON file")]
#[command(version)]
struct Args {
    /// Library file
    #[arg(short, long, default_value = booky::config::DEFAULT_LIBRARY_FILE)]
    file: PathBuf,

    /// Skip fsync before replacing the library file
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book
    Add {
        /// Book title (required)
        title: String,

        #[arg(short, long)]
        author: Option<String>,

        /// Free-form year, e.g. "1965" or "c. 1980"
        #[arg(short, long)]
        year: Option<String>,

        /// Catalog code or ISBN
        #[arg(short, long, alias = "isbn")]
        identifier: Option<String>,
    },

    /// List all books, numbered from 1
    List,

    /// Search by title/author keyword, exact year and exact identifier
    Search {
        #[arg(short, long)]
        keyword: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        #[arg(short, long, alias = "isbn")]
        identifier: Option<String>,
    },

    /// Delete the book at a 1-based position (as shown by `list`)
    Delete {
        position: usize,
    },

    /// Strictly parse the library file and report problems
    Check,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,booky=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Booky v{}", booky::VERSION);

    // Build config from args
    let config = Config::builder()
        .library_path(&args.file)
        .sync_on_save(!args.no_sync)
        .build();

    // Read-only commands never write, so a corrupt file is left for `check`
    let outcome = match args.command {
        Commands::Check => check(&args.file),
        Commands::List | Commands::Search { .. } => {
            run(&mut Library::open(config), args.command)
        }
        command => Library::scoped(config, |library| run(library, command)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(library: &mut Library, command: Commands) -> booky::Result<()> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            identifier,
        } => {
            let book = Book::from_fields(
                &title,
                author.as_deref(),
                year.as_deref(),
                identifier.as_deref(),
            )?;
            println!("Added '{}'", book.title());
            library.add(book);
        }
        Commands::List => {
            if library.is_empty() {
                println!("No books yet.");
            }
            for (position, book) in library.books().iter().enumerate() {
                println!("{}. {}", position + 1, book);
            }
        }
        Commands::Search {
            keyword,
            year,
            identifier,
        } => {
            let query = SearchQuery::from_parts(
                keyword.as_deref().map(str::trim),
                year.as_deref().map(str::trim),
                identifier.as_deref().map(str::trim),
            );
            let hits = library.search(&query);
            if hits.is_empty() {
                println!("No matching books found.");
            }
            for book in &hits {
                println!("{}", book);
            }
        }
        Commands::Delete { position } => {
            let removed = library.delete(position)?;
            println!("Deleted: {}", removed);
        }
        Commands::Check => {}
    }

    Ok(())
}

fn check(path: &Path) -> booky::Result<()> {
    let books = LibraryFile::new(path, false).try_load()?;
    println!("{}: {} book(s), OK", path.display(), books.len());
    Ok(())
}
