use clap::Parser;
use snipbox::cli::{Cli, Command};
use snipbox::config::Config;
use snipbox::error::StoreError;
use snipbox::report;
use snipbox::store::{CreateOutcome, NewSnippet, SnippetPatch, SnippetStore};
use std::path::Path;

fn exit_on_error<T>(result: Result<T, StoreError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Resolve the snippet body from --code or --file. None when neither was given.
fn read_code(code: Option<String>, file: Option<&Path>) -> Option<String> {
    match (code, file) {
        (Some(code), _) => Some(code),
        (None, Some(path)) => match std::fs::read_to_string(path) {
            Ok(code) => Some(code),
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        (None, None) => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.db) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error locating snippet database: {e}");
            std::process::exit(1);
        }
    };

    let store = exit_on_error(SnippetStore::open(&config.db_path));

    match cli.command {
        Command::Add(args) => {
            let code = read_code(args.code, args.file.as_deref())
                .unwrap_or_default();

            let snippet = NewSnippet {
                language: args.language,
                title: args.title,
                code,
                category: args.category,
                additional_info: args.info,
            };

            match exit_on_error(store.create(&snippet)) {
                CreateOutcome::Created => println!("Snippet created."),
                CreateOutcome::Duplicate => {
                    println!(
                        "A snippet with the same language, title, and category already exists."
                    );
                }
            }
        }
        Command::Show(args) => match exit_on_error(store.read(args.id)) {
            Some(snippet) => report::print_snippet(&snippet, args.json),
            None => {
                eprintln!("Snippet {} not found.", args.id);
                std::process::exit(1);
            }
        },
        Command::List(args) => {
            let snippets = exit_on_error(store.list());
            report::print_list(&snippets, args.json);
        }
        Command::Update(args) => {
            let patch = SnippetPatch {
                language: args.language,
                title: args.title,
                code: read_code(args.code, args.file.as_deref()),
                category: args.category,
                additional_info: args.info,
            };

            if exit_on_error(store.update(args.id, &patch)) {
                println!("Snippet {} updated.", args.id);
            } else {
                eprintln!("Snippet {} not found.", args.id);
                std::process::exit(1);
            }
        }
        Command::Delete(args) => {
            if exit_on_error(store.delete(args.id)) {
                println!("Snippet {} deleted.", args.id);
            } else {
                eprintln!("Snippet {} not found.", args.id);
                std::process::exit(1);
            }
        }
        Command::Languages => {
            for language in exit_on_error(store.languages()) {
                println!("{language}");
            }
        }
        Command::Categories => {
            for category in exit_on_error(store.categories()) {
                println!("{category}");
            }
        }
        Command::Find(args) => {
            let snippets = match (&args.title, &args.language, &args.category) {
                (Some(title), _, _) => exit_on_error(store.find_by_title(title)),
                (None, Some(language), Some(category)) => {
                    exit_on_error(store.find_by_language_and_category(language, category))
                }
                (None, Some(language), None) => exit_on_error(store.find_by_language(language)),
                (None, None, Some(category)) => exit_on_error(store.find_by_category(category)),
                (None, None, None) => {
                    eprintln!("Specify at least one of --language, --category, --title.");
                    std::process::exit(1);
                }
            };

            report::print_list(&snippets, args.json);
        }
    }
}
