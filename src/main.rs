use clap::{Parser as ClapParser, Subcommand};
use clove_path::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "clove-path")]
#[command(about = "Clove Path - validate paths and extract values from JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a path and evaluate it against JSON input
    Check {
        /// The path, e.g. '$.items[*].name'
        path: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate and classify the path, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the components a path lexes into
    Components {
        /// The path to inspect
        path: String,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'clove-path docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            path,
            input,
            pretty,
            syntax_only,
        } => run_check(path, input, pretty, syntax_only),
        Commands::Components { path } => cli::describe_components(&path).map(|lines| {
            for line in lines {
                println!("{}", line);
            }
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    path: String,
    input: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        path,
        input,
        pretty,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid(classification) => {
            println!("Path is valid ({})", classification)
        }
        CheckResult::Match(json) | CheckResult::Matches(json) => println!("{}", json),
        CheckResult::NoMatch => {
            eprintln!("No match");
            std::process::exit(1);
        }
    }
    Ok(())
}
