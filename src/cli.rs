// File: ./src/cli.rs
//! Command-line parsing, help text and the terminal presenter.
use crate::navigation::Presenter;
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Open(usize),
    Config { init: bool },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    pub search: Option<String>,
    pub root: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            command: Command::List,
            search: None,
            root: None,
            verbose: false,
        }
    }
}

/// Parses everything after the binary name. No subcommand means `list`.
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions::default();
    let mut command_seen = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => {
                opts.command = Command::Help;
                return Ok(opts);
            }
            "-v" | "--verbose" => opts.verbose = true,
            "-s" | "--search" => match iter.next() {
                Some(q) => opts.search = Some(q.clone()),
                None => bail!("--search requires a value"),
            },
            "-r" | "--root" => match iter.next() {
                Some(p) => opts.root = Some(PathBuf::from(p)),
                None => bail!("--root requires a path"),
            },
            "--init" if opts.command == (Command::Config { init: false }) => {
                opts.command = Command::Config { init: true };
            }
            "list" if !command_seen => {
                command_seen = true;
                opts.command = Command::List;
            }
            "config" if !command_seen => {
                command_seen = true;
                opts.command = Command::Config { init: false };
            }
            "open" if !command_seen => {
                command_seen = true;
                let Some(raw) = iter.next() else {
                    bail!("open requires an index");
                };
                let index = raw
                    .parse::<usize>()
                    .map_err(|_| anyhow::anyhow!("Invalid index: {}", raw))?;
                opts.command = Command::Open(index);
            }
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(opts)
}

/// Writes URLs to stdout so they can be piped into a viewer;
/// notices go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn open_pdf(&self, url: &str) {
        println!("{}", url);
    }

    fn show_notice(&self, message: &str) {
        eprintln!("{}", message);
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "PIL Syllabus v{} - browse syllabus PDFs from the command line",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [list] [--search <text>]", binary_name);
    println!("    {} open <index> [--search <text>]", binary_name);
    println!("    {} config [--init]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -s, --search <text>   Only show classes containing <text> (case-insensitive).");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    -v, --verbose         Log debug output to stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    println!("    list                  Print the syllabus list, newest first (default).");
    println!("    open <index>          Print the PDF URL of entry <index> of the listed view.");
    println!("    config [--init]       Show the config path and values; --init writes defaults.");
    println!();
    println!("EXAMPLES:");
    println!("    {} --search math", binary_name);
    println!("    {} open 0 --search math | xargs xdg-open", binary_name);
}
