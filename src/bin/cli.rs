use anyhow::Result;
use pil_syllabus::cli::{self, Command, ConsolePresenter};
use pil_syllabus::client::SyllabusClient;
use pil_syllabus::config::Config;
use pil_syllabus::context::StandardContext;
use pil_syllabus::controller::SyllabusController;
use pil_syllabus::feed::FeedPhase;
use pil_syllabus::model::RecordDisplay;
use pil_syllabus::navigation::PdfTarget;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::process::ExitCode;

const BIN_NAME: &str = "pil-syllabus";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match cli::parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Try '{} --help'.", BIN_NAME);
            return Ok(ExitCode::from(2));
        }
    };

    if opts.command == Command::Help {
        cli::print_help(BIN_NAME);
        return Ok(ExitCode::SUCCESS);
    }

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let ctx = StandardContext::new(opts.root.clone());

    if let Command::Config { init } = opts.command {
        let config = if init {
            let c = Config::default();
            c.save(&ctx)?;
            c
        } else {
            Config::load_or_default(&ctx)?
        };
        println!("# {}", Config::get_path_string(&ctx)?);
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load_or_default(&ctx)?;
    let client = SyllabusClient::new(&config)?;
    let controller = SyllabusController::new(client, ConsolePresenter, config.pdf_base_url.clone());

    controller.activate().await;
    if let Some(q) = &opts.search {
        controller.search(q);
    }

    let state = controller.feed().snapshot();
    if let FeedPhase::Failed(_) = state.phase {
        eprintln!("{}", state.error_message().unwrap_or_default());
        return Ok(ExitCode::FAILURE);
    }

    let code = match opts.command {
        Command::Open(index) => match controller.tap(index) {
            Some(PdfTarget::Open(_)) => ExitCode::SUCCESS,
            Some(PdfTarget::Unavailable) => ExitCode::FAILURE,
            None => {
                eprintln!("No syllabus at index {}.", index);
                ExitCode::FAILURE
            }
        },
        _ => {
            if state.is_empty_view() {
                println!("No syllabus available.");
            }
            for (i, record) in state.filtered.iter().enumerate() {
                println!("{}", record.to_list_line(i));
            }
            ExitCode::SUCCESS
        }
    };

    controller.deactivate();
    Ok(code)
}
