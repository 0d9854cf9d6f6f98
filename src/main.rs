use anyhow::{bail, Result};
use clap::Parser;
use log::{error, info};
use rustyline::{config::Config as EditorConfig, error::ReadlineError, DefaultEditor};
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};

use sme::{
    config::Config,
    display_error, evaluate_expression_with,
    repl::{Reply, Session},
    variables::VariableTable,
};

const HISTORY_FILE: &str = ".sme_history";
const PROMPT: &str = "sme> ";

/// sme evaluates arithmetic expressions with variables, `floor` and `ceil`.
///
/// Assign variables with `:name=value`, list them with `:vars` and leave with `quit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Show debug output
    #[arg(short, long)]
    debug: bool,

    /// Drop unknown identifiers instead of reporting them.
    #[arg(long)]
    lenient: bool,

    /// Group chains of `*` and `/` to the right, as earlier releases did. Implies --lenient.
    #[arg(long)]
    legacy: bool,

    /// Evaluate a single expression and exit.
    #[arg(short, long)]
    expr: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = if self.legacy {
            Config::legacy()
        } else {
            Config::default()
        };
        if self.lenient {
            config.strict_identifiers = false;
        }
        config
    }
}

fn log_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    }
}

fn init_logging(debug: bool) -> Result<()> {
    match SimpleLogger::init(log_level(debug), LogConfig::default()) {
        Ok(_) => Ok(()),
        Err(e) => bail!("Failed to init logger: {}", e),
    }
}

fn init_editor() -> Result<DefaultEditor> {
    let config = EditorConfig::builder().auto_add_history(true).build();
    let mut editor = DefaultEditor::with_config(config)?;
    let _ = editor.load_history(HISTORY_FILE);

    Ok(editor)
}

fn save_history(editor: &mut DefaultEditor) -> Result<()> {
    match editor.save_history(HISTORY_FILE) {
        Ok(_) => Ok(()),
        Err(e) => bail!("Failed to save history: {}", e),
    }
}

fn welcome() {
    println!("sme v{}", env!("CARGO_PKG_VERSION"));
    println!("Assign with ':name=value', list with ':vars', leave with 'quit'");
    println!();
}

fn run_once(source: &str, config: &Config) {
    match evaluate_expression_with(source, &VariableTable::new(), config) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            eprintln!("{}", display_error(&e, source));
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let config = args.config();
    info!("using {:?}", config);

    if let Some(source) = &args.expr {
        run_once(source, &config);
        return Ok(());
    }

    let mut editor = init_editor()?;
    let mut session = Session::new(config);
    welcome();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                info!("read: {}", &line);

                match session.handle(&line) {
                    Reply::Silent => (),
                    Reply::Quit => {
                        println!("Quitting");
                        break;
                    }
                    Reply::Print(output) => println!("{}", output),
                    Reply::Error(message) => eprintln!("{}", message),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("Press Ctrl-D or type 'quit' to quit");
            }
            Err(ReadlineError::Eof) => {
                println!("quit");
                break;
            }
            Err(e) => {
                error!("Unexpected error: {}", e);
                break;
            }
        }
    }

    save_history(&mut editor)?;

    Ok(())
}
