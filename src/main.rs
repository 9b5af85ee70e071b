use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use mdsections::{CliError, Config, OutputFormat, SAMPLE};

const DEFAULT_CONFIG_PATH: &str = "mdsections.toml";

#[derive(Parser)]
#[command(name = "mdsections")]
#[command(about = "Parse a markdown-like document into headings, paragraphs and code blocks")]
struct Cli {
    /// Input file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Parse the built-in sample document
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log parser activity
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Tree,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tree => OutputFormat::Tree,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::load(&cli.config)?;
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    let source = if cli.sample {
        SAMPLE.to_string()
    } else {
        let text = read_input(cli.input.as_deref())?;
        if text.trim().is_empty() && config.input.use_sample_when_empty {
            log::info!("input is empty, parsing the built-in sample");
            SAMPLE.to_string()
        } else {
            text
        }
    };

    let mut rendered = String::new();
    if config.output.show_section_count && config.output.format == OutputFormat::Tree {
        let sections = mdsections::split_into_sections(&source);
        rendered.push_str(&format!("# {} sections\n", sections.len()));
    }
    rendered.push_str(&mdsections::parse_and_render(&source, &config.output)?);

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            println!("Created {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Input {
                input: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Input {
                    input: "stdin".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}
