use clap::{Parser, Subcommand};
use hmmgen::cli::{self, OutputFormat};
use log::info;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample a (state, nucleotide) sequence from an HMM
    Generate {
        /// JSON model file.
        /// If not specified, the built-in GC isochore model is used.
        #[clap(short, long)]
        model: Option<std::path::PathBuf>,
        /// Number of positions to generate
        #[clap(short = 'l', long, default_value_t = 30)]
        length: usize,
        /// Seed of the random number generator
        #[clap(short = 's', long, default_value_t = 0)]
        seed: u64,
        /// Output format
        #[clap(short = 'f', long, value_enum, default_value_t = OutputFormat::Positions)]
        format: OutputFormat,
        /// Log state/symbol counts and state runs
        #[clap(long)]
        summary: bool,
    },
    /// Print the built-in GC isochore model as a JSON model file
    Preset,
    /// Check a JSON model file
    Validate {
        /// JSON model file
        model: std::path::PathBuf,
    },
}

fn run(opts: Opts) -> hmmgen::error::Result<()> {
    let stdout = std::io::stdout();
    let out = stdout.lock();
    match opts.command {
        Commands::Generate {
            model,
            length,
            seed,
            format,
            summary,
        } => {
            let model = cli::load_or_preset(model.as_deref())?;
            let seq = cli::generate(out, &model, length, seed, format)?;
            if summary {
                cli::summarize(&seq);
            }
        }
        Commands::Preset => cli::preset(out)?,
        Commands::Validate { model } => {
            cli::validate(out, &model)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    info!("started_at={}", chrono::Local::now());
    info!("opts={:?}", opts);

    if let Err(e) = run(opts) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    info!("finished_at={}", chrono::Local::now());
}
