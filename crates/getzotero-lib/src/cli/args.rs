use crate::config::Architecture;
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber;

pub struct Args {
    pub arch: Architecture,
    pub output_dir: String,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "getzotero",
    version,
    author = "Vadim Velikodniy",
    about = "Download the upstream Zotero tarball and repackage it as a Debian package"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    /// CPU architecture of the upstream build to fetch
    #[arg(value_enum, value_name = "ARCH")]
    arch: Architecture,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory the .deb file is written to",
        default_value = "."
    )]
    output_dir: String,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    Args {
        arch: cli.arch,
        output_dir: cli.output_dir,
        log_level,
    }
}
