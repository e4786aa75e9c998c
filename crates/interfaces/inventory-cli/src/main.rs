use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use inventory_cli::{commands, CliTable};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch recorded actions and print the resulting state
    Replay {
        /// JSON array of actions, or one action per line
        input: Utf8PathBuf,
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
    /// List action tags
    Tags {
        #[arg(long, value_enum, default_value_t = CliTable::All)]
        table: CliTable,
        #[arg(long, help = "Only tags that raise an alert")]
        rejected: bool,
    },
    /// Show which group actions each host in a hosts page allows
    #[command(name = "host-actions")]
    HostActions { fixture: Utf8PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Replay { input, output } => {
            commands::cmd_replay(input, output)?;
        }
        Commands::Tags { table, rejected } => {
            commands::cmd_tags(table, rejected)?;
        }
        Commands::HostActions { fixture } => {
            commands::cmd_host_actions(fixture)?;
        }
    }

    Ok(())
}
