//! slapit - post, read, and direct-message on Twitter from the terminal

use clap::{Parser, Subcommand};
use libslapit::service::DEFAULT_COUNT;
use libslapit::{logging, output, Config, Result, SlapitService, Timeline, TimelineRequest};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "slapit")]
#[command(version, about = "Post, read, and direct-message on Twitter from the terminal")]
#[command(long_about = r#"Post, read, and direct-message on Twitter from the terminal.

Credentials are read from ~/.twitter_api/twitter_creds.ini:

    [TWITTER_CREDS]
    token = ...
    token_secret = ...
    consumer_key = ...
    consumer_secret = ...

EXAMPLES:
    slapit say hello from the terminal
    slapit get
    slapit get 20 --user jack
    slapit tell jack see you at noon

ENVIRONMENT:
    SLAPIT_CREDS        Use another credentials file
    SLAPIT_API_URL      Use another API base URL
    SLAPIT_LOG_FORMAT   Log format on stderr: text, json, pretty
    SLAPIT_LOG_LEVEL    Log level when RUST_LOG is unset (default: error)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Post a status update
    #[command(visible_alias = "s")]
    Say {
        /// Words of the status, joined with single spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Print your home timeline or another account's timeline
    #[command(visible_alias = "g")]
    Get {
        /// Number of entries to fetch
        #[arg(default_value_t = DEFAULT_COUNT)]
        count: u32,

        /// Read this account's timeline instead of your home timeline
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Send a direct message
    #[command(visible_alias = "t")]
    Tell {
        /// Handle of the recipient
        recipient: String,

        /// Words of the message, joined with single spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    logging::init_default(cli.verbose);

    // Handler failures are reported on stdout and do not change the exit status
    if let Err(e) = run(cli.command).await {
        debug!(error = ?e, "Command failed");
        println!("{}", output::error_banner(&e));
    }
}

async fn run(command: Commands) -> Result<()> {
    let config = Config::load()?;
    let service = SlapitService::from_config(&config)?;

    match command {
        Commands::Say { message } => {
            service.say(&message).await?;
        }
        Commands::Get { count, user } => {
            let request = TimelineRequest {
                timeline: Timeline::for_user(user),
                count,
            };
            let tweets = service.get(&request).await?;

            let stdout = std::io::stdout();
            output::render_timeline(&mut stdout.lock(), &tweets)?;
        }
        Commands::Tell { recipient, message } => {
            service.tell(&recipient, &message).await?;
        }
    }

    Ok(())
}
