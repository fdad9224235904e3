use clap::{ArgAction, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paydispatch::application::registry::GatewayRegistry;
use paydispatch::domain::amount::Amount;
use paydispatch::interfaces::csv::batch::{self, BatchFailure};
use paydispatch::interfaces::csv::payment_reader::PaymentReader;
use paydispatch::interfaces::csv::receipt_writer::ReceiptWriter;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;
use std::io;
use std::path::PathBuf;

const DEFAULT_GATEWAY: &str = "stripe";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Charge a single amount through one gateway
    Pay {
        /// Amount to charge (non-negative)
        #[arg(allow_negative_numbers = true)]
        amount: Amount,

        /// Gateway identifier (see `gateways`)
        #[arg(long, env = "PAYDISPATCH_GATEWAY", default_value = DEFAULT_GATEWAY)]
        gateway: String,

        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Charge every row of a `gateway, amount` CSV file and print receipts as CSV
    Batch {
        /// Input payments CSV file
        input: PathBuf,

        /// Gateway used for rows with an empty gateway cell
        #[arg(long, env = "PAYDISPATCH_GATEWAY", default_value = DEFAULT_GATEWAY)]
        gateway: String,
    },
    /// List registered gateway identifiers
    Gateways,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .into_diagnostic()?;

    let registry = GatewayRegistry::with_builtin_gateways();

    match cli.command {
        Command::Pay {
            amount,
            gateway,
            json,
        } => {
            let dispatcher = registry.dispatcher_for(&gateway).into_diagnostic()?;
            let receipt = dispatcher.make_payment(amount).await.into_diagnostic()?;
            if json {
                println!("{}", serde_json::to_string(&receipt).into_diagnostic()?);
            } else {
                println!("{}", receipt);
            }
        }
        Command::Batch { input, gateway } => {
            run_batch(&registry, input, &gateway).await?;
        }
        Command::Gateways => {
            for id in registry.gateway_ids() {
                println!("{}", id);
            }
        }
    }

    Ok(())
}

async fn run_batch(
    registry: &GatewayRegistry,
    input: PathBuf,
    default_gateway: &str,
) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());

    batch::run_batch(registry, reader, &mut writer, default_gateway, |failure| {
        match failure {
            BatchFailure::Read(e) => eprintln!("Error reading payment: {}", e),
            BatchFailure::Payment(e) => eprintln!("Error processing payment: {}", e),
        }
    })
    .await
    .into_diagnostic()?;

    Ok(())
}
