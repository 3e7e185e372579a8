use bancontact_checkout::application::bancontact::BancontactMethod;
use bancontact_checkout::application::registry::PaymentMethodRegistry;
use bancontact_checkout::application::store::PaymentMethodStore;
use bancontact_checkout::domain::BANCONTACT_METHOD_ID;
use bancontact_checkout::domain::line_item::LineItem;
use bancontact_checkout::domain::payment::{ProcessorConfiguration, ProcessorHandle};
use bancontact_checkout::domain::ports::CheckoutContext;
use bancontact_checkout::domain::state::change_customer_name;
use bancontact_checkout::infrastructure::channel::{ChannelEventBus, ChannelSubmitter};
use bancontact_checkout::infrastructure::in_memory::InMemoryCheckout;
use bancontact_checkout::interfaces::csv::session_reader::{SessionReader, SessionStep};
use bancontact_checkout::interfaces::json::transcript_writer::{TranscriptEntry, TranscriptWriter};
use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session CSV file with `step, value` rows (status, input, submit)
    input: PathBuf,

    /// Cart line item as LABEL=AMOUNT. May be repeated.
    #[arg(long = "item")]
    items: Vec<String>,

    /// Currency of the cart
    #[arg(long, default_value = "EUR")]
    currency: String,

    /// Name of the payment processor handed to the transaction
    #[arg(long, default_value = "stripe")]
    processor: String,

    /// JSON file with the processor configuration (optional)
    #[arg(long)]
    processor_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let items = cli
        .items
        .iter()
        .map(|spec| LineItem::parse(spec, &cli.currency))
        .collect::<Result<Vec<_>, _>>()
        .into_diagnostic()?;
    let configuration = match cli.processor_config {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            ProcessorConfiguration(serde_json::from_reader(file).into_diagnostic()?)
        }
        None => ProcessorConfiguration::default(),
    };

    // One checkout session: its own store, cart, and orchestrator channels
    let checkout = Arc::new(InMemoryCheckout::new(items, &cli.currency));
    let store = Arc::new(PaymentMethodStore::new());
    let (bus, mut events) = ChannelEventBus::new();
    let (submitter, mut requests) = ChannelSubmitter::new();

    let mut registry = PaymentMethodRegistry::new();
    registry
        .register(Box::new(BancontactMethod::new(
            store.clone(),
            checkout.clone(),
            Box::new(bus),
            Box::new(submitter),
            ProcessorHandle::named(&cli.processor),
            configuration,
        )))
        .into_diagnostic()?;
    debug!(methods = ?registry.ids().collect::<Vec<_>>(), "payment methods registered");
    let method = registry
        .get(BANCONTACT_METHOD_ID)
        .ok_or_else(|| miette!("bancontact is not registered"))?;

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = SessionReader::new(file);
    let stdout = io::stdout();
    let mut writer = TranscriptWriter::new(stdout.lock());

    for (index, step_result) in reader.steps().enumerate() {
        let step = index + 1;
        let outcome = match step_result {
            Ok(SessionStep::Status(status)) => {
                checkout.set_form_status(status);
                None
            }
            Ok(SessionStep::Input(value)) => {
                store.dispatch(change_customer_name(value));
                None
            }
            Ok(SessionStep::Submit) => match method.submit().await {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!(step, "submission failed: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!(step, "skipping unreadable step: {}", e);
                continue;
            }
        };

        while let Ok(event) = events.try_recv() {
            writer
                .write_entry(&TranscriptEntry::Event {
                    step,
                    event: &event,
                })
                .into_diagnostic()?;
        }
        while let Ok(request) = requests.try_recv() {
            writer
                .write_entry(&TranscriptEntry::Submission {
                    step,
                    request: &request,
                })
                .into_diagnostic()?;
        }
        writer
            .write_entry(&TranscriptEntry::Snapshot {
                step,
                status: checkout.form_status(),
                field: &method.active_content(),
                button: &method.submit_button(),
                outcome,
            })
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
