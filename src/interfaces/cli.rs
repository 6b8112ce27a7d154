use crate::application::factory::DefaultPaymentMethodFactory;
use crate::application::service::PaymentService;
use crate::domain::payment::PaymentDetails;
use crate::error::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Runs one simulated payment per requested method.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Payment methods to run (credit_card, stripe, paypal)
    #[arg(default_values = ["credit_card", "stripe", "paypal"])]
    pub methods: Vec<String>,

    /// Payment details as a JSON object, e.g. '{"amount": 100, "currency": "USD"}'
    #[arg(long, default_value = "{}")]
    pub details: String,

    /// Look up the details of this payment id on every method after processing
    #[arg(long)]
    pub payment_id: Option<String>,
}

/// Resolves every requested method, then processes the payment on all of them
/// at once.
///
/// Resolution happens up front, so an unknown tag aborts before any payment is
/// processed. Returns the detail lookups for `--payment-id`, in the order the
/// methods were given.
pub async fn run(cli: Cli) -> Result<Vec<String>> {
    let details: Arc<PaymentDetails> = Arc::new(serde_json::from_str(&cli.details)?);
    let factory = DefaultPaymentMethodFactory::new();

    let services = cli
        .methods
        .iter()
        .map(|tag| PaymentService::new(&factory, tag).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;

    let mut tasks = JoinSet::new();
    for service in &services {
        let service = Arc::clone(service);
        let details = Arc::clone(&details);
        tasks.spawn(async move { service.process_payment(&details).await });
    }
    while let Some(joined) = tasks.join_next().await {
        joined?;
    }

    let mut lookups = Vec::new();
    if let Some(payment_id) = cli.payment_id.as_deref() {
        for service in &services {
            let found = service.get_payment_details(payment_id);
            tracing::info!("{found}");
            lookups.push(found);
        }
    }

    Ok(lookups)
}
