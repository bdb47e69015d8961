use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use remit_hub::application::flow::{FlowEngine, QuickAction};
use remit_hub::application::projection::{resolve_ribbon, resolve_timeline};
use remit_hub::domain::draft::OrmType;
use remit_hub::infrastructure::reference::ReferenceStore;
use remit_hub::infrastructure::simulated::{SimulatedOcr, SimulatedScreening, TracingNotifier};
use remit_hub::interfaces::advice::PaymentAdvice;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Which draft construction path the demo drives end to end.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    /// Manual hub flow: pick a remittance type, then a customer.
    Manual,
    /// Document scan flow: OCR extracts the full instruction.
    Ocr,
    /// Replay a past transaction from history.
    PayAgain,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Construction path to demonstrate
    #[arg(long, value_enum, default_value = "manual")]
    scenario: Scenario,

    #[arg(long, default_value = "soumya")]
    username: String,

    #[arg(long, default_value = "newgen")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let reference = Arc::new(ReferenceStore::load().into_diagnostic()?);
    let mut engine = FlowEngine::new(
        reference.clone(),
        Box::new(SimulatedScreening::new(reference.clone())),
        Box::new(SimulatedOcr::new(reference.clone())),
        Box::new(TracingNotifier::new(reference)),
    );

    engine.login(&cli.username, &cli.password).into_diagnostic()?;
    println!("logged in as {}", cli.username);

    match cli.scenario {
        Scenario::Manual => {
            engine.start_payment();
            engine.select_orm_manual(OrmType::TradeAdvance);
            engine.select_customer("CIF1001").into_diagnostic()?;
        }
        Scenario::Ocr => {
            engine.start_payment();
            engine.run_ocr().await.into_diagnostic()?;
        }
        Scenario::PayAgain => {
            engine.quick_action(QuickAction::PayAgain);
            engine.pay_again_select("TXN8002").into_diagnostic()?;
        }
    }
    println!("screen: {}", engine.screen());

    if engine.ensure_gpi().await.into_diagnostic()?
        && let Some(gpi) = engine.draft().gpi_details.as_ref()
    {
        println!("UETR: {}", gpi.uetr);
        println!(
            "sanctions: {:?} ({})",
            gpi.compliance_status, gpi.sanctions_screening_ref
        );
    }

    engine.confirm_instruction().into_diagnostic()?;
    engine.authorize().await.into_diagnostic()?;
    println!("SUCCESS: payment submitted");

    let advice = PaymentAdvice::from_draft(engine.draft(), engine.reference()).into_diagnostic()?;
    println!(
        "advice {}: {} {} to {}",
        advice.advice_reference, advice.amount, advice.currency, advice.beneficiary
    );

    engine.track_from_success();
    if let Some(info) = engine.selected_tracker_info() {
        let ribbon = resolve_ribbon(info);
        println!(
            "tracking {}: current stage {} (next: {})",
            info.txn_id,
            ribbon.current,
            ribbon.next.unwrap_or("-")
        );
        for row in resolve_timeline(info, engine.reference()) {
            println!("  [{}] {}", row.status.humanize(), row.stage);
        }
    }

    Ok(())
}
