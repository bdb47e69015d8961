//! Time-delayed, in-memory stand-ins for the backend calls: sanctions/GPI
//! screening, document OCR and remitter notification dispatch. Each resolves
//! after a fixed latency and never fails; cancellation is dropping the
//! pending future before the delay elapses.

use crate::domain::beneficiary::Beneficiary;
use crate::domain::draft::{
    AdvancedDetails, ChargeType, GpiDetails, InstructionPriority, LrsAdvanced, OrmType,
    PaymentDraft, Rail, ServiceLevel,
};
use crate::domain::ports::{NotificationChannel, OcrService, PaymentAlert, ScreeningService};
use crate::error::{HubError, Result};
use crate::infrastructure::reference::ReferenceStore;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

pub const SCREENING_DELAY: Duration = Duration::from_millis(2000);
pub const OCR_SCAN_DELAY: Duration = Duration::from_millis(3000);

const UETR_PREFIX: &str = "a2b7c1d8-4421-49f9-91c0-";
const REMITTER_LEGAL_ADDRESS: &str = "Apex Global Industries, India";
const BENEFICIARY_ADDRESS_FALLBACK: &str = "Global Financial Center, USA";

/// The customer the OCR extraction always resolves to.
const OCR_CIF_ID: &str = "CIF1002";

fn new_uetr() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("{UETR_PREFIX}{suffix}")
}

/// Trailing digits of the current epoch millis, used to salt reference
/// numbers the way the portal does.
pub fn ref_no_suffix() -> String {
    format!("{:04}", Utc::now().timestamp_millis().rem_euclid(10_000))
}

pub struct SimulatedScreening {
    reference: Arc<ReferenceStore>,
}

impl SimulatedScreening {
    pub fn new(reference: Arc<ReferenceStore>) -> Self {
        Self { reference }
    }
}

#[async_trait]
impl ScreeningService for SimulatedScreening {
    async fn screen(&self, beneficiary: &Beneficiary) -> Result<GpiDetails> {
        sleep(SCREENING_DELAY).await;

        let sanction = self
            .reference
            .sanctions_for(&beneficiary.name)
            .ok_or_else(|| HubError::Lookup("sanctions catalog is empty".to_string()))?;
        let routing = self
            .reference
            .default_routing()
            .ok_or_else(|| HubError::Lookup("no GPI routing path configured".to_string()))?;

        Ok(GpiDetails {
            uetr: new_uetr(),
            gpi_service_level: ServiceLevel::Urgent,
            instruction_priority: InstructionPriority::High,
            compliance_status: sanction.sanctions_status,
            sanctions_screening_ref: sanction.screening_ref.clone(),
            screening_timestamp: Utc::now(),
            intermediary_bic: routing.intermediary_bic.clone(),
            routing_bic: routing.routing_bic.clone(),
            gpi_transfer_type: routing.transfer_type,
            remitter_legal_address: REMITTER_LEGAL_ADDRESS.to_string(),
            beneficiary_legal_address: beneficiary
                .address
                .clone()
                .unwrap_or_else(|| BENEFICIARY_ADDRESS_FALLBACK.to_string()),
            compliance_reason_code: None,
            nostro_path: routing.nostro_path.clone(),
        })
    }
}

pub struct SimulatedOcr {
    reference: Arc<ReferenceStore>,
}

impl SimulatedOcr {
    pub fn new(reference: Arc<ReferenceStore>) -> Self {
        Self { reference }
    }
}

#[async_trait]
impl OcrService for SimulatedOcr {
    /// "Extracts" a fixed LRS instruction: the scan always resolves to
    /// customer CIF1002 and its saved beneficiary.
    async fn extract(&self) -> Result<PaymentDraft> {
        sleep(OCR_SCAN_DELAY).await;

        let profile = self.reference.customer_by_cif(OCR_CIF_ID).cloned();
        let beneficiary = self.reference.beneficiary_by_cif(OCR_CIF_ID).cloned();

        Ok(PaymentDraft {
            beneficiary,
            amount: dec!(35000),
            rail: Some(Rail::Orm(OrmType::Lrs)),
            purpose: "S0007 - Family Support".to_string(),
            charge_type: ChargeType::Sha,
            advanced: Some(AdvancedDetails::Lrs(LrsAdvanced {
                unique_ref_no: format!("AI-OCR-LRS-{}", ref_no_suffix()),
                product_category: "LRS - AI Discovery Mode".to_string(),
                purpose_desc: "S0007 - Family Support".to_string(),
                source_of_funds: "Investment Gains".to_string(),
                remittance_ccy: "USD".to_string(),
                pan_no: Some("AAACZ7733K".to_string()),
                lrs_utilized: Some("$25,000 / $250,000".to_string()),
                last_txn_ref: None,
                portal_ref: None,
                ocr_filled: true,
                manual_entry: false,
            })),
            cif_id: Some(OCR_CIF_ID.to_string()),
            customer_profile: profile,
            gpi_details: None,
        })
    }
}

/// Notification dispatch that writes the rendered push/SMS/WhatsApp messages
/// to the log, standing in for the real alerting gateway.
pub struct TracingNotifier {
    reference: Arc<ReferenceStore>,
}

impl TracingNotifier {
    pub fn new(reference: Arc<ReferenceStore>) -> Self {
        Self { reference }
    }

    fn render(template: &str, alert: &PaymentAlert) -> String {
        template
            .replace("{{id}}", &alert.reference)
            .replace(
                "{{type}}",
                alert.orm_type.map(|t| t.label()).unwrap_or("N/A"),
            )
            .replace("{{amount}}", &alert.amount.to_string())
            .replace("{{ccy}}", &alert.currency)
    }
}

#[async_trait]
impl NotificationChannel for TracingNotifier {
    async fn dispatch(&self, alert: &PaymentAlert) -> Result<()> {
        let templates = self.reference.notification_templates();
        tracing::info!(channel = "push", "{}", Self::render(&templates.push, alert));
        tracing::info!(channel = "sms", "{}", Self::render(&templates.sms, alert));
        tracing::info!(
            channel = "whatsapp",
            "{}",
            Self::render(&templates.whatsapp, alert)
        );
        Ok(())
    }
}
