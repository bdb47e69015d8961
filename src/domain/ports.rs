use crate::domain::beneficiary::Beneficiary;
use crate::domain::draft::{GpiDetails, OrmType, PaymentDraft};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Outgoing alert payload handed to the notification channel after a payment
/// is authorized.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentAlert {
    pub reference: String,
    pub orm_type: Option<OrmType>,
    pub amount: Decimal,
    pub currency: String,
}

/// Sanctions screening / GPI enrichment backend. The simulated implementation
/// resolves after a fixed latency and never fails.
#[async_trait]
pub trait ScreeningService: Send + Sync {
    async fn screen(&self, beneficiary: &Beneficiary) -> Result<GpiDetails>;
}

/// Document OCR backend. Produces a fully populated draft after extraction.
#[async_trait]
pub trait OcrService: Send + Sync {
    async fn extract(&self) -> Result<PaymentDraft>;
}

/// Remitter notification dispatch (push, SMS, WhatsApp).
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn dispatch(&self, alert: &PaymentAlert) -> Result<()>;
}

pub type ScreeningServiceBox = Box<dyn ScreeningService>;
pub type OcrServiceBox = Box<dyn OcrService>;
pub type NotificationChannelBox = Box<dyn NotificationChannel>;
