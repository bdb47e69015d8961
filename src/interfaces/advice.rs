//! Payment advice: the shareable summary document offered on the success and
//! tracking screens.

use crate::domain::draft::PaymentDraft;
use crate::domain::tracking::TrackingInfo;
use crate::error::{HubError, Result};
use crate::infrastructure::reference::ReferenceStore;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::time::sleep;

/// Window during which the "advice downloaded / shared" feedback stays up.
pub const ACTION_FEEDBACK_DELAY: Duration = Duration::from_millis(2500);

/// System-generated advice summary. Header fields come from the advice
/// template in reference data; the payment fields from the draft or tracker
/// the advice was raised for.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentAdvice {
    pub title: String,
    pub note: String,
    pub advice_reference: String,
    pub value_date: String,
    pub payment_reference: String,
    pub beneficiary: String,
    pub amount: Decimal,
    pub currency: String,
    pub uetr: Option<String>,
}

impl PaymentAdvice {
    /// Advice for a just-submitted draft. Requires a selected beneficiary;
    /// drafts never reach the success screen without one in practice.
    pub fn from_draft(draft: &PaymentDraft, reference: &ReferenceStore) -> Result<Self> {
        let beneficiary = draft
            .beneficiary
            .as_ref()
            .ok_or_else(|| HubError::Validation("draft has no beneficiary".to_string()))?;
        let template = reference.advice_template();
        Ok(Self {
            title: template.title.clone(),
            note: template.note.clone(),
            advice_reference: template.reference.clone(),
            value_date: template.value_date.clone(),
            payment_reference: draft
                .advanced
                .as_ref()
                .map(|a| a.unique_ref_no().to_string())
                .unwrap_or_default(),
            beneficiary: beneficiary.name.clone(),
            amount: draft.amount,
            currency: draft
                .advanced
                .as_ref()
                .map(|a| a.remittance_ccy().to_string())
                .unwrap_or_else(|| "USD".to_string()),
            uetr: draft.gpi_details.as_ref().map(|g| g.uetr.clone()),
        })
    }

    /// Advice for a tracked payment.
    pub fn from_tracker(info: &TrackingInfo, reference: &ReferenceStore) -> Self {
        let template = reference.advice_template();
        Self {
            title: template.title.clone(),
            note: template.note.clone(),
            advice_reference: template.reference.clone(),
            value_date: template.value_date.clone(),
            payment_reference: info.txn_id.clone(),
            beneficiary: info.beneficiary.clone(),
            amount: info.amount,
            currency: info.currency.clone(),
            uetr: info.uetr.clone(),
        }
    }
}

/// Waits out the transient advice-action feedback before it is dismissed.
pub async fn action_feedback() {
    sleep(ACTION_FEEDBACK_DELAY).await;
}
