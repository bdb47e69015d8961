//! The screen flow controller: a state machine over the remittance screens
//! that owns the in-flight [`PaymentDraft`] and the enrichment service ports.
//!
//! The controller itself never rejects a transition; validation lives on the
//! screen that submits (amount parsing on the payment form, field checks on
//! the add-beneficiary form, credentials on login).

use crate::application::auth;
use crate::domain::beneficiary::{NewBeneficiary, SessionBeneficiary};
use crate::domain::draft::{
    AdvancedDetails, LrsAdvanced, OrmType, PaymentDraft, Rail, TradeAdvanceAdvanced,
    TradeDirectAdvanced,
};
use crate::domain::ports::{
    NotificationChannelBox, OcrServiceBox, PaymentAlert, ScreeningServiceBox,
};
use crate::domain::tracking::{TrackingInfo, TransactionRecord};
use crate::error::{HubError, Result};
use crate::infrastructure::reference::ReferenceStore;
use chrono::Utc;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated biometric authorization hold on the confirmation screen.
pub const AUTHORIZE_DELAY: Duration = Duration::from_millis(1500);
/// Notification overlay shown after authorization before landing on success.
pub const NOTIFY_OVERLAY_DELAY: Duration = Duration::from_millis(2500);
/// Pause on the completed-scan summary before auto-advancing to the form.
pub const OCR_REVIEW_DELAY: Duration = Duration::from_millis(800);
/// Transient toast auto-dismiss window.
pub const TOAST_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// The tracker the success screen's "Track Payment" shortcut jumps to.
const SUCCESS_DEMO_TRACKER: &str = "TXN9001";

const PAY_AGAIN_PURPOSE: &str = "S0007 - Family Support";
const MANUAL_LAST_TXN_REF: &str = "TRN-99221-X";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Home,
    Hub,
    SelectCustomer,
    PaymentForm,
    Confirmation,
    Success,
    History,
    Track,
    AddBeneficiary,
    Profile,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "HOME",
            Screen::Hub => "HUB",
            Screen::SelectCustomer => "SELECT_CUSTOMER",
            Screen::PaymentForm => "PAYMENT_FORM",
            Screen::Confirmation => "CONFIRMATION",
            Screen::Success => "SUCCESS",
            Screen::History => "HISTORY",
            Screen::Track => "TRACK",
            Screen::AddBeneficiary => "ADD_BENEFICIARY",
            Screen::Profile => "PROFILE",
        };
        f.write_str(name)
    }
}

/// Shortcut tiles on the home screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QuickAction {
    MakePayment,
    PayAgain,
    TrackPayment,
    AddBeneficiary,
}

/// Bottom navigation targets, reachable from any screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavTab {
    Home,
    Track,
    History,
    Profile,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OcrStatus {
    #[default]
    Idle,
    Scanning,
    Done,
}

/// Owns the screen state, the draft under construction and the service ports.
/// One instance per logged-in session.
pub struct FlowEngine {
    reference: Arc<ReferenceStore>,
    screening: ScreeningServiceBox,
    ocr: OcrServiceBox,
    notifier: NotificationChannelBox,
    screen: Screen,
    logged_in: bool,
    draft: PaymentDraft,
    pay_again_mode: bool,
    selected_tracker: Option<String>,
    ocr_status: OcrStatus,
    toast: Option<String>,
    session_beneficiaries: Vec<SessionBeneficiary>,
}

impl FlowEngine {
    pub fn new(
        reference: Arc<ReferenceStore>,
        screening: ScreeningServiceBox,
        ocr: OcrServiceBox,
        notifier: NotificationChannelBox,
    ) -> Self {
        let session_beneficiaries = reference.session_seed_beneficiaries();
        Self {
            reference,
            screening,
            ocr,
            notifier,
            screen: Screen::Home,
            logged_in: false,
            draft: PaymentDraft::new(),
            pay_again_mode: false,
            selected_tracker: None,
            ocr_status: OcrStatus::Idle,
            toast: None,
            session_beneficiaries,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn draft(&self) -> &PaymentDraft {
        &self.draft
    }

    pub fn pay_again_mode(&self) -> bool {
        self.pay_again_mode
    }

    pub fn ocr_status(&self) -> OcrStatus {
        self.ocr_status
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    pub fn reference(&self) -> &ReferenceStore {
        &self.reference
    }

    pub fn session_beneficiaries(&self) -> &[SessionBeneficiary] {
        &self.session_beneficiaries
    }

    pub fn selected_tracker(&self) -> Option<&str> {
        self.selected_tracker.as_deref()
    }

    pub fn selected_tracker_info(&self) -> Option<&TrackingInfo> {
        self.selected_tracker
            .as_deref()
            .and_then(|id| self.reference.tracker(id))
    }

    fn transition(&mut self, to: Screen) {
        tracing::debug!(from = %self.screen, to = %to, "screen transition");
        self.screen = to;
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        auth::verify(&self.reference, username, password)?;
        self.logged_in = true;
        self.transition(Screen::Home);
        tracing::info!(username, "login");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.reset_flow();
        tracing::info!("logout");
    }

    /// Discards the in-flight draft and returns to the home screen. Session
    /// beneficiaries survive; they are scoped to the login, not the draft.
    pub fn reset_flow(&mut self) {
        self.draft = PaymentDraft::new();
        self.pay_again_mode = false;
        self.selected_tracker = None;
        self.ocr_status = OcrStatus::Idle;
        self.toast = None;
        self.transition(Screen::Home);
    }

    pub fn start_payment(&mut self) {
        self.transition(Screen::Hub);
    }

    pub fn quick_action(&mut self, action: QuickAction) {
        match action {
            QuickAction::MakePayment => self.transition(Screen::Hub),
            QuickAction::PayAgain => {
                self.pay_again_mode = true;
                self.transition(Screen::History);
            }
            QuickAction::TrackPayment => {
                self.selected_tracker = None;
                self.transition(Screen::Track);
            }
            QuickAction::AddBeneficiary => self.transition(Screen::AddBeneficiary),
        }
    }

    pub fn navigate(&mut self, tab: NavTab) {
        self.pay_again_mode = false;
        match tab {
            NavTab::Home => self.transition(Screen::Home),
            NavTab::Track => {
                self.selected_tracker = None;
                self.transition(Screen::Track);
            }
            NavTab::History => self.transition(Screen::History),
            NavTab::Profile => self.transition(Screen::Profile),
        }
    }

    /// Hardware back. Screens not listed keep the current screen; home has
    /// nowhere further back to go.
    pub fn go_back(&mut self) {
        match self.screen {
            Screen::Hub => self.transition(Screen::Home),
            Screen::SelectCustomer => self.transition(Screen::Hub),
            Screen::PaymentForm => {
                self.pay_again_mode = false;
                self.transition(Screen::Hub);
            }
            Screen::Confirmation => self.transition(Screen::PaymentForm),
            Screen::History => {
                self.pay_again_mode = false;
                self.transition(Screen::Home);
            }
            Screen::Track => self.transition(Screen::Home),
            Screen::AddBeneficiary => self.transition(Screen::Home),
            Screen::Home | Screen::Success | Screen::Profile => {}
        }
    }

    /// Manual construction path, step one: the chosen product sub-type starts
    /// a fresh draft on the ORM rail.
    pub fn select_orm_manual(&mut self, orm_type: OrmType) {
        self.draft = PaymentDraft {
            rail: Some(Rail::Orm(orm_type)),
            ..PaymentDraft::new()
        };
        self.transition(Screen::SelectCustomer);
    }

    /// Manual construction path, step two: picking the remitting entity fills
    /// the draft with that customer's usual counterparty and product-specific
    /// form defaults.
    pub fn select_customer(&mut self, cif_id: &str) -> Result<()> {
        let orm_type = self.draft.orm_type().ok_or_else(|| {
            HubError::Validation("select a remittance type before choosing a customer".to_string())
        })?;
        let customer = self
            .reference
            .customer_by_cif(cif_id)
            .ok_or_else(|| HubError::Lookup(format!("unknown customer {cif_id}")))?
            .clone();
        let beneficiary = self.reference.beneficiary_by_cif(cif_id).cloned();
        let amount = beneficiary
            .as_ref()
            .map(|b| b.avg_transfer_amount)
            .unwrap_or_else(|| Decimal::from(15000));

        let unique_ref_no = format!("ORM-MNL-{}", ref_suffix());
        let advanced = match orm_type {
            OrmType::Lrs => AdvancedDetails::Lrs(LrsAdvanced {
                unique_ref_no,
                product_category: "LRS - Global Remit".to_string(),
                purpose_desc: "S0007 - Education Support".to_string(),
                source_of_funds: "Savings / Salary".to_string(),
                remittance_ccy: "USD".to_string(),
                last_txn_ref: Some(MANUAL_LAST_TXN_REF.to_string()),
                manual_entry: true,
                ..LrsAdvanced::default()
            }),
            OrmType::TradeDirect => AdvancedDetails::TradeDirect(TradeDirectAdvanced {
                unique_ref_no,
                product_category: "TRADE - Inward Settlement".to_string(),
                purpose_desc: "S0101 - Commercial Import".to_string(),
                source_of_funds: "Current Account".to_string(),
                remittance_ccy: "USD".to_string(),
                last_txn_ref: Some(MANUAL_LAST_TXN_REF.to_string()),
                manual_entry: true,
                ..TradeDirectAdvanced::default()
            }),
            OrmType::TradeAdvance => AdvancedDetails::TradeAdvance(TradeAdvanceAdvanced {
                unique_ref_no,
                product_category: "TRADE - Advance Payment".to_string(),
                purpose_desc: "S0102 - Trade Advance".to_string(),
                source_of_funds: "Corporate Funds".to_string(),
                remittance_ccy: "USD".to_string(),
                last_txn_ref: Some(MANUAL_LAST_TXN_REF.to_string()),
                manual_entry: true,
            }),
        };

        self.draft.purpose = advanced.purpose_desc().to_string();
        self.draft.cif_id = Some(customer.cif_id.clone());
        self.draft.customer_profile = Some(customer);
        self.draft.beneficiary = beneficiary;
        self.draft.amount = amount;
        self.draft.advanced = Some(advanced);
        self.transition(Screen::PaymentForm);
        Ok(())
    }

    /// Resolves a CIF typed into the "Add Entity" dialog. Does not touch the
    /// draft; the caller decides whether to select the resulting profile.
    pub fn lookup_customer(&self, cif_id: &str) -> Result<crate::domain::beneficiary::CustomerProfile> {
        self.reference.new_customer(cif_id)
    }

    /// OCR construction path: scans the uploaded document, replaces the draft
    /// with the extracted instruction, then auto-advances to the payment form
    /// after a short review pause. Dropping the future mid-scan leaves the
    /// draft untouched.
    pub async fn run_ocr(&mut self) -> Result<()> {
        self.ocr_status = OcrStatus::Scanning;
        let extracted = self.ocr.extract().await?;
        self.draft = extracted;
        self.ocr_status = OcrStatus::Done;
        sleep(OCR_REVIEW_DELAY).await;
        self.transition(Screen::PaymentForm);
        Ok(())
    }

    /// Pay-again construction path: rebuilds a draft from a past transaction.
    /// The replay always re-enters the ORM flow; trade-settlement history maps
    /// to Trade Direct, everything else to LRS.
    pub fn pay_again_select(&mut self, txn_id: &str) -> Result<()> {
        let txn = self
            .reference
            .transaction(txn_id)
            .ok_or_else(|| HubError::Lookup(format!("unknown transaction {txn_id}")))?
            .clone();

        let orm_type = if txn.intelligence_tags.iter().any(|t| t == "trade_settlement") {
            OrmType::TradeDirect
        } else {
            OrmType::Lrs
        };
        let beneficiary = self
            .reference
            .beneficiary_by_id(&txn.beneficiary_id)
            .or_else(|| self.reference.first_beneficiary())
            .cloned();
        let customer = beneficiary
            .as_ref()
            .and_then(|b| b.cif_id.as_deref())
            .and_then(|cif| self.reference.customer_by_cif(cif))
            .or_else(|| self.reference.first_customer())
            .cloned();

        let unique_ref_no = format!("PAY-AGN-{}", ref_suffix());
        let advanced = match orm_type {
            OrmType::TradeDirect => AdvancedDetails::TradeDirect(TradeDirectAdvanced {
                unique_ref_no,
                product_category: "TRADE - Settlement".to_string(),
                purpose_desc: "S0101 - Commercial Import".to_string(),
                source_of_funds: "Current Account".to_string(),
                remittance_ccy: txn.currency.clone(),
                last_txn_ref: Some(txn.txn_id.clone()),
                manual_entry: true,
                ..TradeDirectAdvanced::default()
            }),
            _ => AdvancedDetails::Lrs(LrsAdvanced {
                unique_ref_no,
                product_category: "LRS - Global Remit".to_string(),
                purpose_desc: "S0007 - Family Maintenance".to_string(),
                source_of_funds: "Savings / Salary".to_string(),
                remittance_ccy: txn.currency.clone(),
                last_txn_ref: Some(txn.txn_id.clone()),
                manual_entry: true,
                ..LrsAdvanced::default()
            }),
        };

        self.draft = PaymentDraft {
            rail: Some(Rail::Orm(orm_type)),
            amount: txn.amount,
            purpose: PAY_AGAIN_PURPOSE.to_string(),
            cif_id: customer.as_ref().map(|c| c.cif_id.clone()),
            customer_profile: customer,
            beneficiary,
            advanced: Some(advanced),
            ..PaymentDraft::new()
        };
        self.pay_again_mode = false;
        self.transition(Screen::PaymentForm);
        Ok(())
    }

    /// Runs GPI/sanctions enrichment for the draft if it qualifies: ORM rail,
    /// beneficiary selected, no details yet. Returns whether details were
    /// attached; re-entry while details exist is a no-op.
    pub async fn ensure_gpi(&mut self) -> Result<bool> {
        if !self.draft.is_orm() || self.draft.gpi_details.is_some() {
            return Ok(false);
        }
        let Some(beneficiary) = self.draft.beneficiary.clone() else {
            return Ok(false);
        };
        let details = self.screening.screen(&beneficiary).await?;
        Ok(self.draft.attach_gpi(details))
    }

    /// Amount field input. An empty field means zero; anything else must parse
    /// as a decimal number.
    pub fn set_amount(&mut self, raw: &str) -> Result<()> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.draft.amount = Decimal::ZERO;
            return Ok(());
        }
        self.draft.amount = trimmed
            .parse::<Decimal>()
            .map_err(|_| HubError::Validation(format!("invalid amount: {trimmed}")))?;
        Ok(())
    }

    /// Payment form submit. Only the amount is validated here.
    pub fn confirm_instruction(&mut self) -> Result<()> {
        if !self.draft.amount_valid() {
            return Err(HubError::Validation(
                "amount must be a non-negative number".to_string(),
            ));
        }
        self.transition(Screen::Confirmation);
        Ok(())
    }

    /// Confirmation screen submit: simulated biometric hold, then the
    /// notification overlay while the remitter alerts go out, then success.
    pub async fn authorize(&mut self) -> Result<()> {
        sleep(AUTHORIZE_DELAY).await;
        let alert = PaymentAlert {
            reference: self
                .draft
                .advanced
                .as_ref()
                .map(|a| a.unique_ref_no().to_string())
                .unwrap_or_else(|| format!("ORM-{}", ref_suffix())),
            orm_type: self.draft.orm_type(),
            amount: self.draft.amount,
            currency: self
                .draft
                .advanced
                .as_ref()
                .map(|a| a.remittance_ccy().to_string())
                .unwrap_or_else(|| "USD".to_string()),
        };
        self.notifier.dispatch(&alert).await?;
        sleep(NOTIFY_OVERLAY_DELAY).await;
        tracing::info!(reference = %alert.reference, amount = %alert.amount, "payment authorized");
        self.transition(Screen::Success);
        Ok(())
    }

    /// Success screen "Track Payment": jumps to the demo tracker.
    pub fn track_from_success(&mut self) {
        self.selected_tracker = Some(SUCCESS_DEMO_TRACKER.to_string());
        self.transition(Screen::Track);
    }

    pub fn view_tracker(&mut self, txn_id: &str) {
        self.selected_tracker = Some(txn_id.to_string());
        self.transition(Screen::Track);
    }

    /// Add-beneficiary form submit. Field failures surface as one error
    /// carrying every issue; success appends to the session list, raises a
    /// toast and returns home.
    pub fn save_beneficiary(&mut self, form: NewBeneficiary) -> Result<String> {
        let issues = form.validate();
        if !issues.is_empty() {
            return Err(HubError::BeneficiaryForm(issues));
        }
        let id = format!("BEN{}", ref_suffix());
        self.session_beneficiaries
            .push(form.into_session_beneficiary(id.clone()));
        self.toast = Some("Beneficiary added successfully".to_string());
        self.transition(Screen::Home);
        Ok(id)
    }

    /// Waits out the toast auto-dismiss window, then clears it.
    pub async fn expire_toast(&mut self) {
        sleep(TOAST_DISMISS_DELAY).await;
        self.toast = None;
    }

    /// Soft warning for a payment-form field: the historical exception that
    /// hit this field before, if the catalog knows one.
    pub fn field_alert(&self, field: &str) -> Option<&crate::domain::tracking::ExceptionItem> {
        self.reference.exception_for_field(field)
    }

    /// Case-insensitive substring search over beneficiary names in history.
    pub fn history_search(&self, query: &str) -> Vec<&TransactionRecord> {
        let needle = query.to_lowercase();
        self.reference
            .transactions()
            .iter()
            .filter(|t| t.beneficiary_name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Last four digits of the current epoch millis, used to salt generated
/// reference numbers.
fn ref_suffix() -> String {
    format!("{:04}", Utc::now().timestamp_millis().rem_euclid(10_000))
}
