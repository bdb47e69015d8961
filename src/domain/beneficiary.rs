use crate::domain::draft::RailKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Saved payee record. Immutable reference data; beneficiaries added during a
/// session live in a separate session-local list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Beneficiary {
    pub beneficiary_id: String,
    pub name: String,
    pub account_number: String,
    pub ifsc_or_bic: String,
    pub bank_name: String,
    pub country: String,
    pub preferred_payment_mode: RailKind,
    pub last_successful_mode: RailKind,
    pub avg_transfer_amount: Decimal,
    pub risk_score: u32,
    #[serde(default)]
    pub discrepancy_patterns: Vec<String>,
    pub cif_id: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub lei: Option<String>,
    pub lei_expiry: Option<String>,
}

#[cfg(test)]
impl Beneficiary {
    pub fn stub(id: &str, name: &str) -> Self {
        Self {
            beneficiary_id: id.to_string(),
            name: name.to_string(),
            account_number: "US098712345678".to_string(),
            ifsc_or_bic: "CITIUS33XXX".to_string(),
            bank_name: "Citibank New York".to_string(),
            country: "USA".to_string(),
            preferred_payment_mode: RailKind::Orm,
            last_successful_mode: RailKind::Orm,
            avg_transfer_amount: Decimal::ZERO,
            risk_score: 10,
            discrepancy_patterns: vec![],
            cif_id: None,
            email: None,
            mobile: None,
            address: None,
            lei: None,
            lei_expiry: None,
        }
    }
}

/// Legal entity (CIF) on whose behalf a payment is made. Read-only.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CustomerProfile {
    pub cif_id: String,
    pub customer_name: String,
    pub primary_account_number: String,
    pub available_balance: Decimal,
    pub debit_account_number: String,
    pub debit_account_balance: Decimal,
    pub remitter_name: String,
    pub contact_number: String,
    pub email: String,
    pub contact_person: String,
    pub priority_processing: String,
    pub address: String,
    pub pan_no: String,
    pub ie_ref_no: String,
    pub deferral_status: String,
    pub deferral_reason: String,
    pub deferral_due_date: String,
}

/// Beneficiary saved during this session via the add-beneficiary flow, or
/// seeded from reference data. Not wired into the active draft; available for
/// later selection only.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SessionBeneficiary {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub bank_code: String,
    pub bank_name: String,
    pub country: String,
    pub preferred_mode: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// One field-level validation failure from the add-beneficiary form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// Input collected by the add-beneficiary form.
#[derive(Debug, Default, Clone)]
pub struct NewBeneficiary {
    pub name: String,
    pub entity_type: String,
    pub account_number: String,
    pub confirm_account_number: String,
    pub bank_name: String,
    pub ifsc: String,
    pub bic: String,
    pub email: String,
    pub mobile: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
    pub preferred_mode: String,
    pub nickname: String,
}

impl NewBeneficiary {
    pub fn is_india(&self) -> bool {
        self.country == "India"
    }

    /// Field-level validation. Name and account number are required, the
    /// account number must match its confirmation, and the bank code rule
    /// depends on the country: India needs an exactly-11-character IFSC,
    /// everywhere else an 8- or 11-character BIC.
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.name.is_empty() {
            issues.push(FieldIssue {
                field: "name",
                message: "Name is required",
            });
        }
        if self.account_number.is_empty() {
            issues.push(FieldIssue {
                field: "accountNumber",
                message: "Account number is required",
            });
        }
        if self.account_number != self.confirm_account_number {
            issues.push(FieldIssue {
                field: "confirmAccountNumber",
                message: "Account numbers do not match",
            });
        }
        if self.is_india() {
            if self.ifsc.len() != 11 {
                issues.push(FieldIssue {
                    field: "ifsc",
                    message: "Valid 11-char IFSC required",
                });
            }
        } else if self.bic.len() != 8 && self.bic.len() != 11 {
            issues.push(FieldIssue {
                field: "bic",
                message: "Valid 8 or 11-char BIC required",
            });
        }
        issues
    }

    /// Converts the validated form into a session-list entry.
    pub fn into_session_beneficiary(self, id: String) -> SessionBeneficiary {
        let bank_code = if self.is_india() { self.ifsc } else { self.bic };
        SessionBeneficiary {
            id,
            name: self.name,
            account_number: self.account_number,
            bank_code,
            bank_name: self.bank_name,
            country: self.country,
            preferred_mode: self.preferred_mode,
            email: if self.email.is_empty() {
                None
            } else {
                Some(self.email)
            },
            mobile: if self.mobile.is_empty() {
                None
            } else {
                Some(self.mobile)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn india_form() -> NewBeneficiary {
        NewBeneficiary {
            name: "Rahul Enterprises".to_string(),
            account_number: "12345".to_string(),
            confirm_account_number: "12345".to_string(),
            bank_name: "ICICI Bank".to_string(),
            ifsc: "ICIC0001234".to_string(),
            country: "India".to_string(),
            preferred_mode: "RTGS".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_india_beneficiary() {
        assert!(india_form().validate().is_empty());
    }

    #[test]
    fn test_account_confirmation_mismatch() {
        let mut form = india_form();
        form.confirm_account_number = "12344".to_string();
        let issues = form.validate();
        assert!(issues.iter().any(|i| i.field == "confirmAccountNumber"));
    }

    #[test]
    fn test_ifsc_must_be_exactly_11_chars() {
        let mut form = india_form();
        form.ifsc = "ICIC001234".to_string(); // 10 chars
        assert!(form.validate().iter().any(|i| i.field == "ifsc"));

        form.ifsc = "ICIC0001234".to_string(); // 11 chars
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_bic_accepts_8_or_11_chars() {
        let mut form = india_form();
        form.country = "United States".to_string();
        form.ifsc = String::new();

        form.bic = "CITIUS33".to_string(); // 8
        assert!(form.validate().is_empty());

        form.bic = "CITIUS33XXX".to_string(); // 11
        assert!(form.validate().is_empty());

        form.bic = "CITIUS33X".to_string(); // 9
        assert!(form.validate().iter().any(|i| i.field == "bic"));
    }

    #[test]
    fn test_missing_name_and_account() {
        let form = NewBeneficiary {
            country: "India".to_string(),
            ifsc: "ICIC0001234".to_string(),
            ..Default::default()
        };
        let issues = form.validate();
        assert!(issues.iter().any(|i| i.field == "name"));
        assert!(issues.iter().any(|i| i.field == "accountNumber"));
    }

    #[test]
    fn test_into_session_beneficiary_picks_bank_code() {
        let ben = india_form().into_session_beneficiary("BEN0001".to_string());
        assert_eq!(ben.bank_code, "ICIC0001234");
        assert_eq!(ben.id, "BEN0001");
        assert!(ben.email.is_none());
    }
}
