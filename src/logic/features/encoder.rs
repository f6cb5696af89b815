//! Feature Encoder
//!
//! Pure mapping from the raw form fields onto the model's feature space.
//! Every schema column starts at 0.0 and anything the encoder does not set
//! stays there, so categorical levels the form cannot produce are silently
//! zeroed. That default-fill is a documented policy, not an accident;
//! tests depend on it.

use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;
use super::vector::FeatureVector;
use crate::constants::{
    ASSUMED_NO_WEIGHT, MONTHLY_CHARGES_MAX, MONTHLY_CHARGES_MIN, ONE_HOT_ACTIVE,
    PHONE_SERVICE_NEUTRAL, SOFT_NO, SOFT_YES, TENURE_MAX, TENURE_MIN,
};
use crate::error::{AppError, AppResult};

// ============================================================================
// RAW INPUT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    /// The model was trained on 0.7/0.3, not hard {0,1}.
    fn soft_value(self) -> f64 {
        match self {
            YesNo::Yes => SOFT_YES,
            YesNo::No => SOFT_NO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contract {
    MonthToMonth,
    OneYear,
    TwoYear,
}

impl Contract {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contract::MonthToMonth => "Month-to-month",
            Contract::OneYear => "One year",
            Contract::TwoYear => "Two year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    Dsl,
    FiberOptic,
    No,
}

impl InternetService {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternetService::Dsl => "DSL",
            InternetService::FiberOptic => "Fiber optic",
            InternetService::No => "No",
        }
    }
}

/// One prediction request worth of customer attributes. Created per request,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInput {
    pub tenure: u32,
    pub monthly_charges: f64,
    pub gender: Gender,
    pub senior_citizen: YesNo,
    pub partner: YesNo,
    pub dependents: YesNo,
    pub contract: Contract,
    pub internet_service: InternetService,
    pub paperless_billing: YesNo,
}

impl RawInput {
    /// Boundary check for the declared input domains. The form rejects and
    /// re-prompts on error; the encoder itself only clamps.
    pub fn validate(&self) -> AppResult<()> {
        if !(TENURE_MIN..=TENURE_MAX).contains(&self.tenure) {
            return Err(AppError::InvalidInput(format!(
                "tenure {} months is outside {}..{}",
                self.tenure, TENURE_MIN, TENURE_MAX
            )));
        }
        if !self.monthly_charges.is_finite()
            || !(MONTHLY_CHARGES_MIN..=MONTHLY_CHARGES_MAX).contains(&self.monthly_charges)
        {
            return Err(AppError::InvalidInput(format!(
                "monthly charges {} is outside {:.0}..{:.0}",
                self.monthly_charges, MONTHLY_CHARGES_MIN, MONTHLY_CHARGES_MAX
            )));
        }
        Ok(())
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Composite one-hot name: `{family}_{level}` with '-' removed from the
/// level. Case and spaces are untouched ("Month-to-month" → "Monthtomonth").
fn one_hot_name(family: &str, level: &str) -> String {
    format!("{}_{}", family, level.replace('-', ""))
}

fn set_or_skip(vector: &mut FeatureVector, schema: &FeatureSchema, name: &str, value: f64) {
    if !vector.set_by_name(schema, name, value) {
        log::warn!("Feature '{}' not in model schema, skipped", name);
    }
}

fn clamp_charges(value: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("Non-finite monthly charges, using {}", MONTHLY_CHARGES_MIN);
        return MONTHLY_CHARGES_MIN;
    }
    let clamped = value.clamp(MONTHLY_CHARGES_MIN, MONTHLY_CHARGES_MAX);
    if clamped != value {
        log::warn!("Monthly charges {} outside declared domain, clamped", value);
    }
    clamped
}

/// Encode raw attributes into the model's feature order. Deterministic and
/// pure: the same input against the same schema always produces the same
/// vector.
pub fn encode(raw: &RawInput, schema: &FeatureSchema) -> FeatureVector {
    let mut vector = FeatureVector::zeroed(schema);

    let tenure = f64::from(raw.tenure.clamp(TENURE_MIN, TENURE_MAX));
    if tenure != f64::from(raw.tenure) {
        log::warn!("Tenure {} outside declared domain, clamped", raw.tenure);
    }
    let monthly_charges = clamp_charges(raw.monthly_charges);

    // Numeric features, log-scaled to keep skewed magnitudes comparable to
    // the soft encodings below
    set_or_skip(&mut vector, schema, "tenure", tenure.ln_1p());
    set_or_skip(&mut vector, schema, "MonthlyCharges", monthly_charges.ln_1p());
    set_or_skip(
        &mut vector,
        schema,
        "TotalCharges",
        (tenure * monthly_charges).ln_1p(),
    );

    // Pseudo-binary features
    set_or_skip(&mut vector, schema, "SeniorCitizen", raw.senior_citizen.soft_value());
    set_or_skip(&mut vector, schema, "Partner", raw.partner.soft_value());
    set_or_skip(&mut vector, schema, "Dependents", raw.dependents.soft_value());
    set_or_skip(
        &mut vector,
        schema,
        "PaperlessBilling",
        raw.paperless_billing.soft_value(),
    );
    // No form control exists for phone service
    set_or_skip(&mut vector, schema, "PhoneService", PHONE_SERVICE_NEUTRAL);

    // Selected categorical level per family
    for (family, level) in [
        ("gender", raw.gender.as_str()),
        ("Contract", raw.contract.as_str()),
        ("InternetService", raw.internet_service.as_str()),
    ] {
        set_or_skip(&mut vector, schema, &one_hot_name(family, level), ONE_HOT_ACTIVE);
    }

    // The form collects nothing for these; assumed majority class
    set_or_skip(&mut vector, schema, "MultipleLines_No", ASSUMED_NO_WEIGHT);
    set_or_skip(&mut vector, schema, "OnlineSecurity_No", ASSUMED_NO_WEIGHT);

    vector
}
