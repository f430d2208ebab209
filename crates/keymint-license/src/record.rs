//! License data model and canonical serialization.
//!
//! The serialized record is the exact input to signing, so the JSON layout is
//! a wire contract: fixed field order (struct declaration order below), every
//! field present including zero/empty values, compact encoding, and product
//! order preserved verbatim from the request. Changing any of this invalidates
//! signatures for third-party verifiers.

use crate::error::LicenseResult;
use crate::id::LicenseId;
use serde::{Deserialize, Serialize};

/// A product entitlement inside a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product code identifier.
    #[serde(default)]
    pub code: String,
    /// Fallback date for perpetual-fallback licensing.
    #[serde(default)]
    pub fallback_date: String,
    /// Date the product is paid up to.
    #[serde(default)]
    pub paid_up_to: String,
    /// Whether this is an extended entitlement.
    #[serde(default)]
    pub extended: bool,
}

/// A caller-supplied license request.
///
/// Unknown JSON fields are ignored; missing fields default to empty/zero/false.
/// A field of the wrong type is a deserialization error surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRequest {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub licensee_name: String,
    #[serde(default)]
    pub assignee_name: String,
    #[serde(default)]
    pub assignee_email: String,
    #[serde(default)]
    pub license_restriction: String,
    #[serde(default)]
    pub metadata: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub grace_period_days: u32,
    #[serde(default)]
    pub check_concurrent_use: bool,
    #[serde(default)]
    pub auto_prolongated: bool,
    #[serde(default)]
    pub is_auto_prolongated: bool,
}

impl LicenseRequest {
    /// Attach a generated id, producing the record that gets signed.
    ///
    /// The id is assigned exactly once; [`LicenseRecord`] has no mutators.
    #[must_use]
    pub fn into_record(self, license_id: LicenseId) -> LicenseRecord {
        LicenseRecord {
            products: self.products,
            license_id,
            licensee_name: self.licensee_name,
            assignee_name: self.assignee_name,
            assignee_email: self.assignee_email,
            license_restriction: self.license_restriction,
            metadata: self.metadata,
            hash: self.hash,
            grace_period_days: self.grace_period_days,
            check_concurrent_use: self.check_concurrent_use,
            auto_prolongated: self.auto_prolongated,
            is_auto_prolongated: self.is_auto_prolongated,
        }
    }
}

/// A license request with its assigned id.
///
/// Field declaration order is the historical wire order and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub products: Vec<Product>,
    pub license_id: LicenseId,
    pub licensee_name: String,
    pub assignee_name: String,
    pub assignee_email: String,
    pub license_restriction: String,
    pub metadata: String,
    pub hash: String,
    pub grace_period_days: u32,
    pub check_concurrent_use: bool,
    pub auto_prolongated: bool,
    pub is_auto_prolongated: bool,
}

impl LicenseRecord {
    /// Canonical byte serialization of the record, the exact signing input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LicenseError::Serialization`] if JSON encoding fails.
    pub fn canonical_bytes(&self) -> LicenseResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// The assigned license id.
    #[must_use]
    pub fn license_id(&self) -> &LicenseId {
        &self.license_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_id() -> LicenseId {
        serde_json::from_str("\"ABCDEFGH12\"").unwrap()
    }

    fn sample_request() -> LicenseRequest {
        LicenseRequest {
            products: vec![
                Product {
                    code: "PROD1".into(),
                    fallback_date: "2099-12-31".into(),
                    paid_up_to: "2099-12-31".into(),
                    extended: false,
                },
                Product {
                    code: "PROD2".into(),
                    fallback_date: String::new(),
                    paid_up_to: "2030-01-01".into(),
                    extended: true,
                },
            ],
            licensee_name: "Acme".into(),
            assignee_name: "Road Runner".into(),
            assignee_email: "rr@acme.example".into(),
            grace_period_days: 30,
            ..Default::default()
        }
    }

    #[test]
    fn test_canonical_bytes_are_deterministic() {
        let a = sample_request().into_record(fixed_id());
        let b = sample_request().into_record(fixed_id());
        assert_eq!(a.canonical_bytes().unwrap(), b.canonical_bytes().unwrap());
    }

    #[test]
    fn test_canonical_layout_is_field_complete() {
        let record = LicenseRequest::default().into_record(fixed_id());
        let bytes = record.canonical_bytes().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            concat!(
                "{\"products\":[],\"licenseId\":\"ABCDEFGH12\",",
                "\"licenseeName\":\"\",\"assigneeName\":\"\",\"assigneeEmail\":\"\",",
                "\"licenseRestriction\":\"\",\"metadata\":\"\",\"hash\":\"\",",
                "\"gracePeriodDays\":0,\"checkConcurrentUse\":false,",
                "\"autoProlongated\":false,\"isAutoProlongated\":false}"
            )
        );
    }

    #[test]
    fn test_single_field_change_alters_bytes() {
        let base = sample_request().into_record(fixed_id());
        let mut other = sample_request();
        other.assignee_email = "coyote@acme.example".into();
        let other = other.into_record(fixed_id());
        assert_ne!(
            base.canonical_bytes().unwrap(),
            other.canonical_bytes().unwrap()
        );
    }

    #[test]
    fn test_product_order_is_preserved() {
        let forward = sample_request().into_record(fixed_id());
        let mut reversed = sample_request();
        reversed.products.reverse();
        let reversed = reversed.into_record(fixed_id());
        assert_ne!(
            forward.canonical_bytes().unwrap(),
            reversed.canonical_bytes().unwrap()
        );
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: LicenseRequest = serde_json::from_str(
            r#"{"licenseeName":"Acme","somethingElse":true,"products":[]}"#,
        )
        .unwrap();
        assert_eq!(request.licensee_name, "Acme");
    }

    #[test]
    fn test_request_missing_fields_default() {
        let request: LicenseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, LicenseRequest::default());
    }

    #[test]
    fn test_request_rejects_wrong_types() {
        let err = serde_json::from_str::<LicenseRequest>(r#"{"gracePeriodDays":"30"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = sample_request().into_record(fixed_id());
        let bytes = record.canonical_bytes().unwrap();
        let decoded: LicenseRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, record);
    }
}
