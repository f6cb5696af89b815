//! Encoder Tests
//!
//! Exercises the construction policy end to end against a realistic schema:
//! exact key coverage, default-fill, soft encodings, one-hot composition.

#[cfg(test)]
mod encoder_tests {
    use approx::assert_relative_eq;

    use crate::constants::{
        ASSUMED_NO_WEIGHT, ONE_HOT_ACTIVE, PHONE_SERVICE_NEUTRAL, SOFT_NO, SOFT_YES,
    };
    use crate::logic::features::encoder::{
        encode, Contract, Gender, InternetService, RawInput, YesNo,
    };
    use crate::logic::features::schema::FeatureSchema;

    /// Schema shaped like the shipped artifact, including one feature
    /// (`TechSupport_No`) the encoder never sets.
    fn demo_schema() -> FeatureSchema {
        FeatureSchema::from_names(
            [
                "tenure",
                "MonthlyCharges",
                "TotalCharges",
                "SeniorCitizen",
                "Partner",
                "Dependents",
                "PhoneService",
                "PaperlessBilling",
                "gender_Female",
                "gender_Male",
                "Contract_Monthtomonth",
                "Contract_One year",
                "Contract_Two year",
                "InternetService_DSL",
                "InternetService_Fiber optic",
                "InternetService_No",
                "MultipleLines_No",
                "OnlineSecurity_No",
                "TechSupport_No",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }

    fn sample_input() -> RawInput {
        RawInput {
            tenure: 12,
            monthly_charges: 50.0,
            gender: Gender::Female,
            senior_citizen: YesNo::No,
            partner: YesNo::Yes,
            dependents: YesNo::No,
            contract: Contract::MonthToMonth,
            internet_service: InternetService::Dsl,
            paperless_billing: YesNo::Yes,
        }
    }

    #[test]
    fn test_vector_covers_schema_exactly() {
        let schema = demo_schema();
        let vector = encode(&sample_input(), &schema);

        assert_eq!(vector.len(), schema.len());
        assert!(vector.matches(&schema));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let schema = demo_schema();
        let input = sample_input();

        assert_eq!(encode(&input, &schema), encode(&input, &schema));
    }

    #[test]
    fn test_numeric_log_scaling() {
        let schema = demo_schema();
        let input = RawInput {
            tenure: 1,
            monthly_charges: 0.0,
            ..sample_input()
        };
        let vector = encode(&input, &schema);

        assert_relative_eq!(
            vector.get_by_name(&schema, "tenure").unwrap(),
            0.6931,
            epsilon = 1e-4
        );
        assert_eq!(vector.get_by_name(&schema, "MonthlyCharges"), Some(0.0));
        // tenure * charges = 0, so TotalCharges is log1p(0)
        assert_eq!(vector.get_by_name(&schema, "TotalCharges"), Some(0.0));
    }

    #[test]
    fn test_total_charges_is_log_of_product() {
        let schema = demo_schema();
        let input = RawInput {
            tenure: 24,
            monthly_charges: 50.0,
            ..sample_input()
        };
        let vector = encode(&input, &schema);

        assert_relative_eq!(
            vector.get_by_name(&schema, "TotalCharges").unwrap(),
            (24.0_f64 * 50.0).ln_1p(),
        );
    }

    #[test]
    fn test_soft_binary_mapping() {
        let schema = demo_schema();
        let input = RawInput {
            senior_citizen: YesNo::Yes,
            partner: YesNo::No,
            ..sample_input()
        };
        let vector = encode(&input, &schema);

        assert_eq!(vector.get_by_name(&schema, "SeniorCitizen"), Some(SOFT_YES));
        assert_eq!(vector.get_by_name(&schema, "Partner"), Some(SOFT_NO));
        assert_eq!(
            vector.get_by_name(&schema, "PhoneService"),
            Some(PHONE_SERVICE_NEUTRAL)
        );
    }

    #[test]
    fn test_one_hot_strips_hyphens() {
        let schema = demo_schema();
        let vector = encode(
            &RawInput {
                contract: Contract::MonthToMonth,
                ..sample_input()
            },
            &schema,
        );

        assert_eq!(
            vector.get_by_name(&schema, "Contract_Monthtomonth"),
            Some(ONE_HOT_ACTIVE)
        );
        // Only the selected level is active
        assert_eq!(vector.get_by_name(&schema, "Contract_One year"), Some(0.0));
        assert_eq!(vector.get_by_name(&schema, "Contract_Two year"), Some(0.0));
    }

    #[test]
    fn test_one_hot_levels_with_spaces() {
        let schema = demo_schema();
        let vector = encode(
            &RawInput {
                contract: Contract::TwoYear,
                internet_service: InternetService::FiberOptic,
                ..sample_input()
            },
            &schema,
        );

        assert_eq!(
            vector.get_by_name(&schema, "Contract_Two year"),
            Some(ONE_HOT_ACTIVE)
        );
        assert_eq!(
            vector.get_by_name(&schema, "InternetService_Fiber optic"),
            Some(ONE_HOT_ACTIVE)
        );
    }

    #[test]
    fn test_unknown_one_hot_key_is_skipped() {
        // Schema without any Contract features: the selection has nowhere
        // to land and must be dropped without error.
        let schema = FeatureSchema::from_names(vec![
            "tenure".to_string(),
            "MonthlyCharges".to_string(),
        ]);
        let vector = encode(&sample_input(), &schema);

        assert_eq!(vector.len(), 2);
        assert!(vector.matches(&schema));
        assert!(vector.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_unset_schema_features_default_to_zero() {
        let schema = demo_schema();
        let vector = encode(&sample_input(), &schema);

        // No form control maps to TechSupport_No
        assert_eq!(vector.get_by_name(&schema, "TechSupport_No"), Some(0.0));
        // Unselected gender level stays zero
        assert_eq!(vector.get_by_name(&schema, "gender_Male"), Some(0.0));
    }

    #[test]
    fn test_hardcoded_defaults() {
        let schema = demo_schema();
        let vector = encode(&sample_input(), &schema);

        assert_eq!(
            vector.get_by_name(&schema, "MultipleLines_No"),
            Some(ASSUMED_NO_WEIGHT)
        );
        assert_eq!(
            vector.get_by_name(&schema, "OnlineSecurity_No"),
            Some(ASSUMED_NO_WEIGHT)
        );
    }

    #[test]
    fn test_out_of_domain_numerics_are_clamped() {
        let schema = demo_schema();
        let vector = encode(
            &RawInput {
                tenure: 500,
                monthly_charges: 1000.0,
                ..sample_input()
            },
            &schema,
        );

        assert_eq!(
            vector.get_by_name(&schema, "tenure"),
            Some(72.0_f64.ln_1p())
        );
        assert_eq!(
            vector.get_by_name(&schema, "MonthlyCharges"),
            Some(200.0_f64.ln_1p())
        );
    }

    #[test]
    fn test_non_finite_charges_do_not_poison_the_vector() {
        let schema = demo_schema();
        let vector = encode(
            &RawInput {
                monthly_charges: f64::NAN,
                ..sample_input()
            },
            &schema,
        );

        assert!(vector.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(sample_input().validate().is_ok());

        let err = RawInput {
            tenure: 0,
            ..sample_input()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, crate::error::AppError::InvalidInput(_)));

        let err = RawInput {
            monthly_charges: 200.5,
            ..sample_input()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, crate::error::AppError::InvalidInput(_)));
    }
}
