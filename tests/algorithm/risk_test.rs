#[cfg(test)]
mod tests {
    use crate::utils::{moderate_record, no_risk_record, scs_record};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use risk_kb::{Field, Record, RiskLevel, assess, classify, classify_high, classify_moderate};

    /// Records with every numeric field drawn from a small clinical range
    fn random_records(seed: u64, count: usize) -> Vec<Record> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|i| {
                let mut record = Record::new(i.to_string());
                for field in Field::numeric() {
                    let value = match field {
                        Field::SuicidalIdeation
                        | Field::SuicidalDesire
                        | Field::SuicidePlan
                        | Field::SuicideAttempt
                        | Field::SelfHarm
                        | Field::ExposureToSuicide => rng.random_range(0..=1),
                        Field::Hopelessness => rng.random_range(0..=4),
                        _ => rng.random_range(0..=60),
                    };
                    record.set(field, value);
                }
                record
            })
            .collect()
    }

    #[test]
    fn test_scenario_a_high_via_scs() {
        let record = scs_record("a");
        assert_eq!(classify_high(&record), RiskLevel::High);
        assert_eq!(classify_moderate(&record), RiskLevel::None);
        assert_eq!(classify(&record).as_u8(), 2);
    }

    #[test]
    fn test_scenario_b_high_via_pain_hopelessness_and_belonging() {
        let record = Record::new("b")
            .with(Field::SuicideAttempt, 1)
            .with(Field::MentalPain, 50)
            .with(Field::Hopelessness, 2)
            .with(Field::SocialConnectedness, 5);
        assert_eq!(classify_high(&record), RiskLevel::High);
        assert_eq!(classify(&record).as_u8(), 2);
    }

    #[test]
    fn test_scenario_c_moderate_only() {
        let record = moderate_record("c");
        assert_eq!(classify_high(&record), RiskLevel::None);
        assert_eq!(classify_moderate(&record), RiskLevel::Moderate);
        assert_eq!(classify(&record).as_u8(), 1);
    }

    #[test]
    fn test_scenario_d_no_risk() {
        let record = no_risk_record("d");
        assert_eq!(classify_high(&record), RiskLevel::None);
        assert_eq!(classify_moderate(&record), RiskLevel::None);
        assert_eq!(classify(&record).as_u8(), 0);
    }

    #[test]
    fn test_exposure_alone_opens_indicator_gate() {
        // exposure is compared to 1 like the other flags; with low tolerance
        // and low belonging it is enough for moderate risk
        let exposed = Record::new("e").with(Field::ExposureToSuicide, 1);
        let assessment = assess(&exposed);
        assert!(assessment.risk_indicators);
        assert_eq!(assessment.high, RiskLevel::None);
        assert_eq!(assessment.moderate, RiskLevel::Moderate);

        let not_exposed = exposed.with(Field::ExposureToSuicide, 0);
        assert!(!assess(&not_exposed).risk_indicators);
        assert_eq!(classify(&not_exposed), RiskLevel::None);
    }

    #[test]
    fn test_scs_override_ignores_other_fields() {
        for mut record in random_records(7, 200) {
            record.scs = 40 + record.scs % 20;
            assert_eq!(classify_high(&record), RiskLevel::High);
            assert_eq!(classify(&record), RiskLevel::High);
        }
    }

    #[test]
    fn test_no_indicator_means_no_risk() {
        for mut record in random_records(11, 200) {
            record.suicide_attempt = 0;
            record.self_harm = 0;
            record.suicidal_ideation = 0;
            record.exposure_to_suicide = 0;
            record.depression_score %= 10;
            record.scs %= 40;
            assert_eq!(classify_high(&record), RiskLevel::None);
            assert_eq!(classify_moderate(&record), RiskLevel::None);
        }
    }

    #[test]
    fn test_outputs_stay_in_their_ranges_and_are_deterministic() {
        for record in random_records(23, 500) {
            let high = classify_high(&record);
            let moderate = classify_moderate(&record);
            assert!(matches!(high, RiskLevel::None | RiskLevel::High));
            assert!(matches!(moderate, RiskLevel::None | RiskLevel::Moderate));

            assert_eq!(classify_high(&record), high);
            assert_eq!(classify_moderate(&record), moderate);
            assert_eq!(classify(&record), high.max(moderate));
            assert_eq!(assess(&record).label, classify(&record));
        }
    }
}
