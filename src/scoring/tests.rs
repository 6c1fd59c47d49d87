use super::*;

fn market_thresholds() -> Thresholds {
    Thresholds::new(vec![(1.0, 1), (5.0, 3), (10.0, 4), (100.0, 5)]).unwrap()
}

fn fixed_engine(compound: f64) -> RubricEngine<FixedPolarity> {
    RubricEngine::new(FixedPolarity::new(compound))
}

#[test]
fn test_sentiment_bucket_boundaries() {
    assert_eq!(sentiment_bucket(1.0), 5);
    assert_eq!(sentiment_bucket(0.6), 5);
    assert_eq!(sentiment_bucket(0.59), 4);
    assert_eq!(sentiment_bucket(0.2), 4);
    assert_eq!(sentiment_bucket(0.19), 3);
    assert_eq!(sentiment_bucket(0.0), 3);
    assert_eq!(sentiment_bucket(-0.19), 3);
    assert_eq!(sentiment_bucket(-0.2), 2);
    assert_eq!(sentiment_bucket(-0.59), 2);
    assert_eq!(sentiment_bucket(-0.6), 1);
    assert_eq!(sentiment_bucket(-1.0), 1);
}

#[test]
fn test_vader_positive_text() {
    let analyzer = VaderAnalyzer::new();
    let compound = analyzer.compound("A strong and excellent founding team.");
    assert!(compound > 0.6, "compound was {compound}");
    assert!(compound <= 1.0);
}

#[test]
fn test_vader_negation_flips_polarity() {
    let analyzer = VaderAnalyzer::new();
    assert!(analyzer.compound("The plan is good") > 0.0);
    assert!(analyzer.compound("The plan is not good") < 0.0);
}

#[test]
fn test_vader_booster_amplifies() {
    let analyzer = VaderAnalyzer::new();
    assert!(analyzer.compound("very strong") > analyzer.compound("strong"));
}

#[test]
fn test_vader_neutral_and_empty() {
    let analyzer = VaderAnalyzer::new();
    assert_eq!(analyzer.compound(""), 0.0);
    assert_eq!(analyzer.compound("   "), 0.0);
    assert!(analyzer.compound("The company sells widgets.").abs() < 0.2);
}

#[test]
fn test_vader_covers_everyday_evaluative_words() {
    let analyzer = VaderAnalyzer::new();

    let praise = analyzer
        .compound("Customers love the product and the founders are talented and passionate.");
    assert!(sentiment_bucket(praise) >= 4, "compound was {praise}");

    let growth = analyzer.compound("Revenue is soaring and retention is fantastic.");
    assert!(growth > 0.2, "compound was {growth}");

    let criticism = analyzer.compound("The plan is terrible and the founders are incompetent.");
    assert!(criticism < -0.2, "compound was {criticism}");
}

#[test]
fn test_vader_ignores_capitalisation() {
    let analyzer = VaderAnalyzer::new();
    assert_eq!(
        analyzer.compound("The team is GREAT"),
        analyzer.compound("the team is great")
    );
}

#[test]
fn test_keyword_adjustment_counts_each_phrase_once() {
    assert_eq!(keyword_adjustment("strong strong strong"), 0.5);
    assert_eq!(keyword_adjustment("Strong and PROMISING"), 1.0);
    assert_eq!(keyword_adjustment("weak, with a gap"), -2.0);
    assert_eq!(keyword_adjustment("strong but unclear"), -0.5);
    assert_eq!(keyword_adjustment("nothing to see"), 0.0);
}

#[test]
fn test_keyword_adjustment_multiword_phrases() {
    assert_eq!(keyword_adjustment("a clear advantage"), 0.5);
    assert_eq!(keyword_adjustment("one critical issue and a major risk"), -2.0);
}

#[test]
fn test_qualitative_score_clamps_high() {
    // Bucket 5 plus two positive keywords is 6 before clamping.
    let engine = fixed_engine(0.7);
    assert_eq!(engine.qualitative_score("strong and excellent"), 5);
}

#[test]
fn test_qualitative_score_clamps_low() {
    let engine = fixed_engine(-0.9);
    assert_eq!(engine.qualitative_score("weak, poor, bad"), 1);
}

#[test]
fn test_qualitative_score_rounds_half_to_even() {
    assert_eq!(fixed_engine(0.0).qualitative_score("good"), 4);
    assert_eq!(fixed_engine(0.3).qualitative_score("good"), 4);
}

#[test]
fn test_qualitative_score_negative_keyword() {
    assert_eq!(fixed_engine(0.0).qualitative_score("weak"), 2);
}

#[test]
fn test_threshold_mapping() {
    let thresholds = market_thresholds();
    assert_eq!(thresholds.score(7.0), 4);
    assert_eq!(thresholds.score(500.0), 5);
    assert_eq!(thresholds.score(5.0), 3);
    assert_eq!(thresholds.score(0.5), 1);
    assert_eq!(thresholds.score(-10.0), 1);
}

#[test]
fn test_default_threshold_tables() {
    assert_eq!(Thresholds::market_size(), market_thresholds());
    let traction = Thresholds::traction_revenue();
    assert_eq!(traction.score(5_000.0), 1);
    assert_eq!(traction.score(75_000.0), 4);
    assert_eq!(traction.score(2_000_000.0), 5);
}

#[test]
fn test_thresholds_validation() {
    assert!(matches!(
        Thresholds::new(vec![]),
        Err(ScoringError::InvalidThresholds { .. })
    ));
    assert!(matches!(
        Thresholds::new(vec![(10.0, 1), (5.0, 3)]),
        Err(ScoringError::InvalidThresholds { .. })
    ));
    assert!(matches!(
        Thresholds::new(vec![(1.0, 6)]),
        Err(ScoringError::InvalidThresholds { .. })
    ));
    assert!(matches!(
        Thresholds::new(vec![(f64::NAN, 3)]),
        Err(ScoringError::InvalidThresholds { .. })
    ));
}

#[test]
fn test_gate_by_confidence() {
    assert_eq!(gate_by_confidence(5, 4), 4);
    assert_eq!(gate_by_confidence(4, 5), 5);
    assert_eq!(gate_by_confidence(3, 5), 3);
    assert_eq!(gate_by_confidence(3, 1), 1);
    assert_eq!(gate_by_confidence(2, 5), 2);
    assert_eq!(gate_by_confidence(1, 1), 2);
}

#[test]
fn test_gated_numeric_low_confidence_overrides_value() {
    let engine = fixed_engine(-0.7);
    assert_eq!(
        engine.gated_numeric_score("shaky numbers", 50.0, &market_thresholds()),
        2
    );
}

#[test]
fn test_gated_numeric_neutral_caps_at_three() {
    let engine = fixed_engine(0.0);
    assert_eq!(
        engine.gated_numeric_score("numbers", 50.0, &market_thresholds()),
        3
    );
}

#[test]
fn test_extract_currency() {
    assert_eq!(extract_currency("$1,200,000 ARR"), Some(1_200_000.0));
    assert_eq!(extract_currency("TAM of $7.5B"), Some(7.5));
    assert_eq!(extract_currency("about $12."), Some(12.0));
    assert_eq!(extract_currency("$75,000 MRR, up 20%"), Some(75_000.0));
    assert_eq!(extract_currency("no figure here"), None);
}

#[test]
fn test_extract_currency_rejects_locale_variants() {
    assert_eq!(extract_currency("$1.234,56"), None);
    assert_eq!(extract_currency("$12,34"), None);
    assert_eq!(extract_currency("€500"), None);
}

#[test]
fn test_category_resolve() {
    assert_eq!(
        PitchCategory::resolve("market size & growth"),
        Some(PitchCategory::Market)
    );
    assert_eq!(
        PitchCategory::resolve("Product / Tech Stack"),
        Some(PitchCategory::ProductTechStack)
    );
    assert_eq!(
        PitchCategory::resolve("TRACTION / RESULTS"),
        Some(PitchCategory::TractionResults)
    );
    assert_eq!(PitchCategory::resolve("Vision"), None);
}

#[test]
fn test_category_question_numbers() {
    let numbers: Vec<u32> = PitchCategory::ALL
        .iter()
        .map(PitchCategory::question_number)
        .collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_analysis_source_from_json() {
    let json = r#"{"questions": [
        {"question_number": 3, "analysis": "Large market."},
        {"question_number": 8, "analysis": "   "}
    ]}"#;
    let analysis = AnalysisSource::from_json_str(json).unwrap();

    assert_eq!(analysis.len(), 2);
    assert_eq!(analysis.text_for(PitchCategory::Market), Some("Large market."));
    assert_eq!(analysis.text_for(PitchCategory::Team), None);
    assert_eq!(analysis.text_for(PitchCategory::Problem), None);
}

#[test]
fn test_extracted_facts_from_json() {
    let json = r#"{
        "market_analysis": {"market_metrics": [{"value": "$50 billion"}, {"value": "$1"}]},
        "business_performance_and_traction": {"current_financials": []}
    }"#;
    let facts = ExtractedFacts::from_json_str(json).unwrap();

    assert_eq!(facts.market_size_value(), Some("$50 billion"));
    assert_eq!(facts.current_financials_value(), None);
    assert_eq!(ExtractedFacts::from_json_str("{}").unwrap(), ExtractedFacts::new());
}

#[test]
fn test_framework_skips_blank_rows() {
    let mut blank = FrameworkRow::new("nan", "", 0.9, CriterionType::Qualitative);
    let framework = ScoringFramework::new(vec![
        FrameworkRow::new("Team", "Experience", 0.3, CriterionType::Qualitative),
        blank.clone(),
        {
            blank.pitch_element = None;
            blank
        },
    ])
    .unwrap();

    assert_eq!(framework.len(), 1);
    assert_eq!(framework.skipped_rows(), 2);
    assert_eq!(framework.criteria()[0].category, Some(PitchCategory::Team));
}

#[test]
fn test_framework_rejects_invalid_weight() {
    for weight in [1.5, -0.1, f64::NAN] {
        let result = ScoringFramework::new(vec![FrameworkRow::new(
            "Team",
            "",
            weight,
            CriterionType::Qualitative,
        )]);
        assert!(matches!(result, Err(ScoringError::InvalidWeight { .. })));
    }
}

#[test]
fn test_strict_framework_rejects_unmapped_rows() {
    let unknown = vec![FrameworkRow::new("Vision", "", 0.2, CriterionType::Qualitative)];
    assert!(matches!(
        ScoringFramework::strict(unknown.clone()),
        Err(ScoringError::UnmappedCriterion { .. })
    ));
    assert!(ScoringFramework::new(unknown).is_ok());

    let quantitative_team = vec![FrameworkRow::new("Team", "", 0.2, CriterionType::Quantitative)];
    assert!(matches!(
        ScoringFramework::strict(quantitative_team),
        Err(ScoringError::UnmappedCriterion { .. })
    ));
}

#[test]
fn test_framework_from_json_columns() {
    let json = r#"[
        {"Pitch Element": "Market", "Sub-Criteria": "TAM", "Weight (0–1)": 0.4, "Type": "Quantitative"},
        {"Pitch Element": "Team", "Sub-Criteria": null, "Weight": 0.6, "Type": "Narrative"},
        {"Pitch Element": null, "Sub-Criteria": null, "Weight": 0.0, "Type": "Qualitative"}
    ]"#;
    let framework = ScoringFramework::from_json_str(json, false).unwrap();

    assert_eq!(framework.len(), 2);
    assert_eq!(framework.skipped_rows(), 1);
    assert_eq!(framework.criteria()[0].sub_criteria, "TAM");
    assert_eq!(
        framework.criteria()[1].criterion_type,
        CriterionType::Unrecognized
    );
    assert!(ScoringFramework::from_json_str(json, true).is_err());
}

#[test]
fn test_framework_tolerates_null_cells_on_blank_rows() {
    let json = r#"[
        {"Pitch Element": "Team", "Weight (0–1)": 0.5, "Type": "Qualitative"},
        {"Pitch Element": null, "Weight (0–1)": null, "Type": null},
        {"Pitch Element": ""},
        {"Pitch Element": "Problem", "Weight (0–1)": 0.5, "Type": null}
    ]"#;
    let framework = ScoringFramework::from_json_str(json, false).unwrap();

    assert_eq!(framework.len(), 2);
    assert_eq!(framework.skipped_rows(), 2);
    assert_eq!(
        framework.criteria()[1].criterion_type,
        CriterionType::Unrecognized
    );
}

#[test]
fn test_framework_rejects_missing_weight_on_real_row() {
    let json = r#"[{"Pitch Element": "Team", "Weight (0–1)": null, "Type": "Qualitative"}]"#;
    assert!(matches!(
        ScoringFramework::from_json_str(json, false),
        Err(ScoringError::MissingWeight { .. })
    ));
}

#[test]
fn test_quantitative_fact_routing() {
    assert_eq!(
        QuantitativeFact::resolve("Market"),
        Some(QuantitativeFact::MarketSize)
    );
    assert_eq!(
        QuantitativeFact::resolve("Traction"),
        Some(QuantitativeFact::TractionRevenue)
    );
    assert_eq!(
        QuantitativeFact::resolve("Traction & Revenue"),
        Some(QuantitativeFact::TractionRevenue)
    );
    // Market wins when both words appear.
    assert_eq!(
        QuantitativeFact::resolve("Market Traction"),
        Some(QuantitativeFact::MarketSize)
    );
    assert_eq!(QuantitativeFact::resolve("Team"), None);
}

#[test]
fn test_short_traction_element_scores_revenue() {
    let rows = vec![FrameworkRow::new(
        "Traction",
        "MRR",
        1.0,
        CriterionType::Quantitative,
    )];
    assert!(ScoringFramework::strict(rows.clone()).is_ok());

    let framework = ScoringFramework::new(rows).unwrap();
    let facts = ExtractedFacts::new().with_current_financials("$2,000,000 MRR");

    let report = fixed_engine(0.0).score(&framework, &AnalysisSource::new(), &facts);

    assert_eq!(report.details[0].score, 5);
    assert!(!report.details[0].defaulted);
    assert!((report.overall - 100.0).abs() < 1e-9);
}

#[test]
fn test_end_to_end_market_rows() {
    let framework = ScoringFramework::new(vec![
        FrameworkRow::new("Market", "Narrative", 0.5, CriterionType::Qualitative),
        FrameworkRow::new("Market", "Size", 0.5, CriterionType::Quantitative),
    ])
    .unwrap();
    let analysis =
        AnalysisSource::new().with_category(PitchCategory::Market, "The market is large.");
    let facts = ExtractedFacts::new().with_market_size("$500 billion");

    let report = fixed_engine(0.3).score(&framework, &analysis, &facts);

    assert_eq!(report.details[0].score, 4);
    assert_eq!(report.details[1].score, 5);
    assert_eq!(report.details[0].weighted_contribution, 40.0);
    assert_eq!(report.details[1].weighted_contribution, 50.0);
    assert!((report.overall - 90.0).abs() < 1e-9);
    assert!(report.details.iter().all(|d| !d.defaulted));
}

#[test]
fn test_missing_inputs_default_to_neutral() {
    let framework = ScoringFramework::new(vec![
        FrameworkRow::new("Team", "", 0.25, CriterionType::Qualitative),
        FrameworkRow::new("Market", "", 0.25, CriterionType::Quantitative),
        FrameworkRow::new("Traction / Results", "", 0.25, CriterionType::Quantitative),
        FrameworkRow::new("Vision", "", 0.25, CriterionType::Qualitative),
    ])
    .unwrap();
    let facts = ExtractedFacts::new()
        .with_market_size("$50 billion")
        .with_current_financials("€1.234,56");

    let report = fixed_engine(0.9).score(&framework, &AnalysisSource::new(), &facts);

    assert!(report.details.iter().all(|d| d.score == 3 && d.defaulted));
    assert!((report.overall - 60.0).abs() < 1e-9);
}

#[test]
fn test_traction_rows_are_not_gated() {
    let framework = ScoringFramework::new(vec![FrameworkRow::new(
        "Traction / Results",
        "Revenue",
        1.0,
        CriterionType::Quantitative,
    )])
    .unwrap();
    let facts = ExtractedFacts::new().with_current_financials("$75,000 MRR");

    let report = fixed_engine(-0.9).score(&framework, &AnalysisSource::new(), &facts);

    assert_eq!(report.details[0].score, 4);
    assert!((report.overall - 80.0).abs() < 1e-9);
}

#[test]
fn test_zero_total_weight_scores_zero() {
    let framework = ScoringFramework::new(vec![
        FrameworkRow::new("  ", "", 1.0, CriterionType::Qualitative),
        FrameworkRow::new("Team", "", 0.0, CriterionType::Qualitative),
    ])
    .unwrap();

    let report = fixed_engine(0.9).score(&framework, &AnalysisSource::new(), &ExtractedFacts::new());

    assert_eq!(report.overall, 0.0);
    assert_eq!(report.details.len(), 1);
    assert_eq!(report.total_weight(), 0.0);
}

#[test]
fn test_details_preserve_framework_order() {
    let framework = ScoringFramework::new(vec![
        FrameworkRow::new("Team", "a", 0.1, CriterionType::Qualitative),
        FrameworkRow::new("Problem", "b", 0.2, CriterionType::Qualitative),
        FrameworkRow::new("Competition", "c", 0.3, CriterionType::Qualitative),
    ])
    .unwrap();

    let report = score_pitch(&framework, &AnalysisSource::new(), &ExtractedFacts::new());
    let elements: Vec<&str> = report.details.iter().map(|d| d.element.as_str()).collect();

    assert_eq!(elements, ["Team", "Problem", "Competition"]);
}

#[test]
fn test_default_engine_scores_text() {
    let framework = ScoringFramework::new(vec![FrameworkRow::new(
        "Team",
        "",
        1.0,
        CriterionType::Qualitative,
    )])
    .unwrap();
    let analysis = AnalysisSource::new().with_category(
        PitchCategory::Team,
        "An excellent, experienced and strong team with a proven record.",
    );

    let report = score_pitch(&framework, &analysis, &ExtractedFacts::new());

    assert_eq!(report.details[0].score, 5);
    assert!((report.overall - 100.0).abs() < 1e-9);
}
