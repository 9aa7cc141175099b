//! Tests for classification module.

use super::*;
use tempfile::tempdir;

fn doc(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

/// The four-document corpus used across the scenario tests:
/// two positive reviews, two negative, vocabulary {bad, great, hate, love}.
fn scenario_corpus() -> (Vec<Vec<String>>, Vec<usize>) {
    let documents = vec![
        doc(&["great", "love"]),
        doc(&["love", "great"]),
        doc(&["bad", "hate"]),
        doc(&["hate", "bad"]),
    ];
    let labels = vec![1, 1, 0, 0];
    (documents, labels)
}

#[test]
fn test_new_is_unfitted() {
    let model = MultinomialNb::new();
    assert!(model.vocabulary().is_none());
    assert!(model.term_frequencies().is_none());
    assert!(model.class_totals().is_none());
    assert!(model.class_log_priors().is_none());

    let err = model.predict(&[doc(&["anything"])]).unwrap_err();
    assert_eq!(err, "Model not fitted");
}

#[test]
fn test_default_is_unfitted() {
    let model = MultinomialNb::default();
    assert!(model.vocabulary().is_none());
}

#[test]
fn test_fit_builds_sorted_vocabulary() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let vocabulary = model.vocabulary().expect("fitted");
    assert_eq!(
        vocabulary.terms(),
        &doc(&["bad", "great", "hate", "love"])[..]
    );
}

#[test]
fn test_fit_term_frequencies() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    // Row-major [term][class]: bad, great, hate, love.
    let expected = vec![
        2, 0, // bad: twice in class 0
        0, 2, // great: twice in class 1
        2, 0, // hate
        0, 2, // love
    ];
    assert_eq!(model.term_frequencies().expect("fitted"), &expected[..]);
    assert_eq!(model.class_totals().expect("fitted"), [4, 4]);
}

#[test]
fn test_fit_class_totals_are_column_sums() {
    let documents = vec![
        doc(&["good", "good", "fine"]),
        doc(&["good"]),
        doc(&["awful", "bad"]),
    ];
    let labels = vec![1, 1, 0];
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let table = model.term_frequencies().expect("fitted");
    let totals = model.class_totals().expect("fitted");
    let n_terms = model.vocabulary().expect("fitted").len();

    for class in 0..N_CLASSES {
        let column_sum: u64 = (0..n_terms).map(|term| table[term * N_CLASSES + class]).sum();
        assert_eq!(column_sum, totals[class], "class {class}");
    }
    assert_eq!(totals, [2, 4]);
}

#[test]
fn test_fit_log_priors() {
    let documents = vec![
        doc(&["a"]),
        doc(&["b"]),
        doc(&["c"]),
        doc(&["d"]),
    ];
    let labels = vec![1, 1, 1, 0];
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let priors = model.class_log_priors().expect("fitted");
    assert!((priors[0] - (0.25f64).ln()).abs() < 1e-12);
    assert!((priors[1] - (0.75f64).ln()).abs() < 1e-12);
}

#[test]
fn test_fit_empty_documents() {
    let mut model = MultinomialNb::new();
    let err = model.fit(&[], &[]).unwrap_err();
    assert!(err.to_string().contains("empty input"));
}

#[test]
fn test_fit_length_mismatch() {
    let mut model = MultinomialNb::new();
    let err = model
        .fit(&[doc(&["a"]), doc(&["b"])], &[1])
        .unwrap_err();
    assert!(matches!(err, SentirError::DimensionMismatch { .. }));
}

#[test]
fn test_fit_label_out_of_range() {
    let mut model = MultinomialNb::new();
    let err = model.fit(&[doc(&["a"]), doc(&["b"])], &[0, 2]).unwrap_err();
    assert!(err.to_string().contains("label 2"));
}

#[test]
fn test_fit_rejects_missing_class() {
    let mut model = MultinomialNb::new();
    let err = model.fit(&[doc(&["a"]), doc(&["b"])], &[1, 1]).unwrap_err();
    assert!(matches!(err, SentirError::EmptyClass { class: 0 }));
}

#[test]
fn test_end_to_end_scenario() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let predictions = model
        .predict(&[
            doc(&["great", "great"]),
            doc(&["hate", "bad"]),
            doc(&["love"]),
        ])
        .expect("Model is fitted");
    assert_eq!(predictions, vec![1, 0, 1]);
}

#[test]
fn test_presence_based_scoring_ignores_count_magnitude() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    // great at index 1; a count of 7 scores exactly like a count of 1.
    let once = model.predict_counts(&[0, 1, 0, 0]).expect("fitted");
    let many = model.predict_counts(&[0, 7, 0, 0]).expect("fitted");
    assert_eq!(once, many);
}

#[test]
fn test_predict_counts_matches_manual_scores() {
    let documents = vec![
        doc(&["good", "good", "plot"]),
        doc(&["plot", "bad", "bad"]),
    ];
    let labels = vec![1, 0];
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let vocabulary = model.vocabulary().expect("fitted");
    let priors = model.class_log_priors().expect("fitted");

    // Document with repeated vocabulary terms: presence only.
    let counts = vocabulary.count_vector(&doc(&["bad", "bad", "plot", "plot"]));
    let mut scores = priors;
    for (term, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        for (class, score) in scores.iter_mut().enumerate() {
            *score += model.log_likelihood(term, class).expect("in range");
        }
    }
    let expected = usize::from(scores[1] > scores[0]);

    assert_eq!(model.predict_counts(&counts).expect("fitted"), expected);
}

#[test]
fn test_tie_breaks_to_lowest_class() {
    let documents = vec![doc(&["same"]), doc(&["same"])];
    let labels = vec![1, 0];
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    // Both classes score identically; the first class index wins.
    assert_eq!(model.predict_counts(&[1]).expect("fitted"), 0);
}

#[test]
fn test_all_zero_vector_is_prior_driven() {
    let documents = vec![
        doc(&["a"]),
        doc(&["b"]),
        doc(&["c"]),
        doc(&["d"]),
    ];
    let mut model = MultinomialNb::new();
    model.fit(&documents, &[1, 1, 1, 0]).expect("fit should succeed");
    assert_eq!(model.predict_counts(&[0, 0, 0, 0]).expect("fitted"), 1);

    let mut model = MultinomialNb::new();
    model.fit(&documents, &[0, 0, 0, 1]).expect("fit should succeed");
    assert_eq!(model.predict_counts(&[0, 0, 0, 0]).expect("fitted"), 0);
}

#[test]
fn test_unseen_tokens_are_ignored() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    // A document of unseen tokens vectorizes to all zeros; priors are
    // equal, so the tie resolves to class 0.
    let predictions = model
        .predict(&[doc(&["unseen", "tokens", "only"])])
        .expect("Model is fitted");
    assert_eq!(predictions, vec![0]);
}

#[test]
fn test_smoothing_for_unseen_term() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    // "great" (index 1) never occurs in class 0: ln(1 / (total + V)).
    let ll = model.log_likelihood(1, 0).expect("in range");
    let expected = (1.0f64 / (4.0 + 4.0)).ln();
    assert!((ll - expected).abs() < 1e-12);
    assert!(ll.is_finite());
}

#[test]
fn test_log_likelihood_for_seen_term() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    // "great" occurs twice in class 1: ln((2 + 1) / (4 + 4)).
    let ll = model.log_likelihood(1, 1).expect("in range");
    let expected = (3.0f64 / 8.0).ln();
    assert!((ll - expected).abs() < 1e-12);
}

#[test]
fn test_log_likelihood_out_of_range() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    assert!(model.log_likelihood(4, 0).is_err());
    assert!(model.log_likelihood(0, 2).is_err());
}

#[test]
fn test_predict_counts_wrong_length() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let err = model.predict_counts(&[1, 0]).unwrap_err();
    assert!(matches!(err, SentirError::DimensionMismatch { .. }));
}

#[test]
fn test_predict_is_deterministic() {
    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");

    let counts = [0, 1, 1, 0];
    let first = model.predict_counts(&counts).expect("fitted");
    for _ in 0..10 {
        assert_eq!(model.predict_counts(&counts).expect("fitted"), first);
    }
}

// ========== Persistence Tests ==========

#[test]
fn test_save_load_roundtrip() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");

    let (documents, labels) = scenario_corpus();
    let mut model = MultinomialNb::new();
    model.fit(&documents, &labels).expect("fit should succeed");
    model.save_json(&path).expect("save should succeed");

    let loaded = MultinomialNb::load_json(&path).expect("load should succeed");
    assert_eq!(
        loaded.vocabulary().expect("fitted").terms(),
        model.vocabulary().expect("fitted").terms()
    );
    assert_eq!(loaded.term_frequencies(), model.term_frequencies());
    assert_eq!(loaded.class_totals(), model.class_totals());
    assert_eq!(loaded.class_log_priors(), model.class_log_priors());

    let test_documents = vec![doc(&["great", "great"]), doc(&["bad", "hate"])];
    assert_eq!(
        loaded.predict(&test_documents).expect("Model is fitted"),
        model.predict(&test_documents).expect("Model is fitted")
    );
}

#[test]
fn test_save_unfitted_fails() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");

    let model = MultinomialNb::new();
    let err = model.save_json(&path).unwrap_err();
    assert!(err.to_string().contains("unfitted"));
}

#[test]
fn test_load_missing_file_fails() {
    let err = MultinomialNb::load_json("/nonexistent/sentir/model.json").unwrap_err();
    assert!(matches!(err, SentirError::Io(_)));
}

#[test]
fn test_load_rejects_unsupported_schema_version() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{"schema_version":99,"vocabulary":["a"],"vocabulary_index":{"a":0},
           "term_frequencies":[1,1],"class_totals":[1,1],
           "class_log_priors":[-0.693,-0.693]}"#,
    )
    .expect("write should succeed");

    let err = MultinomialNb::load_json(&path).unwrap_err();
    assert!(err.to_string().contains("schema version"));
}

#[test]
fn test_load_rejects_wrong_table_shape() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{"schema_version":1,"vocabulary":["a","b"],"vocabulary_index":{"a":0,"b":1},
           "term_frequencies":[1,1,1],"class_totals":[2,1],
           "class_log_priors":[-0.693,-0.693]}"#,
    )
    .expect("write should succeed");

    let err = MultinomialNb::load_json(&path).unwrap_err();
    assert!(err.to_string().contains("term frequency table"));
}

#[test]
fn test_load_rejects_inconsistent_index() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{"schema_version":1,"vocabulary":["a","b"],"vocabulary_index":{"a":1,"b":0},
           "term_frequencies":[1,0,0,1],"class_totals":[1,1],
           "class_log_priors":[-0.693,-0.693]}"#,
    )
    .expect("write should succeed");

    let err = MultinomialNb::load_json(&path).unwrap_err();
    assert!(err.to_string().contains("index"));
}

#[test]
fn test_load_rejects_broken_conservation() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{"schema_version":1,"vocabulary":["a","b"],"vocabulary_index":{"a":0,"b":1},
           "term_frequencies":[1,0,0,1],"class_totals":[5,1],
           "class_log_priors":[-0.693,-0.693]}"#,
    )
    .expect("write should succeed");

    let err = MultinomialNb::load_json(&path).unwrap_err();
    assert!(err.to_string().contains("column sums"));
}

#[test]
fn test_load_rejects_unsorted_vocabulary() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("model.json");
    std::fs::write(
        &path,
        r#"{"schema_version":1,"vocabulary":["b","a"],"vocabulary_index":{"b":0,"a":1},
           "term_frequencies":[1,0,0,1],"class_totals":[1,1],
           "class_log_priors":[-0.693,-0.693]}"#,
    )
    .expect("write should succeed");

    let err = MultinomialNb::load_json(&path).unwrap_err();
    assert!(err.to_string().contains("sorted"));
}
