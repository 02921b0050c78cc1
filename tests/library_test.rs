use small_utils::{
    count_classes, drain_reversed, reverse, reverse_copy, reverse_with, vowel_consonant_ratio,
    Outcome, Request, ReverseMode, Settings, UtilError, UtilityEngine,
};

#[test]
fn test_ratio_matches_counts_for_mixed_text() {
    for text in ["encylopedia", "Hello, World!", "fast-moving", "12 apples", "a b"] {
        let counts = count_classes(text);
        let expected = counts.vowels as f64 / counts.consonants as f64;
        assert_eq!(vowel_consonant_ratio(text).unwrap(), expected, "{}", text);
    }
}

#[test]
fn test_ratio_reference_scenarios() {
    assert_eq!(vowel_consonant_ratio("encylopedia").unwrap(), 1.2);
    assert_eq!(vowel_consonant_ratio("").unwrap(), 0.0);
    assert_eq!(
        vowel_consonant_ratio("ENCYLOPEDIA").unwrap(),
        vowel_consonant_ratio("encylopedia").unwrap()
    );
}

#[test]
fn test_every_zero_consonant_text_but_empty_fails() {
    for text in ["a", "AEIOU", "yoyo", "Yy"] {
        match vowel_consonant_ratio(text) {
            Err(UtilError::DivisionByZero { vowels }) => {
                assert_eq!(vowels, text.chars().count())
            }
            other => panic!("{:?} gave {:?}", text, other),
        }
    }
}

#[test]
fn test_reverse_properties() {
    let samples: Vec<Vec<i32>> = vec![
        vec![],
        vec![7],
        vec![2, 4, 6, 8, 10],
        vec![1, 1, 2, 3, 5, 8, 13],
    ];

    for sample in samples {
        let reversed = reverse(sample.clone());
        assert_eq!(reversed.len(), sample.len());

        let n = sample.len();
        for (i, item) in reversed.iter().enumerate() {
            assert_eq!(*item, sample[n - 1 - i]);
        }

        assert_eq!(reverse(reversed), sample);
    }
}

#[test]
fn test_all_reversal_forms_agree() {
    let data = vec!["x".to_string(), "y".to_string(), "z".to_string()];

    let copied = reverse_copy(&data);
    let mut drained_input = data.clone();
    let drained = drain_reversed(&mut drained_input);
    let mut mode_input = data.clone();
    let by_mode = reverse_with(ReverseMode::Copy, &mut mode_input);

    assert_eq!(copied, reverse(data.clone()));
    assert_eq!(drained, copied);
    assert_eq!(by_mode, copied);
    assert!(drained_input.is_empty());
    assert_eq!(mode_input, data);
}

#[test]
fn test_engine_with_default_settings() {
    let engine = UtilityEngine::new(Settings::default());

    let outcome = engine
        .run(Request::Reverse {
            items: vec!["2".into(), "4".into(), "6".into(), "8".into(), "10".into()],
            mode: None,
        })
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Reversed {
            mode: ReverseMode::Copy,
            items: vec!["10".into(), "8".into(), "6".into(), "4".into(), "2".into()],
        }
    );
}
