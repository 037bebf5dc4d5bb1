use super::*;

fn normalize(text: &str) -> String {
    Normalizer::builtin().normalize(text)
}

#[test]
fn operator_words_become_symbols() {
    assert_eq!(normalize("two plus two equals"), "two+two=");
    assert_eq!(normalize("10 divide by 2 equals"), "10/2=");
    assert_eq!(normalize("5 add 3"), "5+3");
    assert_eq!(normalize("9 subtract 4"), "9-4");
}

#[test]
fn multiplication_spellings() {
    assert_eq!(normalize("3 x 3"), "3*3");
    assert_eq!(normalize("3 X 3"), "3*3");
    assert_eq!(normalize("4 into 5"), "4*5");
}

#[test]
fn letter_x_is_rewritten_wherever_it_appears() {
    // The bare `x` rule hits every occurrence, including inside words.
    assert_eq!(normalize("six into two"), "si**two");
}

#[test]
fn subtract_by_never_matches_as_a_unit() {
    // `subtract` is replaced first, so `subtract by` cannot match and the
    // stray `by` survives into the expression (which then fails to
    // evaluate). Long-standing behavior, kept on purpose.
    assert_eq!(normalize("7 subtract by 3"), "7-by3");
}

#[test]
fn equal_words_become_the_evaluate_marker() {
    assert_eq!(normalize("1 plus 1 equal"), "1+1=");
    assert_eq!(normalize("equals"), "=");
    assert_eq!(normalize("equal"), "=");
}

#[test]
fn trig_phrases_become_constants() {
    assert_eq!(normalize("sin 30 equals"), "0.5");
    assert_eq!(normalize("sin 45 equal"), "0.707106781187");
    assert_eq!(normalize("cos 90 equals"), "0");
    assert_eq!(normalize("tan 60 equal"), "1.73205080757");
}

#[test]
fn tan_90_is_undefined_text() {
    assert_eq!(normalize("tan 90 equal"), "Undefined");
    assert_eq!(normalize("tan 90 equals"), "Undefined");
}

#[test]
fn trig_constant_swallows_the_equal_word() {
    // The constant replaces the whole phrase, so no `=` marker remains and
    // the caller will not auto-evaluate.
    assert!(!normalize("sin 30 equals").contains('='));
}

#[test]
fn unmatched_trig_angles_pass_through() {
    assert_eq!(normalize("sin 50 equals"), "sin50=");
}

#[test]
fn unrecognized_text_passes_through_without_spaces() {
    assert_eq!(normalize("hello world"), "helloworld");
}

#[test]
fn noise_markers_are_stripped_before_rules() {
    assert_eq!(normalize("[BLANK_AUDIO] 5 plus 5 equals"), "5+5=");
    assert_eq!(normalize("(noise) sin 30 equals"), "0.5");
}

#[test]
fn sanitize_strips_markers_and_collapses_whitespace() {
    assert_eq!(sanitize("  [BLANK_AUDIO] 5 plus 5 "), "5 plus 5");
    assert_eq!(sanitize("( music )hello"), "hello");
    assert_eq!(sanitize("a   b\tc"), "a b c");
    assert_eq!(sanitize("   "), "");
}

#[test]
fn custom_rules_apply_before_builtins() {
    let custom = CustomRules::from_rules(vec![Rule {
        pattern: "squared".to_string(),
        replacement: "^2".to_string(),
    }])
    .unwrap();
    let normalizer = Normalizer::with_custom(custom);
    assert_eq!(normalizer.normalize("5 squared plus 1 equals"), "5^2+1=");
}

#[test]
fn custom_rules_can_shadow_builtin_phrases() {
    let custom = CustomRules::from_rules(vec![Rule {
        pattern: "divide by".to_string(),
        replacement: "%".to_string(),
    }])
    .unwrap();
    let normalizer = Normalizer::with_custom(custom);
    assert_eq!(normalizer.normalize("9 divide by 2"), "9%2");
}

#[test]
fn custom_rules_enforce_bounds() {
    assert!(CustomRules::from_rules(vec![Rule {
        pattern: String::new(),
        replacement: "+".to_string(),
    }])
    .is_err());

    let too_many = (0..=CustomRules::MAX_RULES)
        .map(|i| Rule {
            pattern: format!("word{i}"),
            replacement: "+".to_string(),
        })
        .collect();
    assert!(CustomRules::from_rules(too_many).is_err());

    assert!(CustomRules::from_rules(vec![Rule {
        pattern: "big".to_string(),
        replacement: "r".repeat(CustomRules::MAX_REPLACEMENT_BYTES + 1),
    }])
    .is_err());
}

#[test]
fn rule_listing_covers_all_stages_in_order() {
    let normalizer = Normalizer::builtin();
    let rules = normalizer.rules();
    assert_eq!(rules.first().map(|(p, _)| p.as_str()), Some("divide by"));
    assert!(rules
        .iter()
        .any(|(p, r)| p == "tan 90 equal" && r == "Undefined"));
    assert_eq!(rules.last().map(|(p, _)| p.as_str()), Some("equal"));
}

#[test]
fn open_intent_detects_known_sites() {
    assert_eq!(
        detect_open_intent("please open youtube"),
        Some(OpenTarget::YouTube)
    );
    assert_eq!(detect_open_intent("OPEN GOOGLE"), Some(OpenTarget::Google));
    assert_eq!(
        detect_open_intent("open chrome now"),
        Some(OpenTarget::Google)
    );
    assert_eq!(
        detect_open_intent("could you open facebook"),
        Some(OpenTarget::Facebook)
    );
}

#[test]
fn open_intent_requires_both_words() {
    assert_eq!(detect_open_intent("open nothing relevant"), None);
    assert_eq!(detect_open_intent("youtube please"), None);
    assert_eq!(detect_open_intent("5 plus 5 equals"), None);
}

#[test]
fn open_targets_carry_fixed_urls() {
    assert_eq!(OpenTarget::Google.url(), "https://www.google.com");
    assert_eq!(OpenTarget::YouTube.url(), "https://www.youtube.com");
    assert_eq!(OpenTarget::Facebook.url(), "https://www.facebook.com");
}
