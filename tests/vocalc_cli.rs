use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn vocalc_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_vocalc").expect("vocalc test binary not built")
}

fn one_shot(utterance: &str) -> String {
    let output = Command::new(vocalc_bin())
        .args(["--utterance", utterance])
        .output()
        .expect("run vocalc --utterance");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn help_mentions_name() {
    let output = Command::new(vocalc_bin())
        .arg("--help")
        .output()
        .expect("run vocalc --help");
    assert!(output.status.success());
    assert!(combined_output(&output).contains("vocalc"));
}

#[test]
fn utterance_mode_evaluates_spoken_arithmetic() {
    assert_eq!(one_shot("5 plus 5 equals"), "10");
    assert_eq!(one_shot("3 x 4 equals"), "12");
}

#[test]
fn utterance_mode_surfaces_errors_as_error_text() {
    assert_eq!(one_shot("5 divide by 0 equals"), "Error");
    assert_eq!(one_shot("two plus two equals"), "Error");
}

#[test]
fn utterance_mode_passes_trig_constants_through() {
    assert_eq!(one_shot("sin 30 equals"), "0.5");
    assert_eq!(one_shot("tan 90 equal"), "Undefined");
}

#[test]
fn utterance_without_equal_word_is_left_on_screen() {
    assert_eq!(one_shot("5 plus 5"), "5+5");
}

#[test]
fn list_rules_prints_the_substitution_tables() {
    let output = Command::new(vocalc_bin())
        .arg("--list-rules")
        .output()
        .expect("run vocalc --list-rules");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("divide by -> /"));
    assert!(stdout.contains("tan 90 equal -> Undefined"));
}

#[test]
fn rejects_an_unreadable_rules_file() {
    let output = Command::new(vocalc_bin())
        .args(["--rules", "/nonexistent/vocalc-rules.yaml", "--list-rules"])
        .output()
        .expect("run vocalc --rules");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--rules"));
}
