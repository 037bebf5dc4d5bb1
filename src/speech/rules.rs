//! Built-in substitution tables for the spoken-word grammar. Each table is an
//! ordered list applied left to right; every entry replaces all occurrences.

/// Spoken operator words. Order preserved from the shipped phrase set,
/// including the quirk that `subtract` runs before `subtract by`, so the
/// longer phrase never matches as a unit and leaves a stray `by` behind.
pub(super) const WORD_RULES: &[(&str, &str)] = &[
    ("divide by", "/"),
    ("into", "*"),
    ("X", "*"),
    ("x", "*"),
    ("add", "+"),
    ("plus", "+"),
    ("subtract", "-"),
    ("subtract by", "-"),
];

/// Precomputed trigonometric constants for the fixed phrase set
/// {sin,cos,tan} x {30,45,60,90}. The `equals` phrasing sits before its
/// `equal` prefix so the longer phrase wins. `tan 90` is not a number.
pub(super) const TRIG_RULES: &[(&str, &str)] = &[
    ("sin 30 equals", "0.5"),
    ("sin 30 equal", "0.5"),
    ("sin 45 equals", "0.707106781187"),
    ("sin 45 equal", "0.707106781187"),
    ("sin 60 equals", "0.866025403784"),
    ("sin 60 equal", "0.866025403784"),
    ("sin 90 equals", "1"),
    ("sin 90 equal", "1"),
    ("cos 30 equals", "0.866025403784"),
    ("cos 30 equal", "0.866025403784"),
    ("cos 45 equals", "0.707106781187"),
    ("cos 45 equal", "0.707106781187"),
    ("cos 60 equals", "0.5"),
    ("cos 60 equal", "0.5"),
    ("cos 90 equals", "0"),
    ("cos 90 equal", "0"),
    ("tan 30 equals", "0.57735026919"),
    ("tan 30 equal", "0.57735026919"),
    ("tan 45 equals", "1"),
    ("tan 45 equal", "1"),
    ("tan 60 equals", "1.73205080757"),
    ("tan 60 equal", "1.73205080757"),
    ("tan 90 equals", "Undefined"),
    ("tan 90 equal", "Undefined"),
];

/// Spoken equal words become the evaluate-now marker. These must run after
/// the trig table, which matches on the un-rewritten equal words.
pub(super) const EQUAL_RULES: &[(&str, &str)] = &[("equals", "="), ("equal", "=")];
