//! Cell naming rules.
//!
//! A cell name is one or more letters followed by a positive integer with no
//! leading zero (`A1`, `XY32`). Names are case-insensitive: every name is
//! folded to upper case before it is stored, looked up, or compared.

use std::sync::OnceLock;

use regex::Regex;

/// Intrinsic syntactic shape every cell name must have, checked after
/// upper-casing. An injected validator can only narrow this set further.
pub const NAME_SHAPE: &str = "^[A-Z]+[1-9][0-9]*$";

fn shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_SHAPE).expect("cell name shape regex must compile"))
}

/// Fold a name to its canonical (upper-case) form.
pub fn normalize(name: &str) -> String {
    name.to_uppercase()
}

/// Returns true if `name`, after upper-casing, has the intrinsic shape.
pub fn has_shape(name: &str) -> bool {
    shape_re().is_match(&normalize(name))
}

/// Returns true if `name` is valid under `validator`: it must have the
/// intrinsic shape AND match the validator, both checked after upper-casing.
pub fn conforms(name: &str, validator: &Regex) -> bool {
    let upper = normalize(name);
    shape_re().is_match(&upper) && validator.is_match(&upper)
}

/// The default validator pattern: exactly the intrinsic shape.
pub fn default_validator() -> Regex {
    Regex::new(NAME_SHAPE).expect("default validator regex must compile")
}
