//! Naming-convention predicates.
//!
//! Every check anchors at the end of the identifier: `save!` is a bang
//! method, `save!all` is not.

/// Suffix of destructive ("bang") methods
pub const BANG_SUFFIX: char = '!';

/// Suffix of predicate methods
pub const QUESTION_SUFFIX: char = '?';

/// Suffix of attribute writers
pub const SETTER_SUFFIX: char = '=';

/// Designated constructor identifier of the default object model
pub const DEFAULT_CONSTRUCTOR_NAME: &str = "initialize";

/// Return types that document the absence of a meaningful value
pub const UNUSABLE_RETURN_VALUES: &[&str] = &["nil", "nothing", "undefined", "void"];

pub fn is_bang_name(name: &str) -> bool {
    name.ends_with(BANG_SUFFIX)
}

pub fn is_questioning_name(name: &str) -> bool {
    name.ends_with(QUESTION_SUFFIX)
}

/// Whether the name has the writer suffix. Arity is checked separately.
pub fn has_setter_suffix(name: &str) -> bool {
    name.ends_with(SETTER_SUFFIX)
}

pub fn is_constructor_name(name: &str, constructor_name: &str) -> bool {
    name == constructor_name
}

/// Reader name paired with a writer name: `age=` gives `age`.
/// Names without the writer suffix come back unchanged.
pub fn getter_name_for(name: &str) -> &str {
    name.strip_suffix(SETTER_SUFFIX).unwrap_or(name)
}

/// Writer name paired with a reader name: `age` gives `age=`
pub fn setter_name_for(name: &str) -> String {
    format!("{name}{SETTER_SUFFIX}")
}

/// Whether a declared type list is exactly one "no value" type
pub fn is_unusable_return<S: AsRef<str>>(types: &[&str], vocabulary: &[S]) -> bool {
    match types {
        [only] => vocabulary.iter().any(|v| v.as_ref() == *only),
        _ => false,
    }
}
