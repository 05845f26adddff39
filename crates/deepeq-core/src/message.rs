//! Failure message formatting.
//!
//! The formats are fixed and matched verbatim by callers. Messages without
//! a path label the sides "Value of", messages with a path label them
//! "Value from".

use crate::errors::FailureReason;

const NULL: &str = "null";

pub(crate) fn null_inequality(first: Option<&str>, second: Option<&str>, path: Option<&str>) -> String {
    let reason = FailureReason::SingleValueIsNull.description();
    let first = first.unwrap_or(NULL);
    let second = second.unwrap_or(NULL);
    match path {
        Some(path) => format!("{reason} at {path}\nValue from obj1: {first}\nValue from obj2: {second}"),
        None => format!("{reason}\nValue of obj1: {first}\nValue of obj2: {second}"),
    }
}

pub(crate) fn type_inequality(first_type: &str, second_type: &str, path: Option<&str>) -> String {
    let reason = FailureReason::TypeMismatch.description();
    match path {
        Some(path) => {
            format!("{reason} at {path}\nType of obj1: {first_type}\nType of obj2: {second_type}")
        }
        None => format!("{reason}\nType of obj1: {first_type}\nType of obj2: {second_type}"),
    }
}

pub(crate) fn value_inequality(first: &str, second: &str, path: Option<&str>) -> String {
    let reason = FailureReason::ValueInequality.description();
    match path {
        Some(path) => format!("{reason} at {path}\nValue from obj1: {first}\nValue from obj2: {second}"),
        None => format!("{reason}\nValue of obj1: {first}\nValue of obj2: {second}"),
    }
}

pub(crate) fn count_mismatch(path: &str) -> String {
    format!("{} at {path}", FailureReason::CountMismatch.description())
}

pub(crate) fn circular_reference_inequality(first: &str, second: &str, path: &str) -> String {
    format!(
        "{} at {path}\nValue from obj1: {first}\nValue from obj2: {second}",
        FailureReason::CircularReferenceInequality.description()
    )
}
