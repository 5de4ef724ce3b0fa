//! API endpoint paths and path-template helpers.
//!
//! Endpoint templates contain `{...}` placeholders that are filled
//! positionally from the request's path arguments. Endpoints accepting
//! several IDs take them as a single `;`-joined list (see [`join_ids`]).

/// Questions on a site.
pub const QUESTIONS: &str = "/questions";

/// Answers to a set of questions.
pub const QUESTION_ANSWERS: &str = "/questions/{ids}/answers";

/// Comments on a set of questions.
pub const QUESTION_COMMENTS: &str = "/questions/{ids}/comments";

/// A set of answers by ID.
pub const ANSWERS: &str = "/answers/{ids}";

/// Comments on a set of answers.
pub const ANSWER_COMMENTS: &str = "/answers/{ids}/comments";

/// A set of users by ID.
pub const USERS: &str = "/users/{ids}";

/// Fill the `{...}` placeholders of `template` from `args`, in order.
///
/// The i-th placeholder is replaced by `args[i]`, braces included. When
/// `args` runs out the remaining placeholders are left verbatim; extra
/// args are ignored. A `{` with no matching `}` ends placeholder
/// scanning and the rest of the template is copied literally.
#[must_use]
pub fn fill_placeholders<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        out.push_str(&rest[..open]);
        match args.get(next) {
            Some(arg) => out.push_str(arg.as_ref()),
            None => out.push_str(&rest[open..=close]),
        }
        next += 1;
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Join IDs with the API's `;` separator, preserving order.
#[must_use]
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
