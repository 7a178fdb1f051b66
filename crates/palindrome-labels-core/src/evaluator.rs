//! Request evaluation: count non-whitelisted palindrome labels against the threshold.

use std::collections::BTreeSet;

use crate::labels::LabelSet;
use crate::palindrome::is_palindrome;
use crate::settings::Settings;
use crate::verdict::Verdict;

/// Palindrome label names that are not whitelisted, in lexicographic order.
pub fn offending_labels<'a>(labels: &'a LabelSet, settings: &Settings) -> BTreeSet<&'a str> {
    labels
        .iter()
        .filter(|label| is_palindrome(label))
        .filter(|label| !settings.whitelisted_labels().contains(*label))
        .collect()
}

/// Decide whether the request may be admitted.
///
/// A negative threshold (only reachable with unvalidated settings) counts as 0.
pub fn evaluate(labels: &LabelSet, settings: &Settings) -> Verdict {
    let offending = offending_labels(labels, settings);
    let threshold = settings.threshold().max(0);

    let count = i64::try_from(offending.len()).unwrap_or(i64::MAX);
    if count <= threshold {
        return Verdict::Accepted;
    }

    Verdict::rejected(format!(
        "Too many palindrome labels that are not-whitelisted: {}. Max allowed [{}]",
        offending.into_iter().collect::<Vec<_>>().join(","),
        threshold
    ))
}
