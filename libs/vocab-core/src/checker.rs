//! Answer checking for quiz questions.

use crate::error::CheckError;
use crate::vocabulary::{CheckOptions, Vocabulary};

/// Check whether `answer` is the correct translation of `key`.
///
/// With `case_sensitive` set the answer must match exactly; otherwise both
/// sides are compared after [`fold_case`].
///
/// # Panics
///
/// Panics with [`CheckError::EmptyVocabulary`] if `vocabulary` is empty and
/// with [`CheckError::UnknownKey`] if `key` is not in it. Use [`try_check`]
/// to get these as errors instead.
pub fn check(vocabulary: &Vocabulary, key: &str, answer: &str, case_sensitive: bool) -> bool {
    match try_check(vocabulary, key, answer, CheckOptions { case_sensitive }) {
        Ok(is_correct) => is_correct,
        Err(err) => panic!("{err}"),
    }
}

/// Non-panicking form of [`check`].
pub fn try_check(
    vocabulary: &Vocabulary,
    key: &str,
    answer: &str,
    options: CheckOptions,
) -> Result<bool, CheckError> {
    if vocabulary.is_empty() {
        tracing::debug!("answer checked against empty vocabulary");
        return Err(CheckError::EmptyVocabulary);
    }

    let correct = vocabulary.translation(key).ok_or_else(|| {
        tracing::debug!(key, "answer checked for unknown word");
        CheckError::UnknownKey {
            key: key.to_string(),
        }
    })?;

    let is_correct = if options.case_sensitive {
        answer == correct
    } else {
        fold_case(answer) == fold_case(correct)
    };

    tracing::trace!(key, case_sensitive = options.case_sensitive, is_correct, "checked answer");
    Ok(is_correct)
}

/// Fold a string to uppercase for case-insensitive comparison.
///
/// Uses the Unicode default case mapping, which does not depend on locale.
pub fn fold_case(s: &str) -> String {
    s.to_uppercase()
}
