use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

/// The word being typed: the trailing run of letters before the cursor.
///
/// Letters are alphabetic characters plus combining marks, so decomposed
/// accents and Indic vowel signs or viramas stay inside the word. Runs are
/// taken whole grapheme clusters at a time.
///
/// Returns `None` when the context is empty or ends in a non-letter
/// (space, punctuation, digit), i.e. when no word is in progress.
pub fn last_word(context_before: &str) -> Option<&str> {
    let start = context_before
        .grapheme_indices(true)
        .rev()
        .take_while(|(_, g)| is_word_grapheme(g))
        .last()
        .map(|(i, _)| i)?;
    Some(&context_before[start..])
}

/// Number of user-perceived characters in `s`. A host backspace removes one.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

fn is_word_grapheme(g: &str) -> bool {
    g.chars().all(|c| c.is_alphabetic() || is_combining_mark(c))
}
