//! Slug normalization for free-text display names.
//!
//! Collected editions list their creators by display name only, so the name has to be turned
//! into the slug under which the creator was stored before the link can be resolved.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalized slugs that do not match the stored creator slug.
///
/// Keyed by the output of the automatic normalization.
static SLUG_OVERRIDES: &[(&str, &str)] = &[("jm-dematteis", "j-m-dematteis")];

/// Latin letters with no canonical decomposition, so NFD leaves them intact.
static UNDECOMPOSABLE: &[(char, &str)] = &[
    ('ł', "l"),
    ('ø', "o"),
    ('đ', "d"),
    ('ħ', "h"),
    ('ı', "i"),
    ('ß', "ss"),
    ('æ', "ae"),
    ('œ', "oe"),
];

/// Convert a display name such as `"Stan Lee"` into its slug, `"stan-lee"`.
///
/// Lowercases, replaces spaces with hyphens, drops periods and apostrophes and strips
/// diacritics by decomposing to NFD and discarding combining marks, then applies
/// [`SLUG_OVERRIDES`].
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            ' ' => slug.push('-'),
            '.' | '\'' | '\u{2019}' => {}
            c => match UNDECOMPOSABLE.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => slug.push_str(to),
                None => slug.push(c),
            },
        }
    }

    match SLUG_OVERRIDES.iter().find(|(from, _)| *from == slug) {
        Some((_, to)) => to.to_string(),
        None => slug,
    }
}
