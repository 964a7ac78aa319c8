//! Cover image URL resolution.

use crate::api::open_library::Doc;

const COVERS_URL: &str = "https://covers.openlibrary.org/b";

// medium size, the only size the cards use
const SIZE_SUFFIX: &str = "-M.jpg";

/// Derives a cover image URL from the doc's cover identifiers.
///
/// The fallback order is fixed: the numeric cover id is the most direct
/// route to an image, the first ISBN comes next and the first edition key
/// last. Returns [`None`] when the doc carries none of the three, the
/// renderer shows a placeholder in that case.
pub(crate) fn cover_url(doc: &Doc) -> Option<String> {
    if let Some(id) = doc.cover_i {
        return Some(format!("{COVERS_URL}/id/{id}{SIZE_SUFFIX}"));
    }

    if let Some(isbn) = doc.isbn.first() {
        return Some(format!("{COVERS_URL}/isbn/{isbn}{SIZE_SUFFIX}"));
    }

    doc.edition_key
        .first()
        .map(|olid| format!("{COVERS_URL}/olid/{olid}{SIZE_SUFFIX}"))
}
