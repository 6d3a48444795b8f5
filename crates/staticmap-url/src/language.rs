//! Supported display languages for map tile labels.
//!
//! The API localizes tile labels for a fixed set of language codes. Codes
//! outside this table are ignored by [`StaticMap::with_language`].
//!
//! [`StaticMap::with_language`]: crate::StaticMap::with_language

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Language codes the tile renderer supports.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "eu", "bg", "bn", "ca", "cs", "da", "de", "el", "en", "en-AU", "en-GB", "es", "fa", "fi",
    "fil", "fr", "gl", "gu", "hi", "hr", "hu", "id", "it", "iw", "ja", "kn", "ko", "lt", "lv",
    "ml", "mr", "nl", "nn", "no", "or", "pl", "pt", "pt-BR", "pt-PT", "rm", "ro", "ru", "sk",
    "sl", "sr", "sv", "tl", "ta", "te", "th", "tr", "uk", "vi", "zh-CN", "zh-TW",
];

lazy_static! {
    static ref LANGUAGE_SET: FxHashSet<&'static str> =
        SUPPORTED_LANGUAGES.iter().copied().collect();
}

/// Returns true if the tile renderer supports the given language code.
///
/// Matching is exact and case-sensitive ("en-GB", not "en-gb").
pub fn is_supported(code: &str) -> bool {
    LANGUAGE_SET.contains(code)
}
