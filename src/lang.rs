//! Fixed catalog of languages shared by voice input and response output.
//!
//! The catalog is read-only; the `code` field is the key used by both the
//! recognition and synthesis engines. Selection UIs iterate the catalog in
//! declaration order.

/// One selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// BCP 47 tag handed to the speech engines.
    pub code: &'static str,
    /// Human-readable name shown in selectors.
    pub name: &'static str,
    /// Synthesis voice tag (currently identical to `code`).
    pub voice: &'static str,
}

/// Fallback code when a requested language is not in the catalog.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// All selectable languages, in display order.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en-US", name: "English (US)", voice: "en-US" },
    Language { code: "es-ES", name: "Spanish", voice: "es-ES" },
    Language { code: "fr-FR", name: "French", voice: "fr-FR" },
    Language { code: "de-DE", name: "German", voice: "de-DE" },
    Language { code: "it-IT", name: "Italian", voice: "it-IT" },
    Language { code: "pt-BR", name: "Portuguese", voice: "pt-BR" },
    Language { code: "ru-RU", name: "Russian", voice: "ru-RU" },
    Language { code: "ja-JP", name: "Japanese", voice: "ja-JP" },
    Language { code: "ko-KR", name: "Korean", voice: "ko-KR" },
    Language { code: "zh-CN", name: "Chinese (Simplified)", voice: "zh-CN" },
    Language { code: "ar-SA", name: "Arabic", voice: "ar-SA" },
    Language { code: "hi-IN", name: "Hindi", voice: "hi-IN" },
];

/// Look up a catalog entry by code.
#[must_use]
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Whether `code` is a valid catalog code.
#[must_use]
pub fn is_valid(code: &str) -> bool {
    find(code).is_some()
}

/// Display name for a code, falling back to the code itself for unknown tags.
#[must_use]
pub fn display_name(code: &str) -> &str {
    find(code).map_or(code, |lang| lang.name)
}

/// Resolve the synthesis voice for a code.
///
/// Unmapped codes fall back to the default language's voice so playback
/// always has a usable voice.
#[must_use]
pub fn voice_for(code: &str) -> &'static str {
    match find(code) {
        Some(lang) => lang.voice,
        None => DEFAULT_LANGUAGE,
    }
}

/// Next catalog code after `code`, wrapping at the end.
///
/// Used by the language-cycle key bindings. Unknown codes restart at the
/// first entry.
#[must_use]
pub fn next_code(code: &str) -> &'static str {
    let idx = LANGUAGES.iter().position(|lang| lang.code == code);
    match idx {
        Some(i) => LANGUAGES[(i + 1) % LANGUAGES.len()].code,
        None => LANGUAGES[0].code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twelve_entries_and_default_first() {
        assert_eq!(LANGUAGES.len(), 12);
        assert_eq!(LANGUAGES[0].code, DEFAULT_LANGUAGE);
    }

    #[test]
    fn find_and_validity() {
        assert!(is_valid("en-US"));
        assert!(is_valid("zh-CN"));
        assert!(!is_valid("en"));
        assert!(!is_valid(""));
        assert_eq!(find("ja-JP").map(|l| l.name), Some("Japanese"));
    }

    #[test]
    fn voice_for_falls_back_to_default() {
        assert_eq!(voice_for("de-DE"), "de-DE");
        assert_eq!(voice_for("xx-XX"), DEFAULT_LANGUAGE);
    }

    #[test]
    fn display_name_echoes_unknown_codes() {
        assert_eq!(display_name("es-ES"), "Spanish");
        assert_eq!(display_name("xx-XX"), "xx-XX");
    }

    #[test]
    fn next_code_cycles_and_wraps() {
        assert_eq!(next_code("en-US"), "es-ES");
        assert_eq!(next_code("hi-IN"), "en-US");
        assert_eq!(next_code("bogus"), "en-US");
    }

    #[test]
    fn codes_are_unique() {
        for (i, lang) in LANGUAGES.iter().enumerate() {
            assert!(
                LANGUAGES.iter().skip(i + 1).all(|other| other.code != lang.code),
                "duplicate code {}",
                lang.code
            );
        }
    }
}
