// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display names for the site languages.

use super::Lang;

/// English name of a language, as shown in summaries.
pub fn language_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Tr => "Turkish",
        Lang::En => "English",
        Lang::Ru => "Russian",
    }
}

/// Name of a language written in its own script.
pub fn native_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Tr => "Türkçe",
        Lang::En => "English",
        Lang::Ru => "Русский",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_is_named() {
        for lang in Lang::all() {
            assert!(!language_name(*lang).is_empty());
            assert!(!native_name(*lang).is_empty());
        }
    }

    #[test]
    fn russian_native_name_is_cyrillic() {
        assert_eq!(native_name(Lang::Ru), "Русский");
    }
}
