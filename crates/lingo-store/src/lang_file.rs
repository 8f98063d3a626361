//! Recognising per-language document files.
//!
//! A language file is named `<code>.json` where `<code>` is two or three
//! ASCII letters, optionally followed by `-` or `_` and an alphanumeric
//! subtag of up to eight characters:
//!
//! - `en.json`, `fra.json`, `pt-BR.json`, `zh_Hant.json` are language files
//! - `resume.json`, `schema.json`, `en.txt`, `e.json` are not

use std::path::Path;

use lingo_types::LangCode;

const EXTENSION: &str = "json";
const MAX_SUBTAG_LEN: usize = 8;

/// The language a file holds, if its name marks it as a language file.
pub fn language_of(path: &Path) -> Option<LangCode> {
    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if !is_language_stem(stem) {
        return None;
    }
    LangCode::new(stem).ok()
}

/// File name used for a language's document.
pub fn file_name(lang: &LangCode) -> String {
    format!("{lang}.{EXTENSION}")
}

fn is_language_stem(stem: &str) -> bool {
    let (primary, subtag) = match stem.find(['-', '_']) {
        Some(at) => (&stem[..at], Some(&stem[at + 1..])),
        None => (stem, None),
    };

    let primary_ok = (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic());
    let subtag_ok = subtag.map_or(true, |tag| {
        (1..=MAX_SUBTAG_LEN).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphanumeric())
    });

    primary_ok && subtag_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(name: &str) -> Option<String> {
        language_of(Path::new(name)).map(LangCode::into_string)
    }

    #[test]
    fn recognises_language_files() {
        assert_eq!(lang("en.json").as_deref(), Some("en"));
        assert_eq!(lang("fra.json").as_deref(), Some("fra"));
        assert_eq!(lang("pt-BR.json").as_deref(), Some("pt-BR"));
        assert_eq!(lang("zh_Hant.json").as_deref(), Some("zh_Hant"));
        assert_eq!(lang("/some/dir/fr.json").as_deref(), Some("fr"));
    }

    #[test]
    fn ignores_other_files() {
        for name in [
            "resume.json",
            "schema.json",
            "en.txt",
            "e.json",
            "en",
            "en-.json",
            "en-US-x.json",
            "e1.json",
            "en-toolongsubtag.json",
        ] {
            assert_eq!(lang(name), None, "{name}");
        }
    }

    #[test]
    fn file_name_round_trip() {
        let code = LangCode::new("pt-BR").unwrap();
        let name = file_name(&code);
        assert_eq!(name, "pt-BR.json");
        assert_eq!(language_of(Path::new(&name)), Some(code));
    }
}
