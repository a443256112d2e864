//! 키릴 -> 라틴 음역 변환기

use crate::core::table::MappingTable;
use crate::core::unicode::{fold_key, CaseStyle};

/// 매핑 테이블로 문자열을 음역
///
/// 테이블에 없는 문자(숫자, 구두점, 다른 문자 체계)는 그대로 유지하고,
/// 치환값이 빈 문자열이면 해당 문자를 제거합니다.
/// 대문자의 다중 글자 치환은 바로 다음 원본 문자를 보고 결정합니다.
///
/// # Examples
/// ```
/// use translit::{transliterate, RUSSIAN_ASCII};
/// assert_eq!(transliterate("Щи", &RUSSIAN_ASCII), "Schi");
/// assert_eq!(transliterate("ЩИ", &RUSSIAN_ASCII), "SCHI");
/// ```
pub fn transliterate(input: &str, table: &MappingTable) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match table.get(fold_key(c)) {
            None => output.push(c),
            Some("") => {}
            Some(replacement) => {
                CaseStyle::for_char(c, chars.peek().copied()).push_into(replacement, &mut output);
            }
        }
    }

    output
}

/// 테이블 하나를 고정해 반복 사용하는 음역기
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'a> {
    table: &'a MappingTable,
}

impl<'a> Transliterator<'a> {
    pub fn new(table: &'a MappingTable) -> Self {
        Self { table }
    }

    pub fn transliterate(&self, input: &str) -> String {
        transliterate(input, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::{CYRILLIC_LATIN, RUSSIAN_ASCII};

    fn ru(s: &str) -> String {
        transliterate(s, &RUSSIAN_ASCII)
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(ru("частица"), "chastica");
        assert_eq!(ru("щи"), "schi");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(ru("Частица"), "Chastica");
        assert_eq!(ru("Щи"), "Schi");
    }

    #[test]
    fn test_all_caps() {
        assert_eq!(ru("ЩИ"), "SCHI");
        assert_eq!(ru("Это ДОЛЖНО работать"), "Eto DOLZHNO rabotat");
        // 단어 끝의 대문자
        assert_eq!(ru("ЁЖ"), "YOZH");
        assert_eq!(ru("Ж"), "ZH");
    }

    #[test]
    fn test_mixed_case_word() {
        assert_eq!(ru("проЩай"), "proSchaj");
    }

    #[test]
    fn test_elision_and_punctuation() {
        assert_eq!(ru("Лебедь, Рак и Щука"), "Lebed, Rak i Schuka");
        assert_eq!(ru("ь"), "");
        assert_eq!(ru("ЬЬЬ"), "");
    }

    #[test]
    fn test_lookahead_uses_source_chars() {
        // 다음 문자가 제거되는 Ь여도 원본 기준으로 판단 (Ь는 대문자)
        assert_eq!(ru("ШЬ"), "SH");
        assert_eq!(ru("Шь"), "Sh");
        // 대문자 뒤 구두점은 Title
        assert_eq!(ru("Ш,"), "Sh,");
        assert_eq!(ru("Ч1"), "Ch1");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(ru("English must work тоже"), "English must work tozhe");
        assert_eq!(ru("123 !?"), "123 !?");
        assert_eq!(ru(""), "");
        assert_eq!(ru("한글 ελληνικά"), "한글 ελληνικά");
    }

    #[test]
    fn test_cyrillic_latin_table() {
        let tr = Transliterator::new(&CYRILLIC_LATIN);
        assert_eq!(tr.transliterate("жук"), "žuk");
        assert_eq!(tr.transliterate("Щи"), "Šči");
        assert_eq!(tr.transliterate("ЩИ"), "ŠČI");
        assert_eq!(tr.transliterate("Љубљана"), "Ljubljana");
        assert_eq!(tr.transliterate("ЉУБЉАНА"), "LJUBLJANA");
        assert_eq!(tr.transliterate("Ѓорѓе"), "Ǵorǵe");
        assert_eq!(tr.transliterate("Київ"), "Kiïv");
    }

    #[test]
    fn test_other_uppercase_next_is_title() {
        // Ⅱ는 대문자 글자(Lu)가 아니므로 Title
        assert_eq!(ru("ЩⅡ"), "SchⅡ");
        assert_eq!(ru("ЖⒶ"), "ZhⒶ");
    }

    #[test]
    fn test_dotted_capital_i_folds_to_i() {
        let table = MappingTable::from_pairs([("i", "ee")]).unwrap();
        assert_eq!(transliterate("İ", &table), "EE");
        assert_eq!(transliterate("İx", &table), "Eex");
    }
}
