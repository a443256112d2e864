//! 내장 매핑 테이블

use crate::core::table::MappingTable;

/// 내장 테이블 이름
pub const RUSSIAN_ASCII_NAME: &str = "russian-ascii";
pub const CYRILLIC_LATIN_NAME: &str = "cyrillic-latin";

lazy_static::lazy_static! {
    /// 러시아어 키릴 -> ASCII 라틴 (영문 26자 + 아포스트로피만 사용)
    pub static ref RUSSIAN_ASCII: MappingTable = MappingTable::from_static(&[
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('з', "z"),
        ('и', "i"),
        ('й', "j"),
        ('к', "k"),
        ('л', "l"),
        ('м', "m"),
        ('н', "n"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ъ', "'"),
        ('ы', "y"),
        ('ь', ""), // 묵음
        ('э', "e"),
        ('ю', "ju"),
        ('я', "ja"),
    ]);

    /// 키릴 -> 체코/세르비아식 라틴 (발음 구별 기호 포함)
    /// 우크라이나/세르비아/마케도니아 고유 문자와 ѣ 포함
    pub static ref CYRILLIC_LATIN: MappingTable = MappingTable::from_static(&[
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('ґ', "g"),
        ('ѓ', "ǵ"),
        ('д', "d"),
        ('ђ', "đ"),
        ('е', "e"),
        ('ё', "ë"),
        ('ж', "ž"),
        ('з', "z"),
        ('ѕ', "ẑ"),
        ('и', "i"),
        ('і', "ì"),
        ('ї', "ï"),
        ('й', "j"),
        ('ј', "j"),
        ('к', "k"),
        ('л', "l"),
        ('љ', "lj"),
        ('м', "m"),
        ('н', "n"),
        ('њ', "nj"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('ћ', "ć"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "č"),
        ('џ', "dž"),
        ('ш', "š"),
        ('щ', "šč"),
        ('ъ', "'"),
        ('ы', "y"),
        ('ь', ""),
        ('ѣ', "ě"),
        ('э', "e"),
        ('є', "ê"),
        ('ю', "ju"),
        ('я', "ja"),
    ]);
}

/// 이름으로 내장 테이블 조회
pub fn by_name(name: &str) -> Option<&'static MappingTable> {
    match name {
        RUSSIAN_ASCII_NAME => Some(&*RUSSIAN_ASCII),
        CYRILLIC_LATIN_NAME => Some(&*CYRILLIC_LATIN),
        _ => None,
    }
}

/// 내장 테이블 이름 목록
pub fn names() -> &'static [&'static str] {
    &[RUSSIAN_ASCII_NAME, CYRILLIC_LATIN_NAME]
}
