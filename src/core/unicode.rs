//! 유니코드 대소문자 변환 유틸리티

/// 치환 문자열에 적용할 대소문자 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// 저장된 그대로 (원본이 소문자)
    AsStored,
    /// 첫 글자만 대문자 (Щи -> Schi)
    Title,
    /// 전부 대문자 (ЩИ -> SCHI)
    Upper,
}

impl CaseStyle {
    /// 원본 문자와 바로 다음 원본 문자로 형태 결정
    ///
    /// 대소문자 구분이 없는 문자(숫자, 구두점, 공백)는 "대문자 아님"으로 취급하므로
    /// 대문자 뒤에 쉼표가 오면 Title이 됩니다.
    pub fn for_char(current: char, next: Option<char>) -> Self {
        if !is_upper_letter(current) {
            return CaseStyle::AsStored;
        }
        match next {
            Some(n) if !is_upper_letter(n) => CaseStyle::Title,
            _ => CaseStyle::Upper,
        }
    }

    /// 치환 문자열을 이 형태로 `out`에 추가
    pub fn push_into(self, replacement: &str, out: &mut String) {
        match self {
            CaseStyle::AsStored => out.push_str(replacement),
            CaseStyle::Title => {
                let mut chars = replacement.chars();
                if let Some(first) = chars.next() {
                    out.push(simple_upper(first));
                    out.push_str(chars.as_str());
                }
            }
            CaseStyle::Upper => out.extend(replacement.chars().map(simple_upper)),
        }
    }
}

/// 대문자 글자(Lu)인지 확인
///
/// `char::is_uppercase`는 Other_Uppercase 속성 문자(로마 숫자 Ⅱ, 원문자 Ⓐ 등)도
/// 대문자로 보므로 해당 영역을 제외합니다.
pub fn is_upper_letter(c: char) -> bool {
    if !c.is_uppercase() {
        return false;
    }
    let cp = c as u32;
    !((0x2160..=0x216F).contains(&cp) // Ⅰ-Ⅿ
        || (0x24B6..=0x24CF).contains(&cp) // Ⓐ-Ⓩ
        || (0x1F130..=0x1F149).contains(&cp) // 🄰-🅉
        || (0x1F150..=0x1F169).contains(&cp) // 🅐-🅩
        || (0x1F170..=0x1F189).contains(&cp)) // 🅰-🆉
}

/// 테이블 조회용 소문자 키 (1:1 소문자 매핑)
pub fn fold_key(c: char) -> char {
    // İ는 전체 매핑으로는 "i̇" 두 글자, 단순 매핑으로는 i
    if c == 'İ' {
        return 'i';
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// 1:1 대문자 매핑. 여러 글자로 확장되는 문자(ß 등)는 그대로 유지
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
