//! 문자 매핑 테이블
//!
//! 소문자 키릴 문자 하나를 0개 이상의 라틴 문자열로 대응시키는 읽기 전용 테이블입니다.

use std::collections::HashMap;

use crate::core::unicode::fold_key;

/// 사용자 정의 테이블 생성 에러
#[derive(Debug)]
pub enum TableError {
    /// 키가 정확히 한 글자가 아님
    InvalidKey(String),
    /// 키가 소문자가 아님
    UppercaseKey(char),
    /// JSON 파싱 실패
    Parse(String),
    /// 테이블 형식 오류
    Format(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::InvalidKey(k) => write!(f, "키는 한 글자여야 합니다: {:?}", k),
            TableError::UppercaseKey(c) => write!(f, "키는 소문자여야 합니다: {:?}", c),
            TableError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            TableError::Format(s) => write!(f, "테이블 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for TableError {}

/// 소문자 원본 문자 -> 치환 문자열
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<char, String>,
}

impl MappingTable {
    /// 키-치환 쌍으로 테이블 생성
    ///
    /// 키는 한 글자이고 이미 소문자여야 합니다.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, TableError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = HashMap::new();
        for (key, replacement) in pairs {
            let key = single_char(key.as_ref())?;
            if fold_key(key) != key {
                return Err(TableError::UppercaseKey(key));
            }
            entries.insert(key, replacement.into());
        }
        Ok(Self { entries })
    }

    /// 내장 테이블용 생성자. 키 검증은 테이블 테스트가 담당
    pub(crate) fn from_static(pairs: &[(char, &str)]) -> Self {
        Self {
            entries: pairs.iter().map(|&(k, v)| (k, v.to_string())).collect(),
        }
    }

    /// JSON 객체 문자열에서 테이블 생성
    ///
    /// # 형식
    /// ```json
    /// { "а": "a", "ж": "zh", "ь": "" }
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let value: serde_json::Value =
            serde_json::from_str(json_str).map_err(|e| TableError::Parse(e.to_string()))?;

        let obj = value
            .as_object()
            .ok_or_else(|| TableError::Format("최상위 값이 객체가 아닙니다".into()))?;

        let mut pairs = Vec::with_capacity(obj.len());
        for (key, val) in obj {
            let replacement = val.as_str().ok_or_else(|| {
                TableError::Format(format!("치환값이 문자열이 아닙니다: {}", key))
            })?;
            pairs.push((key.as_str(), replacement));
        }

        Self::from_pairs(pairs)
    }

    /// 소문자 키로 치환 문자열 조회
    pub fn get(&self, key: char) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (키, 치환) 순회. 순서는 보장하지 않음
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn single_char(key: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::InvalidKey(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let table = MappingTable::from_pairs([("ж", "zh"), ("ь", "")]).unwrap();
        assert_eq!(table.get('ж'), Some("zh"));
        assert_eq!(table.get('ь'), Some(""));
        assert_eq!(table.get('Ж'), None); // 조회는 소문자 키로만
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_rejects_uppercase_key() {
        let err = MappingTable::from_pairs([("Ж", "zh")]).unwrap_err();
        assert!(matches!(err, TableError::UppercaseKey('Ж')));
        // 조회 시 i로 접히므로 키로 쓸 수 없음
        assert!(matches!(
            MappingTable::from_pairs([("İ", "i")]),
            Err(TableError::UppercaseKey('İ'))
        ));
    }

    #[test]
    fn test_rejects_multi_char_key() {
        assert!(matches!(
            MappingTable::from_pairs([("жж", "zh")]),
            Err(TableError::InvalidKey(_))
        ));
        assert!(matches!(
            MappingTable::from_pairs([("", "x")]),
            Err(TableError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let table = MappingTable::from_json(r#"{"щ": "shch", "ъ": ""}"#).unwrap();
        assert_eq!(table.get('щ'), Some("shch"));
        assert_eq!(table.get('ъ'), Some(""));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            MappingTable::from_json("not json"),
            Err(TableError::Parse(_))
        ));
        assert!(matches!(
            MappingTable::from_json(r#"["а"]"#),
            Err(TableError::Format(_))
        ));
        assert!(matches!(
            MappingTable::from_json(r#"{"а": 1}"#),
            Err(TableError::Format(_))
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = MappingTable::default();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
