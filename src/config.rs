//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::table::{MappingTable, TableError};
use crate::core::tables;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "TRANSLIT_CONFIG";

/// 설정 파일 처리 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 직렬화/파싱 실패
    Json(String),
    /// 사용자 정의 테이블 오류
    Table { name: String, source: TableError },
    /// 테이블 이름을 찾을 수 없음
    UnknownTable(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Json(s) => write!(f, "설정 JSON 오류: {}", s),
            ConfigError::Table { name, source } => {
                write!(f, "테이블 '{}' 오류: {}", name, source)
            }
            ConfigError::UnknownTable(name) => write!(f, "알 수 없는 테이블: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

/// translit 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranslitConfig {
    /// --table 미지정 시 사용할 테이블 이름
    #[serde(default = "default_table")]
    pub default_table: String,
    /// 사용자 정의 테이블: 이름 -> (소문자 키 -> 치환 문자열)
    #[serde(default)]
    pub tables: BTreeMap<String, BTreeMap<String, String>>,
}

fn default_table() -> String {
    tables::RUSSIAN_ASCII_NAME.to_string()
}

impl Default for TranslitConfig {
    fn default() -> Self {
        Self {
            default_table: default_table(),
            tables: BTreeMap::new(),
        }
    }
}

impl TranslitConfig {
    /// 이름으로 테이블 조회 (사용자 정의 우선, 그다음 내장)
    pub fn resolve_table(&self, name: &str) -> Result<Cow<'static, MappingTable>, ConfigError> {
        if let Some(entries) = self.tables.get(name) {
            let table = MappingTable::from_pairs(entries.iter().map(|(k, v)| (k, v.as_str())))
                .map_err(|source| ConfigError::Table {
                    name: name.to_string(),
                    source,
                })?;
            log::debug!("사용자 정의 테이블 사용: {} ({}개 항목)", name, table.len());
            return Ok(Cow::Owned(table));
        }

        tables::by_name(name)
            .map(Cow::Borrowed)
            .ok_or_else(|| ConfigError::UnknownTable(name.to_string()))
    }

    /// 사용 가능한 테이블 이름 (내장 + 사용자 정의)
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = tables::names().iter().map(|s| s.to_string()).collect();
        for name in self.tables.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// 설정 파일 경로
///
/// 우선순위: $TRANSLIT_CONFIG > $XDG_CONFIG_HOME/translit > ~/.config/translit
pub fn config_path() -> PathBuf {
    config_path_with(|key| std::env::var_os(key))
}

/// 환경 변수 조회 함수를 받아 설정 파일 경로 결정
fn config_path_with<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(path) = var(CONFIG_ENV) {
        return path;
    }

    let base = var("XDG_CONFIG_HOME")
        .filter(|p| p.is_absolute())
        .or_else(|| {
            var("HOME")
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("translit").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TranslitConfig {
    load_config_or_default(&config_path())
}

/// 지정 경로에서 설정 로드, 실패 시 기본값
pub fn load_config_or_default(path: &Path) -> TranslitConfig {
    match load_config_from(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            TranslitConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            TranslitConfig::default()
        }
    }
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<TranslitConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 저장
pub fn save_config(config: &TranslitConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &TranslitConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
