//! Storage - 설정 키-값 저장소
//!
//! 호스트가 자체 저장소를 주입할 수도 있고, 여기 제공되는 구현을 쓸 수도
//! 있습니다. 값은 전부 문자열입니다 (원 저장 형식과 동일).

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// 설정 파일명
pub const SETTINGS_FILE: &str = "settings.json";

// ============================================================================
// SettingsStore Trait
// ============================================================================

/// 문자열 키-값 저장소
///
/// 영속 토글 플래그가 이 인터페이스 뒤에 저장된다. 쓰기는 실패하지 않는
/// 것으로 취급한다 (파일 구현은 실패를 로그로만 남긴다).
pub trait SettingsStore: Send + Sync {
    /// 키 조회
    fn get(&self, key: &str) -> Option<String>;

    /// 키 저장
    fn set(&self, key: &str, value: &str);
}

// ============================================================================
// MemorySettingsStore
// ============================================================================

/// 인메모리 저장소 (테스트, 영속이 필요 없는 호스트용)
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

// ============================================================================
// JsonSettingsStore
// ============================================================================

/// JSON 파일 저장소
///
/// 전체 맵을 파일 하나에 pretty JSON으로 유지한다. 읽기는 메모리 캐시에서,
/// 쓰기는 즉시 파일에 반영한다.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl JsonSettingsStore {
    /// 파일에서 열기 (없으면 빈 저장소로 시작)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                Error::Storage(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&content).map_err(|e| {
                Error::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// 글로벌 설정 (~/.config/devstub/settings.json)
    pub fn global() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Storage("Cannot find config directory".to_string()))?
            .join("devstub");
        Self::open(dir.join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Storage(format!("Failed to create directory: {}", e))
                })?;
            }
        }
        let content = serde_json::to_string_pretty(values)
            .map_err(|e| Error::Storage(format!("Failed to serialize: {}", e)))?;
        std::fs::write(&self.path, content).map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());

        if let Err(error) = self.persist(&values) {
            warn!(key, %error, "failed to persist settings");
        }
    }
}

// ============================================================================
// 테스트
// ============================================================================
