//! Stub Config - 로더 설정
//!
//! 기본 주소와 고정 상수를 관리합니다.

use serde::{Deserialize, Serialize};

/// 매니페스트 파일명 (고정)
pub const MANIFEST_FILE: &str = "manifest.json";

/// 에러 메시지에 쓰이는 모드 태그
pub const MOD_TAG: &str = "__DEV_MOD";

/// 자동 로드 토글의 영속 저장 키 (고정)
pub const AUTO_LOAD_KEY: &str = "DEBUG_STUB_AUTO_LOAD";

/// 자동 로드 대상 저장의 캐릭터 이름 (sentinel)
pub const AUTO_LOAD_SAVE_NAME: &str = "MOD_TEST";

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

/// DevStub 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubConfig {
    /// 리소스 기본 주소
    ///
    /// 참조는 단순 연결로 해석된다. 경로 정규화나 이스케이프는 하지 않는다.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl StubConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// resolve(ref) = base + ref
    pub fn resolve_url(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource)
    }
}

// ============================================================================
// 테스트
// ============================================================================
