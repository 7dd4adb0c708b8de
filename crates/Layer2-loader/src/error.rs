//! Loader-specific error types
//!
//! LoadError는 리소스 로딩 관련 세부 에러를 관리합니다.
//! devstub_foundation::Error와의 변환을 지원합니다.

use devstub_foundation::{Error as FoundationError, ResourceKind, ResourceRef, MOD_TAG};
use thiserror::Error;

/// Errors that can occur while loading resources
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// 잘못된 종류로 로더가 호출됨 (dispatch 버그 또는 직접 호출 실수)
    #[error("[{}] Cannot load resource \"{}\" as {}. Expected file type {}.", MOD_TAG, .resource, .kind.descriptor(), .kind.expected_file_types())]
    KindMismatch {
        resource: String,
        kind: ResourceKind,
    },

    /// 어떤 종류에도 속하지 않는 리소스 (비문자열 포함)
    #[error("Mod \"{}\" resource \"{}\" is invalid and cannot be loaded.", MOD_TAG, .resource)]
    InvalidResource { resource: String },

    /// 네트워크/스크립트 로드 실패
    #[error("{0}")]
    Transport(String),

    /// 모듈 평가 실패 - 호스트가 만든 메시지를 재포장 없이 그대로 전달
    #[error("{0}")]
    Evaluation(String),
}

impl LoadError {
    /// 종류 불일치 에러 생성
    pub fn kind_mismatch(resource: &ResourceRef, kind: ResourceKind) -> Self {
        LoadError::KindMismatch {
            resource: resource.to_string(),
            kind,
        }
    }

    /// 무효 리소스 에러 생성 (dispatcher 전용)
    pub fn invalid_resource(resource: &ResourceRef) -> Self {
        LoadError::InvalidResource {
            resource: resource.to_string(),
        }
    }

    /// 스크립트 엘리먼트의 error 이벤트
    pub fn script_failed(resource: &ResourceRef) -> Self {
        LoadError::Transport(format!(
            "[{}] Error loading resource \"{}\".",
            MOD_TAG, resource
        ))
    }

    /// 템플릿 문서 페치 실패 - 리소스를 특정하지 않는 고정 메시지
    pub fn templates_failed() -> Self {
        LoadError::Transport(format!("[{}] Templates failed to load.", MOD_TAG))
    }
}

// ============================================================================
// devstub_foundation::Error 변환
// ============================================================================

impl From<LoadError> for FoundationError {
    fn from(err: LoadError) -> Self {
        match &err {
            LoadError::KindMismatch { .. } | LoadError::InvalidResource { .. } => {
                FoundationError::Resource(err.to_string())
            }
            LoadError::Transport(message) => FoundationError::Http(message.clone()),
            LoadError::Evaluation(message) => FoundationError::Host(message.clone()),
        }
    }
}

// ============================================================================
// 테스트
// ============================================================================
