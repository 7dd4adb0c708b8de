//! Manifest - 모드 매니페스트
//!
//! 시작 시 한 번 읽고, 변경하지 않으며, 오케스트레이션이 끝나면 버립니다.

use crate::resource::ResourceRef;
use serde::Deserialize;

/// 모드 매니페스트
///
/// 인식하는 필드는 `setup`과 `load` 두 개뿐이며, 그 외 필드는 무시됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// setup 진입점을 export하는 Module 참조 (선택)
    #[serde(default)]
    pub setup: Option<ResourceRef>,

    /// 로드할 리소스 - 하나 또는 순서 있는 목록 (선택)
    #[serde(default)]
    pub load: Option<LoadList>,
}

/// `load` 필드의 두 형태
///
/// `Many`가 먼저 와야 한다: `ResourceRef`는 어떤 JSON 값이든 받아들이므로
/// `One`이 앞에 있으면 배열까지 삼켜버린다.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoadList {
    Many(Vec<ResourceRef>),
    One(ResourceRef),
}

// ============================================================================
// 테스트
// ============================================================================
