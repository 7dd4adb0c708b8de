//! Resource classification - 리소스 분류
//!
//! 리소스 참조를 파일 접미사 기준으로 분류합니다.
//! 하나의 참조가 여러 종류에 동시에 속할 수 있습니다
//! (`.js`는 Script이면서 Module 후보).

use serde::Deserialize;
use std::fmt;

// ============================================================================
// 접미사 테이블
// ============================================================================

/// Script 접미사
pub const SCRIPT_SUFFIX: &str = ".js";
/// Module 전용 접미사 (Script 접미사도 Module 후보)
pub const MODULE_SUFFIX: &str = ".mjs";
/// Stylesheet 접미사
pub const STYLESHEET_SUFFIX: &str = ".css";
/// Template 접미사
pub const TEMPLATE_SUFFIX: &str = ".html";
/// Data 접미사
pub const DATA_SUFFIX: &str = ".json";

// ============================================================================
// ResourceKind
// ============================================================================

/// 리소스 종류
///
/// Kind membership is a predicate over the reference's suffix, not an
/// exclusive tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Script,
    Module,
    Stylesheet,
    Template,
    Data,
}

impl ResourceKind {
    /// 전체 종류 (classification order)
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Script,
        ResourceKind::Module,
        ResourceKind::Stylesheet,
        ResourceKind::Template,
        ResourceKind::Data,
    ];

    /// manifest `load` 목록에서 허용되는 종류 (Data 제외)
    pub const LOADABLE: [ResourceKind; 4] = [
        ResourceKind::Script,
        ResourceKind::Module,
        ResourceKind::Stylesheet,
        ResourceKind::Template,
    ];

    /// 경로가 이 종류에 속하는지 검사
    pub fn matches(&self, path: &str) -> bool {
        match self {
            ResourceKind::Script => path.ends_with(SCRIPT_SUFFIX),
            ResourceKind::Module => {
                path.ends_with(MODULE_SUFFIX) || path.ends_with(SCRIPT_SUFFIX)
            }
            ResourceKind::Stylesheet => path.ends_with(STYLESHEET_SUFFIX),
            ResourceKind::Template => path.ends_with(TEMPLATE_SUFFIX),
            ResourceKind::Data => path.ends_with(DATA_SUFFIX),
        }
    }

    /// 에러 메시지용 서술어 ("a script", "JSON data" 등)
    pub fn descriptor(&self) -> &'static str {
        match self {
            ResourceKind::Script => "a script",
            ResourceKind::Module => "a module",
            ResourceKind::Stylesheet => "a stylesheet",
            ResourceKind::Template => "a template file",
            ResourceKind::Data => "JSON data",
        }
    }

    /// 에러 메시지용 기대 접미사 표기
    pub fn expected_file_types(&self) -> &'static str {
        match self {
            ResourceKind::Script => "\".js\"",
            ResourceKind::Module => "\".mjs\" or \".js\"",
            ResourceKind::Stylesheet => "\".css\"",
            ResourceKind::Template => "\".html\"",
            ResourceKind::Data => "\".json\"",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Script => "script",
            ResourceKind::Module => "module",
            ResourceKind::Stylesheet => "stylesheet",
            ResourceKind::Template => "template",
            ResourceKind::Data => "data",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// ResourceRef
// ============================================================================

/// 리소스 참조
///
/// manifest에서 역직렬화된 값. 문자열이 아닌 값은 어떤 종류에도 속하지
/// 않으며, 로드 대상이 될 수 없습니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResourceRef {
    /// 기본 주소에 대한 상대 경로
    Path(String),
    /// 문자열이 아닌 값 (항상 무효)
    Other(serde_json::Value),
}

impl ResourceRef {
    /// 경로 문자열 (문자열 참조인 경우에만)
    pub fn as_path(&self) -> Option<&str> {
        match self {
            ResourceRef::Path(path) => Some(path),
            ResourceRef::Other(_) => None,
        }
    }

    /// 이 참조가 해당 종류에 속하는지 검사
    pub fn is(&self, kind: ResourceKind) -> bool {
        self.as_path().map(|p| kind.matches(p)).unwrap_or(false)
    }

    /// 이 참조가 속하는 모든 종류
    pub fn kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.is(*kind))
            .collect()
    }

    /// manifest `load` 목록에서 유효한 리소스인지 검사
    ///
    /// Data(`.json`)는 의도적으로 제외 - 전용 데이터 로더를 통해서만
    /// 접근 가능합니다.
    pub fn is_valid_load_resource(&self) -> bool {
        ResourceKind::LOADABLE.iter().any(|kind| self.is(*kind))
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRef::Path(path) => write!(f, "{}", path),
            ResourceRef::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ResourceRef {
    fn from(path: &str) -> Self {
        ResourceRef::Path(path.to_string())
    }
}

impl From<String> for ResourceRef {
    fn from(path: String) -> Self {
        ResourceRef::Path(path)
    }
}

// ============================================================================
// 테스트
// ============================================================================
