//! Host Traits - 호스트 경계 인터페이스 정의
//!
//! DevStub은 호스트를 직접 알지 못합니다. 설정 패널, 라이프사이클 이벤트,
//! 저장 슬롯은 전부 여기 정의된 trait 객체로 주입됩니다.

use crate::core::types::{LifecycleCallback, SaveHeader};
use crate::Result;
use async_trait::async_trait;

// ============================================================================
// SettingsHost - 설정 패널
// ============================================================================

/// 설정 패널에 등록할 불리언 토글 정의
pub struct ToggleSpec {
    /// 섹션 이름
    pub section: String,
    /// 토글 이름 (섹션 안에서 고유)
    pub name: String,
    /// 표시 레이블
    pub label: String,
    /// 기본값
    pub default: bool,
    /// 값 변경 콜백 (새 값, 이전 값)
    pub on_change: Box<dyn Fn(bool, bool) + Send + Sync>,
}

impl ToggleSpec {
    pub fn new(
        section: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            name: name.into(),
            label: label.into(),
            default: false,
            on_change: Box::new(|_, _| {}),
        }
    }

    pub fn default_value(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn on_change(mut self, callback: impl Fn(bool, bool) + Send + Sync + 'static) -> Self {
        self.on_change = Box::new(callback);
        self
    }
}

impl std::fmt::Debug for ToggleSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleSpec")
            .field("section", &self.section)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("default", &self.default)
            .finish()
    }
}

/// 호스트 설정 패널
pub trait SettingsHost: Send + Sync {
    /// 섹션 아래에 불리언 토글 등록
    fn add_toggle(&self, toggle: ToggleSpec);

    /// 등록된 토글 값을 코드에서 갱신
    fn set_toggle(&self, section: &str, name: &str, value: bool);
}

// ============================================================================
// LifecycleHost - 라이프사이클 이벤트
// ============================================================================

/// 호스트 라이프사이클 구독/트리거
///
/// 콜백은 해당 이벤트가 발생할 때마다 한 번 호출된다.
#[async_trait]
pub trait LifecycleHost: Send + Sync {
    /// 캐릭터 선택 화면 로드 완료 이벤트 구독
    fn on_character_selection_loaded(&self, callback: LifecycleCallback);

    /// 캐릭터 로드 완료 이벤트 구독
    fn on_character_loaded(&self, callback: LifecycleCallback);

    /// 로드 후 알림 트리거 (호스트의 characterLoaded 트리거)
    async fn trigger_character_loaded(&self) -> Result<()>;
}

// ============================================================================
// SaveRepository - 저장 슬롯
// ============================================================================

/// 호스트 저장 슬롯 접근
#[async_trait]
pub trait SaveRepository: Send + Sync {
    /// 저장 슬롯 수 상한
    fn max_slots(&self) -> usize;

    /// 슬롯 헤더 조회 (빈 슬롯은 None)
    fn header(&self, slot: usize) -> Option<SaveHeader>;

    /// 저장 선택 화면에 해당 슬롯의 로딩 상태 표시
    fn show_loading(&self, slot: usize);

    /// 슬롯의 저장을 로드
    async fn load_slot(&self, slot: usize) -> Result<()>;
}
