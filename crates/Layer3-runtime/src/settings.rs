//! Auto-load settings - 자동 로드 토글
//!
//! 호스트 설정 패널에 토글을 등록하고, 값을 주입된 저장소에 영속합니다.

use devstub_foundation::{SettingsHost, SettingsStore, ToggleSpec, AUTO_LOAD_KEY};
use std::sync::Arc;

/// 설정 섹션 이름
pub const SETTINGS_SECTION: &str = "Debug Stub";

/// 토글 이름
pub const AUTO_LOAD_TOGGLE: &str = "auto-load-test";

const AUTO_LOAD_LABEL: &str = "Auto load save with name <code>MOD_TEST</code>";

/// 자동 로드 토글 등록
///
/// 값이 바뀌면 고정 키 아래에 `"true"`/`"false"` 문자열로 기록한다
/// (원본 저장 형식 유지).
pub fn register_auto_load_toggle(settings: &dyn SettingsHost, store: Arc<dyn SettingsStore>) {
    let toggle = ToggleSpec::new(SETTINGS_SECTION, AUTO_LOAD_TOGGLE, AUTO_LOAD_LABEL)
        .default_value(false)
        .on_change(move |value, _previous| {
            store.set(AUTO_LOAD_KEY, if value { "true" } else { "false" });
        });

    settings.add_toggle(toggle);
}

/// 저장된 자동 로드 플래그 읽기
pub fn auto_load_enabled(store: &dyn SettingsStore) -> bool {
    store.get(AUTO_LOAD_KEY).as_deref() == Some("true")
}

/// 저장소 값으로 패널 토글 재동기화
///
/// 토글 값은 호스트 저장 파일 안에 들어가므로, 캐릭터 로드가 끝날 때마다
/// 저장소 기준으로 다시 맞춰야 한다.
pub fn sync_toggle_from_store(settings: &dyn SettingsHost, store: &dyn SettingsStore) {
    settings.set_toggle(SETTINGS_SECTION, AUTO_LOAD_TOGGLE, auto_load_enabled(store));
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use devstub_foundation::MemorySettingsStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct PanelStub {
        toggles: Mutex<Vec<ToggleSpec>>,
        set_calls: Mutex<Vec<(String, String, bool)>>,
    }

    impl SettingsHost for PanelStub {
        fn add_toggle(&self, toggle: ToggleSpec) {
            self.toggles.lock().unwrap().push(toggle);
        }

        fn set_toggle(&self, section: &str, name: &str, value: bool) {
            self.set_calls
                .lock()
                .unwrap()
                .push((section.to_string(), name.to_string(), value));
        }
    }

    #[test]
    fn test_register_uses_fixed_section_and_default_off() {
        let panel = PanelStub::default();
        let store = Arc::new(MemorySettingsStore::new());

        register_auto_load_toggle(&panel, store);

        let toggles = panel.toggles.lock().unwrap();
        assert_eq!(toggles.len(), 1);
        assert_eq!(toggles[0].section, SETTINGS_SECTION);
        assert_eq!(toggles[0].name, AUTO_LOAD_TOGGLE);
        assert!(!toggles[0].default);
    }

    #[test]
    fn test_toggle_change_persists_string_flag() {
        let panel = PanelStub::default();
        let store = Arc::new(MemorySettingsStore::new());

        register_auto_load_toggle(&panel, store.clone());

        let toggles = panel.toggles.lock().unwrap();
        (toggles[0].on_change)(true, false);
        assert_eq!(store.get(AUTO_LOAD_KEY), Some("true".to_string()));
        assert!(auto_load_enabled(store.as_ref()));

        (toggles[0].on_change)(false, true);
        assert_eq!(store.get(AUTO_LOAD_KEY), Some("false".to_string()));
        assert!(!auto_load_enabled(store.as_ref()));
    }

    #[test]
    fn test_sync_pushes_store_value_into_panel() {
        let panel = PanelStub::default();
        let store = MemorySettingsStore::new();

        store.set(AUTO_LOAD_KEY, "true");
        sync_toggle_from_store(&panel, &store);

        store.set(AUTO_LOAD_KEY, "false");
        sync_toggle_from_store(&panel, &store);

        let calls = panel.set_calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                (SETTINGS_SECTION.to_string(), AUTO_LOAD_TOGGLE.to_string(), true),
                (SETTINGS_SECTION.to_string(), AUTO_LOAD_TOGGLE.to_string(), false),
            ]
        );
    }

    #[test]
    fn test_missing_flag_reads_as_disabled() {
        let store = MemorySettingsStore::new();
        assert!(!auto_load_enabled(&store));
    }
}
