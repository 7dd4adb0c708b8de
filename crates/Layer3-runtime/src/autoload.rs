//! Auto-load - sentinel 저장 자동 로드
//!
//! 캐릭터 선택 화면이 뜨면, 플래그가 켜진 경우에 한해 sentinel 이름의
//! 저장 슬롯을 찾아 로드합니다.

use crate::settings::auto_load_enabled;
use devstub_foundation::{
    LifecycleHost, Result, SaveRepository, SettingsStore, AUTO_LOAD_SAVE_NAME,
};
use tracing::{debug, info};

/// 자동 로드 루틴
///
/// 슬롯 0부터 상한까지 헤더를 훑어 캐릭터 이름이 sentinel과 정확히 같은
/// 첫 슬롯을 찾는다. 찾으면 로딩 표시 → 슬롯 로드 → 로드 후 알림 트리거
/// 순서로 진행하고, 없으면 아무것도 하지 않는다.
pub async fn auto_load_save(
    saves: &dyn SaveRepository,
    lifecycle: &dyn LifecycleHost,
    store: &dyn SettingsStore,
) -> Result<()> {
    if !auto_load_enabled(store) {
        return Ok(());
    }
    info!("auto loading save");

    let mut target = None;
    for slot in 0..saves.max_slots() {
        match saves.header(slot) {
            Some(header) if header.character_name == AUTO_LOAD_SAVE_NAME => {
                debug!(slot, "found save with name '{}'", AUTO_LOAD_SAVE_NAME);
                target = Some(slot);
                break;
            }
            _ => {}
        }
    }

    if let Some(slot) = target {
        saves.show_loading(slot);
        saves.load_slot(slot).await?;
        lifecycle.trigger_character_loaded().await?;
    }

    Ok(())
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use devstub_foundation::{
        LifecycleCallback, MemorySettingsStore, SaveHeader, AUTO_LOAD_KEY,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct SavesStub {
        headers: Vec<Option<SaveHeader>>,
        header_reads: AtomicUsize,
        events: Mutex<Vec<String>>,
    }

    impl SavesStub {
        fn with_headers(names: &[Option<&str>]) -> Self {
            Self {
                headers: names
                    .iter()
                    .map(|n| n.map(SaveHeader::new))
                    .collect(),
                ..Default::default()
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SaveRepository for SavesStub {
        fn max_slots(&self) -> usize {
            self.headers.len()
        }

        fn header(&self, slot: usize) -> Option<SaveHeader> {
            self.header_reads.fetch_add(1, Ordering::SeqCst);
            self.headers.get(slot).cloned().flatten()
        }

        fn show_loading(&self, slot: usize) {
            self.events.lock().unwrap().push(format!("show-loading:{}", slot));
        }

        async fn load_slot(&self, slot: usize) -> Result<()> {
            self.events.lock().unwrap().push(format!("load:{}", slot));
            Ok(())
        }
    }

    #[derive(Default)]
    struct LifecycleStub {
        triggers: AtomicUsize,
    }

    #[async_trait]
    impl LifecycleHost for LifecycleStub {
        fn on_character_selection_loaded(&self, _callback: LifecycleCallback) {}
        fn on_character_loaded(&self, _callback: LifecycleCallback) {}

        async fn trigger_character_loaded(&self) -> Result<()> {
            self.triggers.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn enabled_store() -> MemorySettingsStore {
        let store = MemorySettingsStore::new();
        store.set(AUTO_LOAD_KEY, "true");
        store
    }

    #[tokio::test]
    async fn test_disabled_flag_skips_scan_entirely() {
        let saves = SavesStub::with_headers(&[Some("MOD_TEST")]);
        let lifecycle = LifecycleStub::default();
        let store = MemorySettingsStore::new();

        auto_load_save(&saves, &lifecycle, &store).await.unwrap();

        assert_eq!(saves.header_reads.load(Ordering::SeqCst), 0);
        assert!(saves.events().is_empty());
    }

    #[tokio::test]
    async fn test_no_sentinel_scans_but_loads_nothing() {
        let saves = SavesStub::with_headers(&[Some("Alice"), None, Some("Bob")]);
        let lifecycle = LifecycleStub::default();

        auto_load_save(&saves, &lifecycle, &enabled_store()).await.unwrap();

        // 스캔은 일어났지만 로드는 없다
        assert_eq!(saves.header_reads.load(Ordering::SeqCst), 3);
        assert!(saves.events().is_empty());
        assert_eq!(lifecycle.triggers.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sentinel_match_triggers_full_sequence() {
        let saves = SavesStub::with_headers(&[Some("Alice"), Some("MOD_TEST"), Some("MOD_TEST")]);
        let lifecycle = LifecycleStub::default();

        auto_load_save(&saves, &lifecycle, &enabled_store()).await.unwrap();

        // 첫 일치 슬롯에서 멈춘다
        assert_eq!(saves.events(), vec!["show-loading:1", "load:1"]);
        assert_eq!(lifecycle.triggers.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_name_must_match_exactly() {
        let saves = SavesStub::with_headers(&[Some("mod_test"), Some("MOD_TEST2")]);
        let lifecycle = LifecycleStub::default();

        auto_load_save(&saves, &lifecycle, &enabled_store()).await.unwrap();
        assert!(saves.events().is_empty());
    }
}
