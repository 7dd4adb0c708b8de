//! DebugStub - 최상위 진입점
//!
//! 원본의 `setup(ctx)`에 해당: 컨텍스트 구성, 토글 등록, 라이프사이클
//! 구독, 매니페스트 오케스트레이션 실행.

use crate::autoload::auto_load_save;
use crate::orchestrator::Orchestrator;
use crate::settings::{register_auto_load_toggle, sync_toggle_from_store};
use devstub_foundation::{
    LifecycleHost, SaveRepository, SettingsHost, SettingsStore, StubConfig,
};
use devstub_loader::{Fetcher, HostPage, ModContext, ResourceLoader};
use std::sync::Arc;
use tracing::error;

/// 호스트 바인딩
///
/// 호스트가 DevStub에 주입하는 trait 객체 모음.
#[derive(Clone)]
pub struct HostBindings {
    /// 문서 주입 대상 + 모듈 평가
    pub page: Arc<dyn HostPage>,
    /// 설정 패널
    pub settings: Arc<dyn SettingsHost>,
    /// 라이프사이클 이벤트
    pub lifecycle: Arc<dyn LifecycleHost>,
    /// 저장 슬롯
    pub saves: Arc<dyn SaveRepository>,
    /// 영속 키-값 저장소
    pub store: Arc<dyn SettingsStore>,
}

/// DevStub 런타임
pub struct DebugStub {
    ctx: ModContext,
    settings: Arc<dyn SettingsHost>,
    lifecycle: Arc<dyn LifecycleHost>,
    saves: Arc<dyn SaveRepository>,
    store: Arc<dyn SettingsStore>,
}

impl DebugStub {
    /// 기본 HTTP 페처로 생성
    pub fn new(config: StubConfig, host: HostBindings) -> Self {
        let loader = Arc::new(ResourceLoader::new(config, host.page.clone()));
        Self::from_loader(loader, host)
    }

    /// 페처를 지정해서 생성 (테스트용 주입 지점)
    pub fn with_fetcher(config: StubConfig, host: HostBindings, fetcher: Arc<dyn Fetcher>) -> Self {
        let loader = Arc::new(ResourceLoader::with_fetcher(
            config,
            host.page.clone(),
            fetcher,
        ));
        Self::from_loader(loader, host)
    }

    fn from_loader(loader: Arc<ResourceLoader>, host: HostBindings) -> Self {
        let ctx = ModContext::new(loader, host.settings.clone(), host.lifecycle.clone());
        Self {
            ctx,
            settings: host.settings,
            lifecycle: host.lifecycle,
            saves: host.saves,
            store: host.store,
        }
    }

    /// setup 모듈 등에 넘겨지는 컨텍스트
    pub fn context(&self) -> &ModContext {
        &self.ctx
    }

    /// 설치
    ///
    /// 토글 등록 → 라이프사이클 구독 → 매니페스트 오케스트레이션.
    /// 오케스트레이션이 끝날 때까지 기다린 뒤 반환한다.
    pub async fn install(&self) {
        register_auto_load_toggle(self.settings.as_ref(), self.store.clone());

        // 캐릭터 선택 화면 로드 완료 → 자동 로드
        let saves = self.saves.clone();
        let lifecycle = self.lifecycle.clone();
        let store = self.store.clone();
        self.lifecycle.on_character_selection_loaded(Box::new(move || {
            let saves = saves.clone();
            let lifecycle = lifecycle.clone();
            let store = store.clone();
            Box::pin(async move {
                if let Err(error) =
                    auto_load_save(saves.as_ref(), lifecycle.as_ref(), store.as_ref()).await
                {
                    error!(%error, "auto-load failed");
                }
            })
        }));

        // 캐릭터 로드 완료 → 토글 재동기화
        let settings = self.settings.clone();
        let store = self.store.clone();
        self.lifecycle.on_character_loaded(Box::new(move || {
            let settings = settings.clone();
            let store = store.clone();
            Box::pin(async move {
                sync_toggle_from_store(settings.as_ref(), store.as_ref());
            })
        }));

        Orchestrator::new(self.ctx.clone()).run().await;
    }
}
