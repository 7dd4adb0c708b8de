//! Manifest orchestrator - 매니페스트 오케스트레이션
//!
//! 선형 상태 머신, 재시도 없음:
//! 1. 매니페스트 페치 (실패는 전체 시퀀스 종료)
//! 2. setup 모듈 로드 + 진입점 호출 (선택)
//! 3. load 목록 순차 로드, 무효 항목은 조용히 건너뜀 (선택)
//! 4. 모든 실패는 여기 catch 경계에서 로그로 끝난다

use devstub_foundation::{LoadList, Manifest, Result, MANIFEST_FILE};
use devstub_loader::ModContext;
use tracing::{error, info};

/// 매니페스트 오케스트레이터
pub struct Orchestrator {
    ctx: ModContext,
}

impl Orchestrator {
    pub fn new(ctx: ModContext) -> Self {
        Self { ctx }
    }

    /// 오케스트레이션 실행
    ///
    /// 단일 catch 경계. 리소스 로딩에서 시작된 실패는 로그에만 남고
    /// 밖으로 전파되지 않는다 - 호스트는 계속 돌아간다.
    pub async fn run(&self) {
        match self.try_run().await {
            Ok(()) => info!("loaded mod from debug stub"),
            Err(error) => error!(%error, "failed to load mod from debug stub"),
        }
    }

    async fn try_run(&self) -> Result<()> {
        // 1. 매니페스트 페치
        let raw = self.ctx.load_data(&MANIFEST_FILE.into()).await?;
        let manifest: Manifest = serde_json::from_value(raw)?;

        // 2. setup 단계 - 실패하면 load 단계까지 전부 중단
        if let Some(setup) = &manifest.setup {
            let module = self.ctx.load_module(setup).await?;
            module.call("setup", &self.ctx).await?;
        }

        // 3. load 단계 - 엄격한 순차 로드. 앞 리소스가 전역 상태를
        //    등록하고 뒤 리소스가 그걸 전제할 수 있다.
        match &manifest.load {
            Some(LoadList::Many(entries)) => {
                for entry in entries {
                    if entry.is_valid_load_resource() {
                        self.ctx.loader().load_resource(entry).await?;
                    }
                }
            }
            Some(LoadList::One(entry)) => {
                if entry.is_valid_load_resource() {
                    self.ctx.loader().load_resource(entry).await?;
                }
            }
            None => {}
        }

        Ok(())
    }
}
