//! Mod context - 모드 컨텍스트
//!
//! setup 모듈에 넘겨지는 capability 모음. 외부 객체를 변조하는 대신
//! 생성자에서 채워지는 타입 있는 구조체다.

use crate::error::LoadError;
use crate::host::ModuleExports;
use crate::loader::ResourceLoader;
use devstub_foundation::{LifecycleHost, ResourceRef, SettingsHost};
use std::sync::Arc;

/// 모드 컨텍스트
///
/// 다섯 로드 capability(templates, stylesheet, script, module, data)는
/// 로더로의 직접 pass-through다. 설정 패널과 라이프사이클 핸들도 setup
/// 모듈이 쓸 수 있게 같이 들어 있다.
#[derive(Clone)]
pub struct ModContext {
    loader: Arc<ResourceLoader>,
    settings: Arc<dyn SettingsHost>,
    lifecycle: Arc<dyn LifecycleHost>,
}

impl ModContext {
    pub fn new(
        loader: Arc<ResourceLoader>,
        settings: Arc<dyn SettingsHost>,
        lifecycle: Arc<dyn LifecycleHost>,
    ) -> Self {
        Self {
            loader,
            settings,
            lifecycle,
        }
    }

    pub fn loader(&self) -> &Arc<ResourceLoader> {
        &self.loader
    }

    pub fn settings(&self) -> &Arc<dyn SettingsHost> {
        &self.settings
    }

    pub fn lifecycle(&self) -> &Arc<dyn LifecycleHost> {
        &self.lifecycle
    }

    // ========================================================================
    // Load capabilities (로더 pass-through)
    // ========================================================================

    pub async fn load_templates(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        self.loader.load_templates(resource).await
    }

    pub fn load_stylesheet(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        self.loader.load_stylesheet(resource)
    }

    pub async fn load_script(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        self.loader.load_script(resource).await
    }

    pub async fn load_module(
        &self,
        resource: &ResourceRef,
    ) -> Result<Arc<dyn ModuleExports>, LoadError> {
        self.loader.load_module(resource).await
    }

    pub async fn load_data(
        &self,
        resource: &ResourceRef,
    ) -> Result<serde_json::Value, LoadError> {
        self.loader.load_data(resource).await
    }
}
