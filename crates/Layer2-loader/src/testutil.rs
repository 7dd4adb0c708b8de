//! 테스트용 호스트 구현

use crate::context::ModContext;
use crate::error::LoadError;
use crate::host::{Fetcher, HostPage, ModuleExports, ScriptFailed};
use crate::template::TemplateFragment;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// 페이지에 가해진 변경 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageOp {
    Script(String),
    Stylesheet(String),
    Template(String),
    Module(String),
}

/// append를 순서대로 기록하는 HostPage
#[derive(Default)]
pub(crate) struct RecordingPage {
    ops: Mutex<Vec<PageOp>>,
    failing_scripts: Mutex<HashSet<String>>,
    module_error: Mutex<Option<String>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<PageOp> {
        self.ops.lock().unwrap().clone()
    }

    /// 해당 URL의 스크립트가 error 이벤트를 쏘게 만든다
    pub fn fail_script(&self, src: &str) {
        self.failing_scripts.lock().unwrap().insert(src.to_string());
    }

    /// 모든 모듈 평가가 해당 메시지로 실패하게 만든다
    pub fn fail_module(&self, message: &str) {
        *self.module_error.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl HostPage for RecordingPage {
    async fn append_script(&self, src: &str) -> Result<(), ScriptFailed> {
        // 브라우저와 동일하게 append가 먼저, 이벤트가 나중
        self.ops.lock().unwrap().push(PageOp::Script(src.to_string()));
        if self.failing_scripts.lock().unwrap().contains(src) {
            Err(ScriptFailed)
        } else {
            Ok(())
        }
    }

    fn append_stylesheet(&self, href: &str) {
        self.ops.lock().unwrap().push(PageOp::Stylesheet(href.to_string()));
    }

    fn append_template(&self, template: TemplateFragment) {
        self.ops
            .lock()
            .unwrap()
            .push(PageOp::Template(template.markup().to_string()));
    }

    async fn import_module(&self, src: &str) -> Result<Arc<dyn ModuleExports>, LoadError> {
        self.ops.lock().unwrap().push(PageOp::Module(src.to_string()));
        if let Some(message) = self.module_error.lock().unwrap().clone() {
            return Err(LoadError::Evaluation(message));
        }
        Ok(Arc::new(NullExports))
    }
}

/// export가 하나도 없는 모듈
pub(crate) struct NullExports;

#[async_trait]
impl ModuleExports for NullExports {
    fn has(&self, _name: &str) -> bool {
        false
    }

    async fn call(&self, name: &str, _ctx: &ModContext) -> Result<(), LoadError> {
        Err(LoadError::Evaluation(format!("{} is not a function", name)))
    }
}

/// 준비된 응답만 돌려주는 Fetcher (없는 URL은 Transport 실패)
pub(crate) struct StaticFetcher {
    responses: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn empty() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with_response(url: &str, body: &str) -> Self {
        let mut fetcher = Self::empty();
        fetcher.responses.insert(url.to_string(), body.to_string());
        fetcher
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| LoadError::Transport(format!("Request failed: no route to {}", url)))
    }
}
