//! Host page trait and fetch seam
//!
//! The host document tree is shared ownership: loaders append elements and
//! never track or remove them afterwards (fire-and-forget). Fetching and
//! evaluating scripts, modules and stylesheets is the host's job; DevStub
//! only fetches template documents and data itself.

use crate::error::LoadError;
use crate::template::TemplateFragment;
use async_trait::async_trait;
use std::sync::Arc;

// ============================================================================
// HostPage Trait - 문서 주입 대상
// ============================================================================

/// Signal for a script element's error event
///
/// The loader builds the user-visible message with the resource name;
/// the host only reports that the load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptFailed;

/// Structural root of the host page
#[async_trait]
pub trait HostPage: Send + Sync {
    /// Append an executable script element to the document body.
    ///
    /// Resolves with `Ok(())` when the host fires the load event and
    /// `Err(ScriptFailed)` on the error event. Exactly one append either way.
    async fn append_script(&self, src: &str) -> Result<(), ScriptFailed>;

    /// Append a stylesheet link element to the document head.
    ///
    /// Synchronous - the host fetches and parses the CSS in the background.
    fn append_stylesheet(&self, href: &str);

    /// Append a cloned template element to the document body.
    fn append_template(&self, template: TemplateFragment);

    /// Resolve and evaluate a module, returning its exported bindings.
    ///
    /// Evaluation failures come back as [`LoadError::Evaluation`]; the
    /// loader passes them through without re-wrapping.
    async fn import_module(&self, src: &str) -> Result<Arc<dyn ModuleExports>, LoadError>;
}

// ============================================================================
// ModuleExports - 모듈 export 바인딩
// ============================================================================

/// Exported bindings of an evaluated module
#[async_trait]
pub trait ModuleExports: Send + Sync {
    /// Whether an export with this name exists
    fn has(&self, name: &str) -> bool;

    /// Invoke an exported entry point with the mod context.
    ///
    /// Missing or non-callable exports yield [`LoadError::Evaluation`].
    async fn call(&self, name: &str, ctx: &crate::context::ModContext) -> Result<(), LoadError>;
}

// ============================================================================
// Fetcher - 템플릿/데이터 페치
// ============================================================================

/// Text resource fetching
///
/// Seam that keeps template/data loading and orchestration testable
/// without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the response body for a URL
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError>;
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a client without a timeout.
    ///
    /// A stalled request stalls the remaining manifest sequence
    /// indefinitely; cancellation and timeouts are not supported.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Transport(format!("HTTP {} for {}", status, url)));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Transport(format!("Failed to read body: {}", e)))
    }
}
