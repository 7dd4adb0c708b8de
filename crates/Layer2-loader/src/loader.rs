//! Kind-specific loaders
//!
//! All five loaders follow the same protocol: re-validate the kind, resolve
//! the URL, perform the kind-specific action. The re-validation guards
//! against dispatcher bugs and direct misuse.

use crate::error::LoadError;
use crate::host::{Fetcher, HostPage, HttpFetcher, ModuleExports};
use crate::template::extract_templates;
use devstub_foundation::{ResourceKind, ResourceRef, StubConfig};
use std::sync::Arc;
use tracing::debug;

/// Resource loader
///
/// Holds the host page and the fetch seam, and performs the five kinds of
/// loads against them.
pub struct ResourceLoader {
    config: StubConfig,
    page: Arc<dyn HostPage>,
    fetcher: Arc<dyn Fetcher>,
}

impl ResourceLoader {
    /// Create with the default HTTP fetcher
    pub fn new(config: StubConfig, page: Arc<dyn HostPage>) -> Self {
        Self::with_fetcher(config, page, Arc::new(HttpFetcher::new()))
    }

    /// Create with a specific fetcher (injection point for tests)
    pub fn with_fetcher(
        config: StubConfig,
        page: Arc<dyn HostPage>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            config,
            page,
            fetcher,
        }
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Kind re-validation - KindMismatch on failure, the path on success
    fn require_kind<'a>(
        resource: &'a ResourceRef,
        kind: ResourceKind,
    ) -> Result<&'a str, LoadError> {
        match resource.as_path() {
            Some(path) if kind.matches(path) => Ok(path),
            _ => Err(LoadError::kind_mismatch(resource, kind)),
        }
    }

    // ========================================================================
    // Script
    // ========================================================================

    /// Load a script.
    ///
    /// Appends one executable script element to the body. Succeeds with no
    /// value on the load event; fails with a load-error message naming the
    /// resource on the error event.
    pub async fn load_script(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        let path = Self::require_kind(resource, ResourceKind::Script)?;
        let url = self.config.resolve_url(path);
        debug!(resource = path, "loading script");

        self.page
            .append_script(&url)
            .await
            .map_err(|_| LoadError::script_failed(resource))
    }

    // ========================================================================
    // Module
    // ========================================================================

    /// Load a module.
    ///
    /// The host resolves and evaluates the module; the exported bindings
    /// come back. Evaluation failures propagate as-is, unwrapped.
    pub async fn load_module(
        &self,
        resource: &ResourceRef,
    ) -> Result<Arc<dyn ModuleExports>, LoadError> {
        let path = Self::require_kind(resource, ResourceKind::Module)?;
        let url = self.config.resolve_url(path);
        debug!(resource = path, "importing module");

        self.page.import_module(&url).await
    }

    // ========================================================================
    // Stylesheet
    // ========================================================================

    /// Load a stylesheet.
    ///
    /// Synchronous - appends the link element to the head and returns
    /// immediately. Does not await the browser-side fetch/parse of the CSS
    /// (fire-and-forget).
    pub fn load_stylesheet(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        let path = Self::require_kind(resource, ResourceKind::Stylesheet)?;
        let url = self.config.resolve_url(path);
        debug!(resource = path, "adding stylesheet link");

        self.page.append_stylesheet(&url);
        Ok(())
    }

    // ========================================================================
    // Template
    // ========================================================================

    /// Load template fragments.
    ///
    /// Fetches the document and appends a copy of every template element to
    /// the body in source order. Network failure uses a fixed message that
    /// does not name the resource.
    pub async fn load_templates(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        let path = Self::require_kind(resource, ResourceKind::Template)?;
        let url = self.config.resolve_url(path);
        debug!(resource = path, "fetching template document");

        let document = self
            .fetcher
            .fetch_text(&url)
            .await
            .map_err(|_| LoadError::templates_failed())?;

        let templates = extract_templates(&document);
        debug!(resource = path, count = templates.len(), "appending templates");
        for template in templates {
            self.page.append_template(template);
        }
        Ok(())
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Load JSON data.
    ///
    /// Fetches the body and parses it as JSON. The kind check only accepts
    /// `.json`; manifest `load` lists never reach this loader.
    pub async fn load_data(&self, resource: &ResourceRef) -> Result<serde_json::Value, LoadError> {
        let path = Self::require_kind(resource, ResourceKind::Data)?;
        let url = self.config.resolve_url(path);
        debug!(resource = path, "fetching data");

        let body = self.fetcher.fetch_text(&url).await?;
        serde_json::from_str(&body)
            .map_err(|e| LoadError::Transport(format!("Failed to parse \"{}\": {}", path, e)))
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{PageOp, RecordingPage, StaticFetcher};

    fn loader_with(page: Arc<RecordingPage>, fetcher: StaticFetcher) -> ResourceLoader {
        ResourceLoader::with_fetcher(StubConfig::default(), page, Arc::new(fetcher))
    }

    #[tokio::test]
    async fn test_script_load_success() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        loader.load_script(&ResourceRef::from("a.js")).await.unwrap();

        assert_eq!(
            page.ops(),
            vec![PageOp::Script("http://localhost:8080/a.js".to_string())]
        );
    }

    #[tokio::test]
    async fn test_script_error_event_maps_to_transport() {
        let page = Arc::new(RecordingPage::new());
        page.fail_script("http://localhost:8080/a.js");
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        let err = loader.load_script(&ResourceRef::from("a.js")).await.unwrap_err();
        assert_eq!(err.to_string(), "[__DEV_MOD] Error loading resource \"a.js\".");
        // error 이벤트여도 엘리먼트 append는 정확히 한 번 일어난다
        assert_eq!(page.ops().len(), 1);
    }

    #[tokio::test]
    async fn test_script_rejects_wrong_kind_before_any_side_effect() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        let err = loader.load_script(&ResourceRef::from("a.css")).await.unwrap_err();
        assert!(matches!(err, LoadError::KindMismatch { .. }));
        assert!(page.ops().is_empty());
    }

    #[tokio::test]
    async fn test_stylesheet_rejects_script_with_expected_css() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        let err = loader.load_stylesheet(&ResourceRef::from("a.js")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[__DEV_MOD] Cannot load resource \"a.js\" as a stylesheet. Expected file type \".css\"."
        );
    }

    #[tokio::test]
    async fn test_stylesheet_appends_link_synchronously() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        loader.load_stylesheet(&ResourceRef::from("style.css")).unwrap();
        assert_eq!(
            page.ops(),
            vec![PageOp::Stylesheet("http://localhost:8080/style.css".to_string())]
        );
    }

    #[tokio::test]
    async fn test_module_accepts_js_and_mjs() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        loader.load_module(&ResourceRef::from("setup.mjs")).await.unwrap();
        loader.load_module(&ResourceRef::from("legacy.js")).await.unwrap();
        assert_eq!(page.ops().len(), 2);
    }

    #[tokio::test]
    async fn test_module_evaluation_error_passes_through() {
        let page = Arc::new(RecordingPage::new());
        page.fail_module("ReferenceError: x is not defined");
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        let err = match loader.load_module(&ResourceRef::from("bad.mjs")).await {
            Ok(_) => panic!("expected load_module to fail"),
            Err(e) => e,
        };
        assert_eq!(err.to_string(), "ReferenceError: x is not defined");
        assert!(matches!(err, LoadError::Evaluation(_)));
    }

    #[tokio::test]
    async fn test_templates_appends_every_fragment_in_order() {
        let page = Arc::new(RecordingPage::new());
        let fetcher = StaticFetcher::with_response(
            "http://localhost:8080/ui.html",
            "<template id=\"a\"></template><template id=\"b\"></template>",
        );
        let loader = loader_with(page.clone(), fetcher);

        loader.load_templates(&ResourceRef::from("ui.html")).await.unwrap();

        let ops = page.ops();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], PageOp::Template(m) if m.contains("id=\"a\"")));
        assert!(matches!(&ops[1], PageOp::Template(m) if m.contains("id=\"b\"")));
    }

    #[tokio::test]
    async fn test_templates_network_failure_uses_fixed_message() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page.clone(), StaticFetcher::empty());

        let err = loader.load_templates(&ResourceRef::from("ui.html")).await.unwrap_err();
        assert_eq!(err.to_string(), "[__DEV_MOD] Templates failed to load.");
        assert!(page.ops().is_empty());
    }

    #[tokio::test]
    async fn test_data_parses_json_body() {
        let page = Arc::new(RecordingPage::new());
        let fetcher = StaticFetcher::with_response(
            "http://localhost:8080/manifest.json",
            r#"{ "load": ["a.js"] }"#,
        );
        let loader = loader_with(page, fetcher);

        let value = loader.load_data(&ResourceRef::from("manifest.json")).await.unwrap();
        assert_eq!(value["load"][0], "a.js");
    }

    #[tokio::test]
    async fn test_data_rejects_non_json_suffix() {
        let page = Arc::new(RecordingPage::new());
        let loader = loader_with(page, StaticFetcher::empty());

        let err = loader.load_data(&ResourceRef::from("a.js")).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "[__DEV_MOD] Cannot load resource \"a.js\" as JSON data. Expected file type \".json\"."
        );
    }
}
