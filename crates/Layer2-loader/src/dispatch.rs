//! Resource dispatcher - routes a reference to the right loader
//!
//! Single entry point: classify the reference and run exactly one loader,
//! or fail before any loader runs.

use crate::error::LoadError;
use crate::loader::ResourceLoader;
use devstub_foundation::{ResourceKind, ResourceRef};

impl ResourceLoader {
    /// Route a resource to its kind-specific loader.
    ///
    /// Kinds are checked in priority order Script → Module → Stylesheet →
    /// Template. A `.js` reference is Module-eligible too, but on this path
    /// it always goes to the Script loader; the Module loader is reached
    /// only by `.mjs` references or by calling `load_module` directly
    /// (which is what manifest `setup` does). Exported bindings are
    /// discarded on this path.
    ///
    /// References matching no kind fail as invalid without running any
    /// loader.
    pub async fn load_resource(&self, resource: &ResourceRef) -> Result<(), LoadError> {
        if resource.is(ResourceKind::Script) {
            self.load_script(resource).await
        } else if resource.is(ResourceKind::Module) {
            self.load_module(resource).await.map(|_| ())
        } else if resource.is(ResourceKind::Stylesheet) {
            self.load_stylesheet(resource)
        } else if resource.is(ResourceKind::Template) {
            self.load_templates(resource).await
        } else {
            Err(LoadError::invalid_resource(resource))
        }
    }
}

// ============================================================================
// 테스트
// ============================================================================
