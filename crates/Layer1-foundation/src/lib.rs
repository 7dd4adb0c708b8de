//! # devstub-foundation
//!
//! Foundation layer for DevStub:
//! - Resource: 리소스 분류 (ResourceKind, ResourceRef)
//! - Manifest: 모드 매니페스트 데이터 모델
//! - Core: 호스트 경계 Trait 정의 (SettingsHost, LifecycleHost, SaveRepository)
//! - Storage: 설정 키-값 저장소 (Memory, JSON 파일)
//! - Config: 로더 설정 (StubConfig, 고정 상수)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer3-Runtime                                         │
//! │  ├── Manifest Orchestrator (fetch → setup → load)       │
//! │  └── Auto-load (settings toggle + sentinel save)        │
//! ├─────────────────────────────────────────────────────────┤
//! │  Layer2-Loader                                          │
//! │  ├── Kind-specific loaders (script, module, css, ...)   │
//! │  └── Dispatcher (suffix → loader routing)               │
//! ├─────────────────────────────────────────────────────────┤
//! │  Layer1-Foundation (이 레이어)                          │
//! │  ├── ResourceKind / ResourceRef (분류)                  │
//! │  ├── Host Trait 정의 (구현은 호스트 측)                 │
//! │  └── SettingsStore (영속 토글 저장)                     │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod manifest;
pub mod resource;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Resource (분류)
// ============================================================================
pub use resource::{ResourceKind, ResourceRef};

// ============================================================================
// Manifest
// ============================================================================
pub use manifest::{LoadList, Manifest};

// ============================================================================
// Core (호스트 경계 Trait 및 타입)
// ============================================================================
pub use core::{
    // Types (types.rs)
    LifecycleCallback,
    SaveHeader,
    // Traits (traits.rs)
    LifecycleHost,
    SaveRepository,
    SettingsHost,
    ToggleSpec,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{StubConfig, AUTO_LOAD_KEY, AUTO_LOAD_SAVE_NAME, MANIFEST_FILE, MOD_TAG};

// ============================================================================
// Storage (영속 저장소)
// ============================================================================
pub use storage::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
