//! Template extraction - 템플릿 추출
//!
//! 페치한 HTML 문서에서 `<template>` 엘리먼트를 문서 순서대로 뽑아냅니다.

use regex::Regex;
use std::sync::OnceLock;

static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();

fn template_re() -> &'static Regex {
    TEMPLATE_RE.get_or_init(|| {
        Regex::new(r"(?is)<template\b[^>]*>.*?</template>").expect("template pattern is valid")
    })
}

/// 하나의 template 엘리먼트 마크업
///
/// 원본 문서와 독립된 소유 사본 (deep clone에 해당).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFragment {
    markup: String,
}

impl TemplateFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// `<template>` 태그를 포함한 전체 마크업
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// 문서의 모든 template 엘리먼트를 문서 순서대로 추출
pub fn extract_templates(document: &str) -> Vec<TemplateFragment> {
    template_re()
        .find_iter(document)
        .map(|m| TemplateFragment::new(m.as_str()))
        .collect()
}

// ============================================================================
// 테스트
// ============================================================================
