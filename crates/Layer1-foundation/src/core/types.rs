//! 호스트 경계에서 오가는 타입 정의

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// 저장 슬롯 헤더
///
/// 호스트가 저장 슬롯마다 유지하는 요약 정보 중 DevStub이 보는 부분.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveHeader {
    /// 캐릭터 이름
    pub character_name: String,
}

impl SaveHeader {
    pub fn new(character_name: impl Into<String>) -> Self {
        Self {
            character_name: character_name.into(),
        }
    }
}

/// 라이프사이클 콜백
///
/// 인자 없는 비동기 콜백. 해당 호스트 이벤트가 발생할 때마다 한 번 호출된다.
pub type LifecycleCallback = Box<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;
