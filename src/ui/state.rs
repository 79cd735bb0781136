//! App 状态定义 (Model)
//!
//! 包装会话控制器，并持有随机源与最近一次的时刻

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::Timings;
use crate::session::Session;

/// 应用状态
pub struct App {
    pub session: Session,
    pub rng: StdRng,
    pub now: Instant, // 最近一次 tick 的时刻，用于渲染倒计时
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(timings: Timings) -> Self {
        Self::with_rng(timings, StdRng::from_entropy())
    }

    pub fn with_rng(timings: Timings, rng: StdRng) -> Self {
        Self {
            session: Session::new(timings),
            rng,
            now: Instant::now(),
            message: None,
        }
    }
}
