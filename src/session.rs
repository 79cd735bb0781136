//! 会话控制器
//!
//! 负责关卡推进、目标生成、记忆计时与输入比对。
//! 不直接读时钟或随机源：时间以 `Instant` 传入，随机数由调用方提供，
//! 因此可以在测试中完全确定地驱动。

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::models::{Target, Timings, digits_only};

/// 当前阶段
///
/// 目标与待触发的截止时间都挂在阶段上，离开阶段即丢弃，
/// 重开后不可能再有过期的计时器把状态翻过去。
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Ready,
    Showing { target: Target, deadline: Instant },
    Input { target: Target },
    Correct { target: Target, deadline: Instant },
    Wrong { target: Target },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Showing { .. } => "showing",
            Phase::Input { .. } => "input",
            Phase::Correct { .. } => "correct",
            Phase::Wrong { .. } => "wrong",
        }
    }

    pub fn target(&self) -> Option<&Target> {
        match self {
            Phase::Ready => None,
            Phase::Showing { target, .. }
            | Phase::Input { target }
            | Phase::Correct { target, .. }
            | Phase::Wrong { target } => Some(target),
        }
    }

    fn deadline(&self) -> Option<Instant> {
        match self {
            Phase::Showing { deadline, .. } | Phase::Correct { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }
}

/// 一局游戏会话
#[derive(Debug, Clone)]
pub struct Session {
    timings: Timings,
    level: u32,
    phase: Phase,
    user_input: String,
    last_guess: String,
}

impl Session {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            level: 1,
            phase: Phase::Ready,
            user_input: String::new(),
            last_guess: String::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn target(&self) -> Option<&Target> {
        self.phase.target()
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn last_guess(&self) -> &str {
        &self.last_guess
    }

    /// 当前关卡的展示时长
    pub fn reveal_duration(&self) -> Duration {
        self.timings.reveal_duration(self.level)
    }

    // ============ 状态切换 ============

    /// 开始新一轮（仅在 Ready 阶段有效）
    pub fn start_round<R: Rng>(&mut self, rng: &mut R, now: Instant) -> bool {
        let target = Target::generate(rng, self.level);
        self.begin_round(target, now)
    }

    pub(crate) fn begin_round(&mut self, target: Target, now: Instant) -> bool {
        if self.phase != Phase::Ready {
            debug!(phase = self.phase.name(), "start_round ignored");
            return false;
        }
        debug_assert_eq!(target.as_str().len(), self.level as usize);

        self.user_input.clear();
        let deadline = now + self.reveal_duration();
        info!(level = self.level, "round started");
        self.phase = Phase::Showing { target, deadline };
        true
    }

    /// 推进计时器，到期则执行对应切换。返回是否发生了切换。
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase.deadline() {
            Some(deadline) if now >= deadline => {}
            _ => return false,
        }

        match std::mem::replace(&mut self.phase, Phase::Ready) {
            Phase::Showing { target, .. } => {
                debug!(level = self.level, "reveal window elapsed");
                self.phase = Phase::Input { target };
            }
            Phase::Correct { .. } => {
                self.level += 1;
                self.user_input.clear();
                self.last_guess.clear();
                info!(level = self.level, "advanced to next level");
            }
            other => self.phase = other,
        }
        true
    }

    /// 整体替换输入，过滤掉非数字字符
    pub fn set_user_input(&mut self, text: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.user_input = digits_only(text);
        true
    }

    pub fn push_digit(&mut self, c: char) -> bool {
        if !self.accepts_input() || !c.is_ascii_digit() {
            return false;
        }
        self.user_input.push(c);
        true
    }

    pub fn pop_digit(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.user_input.pop().is_some()
    }

    /// 提交答案（仅在 Input 阶段有效）
    pub fn submit(&mut self, now: Instant) -> bool {
        let target = match std::mem::replace(&mut self.phase, Phase::Ready) {
            Phase::Input { target } => target,
            other => {
                debug!(phase = other.name(), "submit ignored");
                self.phase = other;
                return false;
            }
        };

        self.last_guess = self.user_input.clone();
        if target.matches(&self.user_input) {
            info!(level = self.level, "correct");
            self.phase = Phase::Correct {
                target,
                deadline: now + self.timings.advance_delay(),
            };
        } else {
            info!(level = self.level, guess = %self.last_guess, target = %target, "wrong");
            self.phase = Phase::Wrong { target };
        }
        true
    }

    /// 回到第 1 关（任何阶段均可），丢弃待触发的计时器
    pub fn restart(&mut self) {
        info!(from_level = self.level, phase = self.phase.name(), "restart");
        self.level = 1;
        self.phase = Phase::Ready;
        self.user_input.clear();
        self.last_guess.clear();
    }

    /// 失败后在当前关卡重试
    pub fn continue_same_level(&mut self) -> bool {
        if !matches!(self.phase, Phase::Wrong { .. }) {
            debug!(phase = self.phase.name(), "continue ignored");
            return false;
        }
        self.phase = Phase::Ready;
        self.user_input.clear();
        self.last_guess.clear();
        true
    }

    // ============ 倒计时 ============

    /// 展示阶段剩余时间
    pub fn reveal_remaining(&self, now: Instant) -> Option<Duration> {
        match &self.phase {
            Phase::Showing { deadline, .. } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// 展示阶段剩余比例，1.0 为刚开始，0.0 为结束
    pub fn reveal_progress(&self, now: Instant) -> Option<f64> {
        let remaining = self.reveal_remaining(now)?;
        let total = self.reveal_duration();
        if total.is_zero() {
            return Some(0.0);
        }
        Some((remaining.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0))
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Input { .. })
    }
}
