use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

/// 待记忆的数字串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    /// 生成指定长度的随机数字串，首位 1-9，其余 0-9
    pub fn generate<R: Rng>(rng: &mut R, length: u32) -> Self {
        let digits = (0..length)
            .map(|i| {
                let d = if i == 0 {
                    rng.gen_range(1..=9u8)
                } else {
                    rng.gen_range(0..=9u8)
                };
                char::from(b'0' + d)
            })
            .collect();
        Self(digits)
    }

    /// 用固定数字串构造，只接受非空的纯数字串。
    /// 前导零是允许的，比对时要能区分 "042" 与 "42"。
    #[cfg(test)]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 精确比较：不去空白，不做数值转换，前导零和长度都算数
    pub fn matches(&self, guess: &str) -> bool {
        self.0 == guess
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 计时参数（毫秒）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub reveal_base_ms: u64,
    pub reveal_per_digit_ms: u64,
    pub advance_delay_ms: u64,
    pub tick_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_base_ms: 2000,
            reveal_per_digit_ms: 400,
            advance_delay_ms: 2000,
            tick_ms: 50,
        }
    }
}

impl Timings {
    /// 展示阶段时长，随关卡线性增长。倒计时条与状态切换共用此值。
    pub fn reveal_duration(&self, level: u32) -> Duration {
        Duration::from_millis(
            self.reveal_base_ms
                .saturating_add(u64::from(level).saturating_mul(self.reveal_per_digit_ms)),
        )
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// 只保留 ASCII 数字
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        #[test]
        fn generated_target_has_level_length_and_no_leading_zero(level in 1u32..64, seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let target = Target::generate(&mut rng, level);
            prop_assert_eq!(target.as_str().len(), level as usize);
            prop_assert!(target.as_str().bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(!target.as_str().starts_with('0'));
        }
    }

    #[test]
    fn test_exact_match() {
        let target = Target::parse("042").unwrap();
        assert!(!target.matches("42"));
        assert!(!target.matches("042 "));
        assert!(!target.matches("0420"));
        assert!(target.matches("042"));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(Target::parse("").is_none());
        assert!(Target::parse("12a").is_none());
        assert!(Target::parse(" 12").is_none());
        assert_eq!(Target::parse("907").unwrap().as_str(), "907");
    }

    #[test]
    fn test_parse_keeps_leading_zero() {
        let target = Target::parse("042").unwrap();
        assert_eq!(target.as_str(), "042");
        assert_eq!(target.as_str().len(), 3);
    }

    #[test]
    fn test_reveal_duration_scales_with_level() {
        let timings = Timings::default();
        assert_eq!(timings.reveal_duration(1), Duration::from_millis(2400));
        assert_eq!(timings.reveal_duration(5), Duration::from_millis(4000));
        assert_eq!(timings.advance_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("1a2 b3-4"), "1234");
        assert_eq!(digits_only("０12"), "12");
        assert_eq!(digits_only(""), "");
    }
}
