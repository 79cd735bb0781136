//! 业务逻辑处理 (Update/Dispatch)
//!
//! 将 Action 转交给会话控制器，并推进计时器

use std::time::Instant;

use super::actions::Action;
use super::state::App;
use crate::session::Phase;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        let now = self.now;
        match action {
            Action::Quit => return true,

            Action::StartRound => {
                self.message = None;
                self.session.start_round(&mut self.rng, now);
            }
            Action::Restart => {
                self.session.restart();
                self.message = None;
            }
            Action::ContinueSameLevel => {
                self.session.continue_same_level();
                self.message = None;
            }

            Action::Submit => {
                // 输入为空时提交按钮不可用
                if self.session.user_input().is_empty() {
                    if matches!(self.session.phase(), Phase::Input { .. }) {
                        self.message = Some("请先输入数字".to_string());
                    }
                } else {
                    self.message = None;
                    self.session.submit(now);
                }
            }
            Action::Input(c) => {
                if self.session.push_digit(c) {
                    self.message = None;
                }
            }
            Action::DeleteChar => {
                self.session.pop_digit();
            }
            Action::Paste(text) => {
                let combined = format!("{}{}", self.session.user_input(), text);
                self.session.set_user_input(&combined);
            }
        }
        false
    }

    /// 推进时间，触发到期的阶段切换
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.session.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::Timings;

    fn app() -> App {
        App::with_rng(Timings::default(), StdRng::seed_from_u64(11))
    }

    /// 开始一轮并等到可以输入
    fn reach_input(app: &mut App) -> String {
        app.dispatch(Action::StartRound);
        let target = app.session.target().unwrap().to_string();
        let reveal = app.session.reveal_duration();
        app.tick(app.now + reveal);
        assert_eq!(app.session.phase().name(), "input");
        target
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::StartRound));
    }

    #[test]
    fn test_full_round_advances_level() {
        let mut app = app();
        let target = reach_input(&mut app);
        type_str(&mut app, &target);
        app.dispatch(Action::Submit);
        assert_eq!(app.session.phase().name(), "correct");

        // 成功后输入只读
        app.dispatch(Action::Input('1'));
        assert_eq!(app.session.user_input(), target);

        app.tick(app.now + Duration::from_millis(2000));
        assert_eq!(app.session.level(), 2);
        assert_eq!(app.session.phase(), &Phase::Ready);

        let next = reach_input(&mut app);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut app = app();
        reach_input(&mut app);
        app.dispatch(Action::Submit);
        assert_eq!(app.session.phase().name(), "input");
        assert!(app.message.is_some());

        type_str(&mut app, "0");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_wrong_then_continue_and_restart() {
        let mut app = app();
        let target = reach_input(&mut app);
        type_str(&mut app, &target);
        app.dispatch(Action::Submit);
        app.tick(app.now + Duration::from_millis(2000));
        assert_eq!(app.session.level(), 2);

        let target = reach_input(&mut app);
        let wrong = if target == "10" { "11" } else { "10" };
        type_str(&mut app, wrong);
        app.dispatch(Action::Submit);
        assert_eq!(app.session.phase().name(), "wrong");
        assert_eq!(app.session.last_guess(), wrong);

        app.dispatch(Action::ContinueSameLevel);
        assert_eq!(app.session.level(), 2);
        assert_eq!(app.session.user_input(), "");

        app.dispatch(Action::Restart);
        assert_eq!(app.session.level(), 1);
    }

    #[test]
    fn test_restart_during_reveal_leaves_no_timer() {
        let mut app = app();
        app.dispatch(Action::StartRound);
        app.dispatch(Action::Restart);
        app.tick(app.now + Duration::from_secs(30));
        assert_eq!(app.session.phase(), &Phase::Ready);
    }

    #[test]
    fn test_paste_keeps_only_digits() {
        let mut app = app();
        reach_input(&mut app);
        type_str(&mut app, "1");
        app.dispatch(Action::Paste("2-3 4x".to_string()));
        assert_eq!(app.session.user_input(), "1234");
    }

    #[test]
    fn test_paste_ignored_while_showing() {
        let mut app = app();
        app.dispatch(Action::StartRound);
        app.dispatch(Action::Paste("123".to_string()));
        assert_eq!(app.session.user_input(), "");
    }

    #[test]
    fn test_backspace() {
        let mut app = app();
        reach_input(&mut app);
        type_str(&mut app, "123");
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.session.user_input(), "12");
    }
}
