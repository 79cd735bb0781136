//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action。非数字字符在这里就被过滤掉。

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;
use crate::session::Phase;

/// 根据当前阶段和按键获取对应的 Action
pub fn get_action(phase: &Phase, level: u32, key: KeyCode) -> Option<Action> {
    match phase {
        Phase::Ready => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::StartRound),
            KeyCode::Char('r') if level > 1 => Some(Action::Restart),
            _ => None,
        },
        Phase::Showing { .. } | Phase::Correct { .. } => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Phase::Input { .. } => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::Input(c)),
            _ => None,
        },
        Phase::Wrong { .. } => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') | KeyCode::Enter => Some(Action::ContinueSameLevel),
            KeyCode::Char('r') => Some(Action::Restart),
            _ => None,
        },
    }
}

/// 处理粘贴事件
pub fn handle_paste_event(app: &mut App, text: String) -> bool {
    app.dispatch(Action::Paste(text))
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.session.phase(), app.session.level(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::models::Target;

    fn input_phase() -> Phase {
        Phase::Input {
            target: Target::parse("12").unwrap(),
        }
    }

    #[test]
    fn test_ready_keys() {
        assert_eq!(get_action(&Phase::Ready, 1, KeyCode::Enter), Some(Action::StartRound));
        assert_eq!(get_action(&Phase::Ready, 1, KeyCode::Char('r')), None);
        assert_eq!(get_action(&Phase::Ready, 3, KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(get_action(&Phase::Ready, 1, KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn test_input_filters_non_digits() {
        let phase = input_phase();
        assert_eq!(get_action(&phase, 2, KeyCode::Char('5')), Some(Action::Input('5')));
        assert_eq!(get_action(&phase, 2, KeyCode::Char('a')), None);
        assert_eq!(get_action(&phase, 2, KeyCode::Char('q')), None);
        assert_eq!(get_action(&phase, 2, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(&phase, 2, KeyCode::Backspace), Some(Action::DeleteChar));
    }

    #[test]
    fn test_showing_and_correct_ignore_typing() {
        let now = Instant::now();
        let target = Target::parse("12").unwrap();
        let showing = Phase::Showing { target: target.clone(), deadline: now };
        let correct = Phase::Correct { target, deadline: now };
        for phase in [showing, correct] {
            assert_eq!(get_action(&phase, 2, KeyCode::Char('1')), None);
            assert_eq!(get_action(&phase, 2, KeyCode::Enter), None);
        }
    }

    #[test]
    fn test_wrong_keys() {
        let phase = Phase::Wrong {
            target: Target::parse("12").unwrap(),
        };
        assert_eq!(get_action(&phase, 2, KeyCode::Char('c')), Some(Action::ContinueSameLevel));
        assert_eq!(get_action(&phase, 2, KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(get_action(&phase, 2, KeyCode::Char('1')), None);
    }
}
