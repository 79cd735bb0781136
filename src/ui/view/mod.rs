//! 视图层模块
//!
//! 包含主渲染入口和各阶段的画面

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::session::Phase;
use components::{render_card, render_countdown, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 主体
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);

    match app.session.phase() {
        Phase::Ready => render_ready(frame, app, chunks[1]),
        Phase::Showing { .. } => render_showing(frame, app, chunks[1]),
        Phase::Input { .. } | Phase::Correct { .. } => render_input(frame, app, chunks[1]),
        Phase::Wrong { .. } => render_result(frame, app, chunks[1]),
    }

    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "🔢 数字记忆",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Level {}", app.session.level()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_ready(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect(70, 70, area);
    let inner = render_card(frame, area, "准备", Color::Cyan);

    let level = app.session.level();
    let primary = if level > 1 {
        format!("[Enter] 继续 - Level {level}")
    } else {
        "[Enter] 开始".to_string()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "数字记忆挑战",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("记住屏幕上出现的数字，在它消失后输入。每过一关，数字多一位。"),
        Line::from(""),
        Line::from(Span::styled(primary, Style::default().fg(Color::LightRed))),
    ];
    if level > 1 {
        lines.push(Line::from(Span::styled(
            "[r] 从第 1 关重新开始",
            Style::default().fg(Color::Gray),
        )));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}

fn render_showing(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect(70, 70, area);
    let inner = render_card(frame, area, &format!("Level {}", app.session.level()), Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // 数字
            Constraint::Min(1),
            Constraint::Length(1), // 倒计时
        ])
        .split(inner);

    let target = app
        .session
        .target()
        .map(|t| t.as_str())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(target)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        chunks[1],
    );

    let ratio = app.session.reveal_progress(app.now).unwrap_or(0.0);
    let remaining = app
        .session
        .reveal_remaining(app.now)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    render_countdown(frame, chunks[3], ratio, remaining);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let correct = matches!(app.session.phase(), Phase::Correct { .. });
    let border = if correct { Color::Green } else { Color::Cyan };

    let area = centered_rect(70, 70, area);
    let inner = render_card(frame, area, &format!("Level {}", app.session.level()), border);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 提示
            Constraint::Length(3), // 输入框
            Constraint::Min(0),
        ])
        .split(inner);

    let prompt = if correct { "答对了！" } else { "输入刚才的数字" };
    frame.render_widget(
        Paragraph::new(prompt)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        chunks[0],
    );

    render_input_widget(frame, chunks[1], app.session.user_input(), correct);
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect(70, 80, area);
    let inner = render_card(frame, area, "✗ 回合结束", Color::Red);

    let level = app.session.level();
    let target = app
        .session
        .target()
        .map(|t| t.as_str())
        .unwrap_or_default();
    let guess = match app.session.last_guess() {
        "" => "----",
        g => g,
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Level {level}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("正确答案: ", Style::default().fg(Color::Gray)),
            Span::styled(
                target,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("你的答案: ", Style::default().fg(Color::Gray)),
            Span::styled(
                guess,
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("[c] 从 Level {level} 继续"),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(Span::styled(
            "[r] 从 Level 1 开始",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.session.phase() {
        Phase::Ready if app.session.level() > 1 => "[Enter] 继续  [r] 重新开始  [q] 退出",
        Phase::Ready => "[Enter] 开始  [q] 退出",
        Phase::Showing { .. } => "记住这个数字…  [q] 退出",
        Phase::Input { .. } => "[0-9] 输入  [Backspace] 删除  [Enter] 提交  [Esc] 退出",
        Phase::Correct { .. } => "即将进入下一关…",
        Phase::Wrong { .. } => "[c] 继续本关  [r] 重新开始  [q] 退出",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
