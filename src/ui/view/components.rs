//! 通用 UI 组件
//!
//! 卡片、输入框、倒计时条等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

/// [组件] 卡片基础框架，返回内部区域
pub fn render_card(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 数字输入框，只读时换成成功配色
pub fn render_input_widget(frame: &mut Frame, area: Rect, value: &str, read_only: bool) {
    let (text, style) = if read_only {
        (
            format!("{value} ✓"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if value.is_empty() {
        ("?".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let border = if read_only { Color::Green } else { Color::Yellow };
    let input = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(input, area);
}

/// [组件] 记忆阶段倒计时条
pub fn render_countdown(frame: &mut Frame, area: Rect, ratio: f64, remaining_ms: u128) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightRed).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{:.1}s", remaining_ms as f64 / 1000.0));
    frame.render_widget(gauge, area);
}
