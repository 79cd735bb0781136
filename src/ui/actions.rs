//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 会话流程
    StartRound,
    Restart,           // 回到第 1 关
    ContinueSameLevel, // 失败后重试本关

    // 数字输入
    Submit,      // Enter
    Input(char), // 只会是数字
    DeleteChar,  // Backspace
    Paste(String),
}
