//! blitz - 终端地址搜索与定位竞猜
//!
//! 模块结构：
//! - core: 输入事件、按键与命令
//! - kernel: 无 UI 的状态机（数据集、Store、Action/Effect）与服务（设置、按键绑定、路径）
//! - app: 工作台（Workbench）与主题
//! - tui: 终端适配（crossterm 事件转换、终端模式守卫、View 接口）

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
