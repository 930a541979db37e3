//! # BYD SDK
//!
//! BYD ADAS CAN 转换层的统一入口。
//!
//! ## 分层
//!
//! - `byd-protocol`: 校验和、报文定义、控制帧构建
//! - `byd-carstate`: 信号快照 → 车辆状态
//! - `byd-control`: 转角限速与出站帧组合
//! - 本 crate: 配置加载、日志初始化、驾驶会话
//!
//! ## 使用示例
//!
//! ```rust
//! use byd_sdk::prelude::*;
//!
//! let config = VehicleConfig::from_toml_str(r#"variant = "adas_camera""#)?;
//! let mut session = DrivingSession::new(&config)?;
//!
//! let pt = SignalBundle::new().with("DRIVE_STATE", "GEAR", 4.0);
//! let cam = SignalBundle::new();
//! let output = session.step(&RawSignalBundle::new(&pt, &cam), &DesiredActuation::default());
//! assert_eq!(output.state.gear_shifter, GearShifter::Drive);
//! assert_eq!(output.frames.len(), 2);
//! # Ok::<(), byd_sdk::ConfigError>(())
//! ```

pub mod config;
pub mod logging;
pub mod prelude;
pub mod session;

// 各层 crate 原样导出
pub use byd_carstate as carstate;
pub use byd_control as control;
pub use byd_protocol as protocol;

pub use config::{ConfigError, VehicleConfig};
pub use logging::{LogInitError, init_logger, try_init_logger};
pub use session::{CycleOutput, DrivingSession};
