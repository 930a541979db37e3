//! # BYD Control
//!
//! 转角限速与出站命令帧组合。
//!
//! - [`AngleSteeringController`]: 隔周期更新的转角控制器
//! - [`StdAngleLimiter`]: 按车速查表的转角变化率限制
//! - [`CarController`]: 每周期产出转向、HUD、加速度与按键帧
//!
//! ```rust
//! use byd_carstate::{HudPassthrough, VehicleState};
//! use byd_control::{CarController, ControllerConfig, DesiredActuation};
//!
//! let mut controller = CarController::new(ControllerConfig::default());
//! let output = controller.update(
//!     &DesiredActuation::default(),
//!     &VehicleState::default(),
//!     HudPassthrough::default(),
//! );
//! assert_eq!(output.frames.len(), 2);
//! ```

pub mod controller;
pub mod limiter;
pub mod limits;
pub mod steering;

pub use controller::{CarController, ControlOutput, ControllerConfig, DesiredActuation, FrameBatch};
pub use limiter::{AngleRateLimiter, StdAngleLimiter};
pub use limits::{ANGLE_LIMITS, AngleSteeringLimits, RateLimitTable, interp};
pub use steering::AngleSteeringController;
