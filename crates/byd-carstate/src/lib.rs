//! # BYD CarState
//!
//! 将每周期的 CAN 信号快照解码为归一化车辆状态。
//!
//! - 按车型子型号选择解码器（[`decoder::decoder_for`]）
//! - 档位/跟车距离通过启动时构建的值表解码，未命中返回 `Unknown`
//! - 缺失信号使用各变体明确记录的保守默认值
//! - 摄像头 HUD 字段缓存在 [`HudPassthrough`]，供控制器回显
//!
//! ```rust
//! use byd_carstate::{CarState, DecoderConfig};
//! use byd_protocol::{RawSignalBundle, SignalBundle};
//!
//! let mut car_state = CarState::new(DecoderConfig::default());
//! let pt = SignalBundle::new().with("DRIVE_STATE", "GEAR", 4.0);
//! let cam = SignalBundle::new();
//! let state = car_state.update(&RawSignalBundle::new(&pt, &cam));
//! assert_eq!(state.gear_shifter, byd_carstate::GearShifter::Drive);
//! ```

mod carstate;
pub mod decoder;
mod hud;
pub mod speed;
mod state;

pub use carstate::{CarState, DecoderConfig};
pub use decoder::{DecodeContext, VariantDecoder, decoder_for};
pub use hud::HudPassthrough;
pub use speed::{KalmanSpeedFilter, SpeedEstimator};
pub use state::{CruiseState, GearShifter, VehicleState, WheelSpeeds};
