//! 常用类型

pub use crate::config::{ConfigError, VehicleConfig};
pub use crate::session::{CycleOutput, DrivingSession};
pub use byd_carstate::{CarState, CruiseState, GearShifter, HudPassthrough, VehicleState};
pub use byd_control::{CarController, ControllerConfig, DesiredActuation};
pub use byd_protocol::{
    Bus, OutboundCommandFrame, RawSignalBundle, SignalBundle, SignalSource, VehicleVariant,
    byd_checksum,
};
