//! 报文名、总线与车型变体定义
//!
//! 报文以 DBC 中的名称标识（外部帧构建器按名称查布局）。
//! 同一车型的不同子型号信号布局不同，由 [`VehicleVariant`] 区分。

use crate::ProtocolError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// 总线
// ============================================================================

/// CAN 总线编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Bus {
    /// 动力总线（整车 ECU）
    Powertrain = 0,
    /// 摄像头/ADAS 总线
    Camera = 2,
}

impl Bus {
    /// 从总线编号解析
    pub fn from_index(index: u8) -> Result<Self, ProtocolError> {
        Bus::try_from(index).map_err(|_| ProtocolError::InvalidBus { index })
    }

    /// 总线编号
    pub fn index(self) -> u8 {
        self.into()
    }
}

// ============================================================================
// 报文名：动力总线（所有布局共用）
// ============================================================================

pub const MSG_DRIVE_STATE: &str = "DRIVE_STATE";
pub const MSG_STEER_MODULE_2: &str = "STEER_MODULE_2";
pub const MSG_STEERING_TORQUE: &str = "STEERING_TORQUE";
pub const MSG_STALKS: &str = "STALKS";
pub const MSG_BSM: &str = "BSM";
pub const MSG_PCM_BUTTONS: &str = "PCM_BUTTONS";

// 原始布局：轮速 + 仪表门/安全带 + 踏板
pub const MSG_WHEEL_SPEED: &str = "WHEEL_SPEED";
pub const MSG_METER_CLUSTER: &str = "METER_CLUSTER";
pub const MSG_PEDAL: &str = "PEDAL";

// 备用布局：轮速 / 车门 / 安全带
pub const MSG_WHEEL_SPEED_2: &str = "WHEEL_SPEED_2";
pub const MSG_DOOR_STATUS: &str = "DOOR_STATUS";
pub const MSG_SEATBELT: &str = "SEATBELT";

// ICC 布局
pub const MSG_ICC_STATE: &str = "ICC_STATE";
pub const MSG_YAW_RATE: &str = "YAW_RATE";
pub const MSG_BRAKE_SWITCH: &str = "BRAKE_SWITCH";

// ============================================================================
// 报文名：摄像头总线（ADAS 布局）
// ============================================================================

pub const MSG_ACC_HUD_ADAS: &str = "ACC_HUD_ADAS";
pub const MSG_ACC_CMD: &str = "ACC_CMD";
pub const MSG_LKAS_HUD_ADAS: &str = "LKAS_HUD_ADAS";
pub const MSG_STEERING_MODULE_ADAS: &str = "STEERING_MODULE_ADAS";

// ============================================================================
// 车型变体
// ============================================================================

/// 车型子型号（决定信号布局）
///
/// 在启动时根据车辆识别结果确定一次，之后不再变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VehicleVariant {
    /// ADAS 摄像头巡航/LKAS 信号 + 仪表门状态（原始布局）
    #[default]
    AdasCamera,
    /// ICC 巡航信号 + 横摆角速度传感器 + 备用轮速/安全带布局
    IccCruise,
    /// ADAS 巡航/LKAS 信号 + 备用轮速/安全带布局
    HybridAdas,
}

impl VehicleVariant {
    pub const ALL: [VehicleVariant; 3] = [
        VehicleVariant::AdasCamera,
        VehicleVariant::IccCruise,
        VehicleVariant::HybridAdas,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleVariant::AdasCamera => "adas_camera",
            VehicleVariant::IccCruise => "icc_cruise",
            VehicleVariant::HybridAdas => "hybrid_adas",
        }
    }

    /// 巡航/LKAS 信号是否来自摄像头总线
    pub fn has_camera_cruise(self) -> bool {
        !matches!(self, VehicleVariant::IccCruise)
    }

    /// 动力总线解析器配置
    pub fn pt_messages(self) -> &'static [MessageCheck] {
        match self {
            VehicleVariant::AdasCamera => ADAS_CAMERA_PT_MESSAGES,
            VehicleVariant::IccCruise => ICC_CRUISE_PT_MESSAGES,
            VehicleVariant::HybridAdas => HYBRID_ADAS_PT_MESSAGES,
        }
    }

    /// 摄像头总线解析器配置
    pub fn cam_messages(self) -> &'static [MessageCheck] {
        if self.has_camera_cruise() {
            ADAS_CAM_MESSAGES
        } else {
            &[]
        }
    }
}

impl fmt::Display for VehicleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleVariant {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownVariant(s.to_string()))
    }
}

// ============================================================================
// 解析器配置
// ============================================================================

/// 外部 CAN 解析器的报文配置项
///
/// `frequency_hz` 供外部解析器做超时/失效检测，失效策略不在本 crate 内。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCheck {
    pub name: &'static str,
    pub frequency_hz: u32,
}

const fn check(name: &'static str, frequency_hz: u32) -> MessageCheck {
    MessageCheck { name, frequency_hz }
}

const ADAS_CAMERA_PT_MESSAGES: &[MessageCheck] = &[
    check(MSG_DRIVE_STATE, 50),
    check(MSG_WHEEL_SPEED, 50),
    check(MSG_PEDAL, 50),
    check(MSG_METER_CLUSTER, 20),
    check(MSG_STEER_MODULE_2, 100),
    check(MSG_STEERING_TORQUE, 50),
    check(MSG_STALKS, 20),
    check(MSG_BSM, 20),
    check(MSG_PCM_BUTTONS, 20),
];

const ICC_CRUISE_PT_MESSAGES: &[MessageCheck] = &[
    check(MSG_DRIVE_STATE, 50),
    check(MSG_WHEEL_SPEED_2, 50),
    check(MSG_DOOR_STATUS, 20),
    check(MSG_SEATBELT, 20),
    check(MSG_BRAKE_SWITCH, 50),
    check(MSG_ICC_STATE, 20),
    check(MSG_YAW_RATE, 50),
    check(MSG_STEER_MODULE_2, 100),
    check(MSG_STEERING_TORQUE, 50),
    check(MSG_STALKS, 20),
    check(MSG_BSM, 20),
    check(MSG_PCM_BUTTONS, 20),
];

const HYBRID_ADAS_PT_MESSAGES: &[MessageCheck] = &[
    check(MSG_DRIVE_STATE, 50),
    check(MSG_WHEEL_SPEED_2, 50),
    check(MSG_DOOR_STATUS, 20),
    check(MSG_SEATBELT, 20),
    check(MSG_PEDAL, 50),
    check(MSG_STEER_MODULE_2, 100),
    check(MSG_STEERING_TORQUE, 50),
    check(MSG_STALKS, 20),
    check(MSG_BSM, 20),
    check(MSG_PCM_BUTTONS, 20),
];

const ADAS_CAM_MESSAGES: &[MessageCheck] = &[
    check(MSG_ACC_HUD_ADAS, 50),
    check(MSG_ACC_CMD, 50),
    check(MSG_LKAS_HUD_ADAS, 50),
    check(MSG_STEERING_MODULE_ADAS, 50),
];
