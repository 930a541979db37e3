//! 归一化车辆状态
//!
//! 每个控制周期从信号快照重新构建，不保留身份。

use byd_protocol::LookupValue;

/// 档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GearShifter {
    Park,
    Reverse,
    Neutral,
    Drive,
    Sport,
    Low,
    Brake,
    Eco,
    Manumatic,
    /// 值表未命中或标签不可识别
    #[default]
    Unknown,
}

impl GearShifter {
    /// 从值表标签解析（大小写不敏感）
    ///
    /// `None`（值表未命中）与无法识别的标签都返回 `Unknown`。
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return GearShifter::Unknown;
        };

        match label.trim().to_ascii_uppercase().as_str() {
            "P" | "PARK" => GearShifter::Park,
            "R" | "REVERSE" => GearShifter::Reverse,
            "N" | "NEUTRAL" => GearShifter::Neutral,
            "D" | "DRIVE" => GearShifter::Drive,
            "S" | "SPORT" => GearShifter::Sport,
            "L" | "LOW" => GearShifter::Low,
            "B" | "BRAKE" => GearShifter::Brake,
            "E" | "ECO" => GearShifter::Eco,
            "T" | "MANUMATIC" => GearShifter::Manumatic,
            _ => GearShifter::Unknown,
        }
    }
}

/// 四轮轮速（m/s）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WheelSpeeds {
    pub fl: f64,
    pub fr: f64,
    pub rl: f64,
    pub rr: f64,
}

/// 巡航状态
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CruiseState {
    pub available: bool,
    pub enabled: bool,
    /// 设定车速（m/s，已去除仪表偏差）
    pub speed: f64,
    /// 仪表显示的设定车速（m/s），巡航不可用时为 0
    pub speed_cluster: f64,
    pub standstill: bool,
    pub non_adaptive: bool,
    /// 跟车距离档位
    pub set_distance: LookupValue,
}

/// 归一化车辆状态
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleState {
    // === 车速 ===
    pub wheel_speeds: WheelSpeeds,
    /// 未滤波车速：左后与左前轮速的平均值
    pub v_ego_raw: f64,
    pub v_ego: f64,
    pub a_ego: f64,
    /// 仪表车速 = `v_ego * HUD_MULTIPLIER`
    pub v_ego_cluster: f64,
    pub standstill: bool,
    /// 横摆角速度（rad/s），无传感器的布局为 0
    pub yaw_rate: f64,

    // === 车身 ===
    pub gear_shifter: GearShifter,
    pub door_open: bool,
    pub seatbelt_unlatched: bool,

    // === 踏板 ===
    pub gas_pressed: bool,
    pub brake_pressed: bool,
    /// 制动踏板位置（0..1）
    pub brake: f64,

    // === 转向 ===
    pub steering_angle_deg: f64,
    pub steering_angle_offset_deg: f64,
    /// 相对上一周期的转角变化率（deg/s）
    pub steering_rate_deg: f64,
    pub steering_torque: f64,
    pub steering_torque_eps: f64,
    pub steering_pressed: bool,
    pub steer_fault_temporary: bool,

    // === 巡航 ===
    pub cruise_state: CruiseState,
    pub stock_aeb: bool,
    pub stock_fcw: bool,

    // === 拨杆与盲区 ===
    pub left_blinker: bool,
    pub right_blinker: bool,
    pub generic_toggle: bool,
    pub esp_disabled: bool,
    pub left_blindspot: bool,
    pub right_blindspot: bool,
}
