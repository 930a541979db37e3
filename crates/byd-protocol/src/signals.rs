//! 信号读取接口与出站命令帧
//!
//! - 输入：外部 CAN 解析器每周期刷新的"报文名/信号名 → 数值"快照，
//!   通过 [`SignalSource`] trait 只读访问。
//! - 输出：[`OutboundCommandFrame`]，即"信号名 → 数值"集合加上目标报文名与总线，
//!   交由外部帧构建器打包并填写校验和。

use crate::ids::Bus;
use std::collections::BTreeMap;

// ============================================================================
// 输入
// ============================================================================

/// 单条总线的信号快照（只读）
///
/// 由外部解析器实现。返回 `None` 表示该信号从未被解析到。
pub trait SignalSource {
    fn value(&self, message: &str, signal: &str) -> Option<f64>;
}

/// 一个周期内两条总线的信号快照
#[derive(Clone, Copy)]
pub struct RawSignalBundle<'a> {
    pub pt: &'a dyn SignalSource,
    pub cam: &'a dyn SignalSource,
}

impl<'a> RawSignalBundle<'a> {
    pub fn new(pt: &'a dyn SignalSource, cam: &'a dyn SignalSource) -> Self {
        Self { pt, cam }
    }

    fn source(&self, bus: Bus) -> &'a dyn SignalSource {
        match bus {
            Bus::Powertrain => self.pt,
            Bus::Camera => self.cam,
        }
    }

    /// 读取信号原始值
    ///
    /// 未收到的信号按 0 处理（与解析器的零初始化一致）。
    pub fn get(&self, bus: Bus, message: &str, signal: &str) -> f64 {
        self.source(bus).value(message, signal).unwrap_or(0.0)
    }

    /// 读取布尔信号（非零为真）
    pub fn flag(&self, bus: Bus, message: &str, signal: &str) -> bool {
        self.get(bus, message, signal) != 0.0
    }

    /// 读取整型信号（向零截断）
    pub fn int(&self, bus: Bus, message: &str, signal: &str) -> i64 {
        self.get(bus, message, signal) as i64
    }
}

/// 自持有的信号快照（报文名 → 信号名 → 数值）
///
/// 用于测试、回放和离线工具；可直接从 JSON 对象反序列化。
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SignalBundle {
    messages: BTreeMap<String, BTreeMap<String, f64>>,
}

impl SignalBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置一个信号值
    pub fn set(&mut self, message: &str, signal: &str, value: f64) {
        self.messages
            .entry(message.to_string())
            .or_default()
            .insert(signal.to_string(), value);
    }

    /// 链式设置（测试中构造快照用）
    pub fn with(mut self, message: &str, signal: &str, value: f64) -> Self {
        self.set(message, signal, value);
        self
    }

    /// 报文是否出现过
    pub fn contains_message(&self, message: &str) -> bool {
        self.messages.contains_key(message)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl SignalSource for SignalBundle {
    fn value(&self, message: &str, signal: &str) -> Option<f64> {
        self.messages.get(message)?.get(signal).copied()
    }
}

// ============================================================================
// 输出
// ============================================================================

/// 出站信号值
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SignalValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl SignalValue {
    /// 按帧构建器的视角转换为数值（布尔为 0/1）
    pub fn as_f64(self) -> f64 {
        match self {
            SignalValue::Int(v) => v as f64,
            SignalValue::Float(v) => v,
            SignalValue::Bool(v) => f64::from(u8::from(v)),
        }
    }
}

impl From<i64> for SignalValue {
    fn from(value: i64) -> Self {
        SignalValue::Int(value)
    }
}

impl From<u8> for SignalValue {
    fn from(value: u8) -> Self {
        SignalValue::Int(i64::from(value))
    }
}

impl From<f64> for SignalValue {
    fn from(value: f64) -> Self {
        SignalValue::Float(value)
    }
}

impl From<bool> for SignalValue {
    fn from(value: bool) -> Self {
        SignalValue::Bool(value)
    }
}

/// 出站命令帧（信号名 → 数值）
///
/// 参与闭环执行的报文带 4 bit `COUNTER` 与值为 0 的 `CHECKSUM` 占位，
/// 校验和由外部帧构建器在序列化后计算。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutboundCommandFrame {
    /// 目标报文名
    pub message: &'static str,
    /// 目标总线
    pub bus: Bus,
    /// 信号值
    pub signals: BTreeMap<&'static str, SignalValue>,
}

impl OutboundCommandFrame {
    pub fn new(message: &'static str, bus: Bus) -> Self {
        Self {
            message,
            bus,
            signals: BTreeMap::new(),
        }
    }

    /// 写入一个信号
    pub fn set(&mut self, signal: &'static str, value: impl Into<SignalValue>) -> &mut Self {
        self.signals.insert(signal, value.into());
        self
    }

    pub fn get(&self, signal: &str) -> Option<SignalValue> {
        self.signals.get(signal).copied()
    }

    /// 以数值读取信号（布尔为 0/1）
    pub fn get_f64(&self, signal: &str) -> Option<f64> {
        self.get(signal).map(SignalValue::as_f64)
    }

    /// 以整数读取信号（浮点向零截断）
    pub fn get_int(&self, signal: &str) -> Option<i64> {
        self.get_f64(signal).map(|v| v as i64)
    }

    /// 以布尔读取信号（非零为真）
    pub fn get_bool(&self, signal: &str) -> Option<bool> {
        self.get_f64(signal).map(|v| v != 0.0)
    }

    /// 是否携带滚动计数器
    pub fn has_counter(&self) -> bool {
        self.signals.contains_key("COUNTER")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_bundle_lookup() {
        let bundle = SignalBundle::new()
            .with("WHEEL_SPEED", "WHEELSPEED_FL", 36.0)
            .with("WHEEL_SPEED", "WHEELSPEED_FR", 37.0);

        assert_eq!(bundle.value("WHEEL_SPEED", "WHEELSPEED_FL"), Some(36.0));
        assert_eq!(bundle.value("WHEEL_SPEED", "WHEELSPEED_BL"), None);
        assert_eq!(bundle.value("PEDAL", "GAS_PEDAL"), None);
        assert!(bundle.contains_message("WHEEL_SPEED"));
        assert!(!bundle.is_empty());
    }

    #[test]
    fn test_raw_bundle_routes_by_bus() {
        let pt = SignalBundle::new().with("STALKS", "LEFT_BLINKER", 1.0);
        let cam = SignalBundle::new().with("ACC_CMD", "STANDSTILL_STATE", 1.0);
        let raw = RawSignalBundle::new(&pt, &cam);

        assert!(raw.flag(Bus::Powertrain, "STALKS", "LEFT_BLINKER"));
        assert!(!raw.flag(Bus::Camera, "STALKS", "LEFT_BLINKER"));
        assert!(raw.flag(Bus::Camera, "ACC_CMD", "STANDSTILL_STATE"));
        // 缺失信号读作 0
        assert_eq!(raw.get(Bus::Powertrain, "PEDAL", "GAS_PEDAL"), 0.0);
        assert_eq!(raw.int(Bus::Powertrain, "STALKS", "LEFT_BLINKER"), 1);
    }

    #[test]
    fn test_outbound_frame_accessors() {
        let mut frame = OutboundCommandFrame::new("ACC_CMD", Bus::Powertrain);
        frame
            .set("ACCEL_CMD", -12.5)
            .set("ACC_ON_1", true)
            .set("COUNTER", 3i64);

        assert_eq!(frame.get("ACC_ON_1"), Some(SignalValue::Bool(true)));
        assert_eq!(frame.get_f64("ACCEL_CMD"), Some(-12.5));
        assert_eq!(frame.get_int("ACCEL_CMD"), Some(-12));
        assert_eq!(frame.get_int("ACC_ON_1"), Some(1));
        assert_eq!(frame.get_bool("COUNTER"), Some(true));
        assert_eq!(frame.get("MISSING"), None);
        assert!(frame.has_counter());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_signal_bundle_from_json() {
        let bundle: SignalBundle =
            serde_json::from_str(r#"{"DRIVE_STATE": {"GEAR": 4.0}}"#).unwrap();
        assert_eq!(bundle.value("DRIVE_STATE", "GEAR"), Some(4.0));
    }
}
