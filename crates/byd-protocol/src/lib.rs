//! # BYD Protocol
//!
//! BYD ADAS 接口的 CAN 协议定义（无硬件依赖、无 DBC 依赖）
//!
//! ## 模块
//!
//! - `checksum`: BYD 半字节校验和
//! - `ids`: 报文名、总线、车型变体与解析器配置
//! - `constants`: 单位换算与逆向工程得到的常量
//! - `signals`: 信号读取接口（输入）与出站命令帧（输出）
//! - `values`: 枚举型信号的值表（档位、跟车距离）
//! - `control`: 控制帧构建（转向、加速度、LKAS HUD、按键）
//!
//! ## 边界
//!
//! 本 crate 只产出"信号名 → 数值"的集合。真正的位打包、DBC 查表和
//! 发送由外部的帧构建器负责；构建器在序列化后调用
//! [`checksum::apply_checksum`] 填写校验字节。

pub mod checksum;
pub mod constants;
pub mod control;
pub mod ids;
pub mod signals;
pub mod values;

// 重新导出常用类型
pub use checksum::*;
pub use constants::*;
pub use control::*;
pub use ids::*;
pub use signals::*;
pub use values::*;

use thiserror::Error;

/// 协议层错误类型
///
/// 解码与编码核心本身不会失败；错误只出现在启动阶段的
/// 元数据解析（总线编号、值表）中。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid bus index: {index}")]
    InvalidBus { index: u8 },

    #[error("Invalid layout metadata: {0}")]
    InvalidValueTable(String),

    #[error("Value table for {message}.{signal} not found")]
    MissingValueTable { message: String, signal: String },

    #[error("Unknown vehicle variant: {0}")]
    UnknownVariant(String),
}
