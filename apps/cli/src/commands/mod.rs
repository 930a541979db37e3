//! 命令定义和实现

pub mod checksum;
pub mod decode;
pub mod replay;

pub use checksum::ChecksumCommand;
pub use decode::DecodeCommand;
pub use replay::ReplayCommand;

use anyhow::{Context, Result};
use byd_sdk::VehicleConfig;
use byd_sdk::protocol::SignalBundle;
use std::fs;
use std::path::Path;

/// 加载车辆配置（未指定时使用默认配置）
pub(crate) fn load_config(path: Option<&Path>) -> Result<VehicleConfig> {
    match path {
        Some(path) => VehicleConfig::load(path)
            .with_context(|| format!("加载车辆配置失败: {}", path.display())),
        None => Ok(VehicleConfig::default()),
    }
}

/// 读取 JSON 信号快照（`{"MESSAGE": {"SIGNAL": value}}`）
pub(crate) fn read_bundle(path: &Path) -> Result<SignalBundle> {
    let text =
        fs::read_to_string(path).with_context(|| format!("读取文件失败: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("信号快照格式错误: {}", path.display()))
}
