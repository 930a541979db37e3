//! decode 命令
//!
//! 用一次全新的解码会话解码单个周期，输出车辆状态。

use super::{load_config, read_bundle};
use anyhow::Result;
use byd_sdk::carstate::CarState;
use byd_sdk::protocol::{RawSignalBundle, SignalBundle};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// 解码命令参数
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// 车辆配置文件（TOML）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 动力总线信号快照（JSON）
    #[arg(long)]
    pub pt: PathBuf,

    /// 摄像头总线信号快照（JSON），缺省为空
    #[arg(long)]
    pub cam: Option<PathBuf>,

    /// 单行输出
    #[arg(long)]
    pub compact: bool,
}

impl DecodeCommand {
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let pt = read_bundle(&self.pt)?;
        let cam = match &self.cam {
            Some(path) => read_bundle(path)?,
            None => SignalBundle::new(),
        };

        let mut car_state = CarState::new(config.decoder_config()?);
        let state = car_state.update(&RawSignalBundle::new(&pt, &cam));

        if self.compact {
            serde_json::to_writer(&mut *out, &state)?;
        } else {
            serde_json::to_writer_pretty(&mut *out, &state)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
