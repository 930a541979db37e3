//! replay 命令
//!
//! 逐行读取录制的周期（JSON lines），在一个驾驶会话中依次运行，
//! 每个出站帧输出一行 JSON。
//!
//! 输入行格式：
//!
//! ```json
//! {"pt": {"DRIVE_STATE": {"GEAR": 4}}, "cam": {}, "actuation": {"lat_active": true}}
//! ```

use super::load_config;
use anyhow::{Context, Result};
use byd_sdk::DrivingSession;
use byd_sdk::control::DesiredActuation;
use byd_sdk::protocol::{OutboundCommandFrame, RawSignalBundle, SignalBundle};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

/// 回放命令参数
#[derive(Args, Debug)]
pub struct ReplayCommand {
    /// 车辆配置文件（TOML）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 录制的周期文件（JSON lines）
    pub input: PathBuf,
}

/// 一个录制周期
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordedCycle {
    pt: SignalBundle,
    cam: SignalBundle,
    actuation: DesiredActuation,
}

/// 一行输出
#[derive(Debug, Serialize)]
struct FrameLine<'a> {
    cycle: usize,
    applied_angle_deg: f64,
    #[serde(flatten)]
    frame: &'a OutboundCommandFrame,
}

impl ReplayCommand {
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let mut session = DrivingSession::new(&config)?;

        let file = File::open(&self.input)
            .with_context(|| format!("打开录制文件失败: {}", self.input.display()))?;

        let mut cycles = 0usize;
        let mut frames = 0usize;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let cycle: RecordedCycle = serde_json::from_str(&line)
                .with_context(|| format!("第 {} 行格式错误", index + 1))?;

            let output = session.step(&RawSignalBundle::new(&cycle.pt, &cycle.cam), &cycle.actuation);
            for frame in &output.frames {
                let line = FrameLine {
                    cycle: cycles,
                    applied_angle_deg: output.applied_angle_deg,
                    frame,
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }

            cycles += 1;
            frames += output.frames.len();
        }

        info!(cycles, frames, "replay finished");
        Ok(())
    }
}
