//! # BYD CLI
//!
//! BYD ADAS CAN 转换层的命令行工具。
//!
//! ```bash
//! # 计算校验和（最后一个字节为校验槽位）
//! byd-cli checksum 123456789ABCDE00
//!
//! # 解码一个周期的信号快照
//! byd-cli decode --config vehicle.toml --pt pt.json --cam cam.json
//!
//! # 回放录制的周期，逐行输出出站帧
//! byd-cli replay --config vehicle.toml cycles.jsonl
//! ```
//!
//! 日志输出到 stderr，级别由 `RUST_LOG` 控制。

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

mod commands;

use commands::{ChecksumCommand, DecodeCommand, ReplayCommand};

/// BYD CLI - ADAS CAN 转换层工具
#[derive(Parser, Debug)]
#[command(name = "byd-cli")]
#[command(about = "Command-line tools for the BYD ADAS CAN translation layer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 计算或校验负载的 BYD 校验和
    Checksum {
        #[command(flatten)]
        args: ChecksumCommand,
    },

    /// 解码一个周期的信号快照，输出车辆状态 JSON
    Decode {
        #[command(flatten)]
        args: DecodeCommand,
    },

    /// 回放录制的周期，输出出站帧 JSON lines
    Replay {
        #[command(flatten)]
        args: ReplayCommand,
    },
}

fn main() -> Result<()> {
    byd_sdk::init_logger();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Checksum { args } => args.execute(&mut out)?,
        Commands::Decode { args } => args.execute(&mut out)?,
        Commands::Replay { args } => args.execute(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
