use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use samsplit_core::{split_to_files, InputSource, SplitError, SplitOptions, DEFAULT_PREFIX};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// 对外报告的版本号
const VERSION: &str = "0.0.1";

const ABOUT: &str = "samsplit - split sam stream into individuals";

const LONG_ABOUT: &str = "\
samsplit - split sam stream into individuals

minialign long-read aligner dumps concatenated sam file into stdout when
run with all-versus-all alignment mode. The samsplit utility split the
stream into correct individuals.";

const AFTER_HELP: &str = "\
Usage:
  $ minialign -X <reads.fa> [<reads.fa> ...] | samsplit out
  ## results in out.0000.sam, out.0001.sam, ...";

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "samsplit", about = ABOUT, long_about = LONG_ABOUT, after_help = AFTER_HELP)]
struct Cli {
    /// 输出文件名前缀（多余的位置参数会被忽略）
    #[arg(value_name = "PREFIX")]
    prefix: Vec<String>,

    /// 输入文件名（默认标准输入）
    #[arg(short = 'i', value_name = "STR")]
    input: Option<PathBuf>,

    /// 起始段序号
    #[arg(short = 'b', value_name = "INT", default_value_t = 0)]
    base: u64,

    /// 打印版本号
    #[arg(short = 'v')]
    print_version: bool,
}

impl Cli {
    /// 取第一个位置参数作为前缀；其余的给出警告后丢弃
    fn into_options(self) -> SplitOptions {
        let mut positional = self.prefix.into_iter();
        let prefix = positional.next().unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        for extra in positional {
            warn!(argument = %extra, "extra positional argument is discarded");
        }
        SplitOptions { prefix, base_index: self.base, input: InputSource::from_path(self.input) }
    }
}

fn main() -> ExitCode {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    if cli.print_version {
        println!("{}", VERSION);
        return ExitCode::SUCCESS;
    }

    match run(cli.into_options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let split_err = e.downcast_ref::<SplitError>();
            if split_err.map_or(false, SplitError::wants_usage) {
                eprintln!("{}", Cli::command().render_help());
            }
            ExitCode::from(split_err.map_or(1, SplitError::exit_code))
        }
    }
}

fn run(opts: SplitOptions) -> Result<()> {
    let stats = split_to_files(&opts).context("split failed")?;
    info!(segments = stats.segments, bytes_read = stats.bytes_read, bytes_written = stats.bytes_written, "split finished");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给版本号输出
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(std::io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
