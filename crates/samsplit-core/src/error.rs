//! 错误类型（对外暴露）
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 一次拆分过程中可能出现的错误
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to open input file `{}'", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("standard input is a terminal and no input file was given")]
    InputIsTerminal,

    #[error("prefix must be at most {max} bytes (got {len})")]
    PrefixTooLong { len: usize, max: usize },

    #[error("failed to open output file `{}'", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input stream")]
    Read(#[source] io::Error),

    #[error("failed to write segment {index}")]
    Write {
        index: u64,
        #[source]
        source: io::Error,
    },

    #[error("segment counter overflowed")]
    CounterOverflow,
}

impl SplitError {
    /// 进程退出码：输入/前缀类错误为 1，输出端错误为 255
    pub fn exit_code(&self) -> u8 {
        match self {
            SplitError::OutputOpen { .. } | SplitError::Write { .. } => 255,
            _ => 1,
        }
    }

    /// 是否需要在报错后附带打印用法说明
    pub fn wants_usage(&self) -> bool {
        matches!(self, SplitError::InputOpen { .. } | SplitError::InputIsTerminal)
    }
}
