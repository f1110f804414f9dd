//! 输入源选择（具名文件或标准输入）
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use crate::error::SplitError;

/// 输入源：只读一次、不回退
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// 由可选路径构造；`None` 表示标准输入
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => InputSource::File(p),
            None => InputSource::Stdin,
        }
    }

    /// 打开输入源
    /// - 具名文件以二进制方式打开，失败即报错
    /// - 标准输入若连接到交互式终端，则视为没有可拆分的输入
    pub fn open(&self) -> Result<Box<dyn Read>, SplitError> {
        match self {
            InputSource::File(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(file)),
                Err(source) => Err(SplitError::InputOpen { path: path.clone(), source }),
            },
            InputSource::Stdin => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(SplitError::InputIsTerminal);
                }
                Ok(Box::new(stdin))
            }
        }
    }
}
