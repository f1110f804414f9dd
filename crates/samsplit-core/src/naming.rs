//! 输出文件命名与创建
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::SplitError;

/// 前缀最大长度（字节）
pub const MAX_PREFIX_LEN: usize = 240;
/// 未给出前缀时使用的默认值
pub const DEFAULT_PREFIX: &str = "samsplit";
/// 输出文件扩展名
pub const OUTPUT_EXTENSION: &str = "sam";

/// 根据前缀生成 `P.NNNN.sam` 形式的输出路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    prefix: String,
}

impl OutputNaming {
    /// 校验前缀长度；超过 [`MAX_PREFIX_LEN`] 字节时报错
    pub fn new(prefix: impl Into<String>) -> Result<Self, SplitError> {
        let prefix = prefix.into();
        if prefix.len() > MAX_PREFIX_LEN {
            return Err(SplitError::PrefixTooLong { len: prefix.len(), max: MAX_PREFIX_LEN });
        }
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 第 `index` 段的输出路径
    /// - 序号至少 4 位，不足补零；超过 9999 时自然变宽
    /// - 前缀为空时省略前导的 `P.`
    pub fn path_for(&self, index: u64) -> PathBuf {
        if self.prefix.is_empty() {
            PathBuf::from(format!("{:04}.{}", index, OUTPUT_EXTENSION))
        } else {
            PathBuf::from(format!("{}.{:04}.{}", self.prefix, index, OUTPUT_EXTENSION))
        }
    }

    /// 创建（或截断）第 `index` 段的输出文件，返回带缓冲的写入端
    pub fn create(&self, index: u64) -> Result<BufWriter<File>, SplitError> {
        let path = self.path_for(index);
        match File::create(&path) {
            Ok(file) => Ok(BufWriter::new(file)),
            Err(source) => Err(SplitError::OutputOpen { path, source }),
        }
    }
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self { prefix: DEFAULT_PREFIX.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_zero_padded() {
        let naming = OutputNaming::new("out").unwrap();
        assert_eq!(naming.path_for(0), PathBuf::from("out.0000.sam"));
        assert_eq!(naming.path_for(42), PathBuf::from("out.0042.sam"));
        assert_eq!(naming.path_for(10000), PathBuf::from("out.10000.sam"));
    }

    #[test]
    fn empty_prefix_drops_separator() {
        let naming = OutputNaming::new("").unwrap();
        assert_eq!(naming.path_for(0), PathBuf::from("0000.sam"));
        assert_eq!(naming.path_for(7), PathBuf::from("0007.sam"));
    }

    #[test]
    fn default_prefix() {
        assert_eq!(OutputNaming::default().path_for(1), PathBuf::from("samsplit.0001.sam"));
    }

    #[test]
    fn prefix_length_limit() {
        assert!(OutputNaming::new("a".repeat(MAX_PREFIX_LEN)).is_ok());
        match OutputNaming::new("a".repeat(MAX_PREFIX_LEN + 1)) {
            Err(SplitError::PrefixTooLong { len, max }) => {
                assert_eq!(len, MAX_PREFIX_LEN + 1);
                assert_eq!(max, MAX_PREFIX_LEN);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn prefix_length_counts_bytes() {
        // 3 字节的 UTF-8 字符 × 81 = 243 字节
        assert!(OutputNaming::new("段".repeat(81)).is_err());
    }
}
