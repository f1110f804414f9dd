//! 拆分选项与统计信息（模块）
use crate::input::InputSource;
use crate::naming::DEFAULT_PREFIX;

/// 拆分选项
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// 输出文件名前缀；为空字符串时输出 `NNNN.sam`
    pub prefix: String,
    /// 起始段序号（第一个输出文件使用该值命名）
    pub base_index: u64,
    /// 输入源：具名文件或标准输入
    pub input: InputSource,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            base_index: 0,
            input: InputSource::Stdin,
        }
    }
}

/// 拆分统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitStats {
    /// 已写出的段数（即创建的输出文件数）
    pub segments: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
}
