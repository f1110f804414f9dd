//! 输出端工厂：扫描器与文件系统之间的接缝
use std::io::Write;

use crate::error::SplitError;

/// 按段序号创建新的输出端
///
/// 任意 `FnMut(u64) -> Result<W, SplitError>`（`W: Write`）都可直接作为工厂使用，
/// 便于在测试中替换为内存写入端。
pub trait SinkFactory {
    type Sink: Write;

    fn open(&mut self, index: u64) -> Result<Self::Sink, SplitError>;
}

impl<F, W> SinkFactory for F
where
    F: FnMut(u64) -> Result<W, SplitError>,
    W: Write,
{
    type Sink = W;

    fn open(&mut self, index: u64) -> Result<W, SplitError> {
        self(index)
    }
}
