//! SAM 拼接流拆分库
//!
//! 设计要点：
//! - minialign 在 all-versus-all 模式下会把多个独立的 SAM 结果首尾相连输出到同一个流中，
//!   每个子流都以头行标记 `@HD\t` 开始。
//! - 拆分采用单遍扫描 + 4 字节滑动窗口：输入只读一次、不回退，兼容管道。
//! - 输出端通过工厂按段序号创建（默认 `P.NNNN.sam`），任一时刻只打开一个输出端。
//! - 不解析、不校验记录内容，逐字节原样复制。

mod error;
mod input;
mod naming;
mod options;
mod sink;
mod split;
mod window;

pub use error::SplitError;
pub use input::InputSource;
pub use naming::{OutputNaming, DEFAULT_PREFIX, MAX_PREFIX_LEN, OUTPUT_EXTENSION};
pub use options::{SplitOptions, SplitStats};
pub use sink::SinkFactory;
pub use split::{split_stream, split_to_files};
pub use window::{Window, MARKER, WINDOW_LEN};
