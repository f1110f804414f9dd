//! 4 字节滑动窗口与分段标记
//!
//! 窗口始终按“最旧 → 最新”的顺序保存最近读入的 4 个字节，
//! 仅用于与标记常量比较，以及在流结束时整体冲刷。

/// 窗口长度（字节），与标记长度一致
pub const WINDOW_LEN: usize = 4;

/// 子流起始标记：SAM 头行 `@HD\t`
pub const MARKER: [u8; WINDOW_LEN] = *b"@HD\t";

/// 固定长度的有序字节窗口
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    bytes: [u8; WINDOW_LEN],
}

impl Window {
    /// 创建全零窗口
    pub fn new() -> Self {
        Self::default()
    }

    /// 左移一位并把 `byte` 放到最新端，返回被挤出的最旧字节
    pub fn push(&mut self, byte: u8) -> u8 {
        let evicted = self.bytes[0];
        self.bytes.copy_within(1.., 0);
        self.bytes[WINDOW_LEN - 1] = byte;
        evicted
    }

    /// 当前最旧的字节（下一次 push 时会被写出）
    pub fn oldest(&self) -> u8 {
        self.bytes[0]
    }

    pub fn is_marker(&self) -> bool {
        self.bytes == MARKER
    }

    /// 以“最旧 → 最新”顺序返回窗口内容，用于结束时冲刷
    pub fn as_bytes(&self) -> &[u8; WINDOW_LEN] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_stream_order() {
        let mut w = Window::new();
        for &b in b"xy@HD" {
            w.push(b);
        }
        assert_eq!(w.as_bytes(), b"y@HD");
        assert_eq!(w.oldest(), b'y');
        assert!(!w.is_marker());
    }

    #[test]
    fn push_returns_evicted_byte() {
        let mut w = Window::new();
        assert_eq!(w.push(b'a'), 0);
        w.push(b'b');
        w.push(b'c');
        w.push(b'd');
        assert_eq!(w.push(b'e'), b'a');
        assert_eq!(w.as_bytes(), b"bcde");
    }

    #[test]
    fn detects_marker_only_when_aligned() {
        let mut w = Window::new();
        for &b in b"@HD " {
            w.push(b);
        }
        assert!(!w.is_marker());
        for &b in b"@HD\t" {
            w.push(b);
        }
        assert!(w.is_marker());
    }
}
