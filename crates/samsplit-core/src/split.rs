//! 拆分主流程：单遍扫描 + 固定窗口
use std::io::{BufReader, Bytes, Read, Write};

use tracing::{debug, info};

use crate::error::SplitError;
use crate::naming::OutputNaming;
use crate::options::{SplitOptions, SplitStats};
use crate::sink::SinkFactory;
use crate::window::{Window, WINDOW_LEN};

/// 按标记把 `input` 拆分为若干段，依次写入 `factory` 创建的输出端
///
/// 保证：
/// - 输入只顺序读取一次，除 4 字节窗口外不做任何缓冲回看
/// - 每个输入字节恰好写入一个输出端；各段按出现顺序打开、写满、关闭
/// - 输入不足 4 字节或不以标记开头时，不创建任何输出端，直接返回
pub fn split_stream<R, F>(input: R, mut factory: F, base_index: u64) -> Result<SplitStats, SplitError>
where
    R: Read,
    F: SinkFactory,
{
    let mut bytes = BufReader::new(input).bytes();
    let mut window = Window::new();
    let mut stats = SplitStats::default();

    // 预填充窗口
    for _ in 0..WINDOW_LEN {
        match next_byte(&mut bytes)? {
            Some(b) => {
                window.push(b);
                stats.bytes_read += 1;
            }
            None => {
                debug!(bytes_read = stats.bytes_read, "input shorter than marker, nothing to split");
                return Ok(stats);
            }
        }
    }
    if !window.is_marker() {
        debug!(head = ?window.as_bytes(), "input does not start with marker, nothing to split");
        return Ok(stats);
    }

    loop {
        let index = base_index.checked_add(stats.segments).ok_or(SplitError::CounterOverflow)?;
        let mut sink = factory.open(index)?;
        let (written, exhausted) = copy_segment(&mut bytes, &mut window, &mut sink, index, &mut stats)?;
        // 先关闭当前段，再打开下一段
        sink.flush().map_err(|source| SplitError::Write { index, source })?;
        drop(sink);

        stats.segments += 1;
        stats.bytes_written += written;
        debug!(index, bytes = written, "segment closed");

        if exhausted {
            return Ok(stats);
        }
    }
}

/// 拷贝一段：逐字节写出窗口中最旧的字节，直到窗口再次等于标记或输入耗尽
/// 返回 (本段写出字节数, 输入是否耗尽)
fn copy_segment<R, W>(
    bytes: &mut Bytes<BufReader<R>>,
    window: &mut Window,
    sink: &mut W,
    index: u64,
    stats: &mut SplitStats,
) -> Result<(u64, bool), SplitError>
where
    R: Read,
    W: Write,
{
    let mut written: u64 = 0;
    loop {
        match next_byte(bytes)? {
            Some(b) => {
                stats.bytes_read += 1;
                sink.write_all(&[window.oldest()]).map_err(|source| SplitError::Write { index, source })?;
                written += 1;
                window.push(b);
                if window.is_marker() {
                    return Ok((written, false));
                }
            }
            None => {
                // 输入结束：窗口内 4 个字节按序全部冲刷
                sink.write_all(window.as_bytes()).map_err(|source| SplitError::Write { index, source })?;
                written += WINDOW_LEN as u64;
                return Ok((written, true));
            }
        }
    }
}

fn next_byte<R: Read>(bytes: &mut Bytes<BufReader<R>>) -> Result<Option<u8>, SplitError> {
    bytes.next().transpose().map_err(SplitError::Read)
}

/// 按选项打开输入并把各段写入 `P.NNNN.sam` 文件
/// 前缀校验先于任何 I/O；输入打不开时不会产生任何输出文件
pub fn split_to_files(opts: &SplitOptions) -> Result<SplitStats, SplitError> {
    let naming = OutputNaming::new(opts.prefix.as_str())?;
    let input = opts.input.open()?;
    info!(input = ?opts.input, prefix = naming.prefix(), base = opts.base_index, "starting split");

    let stats = split_stream(
        input,
        |index: u64| {
            debug!(path = ?naming.path_for(index), "opening segment");
            naming.create(index)
        },
        opts.base_index,
    )?;
    Ok(stats)
}
