//! Verbose-level hex dumps of byte buffers.
//!
//! Each row covers up to 16 bytes and looks like
//!
//! ```text
//!   0000: 30 31 32 33 34 35 36 37  38 39 61 62 63 64 65 66    01234567 89abcdef
//! ```
//!
//! Short rows keep the hex column at full width so the ASCII column stays
//! aligned. Rows are only produced when the module threshold admits
//! [`LogLevel::Verbose`].

use std::fmt::{self, Write as _};

use crate::logging::{LogCrateSink, LogLevel, LogModule, LogSink, NFC_CORE_LOG_MODULE};

/// Number of bytes rendered per row.
pub const HEXDUMP_ROW_BYTES: usize = 16;

const GROUP_BYTES: usize = 8;

/// Display adapter rendering one row of at most [`HEXDUMP_ROW_BYTES`] bytes,
/// without the offset prefix.
#[derive(Clone, Copy, Debug)]
pub struct HexdumpRow<'a> {
    bytes: &'a [u8],
}

impl<'a> HexdumpRow<'a> {
    /// Wraps `bytes`; anything past the first 16 bytes is ignored.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        let len = bytes.len().min(HEXDUMP_ROW_BYTES);
        let (row, _) = bytes.split_at(len);
        Self { bytes: row }
    }
}

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        char::from(byte)
    } else {
        '.'
    }
}

impl fmt::Display for HexdumpRow<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in 0..HEXDUMP_ROW_BYTES {
            if slot > 0 {
                formatter.write_char(' ')?;
                if slot == GROUP_BYTES {
                    formatter.write_char(' ')?;
                }
            }
            match self.bytes.get(slot) {
                Some(byte) => write!(formatter, "{byte:02x}")?,
                None => formatter.write_str("  ")?,
            }
        }

        formatter.write_str("    ")?;
        for (index, byte) in self.bytes.iter().enumerate() {
            if index == GROUP_BYTES {
                formatter.write_char(' ')?;
            }
            formatter.write_char(printable(*byte))?;
        }
        Ok(())
    }
}

/// A row together with its byte offset, rendered as `  OOOO: row`.
#[derive(Clone, Copy, Debug)]
pub struct HexdumpLine<'a> {
    offset: usize,
    row: HexdumpRow<'a>,
}

impl HexdumpLine<'_> {
    /// Offset of the first byte of this row within the dumped buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for HexdumpLine<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "  {:04X}: {}", self.offset, self.row)
    }
}

/// Renders a single row of at most 16 bytes.
#[must_use]
pub fn hexdump_row(bytes: &[u8]) -> String {
    HexdumpRow::new(bytes).to_string()
}

/// Splits `data` into hex dump lines, one per 16-byte chunk.
///
/// ```
/// use nfc_util::hexdump_lines;
///
/// let lines: Vec<String> = hexdump_lines(b"NFC\x00").map(|line| line.to_string()).collect();
/// assert_eq!(
///     lines,
///     ["  0000: 4e 46 43 00                                         NFC."]
/// );
/// ```
pub fn hexdump_lines(data: &[u8]) -> impl Iterator<Item = HexdumpLine<'_>> {
    data.chunks(HEXDUMP_ROW_BYTES)
        .enumerate()
        .map(|(index, chunk)| HexdumpLine {
            offset: index * HEXDUMP_ROW_BYTES,
            row: HexdumpRow::new(chunk),
        })
}

/// Emits `data` through `sink`, one verbose record per row.
///
/// Nothing is emitted unless `module` admits [`LogLevel::Verbose`].
pub fn hexdump<S: LogSink + ?Sized>(module: &LogModule, sink: &S, data: &[u8]) {
    if !module.enabled(LogLevel::Verbose) {
        return;
    }
    for line in hexdump_lines(data) {
        sink.log(module.name(), LogLevel::Verbose, format_args!("{line}"));
    }
}

/// Like [`hexdump`], but a missing buffer is silently ignored.
pub fn hexdump_data<S: LogSink + ?Sized>(module: &LogModule, sink: &S, data: Option<&[u8]>) {
    if let Some(bytes) = data {
        hexdump(module, sink, bytes);
    }
}

/// Dumps `data` on [`NFC_CORE_LOG_MODULE`] through the `log` facade.
pub fn log_hexdump(data: &[u8]) {
    hexdump(&NFC_CORE_LOG_MODULE, &LogCrateSink, data);
}

/// Dumps an optional buffer on [`NFC_CORE_LOG_MODULE`] through the `log`
/// facade.
pub fn log_hexdump_data(data: Option<&[u8]>) {
    hexdump_data(&NFC_CORE_LOG_MODULE, &LogCrateSink, data);
}
