//! C source emitter for quantized image data.
//!
//! Produces an Arduino-style header fragment:
//!
//! ```text
//! #define IMAGE_WIDTH 2
//! #define IMAGE_HEIGHT 1
//! const byte PROGMEM IMAGE[IMAGE_WIDTH*IMAGE_HEIGHT] = {
//!   0xfc,0x00,
//! };
//! ```
//!
//! Tokens are streamed straight into the underlying writer as they are
//! produced, one row per line.

use std::io::{self, Write};

/// Macro holding the declared array width.
pub const WIDTH_MACRO: &str = "IMAGE_WIDTH";

/// Macro holding the declared array height.
pub const HEIGHT_MACRO: &str = "IMAGE_HEIGHT";

/// Name of the emitted array.
pub const ARRAY_NAME: &str = "IMAGE";

/// Indentation before the first token of each row.
const ROW_INDENT: &str = "  ";

/// Incremental writer for the C array declaration.
///
/// Created with [`CArrayWriter::begin`], which writes the macros and the
/// opening brace. Rows are then appended one at a time and
/// [`CArrayWriter::finish`] closes the declaration.
#[derive(Debug)]
pub struct CArrayWriter<W: Write> {
    out: W,
    rows: usize,
    tokens: usize,
}

impl<W: Write> CArrayWriter<W> {
    /// Write the dimension macros and the array opening line.
    pub fn begin(mut out: W, width: usize, height: usize) -> io::Result<Self> {
        writeln!(out, "#define {} {}", WIDTH_MACRO, width)?;
        writeln!(out, "#define {} {}", HEIGHT_MACRO, height)?;
        writeln!(
            out,
            "const byte PROGMEM {}[{}*{}] = {{",
            ARRAY_NAME, WIDTH_MACRO, HEIGHT_MACRO
        )?;
        Ok(Self {
            out,
            rows: 0,
            tokens: 0,
        })
    }

    /// Append one row of bytes as a single indented line.
    pub fn write_row<I>(&mut self, bytes: I) -> io::Result<()>
    where
        I: IntoIterator<Item = u8>,
    {
        self.out.write_all(ROW_INDENT.as_bytes())?;
        for byte in bytes {
            write!(self.out, "{:#04x},", byte)?;
            self.tokens += 1;
        }
        self.out.write_all(b"\n")?;
        self.rows += 1;
        Ok(())
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of byte tokens written so far.
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Close the declaration, flush, and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(b"};\n")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
