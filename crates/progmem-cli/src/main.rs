//! `imageConverter`: turn a bitmap into a `PROGMEM` C array.
//!
//! ```text
//! imageConverter [-m rgb222|rgb111] image.bmp > image.h
//! ```
//!
//! The generated source goes to stdout. Logs go to stderr and are
//! controlled with `RUST_LOG`.

use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use progmem_core::{convert, open_image, ConvertError, Mode};

use crate::args::Invocation;

mod args;

/// Printed ahead of every conversion.
const WARNING: &str = "Warning: this program doesn't take care of dithering or resizing.";

/// Exit status for usage and conversion errors.
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    ExitCode::from(dispatch(&argv, &mut out))
}

/// Run one invocation, writing everything meant for stdout to `out`.
///
/// Returns the process exit status.
fn dispatch<W: Write>(argv: &[OsString], out: &mut W) -> u8 {
    let status = match args::parse_os(argv) {
        Invocation::Usage => writeln!(out, "{}", args::USAGE).map(|_| EXIT_FAILURE),
        Invocation::Help(text) => write!(out, "{}", text).map(|_| 0),
        Invocation::Convert { path, mode } => match run(&path, mode, &mut *out) {
            Ok(_) => Ok(0),
            Err(err) => {
                log::error!("{}: {}", path.display(), err);
                Ok(EXIT_FAILURE)
            }
        },
    };

    match status.and_then(|status| out.flush().map(|_| status)) {
        Ok(status) => status,
        Err(err) => {
            log::error!("failed to write output: {}", err);
            EXIT_FAILURE
        }
    }
}

/// Print the warning, then decode `path` and write its C array to `out`.
fn run<W: Write>(path: &Path, mode: Mode, mut out: W) -> Result<W, ConvertError> {
    writeln!(out, "{}", WARNING)?;
    let image = open_image(path)?;
    log::info!(
        "converting {} ({}x{}) as {}",
        path.display(),
        image.width,
        image.height,
        mode
    );
    convert(&image, mode, out)
}
