//! Command line parsing.
//!
//! Any malformed invocation collapses to [`Invocation::Usage`], which the
//! binary reports with a single usage line on stdout and exit status 1.

use std::ffi::OsString;
use std::path::PathBuf;

use argh::FromArgs;
use progmem_core::Mode;

/// Name the tool is invoked as.
pub const COMMAND: &str = "imageConverter";

/// Printed for every malformed invocation.
pub const USAGE: &str = "Usage: imageConverter image.bmp";

#[derive(FromArgs, Debug)]
/// Convert a bitmap image into a C array for firmware displays.
#[argh(note = "Put `--` before an image path that starts with a dash when passing options.")]
struct Args {
    /// packing mode: rgb222 (one byte per pixel) or rgb111 (one byte per pixel pair)
    #[argh(option, short = 'm', default = "Mode::default()")]
    mode: Mode,

    /// image to convert
    #[argh(positional)]
    images: Vec<String>,
}

/// What the binary should do for a given argument list.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Convert the image at `path`.
    Convert { path: PathBuf, mode: Mode },
    /// Print the generated help text and exit successfully.
    Help(String),
    /// Print [`USAGE`] and exit with status 1.
    Usage,
}

/// Parse the arguments following the program name.
pub fn parse(args: &[&str]) -> Invocation {
    let parsed = match Args::from_args(&[COMMAND], args) {
        Ok(parsed) => parsed,
        Err(early) => {
            return match early.status {
                Ok(()) => Invocation::Help(early.output),
                Err(()) => {
                    log::debug!("{}", early.output.trim_end());
                    // A lone argument is always the image path, even if it looks like a flag.
                    match args {
                        [path] => Invocation::Convert {
                            path: PathBuf::from(path),
                            mode: Mode::default(),
                        },
                        _ => Invocation::Usage,
                    }
                }
            };
        }
    };

    match parsed.images.as_slice() {
        [path] => Invocation::Convert {
            path: PathBuf::from(path),
            mode: parsed.mode,
        },
        images => {
            log::debug!("expected exactly one image path, got {}", images.len());
            Invocation::Usage
        }
    }
}

/// Parse raw OS arguments following the program name.
///
/// Arguments that are not valid UTF-8 are matched lossily, but a selected
/// image path keeps its original bytes.
pub fn parse_os(args: &[OsString]) -> Invocation {
    let lossy: Vec<String> = args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let strs: Vec<&str> = lossy.iter().map(String::as_str).collect();

    match parse(&strs) {
        Invocation::Convert { path, mode } => {
            let path = lossy
                .iter()
                .rposition(|arg| Some(arg.as_str()) == path.to_str())
                .map_or(path, |i| PathBuf::from(&args[i]));
            Invocation::Convert { path, mode }
        }
        other => other,
    }
}
