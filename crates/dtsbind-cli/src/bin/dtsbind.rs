use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// CLI arguments for the dtsbind binary.
///
/// The file list is required, so an empty invocation gets clap's usage text
/// and a non-zero exit before any file is touched.
#[derive(Parser, Debug)]
#[command(
    name = "dtsbind",
    version,
    about = "Translate TypeScript declaration files into wasm-bindgen extern blocks"
)]
struct CliArgs {
    /// Declaration files to translate. Only the first is honored.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Honors RUST_LOG; silent by default.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    if args.files.len() > 1 {
        tracing::warn!(
            ignored = args.files.len() - 1,
            "multiple input files given; only the first is translated"
        );
    }

    let input = &args.files[0];
    let bindings = dtsbind_core::translate_file(input)
        .with_context(|| format!("failed to translate {}", input.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(bindings.as_bytes())
        .context("failed to write bindings to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argument_list_is_a_usage_error() {
        let err = CliArgs::try_parse_from(["dtsbind"]).unwrap_err();
        assert!(err.use_stderr());
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn accepts_one_or_more_files() {
        let args = CliArgs::try_parse_from(["dtsbind", "a.d.ts", "b.d.ts"]).unwrap();
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.files[0], PathBuf::from("a.d.ts"));
    }
}
