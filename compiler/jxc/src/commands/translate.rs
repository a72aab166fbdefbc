//! The `translate` command: Java files in, C# files out.
//!
//! Files are independent, so they are translated in parallel. Writing
//! happens afterwards, on one thread, once the failure policy has been
//! applied:
//! - default: if any file fails, nothing is written
//! - `--keep-going`: every file that translated is written

use std::path::{Path, PathBuf};

use jx_csharp::{translate_unit, TranslateFailure, TranslateOptions};
use jx_diagnostic::emitter::ColorMode;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::{parse_color_flag, read_source, report_diagnostics};

/// Driver options that are not translation options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Output directory (-o). Defaults to next to each input.
    pub output_dir: Option<PathBuf>,
    /// Write successful files even when others fail (--keep-going).
    pub keep_going: bool,
    /// Diagnostic colors (--color=<mode>).
    pub color: ColorMode,
}

/// A fully parsed `jxc translate` invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslateCommand {
    pub inputs: Vec<PathBuf>,
    pub cli: CliOptions,
    pub options: TranslateOptions,
}

/// Parse the arguments after `translate`.
pub fn parse_translate_args(args: &[String]) -> Result<TranslateCommand, String> {
    let mut command = TranslateCommand::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" || arg == "--out-dir" {
            let Some(dir) = args.get(i + 1) else {
                return Err(format!("missing directory after '{arg}'"));
            };
            command.cli.output_dir = Some(PathBuf::from(dir));
            i += 2;
            continue;
        }
        if arg == "--keep-going" || arg == "-k" {
            command.cli.keep_going = true;
        } else if let Some(cast) = arg.strip_prefix("--cast=") {
            command.options.apply_cast_override(cast)?;
        } else if let Some(color) = parse_color_flag(arg) {
            command.cli.color = color?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            command.inputs.push(PathBuf::from(arg));
        }
        i += 1;
    }
    if command.inputs.is_empty() {
        return Err("no input files".to_string());
    }
    Ok(command)
}

/// Where the C# for `input` goes.
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let cs = input.with_extension("cs");
    match (output_dir, cs.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => cs,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileError {
    Read(String),
    Translate(TranslateFailure),
    Write(String),
}

/// What happened to one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: String,
    pub result: Result<String, FileError>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslateReport {
    /// One entry per input, in input order.
    pub outcomes: Vec<FileOutcome>,
    /// Files actually written.
    pub written: Vec<PathBuf>,
}

impl TranslateReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }

    pub fn succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Translate every input and write the results according to the policy.
pub fn translate_files(command: &TranslateCommand) -> TranslateReport {
    let output_dir = command.cli.output_dir.as_deref();
    let mut outcomes: Vec<FileOutcome> = command
        .inputs
        .par_iter()
        .map(|input| translate_one(input, output_dir, &command.options))
        .collect();
    reject_shared_outputs(&mut outcomes);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    let mut written = Vec::new();
    if failed > 0 && !command.cli.keep_going {
        debug!(failed, "translation failed; writing nothing");
        return TranslateReport { outcomes, written };
    }

    if let Some(dir) = output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            let msg = format!("cannot create '{}': {e}", dir.display());
            for outcome in outcomes.iter_mut().filter(|o| o.is_ok()) {
                outcome.result = Err(FileError::Write(msg.clone()));
            }
            return TranslateReport { outcomes, written };
        }
    }

    for outcome in &mut outcomes {
        let Ok(text) = &outcome.result else {
            continue;
        };
        match std::fs::write(&outcome.output, text) {
            Ok(()) => written.push(outcome.output.clone()),
            Err(e) => {
                warn!(path = %outcome.output.display(), error = %e, "write failed");
                let msg = format!("cannot write '{}': {e}", outcome.output.display());
                outcome.result = Err(FileError::Write(msg));
            }
        }
    }
    TranslateReport { outcomes, written }
}

/// Fail every translated file whose output path another input also maps to
/// (`a/X.java` and `b/X.java` under `-o out`).
fn reject_shared_outputs(outcomes: &mut [FileOutcome]) {
    let mut by_output: FxHashMap<PathBuf, Vec<usize>> = FxHashMap::default();
    for (i, outcome) in outcomes.iter().enumerate() {
        by_output.entry(outcome.output.clone()).or_default().push(i);
    }
    for (output, indices) in by_output.iter().filter(|(_, v)| v.len() > 1) {
        for &i in indices {
            let others: Vec<String> = indices
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| outcomes[j].input.display().to_string())
                .collect();
            let outcome = &mut outcomes[i];
            if outcome.is_ok() {
                warn!(output = %output.display(), "output path shared by several inputs");
                outcome.result = Err(FileError::Write(format!(
                    "'{}' and '{}' would both write '{}'",
                    outcome.input.display(),
                    others.join("', '"),
                    output.display()
                )));
            }
        }
    }
}

fn translate_one(input: &Path, output_dir: Option<&Path>, options: &TranslateOptions) -> FileOutcome {
    let output = output_path(input, output_dir);
    let path = input.to_string_lossy();
    let (source, result) = match read_source(&path) {
        Ok(source) => {
            let result = translate_unit(&source, options).map_err(FileError::Translate);
            (source, result)
        }
        Err(msg) => (String::new(), Err(FileError::Read(msg))),
    };
    debug!(input = %path, ok = result.is_ok(), "translated");
    FileOutcome {
        input: input.to_path_buf(),
        output,
        source,
        result,
    }
}

/// Run the command and print what happened. Returns `true` on success.
pub fn run_translate(command: &TranslateCommand) -> bool {
    let report = translate_files(command);

    for outcome in &report.outcomes {
        let path = outcome.input.to_string_lossy();
        match &outcome.result {
            Ok(_) => {}
            Err(FileError::Read(msg) | FileError::Write(msg)) => eprintln!("error: {msg}"),
            Err(FileError::Translate(failure)) => {
                report_diagnostics(&path, &outcome.source, &failure.diagnostics, command.cli.color);
            }
        }
    }

    for path in &report.written {
        println!("wrote {}", path.display());
    }
    let failed = report.failed();
    if failed > 0 {
        eprintln!(
            "{failed} of {} file(s) failed; {} written",
            report.outcomes.len(),
            report.written.len()
        );
        return false;
    }
    true
}
