use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use medilingo::{inspect_instruction, simplify_instruction, split_segments};
use medilingo_grammar::validator::{render_snippet, SimplifyError};
use medilingo_lexer::{normalize, ABBREVIATIONS};
use serde_json::{json, Value as JsonValue};

// Transport-boundary bounds on a single raw instruction, checked before the
// pipeline runs.
const MIN_INSTRUCTION_CHARS: usize = 3;
const MAX_INSTRUCTION_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "medilingo",
    version,
    author = "MediLingo Team",
    about = "Translate English dosage instructions into Taglish",
    long_about = "medilingo is the command-line front end for the MediLingo translator.\n\n\
        It rewrites English medication-dosage instructions into Taglish so\n\
        patients can read their prescriptions in familiar words.\n\n\
        EXAMPLES:\n\
        \n  medilingo simplify \"take 1 tablet every 8 hours.\"  Translate one instruction\n\
        \n  medilingo simplify -f prescription.txt             Translate a prescription file\n\
        \n  medilingo json \"take 2 capsules daily\"            Emit pipeline reports as JSON\n\
        \n  medilingo repl                                     Start an interactive session\n\
        \n  echo 'use 1 spray q4h prn' | medilingo             Translate from stdin",
    after_help = "For more information, visit: https://github.com/MediLingo/medilingo"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate dosage instructions into Taglish
    #[command(
        about = "Translate dosage instructions into Taglish",
        long_about = "Translates English dosage instructions into Taglish.\n\n\
            Reads the positional TEXT argument, or --file, or stdin if neither\n\
            is given. A payload may hold several instructions separated by\n\
            newlines or semicolons; each is translated independently."
    )]
    Simplify(SimplifyArgs),

    /// Output per-instruction pipeline reports as JSON
    #[command(about = "Output per-instruction pipeline reports as JSON for IDE integration")]
    Json(SimplifyArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop for translating instructions.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :abbr   List the abbreviations the normalizer expands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,

    /// Print the medical abbreviation table
    #[command(about = "Print the abbreviations the normalizer expands, one per line")]
    Abbreviations,
}

#[derive(Debug, Args, Clone)]
struct SimplifyArgs {
    /// Instruction text (reads from --file or stdin if not provided)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read instructions from a file instead
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,
}

fn read_instructions(args: &SimplifyArgs) -> Result<String, String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        return fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read from stdin: {e}"))?;
    Ok(buf)
}

fn check_length(instruction: &str) -> Result<(), String> {
    let chars = instruction.chars().count();
    if chars < MIN_INSTRUCTION_CHARS {
        return Err("Please enter a dosage instruction.".to_string());
    }
    if chars > MAX_INSTRUCTION_CHARS {
        return Err("Instruction is too long.".to_string());
    }
    Ok(())
}

fn error_kind(err: &SimplifyError) -> &'static str {
    match err {
        SimplifyError::EmptyInput => "empty_input",
        SimplifyError::UnrecognizedTerm { .. } => "unrecognized_term",
        SimplifyError::UnexpectedToken { .. } => "unexpected_token",
        SimplifyError::IncompleteInstruction { .. } => "incomplete_instruction",
    }
}

fn error_object(instruction: &str, err: &SimplifyError) -> JsonValue {
    let mut object = json!({
        "instruction": instruction,
        "kind": error_kind(err),
        "message": err.to_string(),
    });
    if let Some(span) = err.span() {
        object["span"] = json!({ "start": span.start, "end": span.end });
    }
    object
}

fn run_simplify(payload: &str, mode: OutputMode) -> i32 {
    let segments = split_segments(payload);
    if segments.is_empty() {
        eprintln!("error: Please enter a dosage instruction.");
        return 2;
    }

    let mut failures = 0usize;
    match mode {
        OutputMode::Text => {
            for segment in segments {
                if let Err(msg) = check_length(segment) {
                    eprintln!("error: {msg}");
                    failures += 1;
                    continue;
                }
                match simplify_instruction(segment) {
                    Ok(translation) => println!("{translation}"),
                    Err(err) => {
                        eprint!("{}", render_snippet(&err, &normalize(segment)));
                        failures += 1;
                    }
                }
            }
        }
        OutputMode::Json => {
            let mut entries = Vec::new();
            for segment in segments {
                if let Err(msg) = check_length(segment) {
                    entries.push(json!({
                        "instruction": segment,
                        "kind": "rejected_input",
                        "message": msg,
                    }));
                    failures += 1;
                    continue;
                }
                match inspect_instruction(segment) {
                    Ok(report) => match serde_json::to_value(&report) {
                        Ok(value) => entries.push(value),
                        Err(e) => {
                            eprintln!("error: failed to serialize JSON: {e}");
                            return 2;
                        }
                    },
                    Err(err) => {
                        entries.push(error_object(segment, &err));
                        failures += 1;
                    }
                }
            }
            match serde_json::to_string_pretty(&JsonValue::Array(entries)) {
                Ok(out) => println!("{out}"),
                Err(e) => {
                    eprintln!("error: failed to serialize JSON: {e}");
                    return 2;
                }
            }
        }
    }

    if failures > 0 {
        1
    } else {
        0
    }
}

fn abbreviation_lines() -> Vec<String> {
    ABBREVIATIONS
        .iter()
        .map(|(abbr, expansion)| format!("{abbr:<6} {expansion}"))
        .collect()
}

fn handle_repl_command(command: &str) -> (Vec<String>, bool) {
    match command {
        ":help" => (
            vec![
                "commands: :help, :abbr, :quit".to_string(),
                "type an English dosage instruction to translate it".to_string(),
            ],
            false,
        ),
        ":q" | ":quit" | ":exit" => (Vec::new(), true),
        ":abbr" => (abbreviation_lines(), false),
        _ => (vec![format!("error: unknown command '{command}'")], false),
    }
}

fn handle_repl_line(line: &str) -> (Vec<String>, bool) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (Vec::new(), false);
    }
    if trimmed.starts_with(':') {
        return handle_repl_command(trimmed);
    }
    if let Err(msg) = check_length(trimmed) {
        return (vec![format!("error: {msg}")], false);
    }
    match simplify_instruction(trimmed) {
        Ok(translation) => (vec![translation], false),
        Err(err) => (
            render_snippet(&err, &normalize(trimmed))
                .lines()
                .map(String::from)
                .collect(),
            false,
        ),
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    loop {
        match rl.readline("medilingo> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = handle_repl_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_abbreviations() -> i32 {
    for line in abbreviation_lines() {
        println!("{line}");
    }
    0
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Debug);
        }
    }
    let _ = builder.try_init();
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cmd = cli.command.unwrap_or(Command::Simplify(SimplifyArgs {
        text: None,
        file: None,
    }));

    match cmd {
        Command::Simplify(args) => {
            let payload = match read_instructions(&args) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: {e}");
                    return 2;
                }
            };
            let rc = run_simplify(&payload, OutputMode::Text);
            if cli.verbose > 0 {
                eprintln!("note: simplify completed with exit code {rc}");
            }
            rc
        }
        Command::Json(args) => {
            let payload = match read_instructions(&args) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: {e}");
                    return 2;
                }
            };
            run_simplify(&payload, OutputMode::Json)
        }
        Command::Repl => run_repl(),
        Command::Abbreviations => run_abbreviations(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
