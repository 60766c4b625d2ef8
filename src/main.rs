//! CLI tool to validate and inspect enumerator lists.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use enum_meta::{
    AngleBrackets, Declaration, EnumMetadata, LiteralEvaluator, NameRule, Options, Registry,
    Repr, Strip,
};
use serde::Serialize;

/// One element of the array printed by `json`.
#[derive(Serialize)]
struct JsonEnum {
    name: String,
    repr: Repr,
    #[serde(flatten)]
    meta: EnumMetadata,
}

struct Flags {
    options: Options,
    repr: Repr,
}

fn usage() {
    eprintln!("Usage: enum-meta <command> [options] [files...]");
    eprintln!();
    eprintln!("Each file holds one enumerator list; the file stem names the enum.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check  Check that enumerator list(s) are well formed");
    eprintln!("  dump   Print member tables to stdout");
    eprintln!("  json   Print metadata of all files as one JSON array to stdout");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --angle=shift|ignore     Angle bracket handling (default: shift)");
    eprintln!("  --square                 Track [ ] as brackets");
    eprintln!("  --names=raw|trim|ident   Member name rule (default: raw)");
    eprintln!("  --repr=<type>            Underlying type, e.g. i32, u8 (default: i32)");
    eprintln!();
    eprintln!("Set ENUM_META_LOG=debug for diagnostics on stderr.");
}

fn parse_flag(flags: &mut Flags, arg: &str) -> Result<(), String> {
    let (key, value) = arg.split_once('=').unwrap_or((arg, ""));
    match (key, value) {
        ("--angle", "shift") => {
            flags.options = flags.options.angle_brackets(AngleBrackets::ShiftAware);
        }
        ("--angle", "ignore") => {
            flags.options = flags.options.angle_brackets(AngleBrackets::Ignore);
        }
        ("--square", "") => flags.options = flags.options.square_brackets(true),
        ("--names", "raw") => flags.options = flags.options.names(NameRule::RawEcho),
        ("--names", "trim") => flags.options = flags.options.strip_names(Strip::Whitespace),
        ("--names", "ident") => flags.options = flags.options.strip_names(Strip::Initializer),
        ("--repr", repr) => flags.repr = repr.parse().map_err(|e| format!("{e}"))?,
        _ => return Err(format!("unknown option: {arg}")),
    }
    Ok(())
}

fn init_tracing() {
    let filter = match std::env::var("ENUM_META_LOG") {
        Ok(directives) => tracing_subscriber::EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var("RUST_LOG").is_ok() => {
            tracing_subscriber::EnvFilter::from_default_env()
        }
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Register one file and run `command` on it. `json` results are
/// collected into `docs` and printed once all files are done. Returns
/// `false` on error.
fn process_file(
    command: &str,
    path: &str,
    registry: &mut Registry,
    repr: Repr,
    docs: &mut Vec<JsonEnum>,
) -> bool {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{path}: {e}");
            return false;
        }
    };

    let name = Path::new(path)
        .file_stem()
        .map_or_else(|| path.to_string(), |s| s.to_string_lossy().into_owned());
    let body = content.trim_end_matches(['\n', '\r']);
    let decl = Declaration::new(&name, body).repr(repr);

    let meta = match registry.register(&decl, &LiteralEvaluator) {
        Ok(meta) => meta,
        Err(e) => {
            eprintln!("{path}: {e}");
            return false;
        }
    };

    match command {
        "check" => {
            eprintln!("{path}: valid ({} enumerator(s))", meta.len());
        }
        "dump" => {
            println!("enum {name}: {repr}");
            print!("{meta}");
        }
        _ => docs.push(JsonEnum {
            name,
            repr,
            meta: meta.clone(),
        }),
    }

    true
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    if !matches!(command, "check" | "dump" | "json") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    let mut flags = Flags {
        options: Options::default(),
        repr: Repr::default(),
    };
    let mut files = Vec::new();
    for arg in &args[2..] {
        if arg.starts_with("--") {
            if let Err(e) = parse_flag(&mut flags, arg) {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        } else {
            files.push(arg.as_str());
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut registry = Registry::new(flags.options);
    let mut docs = Vec::new();
    let mut had_error = false;

    for path in files {
        if !process_file(command, path, &mut registry, flags.repr, &mut docs) {
            had_error = true;
        }
    }

    if command == "json" {
        match serde_json::to_string_pretty(&docs) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
