//! jxc: translate Java infix expressions to C#.

use jx_diagnostic::emitter::ColorMode;
use jxc::commands::{check_file, lex_file, parse_color_flag, parse_translate_args, run_translate};

fn main() {
    jxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let ok = match args[1].as_str() {
        "translate" => {
            if args.len() < 3 {
                eprintln!("Usage: jxc translate <file.java>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <dir>                          Write .cs files into <dir>");
                eprintln!("  -k, --keep-going                  Write successful files even if others fail");
                eprintln!("  --cast=<bits>:<signed>:<unsigned> Cast types for the >>> rewrite");
                eprintln!("  --color=<mode>                    auto, always or never");
                std::process::exit(1);
            }
            match parse_translate_args(&args[2..]) {
                Ok(command) => run_translate(&command),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: jxc check <file.java> [--color=<mode>]");
                std::process::exit(1);
            }
            let mut color = ColorMode::Auto;
            let mut path = None;
            for arg in &args[2..] {
                if let Some(parsed) = parse_color_flag(arg) {
                    match parsed {
                        Ok(mode) => color = mode,
                        Err(msg) => {
                            eprintln!("error: {msg}");
                            std::process::exit(1);
                        }
                    }
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                }
            }
            let Some(path) = path else {
                eprintln!("error: missing file path");
                std::process::exit(1);
            };
            check_file(path, color)
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: jxc lex <file.java>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("jxc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("jxc - Java to C# expression translator");
    println!();
    println!("Usage: jxc <command> [options]");
    println!();
    println!("Commands:");
    println!("  translate <file>...  Translate Java files to C#");
    println!("  check <file>         Lex, parse and type-check a file");
    println!("  lex <file>           Dump the token stream");
    println!("  help                 Show this message");
    println!("  version              Show version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=jx_csharp=trace) to enable logging.");
}
