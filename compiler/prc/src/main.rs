//! Princess compiler CLI.

use prc::commands::{explain_error, resolve_module};
use prc::{SessionConfig, INCLUDE_PATH_ENV, OPTIONS_HELP};

fn main() {
    prc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "resolve" => {
            let options = args.iter().skip(2).cloned();
            let (config, positional) = match SessionConfig::from_args(options) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let [module] = positional.as_slice() else {
                eprintln!("Usage: prc resolve <module> [-I <dir>]... [--color=auto|always|never]");
                eprintln!();
                eprintln!("Resolves a dotted module name such as `std.io` to `std/io.pr`");
                eprintln!("under the first include path that contains it.");
                std::process::exit(1);
            };
            resolve_module(&config, module);
        }
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: prc explain <error-code>");
                eprintln!("Example: prc explain E1001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("prc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Princess Compiler");
    println!();
    println!("Usage: prc <command> [options]");
    println!();
    println!("Commands:");
    println!("  resolve <module>   Print the source file a module name resolves to");
    println!("  explain <code>     Explain an error code (e.g., prc explain E1001)");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Options:");
    print!("{OPTIONS_HELP}");
    println!();
    println!("Environment:");
    println!("  {INCLUDE_PATH_ENV}    Extra include paths, searched after -I paths");
    println!("  RUST_LOG           Enable compiler tracing (e.g., RUST_LOG=prc=debug)");
    println!("  PR_LOG_TREE=1      Render tracing output as an indented tree");
}
