//! `jsxmap` — structural map of React component usage.
//!
//! Scans a JavaScript/TypeScript source tree (a local directory or a remote
//! repository), finds every file that renders JSX, and reports the file's
//! imports and its component registry: exported declarations plus capitalized
//! imported bindings, deduplicated by (name, source).

mod error;
mod extract;
mod lang;
mod model;
mod output;
mod parser;
mod repo;
mod scan;
mod util;
mod walk;

use std::path::Path;

use error::JsxmapError;
use model::FileAnalysis;

struct CliArgs {
    json: bool,
    pretty: bool,
    targets: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut json = false;
    let mut pretty = false;
    let mut targets = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--pretty" => {
                json = true;
                pretty = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => targets.push(arg.clone()),
        }
    }

    Ok(CliArgs {
        json,
        pretty,
        targets,
    })
}

fn main() {
    env_logger::init();

    let raw: Vec<String> = std::env::args().skip(1).collect();

    if raw.is_empty() || raw[0] == "-h" || raw[0] == "--help" {
        print_help();
        std::process::exit(0);
    }

    let args = match parse_args(&raw) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("jsxmap: {msg}");
            std::process::exit(1);
        }
    };

    if args.targets.is_empty() {
        eprintln!("jsxmap: no directory or repository specified");
        std::process::exit(1);
    }

    let mut failed = false;
    for target in &args.targets {
        if let Err(e) = run_target(target, &args) {
            eprintln!("jsxmap: {e}");
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn run_target(target: &str, args: &CliArgs) -> Result<(), JsxmapError> {
    let analyses = if repo::is_remote(target) {
        let checkout = repo::clone_repository(target)?;
        scan::scan_project(&checkout.root())
    } else {
        scan::scan_project(Path::new(target))
    };

    emit(&analyses, args)
}

fn emit(analyses: &[FileAnalysis], args: &CliArgs) -> Result<(), JsxmapError> {
    if args.json {
        println!("{}", output::to_json(analyses, args.pretty)?);
    } else {
        print!("{}", output::Report(analyses));
    }
    Ok(())
}

fn print_help() {
    eprintln!("jsxmap — structural map of React component usage");
    eprintln!("Usage: jsxmap [options] <dir-or-repo-url> [more targets ...]");
    eprintln!();
    eprintln!("Scans .js/.jsx/.ts/.tsx files, keeps the ones that render JSX,");
    eprintln!("and reports each file's imports and component registry.");
    eprintln!();
    eprintln!("Remote targets (http://, https://, git@) are cloned into a");
    eprintln!("temporary directory and removed after the scan.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json       Emit the records as a JSON array");
    eprintln!("  --pretty     Pretty-print the JSON (implies --json)");
    eprintln!("  -h, --help   Show help");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_default_is_report_mode() {
        let args = parse_args(&["./app".into()]).unwrap();
        assert!(!args.json);
        assert!(!args.pretty);
        assert_eq!(args.targets, vec!["./app"]);
    }

    #[test]
    fn parse_args_json() {
        let args = parse_args(&["--json".into(), "./app".into()]).unwrap();
        assert!(args.json);
        assert!(!args.pretty);
    }

    #[test]
    fn parse_args_pretty_implies_json() {
        let args = parse_args(&["--pretty".into(), "./app".into()]).unwrap();
        assert!(args.json);
        assert!(args.pretty);
    }

    #[test]
    fn parse_args_unknown_option_errors() {
        assert!(parse_args(&["--verbose".into(), "./app".into()]).is_err());
    }

    #[test]
    fn parse_args_accepts_multiple_targets() {
        let args = parse_args(&["./a".into(), "./b".into()]).unwrap();
        assert_eq!(args.targets, vec!["./a", "./b"]);
    }

    #[test]
    fn parse_args_keeps_remote_urls_as_targets() {
        let args = parse_args(&["https://github.com/a/b.git".into()]).unwrap();
        assert_eq!(args.targets, vec!["https://github.com/a/b.git"]);
    }
}
