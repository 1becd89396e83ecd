//! `typecalc` - run or interactively explore typed-calculus programs.
//!
//! With `-e` a single program is run and the process exits non-zero if it
//! fails. Otherwise a line-editing REPL reads one program per line. Since `λ`
//! and `→` are awkward to type, `\l` and `\>` are expanded to them first.

use anyhow::Context;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;
use typecalc::{CalcError, EvalContext, Pipeline, DEFAULT_MAX_NESTING};

const PROMPT: &str = "λ> ";

#[derive(Parser, Debug)]
#[command(name = "typecalc", version, about)]
struct Args {
    /// Run one program and exit
    #[arg(short, long, value_name = "PROGRAM")]
    eval: Option<String>,

    /// Maximum number of nested closure calls
    #[arg(long, default_value_t = EvalContext::default().max_call_depth)]
    max_depth: usize,

    /// Maximum nesting of applications and parentheses in a program
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Log every closure call
    #[arg(long)]
    trace: bool,

    /// Print the syntax tree as JSON before evaluating
    #[arg(long)]
    ast: bool,

    /// Print the checked type alongside the value
    #[arg(long = "type")]
    show_type: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.trace);

    let ctx = EvalContext::with_max_call_depth(args.max_depth).with_trace(args.trace);
    let pipeline = Pipeline::new()
        .with_context(ctx)
        .with_max_nesting(args.max_nesting);

    match &args.eval {
        Some(source) => run_once(&pipeline, &args, source),
        None => repl(&pipeline, &args),
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "typecalc=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_once(pipeline: &Pipeline, args: &Args, source: &str) -> anyhow::Result<()> {
    let source = expand_shortcuts(source);
    let output = evaluate(pipeline, args, &source)?;
    println!("{}", output);
    Ok(())
}

fn repl(pipeline: &Pipeline, args: &Args) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    println!("typecalc v{}", typecalc::VERSION);
    println!("Type help for help, exit to quit\n");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                match trimmed {
                    "exit" | "quit" => break,
                    "help" => print_help(),
                    _ => match evaluate(pipeline, args, &expand_shortcuts(&line)) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(To exit, press Ctrl+D or type exit)");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Enter a program to type check and evaluate it.");
    println!();
    println!("  \\l        inserts λ");
    println!("  \\>        inserts →");
    println!("  help      Show this help");
    println!("  exit      Exit the REPL (also Ctrl-D)");
    println!();
    println!("Example: (\\lx:Nat\\>succ x) 0");
}

/// Run one program and render what the user should see.
fn evaluate(pipeline: &Pipeline, args: &Args, source: &str) -> Result<String, CalcError> {
    let expr = pipeline.parse(source)?;
    if args.ast {
        match serde_json::to_string_pretty(&expr) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "could not serialize tree"),
        }
    }

    let evaluation = pipeline.run_expr(&expr)?;
    match (&evaluation.ty, args.show_type) {
        (Some(ty), true) => Ok(format!("{} : {}", evaluation, ty)),
        _ => Ok(evaluation.to_string()),
    }
}

/// Replace `\l` with `λ` and `\>` with `→`.
fn expand_shortcuts(line: &str) -> String {
    line.replace("\\l", "λ").replace("\\>", "→")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_shortcuts() {
        assert_eq!(expand_shortcuts("(\\lx:Nat\\>x) 0"), "(λx:Nat→x) 0");
        assert_eq!(expand_shortcuts("succ 0"), "succ 0");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["typecalc", "--type", "--max-depth", "5", "-e", "0"]);
        assert!(args.show_type);
        assert_eq!(args.max_depth, 5);
        assert_eq!(args.eval.as_deref(), Some("0"));
        assert_eq!(args.max_nesting, DEFAULT_MAX_NESTING);
        assert!(!args.trace);
    }

    #[test]
    fn test_evaluate_with_ast_still_runs() {
        let args = Args::parse_from(["typecalc", "--ast", "--type"]);
        let output = evaluate(&Pipeline::new(), &args, "succ 0").unwrap();
        assert_eq!(output, "1 : Nat");
    }

    #[test]
    fn test_evaluate_reports_nesting_limit() {
        let args = Args::parse_from(["typecalc", "--max-nesting", "2"]);
        let pipeline = Pipeline::new().with_max_nesting(args.max_nesting);
        let err = evaluate(&pipeline, &args, "succ succ 0").unwrap_err();
        assert!(matches!(err, CalcError::Syntax(_)));
        assert_eq!(err.to_string(), "Expression nests deeper than 2 levels.");
    }

    #[test]
    fn test_evaluate_renders_type() {
        let args = Args::parse_from(["typecalc", "--type"]);
        let output = evaluate(&Pipeline::new(), &args, "iszero 0").unwrap();
        assert_eq!(output, "true : Bool");
    }
}
