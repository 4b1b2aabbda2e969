use std::{env, fs::read_to_string, path::Path, process::exit, rc::Rc, time::Instant};

use exprc::{
    format_error, lexer::lexer::tokenize, parser::parser::parse,
    type_checker::type_checker::type_check,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("EXPRC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("exprc"));
        exit(2);
    }

    let file_path = Path::new(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path.display(), err);
            exit(2);
        }
    };

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name.clone()));
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = match parse(tokens, Rc::new(file_name)) {
        Ok(ast) => ast,
        Err(err) => {
            print!("{}", format_error(&err, &source));
            exit(1);
        }
    };
    println!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    let typed = match type_check(&ast, None) {
        Ok(typed) => typed,
        Err(err) => {
            print!("{}", format_error(&err, &source));
            exit(1);
        }
    };
    println!("Type checked in {:?}", type_check_start.elapsed());

    info!(ty = %typed.ty, "program checked");
    println!("Total time: {:?}", start.elapsed());
    println!("Type: {}", typed.ty);
}
