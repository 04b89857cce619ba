use std::{fs, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::Parser;
use splc::{
    config::{CompilerOptions, Library, PhaseOption},
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    table_builder::table_builder::TableBuilder,
    type_checker::type_checker::check_procedures,
};

#[derive(Parser, Debug)]
#[command(name = "splc")]
#[command(version = "0.1.0")]
#[command(about = "SPL compiler front end - lexing, parsing and semantic analysis", long_about = None)]
struct Args {
    /// Input SPL file (.spl)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Print the tokens and stop
    #[arg(long, group = "phase")]
    tokens: bool,

    /// Parse and print the AST, then stop
    #[arg(long, group = "phase")]
    parse: bool,

    /// Build and print the symbol table of every procedure, then stop
    #[arg(long, group = "phase")]
    tables: bool,

    /// Stop after semantic analysis
    #[arg(long, group = "phase")]
    semant: bool,

    /// Library procedures available to the program
    #[arg(long, value_enum, default_value_t = Library::Graphics)]
    library: Library,
}

impl Args {
    fn options(&self) -> CompilerOptions {
        let phase = if self.tokens {
            PhaseOption::Tokens
        } else if self.parse {
            PhaseOption::Parse
        } else if self.tables {
            PhaseOption::Tables
        } else if self.semant {
            PhaseOption::Semant
        } else {
            PhaseOption::All
        };

        CompilerOptions::new(phase, self.library)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let options = args.options();

    let source = match fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read file '{}': {}", args.input.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args.input.to_string_lossy().to_string());

    match run(&source, &file_name, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, &source, &args.input);
            ExitCode::FAILURE
        }
    }
}

fn run(source: &str, file_name: &str, options: &CompilerOptions) -> Result<(), Error> {
    let start = Instant::now();
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    log::debug!("tokenized in {:?}", start.elapsed());

    if options.phase == PhaseOption::Tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let (_, parsed) = parse(tokens, Rc::new(file_name.to_string()));
    let mut program = parsed?;
    log::debug!("parsed in {:?}", parse_start.elapsed());

    if options.phase == PhaseOption::Parse {
        println!("{:#?}", program);
        return Ok(());
    }

    let table_start = Instant::now();
    let table = TableBuilder::new(options.clone()).build_symbol_table(&mut program)?;
    log::debug!("built symbol tables in {:?}", table_start.elapsed());

    if options.phase == PhaseOption::Tables {
        return Ok(());
    }

    let check_start = Instant::now();
    check_procedures(&mut program, &table)?;
    log::debug!("checked procedures in {:?}", check_start.elapsed());

    println!("No semantic errors found in {}", file_name);
    log::debug!("total time: {:?}", start.elapsed());
    Ok(())
}
