use clap::{Parser, Subcommand, ValueEnum};
use miette::Result;
use soul_val::{parse_f64, parse_i64, parse_u64, soul_println, Array, SoulStr};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print the ingested argument array")]
    Args { rest: Vec<String> },
    #[command(about = "Read one line of input and print it back")]
    Echo {
        #[arg(short, long, default_value = "")]
        prompt: String,
    },
    #[command(about = "Parse text as a number")]
    Parse {
        kind: NumberKind,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum NumberKind {
    I64,
    U64,
    F64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Args { rest }) => {
            let args = soul_val::args_from_env();
            log::debug!("{} raw arguments, {} after the subcommand", args.size(), rest.len());
            let names: Array<SoulStr> = rest.iter().map(|a| SoulStr::from(a.as_str())).collect();
            soul_println!("program: ", args[0])?;
            soul_println!("args: ", names)?;
        }
        Some(Commands::Echo { prompt }) => {
            soul_val::print(&[&prompt])?;
            soul_val::stdout_printer().flush().map_err(soul_val::SoulError::from)?;
            let line = soul_val::read_input()?;
            soul_println!(line)?;
        }
        Some(Commands::Parse { kind, text }) => {
            let text = SoulStr::from(text);
            match kind {
                NumberKind::I64 => soul_println!(parse_i64(&text)?)?,
                NumberKind::U64 => soul_println!(parse_u64(&text)?)?,
                NumberKind::F64 => soul_println!(parse_f64(&text)?)?,
            }
        }
        None => {
            soul_println!(soul_val::args_from_env())?;
        }
    }

    Ok(())
}
