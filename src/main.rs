use std::io::Write;
use std::io::{self};
use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use backwards::input;
use backwards::BackwardsError;
use backwards::Config;
use backwards::Reversal;
use backwards::Unit;
use clap::Parser;
use colored::*;
use env_logger::Env;
use log::info;

#[derive(Parser, Debug)]
#[clap(name = "backwards", about = "Imprime o texto recebido de trás para frente")]
struct Args
{
    /// Texto a inverter; sem argumentos, lê uma linha da entrada padrão
    words: Vec<String>,

    /// Unidade de inversão (padrão: variável BACKWARDS_UNIT ou `char`)
    #[clap(short, long, value_enum)]
    unit: Option<Unit>,

    /// Atalho para `--unit grapheme`
    #[clap(short, long, conflicts_with = "unit")]
    graphemes: bool,

    /// Imprime entrada, saída e unidade em JSON
    #[clap(long)]
    json: bool,
}

fn run(args: Args) -> Result<()>
{
    let cli_unit = if args.graphemes { Some(Unit::Grapheme) } else { args.unit };
    let config = Config::from_env().context("configuração inválida")?.with_unit(cli_unit);

    let text = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        input::resolve(&args.words, &mut reader).context("não foi possível obter o texto")?
    };

    let reversal = Reversal::new(text, config.unit);
    info!("{} caracteres invertidos por {}", reversal.input.chars().count(), reversal.unit);

    let rendered = reversal.render(args.json)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)
        .map_err(BackwardsError::from)
        .context("falha ao escrever na saída padrão")?;

    Ok(())
}

fn main() -> ExitCode
{
    // .env + logger
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(args)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) =>
        {
            eprintln!("{} {:#}", "erro:".red().bold(), err);
            let code = err.downcast_ref::<BackwardsError>().map(BackwardsError::exit_code).unwrap_or(1);
            ExitCode::from(code)
        },
    }
}
