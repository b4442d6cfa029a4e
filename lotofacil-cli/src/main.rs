mod display;
mod import;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::display::{
    display_draws, display_estatisticas, display_import_summary, display_jogo,
    display_jogos_salvos,
};
use lotofacil_db::db::{
    count_draws, db_path, fetch_all_draws, fetch_jogos, fetch_last_draws, insert_jogo, migrate,
    open_db,
};
use lotofacil_db::models::JANELA_PADRAO;
use lotofacil_gerador::modo::Modo;
use lotofacil_gerador::{date_seed, gerar, POOL_PADRAO};
use lotofacil_stats::calcular_estatisticas;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ModoArg {
    #[default]
    Balanceado,
    Agressivo,
    Conservador,
    Contrarian,
    Inteligente,
}

impl From<ModoArg> for Modo {
    fn from(arg: ModoArg) -> Self {
        match arg {
            ModoArg::Balanceado => Modo::Balanceado,
            ModoArg::Agressivo => Modo::Agressivo,
            ModoArg::Conservador => Modo::Conservador,
            ModoArg::Contrarian => Modo::Contrarian,
            ModoArg::Inteligente => Modo::Inteligente,
        }
    }
}

#[derive(Parser)]
#[command(name = "lotofacil", about = "Analisador estatístico e gerador de jogos da Lotofácil")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importar concursos a partir de um arquivo CSV
    Import {
        /// Caminho para o arquivo CSV
        #[arg(short, long, default_value = "assets/lotofacil.csv")]
        file: PathBuf,
    },

    /// Exibir o caminho do banco de dados
    DbPath,

    /// Listar os últimos concursos
    List {
        /// Quantidade de concursos a exibir
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Exibir as estatísticas (frequências, atrasos, distribuição...)
    Stats {
        /// Janela de análise (quantidade de concursos)
        #[arg(short, long, default_value = "7")]
        window: usize,
    },

    /// Gerar um jogo otimizado
    Gerar {
        /// Modo de geração
        #[arg(short, long, default_value = "balanceado")]
        modo: ModoArg,

        /// Janela de análise (quantidade de concursos)
        #[arg(short, long, default_value = "7")]
        window: usize,

        /// Tamanho do pool de candidatos
        #[arg(short, long, default_value = "20")]
        pool: usize,

        /// Seed para reprodutibilidade (padrão: derivada da data de hoje)
        #[arg(long)]
        seed: Option<u64>,

        /// Salvar o jogo gerado no banco
        #[arg(long)]
        salvar: bool,
    },

    /// Listar os jogos salvos
    Jogos {
        /// Quantidade de jogos a exibir
        #[arg(short, long, default_value = "10")]
        last: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { window } => cmd_stats(&conn, window),
        Command::Gerar {
            modo,
            window,
            pool,
            seed,
            salvar,
        } => cmd_gerar(&conn, modo.into(), window, pool, seed, salvar),
        Command::Jogos { last } => cmd_jogos(&conn, last),
    }
}

fn cmd_import(conn: &lotofacil_db::rusqlite::Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &lotofacil_db::rusqlite::Connection, last: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vazia. Execute antes: lotofacil import");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(conn: &lotofacil_db::rusqlite::Connection, window: usize) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vazia. Execute antes: lotofacil import");
        return Ok(());
    }
    let janela = if window == 0 { JANELA_PADRAO } else { window };
    let draws = fetch_all_draws(conn)?;
    let stats = calcular_estatisticas(&draws, janela);
    display_estatisticas(&stats, janela);
    Ok(())
}

fn cmd_gerar(
    conn: &lotofacil_db::rusqlite::Connection,
    modo: Modo,
    window: usize,
    pool: usize,
    seed: Option<u64>,
    salvar: bool,
) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vazia. Execute antes: lotofacil import");
        return Ok(());
    }
    let janela = if window == 0 { JANELA_PADRAO } else { window };
    let pool = if pool == 0 { POOL_PADRAO } else { pool };
    let seed = seed.unwrap_or_else(date_seed);

    let draws = fetch_all_draws(conn)?;
    let stats = calcular_estatisticas(&draws, janela);
    let jogo = gerar(&stats, modo, pool, seed);

    display_jogo(&jogo);

    if salvar {
        let detalhes = serde_json::to_string(&jogo)?;
        let id = insert_jogo(
            conn,
            &jogo.gerado_em,
            &jogo.modo.to_string(),
            jogo.score,
            &jogo.numeros,
            &detalhes,
        )?;
        println!("\nJogo salvo com id {}.", id);
    }

    Ok(())
}

fn cmd_jogos(conn: &lotofacil_db::rusqlite::Connection, last: u32) -> Result<()> {
    let jogos = fetch_jogos(conn, last)?;
    display_jogos_salvos(&jogos);
    Ok(())
}
