use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::models::{Draw, Premiacao};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS concursos (
    concurso      INTEGER PRIMARY KEY,
    data          TEXT NOT NULL,
    numero_1      INTEGER NOT NULL,
    numero_2      INTEGER NOT NULL,
    numero_3      INTEGER NOT NULL,
    numero_4      INTEGER NOT NULL,
    numero_5      INTEGER NOT NULL,
    numero_6      INTEGER NOT NULL,
    numero_7      INTEGER NOT NULL,
    numero_8      INTEGER NOT NULL,
    numero_9      INTEGER NOT NULL,
    numero_10     INTEGER NOT NULL,
    numero_11     INTEGER NOT NULL,
    numero_12     INTEGER NOT NULL,
    numero_13     INTEGER NOT NULL,
    numero_14     INTEGER NOT NULL,
    numero_15     INTEGER NOT NULL,
    premiacoes    TEXT NOT NULL DEFAULT '[]',
    acumulado     INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS jogos (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    criado_em     TEXT NOT NULL,
    modo          TEXT NOT NULL,
    score         REAL NOT NULL,
    numeros       TEXT NOT NULL,
    detalhes      TEXT NOT NULL DEFAULT '{}'
);
";

pub fn db_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("lotofacil.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Não foi possível criar o diretório {:?}", parent))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Não foi possível abrir a base {:?}", path))?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Falha na migração do schema")?;
    Ok(())
}

pub fn insert_draw(conn: &Connection, draw: &Draw) -> Result<bool> {
    let premiacoes = serde_json::to_string(&draw.premiacoes)
        .context("Falha ao serializar premiações")?;
    let changed = conn.execute(
        "INSERT OR IGNORE INTO concursos (concurso, data,
            numero_1, numero_2, numero_3, numero_4, numero_5,
            numero_6, numero_7, numero_8, numero_9, numero_10,
            numero_11, numero_12, numero_13, numero_14, numero_15,
            premiacoes, acumulado)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
        rusqlite::params![
            draw.concurso,
            draw.data,
            draw.numeros[0],
            draw.numeros[1],
            draw.numeros[2],
            draw.numeros[3],
            draw.numeros[4],
            draw.numeros[5],
            draw.numeros[6],
            draw.numeros[7],
            draw.numeros[8],
            draw.numeros[9],
            draw.numeros[10],
            draw.numeros[11],
            draw.numeros[12],
            draw.numeros[13],
            draw.numeros[14],
            premiacoes,
            draw.acumulado,
        ],
    )
    .context("Falha ao inserir concurso")?;
    Ok(changed > 0)
}

fn draw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(Draw, String)> {
    let mut numeros = [0u8; 15];
    for (i, slot) in numeros.iter_mut().enumerate() {
        *slot = row.get::<_, u8>(2 + i)?;
    }
    let premiacoes_json: String = row.get(17)?;
    Ok((
        Draw {
            concurso: row.get(0)?,
            data: row.get(1)?,
            numeros,
            premiacoes: Vec::new(),
            acumulado: row.get(18)?,
        },
        premiacoes_json,
    ))
}

const SELECT_COLUMNS: &str = "concurso, data,
    numero_1, numero_2, numero_3, numero_4, numero_5,
    numero_6, numero_7, numero_8, numero_9, numero_10,
    numero_11, numero_12, numero_13, numero_14, numero_15,
    premiacoes, acumulado";

/// Últimos concursos, do mais recente para o mais antigo.
pub fn fetch_last_draws(conn: &Connection, limit: u32) -> Result<Vec<Draw>> {
    let sql = format!(
        "SELECT {} FROM concursos ORDER BY concurso DESC LIMIT ?1",
        SELECT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([limit], draw_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    decode_premiacoes(rows)
}

/// Histórico completo, do mais recente para o mais antigo.
pub fn fetch_all_draws(conn: &Connection) -> Result<Vec<Draw>> {
    let sql = format!(
        "SELECT {} FROM concursos ORDER BY concurso DESC",
        SELECT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], draw_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    decode_premiacoes(rows)
}

fn decode_premiacoes(rows: Vec<(Draw, String)>) -> Result<Vec<Draw>> {
    rows.into_iter()
        .map(|(mut draw, json)| {
            // Premiações ausentes ou ilegíveis viram lista vazia
            draw.premiacoes =
                serde_json::from_str::<Vec<Premiacao>>(&json).unwrap_or_default();
            Ok(draw)
        })
        .collect()
}

pub fn count_draws(conn: &Connection) -> Result<u32> {
    let n: u32 = conn.query_row("SELECT COUNT(*) FROM concursos", [], |row| row.get(0))?;
    Ok(n)
}

#[derive(Debug, Clone)]
pub struct JogoSalvo {
    pub id: i64,
    pub criado_em: String,
    pub modo: String,
    pub score: f64,
    pub numeros: Vec<u8>,
    pub detalhes: String,
}

pub fn insert_jogo(
    conn: &Connection,
    criado_em: &str,
    modo: &str,
    score: f64,
    numeros: &[u8],
    detalhes: &str,
) -> Result<i64> {
    let numeros_json =
        serde_json::to_string(numeros).context("Falha ao serializar números do jogo")?;
    conn.execute(
        "INSERT INTO jogos (criado_em, modo, score, numeros, detalhes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![criado_em, modo, score, numeros_json, detalhes],
    )
    .context("Falha ao salvar jogo")?;
    Ok(conn.last_insert_rowid())
}

pub fn fetch_jogos(conn: &Connection, limit: u32) -> Result<Vec<JogoSalvo>> {
    let mut stmt = conn.prepare(
        "SELECT id, criado_em, modo, score, numeros, detalhes
         FROM jogos ORDER BY id DESC LIMIT ?1",
    )?;
    let jogos = stmt
        .query_map([limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    jogos
        .into_iter()
        .map(|(id, criado_em, modo, score, numeros_json, detalhes)| {
            let numeros: Vec<u8> = serde_json::from_str(&numeros_json)
                .with_context(|| format!("Números ilegíveis no jogo {}", id))?;
            Ok(JogoSalvo {
                id,
                criado_em,
                modo,
                score,
                numeros,
                detalhes,
            })
        })
        .collect()
}
