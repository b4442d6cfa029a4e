use anyhow::{bail, Context, Result};
use lotofacil_db::rusqlite::Connection;
use std::path::Path;

use lotofacil_db::db::insert_draw;
use lotofacil_db::models::{validate_draw, Draw, Premiacao};

/// Valores monetários no padrão brasileiro usam vírgula decimal.
pub fn parse_decimal_br(s: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    let normalizado = s.replace('.', "").replace(',', ".");
    normalizado
        .parse::<f64>()
        .with_context(|| format!("Não foi possível ler o valor: '{}'", s))
}

fn parse_date(raw: &str) -> Result<String> {
    let partes: Vec<&str> = raw.split('/').collect();
    if partes.len() != 3 {
        bail!("Formato de data inválido: '{}'", raw);
    }
    Ok(format!("{}-{}-{}", partes[2], partes[1], partes[0]))
}

/// Linha esperada: concurso;data;bola1..bola15;ganhadores15;rateio15;acumulado
/// Os três últimos campos são opcionais.
fn parse_record(record: &csv::StringRecord) -> Result<Draw> {
    let get = |idx: usize| -> Result<String> {
        record
            .get(idx)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("Campo ausente no índice {}", idx))
    };

    let get_u8 = |idx: usize| -> Result<u8> {
        let s = get(idx)?;
        s.parse::<u8>()
            .with_context(|| format!("Não foi possível ler '{}' (índice {})", s, idx))
    };

    let concurso: u32 = get(0)?
        .parse()
        .with_context(|| "Número de concurso ilegível".to_string())?;
    let data = parse_date(&get(1)?)?;

    let mut numeros = [0u8; 15];
    for (i, slot) in numeros.iter_mut().enumerate() {
        *slot = get_u8(2 + i)?;
    }
    numeros.sort();

    let ganhadores: u32 = get(17)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let premio = get(18)
        .ok()
        .and_then(|s| parse_decimal_br(&s).ok())
        .unwrap_or(0.0);

    let premiacoes = if ganhadores > 0 || premio > 0.0 {
        vec![Premiacao {
            acertos: 15,
            ganhadores,
            premio,
        }]
    } else {
        Vec::new()
    };

    let acumulado = get(19)
        .map(|s| s.eq_ignore_ascii_case("sim"))
        .unwrap_or(false);

    let draw = Draw {
        concurso,
        data,
        numeros,
        premiacoes,
        acumulado,
    };
    validate_draw(&draw)?;
    Ok(draw)
}

pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub errors: u32,
}

pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Não foi possível abrir {:?}", path))?;

    let tx = conn
        .unchecked_transaction()
        .context("Não foi possível iniciar a transação")?;

    let mut result = ImportResult {
        total_records: 0,
        inserted: 0,
        skipped: 0,
        errors: 0,
    };

    for record_result in reader.records() {
        result.total_records += 1;
        match record_result {
            Ok(record) => match parse_record(&record) {
                Ok(draw) => match insert_draw(&tx, &draw) {
                    Ok(true) => result.inserted += 1,
                    Ok(false) => result.skipped += 1,
                    Err(e) => {
                        eprintln!("Erro ao inserir concurso na linha {}: {}", result.total_records, e);
                        result.errors += 1;
                    }
                },
                Err(e) => {
                    eprintln!("Erro de parsing na linha {}: {}", result.total_records, e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                eprintln!("Erro de leitura na linha {}: {}", result.total_records, e);
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Falha no commit")?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_br() {
        assert!((parse_decimal_br("1.500.000,00").unwrap() - 1_500_000.0).abs() < 0.001);
        assert!((parse_decimal_br("1234,56").unwrap() - 1234.56).abs() < 0.001);
        assert!((parse_decimal_br("0").unwrap() - 0.0).abs() < 0.001);
        assert!((parse_decimal_br("").unwrap() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("15/03/2024").unwrap(), "2024-03-15");
        assert!(parse_date("2024-03-15").is_err());
    }

    #[test]
    fn test_parse_record_completo() {
        let record = csv::StringRecord::from(vec![
            "3000", "15/03/2024", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
            "12", "13", "14", "15", "2", "1.500.000,00", "NAO",
        ]);
        let draw = parse_record(&record).unwrap();
        assert_eq!(draw.concurso, 3000);
        assert_eq!(draw.data, "2024-03-15");
        assert_eq!(draw.numeros[0], 1);
        assert_eq!(draw.numeros[14], 15);
        assert_eq!(draw.premiacoes.len(), 1);
        assert_eq!(draw.premiacoes[0].ganhadores, 2);
        assert!(!draw.acumulado);
    }

    #[test]
    fn test_parse_record_sem_premiacao() {
        let record = csv::StringRecord::from(vec![
            "3001", "16/03/2024", "5", "1", "9", "2", "13", "3", "17", "4", "21", "6", "25",
            "7", "11", "8", "15",
        ]);
        let draw = parse_record(&record).unwrap();
        assert!(draw.premiacoes.is_empty());
        assert!(!draw.acumulado);
        // Números chegam fora de ordem e saem ordenados
        assert!(draw.numeros.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_parse_record_invalido() {
        let record = csv::StringRecord::from(vec![
            "3002", "17/03/2024", "1", "1", "3", "4", "5", "6", "7", "8", "9", "10", "11",
            "12", "13", "14", "15",
        ]);
        assert!(parse_record(&record).is_err(), "duplicata deveria falhar");
    }
}
