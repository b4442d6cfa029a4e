pub mod avaliacao;
pub mod explicacao;
pub mod metricas;
pub mod modo;
pub mod otimizador;
pub mod pesos;

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use lotofacil_stats::Estatisticas;

use crate::explicacao::{gerar_explicacao, Explicacao};
use crate::metricas::{calcular_metricas, Metricas};
use crate::modo::Modo;
use crate::otimizador::otimizar_jogo;
use crate::pesos::{completar_com_balanceados, selecionar_candidatos};

/// Tamanho padrão do pool de candidatos que semeia a busca local.
pub const POOL_PADRAO: usize = 20;

/// Jogo gerado: valor imutável de 15 números ordenados, com métricas,
/// explicação e o score bruto da avaliação. Persistir é decisão de quem chama.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jogo {
    pub numeros: [u8; 15],
    pub modo: Modo,
    pub metricas: Metricas,
    pub explicacao: Explicacao,
    pub gerado_em: String,
    pub score: f64,
}

/// Seed determinística derivada da data local (AAAAMMDD).
pub fn date_seed() -> u64 {
    let hoje = chrono::Local::now().date_naive();
    let a = hoje.year() as u64;
    let m = hoje.month() as u64;
    let d = hoje.day() as u64;
    a * 10_000 + m * 100 + d
}

/// Gera um jogo: seleciona o pool de candidatos conforme o modo, semeia a
/// busca local com os 15 melhores e refina por até 200 mutações. Nunca
/// falha: estatísticas degeneradas caem nos pesos de fallback.
pub fn gerar(stats: &Estatisticas, modo: Modo, pool: usize, seed: u64) -> Jogo {
    let mut rng = StdRng::seed_from_u64(seed);

    let candidatos = selecionar_candidatos(stats, modo, pool);
    let semente = semear(candidatos, stats);
    let (numeros, score) = otimizar_jogo(semente, &mut rng);

    let metricas = calcular_metricas(&numeros, stats);
    let explicacao = gerar_explicacao(modo, &metricas);

    Jogo {
        numeros,
        modo,
        metricas,
        explicacao,
        gerado_em: chrono::Local::now().to_rfc3339(),
        score,
    }
}

/// Reduz (ou completa) o pool para os exatos 15 números que iniciam a busca.
fn semear(candidatos: Vec<u8>, stats: &Estatisticas) -> [u8; 15] {
    let mut numeros = candidatos;
    if numeros.len() < 15 {
        numeros = completar_com_balanceados(numeros, 15, stats);
    }
    numeros.truncate(15);
    numeros.sort();

    let mut semente = [0u8; 15];
    semente.copy_from_slice(&numeros);
    semente
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avaliacao::avaliar_jogo;
    use crate::modo::TODOS_OS_MODOS;
    use lotofacil_db::models::{make_test_draws, validate_jogo};
    use lotofacil_stats::{calcular_estatisticas, estatisticas_padrao};

    #[test]
    fn test_gerar_todos_os_modos() {
        let stats = calcular_estatisticas(&make_test_draws(30), 7);
        for modo in TODOS_OS_MODOS {
            let jogo = gerar(&stats, modo, POOL_PADRAO, 42);
            assert!(validate_jogo(&jogo.numeros).is_ok(), "modo {}", modo);
            for par in jogo.numeros.windows(2) {
                assert!(par[0] < par[1], "não ordenado no modo {}", modo);
            }
            assert!((0.0..=100.0).contains(&jogo.score));
            assert_eq!(jogo.modo, modo);
        }
    }

    #[test]
    fn test_gerar_com_historico_vazio() {
        // Estatísticas padrão zeradas: geração ainda produz jogo válido
        let stats = estatisticas_padrao();
        for modo in TODOS_OS_MODOS {
            let jogo = gerar(&stats, modo, POOL_PADRAO, 7);
            assert!(validate_jogo(&jogo.numeros).is_ok(), "modo {}", modo);
        }
    }

    #[test]
    fn test_score_reproduzivel_pela_avaliacao() {
        let stats = calcular_estatisticas(&make_test_draws(25), 7);
        for seed in [1u64, 2, 3] {
            let jogo = gerar(&stats, Modo::Balanceado, POOL_PADRAO, seed);
            assert_eq!(jogo.score, avaliar_jogo(&jogo.numeros), "seed {}", seed);
        }
    }

    #[test]
    fn test_deterministico_com_mesma_seed() {
        let stats = calcular_estatisticas(&make_test_draws(25), 7);
        let a = gerar(&stats, Modo::Inteligente, POOL_PADRAO, 123);
        let b = gerar(&stats, Modo::Inteligente, POOL_PADRAO, 123);
        assert_eq!(a.numeros, b.numeros);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_pool_menor_que_15_completa() {
        let stats = calcular_estatisticas(&make_test_draws(25), 7);
        let jogo = gerar(&stats, Modo::Agressivo, 10, 5);
        assert!(validate_jogo(&jogo.numeros).is_ok());
    }

    #[test]
    fn test_pool_maior_que_o_volante() {
        let stats = calcular_estatisticas(&make_test_draws(25), 7);
        let jogo = gerar(&stats, Modo::Conservador, 40, 5);
        assert!(validate_jogo(&jogo.numeros).is_ok());
    }

    #[test]
    fn test_explicacao_acompanha_o_jogo() {
        let stats = calcular_estatisticas(&make_test_draws(30), 7);
        let jogo = gerar(&stats, Modo::Contrarian, POOL_PADRAO, 9);
        assert!(!jogo.explicacao.secoes.is_empty());
        assert_eq!(jogo.explicacao.secoes[0].titulo, "Modo Contrarian");
    }

    #[test]
    fn test_date_seed_oito_digitos() {
        let seed = date_seed();
        let s = seed.to_string();
        assert_eq!(s.len(), 8, "seed deveria ter 8 dígitos: {}", s);
    }

    #[test]
    fn test_serializacao_round_trip() {
        let stats = calcular_estatisticas(&make_test_draws(20), 7);
        let jogo = gerar(&stats, Modo::Balanceado, POOL_PADRAO, 11);
        let json = serde_json::to_string(&jogo).unwrap();
        let de_volta: Jogo = serde_json::from_str(&json).unwrap();
        assert_eq!(de_volta.numeros, jogo.numeros);
        assert_eq!(de_volta.modo, jogo.modo);
    }
}
