use lotofacil_db::models::{eh_fibonacci, eh_primo, Faixa, JANELA_PADRAO, TOTAL_NUMEROS};
use lotofacil_stats::Estatisticas;

use crate::modo::Modo;

/// Peso balanceado de cada número: 30% frequência recente, até 25 de atraso
/// em curva logarítmica, 20% histórico geral, bônus fixos de primo e
/// Fibonacci, 5% de posição na faixa.
pub fn pesos_balanceados(stats: &Estatisticas) -> [f64; 25] {
    let mut pesos = [0.0f64; 25];

    for numero in 1..=TOTAL_NUMEROS {
        let idx = (numero - 1) as usize;
        let mut peso = 0.0;

        peso += (stats.ocorrencias_de(numero) as f64 / JANELA_PADRAO as f64) * 30.0;

        let atraso = stats.atraso_de(numero);
        if atraso > 0 {
            // Curva log: cresce rápido no início e depois desacelera
            peso += (((atraso + 1) as f64).ln() * 10.0).min(25.0);
        }

        peso += (stats.ocorrencias_total_de(numero) as f64 / 2300.0) * 20.0;

        if eh_primo(numero) {
            peso += 10.0;
        }
        if eh_fibonacci(numero) {
            peso += 10.0;
        }

        peso += bonus_faixa(numero) * 5.0;

        pesos[idx] = peso;
    }

    pesos
}

/// Faixa média é a ideal; baixos e altos levam um pouco menos.
fn bonus_faixa(numero: u8) -> f64 {
    match Faixa::de(numero) {
        Faixa::Media => 1.0,
        Faixa::Baixa | Faixa::Alta => 0.9,
    }
}

/// Vetor de 7 características de um número, na escala do sistema de
/// pontuação multi-fator.
fn extrair_features(numero: u8, stats: &Estatisticas) -> [f64; 7] {
    let ocorrencias_total = stats.ocorrencias_total_de(numero);
    // Histórico zerado cai no valor típico de um número da Lotofácil
    let total_rate = if ocorrencias_total > 0 {
        ocorrencias_total as f64 / 2300.0
    } else {
        2100.0 / 2300.0
    };

    [
        stats.ocorrencias_de(numero) as f64 / JANELA_PADRAO as f64,
        stats.atraso_de(numero) as f64,
        total_rate,
        if eh_primo(numero) { 1.0 } else { 0.0 },
        if eh_fibonacci(numero) { 1.0 } else { 0.0 },
        match Faixa::de(numero) {
            Faixa::Baixa => 0.0,
            Faixa::Media => 0.5,
            Faixa::Alta => 1.0,
        },
        if numero % 2 == 0 { 1.0 } else { 0.0 },
    ]
}

const PESOS_FEATURES: [f64; 7] = [3.5, 2.8, 2.0, 1.5, 1.5, 1.0, 0.5];

/// Soma ponderada das features achatada por uma sigmoide em 0-100.
fn pontuacao_multifator(features: &[f64; 7]) -> f64 {
    let soma: f64 = features
        .iter()
        .zip(PESOS_FEATURES.iter())
        .map(|(f, p)| f * p)
        .sum();
    100.0 / (1.0 + (-soma / 10.0).exp())
}

/// Top `quantidade` números por peso, do maior para o menor.
fn selecionar_por_peso(pesos: &[f64; 25], quantidade: usize) -> Vec<u8> {
    let mut ordem: Vec<u8> = (1..=TOTAL_NUMEROS).collect();
    // Ordenação estável: empates mantêm a ordem numérica
    ordem.sort_by(|&a, &b| {
        pesos[(b - 1) as usize]
            .partial_cmp(&pesos[(a - 1) as usize])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ordem.truncate(quantidade);
    ordem
}

/// Completa um conjunto curto com os melhores pesos balanceados ainda fora dele.
pub(crate) fn completar_com_balanceados(
    atuais: Vec<u8>,
    quantidade: usize,
    stats: &Estatisticas,
) -> Vec<u8> {
    let pesos = pesos_balanceados(stats);
    let mut resultado = atuais;
    let restantes = selecionar_por_peso(&pesos, TOTAL_NUMEROS as usize);
    for n in restantes {
        if resultado.len() >= quantidade {
            break;
        }
        if !resultado.contains(&n) {
            resultado.push(n);
        }
    }
    resultado
}

/// Pool de candidatos conforme o modo. Sempre retorna `quantidade` números
/// distintos (limitado a 25), mesmo com estatísticas degeneradas.
pub fn selecionar_candidatos(stats: &Estatisticas, modo: Modo, quantidade: usize) -> Vec<u8> {
    let quantidade = quantidade.clamp(1, TOTAL_NUMEROS as usize);

    let selecao = match modo {
        Modo::Balanceado => {
            let pesos = pesos_balanceados(stats);
            selecionar_por_peso(&pesos, quantidade)
        }
        Modo::Agressivo => {
            // frequencia já vem ordenada por ocorrências recentes decrescentes
            stats
                .frequencia
                .iter()
                .take(quantidade)
                .map(|f| f.numero)
                .collect()
        }
        Modo::Conservador => {
            let mut por_historico = stats.frequencia.clone();
            por_historico.sort_by(|a, b| b.ocorrencias_total.cmp(&a.ocorrencias_total));
            por_historico
                .iter()
                .take(quantidade)
                .map(|f| f.numero)
                .collect()
        }
        Modo::Contrarian => {
            // atrasos já vêm ordenados por atraso decrescente
            stats
                .atrasos
                .iter()
                .take(quantidade)
                .map(|a| a.numero)
                .collect()
        }
        Modo::Inteligente => {
            let mut pesos = [0.0f64; 25];
            for numero in 1..=TOTAL_NUMEROS {
                let features = extrair_features(numero, stats);
                pesos[(numero - 1) as usize] = pontuacao_multifator(&features);
            }
            selecionar_por_peso(&pesos, quantidade)
        }
    };

    if selecao.len() >= quantidade {
        selecao
    } else {
        completar_com_balanceados(selecao, quantidade, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modo::TODOS_OS_MODOS;
    use lotofacil_db::models::make_test_draws;
    use lotofacil_stats::{calcular_estatisticas, estatisticas_padrao};

    fn stats_teste() -> Estatisticas {
        calcular_estatisticas(&make_test_draws(30), 7)
    }

    #[test]
    fn test_pool_tem_tamanho_pedido_e_sem_duplicatas() {
        let stats = stats_teste();
        for modo in TODOS_OS_MODOS {
            for quantidade in [15usize, 18, 20, 25] {
                let pool = selecionar_candidatos(&stats, modo, quantidade);
                assert_eq!(pool.len(), quantidade, "modo {} qtd {}", modo, quantidade);
                let mut unicos = pool.clone();
                unicos.sort();
                unicos.dedup();
                assert_eq!(unicos.len(), quantidade, "duplicata no modo {}", modo);
                assert!(pool.iter().all(|&n| (1..=25).contains(&n)));
            }
        }
    }

    #[test]
    fn test_pool_com_estatisticas_padrao() {
        // Snapshot zerado: a seleção degrada para primos/Fibonacci/faixa
        let stats = estatisticas_padrao();
        for modo in TODOS_OS_MODOS {
            let pool = selecionar_candidatos(&stats, modo, 20);
            assert_eq!(pool.len(), 20, "modo {}", modo);
        }
    }

    #[test]
    fn test_balanceado_prefere_primos_em_snapshot_zerado() {
        let stats = estatisticas_padrao();
        let pesos = pesos_balanceados(&stats);
        // 2 é primo e Fibonacci: peso máximo sem histórico
        assert!(pesos[1] > pesos[3], "2 deveria pesar mais que 4");
        // 13 (primo + Fibonacci, faixa média) domina 4 (nada)
        assert!(pesos[12] > pesos[3]);
    }

    #[test]
    fn test_agressivo_segue_frequencia_recente() {
        let stats = stats_teste();
        let pool = selecionar_candidatos(&stats, Modo::Agressivo, 5);
        let top: Vec<u8> = stats.frequencia.iter().take(5).map(|f| f.numero).collect();
        assert_eq!(pool, top);
    }

    #[test]
    fn test_contrarian_segue_atraso() {
        let stats = stats_teste();
        let pool = selecionar_candidatos(&stats, Modo::Contrarian, 5);
        let top: Vec<u8> = stats.atrasos.iter().take(5).map(|a| a.numero).collect();
        assert_eq!(pool, top);
    }

    #[test]
    fn test_pontuacao_multifator_em_0_100() {
        let stats = stats_teste();
        for numero in 1..=25u8 {
            let score = pontuacao_multifator(&extrair_features(numero, &stats));
            assert!(
                score > 0.0 && score < 100.0,
                "sigmoide fora do intervalo para {}: {}",
                numero,
                score
            );
        }
    }

    #[test]
    fn test_curva_log_do_atraso_satura_em_25() {
        // ln(atraso+1)*10 passa de 25 a partir de atraso 12
        let atraso = 50u32;
        let bonus = (((atraso + 1) as f64).ln() * 10.0).min(25.0);
        assert!((bonus - 25.0).abs() < 1e-9);
    }
}
