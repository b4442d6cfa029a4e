use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lotofacil_db::models::Draw;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinacaoStat {
    /// Números da combinação em ordem crescente.
    pub numeros: Vec<u8>,
    pub ocorrencias: u32,
    pub percentual: f64,
}

/// Enumeração exata de todos os k-subconjuntos do concurso, em ordem
/// crescente. Força bruta simples: C(15,5) = 3003 por concurso.
fn enumerar(
    numeros: &[u8],
    k: usize,
    inicio: usize,
    atual: &mut Vec<u8>,
    contagens: &mut HashMap<Vec<u8>, u32>,
) {
    if atual.len() == k {
        *contagens.entry(atual.clone()).or_insert(0) += 1;
        return;
    }
    let restantes = k - atual.len();
    for i in inicio..=(numeros.len() - restantes) {
        atual.push(numeros[i]);
        enumerar(numeros, k, i + 1, atual, contagens);
        atual.pop();
    }
}

/// Combinações de k números mais frequentes na janela recente.
/// draws[0] = concurso mais recente. Empates são desfeitos pela ordem
/// crescente da tupla, para manter o resultado determinístico.
pub fn combinacoes_mais_frequentes(
    draws: &[Draw],
    janela: usize,
    k: usize,
    top: usize,
) -> Vec<CombinacaoStat> {
    let mut contagens: HashMap<Vec<u8>, u32> = HashMap::new();

    for draw in draws.iter().take(janela) {
        let mut numeros = draw.numeros;
        numeros.sort();
        let mut atual = Vec::with_capacity(k);
        enumerar(&numeros, k, 0, &mut atual, &mut contagens);
    }

    let mut stats: Vec<CombinacaoStat> = contagens
        .into_iter()
        .map(|(numeros, ocorrencias)| {
            let percentual = if janela > 0 {
                (ocorrencias as f64 / janela as f64) * 100.0
            } else {
                0.0
            };
            CombinacaoStat {
                numeros,
                ocorrencias,
                percentual,
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.ocorrencias
            .cmp(&a.ocorrencias)
            .then_with(|| a.numeros.cmp(&b.numeros))
    });
    stats.truncate(top);
    stats
}

/// Duplas mais frequentes (top 30), mantidas como utilitário.
pub fn analisar_duplas(draws: &[Draw], janela: usize) -> Vec<CombinacaoStat> {
    combinacoes_mais_frequentes(draws, janela, 2, 30)
}

/// Quartetos mais frequentes (top 20).
pub fn analisar_quartetos(draws: &[Draw], janela: usize) -> Vec<CombinacaoStat> {
    combinacoes_mais_frequentes(draws, janela, 4, 20)
}

/// Quinas mais frequentes (top 20).
pub fn analisar_quinas(draws: &[Draw], janela: usize) -> Vec<CombinacaoStat> {
    combinacoes_mais_frequentes(draws, janela, 5, 20)
}
