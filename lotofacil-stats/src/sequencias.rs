use serde::{Deserialize, Serialize};

use lotofacil_db::models::Draw;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenciaExemplo {
    pub concurso: u32,
    /// Sequências maximais de ≥3 números consecutivos encontradas no concurso.
    pub sequencias: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnaliseSequencias {
    pub total: u32,
    /// Média de sequências por concurso, com 1 casa decimal.
    pub media: f64,
    /// Até 5 concursos de exemplo com suas sequências.
    pub exemplos: Vec<SequenciaExemplo>,
}

/// Sequências maximais de ≥3 números consecutivos em um jogo.
pub fn extrair_sequencias(numeros: &[u8]) -> Vec<Vec<u8>> {
    if numeros.is_empty() {
        return Vec::new();
    }
    let mut ordenados = numeros.to_vec();
    ordenados.sort();

    let mut sequencias = Vec::new();
    let mut atual = vec![ordenados[0]];

    for &n in &ordenados[1..] {
        if n == atual[atual.len() - 1] + 1 {
            atual.push(n);
        } else {
            if atual.len() >= 3 {
                sequencias.push(atual.clone());
            }
            atual = vec![n];
        }
    }
    if atual.len() >= 3 {
        sequencias.push(atual);
    }

    sequencias
}

/// Quantidade de sequências maximais de ≥3 consecutivos em um jogo.
pub fn contar_sequencias(numeros: &[u8]) -> u32 {
    extrair_sequencias(numeros).len() as u32
}

/// Análise de sequências sobre a janela recente.
/// draws[0] = concurso mais recente.
pub fn analisar_sequencias(draws: &[Draw], janela: usize) -> AnaliseSequencias {
    let mut total = 0u32;
    let mut exemplos = Vec::new();

    for draw in draws.iter().take(janela) {
        let sequencias = extrair_sequencias(&draw.numeros);
        total += sequencias.len() as u32;
        if !sequencias.is_empty() && exemplos.len() < 5 {
            exemplos.push(SequenciaExemplo {
                concurso: draw.concurso,
                sequencias,
            });
        }
    }

    let media = if janela > 0 {
        ((total as f64 / janela as f64) * 10.0).round() / 10.0
    } else {
        0.0
    };

    AnaliseSequencias {
        total,
        media,
        exemplos,
    }
}
