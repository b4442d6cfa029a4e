use serde::{Deserialize, Serialize};

use lotofacil_db::models::{Draw, TOTAL_NUMEROS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFrequencia {
    Hot,
    Warm,
    Neutral,
    Cool,
    Cold,
}

impl std::fmt::Display for StatusFrequencia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFrequencia::Hot => write!(f, "hot"),
            StatusFrequencia::Warm => write!(f, "warm"),
            StatusFrequencia::Neutral => write!(f, "neutral"),
            StatusFrequencia::Cool => write!(f, "cool"),
            StatusFrequencia::Cold => write!(f, "cold"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequenciaNumero {
    pub numero: u8,
    /// Ocorrências na janela recente.
    pub ocorrencias: u32,
    /// Ocorrências no histórico completo.
    pub ocorrencias_total: u32,
    pub percentual: f64,
    pub percentual_total: f64,
    pub status: StatusFrequencia,
}

/// Status de temperatura em função do percentual recente.
pub fn status_frequencia(ocorrencias: u32, janela: usize) -> StatusFrequencia {
    if janela == 0 {
        return StatusFrequencia::Neutral;
    }
    let percentual = (ocorrencias as f64 / janela as f64) * 100.0;
    if percentual >= 70.0 {
        StatusFrequencia::Hot
    } else if percentual >= 50.0 {
        StatusFrequencia::Warm
    } else if percentual >= 30.0 {
        StatusFrequencia::Neutral
    } else if percentual >= 15.0 {
        StatusFrequencia::Cool
    } else {
        StatusFrequencia::Cold
    }
}

/// Frequência de cada número na janela recente e no histórico completo.
/// draws[0] = concurso mais recente. Retorna os 25 números ordenados por
/// ocorrências recentes decrescentes (empates mantêm a ordem numérica).
pub fn calcular_frequencia(draws: &[Draw], janela: usize) -> Vec<FrequenciaNumero> {
    let mut recentes = [0u32; TOTAL_NUMEROS as usize];
    let mut totais = [0u32; TOTAL_NUMEROS as usize];

    for draw in draws.iter().take(janela) {
        for &n in &draw.numeros {
            recentes[(n - 1) as usize] += 1;
        }
    }
    for draw in draws {
        for &n in &draw.numeros {
            totais[(n - 1) as usize] += 1;
        }
    }

    let mut entradas: Vec<FrequenciaNumero> = (1..=TOTAL_NUMEROS)
        .map(|numero| {
            let idx = (numero - 1) as usize;
            let percentual = if janela > 0 {
                (recentes[idx] as f64 / janela as f64) * 100.0
            } else {
                0.0
            };
            let percentual_total = if draws.is_empty() {
                0.0
            } else {
                (totais[idx] as f64 / draws.len() as f64) * 100.0
            };
            FrequenciaNumero {
                numero,
                ocorrencias: recentes[idx],
                ocorrencias_total: totais[idx],
                percentual,
                percentual_total,
                status: status_frequencia(recentes[idx], janela),
            }
        })
        .collect();

    // sort_by é estável: empates preservam a ordem numérica
    entradas.sort_by(|a, b| b.ocorrencias.cmp(&a.ocorrencias));
    entradas
}
