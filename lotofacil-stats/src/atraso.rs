use serde::{Deserialize, Serialize};

use lotofacil_db::models::{Draw, TOTAL_NUMEROS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAtraso {
    Recente,
    Normal,
    Atrasado,
    MuitoAtrasado,
}

impl std::fmt::Display for StatusAtraso {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusAtraso::Recente => write!(f, "recente"),
            StatusAtraso::Normal => write!(f, "normal"),
            StatusAtraso::Atrasado => write!(f, "atrasado"),
            StatusAtraso::MuitoAtrasado => write!(f, "muito_atrasado"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrasoNumero {
    pub numero: u8,
    /// Concursos consecutivos sem o número, contados a partir do mais recente.
    pub atraso: u32,
    pub status: StatusAtraso,
}

pub fn status_atraso(atraso: u32) -> StatusAtraso {
    if atraso >= 5 {
        StatusAtraso::MuitoAtrasado
    } else if atraso >= 3 {
        StatusAtraso::Atrasado
    } else if atraso >= 1 {
        StatusAtraso::Normal
    } else {
        StatusAtraso::Recente
    }
}

/// Atraso de cada número sobre o histórico completo (não janelado).
/// Percorre os concursos do mais antigo para o mais recente: o atraso zera
/// no concurso em que o número sai e soma 1 a cada concurso seguinte sem ele.
/// draws[0] = concurso mais recente. Retorna ordenado por atraso decrescente.
pub fn calcular_atrasos(draws: &[Draw]) -> Vec<AtrasoNumero> {
    let mut atrasos = [0u32; TOTAL_NUMEROS as usize];

    for draw in draws.iter().rev() {
        for idx in 0..TOTAL_NUMEROS as usize {
            let numero = (idx + 1) as u8;
            if draw.numeros.contains(&numero) {
                atrasos[idx] = 0;
            } else {
                atrasos[idx] += 1;
            }
        }
    }

    let mut entradas: Vec<AtrasoNumero> = (1..=TOTAL_NUMEROS)
        .map(|numero| {
            let atraso = atrasos[(numero - 1) as usize];
            AtrasoNumero {
                numero,
                atraso,
                status: status_atraso(atraso),
            }
        })
        .collect();

    entradas.sort_by(|a, b| b.atraso.cmp(&a.atraso));
    entradas
}
