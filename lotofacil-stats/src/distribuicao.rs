use serde::{Deserialize, Serialize};

use lotofacil_db::models::{Draw, Faixa};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FaixaResumo {
    pub total: u32,
    /// Média por concurso, com 1 casa decimal.
    pub media: f64,
    /// Percentual sobre todos os números sorteados na janela, com 1 casa decimal.
    pub percentual: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distribuicao {
    pub baixos: FaixaResumo,
    pub medios: FaixaResumo,
    pub altos: FaixaResumo,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Paridade {
    pub pares: FaixaResumo,
    pub impares: FaixaResumo,
}

fn uma_casa(valor: f64) -> f64 {
    (valor * 10.0).round() / 10.0
}

fn resumo(total: u32, janela: usize, total_geral: u32) -> FaixaResumo {
    let media = if janela > 0 {
        uma_casa(total as f64 / janela as f64)
    } else {
        0.0
    };
    let percentual = if total_geral > 0 {
        uma_casa((total as f64 / total_geral as f64) * 100.0)
    } else {
        0.0
    };
    FaixaResumo {
        total,
        media,
        percentual,
    }
}

/// Distribuição por faixa (baixos 1-8, médios 9-17, altos 18-25) na janela.
pub fn analisar_distribuicao(draws: &[Draw], janela: usize) -> Distribuicao {
    let mut baixos = 0u32;
    let mut medios = 0u32;
    let mut altos = 0u32;

    for draw in draws.iter().take(janela) {
        for &n in &draw.numeros {
            match Faixa::de(n) {
                Faixa::Baixa => baixos += 1,
                Faixa::Media => medios += 1,
                Faixa::Alta => altos += 1,
            }
        }
    }

    let total = baixos + medios + altos;
    Distribuicao {
        baixos: resumo(baixos, janela, total),
        medios: resumo(medios, janela, total),
        altos: resumo(altos, janela, total),
    }
}

/// Distribuição par/ímpar na janela.
pub fn analisar_paridade(draws: &[Draw], janela: usize) -> Paridade {
    let mut pares = 0u32;
    let mut impares = 0u32;

    for draw in draws.iter().take(janela) {
        for &n in &draw.numeros {
            if n % 2 == 0 {
                pares += 1;
            } else {
                impares += 1;
            }
        }
    }

    let total = pares + impares;
    Paridade {
        pares: resumo(pares, janela, total),
        impares: resumo(impares, janela, total),
    }
}
