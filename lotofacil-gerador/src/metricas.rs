use serde::{Deserialize, Serialize};

use lotofacil_db::models::{eh_fibonacci, eh_primo, SOMA_IDEAL_MAX, SOMA_IDEAL_MIN};
use lotofacil_stats::sequencias::contar_sequencias;
use lotofacil_stats::Estatisticas;

use crate::avaliacao::{avaliar_jogo, contar_por_faixa};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nivel {
    Regular,
    Boa,
    MuitoBoa,
    Excelente,
}

impl std::fmt::Display for Nivel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nivel::Regular => write!(f, "Regular"),
            Nivel::Boa => write!(f, "Boa"),
            Nivel::MuitoBoa => write!(f, "Muito Boa"),
            Nivel::Excelente => write!(f, "Excelente"),
        }
    }
}

/// Nível a partir do score bruto (antes do arredondamento).
pub fn nivel_qualidade(score: f64) -> Nivel {
    if score >= 80.0 {
        Nivel::Excelente
    } else if score >= 65.0 {
        Nivel::MuitoBoa
    } else if score >= 50.0 {
        Nivel::Boa
    } else {
        Nivel::Regular
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Qualidade {
    /// Score arredondado para inteiro, 0-100.
    pub score: u32,
    pub nivel: Nivel,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FaixasJogo {
    pub baixos: usize,
    pub medios: usize,
    pub altos: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metricas {
    pub pares: usize,
    pub impares: usize,
    pub primos: usize,
    pub fibonacci: usize,
    pub soma: u32,
    pub soma_ok: bool,
    pub sequencias: u32,
    pub distribuicao: FaixasJogo,
    /// Números do jogo com atraso >= 2 no histórico.
    pub atrasados: Vec<u8>,
    /// Números do jogo com 5+ ocorrências na janela recente.
    pub quentes: Vec<u8>,
    pub qualidade: Qualidade,
}

pub fn calcular_metricas(numeros: &[u8], stats: &Estatisticas) -> Metricas {
    let pares = numeros.iter().filter(|&&n| n % 2 == 0).count();
    let impares = numeros.len() - pares;
    let primos = numeros.iter().filter(|&&n| eh_primo(n)).count();
    let fibonacci = numeros.iter().filter(|&&n| eh_fibonacci(n)).count();
    let soma: u32 = numeros.iter().map(|&n| n as u32).sum();
    let (baixos, medios, altos) = contar_por_faixa(numeros);

    let atrasados: Vec<u8> = numeros
        .iter()
        .copied()
        .filter(|&n| stats.atraso_de(n) >= 2)
        .collect();

    let quentes: Vec<u8> = numeros
        .iter()
        .copied()
        .filter(|&n| stats.ocorrencias_de(n) >= 5)
        .collect();

    let score = avaliar_jogo(numeros);

    Metricas {
        pares,
        impares,
        primos,
        fibonacci,
        soma,
        soma_ok: (SOMA_IDEAL_MIN..=SOMA_IDEAL_MAX).contains(&soma),
        sequencias: contar_sequencias(numeros),
        distribuicao: FaixasJogo {
            baixos,
            medios,
            altos,
        },
        atrasados,
        quentes,
        qualidade: Qualidade {
            score: score.round() as u32,
            nivel: nivel_qualidade(score),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotofacil_db::models::make_test_draws;
    use lotofacil_stats::{calcular_estatisticas, estatisticas_padrao};

    #[test]
    fn test_nivel_qualidade_limiares() {
        assert_eq!(nivel_qualidade(80.0), Nivel::Excelente);
        assert_eq!(nivel_qualidade(79.9), Nivel::MuitoBoa);
        assert_eq!(nivel_qualidade(65.0), Nivel::MuitoBoa);
        assert_eq!(nivel_qualidade(64.9), Nivel::Boa);
        assert_eq!(nivel_qualidade(50.0), Nivel::Boa);
        assert_eq!(nivel_qualidade(49.0), Nivel::Regular);
        assert_eq!(nivel_qualidade(0.0), Nivel::Regular);
        assert_eq!(nivel_qualidade(100.0), Nivel::Excelente);
    }

    #[test]
    fn test_nivel_display() {
        assert_eq!(Nivel::MuitoBoa.to_string(), "Muito Boa");
        assert_eq!(Nivel::Excelente.to_string(), "Excelente");
    }

    #[test]
    fn test_metricas_basicas() {
        let stats = estatisticas_padrao();
        let numeros: Vec<u8> = (1..=15).collect();
        let metricas = calcular_metricas(&numeros, &stats);

        assert_eq!(metricas.pares, 7);
        assert_eq!(metricas.impares, 8);
        // Primos em 1-15: 2, 3, 5, 7, 11, 13
        assert_eq!(metricas.primos, 6);
        // Fibonacci em 1-15: 1, 2, 3, 5, 8, 13
        assert_eq!(metricas.fibonacci, 6);
        assert_eq!(metricas.soma, 120);
        assert!(!metricas.soma_ok);
        assert_eq!(metricas.sequencias, 1);
        assert_eq!(metricas.distribuicao.baixos, 8);
        assert_eq!(metricas.distribuicao.medios, 7);
        assert_eq!(metricas.distribuicao.altos, 0);
    }

    #[test]
    fn test_soma_ok_na_faixa() {
        let stats = estatisticas_padrao();
        let ideal = [4, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 20, 22]; // soma 195
        assert!(calcular_metricas(&ideal, &stats).soma_ok);
        let acima = [1, 2, 3, 4, 5, 13, 17, 18, 19, 20, 21, 22, 23, 24, 25]; // soma 217
        assert!(!calcular_metricas(&acima, &stats).soma_ok);
    }

    #[test]
    fn test_atrasados_e_quentes_com_historico() {
        // Histórico em que 1-15 saem sempre e 16-25 nunca
        let mut draws = make_test_draws(8);
        for draw in &mut draws {
            draw.numeros = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        }
        let stats = calcular_estatisticas(&draws, 7);

        let jogo = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 16, 17, 18, 19, 20];
        let metricas = calcular_metricas(&jogo, &stats);

        // 16-20 têm atraso 8; 1-10 saíram 7 vezes na janela
        assert_eq!(metricas.atrasados, vec![16, 17, 18, 19, 20]);
        assert_eq!(metricas.quentes, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_qualidade_reproduzivel() {
        let stats = estatisticas_padrao();
        let jogo = [2, 4, 6, 8, 9, 11, 13, 14, 15, 17, 19, 20, 22, 24, 25];
        let metricas = calcular_metricas(&jogo, &stats);
        let score = avaliar_jogo(&jogo);
        assert_eq!(metricas.qualidade.score, score.round() as u32);
        assert_eq!(metricas.qualidade.nivel, nivel_qualidade(score));
    }
}
