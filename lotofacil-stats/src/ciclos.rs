use serde::{Deserialize, Serialize};

use lotofacil_db::models::Draw;

/// Heurística simples de ciclo: compara os dois concursos mais recentes.
/// Menos de 8 repetições entre eles indica a abertura de um ciclo novo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinalCiclo {
    pub ciclo_atual: u32,
    /// Números compartilhados entre os dois concursos mais recentes.
    pub repeticoes: u8,
    /// Percentual de repetição sobre os 15 números, com 1 casa decimal.
    pub percentual_repeticao: f64,
    pub is_novo: bool,
}

impl Default for SinalCiclo {
    fn default() -> Self {
        SinalCiclo {
            ciclo_atual: 1,
            repeticoes: 0,
            percentual_repeticao: 0.0,
            is_novo: true,
        }
    }
}

/// draws[0] = concurso mais recente. Com menos de 2 concursos não há par
/// para comparar: ciclo 1, novo.
pub fn detectar_ciclos(draws: &[Draw]) -> SinalCiclo {
    if draws.len() < 2 {
        return SinalCiclo::default();
    }

    let ultimo = &draws[0];
    let penultimo = &draws[1];

    let repeticoes = ultimo
        .numeros
        .iter()
        .filter(|n| penultimo.numeros.contains(n))
        .count() as u8;

    let percentual = ((repeticoes as f64 / 15.0) * 1000.0).round() / 10.0;

    SinalCiclo {
        ciclo_atual: draws.len() as u32,
        repeticoes,
        percentual_repeticao: percentual,
        is_novo: repeticoes < 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotofacil_db::models::make_test_draws;

    #[test]
    fn test_historico_curto() {
        let sinal = detectar_ciclos(&[]);
        assert_eq!(sinal.ciclo_atual, 1);
        assert!(sinal.is_novo);

        let draws = make_test_draws(1);
        let sinal = detectar_ciclos(&draws);
        assert_eq!(sinal.ciclo_atual, 1);
        assert!(sinal.is_novo);
    }

    #[test]
    fn test_concursos_identicos() {
        let mut draws = make_test_draws(2);
        draws[1].numeros = draws[0].numeros;
        let sinal = detectar_ciclos(&draws);
        assert_eq!(sinal.repeticoes, 15);
        assert!((sinal.percentual_repeticao - 100.0).abs() < 1e-9);
        assert!(!sinal.is_novo);
    }

    #[test]
    fn test_concursos_disjuntos_impossivel_so_em_teoria() {
        // 15 + 15 > 25 força sobreposição em concursos reais, mas a função
        // aceita qualquer par: com 7 repetições o ciclo é novo
        let mut draws = make_test_draws(2);
        draws[0].numeros = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        draws[1].numeros = [9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23];
        let sinal = detectar_ciclos(&draws);
        assert_eq!(sinal.repeticoes, 7);
        assert!(sinal.is_novo);
    }

    #[test]
    fn test_limiar_de_oito() {
        let mut draws = make_test_draws(2);
        draws[0].numeros = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        draws[1].numeros = [8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22];
        let sinal = detectar_ciclos(&draws);
        assert_eq!(sinal.repeticoes, 8);
        assert!(!sinal.is_novo, "8 repetições não abre ciclo novo");
    }

    #[test]
    fn test_ciclo_atual_acompanha_historico() {
        let draws = make_test_draws(12);
        let sinal = detectar_ciclos(&draws);
        assert_eq!(sinal.ciclo_atual, 12);
    }
}
