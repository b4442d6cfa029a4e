pub mod atraso;
pub mod ciclos;
pub mod combinacoes;
pub mod distribuicao;
pub mod frequencia;
pub mod sequencias;

use serde::{Deserialize, Serialize};

use lotofacil_db::models::Draw;

use crate::atraso::{calcular_atrasos, AtrasoNumero};
use crate::ciclos::{detectar_ciclos, SinalCiclo};
use crate::combinacoes::{analisar_duplas, analisar_quartetos, analisar_quinas, CombinacaoStat};
use crate::distribuicao::{analisar_distribuicao, analisar_paridade, Distribuicao, Paridade};
use crate::frequencia::{calcular_frequencia, FrequenciaNumero};
use crate::sequencias::{analisar_sequencias, AnaliseSequencias};

/// Fotografia estatística do histórico: janela recente + histórico completo.
/// Valor imutável, recalculado a cada pedido; quem chama decide cachear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estatisticas {
    pub frequencia: Vec<FrequenciaNumero>,
    pub atrasos: Vec<AtrasoNumero>,
    pub duplas: Vec<CombinacaoStat>,
    pub quartetos: Vec<CombinacaoStat>,
    pub quinas: Vec<CombinacaoStat>,
    pub distribuicao: Distribuicao,
    pub paridade: Paridade,
    pub sequencias: AnaliseSequencias,
    pub ciclos: SinalCiclo,
    pub total_concursos: usize,
    pub ultimo_concurso: u32,
    pub primeiro_concurso_analisado: u32,
}

impl Estatisticas {
    /// Ocorrências recentes do número (0 se fora de 1-25).
    pub fn ocorrencias_de(&self, numero: u8) -> u32 {
        self.frequencia
            .iter()
            .find(|f| f.numero == numero)
            .map(|f| f.ocorrencias)
            .unwrap_or(0)
    }

    pub fn ocorrencias_total_de(&self, numero: u8) -> u32 {
        self.frequencia
            .iter()
            .find(|f| f.numero == numero)
            .map(|f| f.ocorrencias_total)
            .unwrap_or(0)
    }

    pub fn atraso_de(&self, numero: u8) -> u32 {
        self.atrasos
            .iter()
            .find(|a| a.numero == numero)
            .map(|a| a.atraso)
            .unwrap_or(0)
    }
}

/// Snapshot padrão para histórico vazio: 25 números zerados, listas de
/// combinações vazias, ciclo novo. Nunca contém NaN ou infinito.
pub fn estatisticas_padrao() -> Estatisticas {
    Estatisticas {
        frequencia: calcular_frequencia(&[], 0),
        atrasos: calcular_atrasos(&[]),
        duplas: Vec::new(),
        quartetos: Vec::new(),
        quinas: Vec::new(),
        distribuicao: Distribuicao::default(),
        paridade: Paridade::default(),
        sequencias: AnaliseSequencias::default(),
        ciclos: SinalCiclo::default(),
        total_concursos: 0,
        ultimo_concurso: 0,
        primeiro_concurso_analisado: 0,
    }
}

/// Calcula todas as estatísticas sobre o histórico.
/// draws[0] = concurso mais recente; janela = quantos concursos recentes
/// alimentam frequência, combinações, distribuição e sequências. O atraso e
/// o histórico total usam sempre a sequência completa.
pub fn calcular_estatisticas(draws: &[Draw], janela: usize) -> Estatisticas {
    if draws.is_empty() {
        return estatisticas_padrao();
    }
    let janela = janela.max(1);

    let primeiro_analisado = draws[janela.min(draws.len()) - 1].concurso;

    Estatisticas {
        frequencia: calcular_frequencia(draws, janela),
        atrasos: calcular_atrasos(draws),
        duplas: analisar_duplas(draws, janela),
        quartetos: analisar_quartetos(draws, janela),
        quinas: analisar_quinas(draws, janela),
        distribuicao: analisar_distribuicao(draws, janela),
        paridade: analisar_paridade(draws, janela),
        sequencias: analisar_sequencias(draws, janela),
        ciclos: detectar_ciclos(draws),
        total_concursos: draws.len(),
        ultimo_concurso: draws[0].concurso,
        primeiro_concurso_analisado: primeiro_analisado,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atraso::StatusAtraso;
    use crate::frequencia::StatusFrequencia;
    use lotofacil_db::models::make_test_draws;

    #[test]
    fn test_snapshot_padrao_bem_formado() {
        let stats = estatisticas_padrao();
        assert_eq!(stats.frequencia.len(), 25);
        assert_eq!(stats.atrasos.len(), 25);
        for f in &stats.frequencia {
            assert_eq!(f.ocorrencias, 0);
            assert_eq!(f.status, StatusFrequencia::Neutral);
        }
        for a in &stats.atrasos {
            assert_eq!(a.atraso, 0);
            assert_eq!(a.status, StatusAtraso::Recente);
        }
        assert!(stats.quinas.is_empty());
        assert!(stats.ciclos.is_novo);
        assert_eq!(stats.total_concursos, 0);
    }

    #[test]
    fn test_historico_vazio_usa_padrao() {
        let stats = calcular_estatisticas(&[], 7);
        assert_eq!(stats.frequencia.len(), 25);
        assert_eq!(stats.ultimo_concurso, 0);
    }

    #[test]
    fn test_cenario_concurso_unico() {
        // Histórico de 1 concurso com os números 1-15, janela 7
        let mut draws = make_test_draws(1);
        draws[0].numeros = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        let stats = calcular_estatisticas(&draws, 7);

        for n in 1..=25u8 {
            let esperado = if n <= 15 { 1 } else { 0 };
            assert_eq!(stats.ocorrencias_de(n), esperado, "frequência de {}", n);

            let atraso_esperado = if n <= 15 { 0 } else { 1 };
            assert_eq!(stats.atraso_de(n), atraso_esperado, "atraso de {}", n);
        }
        assert!(stats.ciclos.is_novo, "1 concurso não fecha par de comparação");
    }

    #[test]
    fn test_janela_maior_que_historico() {
        let draws = make_test_draws(3);
        let stats = calcular_estatisticas(&draws, 50);
        let soma: u32 = stats.frequencia.iter().map(|f| f.ocorrencias).sum();
        // Só 3 concursos disponíveis na janela
        assert_eq!(soma, 45);
        assert_eq!(stats.primeiro_concurso_analisado, draws[2].concurso);
    }

    #[test]
    fn test_janela_zero_tratada_como_um() {
        let draws = make_test_draws(5);
        let stats = calcular_estatisticas(&draws, 0);
        let soma: u32 = stats.frequencia.iter().map(|f| f.ocorrencias).sum();
        assert_eq!(soma, 15);
    }

    #[test]
    fn test_metadados_do_intervalo() {
        let draws = make_test_draws(10);
        let stats = calcular_estatisticas(&draws, 7);
        assert_eq!(stats.total_concursos, 10);
        assert_eq!(stats.ultimo_concurso, 10);
        assert_eq!(stats.primeiro_concurso_analisado, 4);
    }

    #[test]
    fn test_lookup_fora_do_volante() {
        let draws = make_test_draws(5);
        let stats = calcular_estatisticas(&draws, 5);
        assert_eq!(stats.ocorrencias_de(0), 0);
        assert_eq!(stats.ocorrencias_de(26), 0);
        assert_eq!(stats.atraso_de(99), 0);
    }
}
