use rand::rngs::StdRng;
use rand::Rng;

use lotofacil_db::models::TOTAL_NUMEROS;

use crate::avaliacao::avaliar_jogo;

const MAX_ITERACOES: usize = 200;
const SCORE_EXCELENTE: f64 = 92.0;
const LIMITE_SEM_MELHORIA: usize = 40;

/// Busca local gulosa: troca 1-3 números por sorteio e só aceita candidato
/// com score estritamente maior. Para cedo com score >= 92 ou após 40
/// iterações sem melhoria. Sempre retorna um jogo válido de 15 números.
pub fn otimizar_jogo(inicial: [u8; 15], rng: &mut StdRng) -> ([u8; 15], f64) {
    let mut melhor_jogo = inicial;
    melhor_jogo.sort();
    let mut melhor_score = avaliar_jogo(&melhor_jogo);
    let mut sem_melhoria = 0usize;

    for _ in 0..MAX_ITERACOES {
        let candidato = gerar_variacao(&melhor_jogo, rng);
        let score = avaliar_jogo(&candidato);

        if score > melhor_score {
            melhor_jogo = candidato;
            melhor_score = score;
            sem_melhoria = 0;
        } else {
            sem_melhoria += 1;
        }

        if melhor_score >= SCORE_EXCELENTE {
            break;
        }
        if sem_melhoria >= LIMITE_SEM_MELHORIA {
            break;
        }
    }

    (melhor_jogo, melhor_score)
}

/// Variação por mutação: remove 1-3 números e repõe com números fora do
/// jogo, uniformes em 1-25. Retorna sempre ordenado.
fn gerar_variacao(jogo: &[u8; 15], rng: &mut StdRng) -> [u8; 15] {
    let mut numeros: Vec<u8> = jogo.to_vec();
    let trocas = rng.random_range(1..=3);

    for _ in 0..trocas {
        let remover = rng.random_range(0..numeros.len());
        numeros.swap_remove(remover);

        loop {
            let novo = rng.random_range(1..=TOTAL_NUMEROS);
            if !numeros.contains(&novo) {
                numeros.push(novo);
                break;
            }
        }
    }

    numeros.sort();
    let mut variacao = [0u8; 15];
    variacao.copy_from_slice(&numeros);
    variacao
}
