use lotofacil_db::models::{
    eh_fibonacci, eh_primo, Faixa, COLUNAS_VOLANTE, LINHAS_VOLANTE, SOMA_IDEAL_MAX,
    SOMA_IDEAL_MIN,
};
use lotofacil_stats::sequencias::contar_sequencias;

/// Maior quantidade de números do jogo em uma mesma linha do volante.
pub fn max_por_linha(numeros: &[u8]) -> usize {
    LINHAS_VOLANTE
        .iter()
        .map(|linha| numeros.iter().filter(|n| linha.contains(n)).count())
        .max()
        .unwrap_or(0)
}

/// Maior quantidade de números do jogo em uma mesma coluna do volante.
pub fn max_por_coluna(numeros: &[u8]) -> usize {
    COLUNAS_VOLANTE
        .iter()
        .map(|coluna| numeros.iter().filter(|n| coluna.contains(n)).count())
        .max()
        .unwrap_or(0)
}

pub fn contar_por_faixa(numeros: &[u8]) -> (usize, usize, usize) {
    let baixos = numeros.iter().filter(|&&n| Faixa::de(n) == Faixa::Baixa).count();
    let medios = numeros.iter().filter(|&&n| Faixa::de(n) == Faixa::Media).count();
    let altos = numeros.iter().filter(|&&n| Faixa::de(n) == Faixa::Alta).count();
    (baixos, medios, altos)
}

/// Pontuação heurística de um jogo de 15 números, em 0-100.
/// Parte de 100 e aplica 8 critérios aditivos; independe da ordem dos
/// números. Não é previsão: mede aderência a padrões estruturais do
/// histórico da Lotofácil.
pub fn avaliar_jogo(numeros: &[u8]) -> f64 {
    let mut score = 100.0f64;

    // 1. Equilíbrio par/ímpar
    let pares = numeros.iter().filter(|&&n| n % 2 == 0).count() as f64;
    score -= (pares - 10.0).abs() * 4.0;

    // 2. Soma na faixa ideal
    let soma: u32 = numeros.iter().map(|&n| n as u32).sum();
    if soma < SOMA_IDEAL_MIN {
        score -= (SOMA_IDEAL_MIN - soma) as f64 * 0.3;
    } else if soma > SOMA_IDEAL_MAX {
        score -= (soma - SOMA_IDEAL_MAX) as f64 * 0.3;
    } else {
        score += 15.0;
    }

    // 3. Primos
    let primos = numeros.iter().filter(|&&n| eh_primo(n)).count() as f64;
    score -= (primos - 5.5).abs() * 3.0;

    // 4. Fibonacci
    let fibonacci = numeros.iter().filter(|&&n| eh_fibonacci(n)).count() as f64;
    score -= (fibonacci - 4.5).abs() * 3.0;

    // 5. Espalhamento entre faixas (desvio padrão em torno de 15/3)
    let (baixos, medios, altos) = contar_por_faixa(numeros);
    let desvio = (((baixos as f64 - 6.67).powi(2)
        + (medios as f64 - 6.67).powi(2)
        + (altos as f64 - 6.67).powi(2))
        / 3.0)
        .sqrt();
    score -= desvio * 5.0;

    // 6. Sequências de consecutivos
    let sequencias = contar_sequencias(numeros) as f64;
    score -= (sequencias - 4.5).abs() * 2.0;

    // 7. Concentração por linha do volante
    let max_linha = max_por_linha(numeros);
    if max_linha > 9 {
        score -= (max_linha - 9) as f64 * 5.0;
    } else if max_linha >= 3 {
        score += 5.0;
    }

    // 8. Concentração por coluna do volante
    let max_coluna = max_por_coluna(numeros);
    if max_coluna > 7 {
        score -= (max_coluna - 7) as f64 * 5.0;
    } else if max_coluna >= 3 {
        score += 5.0;
    }

    score.clamp(0.0, 100.0)
}
