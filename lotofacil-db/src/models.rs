use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Quantidade de números no volante (1-25).
pub const TOTAL_NUMEROS: u8 = 25;

/// Quantidade de números sorteados por concurso.
pub const NUMEROS_POR_CONCURSO: usize = 15;

/// Janela padrão de análise recente (últimos N concursos).
pub const JANELA_PADRAO: usize = 7;

pub const NUMEROS_PRIMOS: [u8; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 23];

pub const NUMEROS_FIBONACCI: [u8; 7] = [1, 2, 3, 5, 8, 13, 21];

/// Linhas do volante 5x5.
pub const LINHAS_VOLANTE: [[u8; 5]; 5] = [
    [1, 2, 3, 4, 5],
    [6, 7, 8, 9, 10],
    [11, 12, 13, 14, 15],
    [16, 17, 18, 19, 20],
    [21, 22, 23, 24, 25],
];

/// Colunas do volante 5x5.
pub const COLUNAS_VOLANTE: [[u8; 5]; 5] = [
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    [5, 10, 15, 20, 25],
];

/// Faixa de soma considerada ideal para um jogo de 15 números.
pub const SOMA_IDEAL_MIN: u32 = 180;
pub const SOMA_IDEAL_MAX: u32 = 210;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faixa {
    Baixa,
    Media,
    Alta,
}

impl Faixa {
    pub fn de(numero: u8) -> Faixa {
        if numero <= 8 {
            Faixa::Baixa
        } else if numero <= 17 {
            Faixa::Media
        } else {
            Faixa::Alta
        }
    }

    pub fn limites(&self) -> (u8, u8) {
        match self {
            Faixa::Baixa => (1, 8),
            Faixa::Media => (9, 17),
            Faixa::Alta => (18, 25),
        }
    }
}

impl std::fmt::Display for Faixa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faixa::Baixa => write!(f, "Baixos"),
            Faixa::Media => write!(f, "Médios"),
            Faixa::Alta => write!(f, "Altos"),
        }
    }
}

pub fn eh_primo(numero: u8) -> bool {
    NUMEROS_PRIMOS.contains(&numero)
}

pub fn eh_fibonacci(numero: u8) -> bool {
    NUMEROS_FIBONACCI.contains(&numero)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Premiacao {
    pub acertos: u8,
    pub ganhadores: u32,
    pub premio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draw {
    pub concurso: u32,
    pub data: String,
    pub numeros: [u8; 15],
    #[serde(default)]
    pub premiacoes: Vec<Premiacao>,
    #[serde(default)]
    pub acumulado: bool,
}

pub fn validate_jogo(numeros: &[u8]) -> Result<()> {
    if numeros.len() != NUMEROS_POR_CONCURSO {
        bail!(
            "Jogo deve ter {} números, recebeu {}",
            NUMEROS_POR_CONCURSO,
            numeros.len()
        );
    }
    for &n in numeros {
        if n < 1 || n > TOTAL_NUMEROS {
            bail!("Número {} fora do volante (1-25)", n);
        }
    }
    for i in 0..numeros.len() {
        for j in (i + 1)..numeros.len() {
            if numeros[i] == numeros[j] {
                bail!("Número em duplicata: {}", numeros[i]);
            }
        }
    }
    Ok(())
}

pub fn validate_draw(draw: &Draw) -> Result<()> {
    if draw.concurso == 0 {
        bail!("Número de concurso inválido: 0");
    }
    validate_jogo(&draw.numeros)
}

/// Concursos sintéticos para testes, do mais recente para o mais antigo.
/// Cada concurso cobre um bloco de 15 números consecutivos (módulo 25).
pub fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let mut numeros = [0u8; 15];
            for (j, slot) in numeros.iter_mut().enumerate() {
                *slot = (((i + j) % 25) + 1) as u8;
            }
            numeros.sort();
            Draw {
                concurso: (n - i) as u32,
                data: format!("2024-01-{:02}", (i % 28) + 1),
                numeros,
                premiacoes: Vec::new(),
                acumulado: i % 3 == 0,
            }
        })
        .collect()
}
