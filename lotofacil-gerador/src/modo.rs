use serde::{Deserialize, Serialize};

/// Estratégias de geração. Conjunto fechado: o despacho é um `match`
/// exaustivo, sem dispatch dinâmico.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modo {
    Balanceado,
    Agressivo,
    Conservador,
    Contrarian,
    Inteligente,
}

pub const TODOS_OS_MODOS: [Modo; 5] = [
    Modo::Balanceado,
    Modo::Agressivo,
    Modo::Conservador,
    Modo::Contrarian,
    Modo::Inteligente,
];

impl Modo {
    pub fn nome(&self) -> &'static str {
        match self {
            Modo::Balanceado => "Balanceado",
            Modo::Agressivo => "Agressivo",
            Modo::Conservador => "Conservador",
            Modo::Contrarian => "Contrarian",
            Modo::Inteligente => "Multi-Fator Avançado",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Modo::Balanceado => "⚖️",
            Modo::Agressivo => "🔥",
            Modo::Conservador => "🛡️",
            Modo::Contrarian => "🔄",
            Modo::Inteligente => "🧮",
        }
    }

    pub fn descricao(&self) -> &'static str {
        match self {
            Modo::Balanceado => {
                "Equilíbrio perfeito entre números quentes, frios e padrões históricos."
            }
            Modo::Agressivo => "Focado nos números mais frequentes dos últimos sorteios.",
            Modo::Conservador => {
                "Baseado no desempenho histórico completo de todos os concursos."
            }
            Modo::Contrarian => {
                "Aposta nos números mais atrasados, esperando compensação estatística."
            }
            Modo::Inteligente => "Sistema de pontuação avançado com 7 critérios ponderados.",
        }
    }
}

impl std::fmt::Display for Modo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modo::Balanceado => write!(f, "balanceado"),
            Modo::Agressivo => write!(f, "agressivo"),
            Modo::Conservador => write!(f, "conservador"),
            Modo::Contrarian => write!(f, "contrarian"),
            Modo::Inteligente => write!(f, "inteligente"),
        }
    }
}

impl std::str::FromStr for Modo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanceado" => Ok(Modo::Balanceado),
            "agressivo" => Ok(Modo::Agressivo),
            "conservador" => Ok(Modo::Conservador),
            "contrarian" => Ok(Modo::Contrarian),
            "inteligente" => Ok(Modo::Inteligente),
            outro => Err(format!("Modo desconhecido: '{}'", outro)),
        }
    }
}
