use serde::{Deserialize, Serialize};

use lotofacil_db::models::{SOMA_IDEAL_MAX, SOMA_IDEAL_MIN};

use crate::metricas::Metricas;
use crate::modo::Modo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secao {
    pub icon: String,
    pub titulo: String,
    pub texto: String,
}

/// Explicação em linguagem natural, derivada apenas das métricas já
/// calculadas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explicacao {
    pub titulo: String,
    pub secoes: Vec<Secao>,
}

fn junta(numeros: &[u8]) -> String {
    numeros
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn gerar_explicacao(modo: Modo, metricas: &Metricas) -> Explicacao {
    let mut secoes = Vec::new();

    secoes.push(Secao {
        icon: modo.icon().to_string(),
        titulo: format!("Modo {}", modo.nome()),
        texto: modo.descricao().to_string(),
    });

    if !metricas.quentes.is_empty() {
        secoes.push(Secao {
            icon: "🔥".to_string(),
            titulo: "Números Quentes".to_string(),
            texto: format!(
                "{} números com alta frequência recente: {}. Estes aparecem com frequência nos últimos sorteios.",
                metricas.quentes.len(),
                junta(&metricas.quentes)
            ),
        });
    }

    if !metricas.atrasados.is_empty() {
        secoes.push(Secao {
            icon: "⏰".to_string(),
            titulo: "Números Atrasados".to_string(),
            texto: format!(
                "{} números com atraso significativo: {}. Estatisticamente, tendem a aparecer em breve.",
                metricas.atrasados.len(),
                junta(&metricas.atrasados)
            ),
        });
    }

    let balanceamento = if metricas.pares == 10 {
        "equilíbrio perfeito"
    } else if (7..=8).contains(&metricas.pares) {
        "dentro da faixa ideal"
    } else {
        "balanceado"
    };
    secoes.push(Secao {
        icon: "⚖️".to_string(),
        titulo: "Balanceamento Par/Ímpar".to_string(),
        texto: format!(
            "{} pares e {} ímpares - {}.",
            metricas.pares, metricas.impares, balanceamento
        ),
    });

    secoes.push(Secao {
        icon: "✨".to_string(),
        titulo: "Números Especiais".to_string(),
        texto: format!(
            "{} primos e {} Fibonacci. Ambos dentro das faixas historicamente mais frequentes.",
            metricas.primos, metricas.fibonacci
        ),
    });

    let soma_status = if metricas.soma_ok {
        "perfeitamente"
    } else {
        "próxima"
    };
    secoes.push(Secao {
        icon: "📊".to_string(),
        titulo: "Soma Total".to_string(),
        texto: format!(
            "Soma de {}, {} dentro da faixa ideal ({}-{}).",
            metricas.soma, soma_status, SOMA_IDEAL_MIN, SOMA_IDEAL_MAX
        ),
    });

    secoes.push(Secao {
        icon: "📈".to_string(),
        titulo: "Distribuição".to_string(),
        texto: format!(
            "Baixos: {} | Médios: {} | Altos: {}",
            metricas.distribuicao.baixos, metricas.distribuicao.medios, metricas.distribuicao.altos
        ),
    });

    secoes.push(Secao {
        icon: "🎖️".to_string(),
        titulo: "Avaliação Final".to_string(),
        texto: format!(
            "Qualidade: {} ({}/100). Jogo otimizado com base em múltiplos fatores estatísticos.",
            metricas.qualidade.nivel, metricas.qualidade.score
        ),
    });

    Explicacao {
        titulo: "🎯 Análise Completa do Jogo".to_string(),
        secoes,
    }
}
