use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use lotofacil_db::db::JogoSalvo;
use lotofacil_db::models::Draw;
use lotofacil_gerador::Jogo;
use lotofacil_stats::Estatisticas;

use crate::import::ImportResult;

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Nenhum concurso para exibir.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Concurso", "Data", "Números", "Acumulado"]);

    for draw in draws {
        let numeros = draw
            .numeros
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            draw.concurso.to_string(),
            draw.data.clone(),
            numeros,
            if draw.acumulado { "SIM" } else { "—" }.to_string(),
        ]);
    }

    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Importação finalizada:");
    println!("  Linhas lidas       : {}", result.total_records);
    println!("  Inseridos          : {}", result.inserted);
    println!("  Duplicados ignorados: {}", result.skipped);
    if result.errors > 0 {
        println!("  Erros              : {}", result.errors);
    }
}

pub fn display_estatisticas(stats: &Estatisticas, janela: usize) {
    println!(
        "\n📊 Estatísticas: janela de {} concursos, histórico de {} (concursos {}-{})\n",
        janela, stats.total_concursos, stats.primeiro_concurso_analisado, stats.ultimo_concurso
    );

    println!("── Frequência ──");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Número", "Recentes", "%", "Total", "% total", "Status"]);
    for f in &stats.frequencia {
        table.add_row(vec![
            format!("{:2}", f.numero),
            f.ocorrencias.to_string(),
            format!("{:.1}", f.percentual),
            f.ocorrencias_total.to_string(),
            format!("{:.1}", f.percentual_total),
            f.status.to_string(),
        ]);
    }
    println!("{table}");

    println!("\n── Atrasos ──");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Número", "Atraso", "Status"]);
    for a in stats.atrasos.iter().take(10) {
        table.add_row(vec![
            format!("{:2}", a.numero),
            a.atraso.to_string(),
            a.status.to_string(),
        ]);
    }
    println!("{table}");

    println!("\n── Distribuição por faixa ──");
    let d = &stats.distribuicao;
    println!(
        "  Baixos (1-8)  : {} ({}% | média {})",
        d.baixos.total, d.baixos.percentual, d.baixos.media
    );
    println!(
        "  Médios (9-17) : {} ({}% | média {})",
        d.medios.total, d.medios.percentual, d.medios.media
    );
    println!(
        "  Altos (18-25) : {} ({}% | média {})",
        d.altos.total, d.altos.percentual, d.altos.media
    );

    let p = &stats.paridade;
    println!(
        "  Pares/Ímpares : {} / {} ({}% / {}%)",
        p.pares.total, p.impares.total, p.pares.percentual, p.impares.percentual
    );

    println!(
        "\n── Sequências ── total {} (média {} por concurso)",
        stats.sequencias.total, stats.sequencias.media
    );
    for exemplo in &stats.sequencias.exemplos {
        let descricao = exemplo
            .sequencias
            .iter()
            .map(|s| format!("{:?}", s))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  Concurso {}: {}", exemplo.concurso, descricao);
    }

    if !stats.quinas.is_empty() {
        println!("\n── Quinas mais frequentes ──");
        for quina in stats.quinas.iter().take(5) {
            println!(
                "  {:?} — {}x ({:.1}%)",
                quina.numeros, quina.ocorrencias, quina.percentual
            );
        }
    }

    let c = &stats.ciclos;
    println!(
        "\n── Ciclo ── {} repetições do concurso anterior ({}%) — {}",
        c.repeticoes,
        c.percentual_repeticao,
        if c.is_novo { "ciclo novo" } else { "ciclo em andamento" }
    );
}

pub fn display_jogo(jogo: &Jogo) {
    println!("\n{}\n", jogo.explicacao.titulo);

    let numeros = jogo
        .numeros
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" - ");
    println!("  {}\n", numeros);

    println!(
        "  Score: {:.1}/100 ({})\n",
        jogo.score, jogo.metricas.qualidade.nivel
    );

    for secao in &jogo.explicacao.secoes {
        println!("{} {}", secao.icon, secao.titulo);
        println!("   {}\n", secao.texto);
    }
}

pub fn display_jogos_salvos(jogos: &[JogoSalvo]) {
    if jogos.is_empty() {
        println!("Nenhum jogo salvo. Gere um com: lotofacil gerar --salvar");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Criado em", "Modo", "Score", "Números"]);

    for jogo in jogos {
        let numeros = jogo
            .numeros
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            jogo.id.to_string(),
            jogo.criado_em.clone(),
            jogo.modo.clone(),
            format!("{:.1}", jogo.score),
            numeros,
        ]);
    }

    println!("{table}");
}
