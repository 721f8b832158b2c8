use crate::report::RenderOptions;
use crate::snapshot::Snapshot;
use crate::types::results::{RankedScore, ResultsBundle};
use chrono::Utc;

/// Markdown rendering of one aggregation run. Rounding to the configured
/// decimals happens here and nowhere earlier.
pub fn to_markdown(snapshot: &Snapshot, bundle: &ResultsBundle, options: &RenderOptions) -> String {
    let decimals = options.decimals;
    let mut output = String::new();

    output.push_str(&format!("# Resultados - {}\n\n", snapshot.festival.name));
    if let Some(date) = snapshot.festival.date {
        output.push_str(&format!("Fecha: {date}\n"));
    }
    output.push_str(&format!("Snapshot: {}\n", snapshot.digest));
    output.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output.push_str("## Ganadores Generales (Top 3)\n\n");
    push_podium(&mut output, &bundle.overall, decimals);

    if options.full_ranking {
        output.push_str("## Ranking Completo\n\n");
        push_podium(&mut output, &bundle.overall_full, decimals);
    }

    output.push_str("## Ganadores por Subcategoría (Top 3)\n\n");
    for ranking in &bundle.by_subcategory {
        output.push_str(&format!("### {}\n\n", ranking.title));
        push_podium(&mut output, &ranking.podium, decimals);
    }

    push_net_matrix(&mut output, snapshot, bundle, decimals);
    push_weighted_matrix(&mut output, bundle, decimals);

    output
}

fn push_podium(output: &mut String, ranking: &[RankedScore], decimals: usize) {
    if ranking.is_empty() {
        output.push_str("- sin participantes\n\n");
        return;
    }
    for (position, entry) in ranking.iter().enumerate() {
        output.push_str(&format!(
            "{}º {} - {:.decimals$} pts\n",
            position + 1,
            entry.entrant_name,
            entry.score,
        ));
    }
    output.push('\n');
}

fn push_net_matrix(output: &mut String, snapshot: &Snapshot, bundle: &ResultsBundle, decimals: usize) {
    output.push_str("## Puntajes Netos por Categoría\n\n");
    output.push_str("| Colegio |");
    for category in &snapshot.rubric.categories {
        output.push_str(&format!(" {} (Neto) |", category.name));
    }
    output.push('\n');
    push_separator(output, snapshot.rubric.categories.len() + 1);

    for row in &bundle.net_by_category {
        output.push_str(&format!("| {} |", row.entrant_name));
        for category in &snapshot.rubric.categories {
            let score = row.categories.get(&category.name).copied().unwrap_or(0.0);
            let deducted = deduction_total(snapshot, &row.entrant_name, &category.id);
            if deducted != 0.0 {
                output.push_str(&format!(" {score:.decimals$} ({deducted:+.decimals$}) |"));
            } else {
                output.push_str(&format!(" {score:.decimals$} |"));
            }
        }
        output.push('\n');
    }
    output.push('\n');
}

fn push_weighted_matrix(output: &mut String, bundle: &ResultsBundle, decimals: usize) {
    output.push_str("## Puntajes Ponderados por Categoría\n\n");
    output.push_str("| Colegio |");
    for column in &bundle.category_columns {
        output.push_str(&format!(" {} ({}%) |", column.name, column.weight));
    }
    output.push_str(" Total |\n");
    push_separator(output, bundle.category_columns.len() + 2);

    for row in &bundle.weighted_by_category {
        output.push_str(&format!("| {} |", row.entrant_name));
        for column in &bundle.category_columns {
            let score = row.categories.get(&column.name).copied().unwrap_or(0.0);
            output.push_str(&format!(" {score:.decimals$} |"));
        }
        output.push_str(&format!(" {:.decimals$} |\n", row.total));
    }
    output.push('\n');
}

fn push_separator(output: &mut String, columns: usize) {
    output.push('|');
    for _ in 0..columns {
        output.push_str("---|");
    }
    output.push('\n');
}

/// Net deduction the penalties apply to one (entrant, category) pair, shown
/// as an annotation next to the net score the way the audit matrix does.
fn deduction_total(snapshot: &Snapshot, entrant_name: &str, category_id: &str) -> f64 {
    snapshot
        .penalties
        .iter()
        .filter(|penalty| penalty.entrant_name == entrant_name)
        .flat_map(|penalty| &penalty.deductions)
        .filter(|deduction| deduction.category_id == category_id)
        .map(|deduction| deduction.points)
        .sum()
}
