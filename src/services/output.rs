use crate::domain::models::{
    CheckReport, InteractionReport, JsonOut, Resolution, SideEffectsReport,
};
use serde::Serialize;
use std::io::Write;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(true, data)?;
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(ok, data)?;
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}

/// "acetaminophen" -> "Acetaminophen", word by word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_resolution(r: &Resolution) -> String {
    match r {
        Resolution::Resolved(d) => match &d.brand_key {
            Some(brand) => format!(
                "{} -> {} (brand: {})",
                d.input.trim(),
                title_case(&d.generic),
                brand
            ),
            None => format!("{} -> {}", d.input.trim(), title_case(&d.generic)),
        },
        Resolution::Unresolved { input, suggestions } => {
            let mut s = format!("{}: not recognized", input.trim());
            if !suggestions.is_empty() {
                s.push_str(&format!("\n  closest matches: {}", suggestions.join(", ")));
            }
            s
        }
    }
}

pub fn render_interaction(r: &InteractionReport) -> String {
    match r {
        InteractionReport::Found {
            severity,
            description,
            advice,
            ..
        } => format!(
            "Interaction severity: {}\n{}\nAdvice: {}",
            severity, description, advice
        ),
        InteractionReport::NotFound { .. } => {
            "No interaction found in local data for this pair.".to_string()
        }
    }
}

pub fn render_side_effects(r: &SideEffectsReport) -> String {
    match r {
        SideEffectsReport::Known { generic, effects } => {
            let mut s = format!("Side effects of {}:", title_case(generic));
            for e in effects {
                s.push_str(&format!("\n  - {}", e));
            }
            s
        }
        SideEffectsReport::NoData { generic } => format!(
            "Side effects of {}: no local side effects data available.",
            title_case(generic)
        ),
    }
}

pub fn render_check(report: &CheckReport) -> String {
    let mut out = Vec::new();
    if !report.all_resolved() {
        out.push("One or both drug names not recognized.".to_string());
        out.extend(report.drugs.iter().map(render_resolution));
        return out.join("\n");
    }
    let generics: Vec<String> = report
        .drugs
        .iter()
        .filter_map(Resolution::generic)
        .map(title_case)
        .collect();
    out.push(format!("Generic names matched: {}", generics.join(" and ")));
    out.extend(report.drugs.iter().map(render_resolution));
    if let Some(i) = &report.interaction {
        out.push(render_interaction(i));
    }
    out.extend(report.side_effects.iter().map(render_side_effects));
    out.join("\n")
}

pub fn write_check<W: Write>(w: &mut W, json: bool, report: &CheckReport) -> anyhow::Result<()> {
    if json {
        writeln!(
            w,
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.all_resolved(),
                data: report
            })?
        )?;
    } else {
        writeln!(w, "{}", render_check(report))?;
    }
    Ok(())
}
