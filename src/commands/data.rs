use crate::*;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn render_summary(s: &DatasetSummary) -> String {
    let mut lines = vec![
        format!("data dir: {}", s.data_dir),
        format!("brands: {} ({} generics)", s.brands, s.generics),
        format!(
            "interactions: {} (| keys: {}, || keys: {})",
            s.interactions, s.single_separator_keys, s.double_separator_keys
        ),
        format!("side effects: {}", s.side_effects),
    ];
    if !s.unknown_generics.is_empty() {
        lines.push(format!(
            "unknown generic names: {}",
            s.unknown_generics.join(", ")
        ));
    }
    for f in &s.files {
        lines.push(format!(
            "{}\t{}",
            f.file,
            f.sha256.as_deref().unwrap_or("missing")
        ));
    }
    lines.join("\n")
}

pub fn handle_data_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Validate => {
            let paths = settings.data_paths();
            let dataset = snapshot(&paths)
                .with_context(|| format!("cannot load datasets from {}", paths.dir.display()))?;
            let summary = summarize(dataset, &paths)?;
            print_one(cli.json, true, summary, render_summary)?;
        }
        Commands::Generate {
            mapping,
            out_dir,
            seed,
            separator,
        } => {
            let paths = settings.data_paths();
            let mapping = mapping.clone().unwrap_or(paths.mapping);
            let out_dir = out_dir.clone().unwrap_or(paths.dir);
            let brands = load_brand_mapping(&mapping)?;
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(*s),
                None => StdRng::from_entropy(),
            };
            let data = generate(&brands, &mut rng, *separator);
            write_dataset(&out_dir, &data)?;
            let report = GenerateReport {
                out_dir: out_dir.to_string_lossy().to_string(),
                generics: brands.generic_names().count(),
                interactions: data.interactions.len(),
                side_effects: data.side_effects.len(),
                separator: *separator,
            };
            print_one(cli.json, true, report, |r| {
                format!(
                    "created {} interaction pairs and {} side effect lists in {}",
                    r.interactions, r.side_effects, r.out_dir
                )
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
