use crate::*;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::process::ExitCode;

fn exit_for(resolved: bool) -> ExitCode {
    if resolved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNRESOLVED)
    }
}

pub fn handle_lookup_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<ExitCode> {
    let paths = settings.data_paths();
    let dataset = snapshot(&paths)
        .with_context(|| format!("cannot load datasets from {}", paths.dir.display()))?;
    let resolver = NameResolver::new(&dataset.brands, &settings.lookup);

    match &cli.command {
        Commands::Check {
            drug1,
            drug2,
            pick1,
            pick2,
        } => {
            if drug1.trim().is_empty() || drug2.trim().is_empty() {
                anyhow::bail!("Please enter both drug names.");
            }
            let report = build_check_report(
                dataset,
                resolver.resolve(drug1, pick1.as_deref()),
                resolver.resolve(drug2, pick2.as_deref()),
            );
            write_check(&mut std::io::stdout().lock(), cli.json, &report)?;
            Ok(exit_for(report.all_resolved()))
        }
        Commands::Resolve { name, pick } => {
            let resolution = resolver.resolve(name, pick.as_deref());
            let ok = resolution.is_resolved();
            print_one(cli.json, ok, &resolution, |r| render_resolution(r))?;
            Ok(exit_for(ok))
        }
        Commands::Suggest {
            name,
            limit,
            cutoff,
        } => {
            let lookup = LookupSettings {
                fuzzy_cutoff: cutoff.unwrap_or(settings.lookup.fuzzy_cutoff),
                max_suggestions: limit.unwrap_or(settings.lookup.max_suggestions),
                ..settings.lookup.clone()
            };
            lookup.validate()?;
            let items = resolver.scored(name, lookup.max_suggestions, lookup.fuzzy_cutoff);
            print_out(cli.json, &items, |s| {
                format!("{}\t{}\t{:.3}", s.brand, s.generic, s.score)
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interaction { generic1, generic2 } => {
            let report = interaction_report(&dataset.interactions, generic1, generic2);
            print_one(cli.json, true, report, render_interaction)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::SideEffects { name } => {
            let resolution = resolver.resolve(name, None);
            let Some(generic) = resolution.generic() else {
                print_one(cli.json, false, &resolution, |r| render_resolution(r))?;
                return Ok(exit_for(false));
            };
            let report = side_effects_report(&dataset.side_effects, generic);
            if cli.json {
                print_json(
                    true,
                    serde_json::json!({"drug": resolution, "side_effects": report}),
                )?;
            } else {
                println!("{}", render_resolution(&resolution));
                println!("{}", render_side_effects(&report));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
            run_interactive(dataset, &resolver, cli.json, &mut prompter)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate | Commands::Generate { .. } => {
            anyhow::bail!("not a lookup command: {:?}", cli.command)
        }
    }
}

/// `None` when the user quits at the suggestion picker.
fn resolve_interactive<R: BufRead, W: Write>(
    resolver: &NameResolver<'_>,
    prompter: &mut Prompter<R, W>,
    raw: &str,
) -> Option<Resolution> {
    let mut quit = false;
    let resolution = resolver.resolve_with(raw, |raw, candidates| {
        match prompter.choose(raw, candidates) {
            Ok(Choice::Picked(brand)) => Some(brand),
            Ok(Choice::Declined) => None,
            Ok(Choice::Quit) => {
                quit = true;
                None
            }
            Err(err) => {
                tracing::warn!(%err, "failed to read suggestion choice");
                None
            }
        }
    });
    (!quit).then_some(resolution)
}

/// One check per pair of names read from the prompt, until EOF or `:q`.
pub fn run_interactive<R: BufRead, W: Write>(
    dataset: &Dataset,
    resolver: &NameResolver<'_>,
    json: bool,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    writeln!(
        prompter.output(),
        "Enter two drug names (brand or generic). Type :q to quit."
    )?;
    loop {
        let Some(first) = prompter.ask("drug 1")? else {
            break;
        };
        let Some(second) = prompter.ask("drug 2")? else {
            break;
        };
        if first.is_empty() || second.is_empty() {
            writeln!(prompter.output(), "Please enter both drug names.")?;
            continue;
        }
        let Some(r1) = resolve_interactive(resolver, prompter, &first) else {
            break;
        };
        let Some(r2) = resolve_interactive(resolver, prompter, &second) else {
            break;
        };
        let report = build_check_report(dataset, r1, r2);
        write_check(prompter.output(), json, &report)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    fn dataset() -> Dataset {
        let brands = BrandMapping::from_raw([
            ("tylenol".to_string(), "acetaminophen".to_string()),
            ("advil".to_string(), "ibuprofen".to_string()),
        ])
        .unwrap();
        let mut records = HashMap::new();
        records.insert(
            "acetaminophen||ibuprofen".to_string(),
            InteractionRecord {
                severity: Severity::High,
                description: "Taking both is risky.".to_string(),
                advice: "Ask a pharmacist.".to_string(),
            },
        );
        Dataset {
            brands,
            interactions: InteractionStore::new(records),
            side_effects: SideEffectsTable::default(),
        }
    }

    fn session(input: &str) -> String {
        let ds = dataset();
        let settings = LookupSettings::default();
        let resolver = NameResolver::new(&ds.brands, &settings);
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        run_interactive(&ds, &resolver, false, &mut prompter).unwrap();
        String::from_utf8(prompter.output().clone()).unwrap()
    }

    #[test]
    fn interactive_picks_suggestion_by_number() {
        let out = session("tylenoll\nadvil\n1\n:q\n");
        assert!(out.contains("Did you mean (for \"tylenoll\")?"));
        assert!(out.contains("Generic names matched: Acetaminophen and Ibuprofen"));
        assert!(out.contains("Interaction severity: High"));
    }

    #[test]
    fn interactive_reports_unresolved_and_continues() {
        let out = session("qqqq\nadvil\nibuprofen\ntylenol\n");
        assert!(out.contains("One or both drug names not recognized."));
        assert!(out.contains("Interaction severity: High"));
    }

    #[test]
    fn quitting_at_the_picker_ends_the_session() {
        let out = session("tylenoll\nadvil\n:q\ntylenol\nadvil\n");
        assert!(out.contains("Did you mean (for \"tylenoll\")?"));
        assert!(!out.contains("Interaction severity"));
        assert_eq!(out.matches("drug 1> ").count(), 1);
    }

    #[test]
    fn interactive_asks_again_for_blank_names() {
        let out = session("\nadvil\n");
        assert!(out.contains("Please enter both drug names."));
    }
}
