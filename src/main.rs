use anyhow::{anyhow, Context, Result};
use clap::Parser;

use chordal::cli::{binding_rows, resolve, CliArgs, CliCommand, Resolution};
use chordal::keymap::{load_keymap, Chord, FixedBinding};
use chordal::{Keybindings, Preferences};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    chordal::tracing::init(args.config_dir.as_deref());

    let paths = args.paths().map_err(|e| anyhow!(e))?;
    tracing::debug!(?paths, "resolved config paths");

    match args.command {
        CliCommand::List { group, all, json } => {
            let keymap = load_keymap(&paths.keybindings);
            let rows = binding_rows(&keymap, group, all);
            if json {
                let out = serde_json::to_string_pretty(&rows).context("Failed to encode bindings")?;
                println!("{}", out);
            } else {
                let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
                let mut current_group = None;
                for row in &rows {
                    if current_group != Some(&row.group) {
                        println!("\n{}", row.group);
                        current_group = Some(&row.group);
                    }
                    println!(
                        "  {:<width$}  {:<20}  {}",
                        row.name,
                        row.shortcut,
                        row.label,
                        width = name_width
                    );
                }
            }
        }

        CliCommand::Save => {
            let prefs = Preferences::load_from(&paths.preferences);
            let keys = Keybindings::init(prefs, &paths.keybindings);
            keys.save()
                .with_context(|| format!("Failed to save {}", paths.keybindings.display()))?;
            println!("Wrote {}", paths.keybindings.display());
        }

        CliCommand::Resolve { chord } => {
            let parsed: Chord = chord
                .parse()
                .with_context(|| format!("Invalid chord {:?}", chord))?;
            let keymap = load_keymap(&paths.keybindings);
            match resolve(&keymap, &parsed) {
                Resolution::Binding { group, name, label } => {
                    println!("{} -> {} ({}, {})", parsed.label(), name, label, group);
                }
                Resolution::Fixed(fixed) => {
                    let what = match fixed {
                        FixedBinding::SelectTab(0) => "select last tab".to_string(),
                        FixedBinding::SelectTab(n) => format!("select tab {}", n),
                        FixedBinding::FirstTab => "select first tab".to_string(),
                        FixedBinding::LastTab => "select last tab".to_string(),
                    };
                    println!("{} -> {} (fixed)", parsed.label(), what);
                }
                Resolution::Nothing => println!("{} is not bound", parsed.label()),
            }
        }
    }

    Ok(())
}
