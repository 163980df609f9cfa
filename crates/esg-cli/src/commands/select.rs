//! Select command implementation.
//!
//! Mutates the fund, company and sector selection sets persisted in the
//! session file.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use esg_engine::analysis::canonical_sector;
use esg_engine::selection::{SelectionKind, Selections};
use esg_engine::Universe;

use crate::cli::OutputFormat;
use crate::commands::{parse_kind, Context};
use crate::error::CliError;
use crate::output::{
    print_header, print_info, print_json_value, print_output, print_success, print_warning,
};

/// Selection action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectAction {
    /// Add a key to a set
    Add,
    /// Remove a key from a set
    Remove,
    /// Empty one set, or every set when no kind is given
    Clear,
    /// Show one set, or every set when no kind is given
    List,
}

/// Arguments for the select command.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Action to perform
    #[arg(value_enum)]
    pub action: SelectAction,

    /// Fund name, company ISIN or sector name
    pub key: Option<String>,

    /// Selection kind: fund, company or sector. Defaults to the active kind.
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: Option<SelectionKind>,
}

/// One selected key.
#[derive(Debug, Serialize, Tabled)]
struct SelectionRow {
    #[tabled(rename = "Kind")]
    kind: SelectionKind,
    #[tabled(rename = "Key")]
    key: String,
}

/// Execute the select command.
pub fn execute(args: SelectArgs, context: &Context) -> Result<()> {
    let store = context.session();
    let mut selections = store.load();

    match args.action {
        SelectAction::Add => {
            let kind = args.kind.unwrap_or(selections.active);
            let key = required_key(args.key)?;
            let universe = context.universe()?;
            let key = resolve_key(&universe, kind, &key);

            if selections.set_mut(kind).add(key.as_str()) {
                selections.active = kind;
                store.save(&selections)?;
                print_success(&format!("Added {} '{}'", kind, key));
            } else {
                print_warning(&format!("'{}' is blank or already selected", key));
            }
        }
        SelectAction::Remove => {
            let kind = args.kind.unwrap_or(selections.active);
            let key = required_key(args.key)?;

            if selections.set_mut(kind).remove(key.trim()) {
                store.save(&selections)?;
                print_success(&format!("Removed {} '{}'", kind, key.trim()));
            } else {
                print_warning(&format!("{} '{}' is not selected", kind, key.trim()));
            }
        }
        SelectAction::Clear => {
            match args.kind {
                Some(kind) => selections.set_mut(kind).clear(),
                None => selections.reset(),
            }
            store.save(&selections)?;
            print_success("Selection cleared");
        }
        SelectAction::List => list(&selections, args.kind, context.format)?,
    }

    Ok(())
}

fn required_key(key: Option<String>) -> Result<String> {
    key.ok_or_else(|| CliError::MissingArgument("key".into()).into())
}

/// Maps a user-typed key to the universe's spelling, warning if unknown.
fn resolve_key(universe: &Universe, kind: SelectionKind, key: &str) -> String {
    let key = key.trim();
    let resolved = match kind {
        SelectionKind::Fund => universe.fund(key).map(|f| f.fund_name.clone()),
        SelectionKind::Company => universe.company(key).map(|c| c.isin.clone()),
        SelectionKind::Sector => canonical_sector(&universe.companies, key).map(str::to_string),
    };
    resolved.unwrap_or_else(|| {
        print_warning(&format!("{} '{}' is not in the loaded data", kind, key));
        key.to_string()
    })
}

fn list(selections: &Selections, kind: Option<SelectionKind>, format: OutputFormat) -> Result<()> {
    let kinds: Vec<SelectionKind> = match kind {
        Some(kind) => vec![kind],
        None => SelectionKind::all().to_vec(),
    };

    if format == OutputFormat::Json {
        return match kind {
            Some(kind) => print_json_value(selections.set(kind)),
            None => print_json_value(selections),
        };
    }

    let rows: Vec<SelectionRow> = kinds
        .iter()
        .flat_map(|&kind| {
            selections.set(kind).iter().map(move |key| SelectionRow {
                kind,
                key: key.to_string(),
            })
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Selections");
        print_output(&rows, format)?;
        print_info(&format!("Active kind: {}", selections.active));
        Ok(())
    } else {
        print_output(&rows, format)
    }
}
