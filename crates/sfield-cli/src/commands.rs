use std::env;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info_span, warn};

use sfield_cli::pipeline::generate;
use sfield_cli::project::resolve_output_dir;
use sfield_cli::types::GenerateResult;
use sfield_core::{COMMON_COLUMNS, DISPATCH, columns};
use sfield_ingest::IngestOptions;
use sfield_model::FieldKind;

use crate::cli::GenerateArgs;
use crate::summary::apply_table_style;

pub fn run_kinds() -> Result<()> {
    println!("Common columns: {}", COMMON_COLUMNS.join(", "));
    let mut table = Table::new();
    table.set_header(vec!["Type", "Dispatch name", "Columns"]);
    apply_table_style(&mut table);
    for kind in FieldKind::ALL {
        let dispatched = DISPATCH
            .iter()
            .find(|(_, built, _)| *built == kind.as_str());
        let (name, extra) = match dispatched {
            Some((name, _, blueprint)) => (*name, columns(*blueprint).join(", ")),
            None => ("-", String::new()),
        };
        let extra = if extra.is_empty() { "-".to_string() } else { extra };
        table.add_row(vec![kind.as_str().to_string(), name.to_string(), extra]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", file = %args.definition_file.display());
    let _guard = span.enter();
    if !args.definition_file.is_file() {
        bail!(
            "definition file not found: {}",
            args.definition_file.display()
        );
    }
    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter must be a single ASCII character: {:?}", args.delimiter))?;
    let options = IngestOptions::default().with_delimiter(delimiter);

    let project_dir = env::current_dir().context("read current directory")?;
    let output_dir = match resolve_output_dir(
        args.output_dir.as_deref(),
        args.package.as_deref(),
        &project_dir,
    ) {
        Ok(dir) => dir,
        Err(error) => {
            warn!(
                "Impossible to find an output directory. Use the command in an SF Project or use the --output-dir flag."
            );
            warn!("{error:#}");
            warn!("Execution aborted");
            return Ok(GenerateResult::not_found());
        }
    };
    generate(&args.definition_file, output_dir, options)
}
