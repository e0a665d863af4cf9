use anyhow::{Result, bail};
use comfy_table::{Cell, Table};

use addr_cli::pipeline::{NormalizeConfig, NormalizeOutcome, load_reference, run_normalize};
use addr_ingest::{IngestOptions, input_path};
use addr_normalization::{MalformedRowPolicy, NormalizationOptions};
use addr_report::OutputFormat;

use crate::cli::{NormalizeArgs, OutputFormatArg, ReferenceArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_street_types(args: &ReferenceArgs) -> Result<()> {
    let reference = load_reference(args.reference_dir.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Street type"), header_cell("Variants")]);
    apply_table_style(&mut table);
    for entry in reference.corrections().entries() {
        let variants: Vec<&str> = entry.variants.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(entry.canonical_form.to_uppercase()),
            Cell::new(variants.join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_normalize_command(args: &NormalizeArgs) -> Result<NormalizeOutcome> {
    let config = normalize_config(args)?;
    run_normalize(&config)
}

fn normalize_config(args: &NormalizeArgs) -> Result<NormalizeConfig> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }
    let delimiter = args.delimiter as u8;
    let policy = if args.skip_malformed {
        MalformedRowPolicy::Skip
    } else {
        MalformedRowPolicy::Abort
    };
    let mut config = NormalizeConfig::new(input_path(&args.input_dir, &args.input_file));
    config.reference_dir = args.reference.reference_dir.clone();
    config.ingest = IngestOptions::default().with_delimiter(delimiter);
    config.options = NormalizationOptions::new().with_malformed_rows(policy);
    config.output = args.output.clone();
    config.format = output_format(args.format);
    config.dry_run = args.dry_run;
    Ok(config)
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
