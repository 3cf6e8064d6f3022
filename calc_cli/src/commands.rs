//! Subcommand implementations.
//!
//! Every command writes its report to `out` and returns `Ok(true)` on
//! success, `Ok(false)` when the input was rejected (the message has already
//! been written), or `Err` for I/O and config problems.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use calc_core::calculations::{parse_items, run_all};
use calc_core::form::{
    beam_error_message, conversion_error_message, render_beam, render_conversion,
};
use calc_core::{
    BeamForm, CalcError, CalculationItem, CalculationOutput, ConversionForm, Dimension,
    DisplaySettings, SectionForm, UnitDefinition,
};
use serde::Serialize;
use tracing::info;

use crate::args::{BeamArgs, ConvertArgs, OutputFormat, RunArgs, UnitsArgs};
use crate::config::{self, CliConfig};
use crate::error::CliError;

/// Resolved settings shared by all commands.
pub struct Context {
    pub format: OutputFormat,
    pub display: DisplaySettings,
}

impl Context {
    pub fn new(config: &CliConfig, format: Option<OutputFormat>) -> Self {
        Context {
            format: format.unwrap_or(config.format),
            display: config.display,
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CalcError::from)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a CalcError,
    code: &'static str,
    message: String,
}

fn write_error_json<W: Write>(out: &mut W, err: &CalcError, message: String) -> Result<(), CliError> {
    write_json(
        out,
        &ErrorReport {
            error: err,
            code: err.error_code(),
            message,
        },
    )
}

pub fn convert<W: Write>(args: &ConvertArgs, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    let form = ConversionForm {
        dimension: args.dimension,
        value: args.value.clone(),
        from_unit: args.from.clone(),
        to_unit: args.to.clone(),
    };

    match (form.calculate(), ctx.format) {
        (Ok(result), OutputFormat::Text) => writeln!(out, "{}", render_conversion(&result, &ctx.display))?,
        (Ok(result), OutputFormat::Json) => write_json(out, &CalculationOutput::Conversion(result))?,
        (Err(e), OutputFormat::Text) => {
            writeln!(out, "{}", conversion_error_message(&e))?;
            return Ok(false);
        }
        (Err(e), OutputFormat::Json) => {
            write_error_json(out, &e, conversion_error_message(&e))?;
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn units<W: Write>(args: &UnitsArgs, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    let dimensions: Vec<Dimension> = match args.dimension {
        Some(d) => vec![d],
        None => Dimension::ALL.to_vec(),
    };
    let definitions: Vec<UnitDefinition> = dimensions
        .iter()
        .flat_map(|d| d.units().iter().map(|u| u.definition()))
        .collect();

    match ctx.format {
        OutputFormat::Json => write_json(out, &definitions)?,
        OutputFormat::Text => {
            for def in &definitions {
                let factor = def
                    .to_base_factor
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    out,
                    "{:<12} {:<5} {:<20} {}",
                    def.dimension.as_str(),
                    def.symbol,
                    def.name,
                    factor
                )?;
            }
        }
    }
    Ok(true)
}

fn beam_form<W: Write>(form: &BeamForm, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    match (form.calculate(), ctx.format) {
        (Ok(result), OutputFormat::Text) => writeln!(out, "{}", render_beam(&result, &ctx.display))?,
        (Ok(result), OutputFormat::Json) => write_json(out, &CalculationOutput::Beam(result))?,
        (Err(e), OutputFormat::Text) => {
            writeln!(out, "{}", beam_error_message(&e))?;
            return Ok(false);
        }
        (Err(e), OutputFormat::Json) => {
            write_error_json(out, &e, beam_error_message(&e))?;
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn beam<W: Write>(args: &BeamArgs, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    beam_form(&args.to_form(), ctx, out)
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    index: usize,
    calc_type: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a CalculationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a CalcError>,
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::io("read", path, e))?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|e| CliError::io("read", path, e))
    }
}

pub fn run<W: Write>(args: &RunArgs, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    let json = read_input(&args.file)?;
    run_batch(&json, ctx, out)
}

/// Evaluate a JSON batch; malformed JSON is an error, failed items are reported.
pub fn run_batch<W: Write>(json: &str, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    let items = parse_items(json)?;
    let outputs = run_all(&items);
    let failed = outputs.iter().filter(|r| r.is_err()).count();
    info!(total = items.len(), failed, "Batch evaluated");

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<BatchEntry<'_>> = items
                .iter()
                .zip(&outputs)
                .enumerate()
                .map(|(index, (item, result))| BatchEntry {
                    index,
                    calc_type: item.calc_type(),
                    label: item.label(),
                    output: result.as_ref().ok(),
                    error: result.as_ref().err(),
                })
                .collect();
            write_json(out, &entries)?;
        }
        OutputFormat::Text => {
            for (index, (item, result)) in items.iter().zip(&outputs).enumerate() {
                write_batch_text(out, index, item, result, &ctx.display)?;
            }
            writeln!(out, "{} of {} succeeded", items.len() - failed, items.len())?;
        }
    }
    Ok(failed == 0)
}

fn write_batch_text<W: Write>(
    out: &mut W,
    index: usize,
    item: &CalculationItem,
    result: &Result<CalculationOutput, CalcError>,
    display: &DisplaySettings,
) -> Result<(), CliError> {
    let label = item.label();
    if label.is_empty() {
        writeln!(out, "[{}] {}", index + 1, item.calc_type())?;
    } else {
        writeln!(out, "[{}] {} {}", index + 1, item.calc_type(), label)?;
    }

    let body = match result {
        Ok(CalculationOutput::Conversion(r)) => render_conversion(r, display),
        Ok(CalculationOutput::Beam(r)) => render_beam(r, display),
        Err(e) => format!("Error: {e}"),
    };
    for line in body.lines() {
        writeln!(out, "    {line}")?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str, default: &str) -> Result<String, CliError> {
    write!(out, "{label} [{default}]: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();
    Ok(if line.is_empty() { default.to_string() } else { line.to_string() })
}

/// Prompt for each beam field, then print the report.
pub fn interactive<R: BufRead, W: Write>(input: &mut R, ctx: &Context, out: &mut W) -> Result<bool, CliError> {
    writeln!(out, "Fieldcalc - Beam Bending Calculator")?;
    writeln!(out, "Simply-supported beam, point load at midspan. Press Enter to accept a default.")?;
    writeln!(out)?;

    let load = prompt(input, out, "Load (N)", "1000")?;
    let length = prompt(input, out, "Span (m)", "2")?;
    let youngs_modulus_gpa = prompt(input, out, "Young's modulus (GPa)", "200")?;
    let yield_strength_mpa = prompt(input, out, "Yield strength (MPa)", "250")?;
    let shape = prompt(input, out, "Section (rectangular/circular)", "rectangular")?;

    let section = if shape.eq_ignore_ascii_case("circular") || shape.eq_ignore_ascii_case("c") {
        SectionForm::Circular {
            diameter: prompt(input, out, "Diameter (m)", "0.05")?,
        }
    } else {
        SectionForm::Rectangular {
            width: prompt(input, out, "Width (m)", "0.1")?,
            height: prompt(input, out, "Height (m)", "0.2")?,
        }
    };

    writeln!(out)?;
    let form = BeamForm {
        load,
        length,
        youngs_modulus_gpa,
        yield_strength_mpa,
        section,
    };
    beam_form(&form, ctx, out)
}

pub fn config_show<W: Write>(path: &Path, config: &CliConfig, out: &mut W) -> Result<bool, CliError> {
    writeln!(out, "# {}", path.display())?;
    write_json(out, config)?;
    Ok(true)
}

pub fn config_init<W: Write>(path: &Path, force: bool, out: &mut W) -> Result<bool, CliError> {
    config::save(&CliConfig::default(), path, force)?;
    writeln!(out, "Wrote default config to {}", path.display())?;
    Ok(true)
}
