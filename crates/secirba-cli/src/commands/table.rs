//! Table command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use secirba_formula::parameter::SupervisoryParameterTable;

use crate::cli::{Context, OutputFormat};
use crate::output::{print_header, print_output};

/// Arguments for the table command.
#[derive(Args, Debug)]
pub struct TableArgs {}

#[derive(Debug, Serialize, Tabled)]
struct CoefficientRow {
    #[tabled(rename = "Exposure")]
    exposure_type: String,
    #[tabled(rename = "Seniority")]
    seniority: String,
    #[tabled(rename = "Granularity")]
    granularity: String,
    #[tabled(rename = "A")]
    a: f64,
    #[tabled(rename = "B")]
    b: f64,
    #[tabled(rename = "C")]
    c: f64,
    #[tabled(rename = "D")]
    d: f64,
    #[tabled(rename = "E")]
    e: f64,
}

/// Execute the table command.
pub fn execute(_args: TableArgs, ctx: &Context) -> Result<()> {
    let rows: Vec<CoefficientRow> = SupervisoryParameterTable::entries()
        .into_iter()
        .map(|(key, coefficients)| CoefficientRow {
            exposure_type: key.exposure_type.to_string(),
            seniority: key.seniority.to_string(),
            granularity: key.granularity.to_string(),
            a: coefficients.a,
            b: coefficients.b,
            c: coefficients.c,
            d: coefficients.d,
            e: coefficients.e,
        })
        .collect();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header("Supervisory Parameter Coefficients");
    }
    print_output(&rows, ctx.format)
}
