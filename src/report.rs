//! Terminal rendering of label distributions for diagnostics.
//!
//! The rendering has no effect on the computed statistics;
//! it only exists so a training run can show what a node observed.

use colored::Colorize;

use std::fmt::Display;

use crate::Histogram;
use crate::ProbabilityMassFunction;

const FULL_WIDTH:  usize = 48;
const LABEL_WIDTH: usize = 24;
const COUNT_WIDTH: usize = 10;
const MASS_WIDTH:  usize = 12;
const PREC_WIDTH:  usize = 5;

/// Renders a histogram and the PMF derived from it as a
/// column-aligned table. Labels missing from the PMF (zero-count
/// bins) are shown with zero mass.
pub fn distribution_table<L>(
    histogram: &Histogram<L>,
    pmf: &ProbabilityMassFunction<L>,
) -> String
    where L: Ord + Display,
{
    let mut lines = Vec::new();
    lines.push(format!("{:=^FULL_WIDTH$}", ""));
    lines.push(format!("{:^FULL_WIDTH$}", "DISTRIBUTION".bold()));
    lines.push(format!("{:-^FULL_WIDTH$}", ""));
    lines.push(format!(
        "+ {:<LABEL_WIDTH$}{:>COUNT_WIDTH$}{:>MASS_WIDTH$}",
        "LABEL".bold(),
        "COUNT".bold(),
        "MASS".bold(),
    ));

    for (label, &count) in histogram.bins() {
        let mass = pmf.masses()
            .get(label)
            .copied()
            .unwrap_or(0f64);
        lines.push(format!(
            "+ {:<LABEL_WIDTH$}{:>COUNT_WIDTH$}{:>MASS_WIDTH$.PREC_WIDTH$}",
            label.to_string().green(),
            count,
            mass,
        ));
    }

    lines.push(format!("{:-^FULL_WIDTH$}", ""));
    lines.push(format!(
        "+ {:<LABEL_WIDTH$}{:>COUNT_WIDTH$}",
        "Total".bold(),
        histogram.count(),
    ));
    lines.push(format!(
        "+ {:<LABEL_WIDTH$}{:>COUNT_WIDTH$.PREC_WIDTH$}",
        "Entropy (bits)".bold(),
        pmf.calculate_entropy(),
    ));
    lines.push(format!("{:=^FULL_WIDTH$}", ""));

    lines.join("\n")
}

/// Prints [`distribution_table`] to standard output.
pub fn print_distribution<L>(
    histogram: &Histogram<L>,
    pmf: &ProbabilityMassFunction<L>,
)
    where L: Ord + Display,
{
    println!("{}", distribution_table(histogram, pmf));
}
