//! Output formatters for reports
//!
//! Turn report snapshots into multi-section terminal text.

use colored::Colorize;

use crate::event::MostCommonDate;
use crate::loader::Inspection;
use crate::report::{EventReport, VehicleReport};
use crate::vehicle::{Statistics, Vehicle};

fn heading(title: &str) -> Vec<String> {
    vec![
        title.bold().to_string(),
        "─".repeat(title.chars().count()),
    ]
}

fn vehicle_lines(vehicles: &[Vehicle], indent: &str) -> Vec<String> {
    if vehicles.is_empty() {
        return vec![format!("{}(none)", indent).dimmed().to_string()];
    }
    vehicles
        .iter()
        .map(|v| format!("{}{}", indent, v))
        .collect()
}

fn format_statistics(name: &str, stats: &Statistics) -> String {
    format!(
        "  {:<9} avg {:>12.2}   min {:>10}   max {:>10}",
        format!("{}:", name),
        stats.avg,
        stats.min,
        stats.max
    )
}

/// Format a VehicleReport as regular multi-section text output
pub fn format_vehicle_report(report: &VehicleReport) -> String {
    let mut output = vec![
        format!("Vehicles ({})", report.total).bold().to_string(),
        String::new(),
    ];

    let direction = if report.descending {
        "descending"
    } else {
        "ascending"
    };
    output.extend(heading(&format!(
        "Sorted by {} ({})",
        report.sort_key, direction
    )));
    output.extend(vehicle_lines(&report.sorted, "  "));
    output.push(String::new());

    output.extend(heading(&format!(
        "Mileage greater than {}",
        report.mileage_above
    )));
    output.extend(vehicle_lines(&report.above_mileage, "  "));
    output.push(String::new());

    output.extend(heading("Count by color"));
    for entry in &report.color_counts {
        output.push(format!(
            "  {:<8} {}",
            format!("{}:", entry.color.label()),
            entry.count
        ));
    }
    output.push(String::new());

    output.extend(heading("Most expensive by model"));
    for group in &report.most_expensive_by_model {
        output.push(format!("  {}", group.model.cyan()));
        output.extend(vehicle_lines(&group.vehicles, "    "));
    }
    output.push(String::new());

    output.extend(heading("Statistics"));
    output.push(format_statistics("Price", &report.statistics.price));
    output.push(format_statistics("Mileage", &report.statistics.mileage));
    output.push(String::new());

    output.extend(heading("Most expensive"));
    output.extend(vehicle_lines(&report.most_expensive, "  "));
    output.push(String::new());

    output.extend(heading("Components"));
    for group in &report.components {
        output.push(format!(
            "  {}: {} cars",
            group.component.cyan(),
            group.vehicles.len()
        ));
        output.extend(vehicle_lines(&group.vehicles, "    "));
    }
    output.push(String::new());

    let (low, high) = report.price_range;
    output.extend(heading(&format!("Price between {} and {}", low, high)));
    output.extend(vehicle_lines(&report.in_price_range, "  "));

    output.join("\n")
}

pub fn format_most_common(most_common: &MostCommonDate) -> String {
    format!(
        "Most common date: {} ({} events)",
        most_common.dates.join(", ").green(),
        most_common.count
    )
}

pub fn format_event_report(report: &EventReport) -> String {
    let mut output = vec![format!(
        "{} Sorted {} events into {}",
        "✓".green(),
        report.loaded,
        report.output
    )];
    match &report.most_common {
        Some(most_common) => output.push(format_most_common(most_common)),
        None => output.push("No events loaded".yellow().to_string()),
    }
    output.join("\n")
}

pub fn format_inspection(report: &Inspection) -> String {
    if report.is_clean() {
        return format!(
            "{} {}: all {} records valid",
            "✓".green(),
            report.source,
            report.checked
        );
    }

    let mut output = vec![format!(
        "{} {}: {} of {} records invalid",
        "✗".red(),
        report.source,
        report.rejections.len(),
        report.checked
    )];
    for rejection in &report.rejections {
        output.push(format!("  record {}", rejection.index).bold().to_string());
        for (field, violations) in rejection.errors.iter() {
            for violation in violations {
                output.push(format!(
                    "    {} {} ({})",
                    format!("{}:", field).yellow(),
                    violation.message,
                    violation.kind
                ));
            }
        }
    }
    output.join("\n")
}
