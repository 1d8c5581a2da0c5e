//! Human-readable rendering of a parsed record.

use colored::Colorize;
use takeoff_parse::ParsedProjectDescription;

pub fn print_summary(record: &ParsedProjectDescription) {
    if record.confidence == 0 && record.building_type.is_none() && record.project_name.is_none() {
        println!("{}", "nothing recognized".dimmed());
        return;
    }

    if let Some(name) = &record.project_name {
        println!("{}", name.bold());
    }

    println!(
        "  type        {} {}",
        field(record.building_type.as_deref()),
        format!("({}% confidence)", record.confidence).dimmed()
    );
    println!("  subtype     {}", field(record.building_subtype.as_deref()));
    println!(
        "  area        {}",
        field(record.square_footage.map(|sf| format!("{sf} sf")).as_deref())
    );
    println!("  location    {}", field(record.location.as_deref()));
    println!(
        "  floors      {}",
        field(record.floors.map(|f| f.to_string()).as_deref())
    );
    println!(
        "  work type   {}",
        field(record.project_classification.map(|c| c.as_str().to_string()).as_deref())
    );
    println!(
        "  finish      {}",
        field(record.finish_level.map(|f| f.as_str().to_string()).as_deref())
    );
    if let Some(service) = record.service_level {
        println!("  service     {}", service.as_str().green());
    }
    if let Some(mix) = &record.mix_summary {
        println!("  mix         {}", mix.green());
    }
    if !record.features.is_empty() {
        let tags: Vec<&str> = record.features.iter().map(String::as_str).collect();
        println!("  features    {}", tags.join(", ").green());
    }
}

fn field(value: Option<&str>) -> colored::ColoredString {
    match value {
        Some(v) => v.green(),
        None => "—".dimmed(),
    }
}
