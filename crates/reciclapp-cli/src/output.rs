//! Output formatting module

use std::io::Write;

use reciclapp_domain::model::Catalog;
use reciclapp_types::{AccumulatedImpact, ImpactRecord, OutputFormat, Result};

/// Registration result
pub fn write_record<W: Write>(out: &mut W, format: OutputFormat, record: &ImpactRecord) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
        return Ok(());
    }

    if record.recyclable {
        writeln!(out, "\n✅ Residuo registrado correctamente.")?;
        match record.description {
            Some(ref description) => writeln!(out, "Tipo: {} - {}", record.material, description)?,
            None => writeln!(out, "Tipo: {}", record.material)?,
        }
        writeln!(
            out,
            "Tamaño estimado: {} (factor {:.1})",
            record.size_tier, record.multiplier
        )?;
        writeln!(
            out,
            "Impacto estimado: {}L de agua, {}kWh de energía, {}kg de CO₂.",
            record.impact.water, record.impact.energy, record.impact.co2
        )?;
    } else {
        writeln!(
            out,
            "\n❌ El residuo '{}' no está en la lista de reciclables.",
            record.material
        )?;
        writeln!(out, "Registrado sin impacto estimado.")?;
    }
    Ok(())
}

/// Accumulated impact
pub fn write_total<W: Write>(out: &mut W, format: OutputFormat, total: &AccumulatedImpact) -> Result<()> {
    let total = total.rounded();
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&total)?)?;
        return Ok(());
    }

    writeln!(out, "\n🌍 Impacto acumulado ({} registros):", total.record_count)?;
    writeln!(out, "💧 Agua ahorrada: {}L", total.water)?;
    writeln!(out, "⚡ Energía ahorrada: {}kWh", total.energy)?;
    writeln!(out, "🌱 CO₂ reducido: {}kg", total.co2)?;
    Ok(())
}

/// Accumulated impact grouped by material
pub fn write_totals_by_material<W: Write>(
    out: &mut W,
    format: OutputFormat,
    groups: &[(String, AccumulatedImpact)],
) -> Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<_> = groups
            .iter()
            .map(|(material, total)| serde_json::json!({ "material": material, "total": total.rounded() }))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<28} {:>6} {:>10} {:>10} {:>10}",
        "Material", "Items", "Agua(L)", "Energ(kWh)", "CO₂(kg)"
    )?;
    writeln!(out, "{}", "-".repeat(68))?;
    for (material, total) in groups {
        let total = total.rounded();
        writeln!(
            out,
            "{:<28} {:>6} {:>10.2} {:>10.2} {:>10.2}",
            truncate(material, 28),
            total.record_count,
            total.water,
            total.energy,
            total.co2
        )?;
    }
    Ok(())
}

/// Recent history entries
pub fn write_history<W: Write>(
    out: &mut W,
    format: OutputFormat,
    entries: &[ImpactRecord],
    total_count: usize,
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }

    writeln!(out, "Historial de reciclaje")?;
    writeln!(out, "======================")?;
    writeln!(out, "Total entries: {}", total_count)?;
    writeln!(out)?;

    if entries.is_empty() {
        writeln!(out, "No entries found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<28} {:<8} {:>8} {:>8} {:>8} {:>11}",
        "Material", "Tamaño", "Agua", "kWh", "CO₂", "Fecha"
    )?;
    writeln!(out, "{}", "-".repeat(76))?;

    for entry in entries {
        let date_str = entry
            .recorded_at
            .map(|t| t.format("%m/%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let marker = if entry.recyclable { "" } else { " ✗" };

        writeln!(
            out,
            "{:<28} {:<8} {:>8.2} {:>8.2} {:>8.2} {:>11}",
            truncate(&format!("{}{}", entry.material, marker), 28),
            entry.size_tier,
            entry.impact.water,
            entry.impact.energy,
            entry.impact.co2,
            date_str
        )?;
    }

    if total_count > entries.len() {
        writeln!(out)?;
        writeln!(out, "... and {} more entries", total_count - entries.len())?;
    }

    Ok(())
}

/// Numbered catalog, as shown in the interactive menu
pub fn write_catalog<W: Write>(out: &mut W, format: OutputFormat, catalog: &Catalog) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog.materials())?)?;
        return Ok(());
    }

    for (index, material) in catalog.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, material.label())?;
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
