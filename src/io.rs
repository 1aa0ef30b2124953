use crate::model::{Employee, Plan, Shift, ShiftStatus};
use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Parse une heure `HH:MM`.
pub fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .with_context(|| format!("invalid time (expected HH:MM): {raw}"))
}

/// Parse une date `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

/// Import d'employés depuis CSV: header `handle,display_name[,position]`
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let handle = rec.get(0).context("missing handle")?.trim();
        let display = rec.get(1).context("missing display_name")?.trim();
        if handle.is_empty() || display.is_empty() {
            bail!("invalid employee row (empty)");
        }
        let mut employee = Employee::new(handle.to_string(), display.to_string());
        if let Some(position) = rec.get(2) {
            employee.position = position.trim().to_string();
        }
        out.push(employee);
    }
    Ok(out)
}

/// Import de shifts: header `employee,date,start,end,position[,break_minutes]`
///
/// `employee` est un handle, résolu contre le plan courant.
pub fn import_shifts_csv<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let handle = rec.get(0).context("missing employee handle")?.trim();
        let employee = plan
            .find_employee_by_handle(handle)
            .with_context(|| format!("unknown employee handle: {handle}"))?;
        let date = parse_date(rec.get(1).context("missing date")?)?;
        let start = parse_time(rec.get(2).context("missing start")?)?;
        let end = parse_time(rec.get(3).context("missing end")?)?;
        let position = rec.get(4).context("missing position")?.trim().to_string();
        let break_minutes = match rec.get(5).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u32>()
                .with_context(|| format!("invalid break_minutes for handle {handle}"))?,
            _ => 0,
        };
        let shift = Shift::new(employee.id.clone(), date, start, end, position, break_minutes)
            .map_err(anyhow::Error::msg)?;
        out.push(shift);
    }
    Ok(out)
}

/// Export JSON du plan (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des shifts: header `id,employee,date,start,end,position,break_minutes,status`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "id",
        "employee",
        "date",
        "start",
        "end",
        "position",
        "break_minutes",
        "status",
    ])?;
    for s in &plan.shifts {
        let handle = plan
            .find_employee_by_id(&s.employee)
            .map(|e| e.handle.as_str())
            .unwrap_or("");
        let date = s.date.to_string();
        let start = s.start.format("%H:%M").to_string();
        let end = s.end.format("%H:%M").to_string();
        let break_minutes = s.break_minutes.to_string();
        let status = match s.status {
            ShiftStatus::Scheduled => "scheduled",
            ShiftStatus::Cancelled => "cancelled",
        };
        w.write_record([
            s.id.as_str(),
            handle,
            date.as_str(),
            start.as_str(),
            end.as_str(),
            s.position.as_str(),
            break_minutes.as_str(),
            status,
        ])?;
    }
    w.flush()?;
    Ok(())
}
