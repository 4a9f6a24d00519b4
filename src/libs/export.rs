//! Data export functionality for external analysis and backup.
//!
//! Exports customer, room and booking data in CSV, JSON or Excel format.
//! Bookings are flattened to one row per stay for the tabular formats and
//! kept nested for JSON.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use innkeep::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(ExportData::Customers)?;
//! # anyhow::Ok(())
//! ```

use crate::{
    db::{bookings::Bookings, customers::Customers, rooms::Rooms},
    libs::{customer::CustomerFilter, lifecycle::RecordStatus, messages::Message, room::RoomFilter},
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving nested booking details.
    Json,
    /// Excel workbook with one worksheet per data type.
    Excel,
}

/// Data categories available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// All customer records, soft-deleted ones included.
    Customers,
    /// All rooms with capacity, price and status.
    Rooms,
    /// All reservations flattened to one row per stay.
    Bookings,
    /// Customers, rooms and bookings in one export.
    All,
}

/// Flat customer record used by all export formats.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportCustomer {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub telephone: String,
    pub birthday: String,
    pub status: String,
}

/// Flat room record used by all export formats.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRoom {
    pub id: i32,
    pub room_number: String,
    pub description: String,
    pub max_capacity: Option<i32>,
    pub price_per_day: Option<f64>,
    pub room_type: String,
    pub status: String,
}

/// One stay of one reservation; the flattened booking row.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportStay {
    pub reservation_id: i32,
    pub customer: String,
    pub booked_at: String,
    pub room_id: i32,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub price: f64,
    pub reservation_total: f64,
}

fn status_text(status: RecordStatus) -> String {
    match status {
        RecordStatus::Active => "active".to_string(),
        RecordStatus::Deleted => "deleted".to_string(),
    }
}

/// Export handler holding the target format and output path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; generates a timestamped file name when no
    /// output path is given (e.g. `innkeep_export_20250115_143022.csv`).
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("innkeep_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export(&self, data_type: ExportData) -> Result<()> {
        match data_type {
            ExportData::Customers => self.write_rows(&Self::gather_customers()?, "Customers"),
            ExportData::Rooms => self.write_rows(&Self::gather_rooms()?, "Rooms"),
            ExportData::Bookings => self.write_rows(&Self::gather_stays()?, "Bookings"),
            ExportData::All => self.export_all(),
        }
    }

    fn gather_customers() -> Result<Vec<ExportCustomer>> {
        let customers = Customers::new()?.fetch(CustomerFilter::All)?;
        Ok(customers
            .into_iter()
            .map(|c| ExportCustomer {
                id: c.id.unwrap_or(0),
                full_name: c.full_name,
                email: c.email,
                telephone: c.telephone.unwrap_or_default(),
                birthday: c.birthday.map(|d| d.to_string()).unwrap_or_default(),
                status: status_text(c.status),
            })
            .collect())
    }

    fn gather_rooms() -> Result<Vec<ExportRoom>> {
        let mut rooms_db = Rooms::new()?;
        let rooms = rooms_db.fetch(RoomFilter::All)?;
        Ok(rooms
            .into_iter()
            .map(|r| ExportRoom {
                id: r.id.unwrap_or(0),
                room_number: r.room_number,
                description: r.description.unwrap_or_default(),
                max_capacity: r.max_capacity,
                price_per_day: r.price_per_day,
                room_type: r.room_type_id.to_string(),
                status: status_text(r.status),
            })
            .collect())
    }

    fn gather_stays() -> Result<Vec<ExportStay>> {
        let mut bookings = Bookings::new()?;
        let mut customers = Customers::new()?;
        let mut stays = Vec::new();
        for reservation in bookings.fetch_all()? {
            let reservation_id = reservation.id.unwrap_or(0);
            let customer = customers
                .get_by_id(reservation.customer_id)?
                .map(|c| c.full_name)
                .unwrap_or_else(|| reservation.customer_id.to_string());
            for detail in bookings.details_for_reservation(reservation_id)? {
                stays.push(ExportStay {
                    reservation_id,
                    customer: customer.clone(),
                    booked_at: reservation.booking_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default(),
                    room_id: detail.room_id,
                    check_in: detail.start_date.to_string(),
                    check_out: detail.end_date.to_string(),
                    nights: detail.nights(),
                    price: detail.actual_price,
                    reservation_total: reservation.total_price,
                });
            }
        }
        Ok(stays)
    }

    fn write_rows<T: Serialize>(&self, rows: &[T], sheet_name: &str) -> Result<()> {
        if rows.is_empty() {
            msg_info!(Message::NothingToExport);
            return Ok(());
        }

        match self.format {
            ExportFormat::Csv => self.write_csv(rows)?,
            ExportFormat::Json => self.write_json(rows)?,
            ExportFormat::Excel => self.write_excel(&[(sheet_name, rows)])?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_all(&self) -> Result<()> {
        let customers = Self::gather_customers()?;
        let rooms = Self::gather_rooms()?;
        let stays = Self::gather_stays()?;

        match self.format {
            ExportFormat::Json => {
                let combined = serde_json::json!({
                    "customers": customers,
                    "rooms": rooms,
                    "bookings": stays,
                });
                let mut file = File::create(&self.output_path)?;
                file.write_all(serde_json::to_string_pretty(&combined)?.as_bytes())?;
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                Self::fill_sheet(&mut workbook, "Customers", &customers)?;
                Self::fill_sheet(&mut workbook, "Rooms", &rooms)?;
                Self::fill_sheet(&mut workbook, "Bookings", &stays)?;
                workbook.save(&self.output_path)?;
            }
            ExportFormat::Csv => {
                // CSV cannot hold three heterogeneous tables in one file;
                // write one file per data type with a suffix and report the
                // paths actually written.
                let per_type = [
                    self.with_suffix("customers"),
                    self.with_suffix("rooms"),
                    self.with_suffix("bookings"),
                ];
                per_type[0].write_csv(&customers)?;
                per_type[1].write_csv(&rooms)?;
                per_type[2].write_csv(&stays)?;
                for exporter in &per_type {
                    msg_success!(Message::ExportCompleted(exporter.output_path.display().to_string()));
                }
                return Ok(());
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn with_suffix(&self, suffix: &str) -> Exporter {
        let stem = self.output_path.file_stem().and_then(|s| s.to_str()).unwrap_or("innkeep_export");
        let path = self.output_path.with_file_name(format!("{}_{}.csv", stem, suffix));
        Exporter {
            format: ExportFormat::Csv,
            output_path: path,
        }
    }

    fn write_csv<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        let mut file = File::create(&self.output_path)?;
        file.write_all(serde_json::to_string_pretty(rows)?.as_bytes())?;
        Ok(())
    }

    fn write_excel<T: Serialize>(&self, sheets: &[(&str, &[T])]) -> Result<()> {
        let mut workbook = Workbook::new();
        for (name, rows) in sheets {
            Self::fill_sheet(&mut workbook, name, rows)?;
        }
        workbook.save(&self.output_path)?;
        Ok(())
    }

    /// Serializes rows through JSON to get header names and cell values
    /// without per-type worksheet code.
    fn fill_sheet<T: Serialize>(workbook: &mut Workbook, name: &str, rows: &[T]) -> Result<()> {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;

        let header_format = Format::new().set_bold();
        let mut headers: Vec<String> = Vec::new();

        for (row_idx, row) in rows.iter().enumerate() {
            let value = serde_json::to_value(row)?;
            let object = match value.as_object() {
                Some(o) => o.clone(),
                None => continue,
            };

            if headers.is_empty() {
                headers = object.keys().cloned().collect();
                for (col, header) in headers.iter().enumerate() {
                    worksheet.write_with_format(0, col as u16, header, &header_format)?;
                }
            }

            for (col, header) in headers.iter().enumerate() {
                let cell = object.get(header).cloned().unwrap_or(serde_json::Value::Null);
                let row_n = (row_idx + 1) as u32;
                let col_n = col as u16;
                match cell {
                    serde_json::Value::Number(n) if n.is_f64() => {
                        worksheet.write(row_n, col_n, n.as_f64().unwrap_or(0.0))?;
                    }
                    serde_json::Value::Number(n) => {
                        worksheet.write(row_n, col_n, n.as_i64().unwrap_or(0) as f64)?;
                    }
                    serde_json::Value::String(s) => {
                        worksheet.write(row_n, col_n, s.as_str())?;
                    }
                    serde_json::Value::Bool(b) => {
                        worksheet.write(row_n, col_n, b.to_string().as_str())?;
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
