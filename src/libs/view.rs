use crate::libs::booking::BookingDetail;
use crate::libs::customer::Customer;
use crate::libs::lifecycle::RecordStatus;
use crate::libs::room::Room;
use crate::libs::room_type::RoomType;
use anyhow::Result;
use prettytable::{row, Table};

fn status_label(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Active => "active",
        RecordStatus::Deleted => "deleted",
    }
}

pub struct View {}

impl View {
    pub fn customers(customers: &[Customer]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "PHONE", "BIRTHDAY", "STATUS"]);
        for customer in customers {
            table.add_row(row![
                customer.id.unwrap_or(0),
                customer.full_name,
                customer.email,
                customer.telephone.as_deref().unwrap_or("-"),
                customer.birthday.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
                status_label(customer.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn room_types(room_types: &[RoomType]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "NOTE"]);
        for room_type in room_types {
            table.add_row(row![
                room_type.id.unwrap_or(0),
                room_type.name,
                room_type.description.as_deref().unwrap_or("-"),
                room_type.note.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn rooms(rooms: &[Room], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NUMBER", "DESCRIPTION", "CAPACITY", "PRICE/DAY", "TYPE", "STATUS"]);
        for room in rooms {
            table.add_row(row![
                room.id.unwrap_or(0),
                room.room_number,
                room.description.as_deref().unwrap_or("-"),
                room.max_capacity.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
                room.price_per_day.map(|p| format!("{}{:.2}", currency, p)).unwrap_or_else(|| "-".to_string()),
                room.room_type_id,
                status_label(room.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Reservation rows joined with the owning customer's name.
    pub fn reservations(rows: &[(crate::libs::booking::Reservation, String)], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CUSTOMER", "BOOKED AT", "TOTAL", "STATUS"]);
        for (reservation, customer_name) in rows {
            table.add_row(row![
                reservation.id.unwrap_or(0),
                customer_name,
                reservation
                    .booking_date
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
                format!("{}{:.2}", currency, reservation.total_price),
                reservation.status.unwrap_or(crate::libs::booking::STATUS_CONFIRMED)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn booking_details(details: &[BookingDetail], currency: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ROOM", "CHECK-IN", "CHECK-OUT", "NIGHTS", "PRICE"]);
        for detail in details {
            table.add_row(row![
                detail.room_id,
                detail.start_date,
                detail.end_date,
                detail.nights(),
                format!("{}{:.2}", currency, detail.actual_price)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
