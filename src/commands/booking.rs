use crate::{
    db::{bookings::Bookings, customers::Customers, rooms::Rooms},
    libs::{
        booking::BookingOutcome,
        config::Config,
        lifecycle::WriteOutcome,
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct BookingArgs {
    #[command(subcommand)]
    command: BookingCommand,
}

#[derive(Debug, Subcommand)]
enum BookingCommand {
    /// Book a room for a customer
    Create {
        /// Customer ID the reservation belongs to
        customer: i32,
        /// Room ID to book
        room: i32,
        /// Check-in date as YYYY-MM-DD
        start: String,
        /// Check-out date as YYYY-MM-DD (exclusive)
        end: String,
        /// Nightly rate override; defaults to the room's price per day
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// List reservations
    List {
        /// Only reservations of this customer
        #[arg(short, long)]
        customer: Option<i32>,
        /// Reservations booked on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Reservations booked on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show the stays of one reservation
    Details {
        /// Reservation ID
        id: i32,
    },
    /// Add another room stay to a reservation
    AddRoom {
        /// Reservation ID
        id: i32,
        /// Room ID to add
        room: i32,
        /// Check-in date as YYYY-MM-DD
        start: String,
        /// Check-out date as YYYY-MM-DD (exclusive)
        end: String,
        /// Nightly rate override; defaults to the room's price per day
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// Change the dates or price of one stay
    EditStay {
        /// Reservation ID
        id: i32,
        /// Room ID of the stay
        room: i32,
        /// New check-in date as YYYY-MM-DD
        start: String,
        /// New check-out date as YYYY-MM-DD (exclusive)
        end: String,
        /// New total price for the stay
        price: f64,
    },
    /// Reassign a reservation or change its status
    Edit {
        /// Reservation ID
        id: i32,
        /// Move the reservation to this customer
        #[arg(short, long)]
        customer: Option<i32>,
        /// New status code (1 = confirmed)
        #[arg(short, long)]
        status: Option<i32>,
    },
    /// Remove one room stay from a reservation
    RemoveRoom {
        /// Reservation ID
        id: i32,
        /// Room ID to remove
        room: i32,
    },
    /// Delete a reservation and all of its stays
    Delete {
        /// Reservation ID
        id: i32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: BookingArgs) -> Result<()> {
    match args.command {
        BookingCommand::Create { customer, room, start, end, price } => handle_create(customer, room, start, end, price),
        BookingCommand::List { customer, from, to } => handle_list(customer, from, to),
        BookingCommand::Details { id } => handle_details(id),
        BookingCommand::AddRoom { id, room, start, end, price } => handle_add_room(id, room, start, end, price),
        BookingCommand::EditStay { id, room, start, end, price } => handle_edit_stay(id, room, start, end, price),
        BookingCommand::Edit { id, customer, status } => handle_edit(id, customer, status),
        BookingCommand::RemoveRoom { id, room } => handle_remove_room(id, room),
        BookingCommand::Delete { id, yes } => handle_delete(id, yes),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| crate::msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

/// Resolves the nightly rate for a room, preferring an explicit override.
fn nightly_rate(room_id: i32, price: Option<f64>) -> Result<Option<f64>> {
    if let Some(rate) = price {
        return Ok(Some(rate));
    }
    let mut rooms_db = Rooms::new()?;
    Ok(rooms_db.get_by_id(room_id)?.and_then(|room| room.price_per_day))
}

fn handle_create(customer: i32, room: i32, start: String, end: String, price: Option<f64>) -> Result<()> {
    let start_date = parse_date(&start)?;
    let end_date = parse_date(&end)?;

    let rate = match nightly_rate(room, price)? {
        Some(rate) => rate,
        None => {
            msg_error!(Message::RoomNotFound(room.to_string()));
            return Ok(());
        }
    };

    let mut bookings_db = Bookings::new()?;
    match bookings_db.create_with_detail(customer, room, start_date, end_date, rate)? {
        BookingOutcome::Created(id) => msg_success!(Message::BookingCreated(id)),
        BookingOutcome::Rejected(rejection) => msg_error!(Message::BookingRejected(rejection.to_string())),
    }
    Ok(())
}

fn handle_list(customer: Option<i32>, from: Option<String>, to: Option<String>) -> Result<()> {
    let mut bookings_db = Bookings::new()?;
    let config = Config::read()?;
    let currency = config.currency_symbol();

    if let Some(customer_id) = customer {
        let reservations = bookings_db.by_customer(customer_id)?;
        if reservations.is_empty() {
            msg_info!(Message::NoBookingsFound);
            return Ok(());
        }
        let name = Customers::new()?
            .get_by_id(customer_id)?
            .map(|c| c.full_name)
            .unwrap_or_else(|| customer_id.to_string());
        let rows: Vec<_> = reservations.into_iter().map(|r| (r, name.clone())).collect();
        msg_print!(Message::BookingsHeader, true);
        View::reservations(&rows, &currency)?;
        return Ok(());
    }

    if from.is_some() || to.is_some() {
        // A missing bound leaves that side of the range open
        let start = from.as_deref().map(parse_date).transpose()?;
        let end = to.as_deref().map(parse_date).transpose()?;
        let reservations = bookings_db.by_date_range(start, end)?;
        if reservations.is_empty() {
            msg_info!(Message::NoBookingsFound);
            return Ok(());
        }
        let mut customers_db = Customers::new()?;
        let mut rows = Vec::new();
        for reservation in reservations {
            let name = customers_db
                .get_by_id(reservation.customer_id)?
                .map(|c| c.full_name)
                .unwrap_or_else(|| reservation.customer_id.to_string());
            rows.push((reservation, name));
        }
        msg_print!(Message::BookingsHeader, true);
        View::reservations(&rows, &currency)?;
        return Ok(());
    }

    let rows = bookings_db.fetch_with_customers()?;
    if rows.is_empty() {
        msg_info!(Message::NoBookingsFound);
        return Ok(());
    }
    msg_print!(Message::BookingsHeader, true);
    View::reservations(&rows, &currency)?;
    Ok(())
}

fn handle_details(id: i32) -> Result<()> {
    let mut bookings_db = Bookings::new()?;

    if bookings_db.get_by_id(id)?.is_none() {
        msg_error!(Message::BookingNotFound(id));
        return Ok(());
    }

    let details = bookings_db.details_for_reservation(id)?;
    if details.is_empty() {
        msg_info!(Message::NoBookingsFound);
        return Ok(());
    }

    let config = Config::read()?;
    msg_print!(Message::BookingDetailsHeader(id), true);
    View::booking_details(&details, &config.currency_symbol())?;
    Ok(())
}

fn handle_add_room(id: i32, room: i32, start: String, end: String, price: Option<f64>) -> Result<()> {
    let start_date = parse_date(&start)?;
    let end_date = parse_date(&end)?;

    let rate = match nightly_rate(room, price)? {
        Some(rate) => rate,
        None => {
            msg_error!(Message::RoomNotFound(room.to_string()));
            return Ok(());
        }
    };

    let mut bookings_db = Bookings::new()?;
    match bookings_db.add_detail(id, room, start_date, end_date, rate)? {
        WriteOutcome::Written(_) => msg_success!(Message::BookingDetailAdded(id, room)),
        WriteOutcome::Invalid(error) => msg_error!(Message::BookingRejected(error.to_string())),
        WriteOutcome::Conflict(reason) => msg_error!(Message::BookingRejected(reason)),
        WriteOutcome::NotFound => msg_error!(Message::BookingNotFound(id)),
    }
    Ok(())
}

fn handle_edit_stay(id: i32, room: i32, start: String, end: String, price: f64) -> Result<()> {
    let start_date = parse_date(&start)?;
    let end_date = parse_date(&end)?;

    let mut bookings_db = Bookings::new()?;
    match bookings_db.update_detail(id, room, start_date, end_date, price)? {
        WriteOutcome::Written(_) => msg_success!(Message::BookingDetailUpdated(id, room)),
        WriteOutcome::Invalid(error) => msg_error!(Message::BookingRejected(error.to_string())),
        WriteOutcome::Conflict(reason) => msg_error!(Message::BookingRejected(reason)),
        WriteOutcome::NotFound => msg_error!(Message::BookingDetailNotFound(id, room)),
    }
    Ok(())
}

fn handle_edit(id: i32, customer: Option<i32>, status: Option<i32>) -> Result<()> {
    let mut bookings_db = Bookings::new()?;

    let mut reservation = match bookings_db.get_by_id(id)? {
        Some(r) => r,
        None => {
            msg_error!(Message::BookingNotFound(id));
            return Ok(());
        }
    };

    if let Some(customer_id) = customer {
        if Customers::new()?.get_by_id(customer_id)?.is_none() {
            msg_error!(Message::CustomerNotFound(customer_id.to_string()));
            return Ok(());
        }
        reservation.customer_id = customer_id;
    }
    if let Some(status) = status {
        reservation.status = Some(status);
    }

    match bookings_db.update(&reservation)? {
        WriteOutcome::Written(_) => msg_success!(Message::BookingUpdated(id)),
        _ => msg_error!(Message::BookingNotFound(id)),
    }
    Ok(())
}

fn handle_remove_room(id: i32, room: i32) -> Result<()> {
    let mut bookings_db = Bookings::new()?;

    if bookings_db.delete_detail(id, room)? {
        msg_success!(Message::BookingDetailRemoved(id, room));
    } else {
        msg_error!(Message::BookingDetailNotFound(id, room));
    }
    Ok(())
}

fn handle_delete(id: i32, yes: bool) -> Result<()> {
    let mut bookings_db = Bookings::new()?;

    if bookings_db.get_by_id(id)?.is_none() {
        msg_error!(Message::BookingNotFound(id));
        return Ok(());
    }
    let detail_count = bookings_db.details_for_reservation(id)?.len();

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteBooking(id, detail_count).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if bookings_db.delete(id)? {
        msg_success!(Message::BookingDeleted(id));
    } else {
        msg_error!(Message::BookingNotFound(id));
    }
    Ok(())
}
