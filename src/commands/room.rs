use crate::{
    db::rooms::Rooms,
    libs::{
        config::Config,
        lifecycle::{DeleteOutcome, WriteOutcome},
        messages::Message,
        room::{Room, RoomFilter},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct RoomArgs {
    #[command(subcommand)]
    command: RoomCommand,
}

#[derive(Debug, Subcommand)]
enum RoomCommand {
    /// Add a room to the inventory
    Create {
        /// Room number (unique across all rooms)
        number: String,
        /// Room type ID
        #[arg(short, long)]
        room_type: i32,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Maximum capacity
        #[arg(short, long)]
        capacity: Option<i32>,
        /// Price per day
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// List rooms
    List {
        /// Include soft-deleted rooms
        #[arg(long)]
        all: bool,
        /// Only rooms of this room type
        #[arg(short, long)]
        room_type: Option<i32>,
        /// Filter by room number or description substring
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List rooms free for a date interval
    Available {
        /// Check-in date as YYYY-MM-DD
        start: String,
        /// Check-out date as YYYY-MM-DD (exclusive)
        end: String,
    },
    /// Edit a room interactively
    Edit {
        /// Room ID to edit
        id: i32,
    },
    /// Delete a room (soft delete when bookings exist)
    Delete {
        /// Room ID to delete
        id: i32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: RoomArgs) -> Result<()> {
    match args.command {
        RoomCommand::Create {
            number,
            room_type,
            description,
            capacity,
            price,
        } => handle_create(number, room_type, description, capacity, price),
        RoomCommand::List { all, room_type, search } => handle_list(all, room_type, search),
        RoomCommand::Available { start, end } => handle_available(start, end),
        RoomCommand::Edit { id } => handle_edit(id),
        RoomCommand::Delete { id, yes } => handle_delete(id, yes),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| crate::msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

fn handle_create(number: String, room_type: i32, description: Option<String>, capacity: Option<i32>, price: Option<f64>) -> Result<()> {
    let mut rooms_db = Rooms::new()?;
    let room = Room::new(&number, description, capacity, price, room_type);

    match rooms_db.create(&room)? {
        WriteOutcome::Written(_) => msg_success!(Message::RoomCreated(number)),
        WriteOutcome::Invalid(error) => msg_error!(Message::RoomRejected(error.to_string())),
        WriteOutcome::Conflict(_) => msg_error!(Message::RoomNumberAlreadyExists(number)),
        WriteOutcome::NotFound => msg_error!(Message::RoomNotFound(number)),
    }
    Ok(())
}

fn handle_list(all: bool, room_type: Option<i32>, search: Option<String>) -> Result<()> {
    let mut rooms_db = Rooms::new()?;

    let filter = match (all, room_type, search) {
        (_, _, Some(term)) => RoomFilter::Search(term),
        (_, Some(type_id), None) => RoomFilter::ByType(type_id),
        (true, None, None) => RoomFilter::All,
        (false, None, None) => RoomFilter::Active,
    };
    let rooms = rooms_db.fetch(filter)?;

    if rooms.is_empty() {
        msg_info!(Message::NoRoomsFound);
        return Ok(());
    }

    let config = Config::read()?;
    msg_print!(Message::RoomsHeader, true);
    View::rooms(&rooms, &config.currency_symbol())?;
    Ok(())
}

fn handle_available(start: String, end: String) -> Result<()> {
    let start_date = parse_date(&start)?;
    let end_date = parse_date(&end)?;
    if end_date <= start_date {
        msg_error!(Message::InvalidInterval);
        return Ok(());
    }

    let mut rooms_db = Rooms::new()?;
    let rooms = rooms_db.available_between(start_date, end_date)?;

    if rooms.is_empty() {
        msg_info!(Message::NoRoomsAvailable);
        return Ok(());
    }

    let config = Config::read()?;
    msg_print!(Message::AvailableRoomsHeader(start, end), true);
    View::rooms(&rooms, &config.currency_symbol())?;
    Ok(())
}

fn handle_edit(id: i32) -> Result<()> {
    let mut rooms_db = Rooms::new()?;

    let mut room = match rooms_db.get_by_id(id)? {
        Some(r) => r,
        None => {
            msg_error!(Message::RoomNotFound(id.to_string()));
            return Ok(());
        }
    };

    let theme = ColorfulTheme::default();

    room.room_number = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomNumber.to_string())
        .with_initial_text(room.room_number.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomDescription.to_string())
        .with_initial_text(room.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    room.description = Some(description).filter(|d| !d.is_empty());

    let capacity: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomCapacity.to_string())
        .with_initial_text(room.max_capacity.map(|c| c.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    room.max_capacity = if capacity.is_empty() { None } else { Some(capacity.parse()?) };

    let price: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomPrice.to_string())
        .with_initial_text(room.price_per_day.map(|p| p.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    room.price_per_day = if price.is_empty() { None } else { Some(price.parse()?) };

    let room_type: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomTypeId.to_string())
        .with_initial_text(room.room_type_id.to_string())
        .interact_text()?;
    room.room_type_id = room_type.parse()?;

    match rooms_db.update(&room)? {
        WriteOutcome::Written(_) => msg_success!(Message::RoomUpdated(room.room_number)),
        WriteOutcome::Invalid(error) => msg_error!(Message::RoomRejected(error.to_string())),
        WriteOutcome::Conflict(_) => msg_error!(Message::RoomNumberAlreadyExists(room.room_number)),
        WriteOutcome::NotFound => msg_error!(Message::RoomNotFound(id.to_string())),
    }
    Ok(())
}

fn handle_delete(id: i32, yes: bool) -> Result<()> {
    let mut rooms_db = Rooms::new()?;

    let room = match rooms_db.get_by_id(id)? {
        Some(r) => r,
        None => {
            msg_error!(Message::RoomNotFound(id.to_string()));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteRoom(room.room_number.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match rooms_db.delete(id)? {
        DeleteOutcome::HardDeleted => msg_success!(Message::RoomHardDeleted(id)),
        DeleteOutcome::SoftDeleted => msg_success!(Message::RoomSoftDeleted(id)),
        DeleteOutcome::NotFound => msg_error!(Message::RoomNotFound(id.to_string())),
    }
    Ok(())
}
