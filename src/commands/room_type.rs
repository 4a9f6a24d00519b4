use crate::{
    db::room_types::RoomTypes,
    libs::{
        lifecycle::{TypeDeleteOutcome, WriteOutcome},
        messages::Message,
        room_type::RoomType,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct RoomTypeArgs {
    #[command(subcommand)]
    command: RoomTypeCommand,
}

#[derive(Debug, Subcommand)]
enum RoomTypeCommand {
    /// Create a new room type
    Create {
        /// Type name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Internal note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List room types
    List {
        /// Filter by name, description or note substring
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Edit a room type interactively
    Edit {
        /// Room type ID to edit
        id: i32,
    },
    /// Delete a room type (fails while rooms reference it)
    Delete {
        /// Room type ID to delete
        id: i32,
    },
}

pub fn cmd(args: RoomTypeArgs) -> Result<()> {
    match args.command {
        RoomTypeCommand::Create { name, description, note } => handle_create(name, description, note),
        RoomTypeCommand::List { search } => handle_list(search),
        RoomTypeCommand::Edit { id } => handle_edit(id),
        RoomTypeCommand::Delete { id } => handle_delete(id),
    }
}

fn handle_create(name: String, description: Option<String>, note: Option<String>) -> Result<()> {
    let mut types_db = RoomTypes::new()?;
    let room_type = RoomType::new(&name, description, note);

    match types_db.create(&room_type)? {
        WriteOutcome::Written(_) => msg_success!(Message::RoomTypeCreated(name)),
        WriteOutcome::Invalid(error) => msg_error!(Message::Custom(error.to_string())),
        WriteOutcome::Conflict(reason) => msg_error!(Message::Custom(reason)),
        WriteOutcome::NotFound => msg_error!(Message::RoomTypeNotFound(name)),
    }
    Ok(())
}

fn handle_list(search: Option<String>) -> Result<()> {
    let mut types_db = RoomTypes::new()?;
    let room_types = match search {
        Some(term) => types_db.search(&term)?,
        None => types_db.list()?,
    };

    if room_types.is_empty() {
        msg_info!(Message::NoRoomTypesFound);
        return Ok(());
    }

    msg_print!(Message::RoomTypesHeader, true);
    View::room_types(&room_types)?;
    Ok(())
}

fn handle_edit(id: i32) -> Result<()> {
    let mut types_db = RoomTypes::new()?;

    let mut room_type = match types_db.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_error!(Message::RoomTypeNotFound(id.to_string()));
            return Ok(());
        }
    };

    let theme = ColorfulTheme::default();

    room_type.name = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomTypeName.to_string())
        .with_initial_text(room_type.name.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomTypeDescription.to_string())
        .with_initial_text(room_type.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    room_type.description = Some(description).filter(|d| !d.is_empty());

    let note: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRoomTypeNote.to_string())
        .with_initial_text(room_type.note.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    room_type.note = Some(note).filter(|n| !n.is_empty());

    match types_db.update(&room_type)? {
        WriteOutcome::Written(_) => msg_success!(Message::RoomTypeUpdated(room_type.name)),
        WriteOutcome::Invalid(error) => msg_error!(Message::Custom(error.to_string())),
        WriteOutcome::Conflict(reason) => msg_error!(Message::Custom(reason)),
        WriteOutcome::NotFound => msg_error!(Message::RoomTypeNotFound(id.to_string())),
    }
    Ok(())
}

fn handle_delete(id: i32) -> Result<()> {
    let mut types_db = RoomTypes::new()?;

    match types_db.delete(id)? {
        TypeDeleteOutcome::Deleted => msg_success!(Message::RoomTypeDeleted(id)),
        TypeDeleteOutcome::InUse(count) => msg_error!(Message::RoomTypeInUse(id, count)),
        TypeDeleteOutcome::NotFound => msg_error!(Message::RoomTypeNotFound(id.to_string())),
    }
    Ok(())
}
