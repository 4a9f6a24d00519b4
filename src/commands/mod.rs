pub mod booking;
pub mod customer;
pub mod export;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod room;
pub mod room_type;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage customer records")]
    Customer(customer::CustomerArgs),
    #[command(about = "Manage room inventory")]
    Room(room::RoomArgs),
    #[command(about = "Manage room types", name = "room-type")]
    RoomType(room_type::RoomTypeArgs),
    #[command(about = "Manage booking reservations")]
    Booking(booking::BookingArgs),
    #[command(about = "Export data to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database schema migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Customer(args) => customer::cmd(args),
            Commands::Room(args) => room::cmd(args),
            Commands::RoomType(args) => room_type::cmd(args),
            Commands::Booking(args) => booking::cmd(args),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
