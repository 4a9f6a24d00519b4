use crate::{
    db::customers::Customers,
    libs::{
        customer::{Customer, CustomerFilter},
        lifecycle::{DeleteOutcome, WriteOutcome},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
enum CustomerCommand {
    /// Register a new customer
    Create {
        /// Full name
        name: String,
        /// Email address (unique across all customers)
        email: String,
        /// Telephone number
        #[arg(short, long)]
        phone: Option<String>,
        /// Birthday as YYYY-MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
        /// Account password
        #[arg(long)]
        password: Option<String>,
    },
    /// List customers
    List {
        /// Include soft-deleted customers
        #[arg(long)]
        all: bool,
        /// Filter by name, email or phone substring
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Edit a customer interactively
    Edit {
        /// Customer ID to edit
        id: i32,
    },
    /// Delete a customer (soft delete when bookings exist)
    Delete {
        /// Customer ID to delete
        id: i32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: CustomerArgs) -> Result<()> {
    match args.command {
        CustomerCommand::Create {
            name,
            email,
            phone,
            birthday,
            password,
        } => handle_create(name, email, phone, birthday, password),
        CustomerCommand::List { all, search } => handle_list(all, search),
        CustomerCommand::Edit { id } => handle_edit(id),
        CustomerCommand::Delete { id, yes } => handle_delete(id, yes),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| crate::msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

fn handle_create(name: String, email: String, phone: Option<String>, birthday: Option<String>, password: Option<String>) -> Result<()> {
    let birthday = birthday.as_deref().map(parse_date).transpose()?;

    let mut customers_db = Customers::new()?;
    let customer = Customer::new(&name, &email, phone, birthday, password);

    match customers_db.create(&customer)? {
        WriteOutcome::Written(_) => msg_success!(Message::CustomerCreated(name)),
        WriteOutcome::Invalid(error) => msg_error!(Message::CustomerRejected(error.to_string())),
        WriteOutcome::Conflict(_) => msg_error!(Message::EmailAlreadyExists(email)),
        WriteOutcome::NotFound => msg_error!(Message::CustomerNotFound(name)),
    }
    Ok(())
}

fn handle_list(all: bool, search: Option<String>) -> Result<()> {
    let mut customers_db = Customers::new()?;

    let filter = match (all, search) {
        (_, Some(term)) => CustomerFilter::Search(term),
        (true, None) => CustomerFilter::All,
        (false, None) => CustomerFilter::Active,
    };
    let customers = customers_db.fetch(filter)?;

    if customers.is_empty() {
        msg_info!(Message::NoCustomersFound);
        return Ok(());
    }

    msg_print!(Message::CustomersHeader, true);
    View::customers(&customers)?;
    Ok(())
}

fn handle_edit(id: i32) -> Result<()> {
    let mut customers_db = Customers::new()?;

    let mut customer = match customers_db.get_by_id(id)? {
        Some(c) => c,
        None => {
            msg_error!(Message::CustomerNotFound(id.to_string()));
            return Ok(());
        }
    };

    let theme = ColorfulTheme::default();

    customer.full_name = Input::with_theme(&theme)
        .with_prompt(Message::PromptCustomerName.to_string())
        .with_initial_text(customer.full_name.clone())
        .interact_text()?;

    customer.email = Input::with_theme(&theme)
        .with_prompt(Message::PromptCustomerEmail.to_string())
        .with_initial_text(customer.email.clone())
        .interact_text()?;

    let phone: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptCustomerPhone.to_string())
        .with_initial_text(customer.telephone.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    customer.telephone = Some(phone).filter(|p| !p.is_empty());

    let birthday: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptCustomerBirthday.to_string())
        .with_initial_text(customer.birthday.map(|d| d.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    customer.birthday = if birthday.is_empty() { None } else { Some(parse_date(&birthday)?) };

    match customers_db.update(&customer)? {
        WriteOutcome::Written(_) => msg_success!(Message::CustomerUpdated(customer.full_name)),
        WriteOutcome::Invalid(error) => msg_error!(Message::CustomerRejected(error.to_string())),
        WriteOutcome::Conflict(_) => msg_error!(Message::EmailAlreadyExists(customer.email)),
        WriteOutcome::NotFound => msg_error!(Message::CustomerNotFound(id.to_string())),
    }
    Ok(())
}

fn handle_delete(id: i32, yes: bool) -> Result<()> {
    let mut customers_db = Customers::new()?;

    let customer = match customers_db.get_by_id(id)? {
        Some(c) => c,
        None => {
            msg_error!(Message::CustomerNotFound(id.to_string()));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteCustomer(customer.full_name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match customers_db.delete(id)? {
        DeleteOutcome::HardDeleted => msg_success!(Message::CustomerHardDeleted(id)),
        DeleteOutcome::SoftDeleted => msg_success!(Message::CustomerSoftDeleted(id)),
        DeleteOutcome::NotFound => msg_error!(Message::CustomerNotFound(id.to_string())),
    }
    Ok(())
}
