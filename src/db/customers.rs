use crate::db::db::Db;
use crate::libs::customer::{Customer, CustomerFilter};
use crate::libs::lifecycle::{DeleteOutcome, RecordStatus, WriteOutcome};
use crate::libs::validation::{validate_birthday, validate_email, validate_phone, ValidationError};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_CUSTOMER: &str = "INSERT INTO customers (full_name, email, telephone, birthday, password, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_CUSTOMER: &str = "UPDATE customers SET full_name = ?2, email = ?3, telephone = ?4, birthday = ?5, password = ?6 WHERE id = ?1";
const SOFT_DELETE_CUSTOMER: &str = "UPDATE customers SET status = ?2 WHERE id = ?1";
const HARD_DELETE_CUSTOMER: &str = "DELETE FROM customers WHERE id = ?1";
const SELECT_CUSTOMERS: &str = "SELECT id, full_name, email, telephone, birthday, password, status FROM customers";
const SELECT_ACTIVE: &str = "WHERE status = 1 ORDER BY full_name";
const SELECT_ALL: &str = "ORDER BY full_name";
const SELECT_SEARCH: &str = "WHERE status = 1 AND (full_name LIKE ?1 OR email LIKE ?1 OR telephone LIKE ?1) ORDER BY full_name";
const SELECT_BY_ID: &str = "WHERE id = ?1";
const SELECT_BY_EMAIL_ACTIVE: &str = "WHERE email = ?1 AND status = 1";
const COUNT_EMAIL: &str = "SELECT COUNT(*) FROM customers WHERE email = ?1";
const COUNT_EMAIL_FOR_OTHER: &str = "SELECT COUNT(*) FROM customers WHERE email = ?1 AND id != ?2";
const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservations WHERE customer_id = ?1";

fn map_customer(row: &Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        full_name: row.get(1)?,
        email: row.get(2)?,
        telephone: row.get(3)?,
        birthday: row.get(4)?,
        password: row.get(5)?,
        status: RecordStatus::from_i32(row.get(6)?),
    })
}

pub struct Customers {
    conn: Connection,
}

impl Customers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    fn validate(customer: &Customer) -> Option<ValidationError> {
        validate_email(&customer.email)
            .and_then(|_| validate_phone(customer.telephone.as_deref()))
            .and_then(|_| validate_birthday(customer.birthday))
            .err()
    }

    /// Validates and inserts a new active customer. Email uniqueness is
    /// checked against every row regardless of status.
    pub fn create(&mut self, customer: &Customer) -> Result<WriteOutcome> {
        if let Some(error) = Self::validate(customer) {
            return Ok(WriteOutcome::Invalid(error));
        }
        if self.email_exists(&customer.email)? {
            return Ok(WriteOutcome::Conflict(format!("email '{}' already exists", customer.email)));
        }

        self.conn.execute(
            INSERT_CUSTOMER,
            params![
                customer.full_name,
                customer.email,
                customer.telephone,
                customer.birthday,
                customer.password,
                RecordStatus::Active.as_i32()
            ],
        )?;
        Ok(WriteOutcome::Written(self.conn.last_insert_rowid() as i32))
    }

    /// Validates and updates an existing customer's contact fields. The
    /// status column is left untouched; deletion is the only status change.
    pub fn update(&mut self, customer: &Customer) -> Result<WriteOutcome> {
        let id = match customer.id {
            Some(id) => id,
            None => return Ok(WriteOutcome::NotFound),
        };
        if let Some(error) = Self::validate(customer) {
            return Ok(WriteOutcome::Invalid(error));
        }
        if self.email_exists_for_other(&customer.email, id)? {
            return Ok(WriteOutcome::Conflict(format!("email '{}' already exists", customer.email)));
        }

        let affected = self.conn.execute(
            UPDATE_CUSTOMER,
            params![id, customer.full_name, customer.email, customer.telephone, customer.birthday, customer.password],
        )?;
        if affected == 0 {
            return Ok(WriteOutcome::NotFound);
        }
        Ok(WriteOutcome::Written(id))
    }

    /// Lifecycle-aware delete: customers with booking history are kept as
    /// soft-deleted rows, customers without any bookings are removed.
    pub fn delete(&mut self, id: i32) -> Result<DeleteOutcome> {
        if self.get_by_id(id)?.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let reservations: i64 = self.conn.query_row(COUNT_RESERVATIONS, params![id], |row| row.get(0))?;
        if reservations > 0 {
            self.conn.execute(SOFT_DELETE_CUSTOMER, params![id, RecordStatus::Deleted.as_i32()])?;
            Ok(DeleteOutcome::SoftDeleted)
        } else {
            self.conn.execute(HARD_DELETE_CUSTOMER, params![id])?;
            Ok(DeleteOutcome::HardDeleted)
        }
    }

    pub fn fetch(&mut self, filter: CustomerFilter) -> Result<Vec<Customer>> {
        let (sql, pattern) = match &filter {
            CustomerFilter::Active => (format!("{} {}", SELECT_CUSTOMERS, SELECT_ACTIVE), None),
            CustomerFilter::All => (format!("{} {}", SELECT_CUSTOMERS, SELECT_ALL), None),
            CustomerFilter::Search(term) => (format!("{} {}", SELECT_CUSTOMERS, SELECT_SEARCH), Some(format!("%{}%", term))),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let customer_iter = match &pattern {
            Some(p) => stmt.query_map(params![p], map_customer)?,
            None => stmt.query_map([], map_customer)?,
        };

        let mut customers = Vec::new();
        for customer in customer_iter {
            customers.push(customer?);
        }
        Ok(customers)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Customer>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_CUSTOMERS, SELECT_BY_ID), params![id], map_customer)
            .optional()
            .map_err(Into::into)
    }

    /// Looks up an active customer by email. Soft-deleted customers do not
    /// match here even though their email still blocks reuse.
    pub fn get_by_email(&mut self, email: &str) -> Result<Option<Customer>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_CUSTOMERS, SELECT_BY_EMAIL_ACTIVE), params![email], map_customer)
            .optional()
            .map_err(Into::into)
    }

    /// True when any row, active or deleted, holds this email.
    pub fn email_exists(&mut self, email: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_EMAIL, params![email], |row| row.get(0))?;
        Ok(count > 0)
    }

    pub fn email_exists_for_other(&mut self, email: &str, exclude_id: i32) -> Result<bool> {
        let count: i64 = self.conn.query_row(COUNT_EMAIL_FOR_OTHER, params![email, exclude_id], |row| row.get(0))?;
        Ok(count > 0)
    }
}
