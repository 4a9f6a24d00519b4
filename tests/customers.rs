#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use innkeep::db::bookings::Bookings;
    use innkeep::db::customers::Customers;
    use innkeep::db::room_types::RoomTypes;
    use innkeep::db::rooms::Rooms;
    use innkeep::libs::booking::BookingOutcome;
    use innkeep::libs::customer::{Customer, CustomerFilter};
    use innkeep::libs::lifecycle::{DeleteOutcome, RecordStatus, WriteOutcome};
    use innkeep::libs::room::Room;
    use innkeep::libs::room_type::RoomType;
    use innkeep::libs::validation::ValidationError;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests touching it must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct CustomerTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for CustomerTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CustomerTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn written_id(outcome: WriteOutcome) -> i32 {
        match outcome {
            WriteOutcome::Written(id) => id,
            other => panic!("expected Written, got {:?}", other),
        }
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_create_and_fetch(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let customer = Customer::new("Alice Nguyen", "alice@example.com", Some("+1 555 123 4567".to_string()), None, None);
        let id = written_id(customers.create(&customer).unwrap());
        assert!(id > 0);

        let stored = customers.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.full_name, "Alice Nguyen");
        assert_eq!(stored.email, "alice@example.com");
        assert_eq!(stored.status, RecordStatus::Active);
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_create_rejects_invalid_email(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let customer = Customer::new("Bob", "not-an-email", None, None, None);
        let outcome = customers.create(&customer).unwrap();
        assert!(matches!(outcome, WriteOutcome::Invalid(ValidationError::EmailInvalid(_))));

        assert!(customers.fetch(CustomerFilter::All).unwrap().is_empty());
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_create_rejects_short_phone(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let customer = Customer::new("Bob", "bob@example.com", Some("12345".to_string()), None, None);
        let outcome = customers.create(&customer).unwrap();
        assert!(matches!(outcome, WriteOutcome::Invalid(ValidationError::PhoneInvalid(_))));
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_email_unique_even_after_soft_delete(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let first = Customer::new("First", "shared@example.com", None, None, None);
        let id = written_id(customers.create(&first).unwrap());

        // Soft-delete the holder by giving them a reservation first
        let mut room_types = RoomTypes::new().unwrap();
        let type_id = written_id(room_types.create(&RoomType::new("Single", None, None)).unwrap());
        let mut rooms = Rooms::new().unwrap();
        let room_id = written_id(rooms.create(&Room::new("101", None, Some(1), Some(80.0), type_id)).unwrap());

        let mut bookings = Bookings::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        assert!(matches!(bookings.create_with_detail(id, room_id, start, end, 80.0).unwrap(), BookingOutcome::Created(_)));

        assert_eq!(customers.delete(id).unwrap(), DeleteOutcome::SoftDeleted);

        // The email is still taken by the soft-deleted row
        let second = Customer::new("Second", "shared@example.com", None, None, None);
        let outcome = customers.create(&second).unwrap();
        assert!(matches!(outcome, WriteOutcome::Conflict(_)));
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_update_keeps_own_email(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let id = written_id(customers.create(&Customer::new("Carol", "carol@example.com", None, None, None)).unwrap());
        written_id(customers.create(&Customer::new("Dave", "dave@example.com", None, None, None)).unwrap());

        // Updating without changing the email must not conflict with itself
        let mut carol = customers.get_by_id(id).unwrap().unwrap();
        carol.full_name = "Carol Jones".to_string();
        assert_eq!(customers.update(&carol).unwrap(), WriteOutcome::Written(id));

        // Taking another customer's email must conflict
        carol.email = "dave@example.com".to_string();
        assert!(matches!(customers.update(&carol).unwrap(), WriteOutcome::Conflict(_)));
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_hard_delete_without_bookings(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let id = written_id(customers.create(&Customer::new("Eve", "eve@example.com", None, None, None)).unwrap());

        assert_eq!(customers.delete(id).unwrap(), DeleteOutcome::HardDeleted);
        assert!(customers.get_by_id(id).unwrap().is_none());

        // The email is free again after a hard delete
        let outcome = customers.create(&Customer::new("Eve Again", "eve@example.com", None, None, None)).unwrap();
        assert!(matches!(outcome, WriteOutcome::Written(_)));
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_delete_missing(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();
        assert_eq!(customers.delete(4242).unwrap(), DeleteOutcome::NotFound);
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_customer_filters(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let frank = written_id(customers.create(&Customer::new("Frank Miller", "frank@example.com", None, None, None)).unwrap());
        written_id(customers.create(&Customer::new("Grace Kim", "grace@example.com", None, None, None)).unwrap());

        let found = customers.fetch(CustomerFilter::Search("frank".to_string())).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(frank));

        // Search matches email too
        let by_email = customers.fetch(CustomerFilter::Search("grace@".to_string())).unwrap();
        assert_eq!(by_email.len(), 1);

        assert_eq!(customers.fetch(CustomerFilter::Active).unwrap().len(), 2);
        assert_eq!(customers.fetch(CustomerFilter::All).unwrap().len(), 2);
    }

    #[test_context(CustomerTestContext)]
    #[test]
    fn test_get_by_email_skips_deleted(_ctx: &mut CustomerTestContext) {
        let mut customers = Customers::new().unwrap();

        let id = written_id(customers.create(&Customer::new("Henry", "henry@example.com", None, None, None)).unwrap());
        assert!(customers.get_by_email("henry@example.com").unwrap().is_some());

        // Give Henry a reservation so the delete downgrades to a status flip
        let mut room_types = RoomTypes::new().unwrap();
        let type_id = written_id(room_types.create(&RoomType::new("Double", None, None)).unwrap());
        let mut rooms = Rooms::new().unwrap();
        let room_id = written_id(rooms.create(&Room::new("201", None, Some(2), Some(120.0), type_id)).unwrap());
        let mut bookings = Bookings::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        bookings.create_with_detail(id, room_id, start, end, 120.0).unwrap();

        assert_eq!(customers.delete(id).unwrap(), DeleteOutcome::SoftDeleted);

        // Lookup by email only sees active customers
        assert!(customers.get_by_email("henry@example.com").unwrap().is_none());
        assert_eq!(customers.get_by_id(id).unwrap().unwrap().status, RecordStatus::Deleted);
    }
}
