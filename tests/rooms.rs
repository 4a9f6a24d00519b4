#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use innkeep::db::bookings::Bookings;
    use innkeep::db::customers::Customers;
    use innkeep::db::room_types::RoomTypes;
    use innkeep::db::rooms::Rooms;
    use innkeep::libs::customer::Customer;
    use innkeep::libs::lifecycle::{DeleteOutcome, RecordStatus, WriteOutcome};
    use innkeep::libs::room::{Room, RoomFilter};
    use innkeep::libs::room_type::RoomType;
    use innkeep::libs::validation::ValidationError;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests touching it must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct RoomTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for RoomTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RoomTestContext {
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

    fn seed_room_type(name: &str) -> i32 {
        let mut room_types = RoomTypes::new().unwrap();
        written_id(room_types.create(&RoomType::new(name, None, None)).unwrap())
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_create_and_fetch(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();

        let room = Room::new("101", Some("Garden view".to_string()), Some(2), Some(95.5), type_id);
        let id = written_id(rooms.create(&room).unwrap());

        let stored = rooms.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.room_number, "101");
        assert_eq!(stored.max_capacity, Some(2));
        assert_eq!(stored.price_per_day, Some(95.5));
        assert_eq!(stored.room_type_id, type_id);
        assert_eq!(stored.status, RecordStatus::Active);
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_number_must_be_unique(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();

        written_id(rooms.create(&Room::new("101", None, None, None, type_id)).unwrap());

        let duplicate = rooms.create(&Room::new("101", None, None, None, type_id)).unwrap();
        assert!(matches!(duplicate, WriteOutcome::Conflict(_)));
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_create_rejects_bad_fields(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();

        let no_number = rooms.create(&Room::new("  ", None, None, None, type_id)).unwrap();
        assert!(matches!(no_number, WriteOutcome::Invalid(ValidationError::RoomNumberMissing)));

        let zero_capacity = rooms.create(&Room::new("102", None, Some(0), None, type_id)).unwrap();
        assert!(matches!(zero_capacity, WriteOutcome::Invalid(ValidationError::CapacityNotPositive)));

        let negative_price = rooms.create(&Room::new("102", None, Some(2), Some(-1.0), type_id)).unwrap();
        assert!(matches!(negative_price, WriteOutcome::Invalid(ValidationError::PriceNegative)));

        let no_type = rooms.create(&Room::new("102", None, Some(2), Some(10.0), 0)).unwrap();
        assert!(matches!(no_type, WriteOutcome::Invalid(ValidationError::RoomTypeMissing)));
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_update_keeps_own_number(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();

        let id = written_id(rooms.create(&Room::new("101", None, None, None, type_id)).unwrap());
        written_id(rooms.create(&Room::new("102", None, None, None, type_id)).unwrap());

        // Keeping the same number is not a conflict
        let mut room = rooms.get_by_id(id).unwrap().unwrap();
        room.price_per_day = Some(110.0);
        assert_eq!(rooms.update(&room).unwrap(), WriteOutcome::Written(id));

        // Taking the neighbor's number is
        room.room_number = "102".to_string();
        assert!(matches!(rooms.update(&room).unwrap(), WriteOutcome::Conflict(_)));
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_hard_delete_when_never_booked(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();

        let id = written_id(rooms.create(&Room::new("101", None, None, None, type_id)).unwrap());

        assert_eq!(rooms.delete(id).unwrap(), DeleteOutcome::HardDeleted);
        assert!(rooms.get_by_id(id).unwrap().is_none());
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_soft_delete_with_booking_history(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();
        let mut customers = Customers::new().unwrap();
        let mut bookings = Bookings::new().unwrap();

        let room_id = written_id(rooms.create(&Room::new("101", None, None, Some(100.0), type_id)).unwrap());
        let customer_id = written_id(customers.create(&Customer::new("Guest", "guest@example.com", None, None, None)).unwrap());

        let start = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 5, 3).unwrap();
        bookings.create_with_detail(customer_id, room_id, start, end, 100.0).unwrap();

        assert_eq!(rooms.delete(room_id).unwrap(), DeleteOutcome::SoftDeleted);

        let stored = rooms.get_by_id(room_id).unwrap().unwrap();
        assert_eq!(stored.status, RecordStatus::Deleted);

        // Soft-deleted rooms drop out of active listings but keep the row
        assert!(rooms.fetch(RoomFilter::Active).unwrap().is_empty());
        assert_eq!(rooms.fetch(RoomFilter::All).unwrap().len(), 1);

        // And the number stays taken
        let reuse = rooms.create(&Room::new("101", None, None, None, type_id)).unwrap();
        assert!(matches!(reuse, WriteOutcome::Conflict(_)));
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_room_filters(_ctx: &mut RoomTestContext) {
        let singles = seed_room_type("Single");
        let doubles = seed_room_type("Double");
        let mut rooms = Rooms::new().unwrap();

        written_id(rooms.create(&Room::new("101", Some("quiet side".to_string()), None, None, singles)).unwrap());
        written_id(rooms.create(&Room::new("102", None, None, None, singles)).unwrap());
        written_id(rooms.create(&Room::new("201", None, None, None, doubles)).unwrap());

        assert_eq!(rooms.fetch(RoomFilter::ByType(singles)).unwrap().len(), 2);
        assert_eq!(rooms.fetch(RoomFilter::ByType(doubles)).unwrap().len(), 1);

        let found = rooms.fetch(RoomFilter::Search("quiet".to_string())).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].room_number, "101");
    }

    #[test_context(RoomTestContext)]
    #[test]
    fn test_available_between(_ctx: &mut RoomTestContext) {
        let type_id = seed_room_type("Single");
        let mut rooms = Rooms::new().unwrap();
        let mut customers = Customers::new().unwrap();
        let mut bookings = Bookings::new().unwrap();

        let booked = written_id(rooms.create(&Room::new("101", None, None, Some(100.0), type_id)).unwrap());
        let free = written_id(rooms.create(&Room::new("102", None, None, Some(100.0), type_id)).unwrap());
        let customer_id = written_id(customers.create(&Customer::new("Guest", "guest@example.com", None, None, None)).unwrap());

        let start = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        bookings.create_with_detail(customer_id, booked, start, end, 100.0).unwrap();

        // Overlapping interval only offers the free room
        let q_start = NaiveDate::from_ymd_opt(2026, 6, 12).unwrap();
        let q_end = NaiveDate::from_ymd_opt(2026, 6, 13).unwrap();
        let available = rooms.available_between(q_start, q_end).unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, Some(free));

        // A disjoint interval offers both
        let later_start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let later_end = NaiveDate::from_ymd_opt(2026, 7, 5).unwrap();
        assert_eq!(rooms.available_between(later_start, later_end).unwrap().len(), 2);

        assert!(!rooms.is_available(booked, q_start, q_end).unwrap());
        assert!(rooms.is_available(free, q_start, q_end).unwrap());
    }
}
