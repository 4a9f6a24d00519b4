#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use innkeep::db::bookings::Bookings;
    use innkeep::db::customers::Customers;
    use innkeep::db::room_types::RoomTypes;
    use innkeep::db::rooms::Rooms;
    use innkeep::libs::booking::BookingOutcome;
    use innkeep::libs::customer::Customer;
    use innkeep::libs::export::{ExportData, ExportFormat, Exporter};
    use innkeep::libs::lifecycle::WriteOutcome;
    use innkeep::libs::room::Room;
    use innkeep::libs::room_type::RoomType;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests touching it must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ExportTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { _guard: guard, temp_dir }
        }
    }

    fn written_id(outcome: WriteOutcome) -> i32 {
        match outcome {
            WriteOutcome::Written(id) => id,
            other => panic!("expected Written, got {:?}", other),
        }
    }

    /// One customer, one room and one two-night reservation.
    fn seed_data() {
        let mut room_types = RoomTypes::new().unwrap();
        let type_id = written_id(room_types.create(&RoomType::new("Single", None, None)).unwrap());

        let mut rooms = Rooms::new().unwrap();
        let room_id = written_id(rooms.create(&Room::new("101", None, Some(2), Some(100.0), type_id)).unwrap());

        let mut customers = Customers::new().unwrap();
        let customer_id = written_id(customers.create(&Customer::new("Ada Lovelace", "ada@example.com", None, None, None)).unwrap());

        let mut bookings = Bookings::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let outcome = bookings.create_with_detail(customer_id, room_id, start, end, 100.0).unwrap();
        assert!(matches!(outcome, BookingOutcome::Created(_)));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_customers_csv(ctx: &mut ExportTestContext) {
        seed_data();

        let output_path = ctx.temp_dir.path().join("customers.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::Customers).unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("Ada Lovelace"));
        assert!(content.contains("ada@example.com"));
        assert!(content.contains("active"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_bookings_json(ctx: &mut ExportTestContext) {
        seed_data();

        let output_path = ctx.temp_dir.path().join("bookings.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(ExportData::Bookings).unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        let stays: serde_json::Value = serde_json::from_str(&content).unwrap();

        let stays = stays.as_array().unwrap();
        assert_eq!(stays.len(), 1);
        assert_eq!(stays[0]["customer"], "Ada Lovelace");
        assert_eq!(stays[0]["nights"], 2);
        assert_eq!(stays[0]["reservation_total"], 200.0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_rooms_excel(ctx: &mut ExportTestContext) {
        seed_data();

        let output_path = ctx.temp_dir.path().join("rooms.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter.export(ExportData::Rooms).unwrap();

        assert!(output_path.exists());
        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_csv_writes_one_file_per_type(ctx: &mut ExportTestContext) {
        seed_data();

        let output_path = ctx.temp_dir.path().join("dump.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::All).unwrap();

        for suffix in ["customers", "rooms", "bookings"] {
            let path = ctx.temp_dir.path().join(format!("dump_{}.csv", suffix));
            assert!(path.exists(), "missing {}", path.display());
        }

        // Only the suffixed files are written; the requested stem itself is not
        assert!(!output_path.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_json_nests_sections(ctx: &mut ExportTestContext) {
        seed_data();

        let output_path = ctx.temp_dir.path().join("dump.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(ExportData::All).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let combined: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(combined["customers"].is_array());
        assert!(combined["rooms"].is_array());
        assert!(combined["bookings"].is_array());
    }
}
