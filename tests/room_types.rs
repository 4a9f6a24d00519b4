#[cfg(test)]
mod tests {
    use innkeep::db::room_types::RoomTypes;
    use innkeep::db::rooms::Rooms;
    use innkeep::libs::lifecycle::{TypeDeleteOutcome, WriteOutcome};
    use innkeep::libs::room::Room;
    use innkeep::libs::room_type::RoomType;
    use innkeep::libs::validation::ValidationError;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests touching it must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct RoomTypeTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for RoomTypeTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RoomTypeTestContext {
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

    #[test_context(RoomTypeTestContext)]
    #[test]
    fn test_room_type_create_and_list(_ctx: &mut RoomTypeTestContext) {
        let mut room_types = RoomTypes::new().unwrap();

        let id = written_id(
            room_types
                .create(&RoomType::new("Deluxe", Some("Sea view".to_string()), Some("top floor".to_string())))
                .unwrap(),
        );

        let stored = room_types.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.name, "Deluxe");
        assert_eq!(stored.description.as_deref(), Some("Sea view"));

        assert_eq!(room_types.list().unwrap().len(), 1);
    }

    #[test_context(RoomTypeTestContext)]
    #[test]
    fn test_room_type_name_required(_ctx: &mut RoomTypeTestContext) {
        let mut room_types = RoomTypes::new().unwrap();

        let outcome = room_types.create(&RoomType::new("   ", None, None)).unwrap();
        assert!(matches!(outcome, WriteOutcome::Invalid(ValidationError::TypeNameMissing)));
    }

    #[test_context(RoomTypeTestContext)]
    #[test]
    fn test_room_type_update(_ctx: &mut RoomTypeTestContext) {
        let mut room_types = RoomTypes::new().unwrap();

        let id = written_id(room_types.create(&RoomType::new("Standard", None, None)).unwrap());

        let mut stored = room_types.get_by_id(id).unwrap().unwrap();
        stored.name = "Standard Plus".to_string();
        stored.note = Some("renovated 2026".to_string());
        assert_eq!(room_types.update(&stored).unwrap(), WriteOutcome::Written(id));

        let reread = room_types.get_by_id(id).unwrap().unwrap();
        assert_eq!(reread.name, "Standard Plus");
        assert_eq!(reread.note.as_deref(), Some("renovated 2026"));
    }

    #[test_context(RoomTypeTestContext)]
    #[test]
    fn test_room_type_delete_refused_while_in_use(_ctx: &mut RoomTypeTestContext) {
        let mut room_types = RoomTypes::new().unwrap();
        let mut rooms = Rooms::new().unwrap();

        let id = written_id(room_types.create(&RoomType::new("Suite", None, None)).unwrap());
        written_id(rooms.create(&Room::new("301", None, None, None, id)).unwrap());
        written_id(rooms.create(&Room::new("302", None, None, None, id)).unwrap());

        assert_eq!(room_types.delete(id).unwrap(), TypeDeleteOutcome::InUse(2));
        assert!(room_types.get_by_id(id).unwrap().is_some());

        // Once the rooms are gone the delete goes through
        for room in rooms.fetch(innkeep::libs::room::RoomFilter::All).unwrap() {
            rooms.delete(room.id.unwrap()).unwrap();
        }
        assert_eq!(room_types.delete(id).unwrap(), TypeDeleteOutcome::Deleted);
        assert!(room_types.get_by_id(id).unwrap().is_none());
    }

    #[test_context(RoomTypeTestContext)]
    #[test]
    fn test_room_type_delete_missing(_ctx: &mut RoomTypeTestContext) {
        let mut room_types = RoomTypes::new().unwrap();
        assert_eq!(room_types.delete(99).unwrap(), TypeDeleteOutcome::NotFound);
    }

    #[test_context(RoomTypeTestContext)]
    #[test]
    fn test_room_type_search(_ctx: &mut RoomTypeTestContext) {
        let mut room_types = RoomTypes::new().unwrap();

        written_id(room_types.create(&RoomType::new("Family Suite", None, None)).unwrap());
        written_id(room_types.create(&RoomType::new("Single", Some("one bed".to_string()), None)).unwrap());

        let by_name = room_types.search("suite").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Family Suite");

        let by_description = room_types.search("one bed").unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Single");
    }
}
